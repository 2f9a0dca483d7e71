// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use common_datavalues::prelude::*;
use common_exception::Result;

use crate::scalars::scalar_function_test::col;
use crate::scalars::scalar_function_test::test_scalar_functions;
use crate::scalars::scalar_function_test::ScalarFunctionTest;

#[test]
fn test_multiply_function() -> Result<()> {
    let tests = vec![
        ScalarFunctionTest {
            name: "u8-times-u8-widens",
            columns: vec![
                col("a", DataType::UInt8, Series::from_data(vec![16u8, 255])),
                col("b", DataType::UInt8, Series::from_data(vec![16u8, 255])),
            ],
            expect: Series::from_data(vec![256u16, 65025]),
            expect_type: DataType::UInt16,
            error: "",
        },
        ScalarFunctionTest {
            name: "signed-unsigned-mix",
            columns: vec![
                col("a", DataType::Int16, Series::from_data(vec![-300i16, 2])),
                col("b", DataType::UInt16, Series::constant(100u16, 2)),
            ],
            expect: Series::from_data(vec![-30000i32, 200]),
            expect_type: DataType::Int32,
            error: "",
        },
        ScalarFunctionTest {
            name: "float-multiply",
            columns: vec![
                col("a", DataType::Float64, Series::from_data(vec![1.5f64, -2.0])),
                col("b", DataType::Int32, Series::constant(4i32, 2)),
            ],
            expect: Series::from_data(vec![6.0f64, -8.0]),
            expect_type: DataType::Float64,
            error: "",
        },
        ScalarFunctionTest {
            name: "times-one-is-identity",
            columns: vec![
                col(
                    "a",
                    DataType::Int64,
                    Series::from_data(vec![i64::MIN, -7, 0, i64::MAX]),
                ),
                col("one", DataType::UInt8, Series::constant(1u8, 4)),
            ],
            expect: Series::from_data(vec![i64::MIN, -7, 0, i64::MAX]),
            expect_type: DataType::Int64,
            error: "",
        },
    ];

    test_scalar_functions("multiply", &tests)
}
