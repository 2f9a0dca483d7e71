// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use common_datavalues::prelude::*;
use common_exception::Result;

use crate::scalars::scalar_function_test::col;
use crate::scalars::scalar_function_test::test_scalar_functions;
use crate::scalars::scalar_function_test::ScalarFunctionTest;

#[test]
fn test_plus_function() -> Result<()> {
    let tests = vec![
        ScalarFunctionTest {
            name: "u8-plus-const-u8-widens",
            columns: vec![
                col("a", DataType::UInt8, Series::from_data(vec![1u8, 2, 3])),
                col("b", DataType::UInt8, Series::constant(250u8, 3)),
            ],
            expect: Series::from_data(vec![251u16, 252, 253]),
            expect_type: DataType::UInt16,
            error: "",
        },
        ScalarFunctionTest {
            name: "i32-min-plus-minus-one-does-not-wrap",
            columns: vec![
                col("a", DataType::Int32, Series::from_data(vec![i32::MIN, 0, 5])),
                col("b", DataType::Int32, Series::constant(-1i32, 3)),
            ],
            expect: Series::from_data(vec![i32::MIN as i64 - 1, -1, 4]),
            expect_type: DataType::Int64,
            error: "",
        },
        ScalarFunctionTest {
            name: "mixed-sign-plus",
            columns: vec![
                col("a", DataType::UInt32, Series::from_data(vec![4000000000u32, 7])),
                col("b", DataType::Int8, Series::from_data(vec![-1i8, 1])),
            ],
            expect: Series::from_data(vec![3999999999i64, 8]),
            expect_type: DataType::Int64,
            error: "",
        },
        ScalarFunctionTest {
            name: "float-plus-integer-goes-double",
            columns: vec![
                col("a", DataType::Float32, Series::from_data(vec![1.5f32, -0.5])),
                col("b", DataType::UInt8, Series::from_data(vec![1u8, 2])),
            ],
            expect: Series::from_data(vec![2.5f64, 1.5]),
            expect_type: DataType::Float64,
            error: "",
        },
        ScalarFunctionTest {
            name: "date-plus-days",
            columns: vec![
                col("d", DataType::Date, Series::from_data(vec![19723u16, 19732])),
                col("n", DataType::Int32, Series::constant(9i32, 2)),
            ],
            expect: Series::from_data(vec![19732u16, 19741]),
            expect_type: DataType::Date,
            error: "",
        },
        ScalarFunctionTest {
            name: "integer-plus-datetime",
            columns: vec![
                col("n", DataType::UInt32, Series::from_data(vec![60u32, 3600])),
                col("t", DataType::DateTime, Series::constant(1704067200u32, 2)),
            ],
            expect: Series::from_data(vec![1704067260u32, 1704070800]),
            expect_type: DataType::DateTime,
            error: "",
        },
        ScalarFunctionTest {
            name: "date-plus-date-is-invalid",
            columns: vec![
                col("a", DataType::Date, Series::from_data(vec![1u16])),
                col("b", DataType::Date, Series::from_data(vec![2u16])),
            ],
            expect: Series::from_data(vec![0i32]),
            expect_type: DataType::Int32,
            error: "Unsupported date arithmetic",
        },
    ];

    test_scalar_functions("plus", &tests)
}

#[test]
fn test_plus_zero_is_identity() -> Result<()> {
    let tests = vec![
        ScalarFunctionTest {
            name: "u64-plus-zero",
            columns: vec![
                col("a", DataType::UInt64, Series::from_data(vec![0u64, 1, 7, u64::MAX])),
                col("z", DataType::UInt8, Series::constant(0u8, 4)),
            ],
            expect: Series::from_data(vec![0u64, 1, 7, u64::MAX]),
            expect_type: DataType::UInt64,
            error: "",
        },
        ScalarFunctionTest {
            name: "i64-plus-zero",
            columns: vec![
                col("a", DataType::Int64, Series::from_data(vec![i64::MIN, -1, 0, i64::MAX])),
                col("z", DataType::UInt8, Series::constant(0u8, 4)),
            ],
            expect: Series::from_data(vec![i64::MIN, -1, 0, i64::MAX]),
            expect_type: DataType::Int64,
            error: "",
        },
        ScalarFunctionTest {
            name: "f64-plus-zero",
            columns: vec![
                col("a", DataType::Float64, Series::from_data(vec![-1.25f64, 0.0, 3.5])),
                col("z", DataType::UInt8, Series::constant(0u8, 3)),
            ],
            expect: Series::from_data(vec![-1.25f64, 0.0, 3.5]),
            expect_type: DataType::Float64,
            error: "",
        },
    ];

    test_scalar_functions("plus", &tests)
}
