// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use common_datablocks::DataBlock;
use common_datavalues::prelude::*;
use common_exception::Result;
use common_functions::scalars::FunctionFactory;

use crate::scalars::scalar_function_test::col;
use crate::scalars::scalar_function_test::lcg;
use crate::scalars::scalar_function_test::test_scalar_functions;
use crate::scalars::scalar_function_test::ScalarFunctionTest;

#[test]
fn test_modulo_function() -> Result<()> {
    let tests = vec![
        ScalarFunctionTest {
            name: "remainder-follows-the-dividend-sign",
            columns: vec![
                col(
                    "a",
                    DataType::Int64,
                    Series::from_data(vec![-7i64, -6, -5, -1, 0, 1, 5, 6, 7]),
                ),
                col("b", DataType::Int32, Series::constant(3i32, 9)),
            ],
            expect: Series::from_data(vec![-1i64, 0, -2, -1, 0, 1, 2, 0, 1]),
            expect_type: DataType::Int64,
            error: "",
        },
        ScalarFunctionTest {
            name: "u64-by-constant-u32",
            columns: vec![
                col(
                    "a",
                    DataType::UInt64,
                    Series::from_data(vec![0u64, 1, 2, 3, 4, 5, u64::MAX]),
                ),
                col("b", DataType::UInt32, Series::constant(3u32, 7)),
            ],
            expect: Series::from_data(vec![0u64, 1, 2, 0, 1, 2, 0]),
            expect_type: DataType::UInt64,
            error: "",
        },
        ScalarFunctionTest {
            name: "by-constant-one-is-zero",
            columns: vec![
                col("a", DataType::UInt64, Series::from_data(vec![0u64, 7, u64::MAX])),
                col("b", DataType::UInt8, Series::constant(1u8, 3)),
            ],
            expect: Series::from_data(vec![0u64, 0, 0]),
            expect_type: DataType::UInt64,
            error: "",
        },
        ScalarFunctionTest {
            name: "signed-by-constant-minus-one-is-zero",
            columns: vec![
                col(
                    "a",
                    DataType::Int64,
                    Series::from_data(vec![i64::MIN, -7, 0, 7, i64::MAX]),
                ),
                col("b", DataType::Int32, Series::constant(-1i32, 5)),
            ],
            expect: Series::from_data(vec![0i64, 0, 0, 0, 0]),
            expect_type: DataType::Int64,
            error: "",
        },
        ScalarFunctionTest {
            name: "by-constant-zero-faults",
            columns: vec![
                col("a", DataType::Int64, Series::from_data(vec![1i64, 2])),
                col("b", DataType::Int32, Series::constant(0i32, 2)),
            ],
            expect: Series::from_data(vec![0i64]),
            expect_type: DataType::Int64,
            error: "Division by zero",
        },
        ScalarFunctionTest {
            name: "narrow-signed-min-by-minus-one-faults",
            columns: vec![
                col("a", DataType::Int8, Series::from_data(vec![5i8, i8::MIN])),
                col("b", DataType::Int8, Series::constant(-1i8, 2)),
            ],
            expect: Series::from_data(vec![0i8]),
            expect_type: DataType::Int8,
            error: "Division of minimal signed number by minus one",
        },
        ScalarFunctionTest {
            name: "vector-by-vector-min-by-minus-one-faults",
            columns: vec![
                col("a", DataType::Int64, Series::from_data(vec![5i64, i64::MIN])),
                col("b", DataType::Int64, Series::from_data(vec![5i64, -1])),
            ],
            expect: Series::from_data(vec![0i64]),
            expect_type: DataType::Int64,
            error: "Division of minimal signed number by minus one",
        },
        ScalarFunctionTest {
            name: "result-projects-from-the-left-operand",
            columns: vec![
                col("a", DataType::UInt8, Series::from_data(vec![250u8, 7])),
                col("b", DataType::Int64, Series::from_data(vec![100i64, 4])),
            ],
            expect: Series::from_data(vec![50u8, 3]),
            expect_type: DataType::UInt8,
            error: "",
        },
        ScalarFunctionTest {
            name: "floating-modulo-is-rejected",
            columns: vec![
                col("a", DataType::Float64, Series::from_data(vec![7.5f64])),
                col("b", DataType::Int32, Series::from_data(vec![2i32])),
            ],
            expect: Series::from_data(vec![0i32]),
            expect_type: DataType::Int32,
            error: "Unsupported arithmetic",
        },
    ];

    test_scalar_functions("modulo", &tests)
}

#[test]
fn test_modulo_fast_path_parity() -> Result<()> {
    let func = FunctionFactory::instance().get("modulo")?;

    let mut values: Vec<i64> = vec![0, 1, -1, 2, -2, 100, -100, i64::MAX, i64::MIN];
    let mut state = 0xA0761D6478BD642Fu64;
    for _ in 0..55 {
        values.push(lcg(&mut state) as i64);
    }

    for divisor in [2i32, -2, 3, -3, 7, -7, 1000, i32::MAX] {
        let schema = DataSchemaRefExt::create(vec![
            DataField::new("a", DataType::Int64),
            DataField::new("b", DataType::Int32),
        ]);
        let mut block = DataBlock::create(schema, vec![
            Series::from_data(values.clone()),
            Series::constant(divisor, values.len()),
        ]);
        func.execute(&mut block, &[0, 1], 2)?;
        let result = block.get_by_position(2)?;
        for (row, &a) in values.iter().enumerate() {
            assert_eq!(
                result.column().get(row).as_i64()?,
                a % divisor as i64,
                "{} % {}",
                a,
                divisor
            );
        }
    }
    Ok(())
}
