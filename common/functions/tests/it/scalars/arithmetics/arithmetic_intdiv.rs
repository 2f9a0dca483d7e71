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

fn eval_binary(op: &str, lhs: ColumnWithField, rhs: ColumnWithField) -> Result<ColumnWithField> {
    let func = FunctionFactory::instance().get(op)?;
    let schema = DataSchemaRefExt::create(vec![lhs.field().clone(), rhs.field().clone()]);
    let mut block = DataBlock::create(schema, vec![lhs.column().clone(), rhs.column().clone()]);
    func.execute(&mut block, &[0, 1], 2)?;
    block.get_by_position(2)
}

#[test]
fn test_intdiv_function() -> Result<()> {
    let tests = vec![
        ScalarFunctionTest {
            name: "u64-by-constant-u32",
            columns: vec![
                col("a", DataType::UInt64, Series::from_data((10u64..=25).collect::<Vec<_>>())),
                col("b", DataType::UInt32, Series::constant(3u32, 16)),
            ],
            expect: Series::from_data(vec![3u64, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 7, 7, 7, 8, 8]),
            expect_type: DataType::UInt64,
            error: "",
        },
        ScalarFunctionTest {
            name: "i32-min-by-constant-minus-one-faults",
            columns: vec![
                col(
                    "a",
                    DataType::Int32,
                    Series::from_data(vec![i32::MIN, -1, 7, 1000000]),
                ),
                col("b", DataType::Int32, Series::constant(-1i32, 4)),
            ],
            expect: Series::from_data(vec![0i64]),
            expect_type: DataType::Int64,
            error: "Division of minimal signed number by minus one",
        },
        ScalarFunctionTest {
            name: "by-constant-minus-one-negates",
            columns: vec![
                col("a", DataType::Int64, Series::from_data(vec![-9i64, 0, 12])),
                col("b", DataType::Int8, Series::constant(-1i8, 3)),
            ],
            expect: Series::from_data(vec![9i64, 0, -12]),
            expect_type: DataType::Int64,
            error: "",
        },
        ScalarFunctionTest {
            name: "by-constant-one-is-identity",
            columns: vec![
                col("a", DataType::UInt32, Series::from_data(vec![0u32, 1, u32::MAX])),
                col("b", DataType::UInt8, Series::constant(1u8, 3)),
            ],
            expect: Series::from_data(vec![0u64, 1, u32::MAX as u64]),
            expect_type: DataType::UInt64,
            error: "",
        },
        ScalarFunctionTest {
            name: "by-constant-zero-faults",
            columns: vec![
                col("a", DataType::UInt64, Series::from_data(vec![1u64, 2])),
                col("b", DataType::UInt32, Series::constant(0u32, 2)),
            ],
            expect: Series::from_data(vec![0u64]),
            expect_type: DataType::UInt64,
            error: "Division by zero",
        },
        ScalarFunctionTest {
            name: "vector-by-vector",
            columns: vec![
                col("a", DataType::Int64, Series::from_data(vec![100i64, -100, 17])),
                col("b", DataType::Int64, Series::from_data(vec![7i64, 7, -5])),
            ],
            expect: Series::from_data(vec![14i64, -14, -3]),
            expect_type: DataType::Int64,
            error: "",
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
            name: "float-operand-projects-to-integer",
            columns: vec![
                col("a", DataType::Float64, Series::from_data(vec![7.9f64, -7.9])),
                col("b", DataType::Int32, Series::constant(2i32, 2)),
            ],
            expect: Series::from_data(vec![3i64, -3]),
            expect_type: DataType::Int64,
            error: "",
        },
        ScalarFunctionTest {
            name: "narrow-integers-widen",
            columns: vec![
                col("a", DataType::UInt8, Series::from_data(vec![250u8, 7])),
                col("b", DataType::UInt8, Series::from_data(vec![2u8, 3])),
            ],
            expect: Series::from_data(vec![125u16, 2]),
            expect_type: DataType::UInt16,
            error: "",
        },
    ];

    test_scalar_functions("intDiv", &tests)
}

#[test]
fn test_intdiv_fast_path_parity_unsigned() -> Result<()> {
    let mut values: Vec<u64> = vec![
        0,
        1,
        2,
        3,
        100,
        1 << 31,
        1 << 32,
        (1 << 63) + 7,
        u64::MAX - 1,
        u64::MAX,
    ];
    let mut state = 0x9E3779B97F4A7C15u64;
    for _ in 0..61 {
        values.push(lcg(&mut state));
    }

    for divisor in [2u32, 3, 7, 10, 16, 1000, u32::MAX] {
        let result = eval_binary(
            "intDiv",
            col("a", DataType::UInt64, Series::from_data(values.clone())),
            col("b", DataType::UInt32, Series::constant(divisor, values.len())),
        )?;
        assert_eq!(result.data_type(), &DataType::UInt64);
        for (row, &a) in values.iter().enumerate() {
            assert_eq!(
                result.column().get(row).as_u64()?,
                a / divisor as u64,
                "{} div {}",
                a,
                divisor
            );
        }
    }
    Ok(())
}

#[test]
fn test_intdiv_fast_path_parity_signed() -> Result<()> {
    let mut values: Vec<i64> = vec![
        0,
        1,
        -1,
        2,
        -2,
        100,
        -100,
        i64::MAX,
        i64::MIN,
        i64::MIN + 1,
    ];
    let mut state = 0xD1B54A32D192ED03u64;
    for _ in 0..61 {
        values.push(lcg(&mut state) as i64);
    }

    for divisor in [2i32, -2, 3, -3, 7, -7, 1000, i32::MAX, i32::MIN] {
        let result = eval_binary(
            "intDiv",
            col("a", DataType::Int64, Series::from_data(values.clone())),
            col("b", DataType::Int32, Series::constant(divisor, values.len())),
        )?;
        assert_eq!(result.data_type(), &DataType::Int64);
        for (row, &a) in values.iter().enumerate() {
            assert_eq!(
                result.column().get(row).as_i64()?,
                a / divisor as i64,
                "{} div {}",
                a,
                divisor
            );
        }
    }
    Ok(())
}
