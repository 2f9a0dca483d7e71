// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

mod arithmetic_intdiv;
mod arithmetic_modulo;
mod arithmetic_mul;
mod arithmetic_plus;

use common_datablocks::DataBlock;
use common_datavalues::prelude::*;
use common_datavalues::ARITHMETIC_CANDIDATE_TYPES;
use common_exception::Result;
use common_functions::scalars::FunctionFactory;

fn one_row_column(data_type: &DataType) -> ColumnRef {
    match data_type.to_physical_type() {
        DataType::UInt8 => Series::from_data(vec![1u8]),
        DataType::UInt16 => Series::from_data(vec![1u16]),
        DataType::UInt32 => Series::from_data(vec![1u32]),
        DataType::UInt64 => Series::from_data(vec![1u64]),
        DataType::Int8 => Series::from_data(vec![1i8]),
        DataType::Int16 => Series::from_data(vec![1i16]),
        DataType::Int32 => Series::from_data(vec![1i32]),
        DataType::Int64 => Series::from_data(vec![1i64]),
        DataType::Float32 => Series::from_data(vec![1f32]),
        _ => Series::from_data(vec![1f64]),
    }
}

/// `return_type` and `execute` must accept exactly the same type pairs and
/// agree on the result's declared type, for every operator and every pair of
/// candidate types.
#[test]
fn test_return_type_and_execute_agree() -> Result<()> {
    let binary_ops = [
        "plus",
        "minus",
        "multiply",
        "divide",
        "intDiv",
        "modulo",
        "bitAnd",
        "bitOr",
        "bitXor",
        "bitShiftLeft",
        "bitShiftRight",
    ];

    for op in binary_ops {
        let func = FunctionFactory::instance().get(op)?;
        for lhs_type in ARITHMETIC_CANDIDATE_TYPES {
            for rhs_type in ARITHMETIC_CANDIDATE_TYPES {
                let schema = DataSchemaRefExt::create(vec![
                    DataField::new("a", lhs_type),
                    DataField::new("b", rhs_type),
                ]);
                let mut block = DataBlock::create(schema, vec![
                    one_row_column(&lhs_type),
                    one_row_column(&rhs_type),
                ]);

                let declared = func.return_type(&[lhs_type, rhs_type]);
                let executed = func.execute(&mut block, &[0, 1], 2);

                match (&declared, &executed) {
                    (Ok(declared), Ok(())) => {
                        let result = block.get_by_position(2)?;
                        assert_eq!(
                            result.data_type(),
                            declared,
                            "{}({}, {})",
                            op,
                            lhs_type,
                            rhs_type
                        );
                    }
                    (Err(_), Err(_)) => {}
                    _ => panic!(
                        "{}({}, {}): return_type {:?} but execute {:?}",
                        op,
                        lhs_type,
                        rhs_type,
                        declared.is_ok(),
                        executed.is_ok()
                    ),
                }
            }
        }
    }

    let unary_ops = ["negate", "bitNot"];
    for op in unary_ops {
        let func = FunctionFactory::instance().get(op)?;
        for arg_type in ARITHMETIC_CANDIDATE_TYPES {
            let schema = DataSchemaRefExt::create(vec![DataField::new("a", arg_type)]);
            let mut block = DataBlock::create(schema, vec![one_row_column(&arg_type)]);

            let declared = func.return_type(&[arg_type]);
            let executed = func.execute(&mut block, &[0], 1);

            match (&declared, &executed) {
                (Ok(declared), Ok(())) => {
                    let result = block.get_by_position(1)?;
                    assert_eq!(result.data_type(), declared, "{}({})", op, arg_type);
                }
                (Err(_), Err(_)) => {}
                _ => panic!("{}({}): phases disagree", op, arg_type),
            }
        }
    }
    Ok(())
}

#[test]
fn test_factory_round_trip() -> Result<()> {
    let names = [
        "plus",
        "minus",
        "multiply",
        "divide",
        "intDiv",
        "modulo",
        "negate",
        "bitAnd",
        "bitOr",
        "bitXor",
        "bitNot",
        "bitShiftLeft",
        "bitShiftRight",
    ];
    for name in names {
        let func = FunctionFactory::instance().get(name)?;
        assert_eq!(func.name(), name);
    }

    for alias in ["+", "-", "*", "/", "div", "%", "mod", "&", "|", "^", "~", "<<", ">>"] {
        assert!(FunctionFactory::instance().check(alias), "{}", alias);
    }

    assert_eq!(
        FunctionFactory::instance().get_features("plus")?.num_arguments,
        2
    );
    assert_eq!(
        FunctionFactory::instance().get_features("negate")?.num_arguments,
        1
    );
    assert!(FunctionFactory::instance().get("no_such_function").is_err());
    Ok(())
}

/// A constant-folded result must match the vector kernel over materialized
/// constants, value for value.
#[test]
fn test_constant_folding_matches_vector_kernel() -> Result<()> {
    let func = FunctionFactory::instance().get("plus")?;

    let schema = DataSchemaRefExt::create(vec![
        DataField::new("a", DataType::UInt8),
        DataField::new("b", DataType::UInt8),
    ]);
    let mut const_block = DataBlock::create(schema.clone(), vec![
        Series::constant(5u8, 4),
        Series::constant(250u8, 4),
    ]);
    func.execute(&mut const_block, &[0, 1], 2)?;
    let folded = const_block.get_by_position(2)?;
    assert!(folded.column().is_const());
    assert_eq!(folded.column().len(), 4);

    let mut vector_block = DataBlock::create(schema, vec![
        Series::from_data(vec![5u8; 4]),
        Series::from_data(vec![250u8; 4]),
    ]);
    func.execute(&mut vector_block, &[0, 1], 2)?;
    let full = vector_block.get_by_position(2)?;
    assert!(!full.column().is_const());

    for row in 0..4 {
        assert_eq!(folded.column().get(row), full.column().get(row), "row {}", row);
    }
    Ok(())
}
