// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use common_datablocks::DataBlock;
use common_datavalues::prelude::*;
use common_exception::Result;
use common_functions::scalars::FunctionFactory;

pub struct ScalarFunctionTest {
    pub name: &'static str,
    pub columns: Vec<ColumnWithField>,
    pub expect: ColumnRef,
    pub expect_type: DataType,
    pub error: &'static str,
}

pub fn col(name: &str, data_type: DataType, column: ColumnRef) -> ColumnWithField {
    ColumnWithField::new(column, DataField::new(name, data_type))
}

pub fn test_scalar_functions(op: &str, tests: &[ScalarFunctionTest]) -> Result<()> {
    for test in tests {
        test_scalar_function(op, test)?;
    }
    Ok(())
}

fn test_scalar_function(op: &str, test: &ScalarFunctionTest) -> Result<()> {
    let func = FunctionFactory::instance().get(op)?;

    let fields: Vec<DataField> = test.columns.iter().map(|c| c.field().clone()).collect();
    let columns: Vec<ColumnRef> = test.columns.iter().map(|c| c.column().clone()).collect();
    let arg_types: Vec<DataType> = fields.iter().map(|f| *f.data_type()).collect();

    let mut block = DataBlock::create(DataSchemaRefExt::create(fields), columns);
    let arguments: Vec<usize> = (0..test.columns.len()).collect();
    let result_position = test.columns.len();

    let executed = func.return_type(&arg_types).and_then(|return_type| {
        func.execute(&mut block, &arguments, result_position)?;
        Ok(return_type)
    });

    match executed {
        Ok(return_type) => {
            assert_eq!(test.error, "", "{} expected to fail but succeeded", test.name);
            assert_eq!(return_type, test.expect_type, "{}: return type", test.name);

            let result = block.get_by_position(result_position)?;
            assert_eq!(
                result.data_type(),
                &test.expect_type,
                "{}: result field type",
                test.name
            );
            assert_eq!(
                result.column().len(),
                test.expect.len(),
                "{}: result length",
                test.name
            );
            for row in 0..test.expect.len() {
                assert_eq!(
                    result.column().get(row),
                    test.expect.get(row),
                    "{}: row {}",
                    test.name,
                    row
                );
            }
        }
        Err(cause) => {
            assert!(
                !test.error.is_empty(),
                "{}: unexpected error: {}",
                test.name,
                cause
            );
            assert!(
                cause.message().contains(test.error),
                "{}: expected error \"{}\", got \"{}\"",
                test.name,
                test.error,
                cause.message()
            );
        }
    }
    Ok(())
}

/// A deterministic value stream for randomized corpora.
pub fn lcg(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state
}
