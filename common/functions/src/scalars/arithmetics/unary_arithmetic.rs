// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

use common_datablocks::DataBlock;
use common_datavalues::prelude::*;
use common_datavalues::unary_arithmetic_coercion;
use common_exception::Result;

use super::utils::assert_unary_arguments;
use crate::scalars::ArithmeticBitNotFunction;
use crate::scalars::ArithmeticNegateFunction;
use crate::scalars::Function;

/// The single-argument dispatcher: same skeleton as the binary one, one
/// candidate axis narrower and with no date overlay.
#[derive(Clone)]
pub struct UnaryArithmeticFunction {
    op: DataValueUnaryOperator,
    display_name: String,
}

impl UnaryArithmeticFunction {
    pub fn try_create_func(
        op: DataValueUnaryOperator,
        display_name: &str,
    ) -> Result<Box<dyn Function>> {
        Ok(Box::new(Self {
            op,
            display_name: display_name.to_string(),
        }))
    }
}

impl Function for UnaryArithmeticFunction {
    fn name(&self) -> &str {
        &self.display_name
    }

    fn num_arguments(&self) -> usize {
        1
    }

    fn return_type(&self, args: &[DataType]) -> Result<DataType> {
        assert_unary_arguments(self.op, args.len())?;
        unary_arithmetic_coercion(&self.op, &args[0])
    }

    fn execute(&self, block: &mut DataBlock, arguments: &[usize], result: usize) -> Result<()> {
        assert_unary_arguments(self.op, arguments.len())?;

        let arg = block.get_by_position(arguments[0])?;
        let result_type = unary_arithmetic_coercion(&self.op, arg.data_type())?;

        let column = match self.op {
            DataValueUnaryOperator::Negate => ArithmeticNegateFunction::eval(&arg)?,
            DataValueUnaryOperator::BitNot => ArithmeticBitNotFunction::eval(&arg)?,
        };

        let field = DataField::new(
            &format!("{}({})", self.op, arg.field().name()),
            result_type,
        );
        block.set_column(result, field, column)
    }
}

impl fmt::Display for UnaryArithmeticFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.op)
    }
}
