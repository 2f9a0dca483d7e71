// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

use common_datablocks::DataBlock;
use common_datavalues::binary_arithmetic_coercion;
use common_datavalues::prelude::*;
use common_exception::Result;

use super::arithmetic_bit::eval_bitwise;
use super::arithmetic_date::eval_date_arithmetic;
use super::utils::assert_binary_arguments;
use crate::scalars::ArithmeticDivFunction;
use crate::scalars::ArithmeticIntDivFunction;
use crate::scalars::ArithmeticMinusFunction;
use crate::scalars::ArithmeticModuloFunction;
use crate::scalars::ArithmeticMulFunction;
use crate::scalars::ArithmeticPlusFunction;
use crate::scalars::Function;

/// The two-axis dispatcher: candidate declared types (dates first, then the
/// numerics) crossed with the column shapes of both arguments. The return
/// type and the execution path both go through
/// [`binary_arithmetic_coercion`], so they cannot pick different results.
#[derive(Clone)]
pub struct BinaryArithmeticFunction {
    op: DataValueBinaryOperator,
    display_name: String,
}

impl BinaryArithmeticFunction {
    pub fn try_create_func(
        op: DataValueBinaryOperator,
        display_name: &str,
    ) -> Result<Box<dyn Function>> {
        Ok(Box::new(Self {
            op,
            display_name: display_name.to_string(),
        }))
    }
}

impl Function for BinaryArithmeticFunction {
    fn name(&self) -> &str {
        &self.display_name
    }

    fn num_arguments(&self) -> usize {
        2
    }

    fn return_type(&self, args: &[DataType]) -> Result<DataType> {
        assert_binary_arguments(self.op, args.len())?;
        binary_arithmetic_coercion(&self.op, &args[0], &args[1])
    }

    fn execute(&self, block: &mut DataBlock, arguments: &[usize], result: usize) -> Result<()> {
        assert_binary_arguments(self.op, arguments.len())?;

        let lhs = block.get_by_position(arguments[0])?;
        let rhs = block.get_by_position(arguments[1])?;
        let result_type = binary_arithmetic_coercion(&self.op, lhs.data_type(), rhs.data_type())?;

        let column = if lhs.data_type().is_date_or_date_time()
            || rhs.data_type().is_date_or_date_time()
        {
            eval_date_arithmetic(&self.op, &lhs, &rhs)?
        } else {
            match self.op {
                DataValueBinaryOperator::Plus => ArithmeticPlusFunction::eval(&lhs, &rhs)?,
                DataValueBinaryOperator::Minus => ArithmeticMinusFunction::eval(&lhs, &rhs)?,
                DataValueBinaryOperator::Mul => ArithmeticMulFunction::eval(&lhs, &rhs)?,
                DataValueBinaryOperator::Div => ArithmeticDivFunction::eval(&lhs, &rhs)?,
                DataValueBinaryOperator::IntDiv => ArithmeticIntDivFunction::eval(&lhs, &rhs)?,
                DataValueBinaryOperator::Modulo => ArithmeticModuloFunction::eval(&lhs, &rhs)?,
                DataValueBinaryOperator::BitAnd
                | DataValueBinaryOperator::BitOr
                | DataValueBinaryOperator::BitXor
                | DataValueBinaryOperator::BitShiftLeft
                | DataValueBinaryOperator::BitShiftRight => {
                    eval_bitwise(&self.op, &lhs, &rhs)?
                }
            }
        };

        let field = DataField::new(
            &format!(
                "({} {} {})",
                lhs.field().name(),
                self.op,
                rhs.field().name()
            ),
            result_type,
        );
        block.set_column(result, field, column)
    }
}

impl fmt::Display for BinaryArithmeticFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.op)
    }
}
