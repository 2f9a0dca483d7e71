// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use common_datavalues::prelude::*;
use common_datavalues::with_match_primitive_type;
use common_datavalues::ResultTypeOfBinary;
use common_exception::ErrorCode;
use common_exception::Result;
use num::traits::AsPrimitive;
use num::Zero;

use super::utils::unsupported_arithmetic;
use crate::scalars::function_factory::FunctionDescription;
use crate::scalars::function_factory::FunctionFeatures;
use crate::scalars::try_scalar_binary_op;
use crate::scalars::BinaryArithmeticFunction;
use crate::scalars::Function;

pub struct ArithmeticDivFunction;

impl ArithmeticDivFunction {
    pub fn try_create_func(display_name: &str) -> Result<Box<dyn Function>> {
        BinaryArithmeticFunction::try_create_func(DataValueBinaryOperator::Div, display_name)
    }

    pub fn desc() -> FunctionDescription {
        FunctionDescription::creator(Box::new(Self::try_create_func))
            .features(FunctionFeatures::default().deterministic().num_arguments(2))
    }

    /// True division always lands on a floating result; the divisor is
    /// checked after conversion to it.
    pub fn eval(lhs: &ColumnWithField, rhs: &ColumnWithField) -> Result<ColumnRef> {
        let op = DataValueBinaryOperator::Div;
        with_match_primitive_type!(lhs.data_type(), |$L| {
            with_match_primitive_type!(rhs.data_type(), |$R| {
                type O = <($L, $R) as ResultTypeOfBinary>::Div;
                try_scalar_binary_op::<$L, $R, O, _>(lhs.column(), rhs.column(), |a, b| {
                    let divisor: O = b.as_();
                    if divisor.is_zero() {
                        return Err(ErrorCode::DivisionByZero("Division by zero"));
                    }
                    Ok(AsPrimitive::<O>::as_(a) / divisor)
                })
            }, {
                unsupported_arithmetic(lhs, op, rhs)
            })
        }, {
            unsupported_arithmetic(lhs, op, rhs)
        })
    }
}
