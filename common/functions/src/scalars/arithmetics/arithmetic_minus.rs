// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use common_datavalues::prelude::*;
use common_datavalues::with_match_primitive_type;
use common_datavalues::ResultTypeOfBinary;
use common_exception::Result;
use num::traits::AsPrimitive;

use super::utils::unsupported_arithmetic;
use crate::scalars::function_factory::FunctionDescription;
use crate::scalars::function_factory::FunctionFeatures;
use crate::scalars::scalar_binary_op;
use crate::scalars::BinaryArithmeticFunction;
use crate::scalars::Function;

pub struct ArithmeticMinusFunction;

impl ArithmeticMinusFunction {
    pub fn try_create_func(display_name: &str) -> Result<Box<dyn Function>> {
        BinaryArithmeticFunction::try_create_func(DataValueBinaryOperator::Minus, display_name)
    }

    pub fn desc() -> FunctionDescription {
        FunctionDescription::creator(Box::new(Self::try_create_func))
            .features(FunctionFeatures::default().deterministic().num_arguments(2))
    }

    pub fn eval(lhs: &ColumnWithField, rhs: &ColumnWithField) -> Result<ColumnRef> {
        let op = DataValueBinaryOperator::Minus;
        with_match_primitive_type!(lhs.data_type(), |$L| {
            with_match_primitive_type!(rhs.data_type(), |$R| {
                type O = <($L, $R) as ResultTypeOfBinary>::Minus;
                scalar_binary_op::<$L, $R, O, _>(lhs.column(), rhs.column(), |a, b| {
                    AsPrimitive::<O>::as_(a) - AsPrimitive::<O>::as_(b)
                })
            }, {
                unsupported_arithmetic(lhs, op, rhs)
            })
        }, {
            unsupported_arithmetic(lhs, op, rhs)
        })
    }
}
