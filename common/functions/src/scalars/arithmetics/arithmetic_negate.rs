// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use common_datavalues::prelude::*;
use common_datavalues::with_match_primitive_type;
use common_datavalues::ResultTypeOfUnary;
use common_exception::Result;
use num::traits::AsPrimitive;

use super::utils::unsupported_unary_arithmetic;
use super::utils::NegateValue;
use crate::scalars::function_factory::FunctionDescription;
use crate::scalars::function_factory::FunctionFeatures;
use crate::scalars::scalar_unary_op;
use crate::scalars::Function;
use crate::scalars::UnaryArithmeticFunction;

pub struct ArithmeticNegateFunction;

impl ArithmeticNegateFunction {
    pub fn try_create_func(display_name: &str) -> Result<Box<dyn Function>> {
        UnaryArithmeticFunction::try_create_func(DataValueUnaryOperator::Negate, display_name)
    }

    pub fn desc() -> FunctionDescription {
        FunctionDescription::creator(Box::new(Self::try_create_func))
            .features(FunctionFeatures::default().deterministic().num_arguments(1))
    }

    /// Negation widens one step and always lands signed, so every unsigned
    /// input has an exact negation; only the widest signed minimum wraps.
    pub fn eval(arg: &ColumnWithField) -> Result<ColumnRef> {
        with_match_primitive_type!(arg.data_type(), |$T| {
            type O = <$T as ResultTypeOfUnary>::Negate;
            scalar_unary_op::<$T, O, _>(arg.column(), |a| {
                AsPrimitive::<O>::as_(a).negate_value()
            })
        }, {
            unsupported_unary_arithmetic(DataValueUnaryOperator::Negate, arg)
        })
    }
}
