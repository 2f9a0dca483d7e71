// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use common_datavalues::prelude::*;
use common_datavalues::with_match_integer_type;
use common_datavalues::ResultTypeOfBitwise;
use common_exception::ErrorCode;
use common_exception::Result;
use num::traits::AsPrimitive;

use super::utils::unsupported_arithmetic;
use super::utils::unsupported_unary_arithmetic;
use crate::scalars::function_factory::FunctionDescription;
use crate::scalars::function_factory::FunctionFeatures;
use crate::scalars::scalar_binary_op;
use crate::scalars::scalar_unary_op;
use crate::scalars::BinaryArithmeticFunction;
use crate::scalars::Function;
use crate::scalars::UnaryArithmeticFunction;

macro_rules! bit_function {
    ($struct_name:ident, $op:ident) => {
        pub struct $struct_name;

        impl $struct_name {
            pub fn try_create_func(display_name: &str) -> Result<Box<dyn Function>> {
                BinaryArithmeticFunction::try_create_func(
                    DataValueBinaryOperator::$op,
                    display_name,
                )
            }

            pub fn desc() -> FunctionDescription {
                FunctionDescription::creator(Box::new(Self::try_create_func))
                    .features(FunctionFeatures::default().deterministic().num_arguments(2))
            }
        }
    };
}

bit_function!(ArithmeticBitAndFunction, BitAnd);
bit_function!(ArithmeticBitOrFunction, BitOr);
bit_function!(ArithmeticBitXorFunction, BitXor);
bit_function!(ArithmeticBitShiftLeftFunction, BitShiftLeft);
bit_function!(ArithmeticBitShiftRightFunction, BitShiftRight);

/// Bitwise kernels over integer operands, both cast to the result width.
/// Shift amounts are masked modulo the result's bit width.
pub fn eval_bitwise(
    op: &DataValueBinaryOperator,
    lhs: &ColumnWithField,
    rhs: &ColumnWithField,
) -> Result<ColumnRef> {
    with_match_integer_type!(lhs.data_type(), |$L| {
        with_match_integer_type!(rhs.data_type(), |$R| {
            type O = <($L, $R) as ResultTypeOfBitwise>::Bitwise;
            match op {
                DataValueBinaryOperator::BitAnd => {
                    scalar_binary_op::<$L, $R, O, _>(lhs.column(), rhs.column(), |a, b| {
                        AsPrimitive::<O>::as_(a) & AsPrimitive::<O>::as_(b)
                    })
                }
                DataValueBinaryOperator::BitOr => {
                    scalar_binary_op::<$L, $R, O, _>(lhs.column(), rhs.column(), |a, b| {
                        AsPrimitive::<O>::as_(a) | AsPrimitive::<O>::as_(b)
                    })
                }
                DataValueBinaryOperator::BitXor => {
                    scalar_binary_op::<$L, $R, O, _>(lhs.column(), rhs.column(), |a, b| {
                        AsPrimitive::<O>::as_(a) ^ AsPrimitive::<O>::as_(b)
                    })
                }
                DataValueBinaryOperator::BitShiftLeft => {
                    scalar_binary_op::<$L, $R, O, _>(lhs.column(), rhs.column(), |a, b| {
                        AsPrimitive::<O>::as_(a).wrapping_shl(AsPrimitive::<u32>::as_(b))
                    })
                }
                DataValueBinaryOperator::BitShiftRight => {
                    scalar_binary_op::<$L, $R, O, _>(lhs.column(), rhs.column(), |a, b| {
                        AsPrimitive::<O>::as_(a).wrapping_shr(AsPrimitive::<u32>::as_(b))
                    })
                }
                _ => Err(ErrorCode::LogicalError(format!(
                    "Operator {} is not a bitwise operator",
                    op
                ))),
            }
        }, {
            unsupported_arithmetic(lhs, *op, rhs)
        })
    }, {
        unsupported_arithmetic(lhs, *op, rhs)
    })
}

pub struct ArithmeticBitNotFunction;

impl ArithmeticBitNotFunction {
    pub fn try_create_func(display_name: &str) -> Result<Box<dyn Function>> {
        UnaryArithmeticFunction::try_create_func(DataValueUnaryOperator::BitNot, display_name)
    }

    pub fn desc() -> FunctionDescription {
        FunctionDescription::creator(Box::new(Self::try_create_func))
            .features(FunctionFeatures::default().deterministic().num_arguments(1))
    }

    pub fn eval(arg: &ColumnWithField) -> Result<ColumnRef> {
        with_match_integer_type!(arg.data_type(), |$T| {
            scalar_unary_op::<$T, $T, _>(arg.column(), |a| !a)
        }, {
            unsupported_unary_arithmetic(DataValueUnaryOperator::BitNot, arg)
        })
    }
}
