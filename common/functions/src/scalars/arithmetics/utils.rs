// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt::Display;

use common_datavalues::prelude::*;
use common_exception::ErrorCode;
use common_exception::Result;
use num::traits::AsPrimitive;
use num::Bounded;

pub fn assert_binary_arguments<D: Display>(name: D, actual: usize) -> Result<()> {
    if actual != 2 {
        return Err(ErrorCode::NumberArgumentsNotMatch(format!(
            "{} expect to have two arguments, but got {}",
            name, actual
        )));
    }
    Ok(())
}

pub fn assert_unary_arguments<D: Display>(name: D, actual: usize) -> Result<()> {
    if actual != 1 {
        return Err(ErrorCode::NumberArgumentsNotMatch(format!(
            "{} expect to have single argument, but got {}",
            name, actual
        )));
    }
    Ok(())
}

pub fn unsupported_arithmetic(
    lhs: &ColumnWithField,
    op: DataValueBinaryOperator,
    rhs: &ColumnWithField,
) -> Result<ColumnRef> {
    Err(ErrorCode::IllegalDataType(format!(
        "DataValue Error: Unsupported arithmetic ({:?}) {} ({:?})",
        lhs.data_type(),
        op,
        rhs.data_type()
    )))
}

pub fn unsupported_unary_arithmetic(
    op: DataValueUnaryOperator,
    arg: &ColumnWithField,
) -> Result<ColumnRef> {
    Err(ErrorCode::IllegalDataType(format!(
        "DataValue Error: Unsupported arithmetic {} ({:?})",
        op,
        arg.data_type()
    )))
}

/// Whether a scalar is the signed integer `-1`. Always false for unsigned
/// and floating operands, so checks can be written once in generic code.
#[inline]
pub fn is_minus_one<T: PrimitiveType>(v: T) -> bool {
    T::SIGNED && !T::FLOATING && AsPrimitive::<f64>::as_(v) == -1.0
}

/// Whether a scalar is its type's signed minimum (the value `idiv` traps on
/// when paired with `-1`).
#[inline]
pub fn is_signed_min<T: PrimitiveType>(v: T) -> bool {
    T::SIGNED && !T::FLOATING && v == T::min_value()
}

/// Wrapping negation over the signed result scalars (floats negate plainly).
pub trait NegateValue {
    fn negate_value(self) -> Self;
}

macro_rules! impl_negate_int {
    ($native:ty) => {
        impl NegateValue for $native {
            #[inline]
            fn negate_value(self) -> Self {
                self.wrapping_neg()
            }
        }
    };
}

macro_rules! impl_negate_float {
    ($native:ty) => {
        impl NegateValue for $native {
            #[inline]
            fn negate_value(self) -> Self {
                -self
            }
        }
    };
}

impl_negate_int!(u8);
impl_negate_int!(u16);
impl_negate_int!(u32);
impl_negate_int!(u64);
impl_negate_int!(i8);
impl_negate_int!(i16);
impl_negate_int!(i32);
impl_negate_int!(i64);
impl_negate_float!(f32);
impl_negate_float!(f64);
