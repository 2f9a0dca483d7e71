// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::ops::Mul;
use std::ops::Sub;
use std::sync::Arc;

use common_datavalues::prelude::*;
use common_datavalues::with_match_integer_type;
use common_datavalues::ResultTypeOfBinary;
use common_exception::ErrorCode;
use common_exception::Result;
use num::traits::AsPrimitive;
use num::One;
use num::Zero;

use super::divider::FastDivide;
use super::utils::is_minus_one;
use super::utils::is_signed_min;
use super::utils::unsupported_arithmetic;
use crate::scalars::constant_value;
use crate::scalars::function_factory::FunctionDescription;
use crate::scalars::function_factory::FunctionFeatures;
use crate::scalars::try_scalar_binary_op;
use crate::scalars::BinaryArithmeticFunction;
use crate::scalars::Function;

pub struct ArithmeticModuloFunction;

impl ArithmeticModuloFunction {
    pub fn try_create_func(display_name: &str) -> Result<Box<dyn Function>> {
        BinaryArithmeticFunction::try_create_func(DataValueBinaryOperator::Modulo, display_name)
    }

    pub fn desc() -> FunctionDescription {
        FunctionDescription::creator(Box::new(Self::try_create_func))
            .features(FunctionFeatures::default().deterministic().num_arguments(2))
    }

    /// Remainder with truncated-division semantics: the sign follows the
    /// dividend. Integer operands only; the type check rejects floats.
    pub fn eval(lhs: &ColumnWithField, rhs: &ColumnWithField) -> Result<ColumnRef> {
        if let Some(column) = try_modulo_by_constant(lhs, rhs)? {
            return Ok(column);
        }

        let op = DataValueBinaryOperator::Modulo;
        with_match_integer_type!(lhs.data_type(), |$L| {
            with_match_integer_type!(rhs.data_type(), |$R| {
                type M = <($L, $R) as ResultTypeOfBinary>::LeastSuper;
                type O = <($L, $R) as ResultTypeOfBinary>::Modulo;
                try_scalar_binary_op::<$L, $R, O, _>(lhs.column(), rhs.column(), |a, b| {
                    if b.is_zero() {
                        return Err(ErrorCode::DivisionByZero("Division by zero"));
                    }
                    if is_minus_one(b) && is_signed_min(a) {
                        return Err(ErrorCode::DivisionOverflow(
                            "Division of minimal signed number by minus one",
                        ));
                    }
                    let a: M = a.as_();
                    let b: M = b.as_();
                    if is_minus_one(b) && is_signed_min(a) {
                        return Err(ErrorCode::DivisionOverflow(
                            "Division of minimal signed number by minus one",
                        ));
                    }
                    Ok(AsPrimitive::<O>::as_(a % b))
                })
            }, {
                unsupported_arithmetic(lhs, op, rhs)
            })
        }, {
            unsupported_arithmetic(lhs, op, rhs)
        })
    }
}

/// Modulo-by-constant override over the same cells as the divide override.
/// The remainder is recovered as `a - (a / divider) * b`, one scalar pass.
fn try_modulo_by_constant(
    lhs: &ColumnWithField,
    rhs: &ColumnWithField,
) -> Result<Option<ColumnRef>> {
    if lhs.column().is_const() || !rhs.column().is_const() {
        return Ok(None);
    }

    macro_rules! modulo_fast {
        ($L:ty, $R:ty) => {
            modulo_by_constant::<$L, $R>(lhs.column(), rhs.column()).map(Some)
        };
    }

    match (lhs.data_type(), rhs.data_type()) {
        (DataType::UInt32, DataType::UInt8) => modulo_fast! {u32, u8},
        (DataType::UInt32, DataType::UInt16) => modulo_fast! {u32, u16},
        (DataType::UInt32, DataType::UInt32) => modulo_fast! {u32, u32},
        (DataType::UInt64, DataType::UInt8) => modulo_fast! {u64, u8},
        (DataType::UInt64, DataType::UInt16) => modulo_fast! {u64, u16},
        (DataType::UInt64, DataType::UInt32) => modulo_fast! {u64, u32},
        (DataType::UInt64, DataType::UInt64) => modulo_fast! {u64, u64},
        (DataType::Int32, DataType::Int8) => modulo_fast! {i32, i8},
        (DataType::Int32, DataType::Int16) => modulo_fast! {i32, i16},
        (DataType::Int32, DataType::Int32) => modulo_fast! {i32, i32},
        (DataType::Int64, DataType::Int8) => modulo_fast! {i64, i8},
        (DataType::Int64, DataType::Int16) => modulo_fast! {i64, i16},
        (DataType::Int64, DataType::Int32) => modulo_fast! {i64, i32},
        (DataType::Int64, DataType::Int64) => modulo_fast! {i64, i64},
        _ => Ok(None),
    }
}

fn modulo_by_constant<L, R>(lhs: &ColumnRef, rhs: &ColumnRef) -> Result<ColumnRef>
where
    L: PrimitiveType + FastDivide + Sub<Output = L> + Mul<Output = L>,
    R: PrimitiveType + AsPrimitive<L>,
{
    let lhs: &PrimitiveColumn<L> = Series::check_get(lhs)?;
    let b: L = constant_value::<R>(rhs)?.as_();

    if b.is_zero() {
        return Err(ErrorCode::DivisionByZero("Division by zero"));
    }

    // by one or minus one every remainder is zero
    if b == L::one() || is_minus_one(b) {
        return Ok(Arc::new(PrimitiveColumn::new_from_vec(vec![
            L::default();
            lhs.len()
        ])));
    }

    let divider = L::make_divider(b);
    let values: Vec<L> = lhs
        .values()
        .iter()
        .map(|&a| a - L::div_by(&divider, a) * b)
        .collect();
    Ok(Arc::new(PrimitiveColumn::new_from_vec(values)))
}
