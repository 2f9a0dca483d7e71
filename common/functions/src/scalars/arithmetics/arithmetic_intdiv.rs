// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::sync::Arc;

use common_datavalues::prelude::*;
use common_datavalues::with_match_integer_type;
use common_datavalues::with_match_primitive_type;
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
use super::utils::NegateValue;
use crate::scalars::constant_value;
use crate::scalars::function_factory::FunctionDescription;
use crate::scalars::function_factory::FunctionFeatures;
use crate::scalars::try_scalar_binary_op;
use crate::scalars::BinaryArithmeticFunction;
use crate::scalars::Function;

pub struct ArithmeticIntDivFunction;

impl ArithmeticIntDivFunction {
    pub fn try_create_func(display_name: &str) -> Result<Box<dyn Function>> {
        BinaryArithmeticFunction::try_create_func(DataValueBinaryOperator::IntDiv, display_name)
    }

    pub fn desc() -> FunctionDescription {
        FunctionDescription::creator(Box::new(Self::try_create_func))
            .features(FunctionFeatures::default().deterministic().num_arguments(2))
    }

    pub fn eval(lhs: &ColumnWithField, rhs: &ColumnWithField) -> Result<ColumnRef> {
        if let Some(column) = try_intdiv_by_constant(lhs, rhs)? {
            return Ok(column);
        }

        let op = DataValueBinaryOperator::IntDiv;
        if lhs.data_type().is_floating() || rhs.data_type().is_floating() {
            // a floating operand projects the quotient back to an integer
            with_match_primitive_type!(lhs.data_type(), |$L| {
                with_match_primitive_type!(rhs.data_type(), |$R| {
                    type O = <($L, $R) as ResultTypeOfBinary>::IntDiv;
                    try_scalar_binary_op::<$L, $R, O, _>(lhs.column(), rhs.column(), |a, b| {
                        let divisor: f64 = b.as_();
                        if divisor == 0.0 {
                            return Err(ErrorCode::DivisionByZero("Division by zero"));
                        }
                        Ok(AsPrimitive::<O>::as_(AsPrimitive::<f64>::as_(a) / divisor))
                    })
                }, {
                    unsupported_arithmetic(lhs, op, rhs)
                })
            }, {
                unsupported_arithmetic(lhs, op, rhs)
            })
        } else {
            with_match_integer_type!(lhs.data_type(), |$L| {
                with_match_integer_type!(rhs.data_type(), |$R| {
                    type M = <($L, $R) as ResultTypeOfBinary>::LeastSuper;
                    type O = <($L, $R) as ResultTypeOfBinary>::IntDiv;
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
                        // mixed-sign conversion can surface the same trap at
                        // the computing type
                        if is_minus_one(b) && is_signed_min(a) {
                            return Err(ErrorCode::DivisionOverflow(
                                "Division of minimal signed number by minus one",
                            ));
                        }
                        Ok(AsPrimitive::<O>::as_(a / b))
                    })
                }, {
                    unsupported_arithmetic(lhs, op, rhs)
                })
            }, {
                unsupported_arithmetic(lhs, op, rhs)
            })
        }
    }
}

/// The divide-by-constant override table: left widths 32/64 paired with any
/// right operand of the same signedness and no greater width. Everything
/// else falls through to the generic vec x const kernel.
fn try_intdiv_by_constant(
    lhs: &ColumnWithField,
    rhs: &ColumnWithField,
) -> Result<Option<ColumnRef>> {
    if lhs.column().is_const() || !rhs.column().is_const() {
        return Ok(None);
    }

    macro_rules! intdiv_fast {
        ($L:ty, $R:ty) => {
            intdiv_by_constant::<$L, $R, <($L, $R) as ResultTypeOfBinary>::IntDiv>(
                lhs.column(),
                rhs.column(),
            )
            .map(Some)
        };
    }

    match (lhs.data_type(), rhs.data_type()) {
        (DataType::UInt32, DataType::UInt8) => intdiv_fast! {u32, u8},
        (DataType::UInt32, DataType::UInt16) => intdiv_fast! {u32, u16},
        (DataType::UInt32, DataType::UInt32) => intdiv_fast! {u32, u32},
        (DataType::UInt64, DataType::UInt8) => intdiv_fast! {u64, u8},
        (DataType::UInt64, DataType::UInt16) => intdiv_fast! {u64, u16},
        (DataType::UInt64, DataType::UInt32) => intdiv_fast! {u64, u32},
        (DataType::UInt64, DataType::UInt64) => intdiv_fast! {u64, u64},
        (DataType::Int32, DataType::Int8) => intdiv_fast! {i32, i8},
        (DataType::Int32, DataType::Int16) => intdiv_fast! {i32, i16},
        (DataType::Int32, DataType::Int32) => intdiv_fast! {i32, i32},
        (DataType::Int64, DataType::Int8) => intdiv_fast! {i64, i8},
        (DataType::Int64, DataType::Int16) => intdiv_fast! {i64, i16},
        (DataType::Int64, DataType::Int32) => intdiv_fast! {i64, i32},
        (DataType::Int64, DataType::Int64) => intdiv_fast! {i64, i64},
        _ => Ok(None),
    }
}

fn intdiv_by_constant<L, R, O>(lhs: &ColumnRef, rhs: &ColumnRef) -> Result<ColumnRef>
where
    L: PrimitiveType + FastDivide + AsPrimitive<O>,
    R: PrimitiveType + AsPrimitive<L>,
    O: PrimitiveType + NegateValue,
{
    let lhs: &PrimitiveColumn<L> = Series::check_get(lhs)?;
    let b: L = constant_value::<R>(rhs)?.as_();

    if b.is_zero() {
        return Err(ErrorCode::DivisionByZero("Division by zero"));
    }

    // division by minus one is negation, but the minimal signed value still
    // has no negation in its own width
    if is_minus_one(b) {
        if lhs.values().iter().any(|v| is_signed_min(*v)) {
            return Err(ErrorCode::DivisionOverflow(
                "Division of minimal signed number by minus one",
            ));
        }
        let values: Vec<O> = lhs
            .values()
            .iter()
            .map(|v| AsPrimitive::<O>::as_(*v).negate_value())
            .collect();
        return Ok(Arc::new(PrimitiveColumn::new_from_vec(values)));
    }

    if b == L::one() {
        let values: Vec<O> = lhs.values().iter().map(|v| AsPrimitive::<O>::as_(*v)).collect();
        return Ok(Arc::new(PrimitiveColumn::new_from_vec(values)));
    }

    let divider = L::make_divider(b);
    let mut quotients = vec![L::default(); lhs.len()];
    L::div_slice(&divider, lhs.values(), &mut quotients);

    let values: Vec<O> = quotients.iter().map(|q| AsPrimitive::<O>::as_(*q)).collect();
    Ok(Arc::new(PrimitiveColumn::new_from_vec(values)))
}
