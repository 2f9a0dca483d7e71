// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use common_datavalues::prelude::*;
use common_datavalues::with_match_integer_type;
use common_exception::ErrorCode;
use common_exception::Result;
use num::traits::AsPrimitive;

use crate::scalars::scalar_binary_op;

/// The date overlay: `Date* + Integer`, `Integer + Date*`, `Date* - Integer`
/// and same-type date differences. Kernels run on the storage scalars
/// (`u16` days, `u32` seconds) with wrapping arithmetic; differences come
/// out as `Int32`.
pub fn eval_date_arithmetic(
    op: &DataValueBinaryOperator,
    lhs: &ColumnWithField,
    rhs: &ColumnWithField,
) -> Result<ColumnRef> {
    let lhs_type = lhs.data_type();
    let rhs_type = rhs.data_type();

    let error_fn = || -> Result<ColumnRef> {
        Err(ErrorCode::IllegalDataType(format!(
            "DataValue Error: Unsupported date arithmetic ({:?}) {} ({:?})",
            lhs_type, op, rhs_type
        )))
    };

    match op {
        DataValueBinaryOperator::Plus => {
            if lhs_type.is_date_or_date_time() && rhs_type.is_integer() {
                date_plus_integer(lhs, rhs)
            } else if lhs_type.is_integer() && rhs_type.is_date_or_date_time() {
                integer_plus_date(lhs, rhs)
            } else {
                error_fn()
            }
        }
        DataValueBinaryOperator::Minus => {
            if !lhs_type.is_date_or_date_time() {
                return error_fn();
            }
            if lhs_type == rhs_type {
                date_difference(lhs, rhs)
            } else if rhs_type.is_integer() {
                date_minus_integer(lhs, rhs)
            } else {
                error_fn()
            }
        }
        _ => error_fn(),
    }
}

fn date_plus_integer(lhs: &ColumnWithField, rhs: &ColumnWithField) -> Result<ColumnRef> {
    match lhs.data_type() {
        DataType::Date => with_match_integer_type!(rhs.data_type(), |$R| {
            scalar_binary_op::<u16, $R, u16, _>(lhs.column(), rhs.column(), |a, b| {
                a.wrapping_add(AsPrimitive::<u16>::as_(b))
            })
        }, {
            Err(ErrorCode::LogicalError("Date overlay reached with a non-integer operand"))
        }),
        _ => with_match_integer_type!(rhs.data_type(), |$R| {
            scalar_binary_op::<u32, $R, u32, _>(lhs.column(), rhs.column(), |a, b| {
                a.wrapping_add(AsPrimitive::<u32>::as_(b))
            })
        }, {
            Err(ErrorCode::LogicalError("Date overlay reached with a non-integer operand"))
        }),
    }
}

fn integer_plus_date(lhs: &ColumnWithField, rhs: &ColumnWithField) -> Result<ColumnRef> {
    match rhs.data_type() {
        DataType::Date => with_match_integer_type!(lhs.data_type(), |$L| {
            scalar_binary_op::<$L, u16, u16, _>(lhs.column(), rhs.column(), |a, b| {
                b.wrapping_add(AsPrimitive::<u16>::as_(a))
            })
        }, {
            Err(ErrorCode::LogicalError("Date overlay reached with a non-integer operand"))
        }),
        _ => with_match_integer_type!(lhs.data_type(), |$L| {
            scalar_binary_op::<$L, u32, u32, _>(lhs.column(), rhs.column(), |a, b| {
                b.wrapping_add(AsPrimitive::<u32>::as_(a))
            })
        }, {
            Err(ErrorCode::LogicalError("Date overlay reached with a non-integer operand"))
        }),
    }
}

fn date_minus_integer(lhs: &ColumnWithField, rhs: &ColumnWithField) -> Result<ColumnRef> {
    match lhs.data_type() {
        DataType::Date => with_match_integer_type!(rhs.data_type(), |$R| {
            scalar_binary_op::<u16, $R, u16, _>(lhs.column(), rhs.column(), |a, b| {
                a.wrapping_sub(AsPrimitive::<u16>::as_(b))
            })
        }, {
            Err(ErrorCode::LogicalError("Date overlay reached with a non-integer operand"))
        }),
        _ => with_match_integer_type!(rhs.data_type(), |$R| {
            scalar_binary_op::<u32, $R, u32, _>(lhs.column(), rhs.column(), |a, b| {
                a.wrapping_sub(AsPrimitive::<u32>::as_(b))
            })
        }, {
            Err(ErrorCode::LogicalError("Date overlay reached with a non-integer operand"))
        }),
    }
}

fn date_difference(lhs: &ColumnWithField, rhs: &ColumnWithField) -> Result<ColumnRef> {
    match lhs.data_type() {
        DataType::Date => {
            scalar_binary_op::<u16, u16, i32, _>(lhs.column(), rhs.column(), |a, b| {
                a as i32 - b as i32
            })
        }
        _ => scalar_binary_op::<u32, u32, i32, _>(lhs.column(), rhs.column(), |a, b| {
            a.wrapping_sub(b) as i32
        }),
    }
}
