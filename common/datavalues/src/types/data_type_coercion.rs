// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::cmp;

use common_exception::ErrorCode;
use common_exception::Result;

use crate::data_value_operator::DataValueBinaryOperator;
use crate::data_value_operator::DataValueUnaryOperator;
use crate::types::data_type::construct_numeric_type;
use crate::types::data_type::next_size;
use crate::types::DataType;

/// Result declared type of a binary arithmetic expression. The single entry
/// point consulted by both `return_type` and `execute`, so the two phases
/// cannot disagree.
pub fn binary_arithmetic_coercion(
    op: &DataValueBinaryOperator,
    lhs_type: &DataType,
    rhs_type: &DataType,
) -> Result<DataType> {
    if lhs_type.is_date_or_date_time() || rhs_type.is_date_or_date_time() {
        return datetime_arithmetic_coercion(op, lhs_type, rhs_type);
    }

    match op {
        DataValueBinaryOperator::BitAnd
        | DataValueBinaryOperator::BitOr
        | DataValueBinaryOperator::BitXor
        | DataValueBinaryOperator::BitShiftLeft
        | DataValueBinaryOperator::BitShiftRight => {
            bitwise_arithmetic_coercion(op, lhs_type, rhs_type)
        }
        _ => numerical_arithmetic_coercion(op, lhs_type, rhs_type),
    }
}

pub fn numerical_arithmetic_coercion(
    op: &DataValueBinaryOperator,
    lhs_type: &DataType,
    rhs_type: &DataType,
) -> Result<DataType> {
    // error on any non-numeric type
    if !lhs_type.is_numeric() || !rhs_type.is_numeric() {
        return Err(ErrorCode::IllegalDataType(format!(
            "DataValue Error: Unsupported arithmetic ({:?}) {} ({:?})",
            lhs_type, op, rhs_type
        )));
    }

    let has_signed = lhs_type.is_signed_numeric() || rhs_type.is_signed_numeric();
    let has_float = lhs_type.is_floating() || rhs_type.is_floating();
    let size_of_lhs = lhs_type.numeric_byte_size()?;
    let size_of_rhs = rhs_type.numeric_byte_size()?;
    let max_size = cmp::max(size_of_lhs, size_of_rhs);

    match op {
        DataValueBinaryOperator::Plus | DataValueBinaryOperator::Mul => {
            if has_float {
                Ok(DataType::Float64)
            } else {
                construct_numeric_type(has_signed, false, next_size(max_size))
            }
        }
        DataValueBinaryOperator::Minus => {
            if has_float {
                Ok(DataType::Float64)
            } else {
                construct_numeric_type(true, false, next_size(max_size))
            }
        }
        DataValueBinaryOperator::Div => {
            if lhs_type == &DataType::Float64 || rhs_type == &DataType::Float64 || max_size > 4 {
                Ok(DataType::Float64)
            } else {
                Ok(DataType::Float32)
            }
        }
        DataValueBinaryOperator::IntDiv => {
            if has_float {
                // integer projection of the larger side
                construct_numeric_type(true, false, max_size)
            } else {
                construct_numeric_type(has_signed, false, next_size(max_size))
            }
        }
        DataValueBinaryOperator::Modulo => {
            // floating modulo is rejected rather than silently projected
            if has_float {
                return Err(ErrorCode::IllegalDataType(format!(
                    "DataValue Error: Unsupported arithmetic ({:?}) {} ({:?})",
                    lhs_type, op, rhs_type
                )));
            }
            construct_numeric_type(lhs_type.is_signed_numeric(), false, size_of_lhs)
        }
        _ => Err(ErrorCode::LogicalError(format!(
            "Operator {} is not a numerical arithmetic operator",
            op
        ))),
    }
}

pub fn bitwise_arithmetic_coercion(
    op: &DataValueBinaryOperator,
    lhs_type: &DataType,
    rhs_type: &DataType,
) -> Result<DataType> {
    if !lhs_type.is_integer() || !rhs_type.is_integer() {
        return Err(ErrorCode::IllegalDataType(format!(
            "DataValue Error: Unsupported arithmetic ({:?}) {} ({:?})",
            lhs_type, op, rhs_type
        )));
    }

    let has_signed = lhs_type.is_signed_numeric() || rhs_type.is_signed_numeric();
    let max_size = cmp::max(
        lhs_type.numeric_byte_size()?,
        rhs_type.numeric_byte_size()?,
    );
    construct_numeric_type(has_signed, false, max_size)
}

/// The date overlay. Sits in front of the numeric rules: with a date operand
/// only `Date* ± Integer`, `Integer + Date*` and same-type date differences
/// are defined.
pub fn datetime_arithmetic_coercion(
    op: &DataValueBinaryOperator,
    lhs_type: &DataType,
    rhs_type: &DataType,
) -> Result<DataType> {
    let error_fn = || -> Result<DataType> {
        Err(ErrorCode::IllegalDataType(format!(
            "DataValue Error: Unsupported date arithmetic ({:?}) {} ({:?})",
            lhs_type, op, rhs_type
        )))
    };

    match op {
        DataValueBinaryOperator::Plus => {
            if lhs_type.is_date_or_date_time() && rhs_type.is_integer() {
                Ok(*lhs_type)
            } else if lhs_type.is_integer() && rhs_type.is_date_or_date_time() {
                Ok(*rhs_type)
            } else {
                error_fn()
            }
        }
        DataValueBinaryOperator::Minus => {
            if !lhs_type.is_date_or_date_time() {
                return error_fn();
            }
            if lhs_type == rhs_type {
                Ok(DataType::Int32)
            } else if rhs_type.is_integer() {
                Ok(*lhs_type)
            } else {
                error_fn()
            }
        }
        _ => error_fn(),
    }
}

pub fn unary_arithmetic_coercion(
    op: &DataValueUnaryOperator,
    arg_type: &DataType,
) -> Result<DataType> {
    match op {
        DataValueUnaryOperator::Negate => {
            if !arg_type.is_numeric() {
                return Err(ErrorCode::IllegalDataType(format!(
                    "DataValue Error: Unsupported arithmetic {} ({:?})",
                    op, arg_type
                )));
            }
            construct_numeric_type(
                true,
                arg_type.is_floating(),
                next_size(arg_type.numeric_byte_size()?),
            )
        }
        DataValueUnaryOperator::BitNot => {
            if !arg_type.is_integer() {
                return Err(ErrorCode::IllegalDataType(format!(
                    "DataValue Error: Unsupported arithmetic {} ({:?})",
                    op, arg_type
                )));
            }
            Ok(*arg_type)
        }
    }
}
