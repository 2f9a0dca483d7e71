// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataValueBinaryOperator {
    Plus,
    Minus,
    Mul,
    Div,
    IntDiv,
    Modulo,
    BitAnd,
    BitOr,
    BitXor,
    BitShiftLeft,
    BitShiftRight,
}

impl fmt::Display for DataValueBinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let display = match &self {
            DataValueBinaryOperator::Plus => "+",
            DataValueBinaryOperator::Minus => "-",
            DataValueBinaryOperator::Mul => "*",
            DataValueBinaryOperator::Div => "/",
            DataValueBinaryOperator::IntDiv => "div",
            DataValueBinaryOperator::Modulo => "%",
            DataValueBinaryOperator::BitAnd => "&",
            DataValueBinaryOperator::BitOr => "|",
            DataValueBinaryOperator::BitXor => "^",
            DataValueBinaryOperator::BitShiftLeft => "<<",
            DataValueBinaryOperator::BitShiftRight => ">>",
        };
        write!(f, "{}", display)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataValueUnaryOperator {
    Negate,
    BitNot,
}

impl fmt::Display for DataValueUnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let display = match &self {
            DataValueUnaryOperator::Negate => "negate",
            DataValueUnaryOperator::BitNot => "bitNot",
        };
        write!(f, "{}", display)
    }
}
