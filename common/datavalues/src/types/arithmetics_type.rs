// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use crate::scalars::PrimitiveType;

/// The promotion lattice: for every pair of operand scalars, the result
/// scalar of each binary operator family, decided at compile time. The
/// runtime coercion functions mirror this table over declared types; the two
/// are asserted to agree pair-by-pair in tests.
///
/// `LeastSuper` is not a result type: it is the computing type integer
/// division and modulo promote both operands to before dividing.
pub trait ResultTypeOfBinary: Sized {
    type AddMul: PrimitiveType;
    type Minus: PrimitiveType;
    type Div: PrimitiveType;
    type IntDiv: PrimitiveType;
    type Modulo: PrimitiveType;
    type LeastSuper: PrimitiveType;
}

/// Bitwise results, defined over integer pairs only: the widest operand
/// width, signed when either side is signed. Shifts share the family.
pub trait ResultTypeOfBitwise: Sized {
    type Bitwise: PrimitiveType;
}

pub trait ResultTypeOfUnary: Sized {
    type Negate: PrimitiveType;
}

macro_rules! impl_arithmetic {
    ($lhs:ty, $rhs:ty, $addmul:ty, $minus:ty, $div:ty, $intdiv:ty, $modulo:ty, $least_super:ty) => {
        impl ResultTypeOfBinary for ($lhs, $rhs) {
            type AddMul = $addmul;
            type Minus = $minus;
            type Div = $div;
            type IntDiv = $intdiv;
            type Modulo = $modulo;
            type LeastSuper = $least_super;
        }
    };
}

macro_rules! impl_bitwise {
    ($lhs:ty, $rhs:ty, $bitwise:ty) => {
        impl ResultTypeOfBitwise for ($lhs, $rhs) {
            type Bitwise = $bitwise;
        }
    };
}

macro_rules! impl_unary_arithmetic {
    ($arg:ty, $negate:ty) => {
        impl ResultTypeOfUnary for $arg {
            type Negate = $negate;
        }
    };
}

impl_arithmetic! {u8, u8, u16, i16, f32, u16, u8, u8}
impl_arithmetic! {u8, u16, u32, i32, f32, u32, u8, u16}
impl_arithmetic! {u8, u32, u64, i64, f32, u64, u8, u32}
impl_arithmetic! {u8, u64, u64, i64, f64, u64, u8, u64}
impl_arithmetic! {u8, i8, i16, i16, f32, i16, u8, i16}
impl_arithmetic! {u8, i16, i32, i32, f32, i32, u8, i16}
impl_arithmetic! {u8, i32, i64, i64, f32, i64, u8, i32}
impl_arithmetic! {u8, i64, i64, i64, f64, i64, u8, i64}
impl_arithmetic! {u8, f32, f64, f64, f32, i32, u8, f64}
impl_arithmetic! {u8, f64, f64, f64, f64, i64, u8, f64}

impl_arithmetic! {u16, u8, u32, i32, f32, u32, u16, u16}
impl_arithmetic! {u16, u16, u32, i32, f32, u32, u16, u16}
impl_arithmetic! {u16, u32, u64, i64, f32, u64, u16, u32}
impl_arithmetic! {u16, u64, u64, i64, f64, u64, u16, u64}
impl_arithmetic! {u16, i8, i32, i32, f32, i32, u16, i32}
impl_arithmetic! {u16, i16, i32, i32, f32, i32, u16, i32}
impl_arithmetic! {u16, i32, i64, i64, f32, i64, u16, i32}
impl_arithmetic! {u16, i64, i64, i64, f64, i64, u16, i64}
impl_arithmetic! {u16, f32, f64, f64, f32, i32, u16, f64}
impl_arithmetic! {u16, f64, f64, f64, f64, i64, u16, f64}

impl_arithmetic! {u32, u8, u64, i64, f32, u64, u32, u32}
impl_arithmetic! {u32, u16, u64, i64, f32, u64, u32, u32}
impl_arithmetic! {u32, u32, u64, i64, f32, u64, u32, u32}
impl_arithmetic! {u32, u64, u64, i64, f64, u64, u32, u64}
impl_arithmetic! {u32, i8, i64, i64, f32, i64, u32, i64}
impl_arithmetic! {u32, i16, i64, i64, f32, i64, u32, i64}
impl_arithmetic! {u32, i32, i64, i64, f32, i64, u32, i64}
impl_arithmetic! {u32, i64, i64, i64, f64, i64, u32, i64}
impl_arithmetic! {u32, f32, f64, f64, f32, i32, u32, f64}
impl_arithmetic! {u32, f64, f64, f64, f64, i64, u32, f64}

impl_arithmetic! {u64, u8, u64, i64, f64, u64, u64, u64}
impl_arithmetic! {u64, u16, u64, i64, f64, u64, u64, u64}
impl_arithmetic! {u64, u32, u64, i64, f64, u64, u64, u64}
impl_arithmetic! {u64, u64, u64, i64, f64, u64, u64, u64}
impl_arithmetic! {u64, i8, i64, i64, f64, i64, u64, i64}
impl_arithmetic! {u64, i16, i64, i64, f64, i64, u64, i64}
impl_arithmetic! {u64, i32, i64, i64, f64, i64, u64, i64}
impl_arithmetic! {u64, i64, i64, i64, f64, i64, u64, i64}
impl_arithmetic! {u64, f32, f64, f64, f64, i64, u64, f64}
impl_arithmetic! {u64, f64, f64, f64, f64, i64, u64, f64}

impl_arithmetic! {i8, u8, i16, i16, f32, i16, i8, i16}
impl_arithmetic! {i8, u16, i32, i32, f32, i32, i8, i32}
impl_arithmetic! {i8, u32, i64, i64, f32, i64, i8, i64}
impl_arithmetic! {i8, u64, i64, i64, f64, i64, i8, i64}
impl_arithmetic! {i8, i8, i16, i16, f32, i16, i8, i8}
impl_arithmetic! {i8, i16, i32, i32, f32, i32, i8, i16}
impl_arithmetic! {i8, i32, i64, i64, f32, i64, i8, i32}
impl_arithmetic! {i8, i64, i64, i64, f64, i64, i8, i64}
impl_arithmetic! {i8, f32, f64, f64, f32, i32, i8, f64}
impl_arithmetic! {i8, f64, f64, f64, f64, i64, i8, f64}

impl_arithmetic! {i16, u8, i32, i32, f32, i32, i16, i16}
impl_arithmetic! {i16, u16, i32, i32, f32, i32, i16, i32}
impl_arithmetic! {i16, u32, i64, i64, f32, i64, i16, i64}
impl_arithmetic! {i16, u64, i64, i64, f64, i64, i16, i64}
impl_arithmetic! {i16, i8, i32, i32, f32, i32, i16, i16}
impl_arithmetic! {i16, i16, i32, i32, f32, i32, i16, i16}
impl_arithmetic! {i16, i32, i64, i64, f32, i64, i16, i32}
impl_arithmetic! {i16, i64, i64, i64, f64, i64, i16, i64}
impl_arithmetic! {i16, f32, f64, f64, f32, i32, i16, f64}
impl_arithmetic! {i16, f64, f64, f64, f64, i64, i16, f64}

impl_arithmetic! {i32, u8, i64, i64, f32, i64, i32, i32}
impl_arithmetic! {i32, u16, i64, i64, f32, i64, i32, i32}
impl_arithmetic! {i32, u32, i64, i64, f32, i64, i32, i64}
impl_arithmetic! {i32, u64, i64, i64, f64, i64, i32, i64}
impl_arithmetic! {i32, i8, i64, i64, f32, i64, i32, i32}
impl_arithmetic! {i32, i16, i64, i64, f32, i64, i32, i32}
impl_arithmetic! {i32, i32, i64, i64, f32, i64, i32, i32}
impl_arithmetic! {i32, i64, i64, i64, f64, i64, i32, i64}
impl_arithmetic! {i32, f32, f64, f64, f32, i32, i32, f64}
impl_arithmetic! {i32, f64, f64, f64, f64, i64, i32, f64}

impl_arithmetic! {i64, u8, i64, i64, f64, i64, i64, i64}
impl_arithmetic! {i64, u16, i64, i64, f64, i64, i64, i64}
impl_arithmetic! {i64, u32, i64, i64, f64, i64, i64, i64}
impl_arithmetic! {i64, u64, i64, i64, f64, i64, i64, i64}
impl_arithmetic! {i64, i8, i64, i64, f64, i64, i64, i64}
impl_arithmetic! {i64, i16, i64, i64, f64, i64, i64, i64}
impl_arithmetic! {i64, i32, i64, i64, f64, i64, i64, i64}
impl_arithmetic! {i64, i64, i64, i64, f64, i64, i64, i64}
impl_arithmetic! {i64, f32, f64, f64, f64, i64, i64, f64}
impl_arithmetic! {i64, f64, f64, f64, f64, i64, i64, f64}

impl_arithmetic! {f32, u8, f64, f64, f32, i32, i32, f64}
impl_arithmetic! {f32, u16, f64, f64, f32, i32, i32, f64}
impl_arithmetic! {f32, u32, f64, f64, f32, i32, i32, f64}
impl_arithmetic! {f32, u64, f64, f64, f64, i64, i32, f64}
impl_arithmetic! {f32, i8, f64, f64, f32, i32, i32, f64}
impl_arithmetic! {f32, i16, f64, f64, f32, i32, i32, f64}
impl_arithmetic! {f32, i32, f64, f64, f32, i32, i32, f64}
impl_arithmetic! {f32, i64, f64, f64, f64, i64, i32, f64}
impl_arithmetic! {f32, f32, f64, f64, f32, i32, i32, f64}
impl_arithmetic! {f32, f64, f64, f64, f64, i64, i32, f64}

impl_arithmetic! {f64, u8, f64, f64, f64, i64, i64, f64}
impl_arithmetic! {f64, u16, f64, f64, f64, i64, i64, f64}
impl_arithmetic! {f64, u32, f64, f64, f64, i64, i64, f64}
impl_arithmetic! {f64, u64, f64, f64, f64, i64, i64, f64}
impl_arithmetic! {f64, i8, f64, f64, f64, i64, i64, f64}
impl_arithmetic! {f64, i16, f64, f64, f64, i64, i64, f64}
impl_arithmetic! {f64, i32, f64, f64, f64, i64, i64, f64}
impl_arithmetic! {f64, i64, f64, f64, f64, i64, i64, f64}
impl_arithmetic! {f64, f32, f64, f64, f64, i64, i64, f64}
impl_arithmetic! {f64, f64, f64, f64, f64, i64, i64, f64}

impl_bitwise! {u8, u8, u8}
impl_bitwise! {u8, u16, u16}
impl_bitwise! {u8, u32, u32}
impl_bitwise! {u8, u64, u64}
impl_bitwise! {u8, i8, i8}
impl_bitwise! {u8, i16, i16}
impl_bitwise! {u8, i32, i32}
impl_bitwise! {u8, i64, i64}

impl_bitwise! {u16, u8, u16}
impl_bitwise! {u16, u16, u16}
impl_bitwise! {u16, u32, u32}
impl_bitwise! {u16, u64, u64}
impl_bitwise! {u16, i8, i16}
impl_bitwise! {u16, i16, i16}
impl_bitwise! {u16, i32, i32}
impl_bitwise! {u16, i64, i64}

impl_bitwise! {u32, u8, u32}
impl_bitwise! {u32, u16, u32}
impl_bitwise! {u32, u32, u32}
impl_bitwise! {u32, u64, u64}
impl_bitwise! {u32, i8, i32}
impl_bitwise! {u32, i16, i32}
impl_bitwise! {u32, i32, i32}
impl_bitwise! {u32, i64, i64}

impl_bitwise! {u64, u8, u64}
impl_bitwise! {u64, u16, u64}
impl_bitwise! {u64, u32, u64}
impl_bitwise! {u64, u64, u64}
impl_bitwise! {u64, i8, i64}
impl_bitwise! {u64, i16, i64}
impl_bitwise! {u64, i32, i64}
impl_bitwise! {u64, i64, i64}

impl_bitwise! {i8, u8, i8}
impl_bitwise! {i8, u16, i16}
impl_bitwise! {i8, u32, i32}
impl_bitwise! {i8, u64, i64}
impl_bitwise! {i8, i8, i8}
impl_bitwise! {i8, i16, i16}
impl_bitwise! {i8, i32, i32}
impl_bitwise! {i8, i64, i64}

impl_bitwise! {i16, u8, i16}
impl_bitwise! {i16, u16, i16}
impl_bitwise! {i16, u32, i32}
impl_bitwise! {i16, u64, i64}
impl_bitwise! {i16, i8, i16}
impl_bitwise! {i16, i16, i16}
impl_bitwise! {i16, i32, i32}
impl_bitwise! {i16, i64, i64}

impl_bitwise! {i32, u8, i32}
impl_bitwise! {i32, u16, i32}
impl_bitwise! {i32, u32, i32}
impl_bitwise! {i32, u64, i64}
impl_bitwise! {i32, i8, i32}
impl_bitwise! {i32, i16, i32}
impl_bitwise! {i32, i32, i32}
impl_bitwise! {i32, i64, i64}

impl_bitwise! {i64, u8, i64}
impl_bitwise! {i64, u16, i64}
impl_bitwise! {i64, u32, i64}
impl_bitwise! {i64, u64, i64}
impl_bitwise! {i64, i8, i64}
impl_bitwise! {i64, i16, i64}
impl_bitwise! {i64, i32, i64}
impl_bitwise! {i64, i64, i64}

impl_unary_arithmetic! {u8, i16}
impl_unary_arithmetic! {u16, i32}
impl_unary_arithmetic! {u32, i64}
impl_unary_arithmetic! {u64, i64}
impl_unary_arithmetic! {i8, i16}
impl_unary_arithmetic! {i16, i32}
impl_unary_arithmetic! {i32, i64}
impl_unary_arithmetic! {i64, i64}
impl_unary_arithmetic! {f32, f64}
impl_unary_arithmetic! {f64, f64}
