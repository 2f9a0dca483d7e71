// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

mod arithmetic;
mod arithmetic_bit;
mod arithmetic_date;
mod arithmetic_div;
mod arithmetic_intdiv;
mod arithmetic_minus;
mod arithmetic_modulo;
mod arithmetic_mul;
mod arithmetic_negate;
mod arithmetic_plus;
mod binary_arithmetic;
mod divider;
mod unary_arithmetic;
mod utils;

pub use arithmetic::ArithmeticFunction;
pub use arithmetic_bit::ArithmeticBitAndFunction;
pub use arithmetic_bit::ArithmeticBitNotFunction;
pub use arithmetic_bit::ArithmeticBitOrFunction;
pub use arithmetic_bit::ArithmeticBitShiftLeftFunction;
pub use arithmetic_bit::ArithmeticBitShiftRightFunction;
pub use arithmetic_bit::ArithmeticBitXorFunction;
pub use arithmetic_div::ArithmeticDivFunction;
pub use arithmetic_intdiv::ArithmeticIntDivFunction;
pub use arithmetic_minus::ArithmeticMinusFunction;
pub use arithmetic_modulo::ArithmeticModuloFunction;
pub use arithmetic_mul::ArithmeticMulFunction;
pub use arithmetic_negate::ArithmeticNegateFunction;
pub use arithmetic_plus::ArithmeticPlusFunction;
pub use binary_arithmetic::BinaryArithmeticFunction;
pub use divider::FastDivide;
pub use divider::I32Divider;
pub use divider::I64Divider;
pub use divider::U32Divider;
pub use divider::U64Divider;
pub use unary_arithmetic::UnaryArithmeticFunction;
