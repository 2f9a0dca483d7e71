// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use crate::scalars::ArithmeticBitAndFunction;
use crate::scalars::ArithmeticBitNotFunction;
use crate::scalars::ArithmeticBitOrFunction;
use crate::scalars::ArithmeticBitShiftLeftFunction;
use crate::scalars::ArithmeticBitShiftRightFunction;
use crate::scalars::ArithmeticBitXorFunction;
use crate::scalars::ArithmeticDivFunction;
use crate::scalars::ArithmeticIntDivFunction;
use crate::scalars::ArithmeticMinusFunction;
use crate::scalars::ArithmeticModuloFunction;
use crate::scalars::ArithmeticMulFunction;
use crate::scalars::ArithmeticNegateFunction;
use crate::scalars::ArithmeticPlusFunction;
use crate::scalars::FunctionFactory;

#[derive(Clone)]
pub struct ArithmeticFunction;

impl ArithmeticFunction {
    pub fn register(factory: &mut FunctionFactory) {
        factory.register("+", ArithmeticPlusFunction::desc());
        factory.register("plus", ArithmeticPlusFunction::desc());
        factory.register("-", ArithmeticMinusFunction::desc());
        factory.register("minus", ArithmeticMinusFunction::desc());
        factory.register("*", ArithmeticMulFunction::desc());
        factory.register("multiply", ArithmeticMulFunction::desc());
        factory.register("/", ArithmeticDivFunction::desc());
        factory.register("divide", ArithmeticDivFunction::desc());
        factory.register("div", ArithmeticIntDivFunction::desc());
        factory.register("intDiv", ArithmeticIntDivFunction::desc());
        factory.register("%", ArithmeticModuloFunction::desc());
        factory.register("mod", ArithmeticModuloFunction::desc());
        factory.register("modulo", ArithmeticModuloFunction::desc());
        factory.register("negate", ArithmeticNegateFunction::desc());
        factory.register("&", ArithmeticBitAndFunction::desc());
        factory.register("bitAnd", ArithmeticBitAndFunction::desc());
        factory.register("|", ArithmeticBitOrFunction::desc());
        factory.register("bitOr", ArithmeticBitOrFunction::desc());
        factory.register("^", ArithmeticBitXorFunction::desc());
        factory.register("bitXor", ArithmeticBitXorFunction::desc());
        factory.register("~", ArithmeticBitNotFunction::desc());
        factory.register("bitNot", ArithmeticBitNotFunction::desc());
        factory.register("<<", ArithmeticBitShiftLeftFunction::desc());
        factory.register("bitShiftLeft", ArithmeticBitShiftLeftFunction::desc());
        factory.register(">>", ArithmeticBitShiftRightFunction::desc());
        factory.register("bitShiftRight", ArithmeticBitShiftRightFunction::desc());
    }
}
