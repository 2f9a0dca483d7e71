// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

mod binary;
mod unary;

pub use binary::constant_value;
pub use binary::scalar_binary_op;
pub use binary::try_scalar_binary_op;
pub use unary::scalar_unary_op;
