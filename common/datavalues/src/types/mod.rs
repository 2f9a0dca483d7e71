// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

mod arithmetics_type;
mod data_type;
mod data_type_coercion;

pub use arithmetics_type::ResultTypeOfBinary;
pub use arithmetics_type::ResultTypeOfBitwise;
pub use arithmetics_type::ResultTypeOfUnary;
pub use data_type::construct_numeric_type;
pub use data_type::next_size;
pub use data_type::DataType;
pub use data_type::ARITHMETIC_CANDIDATE_TYPES;
pub use data_type_coercion::binary_arithmetic_coercion;
pub use data_type_coercion::bitwise_arithmetic_coercion;
pub use data_type_coercion::datetime_arithmetic_coercion;
pub use data_type_coercion::numerical_arithmetic_coercion;
pub use data_type_coercion::unary_arithmetic_coercion;
