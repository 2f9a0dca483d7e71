// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

mod macros;

mod columns;
mod data_schema;
mod data_value;
mod data_value_operator;
pub mod prelude;
mod scalars;
mod types;

pub use columns::*;
pub use data_schema::*;
pub use data_value::*;
pub use data_value_operator::*;
pub use scalars::*;
pub use types::*;
