// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

mod column;
mod const_;
mod primitive;
mod series;

pub use column::Column;
pub use column::ColumnRef;
pub use column::ColumnWithField;
pub use const_::ConstColumn;
pub use primitive::Float32Column;
pub use primitive::Float64Column;
pub use primitive::Int16Column;
pub use primitive::Int32Column;
pub use primitive::Int64Column;
pub use primitive::Int8Column;
pub use primitive::PrimitiveColumn;
pub use primitive::UInt16Column;
pub use primitive::UInt32Column;
pub use primitive::UInt64Column;
pub use primitive::UInt8Column;
pub use series::Series;
pub use series::SeriesFrom;
