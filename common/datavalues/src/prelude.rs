// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

//! Everything you need to work with columns and types in one import.

pub use crate::columns::Column;
pub use crate::columns::ColumnRef;
pub use crate::columns::ColumnWithField;
pub use crate::columns::ConstColumn;
pub use crate::columns::Float32Column;
pub use crate::columns::Float64Column;
pub use crate::columns::Int16Column;
pub use crate::columns::Int32Column;
pub use crate::columns::Int64Column;
pub use crate::columns::Int8Column;
pub use crate::columns::PrimitiveColumn;
pub use crate::columns::Series;
pub use crate::columns::SeriesFrom;
pub use crate::columns::UInt16Column;
pub use crate::columns::UInt32Column;
pub use crate::columns::UInt64Column;
pub use crate::columns::UInt8Column;
pub use crate::data_schema::DataField;
pub use crate::data_schema::DataSchema;
pub use crate::data_schema::DataSchemaRef;
pub use crate::data_schema::DataSchemaRefExt;
pub use crate::data_value::DataValue;
pub use crate::data_value_operator::DataValueBinaryOperator;
pub use crate::data_value_operator::DataValueUnaryOperator;
pub use crate::scalars::PrimitiveType;
pub use crate::types::DataType;
