// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::any::Any;
use std::sync::Arc;

use crate::data_schema::DataField;
use crate::data_value::DataValue;
use crate::types::DataType;

/// A borrowed, immutable column payload of a single storage scalar.
///
/// Two shapes exist: a materialized vector ([`crate::PrimitiveColumn`]) and a
/// broadcast constant ([`crate::ConstColumn`]). `data_type` reports the
/// storage scalar; the declared type lives in the surrounding [`DataField`].
pub trait Column: Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn data_type(&self) -> DataType;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_const(&self) -> bool {
        false
    }

    fn memory_size(&self) -> usize;

    /// Repeat the first value `len` times. Constant materialization only
    /// ever calls this on one-row columns.
    fn replicate(&self, len: usize) -> ColumnRef;

    /// Materialize to a full vector column (identity for vectors).
    fn convert_full_column(&self) -> ColumnRef;

    fn get(&self, index: usize) -> DataValue;

    fn arc(&self) -> ColumnRef;
}

pub type ColumnRef = Arc<dyn Column>;

#[derive(Clone)]
pub struct ColumnWithField {
    column: ColumnRef,
    field: DataField,
}

impl ColumnWithField {
    pub fn new(column: ColumnRef, field: DataField) -> Self {
        Self { column, field }
    }

    pub fn column(&self) -> &ColumnRef {
        &self.column
    }

    pub fn field(&self) -> &DataField {
        &self.field
    }

    pub fn data_type(&self) -> &DataType {
        self.field.data_type()
    }
}
