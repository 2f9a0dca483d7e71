// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::any::Any;
use std::sync::Arc;

use crate::columns::column::Column;
use crate::columns::column::ColumnRef;
use crate::data_value::DataValue;
use crate::types::DataType;

/// The constant shape: a one-row inner column broadcast to a logical length.
#[derive(Clone)]
pub struct ConstColumn {
    length: usize,
    column: ColumnRef,
}

impl ConstColumn {
    pub fn new(column: ColumnRef, length: usize) -> Self {
        // Avoid const recursion.
        if let Some(inner) = column.as_any().downcast_ref::<ConstColumn>() {
            return Self::new(inner.inner().clone(), length);
        }
        Self { column, length }
    }

    pub fn inner(&self) -> &ColumnRef {
        &self.column
    }
}

impl Column for ConstColumn {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn data_type(&self) -> DataType {
        self.column.data_type()
    }

    fn len(&self) -> usize {
        self.length
    }

    fn is_const(&self) -> bool {
        true
    }

    fn memory_size(&self) -> usize {
        self.column.memory_size()
    }

    fn replicate(&self, len: usize) -> ColumnRef {
        self.column.replicate(len)
    }

    fn convert_full_column(&self) -> ColumnRef {
        self.column.replicate(self.length)
    }

    fn get(&self, _index: usize) -> DataValue {
        self.column.get(0)
    }

    fn arc(&self) -> ColumnRef {
        Arc::new(self.clone())
    }
}
