// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::any::Any;
use std::sync::Arc;

use crate::columns::column::Column;
use crate::columns::column::ColumnRef;
use crate::data_value::DataValue;
use crate::scalars::PrimitiveType;
use crate::types::DataType;

/// The vector shape: a contiguous buffer of `N` values of `T`.
#[derive(Clone, Debug)]
pub struct PrimitiveColumn<T: PrimitiveType> {
    values: Vec<T>,
}

impl<T: PrimitiveType> PrimitiveColumn<T> {
    pub fn new_from_vec(values: Vec<T>) -> Self {
        Self { values }
    }

    pub fn new_from_slice(values: &[T]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    pub fn new_from_iter(iter: impl Iterator<Item = T>) -> Self {
        Self {
            values: iter.collect(),
        }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T: PrimitiveType> Column for PrimitiveColumn<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn data_type(&self) -> DataType {
        T::data_type()
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn memory_size(&self) -> usize {
        self.values.len() * std::mem::size_of::<T>()
    }

    fn replicate(&self, len: usize) -> ColumnRef {
        debug_assert!(!self.values.is_empty());
        Arc::new(Self::new_from_vec(vec![self.values[0]; len]))
    }

    fn convert_full_column(&self) -> ColumnRef {
        self.arc()
    }

    fn get(&self, index: usize) -> DataValue {
        self.values[index].to_data_value()
    }

    fn arc(&self) -> ColumnRef {
        Arc::new(self.clone())
    }
}

pub type UInt8Column = PrimitiveColumn<u8>;
pub type UInt16Column = PrimitiveColumn<u16>;
pub type UInt32Column = PrimitiveColumn<u32>;
pub type UInt64Column = PrimitiveColumn<u64>;
pub type Int8Column = PrimitiveColumn<i8>;
pub type Int16Column = PrimitiveColumn<i16>;
pub type Int32Column = PrimitiveColumn<i32>;
pub type Int64Column = PrimitiveColumn<i64>;
pub type Float32Column = PrimitiveColumn<f32>;
pub type Float64Column = PrimitiveColumn<f64>;
