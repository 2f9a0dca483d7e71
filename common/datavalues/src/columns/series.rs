// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::sync::Arc;

use common_exception::ErrorCode;
use common_exception::Result;

use crate::columns::column::Column;
use crate::columns::column::ColumnRef;
use crate::columns::const_::ConstColumn;
use crate::columns::primitive::PrimitiveColumn;
use crate::scalars::PrimitiveType;

// Series is a util struct to work with Column.
pub struct Series;

impl Series {
    /// Downcast to a concrete column, reporting a shape mismatch when the
    /// storage scalar does not match the declared type.
    pub fn check_get<T: 'static + Column>(column: &ColumnRef) -> Result<&T> {
        column.as_any().downcast_ref::<T>().ok_or_else(|| {
            ErrorCode::IllegalColumnShape(format!(
                "Column storage does not match its declared type, storage scalar: {:?}",
                column.data_type()
            ))
        })
    }

    /// Wrap a single value into a constant column of the given length.
    pub fn constant<T: PrimitiveType>(value: T, length: usize) -> ColumnRef {
        Arc::new(ConstColumn::new(
            Arc::new(PrimitiveColumn::new_from_vec(vec![value])),
            length,
        ))
    }
}

pub trait SeriesFrom<T, Phantom: ?Sized> {
    fn from_data(_: T) -> ColumnRef;
}

macro_rules! impl_from {
    ($type:ty) => {
        impl<T: AsRef<[$type]>> SeriesFrom<T, [$type]> for Series {
            fn from_data(v: T) -> ColumnRef {
                Arc::new(PrimitiveColumn::new_from_slice(v.as_ref()))
            }
        }
    };
}

impl_from!(u8);
impl_from!(u16);
impl_from!(u32);
impl_from!(u64);
impl_from!(i8);
impl_from!(i16);
impl_from!(i32);
impl_from!(i64);
impl_from!(f32);
impl_from!(f64);
