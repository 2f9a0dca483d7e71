// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::sync::Arc;

use common_datavalues::prelude::*;
use common_exception::Result;

/// The single constant value behind a broadcast column.
pub fn constant_value<T: PrimitiveType>(column: &ColumnRef) -> Result<T> {
    let const_column: &ConstColumn = Series::check_get(column)?;
    let inner: &PrimitiveColumn<T> = Series::check_get(const_column.inner())?;
    Ok(inner.values()[0])
}

/// Apply an infallible scalar function across two columns, one loop per
/// shape pair. Both constants fold to a single application broadcast over
/// the block's row count.
pub fn scalar_binary_op<L, R, O, F>(l: &ColumnRef, r: &ColumnRef, f: F) -> Result<ColumnRef>
where
    L: PrimitiveType,
    R: PrimitiveType,
    O: PrimitiveType,
    F: Fn(L, R) -> O,
{
    debug_assert_eq!(l.len(), r.len());

    match (l.is_const(), r.is_const()) {
        (false, false) => {
            let lhs: &PrimitiveColumn<L> = Series::check_get(l)?;
            let rhs: &PrimitiveColumn<R> = Series::check_get(r)?;
            let values: Vec<O> = lhs
                .values()
                .iter()
                .zip(rhs.values().iter())
                .map(|(a, b)| f(*a, *b))
                .collect();
            Ok(Arc::new(PrimitiveColumn::new_from_vec(values)))
        }
        (false, true) => {
            let lhs: &PrimitiveColumn<L> = Series::check_get(l)?;
            let b = constant_value::<R>(r)?;
            let values: Vec<O> = lhs.values().iter().map(|a| f(*a, b)).collect();
            Ok(Arc::new(PrimitiveColumn::new_from_vec(values)))
        }
        (true, false) => {
            let a = constant_value::<L>(l)?;
            let rhs: &PrimitiveColumn<R> = Series::check_get(r)?;
            let values: Vec<O> = rhs.values().iter().map(|b| f(a, *b)).collect();
            Ok(Arc::new(PrimitiveColumn::new_from_vec(values)))
        }
        (true, true) => {
            let a = constant_value::<L>(l)?;
            let b = constant_value::<R>(r)?;
            let value = f(a, b);
            Ok(Arc::new(ConstColumn::new(
                Arc::new(PrimitiveColumn::new_from_vec(vec![value])),
                l.len(),
            )))
        }
    }
}

/// Like [`scalar_binary_op`] but the scalar function checks its operands and
/// the first per-element fault aborts the whole call.
pub fn try_scalar_binary_op<L, R, O, F>(l: &ColumnRef, r: &ColumnRef, f: F) -> Result<ColumnRef>
where
    L: PrimitiveType,
    R: PrimitiveType,
    O: PrimitiveType,
    F: Fn(L, R) -> Result<O>,
{
    debug_assert_eq!(l.len(), r.len());

    match (l.is_const(), r.is_const()) {
        (false, false) => {
            let lhs: &PrimitiveColumn<L> = Series::check_get(l)?;
            let rhs: &PrimitiveColumn<R> = Series::check_get(r)?;
            let values: Vec<O> = lhs
                .values()
                .iter()
                .zip(rhs.values().iter())
                .map(|(a, b)| f(*a, *b))
                .collect::<Result<_>>()?;
            Ok(Arc::new(PrimitiveColumn::new_from_vec(values)))
        }
        (false, true) => {
            let lhs: &PrimitiveColumn<L> = Series::check_get(l)?;
            let b = constant_value::<R>(r)?;
            let values: Vec<O> = lhs
                .values()
                .iter()
                .map(|a| f(*a, b))
                .collect::<Result<_>>()?;
            Ok(Arc::new(PrimitiveColumn::new_from_vec(values)))
        }
        (true, false) => {
            let a = constant_value::<L>(l)?;
            let rhs: &PrimitiveColumn<R> = Series::check_get(r)?;
            let values: Vec<O> = rhs
                .values()
                .iter()
                .map(|b| f(a, *b))
                .collect::<Result<_>>()?;
            Ok(Arc::new(PrimitiveColumn::new_from_vec(values)))
        }
        (true, true) => {
            let a = constant_value::<L>(l)?;
            let b = constant_value::<R>(r)?;
            let value = f(a, b)?;
            Ok(Arc::new(ConstColumn::new(
                Arc::new(PrimitiveColumn::new_from_vec(vec![value])),
                l.len(),
            )))
        }
    }
}
