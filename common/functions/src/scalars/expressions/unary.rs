// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::sync::Arc;

use common_datavalues::prelude::*;
use common_exception::Result;

use crate::scalars::expressions::binary::constant_value;

/// Apply an infallible scalar function across one column, per shape.
pub fn scalar_unary_op<L, O, F>(l: &ColumnRef, f: F) -> Result<ColumnRef>
where
    L: PrimitiveType,
    O: PrimitiveType,
    F: Fn(L) -> O,
{
    if l.is_const() {
        let a = constant_value::<L>(l)?;
        let value = f(a);
        return Ok(Arc::new(ConstColumn::new(
            Arc::new(PrimitiveColumn::new_from_vec(vec![value])),
            l.len(),
        )));
    }

    let lhs: &PrimitiveColumn<L> = Series::check_get(l)?;
    let values: Vec<O> = lhs.values().iter().map(|a| f(*a)).collect();
    Ok(Arc::new(PrimitiveColumn::new_from_vec(values)))
}
