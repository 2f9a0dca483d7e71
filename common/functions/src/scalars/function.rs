// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

use common_datablocks::DataBlock;
use common_datavalues::DataType;
use common_exception::Result;
use dyn_clone::DynClone;

/// A named operator over block positions.
///
/// `return_type` and `execute` walk the same candidate-type path, so a type
/// pair rejected by one is rejected by the other.
pub trait Function: fmt::Display + Sync + Send + DynClone {
    fn name(&self) -> &str;

    fn num_arguments(&self) -> usize {
        0
    }

    fn return_type(&self, args: &[DataType]) -> Result<DataType>;

    /// Evaluate over the columns at `arguments` and place the output column
    /// at `result` (appending when `result` is one past the last position).
    fn execute(&self, block: &mut DataBlock, arguments: &[usize], result: usize) -> Result<()>;
}

dyn_clone::clone_trait_object!(Function);
