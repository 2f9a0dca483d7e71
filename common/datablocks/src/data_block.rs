// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

use common_datavalues::ColumnRef;
use common_datavalues::ColumnWithField;
use common_datavalues::DataField;
use common_datavalues::DataSchemaRef;
use common_datavalues::DataSchemaRefExt;
use common_exception::ErrorCode;
use common_exception::Result;

use crate::pretty_format_blocks;

/// A horizontal slice of a columnar table: an ordered list of positions, each
/// holding a declared type, a column payload and a name. Every column shares
/// the same logical row count.
#[derive(Clone)]
pub struct DataBlock {
    schema: DataSchemaRef,
    columns: Vec<ColumnRef>,
}

impl DataBlock {
    pub fn create(schema: DataSchemaRef, columns: Vec<ColumnRef>) -> Self {
        debug_assert_eq!(schema.num_fields(), columns.len());
        DataBlock { schema, columns }
    }

    pub fn empty() -> Self {
        DataBlock {
            schema: DataSchemaRefExt::create(vec![]),
            columns: vec![],
        }
    }

    pub fn schema(&self) -> &DataSchemaRef {
        &self.schema
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_columns() == 0 || self.num_rows() == 0
    }

    /// Data block physical memory size.
    pub fn memory_size(&self) -> usize {
        self.columns.iter().map(|x| x.memory_size()).sum()
    }

    pub fn column(&self, index: usize) -> &ColumnRef {
        &self.columns[index]
    }

    pub fn columns(&self) -> &[ColumnRef] {
        &self.columns
    }

    pub fn get_by_position(&self, position: usize) -> Result<ColumnWithField> {
        if position >= self.columns.len() {
            return Err(ErrorCode::BadArguments(format!(
                "Block position {} out of range, the block has {} columns",
                position,
                self.columns.len()
            )));
        }
        Ok(ColumnWithField::new(
            self.columns[position].clone(),
            self.schema.field(position).clone(),
        ))
    }

    /// Place a column at `position`, appending when `position` is one past
    /// the last occupied slot.
    pub fn set_column(&mut self, position: usize, field: DataField, column: ColumnRef) -> Result<()> {
        if position > self.columns.len() {
            return Err(ErrorCode::BadArguments(format!(
                "Block position {} out of range, the block has {} columns",
                position,
                self.columns.len()
            )));
        }

        let mut fields = self.schema.fields().to_vec();
        if position == self.columns.len() {
            fields.push(field);
            self.columns.push(column);
        } else {
            fields[position] = field;
            self.columns[position] = column;
        }
        self.schema = DataSchemaRefExt::create(fields);
        Ok(())
    }

    pub fn try_column_by_name(&self, name: &str) -> Result<&ColumnRef> {
        let idx = self.schema.index_of(name)?;
        Ok(&self.columns[idx])
    }
}

impl fmt::Debug for DataBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = pretty_format_blocks(&[self.clone()]).expect("Pretty format blocks error");
        let lines: Vec<&str> = formatted.trim().lines().collect();
        write!(f, "\n{:#?}\n", lines)
    }
}
