// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

use common_exception::ErrorCode;
use common_exception::Result;
use serde::Deserialize;
use serde::Serialize;

/// The catalog-visible type of a column.
///
/// `Date` is stored as `UInt16` days since the epoch and `DateTime` as
/// `UInt32` seconds since the epoch; every other variant is stored as itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Date,
    DateTime,
}

/// The fixed candidate order the dispatchers walk: dates first, then the
/// numerics from narrow unsigned to wide floating.
pub const ARITHMETIC_CANDIDATE_TYPES: [DataType; 12] = [
    DataType::Date,
    DataType::DateTime,
    DataType::UInt8,
    DataType::UInt16,
    DataType::UInt32,
    DataType::UInt64,
    DataType::Int8,
    DataType::Int16,
    DataType::Int32,
    DataType::Int64,
    DataType::Float32,
    DataType::Float64,
];

impl DataType {
    pub fn name(&self) -> &'static str {
        match self {
            DataType::UInt8 => "UInt8",
            DataType::UInt16 => "UInt16",
            DataType::UInt32 => "UInt32",
            DataType::UInt64 => "UInt64",
            DataType::Int8 => "Int8",
            DataType::Int16 => "Int16",
            DataType::Int32 => "Int32",
            DataType::Int64 => "Int64",
            DataType::Float32 => "Float32",
            DataType::Float64 => "Float64",
            DataType::Date => "Date",
            DataType::DateTime => "DateTime",
        }
    }

    /// The storage scalar behind the declared type.
    pub fn to_physical_type(&self) -> DataType {
        match self {
            DataType::Date => DataType::UInt16,
            DataType::DateTime => DataType::UInt32,
            other => *other,
        }
    }

    pub fn is_signed_numeric(&self) -> bool {
        matches!(
            self,
            DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::Float32
                | DataType::Float64
        )
    }

    pub fn is_numeric(&self) -> bool {
        self.is_signed_numeric()
            || matches!(
                self,
                DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64
            )
    }

    pub fn is_floating(&self) -> bool {
        matches!(self, DataType::Float32 | DataType::Float64)
    }

    pub fn is_integer(&self) -> bool {
        self.is_numeric() && !self.is_floating()
    }

    pub fn is_date_or_date_time(&self) -> bool {
        matches!(self, DataType::Date | DataType::DateTime)
    }

    pub fn numeric_byte_size(&self) -> Result<usize> {
        match self {
            DataType::Int8 | DataType::UInt8 => Ok(1),
            DataType::Int16 | DataType::UInt16 => Ok(2),
            DataType::Int32 | DataType::UInt32 | DataType::Float32 => Ok(4),
            DataType::Int64 | DataType::UInt64 | DataType::Float64 => Ok(8),
            _ => Err(ErrorCode::BadArguments(format!(
                "Function numeric_byte_size argument must be numeric types, but got {:?}",
                self
            ))),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub fn next_size(size: usize) -> usize {
    if size < 8_usize {
        return size * 2;
    }
    size
}

pub fn construct_numeric_type(
    is_signed: bool,
    is_floating: bool,
    byte_size: usize,
) -> Result<DataType> {
    match (is_signed, is_floating, byte_size) {
        (false, false, 1) => Ok(DataType::UInt8),
        (false, false, 2) => Ok(DataType::UInt16),
        (false, false, 4) => Ok(DataType::UInt32),
        (false, false, 8) => Ok(DataType::UInt64),
        (true, false, 1) => Ok(DataType::Int8),
        (true, false, 2) => Ok(DataType::Int16),
        (true, false, 4) => Ok(DataType::Int32),
        (true, false, 8) => Ok(DataType::Int64),
        (_, true, 1) => Ok(DataType::Float32),
        (_, true, 2) => Ok(DataType::Float32),
        (_, true, 4) => Ok(DataType::Float32),
        (_, true, 8) => Ok(DataType::Float64),

        // wider than the widest native scalar, cap at 64 bits
        (false, false, d) if d > 8 => Ok(DataType::UInt64),
        (true, false, d) if d > 8 => Ok(DataType::Int64),
        (_, true, d) if d > 8 => Ok(DataType::Float64),

        _ => Err(ErrorCode::BadDataValueType(format!(
            "Can't construct type from is_signed: {}, is_floating: {}, byte_size: {}",
            is_signed, is_floating, byte_size
        ))),
    }
}
