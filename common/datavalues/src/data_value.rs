// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

use common_exception::ErrorCode;
use common_exception::Result;

/// A single scalar value lifted out of a column, collapsed to the widest
/// native representation of its signedness class. Used for constant columns,
/// diagnostics and tests; kernels never go through `DataValue`.
#[derive(Clone, Debug, PartialEq)]
pub enum DataValue {
    UInt64(u64),
    Int64(i64),
    Float64(f64),
}

impl DataValue {
    pub fn as_u64(&self) -> Result<u64> {
        match self {
            DataValue::UInt64(v) => Ok(*v),
            other => Err(ErrorCode::BadDataValueType(format!(
                "Unexpected type: {:?} while getting u64",
                other
            ))),
        }
    }

    pub fn as_i64(&self) -> Result<i64> {
        match self {
            DataValue::Int64(v) => Ok(*v),
            other => Err(ErrorCode::BadDataValueType(format!(
                "Unexpected type: {:?} while getting i64",
                other
            ))),
        }
    }

    pub fn as_f64(&self) -> Result<f64> {
        match self {
            DataValue::Float64(v) => Ok(*v),
            other => Err(ErrorCode::BadDataValueType(format!(
                "Unexpected type: {:?} while getting f64",
                other
            ))),
        }
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataValue::UInt64(v) => write!(f, "{}", v),
            DataValue::Int64(v) => write!(f, "{}", v),
            DataValue::Float64(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! impl_from_unsigned {
    ($native:ty) => {
        impl From<$native> for DataValue {
            fn from(v: $native) -> Self {
                DataValue::UInt64(v as u64)
            }
        }
    };
}

macro_rules! impl_from_signed {
    ($native:ty) => {
        impl From<$native> for DataValue {
            fn from(v: $native) -> Self {
                DataValue::Int64(v as i64)
            }
        }
    };
}

impl_from_unsigned!(u8);
impl_from_unsigned!(u16);
impl_from_unsigned!(u32);
impl_from_unsigned!(u64);
impl_from_signed!(i8);
impl_from_signed!(i16);
impl_from_signed!(i32);
impl_from_signed!(i64);

impl From<f32> for DataValue {
    fn from(v: f32) -> Self {
        DataValue::Float64(v as f64)
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        DataValue::Float64(v)
    }
}
