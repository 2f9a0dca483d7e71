// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use num::traits::AsPrimitive;
use num::Bounded;
use num::NumCast;
use num::One;
use num::Zero;

use crate::data_value::DataValue;
use crate::types::DataType;

/// A native scalar the kernels are monomorphized over: the eight integer
/// widths plus the two floats. Dates reuse `u16`/`u32` as their storage
/// scalar and never implement this trait themselves.
pub trait PrimitiveType:
    'static
    + Copy
    + Default
    + Send
    + Sync
    + PartialOrd
    + std::fmt::Debug
    + std::fmt::Display
    + NumCast
    + Bounded
    + Zero
    + One
    + AsPrimitive<f64>
{
    const SIGNED: bool;
    const FLOATING: bool;

    fn data_type() -> DataType;
    fn to_data_value(self) -> DataValue;
}

macro_rules! impl_primitive_type {
    ($native:ident, $data_type:ident, $signed:expr, $floating:expr) => {
        impl PrimitiveType for $native {
            const SIGNED: bool = $signed;
            const FLOATING: bool = $floating;

            #[inline]
            fn data_type() -> DataType {
                DataType::$data_type
            }

            #[inline]
            fn to_data_value(self) -> DataValue {
                self.into()
            }
        }
    };
}

impl_primitive_type!(u8, UInt8, false, false);
impl_primitive_type!(u16, UInt16, false, false);
impl_primitive_type!(u32, UInt32, false, false);
impl_primitive_type!(u64, UInt64, false, false);
impl_primitive_type!(i8, Int8, true, false);
impl_primitive_type!(i16, Int16, true, false);
impl_primitive_type!(i32, Int32, true, false);
impl_primitive_type!(i64, Int64, true, false);
impl_primitive_type!(f32, Float32, true, true);
impl_primitive_type!(f64, Float64, true, true);
