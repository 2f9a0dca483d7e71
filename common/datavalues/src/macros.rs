// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

/// Bind the native scalar matching a numeric `DataType` to a type parameter
/// and expand `$body` with it, or expand `$nbody` for non-numeric types.
#[macro_export]
macro_rules! with_match_primitive_type {
    ($key_type:expr, | $_:tt $T:ident | $body:tt, $nbody:tt) => {{
        macro_rules! __with_ty__ {
            ( $_ $T:ident ) => {
                $body
            };
        }
        match $key_type {
            $crate::DataType::UInt8 => __with_ty__! { u8 },
            $crate::DataType::UInt16 => __with_ty__! { u16 },
            $crate::DataType::UInt32 => __with_ty__! { u32 },
            $crate::DataType::UInt64 => __with_ty__! { u64 },
            $crate::DataType::Int8 => __with_ty__! { i8 },
            $crate::DataType::Int16 => __with_ty__! { i16 },
            $crate::DataType::Int32 => __with_ty__! { i32 },
            $crate::DataType::Int64 => __with_ty__! { i64 },
            $crate::DataType::Float32 => __with_ty__! { f32 },
            $crate::DataType::Float64 => __with_ty__! { f64 },
            _ => $nbody,
        }
    }};
}

/// Same as [`with_match_primitive_type`] but only for the integer scalars.
#[macro_export]
macro_rules! with_match_integer_type {
    ($key_type:expr, | $_:tt $T:ident | $body:tt, $nbody:tt) => {{
        macro_rules! __with_ty__ {
            ( $_ $T:ident ) => {
                $body
            };
        }
        match $key_type {
            $crate::DataType::UInt8 => __with_ty__! { u8 },
            $crate::DataType::UInt16 => __with_ty__! { u16 },
            $crate::DataType::UInt32 => __with_ty__! { u32 },
            $crate::DataType::UInt64 => __with_ty__! { u64 },
            $crate::DataType::Int8 => __with_ty__! { i8 },
            $crate::DataType::Int16 => __with_ty__! { i16 },
            $crate::DataType::Int32 => __with_ty__! { i32 },
            $crate::DataType::Int64 => __with_ty__! { i64 },
            _ => $nbody,
        }
    }};
}
