// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

mod type_;

pub use type_::PrimitiveType;
