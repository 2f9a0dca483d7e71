// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

pub mod scalars;
