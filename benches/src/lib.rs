// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for Merrygo. See `benches/strip_queries.rs`.
