// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with the other Merrygo crates.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "dot_row_adapter")]
pub mod dot_row;

#[cfg(feature = "strip_adapter")]
pub mod page_strip;
