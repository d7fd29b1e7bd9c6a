// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable Merrygo demos.
//!
//! See the `examples/` directory; each file is one scenario:
//! - `carousel_basics`: strip geometry and settle reconciliation.
//! - `carousel_auto_scroll`: the deadline timer under a simulated clock.
//! - `carousel_dots`: the full pipeline including the dot indicator.
