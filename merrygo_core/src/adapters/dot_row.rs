// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Merrygo Dots.
//!
//! ## Feature
//!
//! Enable with `dot_row_adapter`.
//!
//! ## Notes
//!
//! [`DotRow`] is the concrete dot indicator; implementing
//! [`DotSink`](crate::types::DotSink) for it lets
//! [`run_effects`](crate::types::run_effects) push selection changes
//! straight into the row. The push is strictly one-directional: nothing
//! here reads the row back into the controller.

use merrygo_dots::{DotOptions, DotRow};

use crate::controller::Carousel;
use crate::types::DotSink;

impl DotSink for DotRow {
    fn set_selected(&mut self, index: usize) {
        DotRow::set_selected(self, index);
    }
}

/// Build a dot row mirroring a controller's length and current index.
pub fn dot_row_for(carousel: &Carousel, options: DotOptions) -> DotRow {
    DotRow::new(carousel.current_index(), carousel.item_count(), options)
}
