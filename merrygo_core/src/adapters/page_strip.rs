// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Merrygo Strip.
//!
//! ## Feature
//!
//! Enable with `strip_adapter`.
//!
//! ## Notes
//!
//! These helpers translate between strip geometry and the controller
//! protocol. Hosts whose list primitive reports pixel offsets use
//! [`settle_metrics`] to build the controller's settle payload, and
//! [`scroll_target`] to turn a `ScrollTo` effect's index into the absolute
//! offset their scroll command wants.

use kurbo::Point;
use merrygo_strip::PageStrip;

use crate::types::ScrollMetrics;

/// Build the settle payload for a momentum-end event from strip geometry.
///
/// A paging list's measured viewport is one page wide, so the strip's page
/// width stands in for the event's viewport width. The result feeds
/// [`Carousel::momentum_end`](crate::controller::Carousel::momentum_end).
pub fn settle_metrics(strip: &PageStrip, content_offset_x: f64) -> ScrollMetrics {
    ScrollMetrics {
        content_offset_x,
        viewport_width: strip.page_width(),
    }
}

/// Absolute offset that fulfills a scroll-to-index request.
///
/// For hosts whose scroll command takes an offset rather than an index.
pub fn scroll_target(strip: &PageStrip, index: usize) -> Point {
    strip.offset_for_index(index)
}
