// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The strip itself: fixed-page frames and offset/index conversions.
//!
//! ## Overview
//!
//! [`PageStrip`] lays `item_count` equal frames side by side, left to right,
//! starting at the origin. All queries are pure; mutation is limited to the
//! configuration setters. Float inputs are assumed finite (no NaNs).

use core::ops::Range;

use kurbo::{Point, Rect, Size};

use crate::types::{PageFlags, PageInfo, StripConfig};

/// Fixed-page strip geometry.
///
/// ## Usage
///
/// - Construct with [`PageStrip::new`] from a [`StripConfig`].
/// - Feed viewport changes in via [`PageStrip::set_viewport_width`]; a strip
///   configured without an explicit page width follows them.
/// - Convert between scroll offsets and page indices with
///   [`PageStrip::index_at_offset`] and [`PageStrip::offset_for_index`].
/// - Walk [`PageStrip::pages`] to render each item into its sentinel frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageStrip {
    item_count: usize,
    page_height: f64,
    page_width: Option<f64>,
    viewport_width: f64,
}

impl PageStrip {
    /// Create a strip from a configuration.
    pub fn new(config: StripConfig) -> Self {
        Self {
            item_count: config.item_count,
            page_height: config.page_height,
            page_width: config.page_width,
            viewport_width: config.viewport_width,
        }
    }

    /// Number of pages.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Replace the page count (the caller swapped the item sequence).
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
    }

    /// Effective page width: the explicit width, or the viewport width.
    pub fn page_width(&self) -> f64 {
        self.page_width.unwrap_or(self.viewport_width)
    }

    /// Fixed page height.
    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    /// The sentinel container box applied to every page.
    pub fn page_size(&self) -> Size {
        Size::new(self.page_width(), self.page_height)
    }

    /// Set or clear the explicit page width; `None` follows the viewport.
    pub fn set_page_width(&mut self, width: Option<f64>) {
        self.page_width = width;
    }

    /// Set the fixed page height.
    pub fn set_page_height(&mut self, height: f64) {
        self.page_height = height;
    }

    /// Current viewport width.
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Track a viewport change (rotation, window resize).
    ///
    /// Strips without an explicit page width re-derive their page width from
    /// this value, keeping frame layout and index math in agreement.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Total width of all page frames.
    pub fn content_width(&self) -> f64 {
        self.page_width() * self.item_count as f64
    }

    /// Total size of the strip content.
    pub fn content_size(&self) -> Size {
        Size::new(self.content_width(), self.page_height)
    }

    /// World-space frame of page `index`.
    ///
    /// Pure arithmetic; `index` is not required to be within the current
    /// page count.
    pub fn page_rect(&self, index: usize) -> Rect {
        let w = self.page_width();
        let x0 = index as f64 * w;
        Rect::new(x0, 0.0, x0 + w, self.page_height)
    }

    /// Scroll offset that puts page `index` at the viewport origin.
    pub fn offset_for_index(&self, index: usize) -> Point {
        Point::new(index as f64 * self.page_width(), 0.0)
    }

    /// Page index a scroll at `offset_x` has settled on.
    ///
    /// `floor(offset_x / page_width)`, clamped into `[0, item_count - 1]`.
    /// Returns `0` for an empty strip or a degenerate page width.
    pub fn index_at_offset(&self, offset_x: f64) -> usize {
        let w = self.page_width();
        if self.item_count == 0 || w <= 0.0 {
            return 0;
        }
        let q = offset_x / w;
        if q <= 0.0 {
            return 0;
        }
        let last = self.item_count - 1;
        if q >= last as f64 {
            last
        } else {
            // Truncation equals floor for the non-negative quotient here.
            #[allow(
                clippy::cast_possible_truncation,
                reason = "q is non-negative and below item_count."
            )]
            {
                q as usize
            }
        }
    }

    /// Indices of pages whose frames intersect the horizontal span
    /// `[x0, x1)`.
    pub fn visible_range(&self, x0: f64, x1: f64) -> Range<usize> {
        let w = self.page_width();
        if self.item_count == 0 || w <= 0.0 || x1 <= x0 {
            return 0..0;
        }
        let q1 = x1 / w;
        if q1 <= 0.0 {
            return 0..0;
        }
        let q0 = x0 / w;
        let start = if q0 <= 0.0 {
            0
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "q0 is non-negative; the cast saturates and is clamped below."
            )]
            {
                (q0 as usize).min(self.item_count)
            }
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "q1 is positive; the cast saturates and is clamped below."
        )]
        let mut end = q1 as usize;
        if (end as f64) < q1 {
            end += 1;
        }
        let end = end.min(self.item_count);
        start.min(end)..end
    }

    /// Walk every page frame, marking visibility against `viewport` and
    /// currency against `current`.
    pub fn pages(&self, viewport: Rect, current: usize) -> impl Iterator<Item = PageInfo> + '_ {
        (0..self.item_count).map(move |index| {
            let frame = self.page_rect(index);
            let overlap = frame.intersect(viewport);
            let mut flags = PageFlags::empty();
            if overlap.width() > 0.0 && overlap.height() > 0.0 {
                flags |= PageFlags::VISIBLE;
            }
            if index == current {
                flags |= PageFlags::CURRENT;
            }
            PageInfo {
                index,
                frame,
                flags,
            }
        })
    }
}
