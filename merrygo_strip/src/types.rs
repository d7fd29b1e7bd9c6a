// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the strip: configuration, per-page info, and flags.

use kurbo::Rect;

/// Configuration for a [`PageStrip`](crate::PageStrip).
///
/// `page_width: None` means "use the viewport width", and the strip keeps
/// that coupling live: later [`set_viewport_width`](crate::PageStrip::set_viewport_width)
/// calls re-derive the effective page width. An explicit `Some(width)` is
/// independent of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripConfig {
    /// Number of pages in the strip.
    pub item_count: usize,
    /// Fixed height of every page frame.
    pub page_height: f64,
    /// Fixed width of every page frame; `None` follows the viewport width.
    pub page_width: Option<f64>,
    /// Width of the host viewport.
    pub viewport_width: f64,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            item_count: 0,
            page_height: 0.0,
            page_width: None,
            viewport_width: 0.0,
        }
    }
}

bitflags::bitflags! {
    /// Per-page marks produced by [`PageStrip::pages`](crate::PageStrip::pages).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PageFlags: u8 {
        /// Frame intersects the queried viewport.
        const VISIBLE = 0b0000_0001;
        /// Page is the controller's current page.
        const CURRENT = 0b0000_0010;
    }
}

/// One page frame of the strip.
///
/// Yielded by [`PageStrip::pages`](crate::PageStrip::pages). The frame is
/// the sentinel container box: hosts render the caller's item inside it and
/// clip or letterbox as they see fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageInfo {
    /// Position of the page in the strip.
    pub index: usize,
    /// World-space frame of the page.
    pub frame: Rect,
    /// Visibility and currency marks for the queried viewport.
    pub flags: PageFlags,
}
