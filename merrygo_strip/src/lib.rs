// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=merrygo_strip --heading-base-level=0

//! Merrygo Strip: Kurbo-native fixed-page geometry for paged carousels.
//!
//! A strip is the horizontal run of equal-size page frames that a paging
//! carousel scrolls through. This crate owns that geometry and nothing else:
//!
//! - Every page gets the same sentinel container box (page width × page
//!   height), regardless of what the caller renders into it, so paging math
//!   stays exact when content underflows or overflows.
//! - Page width defaults to the live viewport width and keeps tracking it,
//!   so a rotation or window resize never desynchronizes index math from
//!   frame layout.
//! - Offset↔index conversions ([`PageStrip::index_at_offset`],
//!   [`PageStrip::offset_for_index`]) are the settle math used to reconcile
//!   a controller's index with where a scroll actually came to rest.
//!
//! ## Not a virtualizer
//!
//! This crate does not implement windowing, momentum physics, or gesture
//! handling. The host list primitive owns those. [`PageStrip::pages`] and
//! [`PageStrip::visible_range`] answer "which frames touch this viewport",
//! a building block hosts can use for their own virtualization, nothing
//! more.
//!
//! ## API overview
//!
//! - [`PageStrip`]: the strip; constructed from a [`StripConfig`].
//! - [`StripConfig`]: item count, required page height, optional page width,
//!   viewport width.
//! - [`PageInfo`] / [`PageFlags`]: per-page frame plus VISIBLE/CURRENT
//!   marks, produced by [`PageStrip::pages`].
//!
//! ### Minimal usage
//!
//! ```
//! use merrygo_strip::{PageStrip, StripConfig};
//!
//! // Six pages, full-viewport width.
//! let mut strip = PageStrip::new(StripConfig {
//!     item_count: 6,
//!     page_height: 200.0,
//!     viewport_width: 360.0,
//!     ..Default::default()
//! });
//!
//! assert_eq!(strip.page_width(), 360.0);
//! assert_eq!(strip.content_width(), 2160.0);
//!
//! // A scroll that settled at offset 450 with 150-wide pages is page 3.
//! strip.set_page_width(Some(150.0));
//! assert_eq!(strip.index_at_offset(450.0), 3);
//! ```
//!
//! ### Visible frames for a viewport
//!
//! ```
//! use kurbo::Rect;
//! use merrygo_strip::{PageFlags, PageStrip, StripConfig};
//!
//! let strip = PageStrip::new(StripConfig {
//!     item_count: 10,
//!     page_height: 100.0,
//!     viewport_width: 150.0,
//!     ..Default::default()
//! });
//!
//! let viewport = Rect::new(150.0, 0.0, 450.0, 100.0);
//! let visible = strip
//!     .pages(viewport, 1)
//!     .filter(|p| p.flags.contains(PageFlags::VISIBLE))
//!     .count();
//! assert_eq!(visible, 2);
//! assert_eq!(strip.visible_range(150.0, 450.0), 1..3);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod strip;
pub mod types;

pub use strip::PageStrip;
pub use types::{PageFlags, PageInfo, StripConfig};
