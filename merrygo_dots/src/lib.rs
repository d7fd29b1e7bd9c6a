// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=merrygo_dots --heading-base-level=0

//! Merrygo Dots: position indicator dots for paged carousels.
//!
//! A dot row displays one fixed-size marker per page with exactly one marker
//! distinguished as selected. It is deliberately decoupled from the carousel
//! controller: selection changes arrive through the narrow
//! [`DotRow::set_selected`] handle, pushed imperatively, so the (much more
//! expensive) host list never re-renders just because the selection moved.
//!
//! - [`DotRow`] owns the selection state machine: one state variable, two
//!   write paths (initial value, imperative pushes), no other transitions.
//! - [`DotRow::markers`] derives marker geometry on demand; changing the
//!   selection never rebuilds the marker set.
//! - [`DotOptions`] carries the visual knobs with their conventional
//!   defaults (5px markers, neutral gray, near-black selection).
//! - [`Rgba`] is the crate's own minimal color primitive; downstream
//!   toolkits convert it to whatever their renderer wants.
//!
//! # Example
//!
//! ```
//! use merrygo_dots::{DotOptions, DotRow};
//!
//! let mut row = DotRow::new(0, 3, DotOptions::default());
//! row.set_selected(2);
//!
//! let selected: Vec<_> = row.markers().filter(|m| m.selected).collect();
//! assert_eq!(selected.len(), 1);
//! assert_eq!(selected[0].index, 2);
//!
//! // Markers sit in 2*size slots: 5px dots center every 10px.
//! assert_eq!(selected[0].shape.center.x, 25.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod row;
pub mod types;

pub use row::{DotMarker, DotRow};
pub use types::{DotOptions, Rgba};
