// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=merrygo_core --heading-base-level=0

//! Merrygo Core: a deterministic, `no_std` controller for paged carousels.
//!
//! ## Overview
//!
//! This crate owns the carousel's index/timer state machine and nothing
//! else. It does not render, does not run an OS timer, and does not
//! recognize gestures. Feed it the events a host list primitive reports
//! (drag begin/end, momentum end, scroll-to-index failure) and it emits a
//! deterministic sequence of [`Effect`](crate::types::Effect)s you dispatch:
//! scroll-to-index requests, dot-selection pushes, and forwards of the
//! original host payload to the caller's own hooks.
//!
//! ## Inputs
//!
//! Each handler on [`Carousel`](crate::controller::Carousel) mirrors one
//! host hook and takes the host-native payload as an opaque `M`. The
//! controller never inspects `M`; it reappears unchanged in a
//! [`Forward`](crate::types::Effect::Forward) effect after internal handling
//! so caller-supplied hooks still run, in order, behind the controller's
//! own policy.
//!
//! ## Effects
//!
//! Effects are instructions, not actions. Execute them in sequence order:
//! a [`ScrollTo`](crate::types::Effect::ScrollTo) goes to the host list's
//! imperative scroll command, a [`SelectDot`](crate::types::Effect::SelectDot)
//! goes to the dot indicator's narrow mutation handle, and a `Forward` goes
//! to the caller's hook for that event. [`run_effects`](crate::types::run_effects)
//! walks a sequence against the [`ScrollHost`](crate::types::ScrollHost) and
//! [`DotSink`](crate::types::DotSink) seams.
//!
//! ## Auto-scroll
//!
//! The recurring timer is a deadline machine driven by a host-supplied
//! monotonic clock: call [`poll`](crate::controller::Carousel::poll) with
//! the current time in milliseconds and execute whatever it returns;
//! [`next_deadline_ms`](crate::controller::Carousel::next_deadline_ms)
//! tells a wait-until style event loop when to wake. A drag pauses the
//! timer synchronously; the drag's end re-arms it a full interval out. A
//! poll arriving late fires a single tick and re-arms relative to `now`, so
//! ticks never pile up behind a stalled host.
//!
//! ## Reconciliation
//!
//! The controller advances its index optimistically on every tick and
//! accepts correction from exactly one place: the momentum-end settle
//! event, whose reported offset is authoritative. Everything in between is
//! best effort by design.
//!
//! ## Workflow
//!
//! 1) Build a [`Carousel`](crate::controller::Carousel) from a
//!    [`CarouselConfig`](crate::controller::CarouselConfig).
//! 2) Wire the host list's hooks to the matching handlers, handing each the
//!    host payload.
//! 3) Drive [`poll`](crate::controller::Carousel::poll) from your event
//!    loop's clock.
//! 4) Execute every returned effect sequence, e.g. via
//!    [`run_effects`](crate::types::run_effects).
//!
//! ## Driving the effects
//!
//! ```
//! use merrygo_core::controller::{Carousel, CarouselConfig};
//! use merrygo_core::types::{run_effects, ScrollHost};
//!
//! /// Records the scroll commands a real host would execute.
//! struct Recorder(Vec<(usize, bool)>);
//!
//! impl ScrollHost for Recorder {
//!     fn scroll_to_index(&mut self, index: usize, animated: bool) {
//!         self.0.push((index, animated));
//!     }
//! }
//!
//! let mut carousel = Carousel::new(CarouselConfig {
//!     item_count: 3,
//!     auto_scroll_interval_ms: Some(3000),
//!     ..Default::default()
//! });
//!
//! let mut host = Recorder(Vec::new());
//! let effects = carousel.auto_scroll_tick::<()>();
//! run_effects(effects, &mut host, None, |_meta| {});
//!
//! assert_eq!(host.0, vec![(1, true)]);
//! assert_eq!(carousel.current_index(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod controller;
pub mod timer;
pub mod types;
