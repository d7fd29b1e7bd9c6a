// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the controller: event payloads, effects, and the host
//! seams.
//!
//! ## Overview
//!
//! These types describe the controller protocol. Handlers on
//! [`Carousel`](crate::controller::Carousel) consume the payload types and
//! produce [`Effect`] sequences; [`run_effects`] executes a sequence
//! against the [`ScrollHost`] and [`DotSink`] seams a toolkit implements.

/// Offsets reported by a momentum-end settle event.
///
/// Mirrors what virtualized-list hosts report when scrolling comes to rest:
/// the horizontal content offset and the measured viewport width. The
/// settled page is `floor(content_offset_x / viewport_width)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Horizontal offset of the content at rest.
    pub content_offset_x: f64,
    /// Measured width of the viewport the event was reported against.
    pub viewport_width: f64,
}

/// Failure payload a virtualized host reports when it cannot jump straight
/// to a requested index (typically because the target is beyond what it has
/// measured).
///
/// The controller treats the payload opaquely (recovery is positional, not
/// data-driven), but hosts without a native failure object can use this
/// struct as their forwarded payload.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollToIndexFailure {
    /// Index the host was asked to reach.
    pub index: usize,
    /// Highest index the host has measured so far, if it knows.
    pub highest_measured_index: Option<usize>,
    /// The host's running estimate of one item's length.
    pub average_item_length: f64,
}

/// One instruction emitted by a controller handler.
///
/// Effects are executed in sequence order by a higher-level dispatcher (see
/// [`run_effects`]); the controller itself performs no side effects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect<M> {
    /// Ask the host list to scroll to a page.
    ScrollTo {
        /// Target page index.
        index: usize,
        /// Whether the host should animate the scroll.
        animated: bool,
    },
    /// Push a new selected index to the dot indicator.
    SelectDot(usize),
    /// Deliver the original host payload to the caller's own hook for the
    /// event being handled.
    Forward(M),
}

/// The host list's imperative scroll command.
///
/// Implement this for whatever drives your toolkit's list primitive; it is
/// the only command the controller ever issues to the list.
pub trait ScrollHost {
    /// Scroll the list so page `index` is at the viewport origin.
    fn scroll_to_index(&mut self, index: usize, animated: bool);
}

/// The dot indicator's narrow mutation handle.
///
/// A single setter, so the indicator can be updated imperatively without
/// routing through shared state that would re-render the host list.
pub trait DotSink {
    /// Replace which marker is rendered as selected.
    fn set_selected(&mut self, index: usize);
}

/// Execute an effect sequence against the host seams.
///
/// Walks the sequence in order: [`Effect::ScrollTo`] goes to `host`,
/// [`Effect::SelectDot`] to `dots` (ignored when the carousel runs without
/// an indicator), and [`Effect::Forward`] to `forward`, which stands in for
/// the caller's own hook for the event that produced the sequence.
pub fn run_effects<M>(
    effects: impl IntoIterator<Item = Effect<M>>,
    host: &mut impl ScrollHost,
    mut dots: Option<&mut dyn DotSink>,
    mut forward: impl FnMut(M),
) {
    for effect in effects {
        match effect {
            Effect::ScrollTo { index, animated } => host.scroll_to_index(index, animated),
            Effect::SelectDot(index) => {
                if let Some(d) = dots.as_deref_mut() {
                    d.set_selected(index);
                }
            }
            Effect::Forward(meta) => forward(meta),
        }
    }
}
