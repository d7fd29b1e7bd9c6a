// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller implementation.
//!
//! ## Overview
//!
//! Owns the current page index and the auto-scroll timer, bridges host list
//! events to index updates, and emits effect sequences for the host to
//! execute.
//!
//! ## Index discipline
//!
//! - The index always stays within `[0, item_count - 1]`, or `0` when the
//!   sequence is empty.
//! - Ticks advance it optimistically, without waiting for the host list to
//!   confirm the scroll.
//! - The momentum-end settle event is the sole reconciliation point; its
//!   reported offset wins over the optimistic value.
//!
//! ## Timer discipline
//!
//! - At most one live deadline, owned here.
//! - Drag begin pauses synchronously; drag end re-arms a full interval out.
//! - [`Carousel::teardown`] releases the timer permanently; a drag end
//!   arriving afterwards re-arms nothing.
//!
//! ## See Also
//!
//! [`timer`](crate::timer) for the deadline machine,
//! [`types`](crate::types) for the effect vocabulary and host seams.

use alloc::vec;
use alloc::vec::Vec;

use crate::timer::IntervalTimer;
use crate::types::{Effect, ScrollMetrics};

/// Configuration for a [`Carousel`].
///
/// Geometry (page width/height, viewport) lives with the strip, not here;
/// the controller needs only the sequence length, where to start, whether
/// to auto-scroll, and whether a dot indicator is attached.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Length of the item sequence.
    pub item_count: usize,
    /// Page to start on; clamped into the sequence.
    pub start_index: usize,
    /// Auto-scroll interval in milliseconds. `None` (or zero) disables
    /// auto-scroll entirely.
    pub auto_scroll_interval_ms: Option<u64>,
    /// Whether a dot indicator is attached and should receive
    /// [`Effect::SelectDot`] pushes.
    pub show_dots: bool,
}

/// The carousel controller state machine.
///
/// ## Usage
///
/// - Construct with [`Carousel::new`].
/// - Wire each host list hook to its handler: `scroll_begin_drag`,
///   `scroll_end_drag`, `momentum_end`, `scroll_to_index_failed`.
/// - Drive the auto-scroll timer with [`Carousel::poll`] from your event
///   loop clock; [`Carousel::next_deadline_ms`] tells you when to wake.
/// - Execute every returned effect sequence in order (see
///   [`run_effects`](crate::types::run_effects)).
///
/// Handlers never perform side effects themselves; they mutate controller
/// state and describe what the host should do next.
#[derive(Clone, PartialEq, Eq)]
pub struct Carousel {
    item_count: usize,
    index: usize,
    show_dots: bool,
    timer: Option<IntervalTimer>,
}

impl core::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Carousel")
            .field("index", &self.index)
            .field("item_count", &self.item_count)
            .field("show_dots", &self.show_dots)
            .field("auto_scroll_enabled", &self.auto_scroll_enabled())
            .field("next_deadline_ms", &self.next_deadline_ms())
            .finish_non_exhaustive()
    }
}

impl Carousel {
    /// Create a controller from a configuration.
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            item_count: config.item_count,
            index: clamp_index(config.start_index, config.item_count),
            show_dots: config.show_dots,
            timer: config.auto_scroll_interval_ms.and_then(IntervalTimer::new),
        }
    }

    /// The controller's current page index.
    ///
    /// Best estimate, not necessarily the host list's true visible page at
    /// every instant; settle events reconcile the two.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Length of the item sequence as last reported.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Whether a dot indicator receives selection pushes.
    pub fn dots_enabled(&self) -> bool {
        self.show_dots
    }

    /// Whether auto-scroll is configured (and not torn down).
    pub fn auto_scroll_enabled(&self) -> bool {
        self.timer.is_some()
    }

    /// When the auto-scroll timer next wants a [`Carousel::poll`], if a
    /// deadline is armed.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.timer.as_ref().and_then(IntervalTimer::deadline_ms)
    }

    /// The caller replaced the item sequence wholesale.
    ///
    /// Re-clamps the current index. An emptied sequence defers the timer's
    /// deadline; the next poll after a refill re-arms it.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        self.index = clamp_index(self.index, count);
        if count == 0
            && let Some(t) = &mut self.timer
        {
            t.defer();
        }
    }

    /// Advance to the next page, wrapping at the end.
    ///
    /// The tick handler: requests an animated scroll to the next index,
    /// adopts it optimistically, and pushes it to the dot indicator when
    /// one is attached. No-op on an empty sequence.
    pub fn auto_scroll_tick<M>(&mut self) -> Vec<Effect<M>> {
        if self.item_count == 0 {
            return Vec::new();
        }
        let next = if self.index >= self.item_count - 1 {
            0
        } else {
            self.index + 1
        };
        let mut out = vec![Effect::ScrollTo {
            index: next,
            animated: true,
        }];
        self.index = next;
        if self.show_dots {
            out.push(Effect::SelectDot(next));
        }
        out
    }

    /// Drive the auto-scroll timer to `now_ms`.
    ///
    /// Fires at most one tick per call; returns that tick's effects, or an
    /// empty sequence. Idle while the sequence is empty.
    pub fn poll<M>(&mut self, now_ms: u64) -> Vec<Effect<M>> {
        if self.item_count == 0 {
            return Vec::new();
        }
        let fired = match &mut self.timer {
            Some(t) => t.poll(now_ms),
            None => false,
        };
        if fired {
            self.auto_scroll_tick()
        } else {
            Vec::new()
        }
    }

    /// The user started dragging: pause the timer so it cannot fight the
    /// gesture, then forward the host payload.
    pub fn scroll_begin_drag<M>(&mut self, meta: M) -> Vec<Effect<M>> {
        if let Some(t) = &mut self.timer {
            t.pause();
        }
        vec![Effect::Forward(meta)]
    }

    /// The user released the drag: re-arm the timer a full interval from
    /// `now_ms`, before momentum settles, then forward the host payload.
    pub fn scroll_end_drag<M>(&mut self, now_ms: u64, meta: M) -> Vec<Effect<M>> {
        if let Some(t) = &mut self.timer {
            t.resume(now_ms);
        }
        vec![Effect::Forward(meta)]
    }

    /// Scrolling settled: reconcile the index with where the list actually
    /// came to rest, then forward the host payload.
    ///
    /// The settled index is `floor(content_offset_x / viewport_width)`,
    /// clamped into the sequence. When it differs from the current index
    /// the settled value wins, and the dot indicator is pushed if attached.
    /// Only runs while auto-scroll is configured; degenerate metrics
    /// (`viewport_width <= 0`) leave the index alone.
    pub fn momentum_end<M>(&mut self, metrics: ScrollMetrics, meta: M) -> Vec<Effect<M>> {
        let mut out = Vec::new();
        if self.timer.is_some() && self.item_count > 0 && metrics.viewport_width > 0.0 {
            let settled = settled_index(metrics, self.item_count);
            if settled != self.index {
                self.index = settled;
                if self.show_dots {
                    out.push(Effect::SelectDot(settled));
                }
            }
        }
        out.push(Effect::Forward(meta));
        out
    }

    /// The host list could not jump to a requested index.
    ///
    /// Recovery is positional: while auto-scroll is configured, nudge the
    /// list back to index `0` unanimated so it cannot stay stuck at an
    /// unreachable offset. The current index is left alone; the following
    /// settle event reconciles it. The original failure payload is
    /// forwarded unchanged.
    pub fn scroll_to_index_failed<M>(&self, failure: M) -> Vec<Effect<M>> {
        let mut out = Vec::new();
        if self.timer.is_some() {
            out.push(Effect::ScrollTo {
                index: 0,
                animated: false,
            });
        }
        out.push(Effect::Forward(failure));
        out
    }

    /// Release the timer unconditionally and permanently.
    ///
    /// Safe to call repeatedly, and safe when no timer was ever configured.
    /// After teardown no poll fires and no drag end re-arms anything.
    pub fn teardown(&mut self) {
        self.timer = None;
    }
}

fn settled_index(metrics: ScrollMetrics, item_count: usize) -> usize {
    let q = metrics.content_offset_x / metrics.viewport_width;
    if q <= 0.0 {
        return 0;
    }
    let last = item_count - 1;
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

fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { index.min(len - 1) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DotSink, ScrollHost, ScrollToIndexFailure, run_effects};
    use alloc::vec;
    use alloc::vec::Vec;

    fn auto(config_items: usize) -> Carousel {
        Carousel::new(CarouselConfig {
            item_count: config_items,
            auto_scroll_interval_ms: Some(3000),
            ..Default::default()
        })
    }

    fn metrics(offset: f64, width: f64) -> ScrollMetrics {
        ScrollMetrics {
            content_offset_x: offset,
            viewport_width: width,
        }
    }

    #[test]
    fn tick_advances_modulo_length() {
        for len in [1_usize, 2, 5, 8] {
            for start in 0..len {
                let mut c = Carousel::new(CarouselConfig {
                    item_count: len,
                    start_index: start,
                    auto_scroll_interval_ms: Some(1000),
                    ..Default::default()
                });
                let _ = c.auto_scroll_tick::<()>();
                assert_eq!(c.current_index(), (start + 1) % len, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn tick_requests_animated_scroll_before_dot_push() {
        let mut c = Carousel::new(CarouselConfig {
            item_count: 3,
            auto_scroll_interval_ms: Some(1000),
            show_dots: true,
            ..Default::default()
        });
        assert_eq!(
            c.auto_scroll_tick::<()>(),
            vec![
                Effect::ScrollTo {
                    index: 1,
                    animated: true
                },
                Effect::SelectDot(1),
            ]
        );
    }

    #[test]
    fn tick_without_dots_emits_no_dot_push() {
        let mut c = auto(3);
        assert_eq!(
            c.auto_scroll_tick::<()>(),
            vec![Effect::ScrollTo {
                index: 1,
                animated: true
            }]
        );
    }

    #[test]
    fn tick_on_empty_sequence_is_a_noop() {
        let mut c = auto(0);
        assert!(c.auto_scroll_tick::<()>().is_empty());
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn start_index_is_clamped() {
        let c = Carousel::new(CarouselConfig {
            item_count: 3,
            start_index: 9,
            ..Default::default()
        });
        assert_eq!(c.current_index(), 2);
        let empty = Carousel::new(CarouselConfig {
            start_index: 9,
            ..Default::default()
        });
        assert_eq!(empty.current_index(), 0);
    }

    #[test]
    fn zero_interval_disables_auto_scroll() {
        let mut c = Carousel::new(CarouselConfig {
            item_count: 3,
            auto_scroll_interval_ms: Some(0),
            ..Default::default()
        });
        assert!(!c.auto_scroll_enabled());
        assert!(c.poll::<()>(1_000_000).is_empty());
        // Without auto-scroll, settle events only forward.
        let out = c.momentum_end(metrics(450.0, 150.0), "ev");
        assert_eq!(out, vec![Effect::Forward("ev")]);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn poll_arms_then_fires_on_schedule() {
        let mut c = auto(3);
        assert!(c.poll::<()>(0).is_empty());
        assert_eq!(c.next_deadline_ms(), Some(3000));
        assert!(c.poll::<()>(2999).is_empty());
        let out = c.poll::<()>(3000);
        assert_eq!(
            out,
            vec![Effect::ScrollTo {
                index: 1,
                animated: true
            }]
        );
        assert_eq!(c.next_deadline_ms(), Some(6000));
    }

    #[test]
    fn drag_pauses_ticks_until_drag_end_rearms() {
        let mut c = auto(3);
        let _ = c.poll::<()>(0);

        let out = c.scroll_begin_drag("begin");
        assert_eq!(out, vec![Effect::Forward("begin")]);

        // Simulated time passes well beyond the old deadline: nothing fires.
        assert!(c.poll::<&str>(10_000).is_empty());
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.next_deadline_ms(), None);

        let out = c.scroll_end_drag(10_000, "end");
        assert_eq!(out, vec![Effect::Forward("end")]);
        assert_eq!(c.next_deadline_ms(), Some(13_000));

        assert!(c.poll::<&str>(12_999).is_empty());
        assert!(!c.poll::<&str>(13_000).is_empty());
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn momentum_end_adopts_settled_index_and_pushes_dot() {
        let mut c = Carousel::new(CarouselConfig {
            item_count: 6,
            auto_scroll_interval_ms: Some(3000),
            show_dots: true,
            ..Default::default()
        });
        let out = c.momentum_end(metrics(450.0, 150.0), "ev");
        assert_eq!(out, vec![Effect::SelectDot(3), Effect::Forward("ev")]);
        assert_eq!(c.current_index(), 3);

        // Settling where the controller already is only forwards.
        let out = c.momentum_end(metrics(450.0, 150.0), "ev2");
        assert_eq!(out, vec![Effect::Forward("ev2")]);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn momentum_end_overrides_optimistic_index() {
        // A tick guessed ahead; the settle event says the gesture put us
        // back at page 0. The settle value wins.
        let mut c = auto(4);
        let _ = c.auto_scroll_tick::<()>();
        assert_eq!(c.current_index(), 1);
        let _ = c.momentum_end(metrics(0.0, 150.0), ());
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn momentum_end_clamps_into_bounds() {
        let mut c = auto(4);
        let _ = c.momentum_end(metrics(10_000.0, 150.0), ());
        assert_eq!(c.current_index(), 3);
        let _ = c.momentum_end(metrics(-450.0, 150.0), ());
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn momentum_end_ignores_degenerate_viewport() {
        let mut c = auto(4);
        let out = c.momentum_end(metrics(450.0, 0.0), "ev");
        assert_eq!(out, vec![Effect::Forward("ev")]);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn failure_falls_back_to_zero_unanimated() {
        let c = auto(5);
        let failure = ScrollToIndexFailure {
            index: 4,
            highest_measured_index: Some(2),
            average_item_length: 150.0,
        };
        let out = c.scroll_to_index_failed(failure);
        assert_eq!(
            out,
            vec![
                Effect::ScrollTo {
                    index: 0,
                    animated: false
                },
                Effect::Forward(failure),
            ]
        );
        assert_eq!(
            out.iter()
                .filter(|e| matches!(e, Effect::ScrollTo { .. }))
                .count(),
            1
        );
        // Recovery nudges the list, never the index.
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn failure_without_auto_scroll_only_forwards() {
        let c = Carousel::new(CarouselConfig {
            item_count: 5,
            ..Default::default()
        });
        assert_eq!(
            c.scroll_to_index_failed("info"),
            vec![Effect::Forward("info")]
        );
    }

    #[test]
    fn teardown_is_idempotent_and_final() {
        let mut c = auto(3);
        let _ = c.poll::<()>(0);
        c.teardown();
        c.teardown();
        assert!(!c.auto_scroll_enabled());
        assert_eq!(c.next_deadline_ms(), None);
        assert!(c.poll::<()>(100_000).is_empty());
        // A drag end racing teardown must not resurrect the timer.
        let _ = c.scroll_end_drag(100_000, ());
        assert_eq!(c.next_deadline_ms(), None);
        assert!(c.poll::<()>(200_000).is_empty());
    }

    #[test]
    fn teardown_without_timer_is_safe() {
        let mut c = Carousel::new(CarouselConfig::default());
        c.teardown();
        c.teardown();
    }

    #[test]
    fn set_item_count_reclamps_and_defers_timer() {
        let mut c = Carousel::new(CarouselConfig {
            item_count: 5,
            start_index: 4,
            auto_scroll_interval_ms: Some(1000),
            ..Default::default()
        });
        let _ = c.poll::<()>(0);
        assert_eq!(c.next_deadline_ms(), Some(1000));

        c.set_item_count(2);
        assert_eq!(c.current_index(), 1);

        c.set_item_count(0);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.next_deadline_ms(), None);
        assert!(c.poll::<()>(50_000).is_empty());

        // Refill: the next poll arms without firing a stale deadline.
        c.set_item_count(3);
        assert!(c.poll::<()>(60_000).is_empty());
        assert_eq!(c.next_deadline_ms(), Some(61_000));
        assert!(!c.poll::<()>(61_000).is_empty());
    }

    struct Host(Vec<(usize, bool)>);

    impl ScrollHost for Host {
        fn scroll_to_index(&mut self, index: usize, animated: bool) {
            self.0.push((index, animated));
        }
    }

    struct Sink(Vec<usize>);

    impl DotSink for Sink {
        fn set_selected(&mut self, index: usize) {
            self.0.push(index);
        }
    }

    // Three items, 3000ms interval, dots enabled, starting at 0: two fired
    // deadlines reach page 2 with dot 2 selected, the third wraps to 0.
    #[test]
    fn end_to_end_auto_scroll_with_dots() {
        let mut c = Carousel::new(CarouselConfig {
            item_count: 3,
            auto_scroll_interval_ms: Some(3000),
            show_dots: true,
            ..Default::default()
        });
        let mut host = Host(Vec::new());
        let mut sink = Sink(Vec::new());

        for now in [0, 3000, 6000] {
            let effects = c.poll::<()>(now);
            run_effects(effects, &mut host, Some(&mut sink), |_| {});
        }
        assert_eq!(c.current_index(), 2);
        assert_eq!(host.0, vec![(1, true), (2, true)]);
        assert_eq!(sink.0, vec![1, 2]);

        let effects = c.poll::<()>(9000);
        run_effects(effects, &mut host, Some(&mut sink), |_| {});
        assert_eq!(c.current_index(), 0);
        assert_eq!(host.0.last(), Some(&(0, true)));
        assert_eq!(sink.0.last(), Some(&0));
    }
}
