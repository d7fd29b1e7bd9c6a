// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deadline timer for auto-scroll.
//!
//! ## Overview
//!
//! [`IntervalTimer`] is the recurring auto-scroll timer rendered as a
//! deadline machine over a host-supplied monotonic clock in milliseconds.
//! The controller owns at most one; pausing, re-arming, and firing are all
//! synchronous, so ordering with drag events needs no locking.
//!
//! States:
//! - `Paused`: held down, e.g. while the user drags. Only an explicit
//!   resume leaves this state.
//! - `Pending`: should run but has no deadline yet; the next poll arms it
//!   without firing.
//! - `Armed`: has a deadline; a poll at or past it fires and re-arms.
//!
//! A poll arriving several intervals late fires exactly once and re-arms
//! relative to `now`, so a stalled host never faces a burst of catch-up
//! ticks.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TimerState {
    Paused,
    Pending,
    Armed { deadline_ms: u64 },
}

/// A recurring deadline driven by an external clock.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IntervalTimer {
    interval_ms: u64,
    state: TimerState,
}

impl IntervalTimer {
    /// Create a timer firing every `interval_ms`, initially pending.
    ///
    /// A zero interval yields `None`: a non-positive interval configures no
    /// timer at all rather than host-defined degenerate behavior.
    pub fn new(interval_ms: u64) -> Option<Self> {
        (interval_ms > 0).then_some(Self {
            interval_ms,
            state: TimerState::Pending,
        })
    }

    /// The configured interval.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Hold the timer; no poll fires until a resume.
    pub fn pause(&mut self) {
        self.state = TimerState::Paused;
    }

    /// Re-arm a full interval from `now_ms`, leaving any pause.
    pub fn resume(&mut self, now_ms: u64) {
        self.state = TimerState::Armed {
            deadline_ms: now_ms + self.interval_ms,
        };
    }

    /// Drop an armed deadline back to pending.
    ///
    /// Used when firing would be pointless for a while (an emptied item
    /// sequence); a paused timer stays paused.
    pub fn defer(&mut self) {
        if matches!(self.state, TimerState::Armed { .. }) {
            self.state = TimerState::Pending;
        }
    }

    /// The pending deadline, if one is armed.
    pub fn deadline_ms(&self) -> Option<u64> {
        match self.state {
            TimerState::Armed { deadline_ms } => Some(deadline_ms),
            TimerState::Paused | TimerState::Pending => None,
        }
    }

    /// Advance the clock to `now_ms`. Returns whether the timer fired.
    ///
    /// A pending timer arms without firing; an armed timer fires once when
    /// `now_ms` reaches its deadline and re-arms relative to `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.state {
            TimerState::Paused => false,
            TimerState::Pending => {
                self.resume(now_ms);
                false
            }
            TimerState::Armed { deadline_ms } => {
                if now_ms < deadline_ms {
                    return false;
                }
                self.resume(now_ms);
                true
            }
        }
    }
}
