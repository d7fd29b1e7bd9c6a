// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-scroll under a simulated clock.
//!
//! Drives the controller's deadline timer with a hand-rolled clock,
//! pausing for a user drag in the middle, and prints every effect
//! sequence the controller emits.
//!
//! Run:
//! - `cargo run -p merrygo_demos --example carousel_auto_scroll`

use merrygo_core::controller::{Carousel, CarouselConfig};
use merrygo_core::types::Effect;

fn main() {
    let mut carousel = Carousel::new(CarouselConfig {
        item_count: 3,
        auto_scroll_interval_ms: Some(3000),
        ..Default::default()
    });

    println!("== Ticking every 3000ms ==");
    for now in (0..=6000_u64).step_by(1000) {
        let effects = carousel.poll::<()>(now);
        if !effects.is_empty() {
            println!("  t={now}  {:?}  -> index {}", effects, carousel.current_index());
        }
    }
    assert_eq!(carousel.current_index(), 2);

    println!("== User drags ==");
    let _ = carousel.scroll_begin_drag(());
    assert!(carousel.poll::<()>(60_000).is_empty());
    println!("  timer paused; nothing fires while the finger is down");

    let _ = carousel.scroll_end_drag(60_000, ());
    println!(
        "  drag ended at t=60000; next deadline at t={:?}",
        carousel.next_deadline_ms()
    );

    let effects = carousel.poll::<()>(63_000);
    println!("  t=63000  {:?}  -> index {}", effects, carousel.current_index());

    // Two ticks reached page 2; the post-drag tick wrapped to page 0.
    assert_eq!(carousel.current_index(), 0);
    assert!(matches!(
        effects.first(),
        Some(Effect::ScrollTo {
            index: 0,
            animated: true
        })
    ));
}
