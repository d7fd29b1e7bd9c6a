// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel basics.
//!
//! This minimal example lays out a strip of fixed-size pages, asks which
//! frames a viewport touches, and reconciles a controller with a simulated
//! user swipe.
//!
//! Run:
//! - `cargo run -p merrygo_demos --example carousel_basics`

use kurbo::Rect;
use merrygo_core::adapters::page_strip::settle_metrics;
use merrygo_core::controller::{Carousel, CarouselConfig};
use merrygo_strip::{PageFlags, PageStrip, StripConfig};

const PAGE_W: f64 = 150.0;
const PAGE_H: f64 = 200.0;

fn main() {
    let strip = PageStrip::new(StripConfig {
        item_count: 5,
        page_height: PAGE_H,
        page_width: Some(PAGE_W),
        viewport_width: PAGE_W,
    });

    let mut carousel = Carousel::new(CarouselConfig {
        item_count: strip.item_count(),
        auto_scroll_interval_ms: Some(3000),
        ..Default::default()
    });

    println!("== Frames ==");
    let viewport = Rect::new(0.0, 0.0, PAGE_W, PAGE_H);
    for page in strip.pages(viewport, carousel.current_index()) {
        println!(
            "  page {}  frame={:?}  visible={}  current={}",
            page.index,
            page.frame,
            page.flags.contains(PageFlags::VISIBLE),
            page.flags.contains(PageFlags::CURRENT),
        );
    }

    // The user swipes two pages ahead; momentum settles at offset 300.
    let effects = carousel.momentum_end(settle_metrics(&strip, 300.0), ());
    println!("== Settle ==");
    println!("  effects: {:?}", effects);
    println!("  current index: {}", carousel.current_index());

    assert_eq!(carousel.current_index(), 2);
    assert_eq!(strip.visible_range(300.0, 450.0), 2..3);
}
