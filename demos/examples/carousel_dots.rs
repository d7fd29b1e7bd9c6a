// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The full pipeline: strip, controller, and dot indicator.
//!
//! Builds the three pieces, runs auto-scroll ticks and a settle event
//! through `run_effects`, and prints the dot markers after each step.
//!
//! Run:
//! - `cargo run -p merrygo_demos --example carousel_dots`

use merrygo_core::adapters::dot_row::dot_row_for;
use merrygo_core::adapters::page_strip::{scroll_target, settle_metrics};
use merrygo_core::controller::{Carousel, CarouselConfig};
use merrygo_core::types::{ScrollHost, run_effects};
use merrygo_dots::{DotOptions, DotRow, Rgba};
use merrygo_strip::{PageStrip, StripConfig};

/// Executes scroll commands against the strip, like a toolkit's list glue.
struct PrintHost<'a> {
    strip: &'a PageStrip,
}

impl ScrollHost for PrintHost<'_> {
    fn scroll_to_index(&mut self, index: usize, animated: bool) {
        let target = scroll_target(self.strip, index);
        println!("  scroll to page {index} at {target:?} (animated={animated})");
    }
}

fn print_row(row: &DotRow) {
    for marker in row.markers() {
        let mark = if marker.selected { '*' } else { '.' };
        print!("{mark}");
    }
    println!("  (selected {})", row.selected());
}

fn main() {
    let strip = PageStrip::new(StripConfig {
        item_count: 3,
        page_height: 200.0,
        viewport_width: 360.0,
        ..Default::default()
    });

    let mut carousel = Carousel::new(CarouselConfig {
        item_count: strip.item_count(),
        auto_scroll_interval_ms: Some(3000),
        show_dots: true,
        ..Default::default()
    });

    let mut row = dot_row_for(
        &carousel,
        DotOptions {
            selected_fill: Rgba::rgb(0x21, 0x96, 0xf3),
            ..Default::default()
        },
    );

    // First poll arms the timer without firing.
    let _ = carousel.poll::<()>(0);

    println!("== Two auto-scroll ticks ==");
    for now in [3000, 6000] {
        let effects = carousel.poll::<()>(now);
        run_effects(effects, &mut PrintHost { strip: &strip }, Some(&mut row), |_| {});
        print_row(&row);
    }
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(row.selected(), 2);

    println!("== User swipes back to page 0 ==");
    let effects = carousel.momentum_end(settle_metrics(&strip, 0.0), ());
    run_effects(effects, &mut PrintHost { strip: &strip }, Some(&mut row), |_| {});
    print_row(&row);

    assert_eq!(carousel.current_index(), 0);
    assert_eq!(row.selected(), 0);
}
