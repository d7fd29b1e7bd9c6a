// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dot row: selection state and derived marker geometry.

use kurbo::{Circle, Point, Size};

use crate::types::{DotOptions, Rgba};

/// A row of position indicator dots with one selected marker.
///
/// ## Usage
///
/// - Construct with [`DotRow::new`] from the carousel's starting index and
///   page count.
/// - Push selection changes through [`DotRow::set_selected`]; this is the
///   only coupling a controller needs.
/// - Rebuild nothing on selection changes: [`DotRow::markers`] derives
///   geometry each time it is walked.
///
/// Indices are clamped into the row, so a stale push after the item
/// sequence shrank still leaves the row consistent.
#[derive(Clone, Debug, PartialEq)]
pub struct DotRow {
    selected: usize,
    len: usize,
    options: DotOptions,
}

/// One marker of a dot row, ready to paint.
///
/// Positions are relative to the row origin; offset them by
/// [`DotRow::centered_origin`] (or any origin of your choosing) when
/// painting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotMarker {
    /// Position of the marker in the row.
    pub index: usize,
    /// Marker disc.
    pub shape: Circle,
    /// Fill color, already resolved against the selection.
    pub fill: Rgba,
    /// Whether this marker is the selected one.
    pub selected: bool,
}

impl DotRow {
    /// Create a row of `len` markers with `initial_index` selected.
    ///
    /// `initial_index` is clamped into the row.
    pub fn new(initial_index: usize, len: usize, options: DotOptions) -> Self {
        Self {
            selected: clamp_index(initial_index, len),
            len,
            options,
        }
    }

    /// Index of the selected marker (`0` for an empty row).
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Replace which marker is selected. Clamped into the row.
    pub fn set_selected(&mut self, index: usize) {
        self.selected = clamp_index(index, self.len);
    }

    /// Number of markers.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the row has no markers.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Replace the marker count (the caller swapped the item sequence),
    /// re-clamping the selection.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.selected = clamp_index(self.selected, len);
    }

    /// The row's visual options.
    pub fn options(&self) -> &DotOptions {
        &self.options
    }

    /// Width of one marker slot: the marker plus half-size margins on each
    /// side.
    pub fn slot_width(&self) -> f64 {
        2.0 * self.options.size
    }

    /// Total size of the row, top margin included.
    pub fn row_size(&self) -> Size {
        Size::new(
            self.len as f64 * self.slot_width(),
            self.options.top_margin + self.options.size,
        )
    }

    /// Origin that centers the row horizontally in a container of the given
    /// width.
    pub fn centered_origin(&self, container_width: f64) -> Point {
        Point::new((container_width - self.row_size().width) / 2.0, 0.0)
    }

    /// Walk the markers, selection resolved, positioned relative to the row
    /// origin.
    pub fn markers(&self) -> impl Iterator<Item = DotMarker> + '_ {
        let size = self.options.size;
        let slot = self.slot_width();
        let cy = self.options.top_margin + size / 2.0;
        (0..self.len).map(move |index| {
            let selected = index == self.selected;
            DotMarker {
                index,
                shape: Circle::new(Point::new(index as f64 * slot + size, cy), size / 2.0),
                fill: if selected {
                    self.options.selected_fill
                } else {
                    self.options.fill
                },
                selected,
            }
        })
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { index.min(len - 1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_index_is_clamped() {
        let row = DotRow::new(7, 3, DotOptions::default());
        assert_eq!(row.selected(), 2);
        let empty = DotRow::new(7, 0, DotOptions::default());
        assert_eq!(empty.selected(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn set_selected_moves_exactly_one_marker() {
        let mut row = DotRow::new(0, 4, DotOptions::default());
        row.set_selected(2);
        let mut selected = row.markers().filter(|m| m.selected);
        assert_eq!(selected.next().map(|m| m.index), Some(2));
        assert!(selected.next().is_none());
    }

    #[test]
    fn set_selected_clamps() {
        let mut row = DotRow::new(0, 4, DotOptions::default());
        row.set_selected(99);
        assert_eq!(row.selected(), 3);
    }

    #[test]
    fn set_len_reclamps_selection() {
        let mut row = DotRow::new(0, 5, DotOptions::default());
        row.set_selected(4);
        row.set_len(2);
        assert_eq!(row.selected(), 1);
        row.set_len(0);
        assert_eq!(row.selected(), 0);
        assert_eq!(row.markers().count(), 0);
    }

    #[test]
    fn marker_geometry_uses_double_size_slots() {
        // 5px markers: centers at x = 5, 15, 25; radius 2.5; cy = 12.5.
        let row = DotRow::new(0, 3, DotOptions::default());
        let centers: [f64; 3] = {
            let mut it = row.markers().map(|m| m.shape.center.x);
            [it.next().unwrap(), it.next().unwrap(), it.next().unwrap()]
        };
        assert_eq!(centers, [5.0, 15.0, 25.0]);
        for m in row.markers() {
            assert_eq!(m.shape.radius, 2.5);
            assert_eq!(m.shape.center.y, 12.5);
        }
        assert_eq!(row.row_size(), Size::new(30.0, 15.0));
    }

    #[test]
    fn selection_resolves_fill() {
        let options = DotOptions {
            fill: Rgba::rgb(0xbd, 0xbd, 0xbd),
            selected_fill: Rgba::rgb(0x21, 0x96, 0xf3),
            ..Default::default()
        };
        let mut row = DotRow::new(1, 2, options);
        for m in row.markers() {
            if m.index == 1 {
                assert_eq!(m.fill, Rgba::rgb(0x21, 0x96, 0xf3));
            } else {
                assert_eq!(m.fill, Rgba::rgb(0xbd, 0xbd, 0xbd));
            }
        }
        row.set_selected(0);
        assert_eq!(
            row.markers().next().map(|m| m.fill),
            Some(Rgba::rgb(0x21, 0x96, 0xf3))
        );
    }

    #[test]
    fn centered_origin_centers_the_row() {
        let row = DotRow::new(0, 3, DotOptions::default());
        // Row is 30 wide; a 360 container leaves 165 on each side.
        assert_eq!(row.centered_origin(360.0), Point::new(165.0, 0.0));
    }
}
