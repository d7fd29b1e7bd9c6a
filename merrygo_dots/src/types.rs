// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive types for the dot row: colors and visual options.

/// A minimal 8-bit-per-channel RGBA color.
///
/// This crate does not depend on a color library; hosts convert `Rgba` into
/// their renderer's native color type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 255 is opaque.
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);

    /// Create a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }
}

/// Visual options for a dot row.
///
/// The defaults are the conventional carousel look: 5px markers, neutral
/// gray fill, near-black selected fill, and a 10px gap above the row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DotOptions {
    /// Marker diameter.
    pub size: f64,
    /// Fill of unselected markers.
    pub fill: Rgba,
    /// Fill of the selected marker.
    pub selected_fill: Rgba,
    /// Vertical gap between the row origin and the markers.
    pub top_margin: f64,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            size: 5.0,
            fill: Rgba::rgb(0xbd, 0xbd, 0xbd),
            selected_fill: Rgba::BLACK,
            top_margin: 10.0,
        }
    }
}
