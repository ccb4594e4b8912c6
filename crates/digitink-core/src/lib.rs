//! Digitink Core - Drawing surface primitives for digit recognition
//!
//! This crate provides the data structures shared by the rest of the
//! digitink workspace:
//!
//! - [`Canvas`] - The fixed-resolution drawing surface
//! - [`Point`] - Integer canvas-space coordinates
//! - [`stroke`] - Freehand stroke rasterization (Bresenham + disk stamps)
//!
//! The canvas holds packed 32-bit RGBA pixels with all three color
//! channels kept equal (grayscale-as-RGB). Every pixel is either the
//! black background or a stroke color; nothing here anti-aliases.

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod stroke;

pub use canvas::Canvas;
pub use error::{Error, Result};
pub use geometry::Point;
pub use stroke::{Color, DEFAULT_THICKNESS, draw_segment, line_points, stamp_disk};

/// Helper functions for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub const fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

}
