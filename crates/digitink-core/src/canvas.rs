//! Canvas - the drawing surface
//!
//! A `Canvas` is a fixed-resolution buffer of packed 32-bit RGBA pixels.
//! The digit-drawing pipeline treats it as single-channel: strokes write
//! the same value to all three color channels, and readers only look at
//! one of them.
//!
//! # Mutation model
//!
//! The canvas is owned by a single logical thread of control. Drawing
//! mutates it in place; recognition reads it through [`Canvas::snapshot`]
//! so an in-progress stroke can never tear a preprocessing pass.

use crate::color;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Fixed-size RGBA drawing surface.
///
/// Pixels are stored row-major, `0xRRGGBBAA` packed, origin at the
/// bottom-left the way pointer coordinates arrive from the UI mapping.
///
/// # Examples
///
/// ```
/// use digitink_core::Canvas;
///
/// let canvas = Canvas::with_default_size();
/// assert_eq!(canvas.width(), 256);
/// assert_eq!(canvas.height(), 256);
/// ```
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl Canvas {
    /// Default canvas edge length in pixels.
    pub const DEFAULT_SIZE: u32 = 256;

    /// Pixel value of the background (black, opaque).
    pub const BACKGROUND: u32 = color::compose_rgb(0, 0, 0);

    /// Create a new canvas filled with the background color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = vec![Self::BACKGROUND; (width as usize) * (height as usize)];
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create the standard 256x256 canvas.
    pub fn with_default_size() -> Self {
        // 256x256 is statically valid
        Self::new(Self::DEFAULT_SIZE, Self::DEFAULT_SIZE).unwrap_or_else(|_| unreachable!())
    }

    /// Get the canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get raw access to the pixel data (row-major).
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Check whether `(x, y)` lies within the canvas.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height
    }

    /// Get the pixel value at `(x, y)`.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.data[(y as usize) * (self.width as usize) + x as usize])
    }

    /// Set the pixel value at `(x, y)`.
    ///
    /// Out-of-bounds coordinates are silently skipped: stroke stamping
    /// near the canvas edge relies on this clipping behavior.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, val: u32) {
        if !self.contains(x, y) {
            return;
        }
        self.data[(y as usize) * (self.width as usize) + x as usize] = val;
    }

    /// Get the grayscale intensity at `(x, y)`.
    ///
    /// Reads the red channel; all color channels are kept equal by the
    /// stroke invariant, so any channel would do.
    #[inline]
    pub fn gray_at(&self, x: i32, y: i32) -> Option<u8> {
        self.get_pixel(x, y).map(color::red)
    }

    /// Fill every pixel with the background color.
    pub fn clear(&mut self) {
        self.data.fill(Self::BACKGROUND);
    }

    /// Take a whole-buffer copy for tear-free reading.
    ///
    /// Recognition preprocessing must read a snapshot, never the live
    /// buffer, so a draw-then-recognize sequence cannot observe a
    /// half-applied stroke.
    pub fn snapshot(&self) -> Canvas {
        self.clone()
    }

    /// Count the pixels currently holding `val`.
    pub fn count_matching(&self, val: u32) -> usize {
        self.data.iter().filter(|&&p| p == val).count()
    }

    /// Count the pixels that differ from the background.
    pub fn count_stroke_pixels(&self) -> usize {
        self.data.len() - self.count_matching(Self::BACKGROUND)
    }

    /// Stamp-friendly accessor: pixel at a [`Point`].
    #[inline]
    pub fn get(&self, p: Point) -> Option<u32> {
        self.get_pixel(p.x, p.y)
    }
}
