//! Freehand stroke rasterization
//!
//! Converts discrete pointer samples into a filled, anti-alias-free
//! stroke. Point-list generation ([`line_points`]) is separated from
//! rendering ([`stamp_disk`], [`draw_segment`]) so the geometry can be
//! tested without a canvas.
//!
//! A stroke segment is rasterized by stepping the line with integer
//! Bresenham and stamping a filled disk of radius `thickness` at every
//! stepped pixel, not just the endpoints. That is what turns sparse
//! pointer samples into a continuous thick stroke.

use crate::canvas::Canvas;
use crate::geometry::Point;

/// Default brush radius in pixels.
pub const DEFAULT_THICKNESS: u32 = 10;

/// RGB color for strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// White color
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Convert to grayscale value (0-255).
    pub fn to_gray(&self) -> u8 {
        ((self.r as u32 + self.g as u32 + self.b as u32) / 3) as u8
    }

    /// Compose as 32-bit RGBA pixel.
    pub const fn to_pixel32(&self) -> u32 {
        crate::color::compose_rgb(self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Generate the pixels of a line using integer Bresenham stepping.
///
/// Uses the dual-axis error form (`err = dx - dy`), which can advance
/// both axes in a single step on steep diagonals. Both endpoints are
/// included; a degenerate segment yields a single point.
pub fn line_points(from: Point, to: Point) -> Vec<Point> {
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    let sx = if from.x < to.x { 1i32 } else { -1 };
    let sy = if from.y < to.y { 1i32 } else { -1 };

    let mut points = Vec::with_capacity((dx.max(dy) + 1) as usize);
    let mut x = from.x;
    let mut y = from.y;
    let mut err = dx - dy;

    loop {
        points.push(Point::new(x, y));
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// Stamp a filled disk of radius `thickness` centered at `center`.
///
/// The fill rule is the exact integer disk: offset `(i, j)` is colored
/// iff `i^2 + j^2 <= thickness^2`. Offsets landing outside the canvas
/// are silently skipped.
pub fn stamp_disk(canvas: &mut Canvas, center: Point, thickness: u32, color: Color) {
    let t = thickness as i32;
    let t_sq = t * t;
    let pixel = color.to_pixel32();

    for j in -t..=t {
        for i in -t..=t {
            if i * i + j * j <= t_sq {
                canvas.set_pixel(center.x + i, center.y + j, pixel);
            }
        }
    }
}

/// Draw one stroke segment onto the canvas.
///
/// With `from` absent this is the start of a new stroke: a single disk
/// is stamped at `to` (a dot). With `from` present, a disk is stamped at
/// every Bresenham step from `from` to `to`.
///
/// Deterministic: identical arguments against identical buffer contents
/// always produce identical pixels.
pub fn draw_segment(
    canvas: &mut Canvas,
    from: Option<Point>,
    to: Point,
    thickness: u32,
    color: Color,
) {
    match from {
        None => stamp_disk(canvas, to, thickness, color),
        Some(from) => {
            for p in line_points(from, to) {
                stamp_disk(canvas, p, thickness, color);
            }
        }
    }
}
