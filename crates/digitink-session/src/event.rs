//! Pointer events and UI-space to canvas-space mapping
//!
//! Pointer positions arrive in the coordinate space of some on-screen
//! rectangle whose origin depends on its pivot/anchor. [`ViewTransform`]
//! normalizes that into canvas pixel coordinates; the stroke rasterizer
//! only ever sees canvas space.

use digitink_core::{Canvas, Point};

/// One pointer sample from the UI layer.
///
/// Coordinates are local to the drawing rectangle, relative to its
/// pivot (so they may be negative).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed down at a position.
    Down { x: f32, y: f32 },
    /// Pointer moved while held down.
    Move { x: f32, y: f32 },
    /// Pointer released; ends the current stroke.
    Up,
}

/// Geometry of the on-screen drawing rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Rectangle width in UI units.
    pub width: f32,
    /// Rectangle height in UI units.
    pub height: f32,
    /// Horizontal pivot in [0, 1] (0.5 = centered).
    pub pivot_x: f32,
    /// Vertical pivot in [0, 1].
    pub pivot_y: f32,
}

impl ViewTransform {
    /// A rectangle with a centered pivot.
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            pivot_x: 0.5,
            pivot_y: 0.5,
        }
    }

    /// Map a pivot-relative UI point to canvas pixel coordinates.
    ///
    /// Shifts by the pivot offset so the rectangle's lower-left corner
    /// becomes the origin, then scales to the canvas resolution. The
    /// result may fall outside the canvas; rendering clips it.
    pub fn to_canvas(&self, x: f32, y: f32, canvas: &Canvas) -> Point {
        let local_x = x + self.pivot_x * self.width;
        let local_y = y + self.pivot_y * self.height;

        Point::new(
            ((local_x / self.width) * canvas.width() as f32) as i32,
            ((local_y / self.height) * canvas.height() as f32) as i32,
        )
    }
}
