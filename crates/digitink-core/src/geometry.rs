//! Canvas-space geometry
//!
//! Coordinates here are always canvas pixel coordinates. Mapping from
//! UI space (pointer positions relative to some on-screen rectangle) is
//! the caller's job; see `digitink-session`.

/// Integer point in canvas pixel space.
///
/// Points may lie outside the canvas; rendering clips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
