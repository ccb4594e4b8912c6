//! Digitink - Interactive handwritten-digit recognition
//!
//! A user draws a digit on a fixed-resolution canvas with a pointer
//! device and a swappable neural classifier predicts the digit.
//!
//! # Overview
//!
//! - Stroke rasterization: pointer samples become disk-stamped
//!   Bresenham segments on a 256x256 canvas
//! - Preprocessing: the canvas is resampled to the model's input
//!   tensor (28x28, single channel)
//! - Recognition: forward pass plus argmax reduction to a labeled
//!   result with confidence
//! - Model registry: ordered model sources, one active classifier,
//!   leak-free swapping
//!
//! # Example
//!
//! ```
//! use digitink::{Canvas, Point, stroke};
//! use digitink::stroke::Color;
//!
//! let mut canvas = Canvas::with_default_size();
//! stroke::draw_segment(&mut canvas, None, Point::new(128, 128), 10, Color::WHITE);
//! assert!(canvas.count_stroke_pixels() > 0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use digitink_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use digitink_infer as infer;
pub use digitink_session as session;
