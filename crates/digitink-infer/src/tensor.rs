//! Input tensor preprocessing
//!
//! Converts the native-resolution canvas into the classifier's expected
//! input: a single-channel, row-major, channel-last f32 tensor with
//! intensities in [0, 1]. Downsampling uses area mapping (each target
//! cell averages its source rectangle), which behaves well for the
//! typical 256 -> 28 reduction of hard-edged stroke pixels.

use crate::error::{InferError, InferResult};
use digitink_core::Canvas;

/// Default model input edge length (MNIST-style 28x28).
pub const MODEL_INPUT_SIZE: u32 = 28;

/// Single-channel f32 image tensor, row-major, channel-last.
#[derive(Debug, Clone, PartialEq)]
pub struct InputTensor {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl InputTensor {
    /// Build a tensor by resampling the canvas down to `width` x `height`.
    ///
    /// Each target cell averages the grayscale intensity of its source
    /// rectangle and normalizes to [0, 1]. The caller is expected to pass
    /// a snapshot, not a buffer that is concurrently being drawn to.
    ///
    /// # Errors
    ///
    /// Returns [`InferError::InvalidParameter`] if either target
    /// dimension is 0.
    pub fn from_canvas(canvas: &Canvas, width: u32, height: u32) -> InferResult<Self> {
        if width == 0 || height == 0 {
            return Err(InferError::InvalidParameter(format!(
                "tensor dimensions must be non-zero; got {width}x{height}"
            )));
        }

        let src_w = canvas.width() as usize;
        let src_h = canvas.height() as usize;
        let dst_w = width as usize;
        let dst_h = height as usize;

        let mut data = Vec::with_capacity(dst_w * dst_h);
        for dy in 0..dst_h {
            let sy0 = dy * src_h / dst_h;
            let sy1 = ((dy + 1) * src_h / dst_h).max(sy0 + 1);
            for dx in 0..dst_w {
                let sx0 = dx * src_w / dst_w;
                let sx1 = ((dx + 1) * src_w / dst_w).max(sx0 + 1);

                let mut sum: u64 = 0;
                for sy in sy0..sy1 {
                    for sx in sx0..sx1 {
                        sum += canvas.gray_at(sx as i32, sy as i32).unwrap_or(0) as u64;
                    }
                }
                let count = ((sy1 - sy0) * (sx1 - sx0)) as u64;
                data.push(sum as f32 / (count as f32 * 255.0));
            }
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Tensor width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Tensor height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of elements (width * height, single channel).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the tensor holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw row-major data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Value at `(x, y)`, or `None` out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digitink_core::stroke::{Color, stamp_disk};
    use digitink_core::{Canvas, Point};

    #[test]
    fn test_from_canvas_all_background_is_zero() {
        let canvas = Canvas::with_default_size();
        let t = InputTensor::from_canvas(&canvas, 28, 28).unwrap();
        assert_eq!(t.len(), 28 * 28);
        assert!(t.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_from_canvas_all_white_is_one() {
        let mut canvas = Canvas::new(56, 56).unwrap();
        let white = Color::WHITE.to_pixel32();
        for y in 0..56 {
            for x in 0..56 {
                canvas.set_pixel(x, y, white);
            }
        }
        let t = InputTensor::from_canvas(&canvas, 28, 28).unwrap();
        assert!(t.data().iter().all(|&v| (v - 1.0).abs() < 1e-6));
    }

    #[test]
    fn test_from_canvas_preserves_stroke_location() {
        // A disk in the canvas center lands in the tensor center
        let mut canvas = Canvas::with_default_size();
        stamp_disk(&mut canvas, Point::new(128, 128), 20, Color::WHITE);
        let t = InputTensor::from_canvas(&canvas, 28, 28).unwrap();

        let center = t.get(14, 14).unwrap();
        let corner = t.get(0, 0).unwrap();
        assert!(center > 0.5, "center cell should be mostly stroke: {center}");
        assert_eq!(corner, 0.0);
    }

    #[test]
    fn test_from_canvas_zero_dims_rejected() {
        let canvas = Canvas::with_default_size();
        assert!(InputTensor::from_canvas(&canvas, 0, 28).is_err());
        assert!(InputTensor::from_canvas(&canvas, 28, 0).is_err());
    }

    #[test]
    fn test_get_bounds() {
        let canvas = Canvas::new(28, 28).unwrap();
        let t = InputTensor::from_canvas(&canvas, 28, 28).unwrap();
        assert!(t.get(27, 27).is_some());
        assert!(t.get(28, 0).is_none());
        assert!(t.get(0, 28).is_none());
    }
}
