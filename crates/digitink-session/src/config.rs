//! Session configuration

use digitink_core::Canvas;
use digitink_core::stroke::{Color, DEFAULT_THICKNESS};
use digitink_infer::MODEL_INPUT_SIZE;

/// Knobs for an interactive recognition session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Brush radius in pixels.
    pub thickness: u32,
    /// Brush color.
    pub brush: Color,
    /// Model input width in pixels.
    pub model_input_width: u32,
    /// Model input height in pixels.
    pub model_input_height: u32,
    /// Text shown before any recognition has run.
    pub idle_text: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            canvas_width: Canvas::DEFAULT_SIZE,
            canvas_height: Canvas::DEFAULT_SIZE,
            thickness: DEFAULT_THICKNESS,
            brush: Color::WHITE,
            model_input_width: MODEL_INPUT_SIZE,
            model_input_height: MODEL_INPUT_SIZE,
            idle_text: "spell numbers here".to_string(),
        }
    }
}
