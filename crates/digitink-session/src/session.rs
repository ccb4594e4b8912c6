//! Interactive session driver
//!
//! Owns the canvas, the model registry, and the in-progress stroke
//! state, and wires pointer events and the three discrete triggers
//! (recognize, clear, switch model) together. Everything here assumes a
//! single logical thread of control: draws, recognitions, and model
//! swaps are strictly serialized by the caller.

use tracing::error;

use digitink_core::stroke;
use digitink_core::{Canvas, Point};
use digitink_infer::{ModelRegistry, ModelSource, Recognition, RecognitionPipeline};

use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::event::{PointerEvent, ViewTransform};

/// Explicit holder for the in-progress stroke's last point.
///
/// Present while the pointer is held down; cleared on release and on
/// canvas clear. Each new sample combined with the previous one defines
/// the segment to rasterize; with no previous point only a dot is
/// drawn.
#[derive(Debug, Default)]
pub struct StrokeState {
    last: Option<Point>,
}

impl StrokeState {
    /// The previous sample, if a stroke is in progress.
    pub fn last(&self) -> Option<Point> {
        self.last
    }

    /// Record a new sample, returning the previous one.
    pub fn advance(&mut self, p: Point) -> Option<Point> {
        self.last.replace(p)
    }

    /// End the current stroke.
    pub fn finish(&mut self) {
        self.last = None;
    }
}

/// One interactive drawing-and-recognition session.
pub struct Session {
    config: SessionConfig,
    view: ViewTransform,
    canvas: Canvas,
    registry: ModelRegistry,
    pipeline: RecognitionPipeline,
    stroke: StrokeState,
    result_text: String,
}

impl Session {
    /// Create a session over the given model sources.
    ///
    /// The first source, if any, is loaded eagerly; a session with no
    /// usable model still supports drawing and clearing, and every
    /// recognition degrades to "no prediction".
    ///
    /// # Errors
    ///
    /// Returns an error only for invalid canvas dimensions in `config`.
    pub fn new(
        config: SessionConfig,
        view: ViewTransform,
        sources: Vec<Box<dyn ModelSource>>,
    ) -> SessionResult<Self> {
        let canvas = Canvas::new(config.canvas_width, config.canvas_height)?;
        let registry = ModelRegistry::new(sources);
        let pipeline =
            RecognitionPipeline::new(config.model_input_width, config.model_input_height);
        let result_text = config.idle_text.clone();

        Ok(Self {
            config,
            view,
            canvas,
            registry,
            pipeline,
            stroke: StrokeState::default(),
            result_text,
        })
    }

    /// Feed one pointer event into the session.
    ///
    /// Down and move samples extend the current stroke (a lone sample
    /// stamps a dot); release ends it.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } | PointerEvent::Move { x, y } => {
                let to = self.view.to_canvas(x, y, &self.canvas);
                let from = self.stroke.advance(to);
                stroke::draw_segment(
                    &mut self.canvas,
                    from,
                    to,
                    self.config.thickness,
                    self.config.brush,
                );
            }
            PointerEvent::Up => self.stroke.finish(),
        }
    }

    /// Run recognition on the current canvas and return the display text.
    ///
    /// Never fails: a missing model or an unreadable output is logged
    /// and shown as "no prediction".
    pub fn recognize(&mut self) -> &str {
        let recognition = match self.registry.active() {
            Ok(classifier) => match self.pipeline.recognize(&self.canvas, classifier) {
                Ok(r) => r,
                Err(e) => {
                    error!(error = %e, "recognition failed");
                    Recognition::none()
                }
            },
            Err(e) => {
                error!(error = %e, "recognition requested with no active model");
                Recognition::none()
            }
        };

        self.result_text = recognition.to_string();
        &self.result_text
    }

    /// Clear the canvas, the result text, and the in-progress stroke.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.stroke.finish();
        self.result_text = self.config.idle_text.clone();
    }

    /// Switch the active model.
    ///
    /// Must not be called while a recognition is in flight; within this
    /// single-threaded session that cannot happen.
    ///
    /// # Errors
    ///
    /// Propagates registry errors (bad index, empty registry, failed
    /// load); the session remains usable afterwards.
    pub fn select_model(&mut self, index: usize) -> SessionResult<()> {
        self.registry.activate(index)?;
        Ok(())
    }

    /// The drawing surface.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The most recent display text.
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    /// The model registry.
    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// The in-progress stroke state.
    pub fn stroke(&self) -> &StrokeState {
        &self.stroke
    }
}
