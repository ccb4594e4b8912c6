//! Recognition pipeline - canvas to labeled prediction
//!
//! One recognition cycle: snapshot the canvas, resample it to the model
//! input tensor, run the forward pass, wait for the output, and reduce
//! the probability vector to a predicted label by argmax. No state
//! carries across cycles except the canvas contents and the active
//! model.

use std::fmt;

use tracing::{error, info};

use digitink_core::Canvas;

use crate::error::InferResult;
use crate::model::Classifier;
use crate::tensor::{InputTensor, MODEL_INPUT_SIZE};

/// The outcome of one recognition cycle.
///
/// `label` is the winning class index and `probability` its score.
/// When no classes exist the sentinel pair `(-1, -1.0)` is used; the
/// probability vector is not assumed to sum to 1, only to be totally
/// ordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recognition {
    /// Predicted class index, or -1 for no prediction.
    pub label: i32,
    /// Probability of the predicted class, or -1.0 for no prediction.
    pub probability: f32,
}

impl Recognition {
    /// The "no prediction" sentinel.
    pub fn none() -> Self {
        Self {
            label: -1,
            probability: -1.0,
        }
    }

    /// Whether this result carries an actual prediction.
    pub fn is_prediction(&self) -> bool {
        self.label >= 0
    }
}

impl fmt::Display for Recognition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_prediction() {
            write!(f, "predict: {}", self.label)
        } else {
            write!(f, "no prediction")
        }
    }
}

/// Orchestrates preprocessing, forward pass, and argmax reduction.
#[derive(Debug, Clone, Copy)]
pub struct RecognitionPipeline {
    input_width: u32,
    input_height: u32,
}

impl Default for RecognitionPipeline {
    fn default() -> Self {
        Self::new(MODEL_INPUT_SIZE, MODEL_INPUT_SIZE)
    }
}

impl RecognitionPipeline {
    /// Create a pipeline targeting the given model input resolution.
    pub fn new(input_width: u32, input_height: u32) -> Self {
        Self {
            input_width,
            input_height,
        }
    }

    /// Run one recognition cycle against the given classifier.
    ///
    /// The canvas is snapshotted before preprocessing so a caller that
    /// just finished drawing can never hand the model a torn buffer.
    ///
    /// # Errors
    ///
    /// Propagates preprocessing errors and
    /// [`InferError::OutputUnavailable`](crate::InferError::OutputUnavailable)
    /// from the forward pass. An *empty* output vector is not an error:
    /// it reduces to the sentinel result and is logged.
    pub fn recognize(
        &self,
        canvas: &Canvas,
        classifier: &dyn Classifier,
    ) -> InferResult<Recognition> {
        let snapshot = canvas.snapshot();
        let input = InputTensor::from_canvas(&snapshot, self.input_width, self.input_height)?;

        let pass = classifier.forward(&input)?;
        let output = pass.materialize()?;

        let recognition = Self::reduce(&output);
        if recognition.is_prediction() {
            info!(
                label = recognition.label,
                probability = recognition.probability,
                "recognized digit"
            );
        }
        Ok(recognition)
    }

    /// Argmax reduction over a probability vector.
    ///
    /// Single scan with a strictly-greater comparison, so ties break in
    /// favor of the first (lowest) index. An empty vector yields the
    /// sentinel result.
    pub fn reduce(output: &[f32]) -> Recognition {
        if output.is_empty() {
            error!("classifier produced an empty output vector");
            return Recognition::none();
        }

        let mut max_probability = -1.0f32;
        let mut predicted = -1i32;
        for (i, &prob) in output.iter().enumerate() {
            if prob > max_probability {
                max_probability = prob;
                predicted = i as i32;
            }
        }

        Recognition {
            label: predicted,
            probability: max_probability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_picks_maximum() {
        let r = RecognitionPipeline::reduce(&[0.0, 0.1, 0.8, 0.1]);
        assert_eq!(r.label, 2);
        assert_eq!(r.probability, 0.8);
    }

    #[test]
    fn test_reduce_tie_breaks_to_first_index() {
        // Strict > comparison: index 1 wins over the equal index 2
        let r = RecognitionPipeline::reduce(&[0.1, 0.9, 0.9, 0.2]);
        assert_eq!(r.label, 1);
        assert_eq!(r.probability, 0.9);
    }

    #[test]
    fn test_reduce_empty_is_sentinel() {
        let r = RecognitionPipeline::reduce(&[]);
        assert_eq!(r.label, -1);
        assert_eq!(r.probability, -1.0);
        assert!(!r.is_prediction());
    }

    #[test]
    fn test_reduce_single_class() {
        let r = RecognitionPipeline::reduce(&[0.4]);
        assert_eq!(r.label, 0);
        assert_eq!(r.probability, 0.4);
    }

    #[test]
    fn test_reduce_all_zero_picks_first() {
        // 0.0 > -1.0 on the first element only
        let r = RecognitionPipeline::reduce(&[0.0, 0.0, 0.0]);
        assert_eq!(r.label, 0);
        assert_eq!(r.probability, 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Recognition {
                label: 7,
                probability: 0.9
            }
            .to_string(),
            "predict: 7"
        );
        assert_eq!(Recognition::none().to_string(), "no prediction");
    }
}
