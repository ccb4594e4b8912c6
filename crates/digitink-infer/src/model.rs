//! Classifier and model-source abstractions
//!
//! A [`Classifier`] is the opaque handle to a loaded network: stateless
//! after load, owning backend compute resources that must be released
//! explicitly before the handle is replaced or discarded. A
//! [`ModelSource`] is the loadable description a classifier is built
//! from; the concrete file format and compute backend live behind these
//! traits, outside this crate.
//!
//! The forward pass is modeled as submit-then-await: `forward` schedules
//! the computation and returns a [`ForwardPass`], and
//! [`ForwardPass::materialize`] is the visible blocking boundary where
//! the caller waits for a readable output.

use crate::error::{InferError, InferResult};
use crate::tensor::InputTensor;

/// A scheduled forward pass whose output may or may not be readable.
#[derive(Debug)]
pub struct ForwardPass {
    output: Option<Vec<f32>>,
}

impl ForwardPass {
    /// A pass whose output is already materialized.
    pub fn ready(output: Vec<f32>) -> Self {
        Self {
            output: Some(output),
        }
    }

    /// A pass that produced no readable output.
    pub fn unavailable() -> Self {
        Self { output: None }
    }

    /// Wait for and take the output probability vector.
    ///
    /// # Errors
    ///
    /// Returns [`InferError::OutputUnavailable`] if the model produced
    /// no readable output (not yet active, malformed model, dead
    /// compute context).
    pub fn materialize(self) -> InferResult<Vec<f32>> {
        self.output.ok_or(InferError::OutputUnavailable)
    }
}

/// Opaque handle to a loaded classifier network.
///
/// Implementations are immutable after construction apart from
/// [`release`](Classifier::release), which tears down backend compute
/// resources and must be called exactly once per handle.
pub trait Classifier {
    /// Submit one input tensor for evaluation.
    ///
    /// The returned [`ForwardPass`] carries the (possibly unavailable)
    /// output; callers must materialize it before reducing.
    fn forward(&self, input: &InputTensor) -> InferResult<ForwardPass>;

    /// Release the backend compute resources owned by this handle.
    ///
    /// # Errors
    ///
    /// Returns [`InferError::ReleaseFailed`] if teardown fails; the
    /// handle must still be considered dead afterwards.
    fn release(&mut self) -> InferResult<()>;
}

/// A loadable network description, one per registry slot.
pub trait ModelSource {
    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Construct a fresh classifier from this source.
    ///
    /// # Errors
    ///
    /// Returns [`InferError::LoadFailed`] if the source is absent or
    /// corrupt.
    fn load(&self) -> InferResult<Box<dyn Classifier>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_pass_ready() {
        let pass = ForwardPass::ready(vec![0.25, 0.75]);
        assert_eq!(pass.materialize().unwrap(), vec![0.25, 0.75]);
    }

    #[test]
    fn test_forward_pass_unavailable() {
        let pass = ForwardPass::unavailable();
        assert!(matches!(
            pass.materialize(),
            Err(InferError::OutputUnavailable)
        ));
    }
}
