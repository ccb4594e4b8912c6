//! Digitink Infer - classifier plumbing for digit recognition
//!
//! This crate turns canvas pixels into a labeled prediction:
//!
//! - [`InputTensor`] - preprocessing (canvas resample, normalization)
//! - [`Classifier`] / [`ModelSource`] - the seams where model formats
//!   and compute backends plug in
//! - [`ModelRegistry`] - ordered sources, one active handle, leak-free
//!   swap semantics
//! - [`RecognitionPipeline`] - snapshot, forward pass, argmax reduction
//!
//! Model training, file formats, and backend selection are out of
//! scope; collaborators implement the two traits.

pub mod error;
pub mod model;
pub mod pipeline;
pub mod registry;
pub mod tensor;

pub use error::{InferError, InferResult};
pub use model::{Classifier, ForwardPass, ModelSource};
pub use pipeline::{Recognition, RecognitionPipeline};
pub use registry::ModelRegistry;
pub use tensor::{InputTensor, MODEL_INPUT_SIZE};
