//! Stub model sources and classifiers with call counting

use std::cell::Cell;
use std::rc::Rc;

use digitink_infer::{Classifier, ForwardPass, InferError, InferResult, InputTensor, ModelSource};

#[derive(Debug, Default)]
struct CounterState {
    loads: Cell<usize>,
    releases: Cell<usize>,
    forwards: Cell<usize>,
}

/// Shared load/release/forward counters for one stub source.
///
/// Cloning shares the underlying counters; every classifier loaded from
/// the same [`StubSource`] bumps the same totals.
#[derive(Debug, Clone, Default)]
pub struct CallCounters {
    inner: Rc<CounterState>,
}

impl CallCounters {
    /// Total successful `load` calls.
    pub fn loads(&self) -> usize {
        self.inner.loads.get()
    }

    /// Total successful `release` calls.
    pub fn releases(&self) -> usize {
        self.inner.releases.get()
    }

    /// Total `forward` calls.
    pub fn forwards(&self) -> usize {
        self.inner.forwards.get()
    }

    fn bump_loads(&self) {
        self.inner.loads.set(self.inner.loads.get() + 1);
    }

    fn bump_releases(&self) {
        self.inner.releases.set(self.inner.releases.get() + 1);
    }

    fn bump_forwards(&self) {
        self.inner.forwards.set(self.inner.forwards.get() + 1);
    }
}

/// Stub model source returning classifiers with a canned output vector.
pub struct StubSource {
    name: String,
    output: Vec<f32>,
    counters: CallCounters,
}

impl StubSource {
    /// Create a stub source and a handle to its counters.
    pub fn new(name: &str, output: Vec<f32>) -> (Self, CallCounters) {
        let counters = CallCounters::default();
        (
            Self {
                name: name.to_string(),
                output,
                counters: counters.clone(),
            },
            counters,
        )
    }
}

impl ModelSource for StubSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> InferResult<Box<dyn Classifier>> {
        self.counters.bump_loads();
        Ok(Box::new(StubClassifier {
            output: self.output.clone(),
            counters: self.counters.clone(),
            released: Cell::new(false),
        }))
    }
}

/// Classifier stub: returns its canned vector, tracks release.
pub struct StubClassifier {
    output: Vec<f32>,
    counters: CallCounters,
    released: Cell<bool>,
}

impl Classifier for StubClassifier {
    fn forward(&self, _input: &InputTensor) -> InferResult<ForwardPass> {
        self.counters.bump_forwards();
        Ok(ForwardPass::ready(self.output.clone()))
    }

    fn release(&mut self) -> InferResult<()> {
        if self.released.replace(true) {
            return Err(InferError::ReleaseFailed(
                "stub classifier released twice".to_string(),
            ));
        }
        self.counters.bump_releases();
        Ok(())
    }
}

/// Model source whose load always fails.
pub struct FailingSource {
    name: String,
}

impl FailingSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl ModelSource for FailingSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> InferResult<Box<dyn Classifier>> {
        Err(InferError::LoadFailed(format!(
            "source {} is corrupt",
            self.name
        )))
    }
}

/// Source whose classifiers schedule a pass but never produce output.
pub struct NoOutputSource {
    name: String,
}

impl NoOutputSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl ModelSource for NoOutputSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> InferResult<Box<dyn Classifier>> {
        Ok(Box::new(NoOutputClassifier))
    }
}

struct NoOutputClassifier;

impl Classifier for NoOutputClassifier {
    fn forward(&self, _input: &InputTensor) -> InferResult<ForwardPass> {
        Ok(ForwardPass::unavailable())
    }

    fn release(&mut self) -> InferResult<()> {
        Ok(())
    }
}
