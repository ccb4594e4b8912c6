//! Model registry - ordered model sources and the single active handle
//!
//! The registry owns swap semantics for the costly compute resource a
//! classifier holds. The ordering is structural: the old handle is
//! released before the replacement is loaded, so two classifiers never
//! hold the resource at once and a leak cannot be coded by accident.

use tracing::{debug, error, info, warn};

use crate::error::{InferError, InferResult};
use crate::model::{Classifier, ModelSource};

struct ActiveModel {
    index: usize,
    classifier: Box<dyn Classifier>,
}

/// Ordered list of model sources with at most one active classifier.
///
/// Invariants:
/// - the active index, when present, is in `[0, len)`;
/// - at most one classifier handle is live at any time;
/// - every swap releases the previous handle exactly once.
pub struct ModelRegistry {
    sources: Vec<Box<dyn ModelSource>>,
    active: Option<ActiveModel>,
}

impl ModelRegistry {
    /// Create a registry and eagerly activate the first source.
    ///
    /// With a non-empty source list, index 0 is loaded and marked
    /// active. A failed initial load is reported and the registry
    /// starts with no active model; the session stays usable for
    /// drawing. An empty list starts inactive.
    pub fn new(sources: Vec<Box<dyn ModelSource>>) -> Self {
        let mut registry = Self {
            sources,
            active: None,
        };

        if registry.sources.is_empty() {
            warn!("no model sources configured; recognition will be unavailable");
            return registry;
        }

        match registry.load(0) {
            Ok(classifier) => {
                info!(model = registry.sources[0].name(), "loaded initial model");
                registry.active = Some(ActiveModel {
                    index: 0,
                    classifier,
                });
            }
            Err(e) => {
                error!(model = registry.sources[0].name(), error = %e, "initial model load failed");
            }
        }

        registry
    }

    /// Number of configured model sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no sources are configured.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Index of the currently active model, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.index)
    }

    /// The active classifier.
    ///
    /// # Errors
    ///
    /// Returns [`InferError::NoModels`] when no classifier is active
    /// (empty registry, or every load so far has failed).
    pub fn active(&self) -> InferResult<&dyn Classifier> {
        self.active
            .as_ref()
            .map(|a| a.classifier.as_ref())
            .ok_or(InferError::NoModels)
    }

    /// Construct a classifier from the source at `index`.
    ///
    /// # Errors
    ///
    /// [`InferError::IndexOutOfRange`] for a bad index, or the source's
    /// own [`InferError::LoadFailed`].
    pub fn load(&self, index: usize) -> InferResult<Box<dyn Classifier>> {
        if index >= self.sources.len() {
            return Err(InferError::IndexOutOfRange {
                index,
                count: self.sources.len(),
            });
        }
        self.sources[index].load()
    }

    /// Switch the active model to `index`.
    ///
    /// Activating the already-active index is a no-op (no load, no
    /// release). Otherwise the current handle is released first, then a
    /// fresh classifier is loaded, and only then does the active index
    /// move. Release failures are logged and do not abort the swap;
    /// load failures leave the registry with no active model (the old
    /// handle is already gone by then).
    ///
    /// Not safe to interleave with an in-flight recognition using the
    /// handle being replaced; callers serialize swaps behind
    /// recognition.
    ///
    /// # Errors
    ///
    /// [`InferError::NoModels`] on an empty registry,
    /// [`InferError::IndexOutOfRange`] for a bad index (registry state
    /// unchanged in both cases), or [`InferError::LoadFailed`] from the
    /// new source.
    pub fn activate(&mut self, index: usize) -> InferResult<()> {
        if self.sources.is_empty() {
            return Err(InferError::NoModels);
        }
        if index >= self.sources.len() {
            return Err(InferError::IndexOutOfRange {
                index,
                count: self.sources.len(),
            });
        }
        if self.active_index() == Some(index) {
            debug!(index, "model already active");
            return Ok(());
        }

        if let Some(mut old) = self.active.take() {
            match old.classifier.release() {
                Ok(()) => debug!(index = old.index, "released previous classifier"),
                // Surfaced distinctly from load failures; the swap proceeds
                Err(e) => error!(index = old.index, error = %e, "failed to release previous classifier"),
            }
        }

        let classifier = self.load(index)?;
        info!(model = self.sources[index].name(), index, "activated model");
        self.active = Some(ActiveModel { index, classifier });
        Ok(())
    }
}

impl Drop for ModelRegistry {
    fn drop(&mut self) {
        if let Some(mut active) = self.active.take() {
            if let Err(e) = active.classifier.release() {
                error!(index = active.index, error = %e, "failed to release classifier at shutdown");
            }
        }
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("sources", &self.sources.len())
            .field("active_index", &self.active_index())
            .finish()
    }
}
