//! digitink-test - Shared test support for the digitink workspace
//!
//! Provides stub model sources and classifiers with call counting, so
//! tests can verify load/release/forward invariants without a real
//! backend, plus small canvas helpers.
//!
//! # Usage
//!
//! ```
//! use digitink_test::StubSource;
//! use digitink_infer::ModelRegistry;
//!
//! let (source, counters) = StubSource::new("mnist-a", vec![1.0, 0.0]);
//! let registry = ModelRegistry::new(vec![Box::new(source)]);
//! assert_eq!(counters.loads(), 1);
//! assert_eq!(registry.active_index(), Some(0));
//! ```

mod stub;

pub use stub::{CallCounters, FailingSource, NoOutputSource, StubClassifier, StubSource};

/// Number of pixels in the integer disk of radius `thickness`.
///
/// Counts offsets `(i, j)` with `i^2 + j^2 <= thickness^2`, the stroke
/// rasterizer's brush fill rule.
pub fn disk_pixel_count(thickness: u32) -> usize {
    let t = thickness as i32;
    let mut count = 0;
    for j in -t..=t {
        for i in -t..=t {
            if i * i + j * j <= t * t {
                count += 1;
            }
        }
    }
    count
}

/// A 10-class output vector with all mass on `label`.
pub fn one_hot(label: usize) -> Vec<f32> {
    let mut v = vec![0.0; 10];
    v[label] = 1.0;
    v
}
