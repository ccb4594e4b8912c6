//! Recognition pipeline regression test
//!
//! End-to-end cycles against stub classifiers: preprocessing of drawn
//! and blank canvases, the submit-then-await boundary, and argmax
//! reduction including its tie-break rule.

use digitink_core::stroke::{Color, draw_segment};
use digitink_core::{Canvas, Point};
use digitink_infer::{
    InferError, InputTensor, ModelSource, Recognition, RecognitionPipeline,
};
use digitink_test::{NoOutputSource, StubSource, one_hot};

#[test]
fn blank_canvas_through_one_hot_stub_predicts_class_zero() {
    let canvas = Canvas::with_default_size();
    let (source, _counters) = StubSource::new("stub", one_hot(0));
    let classifier = source.load().unwrap();

    let pipeline = RecognitionPipeline::default();
    let r = pipeline.recognize(&canvas, classifier.as_ref()).unwrap();

    assert_eq!(r.label, 0);
    assert_eq!(r.probability, 1.0);
    assert!(r.is_prediction());
}

#[test]
fn drawn_canvas_reaches_the_classifier_as_a_normalized_tensor() {
    let mut canvas = Canvas::with_default_size();
    draw_segment(
        &mut canvas,
        Some(Point::new(64, 64)),
        Point::new(192, 192),
        10,
        Color::WHITE,
    );

    let tensor = InputTensor::from_canvas(&canvas, 28, 28).unwrap();
    assert_eq!(tensor.len(), 28 * 28);
    assert!(tensor.data().iter().all(|&v| (0.0..=1.0).contains(&v)));
    // The stroke contributes nonzero intensity somewhere
    assert!(tensor.data().iter().any(|&v| v > 0.0));
}

#[test]
fn no_output_classifier_fails_with_output_unavailable() {
    let canvas = Canvas::with_default_size();
    let classifier = NoOutputSource::new("dead").load().unwrap();

    let pipeline = RecognitionPipeline::default();
    let err = pipeline.recognize(&canvas, classifier.as_ref()).unwrap_err();
    assert!(matches!(err, InferError::OutputUnavailable));
}

#[test]
fn empty_output_vector_degrades_to_sentinel() {
    let canvas = Canvas::with_default_size();
    let (source, _counters) = StubSource::new("empty", Vec::new());
    let classifier = source.load().unwrap();

    let pipeline = RecognitionPipeline::default();
    let r = pipeline.recognize(&canvas, classifier.as_ref()).unwrap();
    assert_eq!(r, Recognition::none());
    assert_eq!(r.label, -1);
    assert_eq!(r.probability, -1.0);
}

#[test]
fn reduction_tie_breaks_to_the_first_index() {
    let canvas = Canvas::with_default_size();
    let (source, _counters) = StubSource::new("tied", vec![0.1, 0.9, 0.9, 0.2]);
    let classifier = source.load().unwrap();

    let pipeline = RecognitionPipeline::default();
    let r = pipeline.recognize(&canvas, classifier.as_ref()).unwrap();
    assert_eq!(r.label, 1);
    assert_eq!(r.probability, 0.9);
}

#[test]
fn each_recognition_is_one_forward_pass() {
    let canvas = Canvas::with_default_size();
    let (source, counters) = StubSource::new("stub", one_hot(4));
    let classifier = source.load().unwrap();

    let pipeline = RecognitionPipeline::default();
    for _ in 0..3 {
        pipeline.recognize(&canvas, classifier.as_ref()).unwrap();
    }
    assert_eq!(counters.forwards(), 3);
}

#[test]
fn recognition_reads_a_snapshot_not_the_live_buffer() {
    // Recognize, then keep drawing: the first result was computed from
    // the canvas as it was, and a second cycle sees the new stroke.
    let mut canvas = Canvas::with_default_size();
    let (source, _counters) = StubSource::new("stub", one_hot(7));
    let classifier = source.load().unwrap();
    let pipeline = RecognitionPipeline::default();

    let before = pipeline.recognize(&canvas, classifier.as_ref()).unwrap();
    draw_segment(&mut canvas, None, Point::new(128, 128), 10, Color::WHITE);
    let after = pipeline.recognize(&canvas, classifier.as_ref()).unwrap();

    assert_eq!(before.label, 7);
    assert_eq!(after.label, 7);
    assert!(canvas.count_stroke_pixels() > 0);
}
