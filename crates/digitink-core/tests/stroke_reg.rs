//! Stroke rasterization regression test
//!
//! Pins down the brush geometry: exact disk membership, full coverage
//! along a segment, clipping at the canvas edge, and clear semantics.

use digitink_core::stroke::{Color, draw_segment, line_points, stamp_disk};
use digitink_core::{Canvas, Point};
use digitink_test::disk_pixel_count;

const WHITE: u32 = Color::WHITE.to_pixel32();

#[test]
fn dot_at_canvas_center_is_exact_disk() {
    let mut canvas = Canvas::with_default_size();
    draw_segment(&mut canvas, None, Point::new(128, 128), 10, Color::WHITE);

    for y in 0..256 {
        for x in 0..256 {
            let di = x - 128;
            let dj = y - 128;
            let inside = di * di + dj * dj <= 100;
            assert_eq!(
                canvas.get_pixel(x, y) == Some(WHITE),
                inside,
                "disk membership mismatch at ({x},{y})"
            );
        }
    }
    assert_eq!(canvas.count_stroke_pixels(), disk_pixel_count(10));
}

#[test]
fn segment_covers_disk_at_every_bresenham_step() {
    let mut canvas = Canvas::with_default_size();
    let from = Point::new(40, 60);
    let to = Point::new(200, 180);
    draw_segment(&mut canvas, Some(from), to, 10, Color::WHITE);

    for step in line_points(from, to) {
        for j in -10i32..=10 {
            for i in -10i32..=10 {
                if i * i + j * j <= 100 {
                    assert_eq!(
                        canvas.get_pixel(step.x + i, step.y + j),
                        Some(WHITE),
                        "hole in stroke at step {step:?} offset ({i},{j})"
                    );
                }
            }
        }
    }
}

#[test]
fn no_pixel_outside_brush_radius_is_touched() {
    let mut canvas = Canvas::with_default_size();
    let from = Point::new(30, 30);
    let to = Point::new(220, 100);
    draw_segment(&mut canvas, Some(from), to, 10, Color::WHITE);

    let steps = line_points(from, to);
    for y in 0..256 {
        for x in 0..256 {
            if canvas.get_pixel(x, y) == Some(WHITE) {
                let covered = steps
                    .iter()
                    .any(|s| (x - s.x).pow(2) + (y - s.y).pow(2) <= 100);
                assert!(covered, "stray pixel at ({x},{y})");
            }
        }
    }
}

#[test]
fn stamping_near_edge_clips_silently() {
    let mut canvas = Canvas::with_default_size();
    // Quarter disk at the corner, half disk at an edge midpoint
    stamp_disk(&mut canvas, Point::new(0, 0), 10, Color::WHITE);
    let corner = canvas.count_stroke_pixels();
    assert!(corner > 0);
    assert!(corner < disk_pixel_count(10));

    canvas.clear();
    stamp_disk(&mut canvas, Point::new(-20, -20), 10, Color::WHITE);
    assert_eq!(canvas.count_stroke_pixels(), 0);
}

#[test]
fn closed_stroke_union_is_idempotent() {
    // Drawing the same closed triangle twice changes nothing
    let vertices = [
        Point::new(60, 60),
        Point::new(180, 70),
        Point::new(120, 190),
        Point::new(60, 60),
    ];

    let mut once = Canvas::with_default_size();
    let mut last = None;
    for &v in &vertices {
        draw_segment(&mut once, last, v, 10, Color::WHITE);
        last = Some(v);
    }

    let mut twice = once.clone();
    let mut last = None;
    for &v in &vertices {
        draw_segment(&mut twice, last, v, 10, Color::WHITE);
        last = Some(v);
    }

    assert_eq!(once.data(), twice.data());
}

#[test]
fn clear_resets_every_pixel() {
    let mut canvas = Canvas::with_default_size();
    draw_segment(
        &mut canvas,
        Some(Point::new(10, 10)),
        Point::new(240, 240),
        10,
        Color::WHITE,
    );
    assert!(canvas.count_stroke_pixels() > 0);

    canvas.clear();
    for y in 0..256 {
        for x in 0..256 {
            assert_eq!(canvas.get_pixel(x, y), Some(Canvas::BACKGROUND));
        }
    }
}
