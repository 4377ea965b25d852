// SPDX-License-Identifier: GPL-3.0-or-later
// tests/pipeline.rs
//
// Selection-to-surface scenarios driven through the public API.

use image::{DynamicImage, GenericImageView, Rgb, RgbImage};

use relief::app::view::crop::SelectionTracker;
use relief::app::{AppMessage, AppModel, Feedback, Status, render_enabled, status, update};
use relief::config::AppConfig;
use relief::constant::MIN_SELECTION_SIZE;
use relief::domain::error::{BuildError, SelectionError};
use relief::domain::raster::RasterImage;
use relief::domain::selection::SelectionRect;
use relief::domain::surface::build;
use relief::render::PreviewRenderer;

fn rgb_image(width: u32, height: u32) -> RasterImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 2 % 256) as u8, (y * 3 % 256) as u8, ((x + y) % 256) as u8])
    });
    RasterImage::new(DynamicImage::ImageRgb8(img))
}

fn tracker_for(image: &RasterImage) -> SelectionTracker {
    let mut tracker = SelectionTracker::default();
    tracker.attach(image.width(), image.height());
    tracker
}

#[test]
fn scenario_select_and_build_50_by_40() {
    let image = rgb_image(100, 80);
    let mut tracker = tracker_for(&image);
    tracker.begin(10.0, 10.0);
    let rect = tracker.end(60.0, 50.0).unwrap();
    assert_eq!(rect, SelectionRect::new(10, 10, 60, 50));

    let (field, view) = build(&image, &rect).unwrap();
    assert_eq!(field.dimensions(), (50, 40));
    assert_eq!(view.colormap.name(), "jet");
}

#[test]
fn scenario_tiny_drag_keeps_render_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let mut renderer = PreviewRenderer::new(dir.path().join("out.png"), 1);
    let mut model = AppModel::new(AppConfig::default());
    update(&mut model, AppMessage::LoadImage(rgb_image(100, 80)), &mut renderer);

    update(&mut model, AppMessage::PointerPressed { x: 10.0, y: 10.0 }, &mut renderer);
    let fb = update(&mut model, AppMessage::PointerReleased { x: 12.0, y: 11.0 }, &mut renderer);

    assert_eq!(fb, Feedback::ClearOutline);
    assert_eq!(status(&model), Status::SelectionTooSmall);
    assert!(!render_enabled(&model));
}

#[test]
fn scenario_drag_past_edge_is_clamped_and_raw_rect_rejected() {
    let image = rgb_image(100, 80);
    let mut tracker = tracker_for(&image);
    tracker.begin(90.0, 70.0);
    let rect = tracker.end(120.0, 95.0).unwrap();
    assert_eq!(rect, SelectionRect::new(90, 70, 100, 80));
    assert_eq!(build(&image, &rect).unwrap().0.dimensions(), (10, 10));

    let raw = SelectionRect::new(90, 70, 120, 95);
    assert!(matches!(
        build(&image, &raw),
        Err(BuildError::RectOutOfBounds { .. })
    ));
}

#[test]
fn drags_within_min_size_never_produce_a_rect() {
    let image = rgb_image(100, 80);
    let mut tracker = tracker_for(&image);
    let min = MIN_SELECTION_SIZE as f32;
    for (dx, dy) in [(0.0, 30.0), (min, 30.0), (30.0, min), (-min, -30.0), (2.0, 1.0)] {
        tracker.begin(40.0, 40.0);
        let result = tracker.end(40.0 + dx, 40.0 + dy);
        assert!(
            matches!(result, Err(SelectionError::TooSmallSelection { .. })),
            "drag by ({dx}, {dy}) gave {result:?}"
        );
    }
}

#[test]
fn end_to_end_writes_preview() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.png");
    let output = dir.path().join("surface.png");
    RgbImage::from_pixel(40, 30, Rgb([200, 100, 50])).save(&source).unwrap();

    let mut renderer = PreviewRenderer::new(&output, 2);
    let mut model = AppModel::new(AppConfig::default());
    update(&mut model, AppMessage::OpenPath(source), &mut renderer);
    assert_eq!(status(&model), Status::AwaitingSelection);

    update(&mut model, AppMessage::PointerPressed { x: 5.0, y: 5.0 }, &mut renderer);
    update(&mut model, AppMessage::PointerMoved { x: 20.0, y: 12.0 }, &mut renderer);
    update(&mut model, AppMessage::PointerReleased { x: 25.0, y: 20.0 }, &mut renderer);
    assert!(render_enabled(&model));

    assert_eq!(update(&mut model, AppMessage::Render, &mut renderer), Feedback::Rendered);
    let preview = image::open(&output).unwrap();
    assert_eq!(preview.dimensions(), (40, 30));
}
