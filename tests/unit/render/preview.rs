use std::sync::Arc;

use super::*;
use crate::studio::{
    compose::compose_preview,
    model::{GarmentColor, LogoImage, LogoScale, Placement},
};

fn red_logo(width: u32, height: u32) -> LogoImage {
    LogoImage {
        width,
        height,
        rgba8_premul: Arc::new([255, 0, 0, 255].repeat((width * height) as usize)),
    }
}

fn red_pixels(frame: &PreviewFrame) -> usize {
    frame
        .data
        .chunks_exact(4)
        .filter(|px| *px == [255, 0, 0, 255])
        .count()
}

#[test]
fn garment_box_is_centered_three_by_four() {
    let body = garment_box(Canvas {
        width: 640,
        height: 640,
    });
    assert_eq!(body, Rect::new(140.0, 80.0, 500.0, 560.0));

    let wide = garment_box(Canvas {
        width: 200,
        height: 800,
    });
    assert!((wide.width() / wide.height() - 0.75).abs() < 1e-9);
    assert!(wide.width() <= 150.0);
}

#[test]
fn empty_preview_shows_backdrop_and_fabric() {
    let desc = compose_preview(
        None,
        GarmentColor::White,
        Placement::LeftChest,
        LogoScale::default(),
    );
    let frame = render_preview(&desc, &PreviewSettings::default()).unwrap();
    assert_eq!((frame.width, frame.height), (640, 640));
    assert_eq!(frame.pixel(0, 0), [0xf0, 0xf0, 0xf0, 0xff]);
    assert_eq!(frame.pixel(320, 400), [0xff, 0xff, 0xff, 0xff]);
}

#[test]
fn placeholder_border_is_drawn_on_dark_fabric() {
    let desc = compose_preview(
        None,
        GarmentColor::Navy,
        Placement::LeftChest,
        LogoScale::default(),
    );
    let frame = render_preview(&desc, &PreviewSettings::default()).unwrap();
    let fabric = frame.pixel(230, 224);
    assert_eq!(
        fabric,
        Rgba8Premul::from(GarmentColor::Navy.hex()).to_array()
    );
    assert_ne!(frame.pixel(156, 200), fabric);
}

#[test]
fn logo_is_drawn_at_placement_anchor() {
    let logo = red_logo(10, 10);
    let desc = compose_preview(
        Some(&logo),
        GarmentColor::Navy,
        Placement::Center,
        LogoScale::default(),
    );
    let frame = render_preview(&desc, &PreviewSettings::default()).unwrap();
    assert_eq!(frame.pixel(320, 248), [255, 0, 0, 255]);
    assert_eq!(
        frame.pixel(320, 500),
        Rgba8Premul::from(GarmentColor::Navy.hex()).to_array()
    );
}

#[test]
fn scale_slider_never_exceeds_placement_budget() {
    let logo = red_logo(8, 8);
    let settings = PreviewSettings::default();
    let drawn = |percent| {
        let desc = compose_preview(
            Some(&logo),
            GarmentColor::Gray,
            Placement::FullFront,
            LogoScale::clamped(percent),
        );
        red_pixels(&render_preview(&desc, &settings).unwrap())
    };
    let at_min = drawn(50);
    assert!(at_min > 0);
    assert_eq!(drawn(150), at_min);
}

#[test]
fn zero_canvas_is_rejected() {
    let desc = compose_preview(
        None,
        GarmentColor::Black,
        Placement::Center,
        LogoScale::default(),
    );
    let settings = PreviewSettings {
        canvas: Canvas {
            width: 0,
            height: 10,
        },
    };
    let err = render_preview(&desc, &settings).unwrap_err();
    assert!(err.to_string().starts_with("render error:"));
}

#[test]
fn oversized_canvas_is_a_render_error() {
    let desc = compose_preview(
        None,
        GarmentColor::Black,
        Placement::Center,
        LogoScale::default(),
    );
    for (width, height) in [(u32::MAX, u32::MAX), (MAX_CANVAS_DIM + 1, 1)] {
        let settings = PreviewSettings {
            canvas: Canvas { width, height },
        };
        let err = render_preview(&desc, &settings).unwrap_err();
        assert!(err.to_string().starts_with("render error:"), "{err}");
    }
}

#[test]
fn write_png_creates_parent_dirs() {
    let desc = compose_preview(
        None,
        GarmentColor::Beige,
        Placement::Center,
        LogoScale::default(),
    );
    let settings = PreviewSettings {
        canvas: Canvas {
            width: 64,
            height: 48,
        },
    };
    let frame = render_preview(&desc, &settings).unwrap();

    let dir = std::env::temp_dir().join(format!("basicolor_preview_{}", std::process::id()));
    let path = dir.join("nested").join("preview.png");
    frame.write_png(&path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (64, 48));
    assert_eq!(decoded.get_pixel(0, 0).0, frame.pixel(0, 0));
    let _ = std::fs::remove_dir_all(&dir);
}
