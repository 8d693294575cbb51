use super::*;
use crate::foundation::core::{FlipOptions, Rgba8};

fn basic_sprite() -> SlicedSprite {
    SlicedSprite {
        size: Size::new(40.0, 40.0),
        border: BorderInsets::uniform(10.0),
        outer_uv: Rect::new(0.0, 0.0, 1.0, 1.0),
        inner_uv: Rect::new(0.25, 0.25, 0.75, 0.75),
        packed: false,
        wrap_mode: WrapMode::Clamp,
    }
}

fn basic_image() -> TiledImage {
    TiledImage {
        sprite: Some(basic_sprite()),
        rect: Rect::new(0.0, 0.0, 100.0, 100.0),
        original_size: Size::new(100.0, 100.0),
        color: Rgba8::WHITE,
        mode: DrawMode::Tiled,
        fill_center: true,
        pixels_per_unit: 1.0,
        flip: FlipOptions::default(),
    }
}

#[test]
fn full_texture_sprite_has_no_border() {
    let sprite = SlicedSprite::full_texture(Size::new(64.0, 64.0));
    assert!(!sprite.has_border());
    assert_eq!(sprite.outer_uv, sprite.inner_uv);
    sprite.validate().unwrap();
}

#[test]
fn sliced_sprite_reports_border() {
    assert!(basic_sprite().has_border());
}

#[test]
fn validate_rejects_negative_border() {
    let mut sprite = basic_sprite();
    sprite.border.left = -1.0;
    assert!(sprite.validate().is_err());
}

#[test]
fn validate_rejects_uv_outside_unit_box() {
    let mut sprite = basic_sprite();
    sprite.outer_uv = Rect::new(0.0, 0.0, 1.5, 1.0);
    assert!(sprite.validate().is_err());
}

#[test]
fn validate_rejects_unsorted_uv() {
    let mut sprite = basic_sprite();
    sprite.inner_uv = Rect::new(0.75, 0.25, 0.25, 0.75);
    assert!(sprite.validate().is_err());
}

#[test]
fn validate_rejects_negative_rect() {
    let mut image = basic_image();
    image.rect = Rect::new(10.0, 0.0, 0.0, 100.0);
    assert!(image.validate().is_err());
}

#[test]
fn validate_rejects_non_positive_pixels_per_unit() {
    let mut image = basic_image();
    image.pixels_per_unit = 0.0;
    assert!(image.validate().is_err());
}

#[test]
fn validate_accepts_missing_sprite() {
    let mut image = basic_image();
    image.sprite = None;
    image.validate().unwrap();
}

#[test]
fn json_roundtrip() {
    let image = basic_image();
    let json = image.to_json_pretty().unwrap();
    let de = TiledImage::from_json(&json).unwrap();
    assert_eq!(de, image);
}

#[test]
fn minimal_json_fills_defaults() {
    let image = TiledImage::from_json(
        r#"{
            "sprite": null,
            "rect": {"x0": 0.0, "y0": 0.0, "x1": 50.0, "y1": 50.0},
            "original_size": {"width": 50.0, "height": 50.0}
        }"#,
    )
    .unwrap();
    assert_eq!(image.mode, DrawMode::Simple);
    assert_eq!(image.color, Rgba8::WHITE);
    assert!(image.fill_center);
    assert_eq!(image.pixels_per_unit, 1.0);
    assert_eq!(image.flip, FlipOptions::default());
}

#[test]
fn from_json_reports_serde_errors() {
    let err = TiledImage::from_json("not json").unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}
