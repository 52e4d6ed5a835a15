use image::{Rgb, RgbImage};

use field_detect::error::DetectError;
use field_detect::pipeline::{pack_planar, prepare_frame, ScaleFactors};
use field_detect::FieldFrame;

#[test]
fn packing_is_channel_major() {
    let image = RgbImage::from_raw(2, 1, vec![10, 20, 30, 40, 50, 60]).unwrap();

    let packed = pack_planar(&image);

    let expected: Vec<f32> = [10u8, 40, 20, 50, 30, 60]
        .iter()
        .map(|&v| v as f32 / 255.0)
        .collect();
    assert_eq!(packed, expected);
}

#[test]
fn prepared_frame_has_square_planar_shape() {
    let frame = FieldFrame::new(RgbImage::new(1280, 720));

    let packed = prepare_frame(&frame, 640).unwrap();

    assert_eq!(packed.shape, [1, 3, 640, 640]);
    assert_eq!(packed.tensor.len(), 3 * 640 * 640);
    assert_eq!(packed.scale.x, 0.5);
    assert_eq!(packed.scale.y, 640.0 / 720.0);
}

#[test]
fn area_resize_preserves_constant_frames() {
    let mut image = RgbImage::new(1280, 720);
    for pixel in image.pixels_mut() {
        *pixel = Rgb([128, 64, 32]);
    }
    let frame = FieldFrame::new(image);

    let packed = prepare_frame(&frame, 640).unwrap();

    let hw = 640 * 640;
    for &offset in &[0usize, hw / 2, hw - 1] {
        assert!((packed.tensor[offset] - 128.0 / 255.0).abs() < 1e-3);
        assert!((packed.tensor[hw + offset] - 64.0 / 255.0).abs() < 1e-3);
        assert!((packed.tensor[2 * hw + offset] - 32.0 / 255.0).abs() < 1e-3);
    }
}

#[test]
fn zero_sized_frames_are_invalid_input() {
    let frame = FieldFrame::new(RgbImage::new(0, 0));

    let err = prepare_frame(&frame, 640).unwrap_err();
    assert!(matches!(err, DetectError::InvalidInput(_)), "{err}");
}

#[test]
fn scale_factors_are_target_over_source() {
    let scale = ScaleFactors::new(640, 1920, 1080);
    assert_eq!(scale.x, 640.0 / 1920.0);
    assert_eq!(scale.y, 640.0 / 1080.0);
}
