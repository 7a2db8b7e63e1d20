use approx::assert_abs_diff_eq;

use photogate_core::buffer::{ColorLayout, PixelBuffer, Samples};
use photogate_core::error::GateError;
use photogate_core::grayscale::to_grayscale;

#[test]
fn test_gray_input_is_identity() {
    let data: Vec<u8> = (0..12).map(|v| v * 20).collect();
    let buffer = PixelBuffer::from_gray8(4, 3, data.clone()).unwrap();
    let gray = to_grayscale(&buffer).unwrap();

    assert_eq!(gray.width(), 4);
    assert_eq!(gray.height(), 3);
    for row in 0..3 {
        for col in 0..4 {
            assert_eq!(gray.data[[row, col]], data[row * 4 + col] as f32);
        }
    }
}

#[test]
fn test_rgb_uses_bt601_weights() {
    let buffer = PixelBuffer::from_rgb8(1, 1, vec![200, 100, 50]).unwrap();
    let gray = to_grayscale(&buffer).unwrap();
    let expected: f32 = 0.299 * 200.0 + 0.587 * 100.0 + 0.114 * 50.0;
    assert_abs_diff_eq!(gray.data[[0, 0]], expected, epsilon = 1e-3);
}

#[test]
fn test_bgr_swaps_red_and_blue() {
    let rgb = PixelBuffer::from_rgb8(1, 1, vec![200, 100, 50]).unwrap();
    let bgr = PixelBuffer::from_bgr8(1, 1, vec![50, 100, 200]).unwrap();
    let a = to_grayscale(&rgb).unwrap();
    let b = to_grayscale(&bgr).unwrap();
    assert_eq!(a.data[[0, 0]], b.data[[0, 0]]);
}

#[test]
fn test_white_rgb_is_full_scale() {
    let buffer = PixelBuffer::from_rgb8(2, 2, vec![255; 12]).unwrap();
    let gray = to_grayscale(&buffer).unwrap();
    for &v in gray.data.iter() {
        assert_abs_diff_eq!(v, 255.0, epsilon = 1e-3);
    }
}

#[test]
fn test_u16_rescaled_to_8bit_range() {
    let buffer =
        PixelBuffer::new(2, 1, ColorLayout::Gray, Samples::U16(vec![0, 65535])).unwrap();
    let gray = to_grayscale(&buffer).unwrap();
    assert_abs_diff_eq!(gray.data[[0, 0]], 0.0);
    assert_abs_diff_eq!(gray.data[[0, 1]], 255.0, epsilon = 1e-3);
}

#[test]
fn test_f32_rescaled_to_8bit_range() {
    let buffer =
        PixelBuffer::new(2, 1, ColorLayout::Gray, Samples::F32(vec![0.5, 1.0])).unwrap();
    let gray = to_grayscale(&buffer).unwrap();
    assert_abs_diff_eq!(gray.data[[0, 0]], 127.5, epsilon = 1e-3);
    assert_abs_diff_eq!(gray.data[[0, 1]], 255.0, epsilon = 1e-3);
}

#[test]
fn test_empty_buffer_is_invalid() {
    let buffer = PixelBuffer::from_gray8(0, 10, vec![]).unwrap();
    let err = to_grayscale(&buffer).unwrap_err();
    assert!(
        matches!(err, GateError::InvalidImage { width: 0, height: 10 }),
        "got: {err}"
    );
}

#[test]
fn test_sample_count_mismatch_rejected() {
    let err = PixelBuffer::from_rgb8(2, 2, vec![0; 11]).unwrap_err();
    assert!(
        matches!(
            err,
            GateError::BufferSizeMismatch {
                expected: 12,
                actual: 11
            }
        ),
        "got: {err}"
    );
}

#[test]
fn test_f32_out_of_range_is_clamped() {
    let buffer = PixelBuffer::new(
        3,
        1,
        ColorLayout::Gray,
        Samples::F32(vec![3.0, -1.0, 0.25]),
    )
    .unwrap();
    let gray = to_grayscale(&buffer).unwrap();
    assert_eq!(gray.data[[0, 0]], 255.0);
    assert_eq!(gray.data[[0, 1]], 0.0);
    assert_abs_diff_eq!(gray.data[[0, 2]], 63.75, epsilon = 1e-4);
}

#[test]
fn test_color_reduction_is_not_quantized() {
    let buffer = PixelBuffer::from_rgb8(1, 1, vec![1, 0, 0]).unwrap();
    let gray = to_grayscale(&buffer).unwrap();
    assert_abs_diff_eq!(gray.data[[0, 0]], 0.299, epsilon = 1e-6);
}
