//! Shared helpers for integration tests: synthetic pixel buffers.

#![allow(dead_code)]

use photogate_core::buffer::PixelBuffer;

/// Single-channel image with the same intensity everywhere.
pub fn uniform_gray(width: usize, height: usize, value: u8) -> PixelBuffer {
    PixelBuffer::from_gray8(width, height, vec![value; width * height]).expect("valid buffer")
}

/// Checkerboard of 0/255 square blocks with the given side length.
pub fn checkerboard(width: usize, height: usize, block: usize) -> PixelBuffer {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let on = (row / block + col / block) % 2 == 0;
            data.push(if on { 255 } else { 0 });
        }
    }
    PixelBuffer::from_gray8(width, height, data).expect("valid buffer")
}

/// Smooth left-to-right ramp from 0 to 255 — no sharp edges.
pub fn horizontal_ramp(width: usize, height: usize) -> PixelBuffer {
    let mut data = Vec::with_capacity(width * height);
    for _ in 0..height {
        for col in 0..width {
            data.push((col * 255 / (width - 1).max(1)) as u8);
        }
    }
    PixelBuffer::from_gray8(width, height, data).expect("valid buffer")
}

/// Checkerboard scaled into [low, high] — same edges, different exposure.
pub fn checkerboard_range(width: usize, height: usize, block: usize, low: u8, high: u8) -> PixelBuffer {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let on = (row / block + col / block) % 2 == 0;
            data.push(if on { high } else { low });
        }
    }
    PixelBuffer::from_gray8(width, height, data).expect("valid buffer")
}

/// Interleaved RGB image with one color everywhere.
pub fn uniform_rgb(width: usize, height: usize, rgb: [u8; 3]) -> PixelBuffer {
    let data: Vec<u8> = (0..width * height).flat_map(|_| rgb).collect();
    PixelBuffer::from_rgb8(width, height, data).expect("valid buffer")
}
