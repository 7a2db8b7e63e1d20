use ndarray::Array2;

use crate::error::{GateError, Result};

/// Channel arrangement of an interleaved pixel buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColorLayout {
    Gray,
    Rgb,
    Bgr,
}

impl ColorLayout {
    pub fn channels(&self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb | Self::Bgr => 3,
        }
    }
}

impl std::fmt::Display for ColorLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gray => write!(f, "Gray"),
            Self::Rgb => write!(f, "RGB"),
            Self::Bgr => write!(f, "BGR"),
        }
    }
}

/// Interleaved sample storage.
///
/// Native ranges: `U8` 0..=255, `U16` 0..=65535, `F32` 0.0..=1.0.
#[derive(Clone, Debug)]
pub enum Samples {
    U8(Vec<u8>),
    U16(Vec<u16>),
    F32(Vec<f32>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Self::U8(v) => v.len(),
            Self::U16(v) => v.len(),
            Self::F32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the sample type, for display.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::F32(_) => "f32",
        }
    }
}

/// A decoded still image, row-major and channel-interleaved.
///
/// Zero-area buffers are representable so that an empty capture can be
/// passed through to the checker, which reports it as poor quality.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    layout: ColorLayout,
    samples: Samples,
}

impl PixelBuffer {
    /// Wrap interleaved samples. Fails if the sample count does not match
    /// `width * height * layout.channels()`.
    pub fn new(width: usize, height: usize, layout: ColorLayout, samples: Samples) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(layout.channels()))
            .ok_or(GateError::InvalidImage { width, height })?;
        if samples.len() != expected {
            return Err(GateError::BufferSizeMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            layout,
            samples,
        })
    }

    /// Single-channel 8-bit buffer.
    pub fn from_gray8(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, ColorLayout::Gray, Samples::U8(data))
    }

    /// Interleaved 8-bit RGB buffer.
    pub fn from_rgb8(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, ColorLayout::Rgb, Samples::U8(data))
    }

    /// Interleaved 8-bit BGR buffer, as delivered by many capture libraries.
    pub fn from_bgr8(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, ColorLayout::Bgr, Samples::U8(data))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn layout(&self) -> ColorLayout {
        self.layout
    }

    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Single-channel intensity image on a 0-255 scale.
/// Shape = (height, width).
#[derive(Clone, Debug)]
pub struct GrayscaleBuffer {
    pub data: Array2<f32>,
}

impl GrayscaleBuffer {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }
}
