pub mod brightness;
pub mod gradient;
pub mod kernel;
pub mod laplacian;
pub mod stats;

use crate::buffer::GrayscaleBuffer;

/// One of the three independent quality signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Analyzer {
    Blur,
    Darkness,
    Focus,
}

impl Analyzer {
    /// Compute this analyzer's raw score.
    pub fn score(&self, gray: &GrayscaleBuffer) -> f64 {
        match self {
            Self::Blur => laplacian::laplacian_variance(gray),
            Self::Darkness => brightness::mean_brightness(gray),
            Self::Focus => gradient::focus_score(gray),
        }
    }
}

impl std::fmt::Display for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blur => write!(f, "blur"),
            Self::Darkness => write!(f, "darkness"),
            Self::Focus => write!(f, "focus"),
        }
    }
}
