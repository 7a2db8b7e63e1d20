use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::buffer::{GrayscaleBuffer, PixelBuffer};
use crate::config::QualityConfig;
use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{GateError, Result};
use crate::grayscale::to_grayscale;
use crate::quality::Analyzer;
use crate::report::{QualityIssue, QualityReport, QualityScores};

/// Image-quality gate: scores an image for blur, darkness and focus and
/// compares the scores against fixed thresholds.
///
/// The checker holds no mutable state and can be shared across threads.
/// [`QualityChecker::evaluate`] never fails or panics past its boundary;
/// every failure becomes a poor-quality report.
#[derive(Clone, Debug, Default)]
pub struct QualityChecker {
    config: QualityConfig,
}

impl QualityChecker {
    /// Does not validate `config`; use [`QualityChecker::try_new`] for
    /// untrusted thresholds. A NaN threshold fails its check for every image.
    pub fn new(config: QualityConfig) -> Self {
        Self { config }
    }

    /// Like [`QualityChecker::new`] but rejects invalid thresholds.
    pub fn try_new(config: QualityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &QualityConfig {
        &self.config
    }

    /// Evaluate a decoded image.
    pub fn evaluate(&self, buffer: &PixelBuffer) -> QualityReport {
        let gray = match to_grayscale(buffer) {
            Ok(gray) => gray,
            Err(e) => {
                warn!(
                    width = buffer.width(),
                    height = buffer.height(),
                    "Rejecting image: {e}"
                );
                return QualityReport::failed(QualityIssue::InvalidImage, e);
            }
        };

        match self.score(&gray) {
            Ok(scores) => self.verdict(scores),
            Err(e) => {
                warn!("Quality analysis failed: {e}");
                QualityReport::failed(QualityIssue::AnalyzerFault, e)
            }
        }
    }

    /// Evaluate the outcome of an image source. A source error becomes a
    /// poor report and no analyzer runs.
    pub fn evaluate_source<E>(&self, source: std::result::Result<PixelBuffer, E>) -> QualityReport
    where
        E: std::fmt::Display,
    {
        match source {
            Ok(buffer) => self.evaluate(&buffer),
            Err(e) => {
                warn!("Image source failed: {e}");
                QualityReport::failed(QualityIssue::InvalidImage, e)
            }
        }
    }

    /// Run all three analyzers. Panics and non-finite results are turned
    /// into [`GateError::AnalyzerFault`].
    pub fn score(&self, gray: &GrayscaleBuffer) -> Result<QualityScores> {
        let scores = catch_unwind(AssertUnwindSafe(|| compute_scores(gray)))
            .map_err(|payload| GateError::AnalyzerFault(panic_message(payload.as_ref())))?;

        for (analyzer, value) in [
            (Analyzer::Blur, scores.blur),
            (Analyzer::Darkness, scores.darkness),
            (Analyzer::Focus, scores.focus),
        ] {
            if !value.is_finite() {
                return Err(GateError::AnalyzerFault(format!(
                    "{analyzer} score is not finite ({value})"
                )));
            }
        }

        debug!(
            width = gray.width(),
            height = gray.height(),
            blur = scores.blur,
            darkness = scores.darkness,
            focus = scores.focus,
            "Scored image"
        );
        Ok(scores)
    }

    /// Compare scores against the thresholds. Warnings come out in the
    /// fixed order blur, darkness, focus.
    pub fn verdict(&self, scores: QualityScores) -> QualityReport {
        let mut issues = Vec::new();
        if below(scores.blur, self.config.blur_threshold) {
            issues.push(QualityIssue::Blurry);
        }
        if below(scores.darkness, self.config.darkness_threshold) {
            issues.push(QualityIssue::TooDark);
        }
        if below(scores.focus, self.config.focus_threshold) {
            issues.push(QualityIssue::PoorFocus);
        }
        QualityReport::scored(scores, issues)
    }
}

/// Failing comparison. An unusable (NaN) threshold fails closed.
fn below(score: f64, threshold: f64) -> bool {
    threshold.is_nan() || score < threshold
}

fn compute_scores(gray: &GrayscaleBuffer) -> QualityScores {
    let (blur, (darkness, focus)) = if gray.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
        rayon::join(
            || Analyzer::Blur.score(gray),
            || {
                rayon::join(
                    || Analyzer::Darkness.score(gray),
                    || Analyzer::Focus.score(gray),
                )
            },
        )
    } else {
        (
            Analyzer::Blur.score(gray),
            (Analyzer::Darkness.score(gray), Analyzer::Focus.score(gray)),
        )
    };

    QualityScores {
        blur,
        darkness,
        focus,
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "analyzer panicked".to_string()
    }
}
