use serde::{Deserialize, Serialize};

/// Raw, unnormalized analyzer outputs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QualityScores {
    /// Laplacian variance (unbounded above).
    pub blur: f64,
    /// Mean intensity, 0-255.
    pub darkness: f64,
    /// Strong-edge fraction, 0-1.
    pub focus: f64,
}

/// Machine-readable reason behind a warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityIssue {
    Blurry,
    TooDark,
    PoorFocus,
    InvalidImage,
    AnalyzerFault,
}

impl QualityIssue {
    /// User-facing text for the threshold issues. Failure issues carry a
    /// reason and are formatted by [`QualityReport::failed`].
    pub fn message(&self) -> &'static str {
        match self {
            Self::Blurry => "Blurry image: the photo may be shaken or out of focus.",
            Self::TooDark => "Image too dark: improve the lighting.",
            Self::PoorFocus => "Poor focus: make sure the subject is clearly visible.",
            Self::InvalidImage => "Could not read image",
            Self::AnalyzerFault => "Error checking image",
        }
    }
}

impl std::fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blurry => write!(f, "blurry"),
            Self::TooDark => write!(f, "too dark"),
            Self::PoorFocus => write!(f, "poor focus"),
            Self::InvalidImage => write!(f, "invalid image"),
            Self::AnalyzerFault => write!(f, "analyzer fault"),
        }
    }
}

/// Verdict for one image.
///
/// `warnings[i]` is the display text for `issues[i]`. Threshold warnings are
/// always ordered blur, darkness, focus.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub is_poor: bool,
    pub warnings: Vec<String>,
    pub issues: Vec<QualityIssue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<QualityScores>,
}

impl QualityReport {
    /// Build a scored report from the issues found, in order.
    pub fn scored(scores: QualityScores, issues: Vec<QualityIssue>) -> Self {
        Self {
            is_poor: !issues.is_empty(),
            warnings: issues.iter().map(|i| i.message().to_string()).collect(),
            issues,
            scores: Some(scores),
        }
    }

    /// A poor verdict with no scores and a single warning describing why
    /// evaluation could not complete.
    pub fn failed(issue: QualityIssue, reason: impl std::fmt::Display) -> Self {
        Self {
            is_poor: true,
            warnings: vec![format!("{}: {}", issue.message(), reason)],
            issues: vec![issue],
            scores: None,
        }
    }

    /// True when the image may be forwarded downstream.
    pub fn is_acceptable(&self) -> bool {
        !self.is_poor
    }

    pub fn has_issue(&self, issue: QualityIssue) -> bool {
        self.issues.contains(&issue)
    }
}
