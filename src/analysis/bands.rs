// Presentation banding for classification results

use crossterm::style::Color;

use super::types::AnalysisResult;

/// Discrete severity band, used for colour-coding only. The `is_hate`
/// decision and category come verbatim from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    Low,
    Medium,
    High,
}

impl SeverityTier {
    /// Band a raw severity score. Lower bounds are inclusive.
    pub fn from_severity(severity: f64) -> Self {
        if severity >= 0.75 {
            SeverityTier::High
        } else if severity >= 0.45 {
            SeverityTier::Medium
        } else {
            SeverityTier::Low
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SeverityTier::Low => "Low",
            SeverityTier::Medium => "Medium",
            SeverityTier::High => "High",
        }
    }

    /// Terminal colour matching the severity bar of the web UI
    pub fn color(&self) -> Color {
        match self {
            SeverityTier::Low => Color::Green,
            SeverityTier::Medium => Color::DarkYellow,
            SeverityTier::High => Color::Red,
        }
    }
}

/// Display-ready view of a result: banded tier plus rounded percentages.
/// Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationBands {
    pub tier: SeverityTier,
    pub confidence_percent: u8,
    pub severity_percent: u8,
}

impl PresentationBands {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            tier: SeverityTier::from_severity(result.severity),
            confidence_percent: percent(result.confidence),
            severity_percent: percent(result.severity),
        }
    }
}

/// Round-half-up percentage, clamped even though the contract promises
/// scores in [0, 1]
fn percent(score: f64) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}
