// Terminal rendering of session state. Pure functions of the snapshot;
// no decision authority lives here.

use crossterm::style::Stylize;

use crate::analysis::bands::PresentationBands;
use crate::analysis::session::{Phase, SessionView};
use crate::analysis::types::AnalysisResult;

const BAR_WIDTH: usize = 20;

/// Render the whole session view
pub fn render_view(view: &SessionView) -> String {
    match view.phase {
        Phase::Idle => String::new(),
        Phase::Pending => "Analyzing…".to_string(),
        Phase::Failed => view
            .error
            .map(|kind| format!("{}", kind.message().dark_red()))
            .unwrap_or_default(),
        Phase::Succeeded => view
            .result
            .as_ref()
            .map(render_result)
            .unwrap_or_default(),
    }
}

/// Render one classification result as the result card of the web UI
pub fn render_result(result: &AnalysisResult) -> String {
    let bands = PresentationBands::from_result(result);

    let prediction = if result.is_hate {
        format!("{}", "Hate Speech".red().bold())
    } else {
        format!("{}", "Not Hate".green().bold())
    };

    let mut card = String::new();
    card.push_str(&format!(
        "Prediction: {}   Confidence: {}%\n",
        prediction, bands.confidence_percent
    ));
    card.push_str(&format!("Category: {}\n", result.category));
    card.push_str(&format!(
        "Severity: {:>3}% {} ({})\n",
        bands.severity_percent,
        severity_bar(&bands),
        bands.tier.as_str()
    ));
    card.push_str(&format!("Language detected: {}\n", result.language));
    if let Some(explanation) = &result.explanation {
        card.push_str(explanation);
        card.push('\n');
    }
    card
}

fn severity_bar(bands: &PresentationBands) -> String {
    let filled = bands.severity_percent as usize * BAR_WIDTH / 100;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
    format!("{}", bar.with(bands.tier.color()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::bands::SeverityTier;
    use crate::analysis::error::FailureKind;
    use crate::analysis::types::Language;

    fn view(phase: Phase) -> SessionView {
        SessionView {
            text: String::new(),
            language: Language::Auto,
            phase,
            result: None,
            error: None,
        }
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            is_hate: true,
            category: "personal attack".to_string(),
            severity: 0.82,
            language: "en".to_string(),
            confidence: 0.91,
            explanation: Some("Targets the reader with degrading language.".to_string()),
        }
    }

    #[test]
    fn idle_renders_nothing() {
        assert_eq!(render_view(&view(Phase::Idle)), "");
    }

    #[test]
    fn pending_renders_progress_label() {
        assert_eq!(render_view(&view(Phase::Pending)), "Analyzing…");
    }

    #[test]
    fn failed_renders_the_fixed_message() {
        let mut failed = view(Phase::Failed);
        failed.error = Some(FailureKind::BackendUnavailable);
        assert!(render_view(&failed).contains("Backend connection failed."));
    }

    #[test]
    fn result_card_shows_bands_and_passthrough_fields() {
        let card = render_result(&sample_result());
        assert!(card.contains("Hate Speech"));
        assert!(card.contains("91%"));
        assert!(card.contains("personal attack"));
        assert!(card.contains("82%"));
        assert!(card.contains("High"));
        assert!(card.contains("Language detected: en"));
        assert!(card.contains("degrading language"));
    }

    #[test]
    fn bar_is_empty_at_zero_and_full_at_hundred() {
        let zero = PresentationBands {
            tier: SeverityTier::Low,
            confidence_percent: 0,
            severity_percent: 0,
        };
        let full = PresentationBands {
            tier: SeverityTier::High,
            confidence_percent: 100,
            severity_percent: 100,
        };
        assert!(!severity_bar(&zero).contains('█'));
        assert!(!severity_bar(&full).contains('░'));
    }
}
