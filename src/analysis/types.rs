// Wire types shared with the HateShield backend

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language hint sent with an analysis request. `Auto` lets the backend
/// detect the language itself.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Auto,
    En,
    Hi,
    Gu,
}

impl Language {
    pub fn as_str(&self) -> &str {
        match self {
            Language::Auto => "auto",
            Language::En => "en",
            Language::Hi => "hi",
            Language::Gu => "gu",
        }
    }

    /// Human-readable name for selector UIs
    pub fn label(&self) -> &str {
        match self {
            Language::Auto => "Auto detect",
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Gu => "Gujarati",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Language::Auto),
            "en" | "english" => Ok(Language::En),
            "hi" | "hindi" => Ok(Language::Hi),
            "gu" | "gujarati" => Ok(Language::Gu),
            other => Err(format!(
                "unknown language '{}' (expected auto, en, hi or gu)",
                other
            )),
        }
    }
}

/// Payload for `POST /analyze`
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub text: String,
    pub language: Language,
}

/// Classification produced by the backend model. Stored verbatim; banding
/// and rounding happen at presentation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub is_hate: bool,
    pub category: String,
    /// Intensity score in [0, 1], independent of the binary decision
    pub severity: f64,
    /// Language the model detected, independent of the request hint
    pub language: String,
    pub confidence: f64,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Envelope for `POST /analyze` responses
#[derive(Debug, Deserialize)]
pub struct AnalyzeResponse {
    pub result: AnalysisResult,
}

/// Payload for `POST /analyze/bulk`
#[derive(Debug, Clone, Serialize)]
pub struct BulkAnalyzeRequest {
    pub texts: Vec<String>,
    pub language: Language,
}

/// One entry of a bulk response, keyed by input position
#[derive(Debug, Clone, Deserialize)]
pub struct BulkItemResult {
    pub id: usize,
    pub text: String,
    pub result: AnalysisResult,
}

/// Envelope for `POST /analyze/bulk` responses
#[derive(Debug, Deserialize)]
pub struct BulkAnalyzeResponse {
    pub results: Vec<BulkItemResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn language_serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_value(Language::Auto).unwrap(), json!("auto"));
        assert_eq!(serde_json::to_value(Language::Gu).unwrap(), json!("gu"));
    }

    #[test]
    fn language_parses_codes_and_names() {
        assert_eq!("auto".parse::<Language>().unwrap(), Language::Auto);
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("Hindi".parse::<Language>().unwrap(), Language::Hi);
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn request_wire_shape() {
        let request = AnalyzeRequest {
            text: "hello".to_string(),
            language: Language::Auto,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"text": "hello", "language": "auto"})
        );
    }

    #[test]
    fn result_decodes_without_explanation() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "is_hate": false,
            "category": "NON_HATE",
            "severity": 0.1,
            "language": "en",
            "confidence": 0.97
        }))
        .unwrap();
        assert!(!result.is_hate);
        assert_eq!(result.explanation, None);
    }

    #[test]
    fn response_requires_result_field() {
        let missing = serde_json::from_value::<AnalyzeResponse>(json!({"detail": "oops"}));
        assert!(missing.is_err());
    }

    #[test]
    fn bulk_response_decodes_items_in_order() {
        let response: BulkAnalyzeResponse = serde_json::from_value(json!({
            "results": [
                {"id": 0, "text": "a", "result": {
                    "is_hate": false, "category": "NON_HATE", "severity": 0.0,
                    "language": "en", "confidence": 0.9, "explanation": null
                }},
                {"id": 1, "text": "b", "result": {
                    "is_hate": true, "category": "ABUSIVE", "severity": 0.8,
                    "language": "hi", "confidence": 0.8, "explanation": "slur"
                }}
            ]
        }))
        .unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[1].id, 1);
        assert!(response.results[1].result.is_hate);
    }
}
