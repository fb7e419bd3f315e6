//! Fact-check prediction payload returned by `POST /predict`.

use serde::{Deserialize, Serialize};

/// Three-way factual-support classification from the model.
///
/// Any wire value outside the three known labels deserializes to
/// [`Category::Unknown`] rather than failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// The claim is supported.
    Entailment,
    /// The claim is contradicted.
    Contradiction,
    /// Neither supported nor contradicted.
    Neutral,
    /// Unrecognized label from the backend.
    #[serde(other)]
    Unknown,
}

impl Category {
    /// Display name for the category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Entailment => "Entailment",
            Category::Contradiction => "Contradiction",
            Category::Neutral => "Neutral",
            Category::Unknown => "Unknown",
        }
    }
}

/// Response body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResponse {
    /// Predicted category for the submitted text.
    pub prediction: Category,
    /// Model confidence in [0, 1].
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prediction_response() {
        let json = r#"{"prediction": "Entailment", "confidence": 0.91}"#;
        let response: PredictionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.prediction, Category::Entailment);
        assert!((response.confidence - 0.91).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_all_known_categories() {
        for (wire, expected) in [
            ("Entailment", Category::Entailment),
            ("Contradiction", Category::Contradiction),
            ("Neutral", Category::Neutral),
        ] {
            let json = format!(r#"{{"prediction": "{}", "confidence": 0.5}}"#, wire);
            let response: PredictionResponse = serde_json::from_str(&json).unwrap();
            assert_eq!(response.prediction, expected);
        }
    }

    #[test]
    fn test_unknown_category_does_not_fail() {
        let json = r#"{"prediction": "Sarcasm", "confidence": 0.2}"#;
        let response: PredictionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.prediction, Category::Unknown);
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let json = r#"{"prediction": "Neutral"}"#;
        let result: Result<PredictionResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
