//! The analyze operation: the typed evaluation payload and its second
//! decode. The envelope's text field is itself a JSON document — an
//! external contract this client tolerates, not a design choice.

use serde::{Deserialize, Serialize};

use crate::llm::ClientError;

/// One scored dimension of the evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub score: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementSuggestions {
    pub description: String,
}

/// One rewritten prompt candidate. List order is display/priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovedPrompt {
    pub description: String,
}

/// The structured evaluation for a submitted prompt: six fixed dimensions,
/// an overall rating, free-text suggestions, and rewritten variants. The
/// variant list is usually non-empty but the contract does not guarantee it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub task: DimensionScore,
    pub content: DimensionScore,
    pub exemplar: DimensionScore,
    pub persona: DimensionScore,
    pub format: DimensionScore,
    pub tone: DimensionScore,
    pub prompt_score: f64,
    pub improvement_suggestions: ImprovementSuggestions,
    #[serde(default)]
    pub improved_prompt: Vec<ImprovedPrompt>,
}

impl EvaluationResult {
    /// The six dimensions in fixed display order.
    pub fn dimensions(&self) -> [(&'static str, &DimensionScore); 6] {
        [
            ("task", &self.task),
            ("content", &self.content),
            ("exemplar", &self.exemplar),
            ("persona", &self.persona),
            ("format", &self.format),
            ("tone", &self.tone),
        ]
    }
}

#[derive(Debug, Deserialize)]
struct AnalysisPayload {
    response_evaluation: EvaluationResult,
}

/// Parse the analysis text into the evaluation. A malformed or truncated
/// generation fails here, after transport already succeeded.
pub fn decode_analysis(text: &str) -> Result<EvaluationResult, ClientError> {
    let payload: AnalysisPayload =
        serde_json::from_str(text).map_err(|e| ClientError::Decode {
            reason: format!("evaluation payload is not valid JSON: {e}"),
        })?;
    Ok(payload.response_evaluation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FailureKind;

    fn sample_payload() -> String {
        serde_json::json!({
            "response_evaluation": {
                "task": { "score": 8, "description": "Clear action verb." },
                "content": { "score": 6, "description": "Subject is present but thin." },
                "exemplar": { "score": 3, "description": "No example given." },
                "persona": { "score": 5, "description": "No persona specified." },
                "format": { "score": 7, "description": "Output format implied." },
                "tone": { "score": 6, "description": "Neutral tone." },
                "prompt_score": 6,
                "improvement_suggestions": {
                    "description": "Add an example and name the audience."
                },
                "improved_prompt": [
                    { "description": "Explain X simply" },
                    { "description": "Explain X to a ten-year-old, with one analogy" }
                ]
            }
        })
        .to_string()
    }

    #[test]
    fn decodes_a_well_formed_payload() {
        let result = decode_analysis(&sample_payload()).unwrap();
        assert_eq!(result.task.score, 8.0);
        assert_eq!(result.prompt_score, 6.0);
        assert_eq!(result.improved_prompt.len(), 2);
        assert_eq!(result.improved_prompt[0].description, "Explain X simply");
    }

    #[test]
    fn dimensions_come_back_in_fixed_order() {
        let result = decode_analysis(&sample_payload()).unwrap();
        let names: Vec<&str> = result.dimensions().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            ["task", "content", "exemplar", "persona", "format", "tone"]
        );
    }

    #[test]
    fn truncated_generation_is_a_decode_failure() {
        let text = &sample_payload()[..40];
        let error = decode_analysis(text).unwrap_err();
        assert_eq!(error.kind(), FailureKind::Decode);
    }

    #[test]
    fn missing_dimension_is_a_decode_failure() {
        let text = r#"{"response_evaluation": {"task": {"score": 8, "description": "ok"}}}"#;
        assert!(decode_analysis(text).is_err());
    }

    #[test]
    fn missing_variant_list_decodes_as_empty() {
        let mut value: serde_json::Value = serde_json::from_str(&sample_payload()).unwrap();
        value["response_evaluation"]
            .as_object_mut()
            .unwrap()
            .remove("improved_prompt");
        let result = decode_analysis(&value.to_string()).unwrap();
        assert!(result.improved_prompt.is_empty());
    }

    #[test]
    fn request_body_is_exactly_the_prompt_object() {
        let request = crate::validation::PromptRequest {
            prompt: "Explain X simply".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "prompt": "Explain X simply" })
        );
    }
}
