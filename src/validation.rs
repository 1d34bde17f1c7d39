//! Prompt request validation.

use serde::{Deserialize, Serialize};

use crate::llm::ClientError;

/// The one value that travels through the whole pipeline: the user's
/// free-text prompt. Serializes as exactly `{"prompt": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

pub struct PromptValidator;

impl PromptValidator {
    /// Accept a prompt only if it is non-empty after trimming. The text is
    /// carried through unmodified; trimming applies to the check alone.
    pub fn validate(prompt: &str) -> Result<PromptRequest, ClientError> {
        if prompt.trim().is_empty() {
            return Err(ClientError::Validation {
                reason: "prompt must not be empty".to_string(),
            });
        }
        Ok(PromptRequest {
            prompt: prompt.to_string(),
        })
    }

    /// Accept an untyped JSON candidate. The `prompt` field must exist and
    /// be a string; anything else is a validation failure — no network call
    /// has happened yet.
    pub fn from_json(raw: &str) -> Result<PromptRequest, ClientError> {
        let candidate: PromptRequest =
            serde_json::from_str(raw).map_err(|e| ClientError::Validation {
                reason: format!("malformed request: {e}"),
            })?;
        Self::validate(&candidate.prompt)
    }
}
