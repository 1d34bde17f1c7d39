//! The regenerate operation: re-submit one rewritten variant as-is.

use crate::llm::ClientError;
use crate::validation::PromptRequest;

/// Build the request body for a variant, rejecting empty text before
/// anything reaches the network. The variant travels verbatim as the
/// prompt — no trimming, no re-encoding.
pub fn prepare_variant(variant: &str) -> Result<PromptRequest, ClientError> {
    if variant.trim().is_empty() {
        return Err(ClientError::Validation {
            reason: "variant text is empty".to_string(),
        });
    }
    Ok(PromptRequest {
        prompt: variant.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FailureKind;

    #[test]
    fn rejects_empty_variant_text_locally() {
        let error = prepare_variant("").unwrap_err();
        assert_eq!(error.kind(), FailureKind::Validation);
    }

    #[test]
    fn rejects_whitespace_variant_text() {
        assert!(prepare_variant("  \n ").is_err());
    }

    #[test]
    fn sends_the_variant_verbatim() {
        let request = prepare_variant("Explain X simply").unwrap();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"prompt":"Explain X simply"}"#
        );
    }
}
