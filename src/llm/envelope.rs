//! Typed decoding of the provider response envelope.
//!
//! Both endpoints wrap their output the same way: the payload lives at
//! `candidates[0].content.parts[0].text`. Anything missing along that path
//! is a decode failure surfaced here, at the client boundary — unknown
//! shapes are never passed through to the view.

use serde::Deserialize;

use crate::llm::ClientError;

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: String,
}

/// Extract the first candidate's text from a raw envelope body.
pub fn first_candidate_text(raw: &str) -> Result<String, ClientError> {
    let envelope: Envelope = serde_json::from_str(raw).map_err(|e| ClientError::Decode {
        reason: format!("envelope is not valid JSON: {e}"),
    })?;

    envelope
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or_else(|| ClientError::Decode {
            reason: "envelope contains no candidate text".to_string(),
        })
}
