//! Clients for the two generative-language endpoints.
//!
//! The system consists of two operations behind one seam:
//! - `evaluate`: posts the raw prompt to the analysis endpoint and decodes
//!   the structured evaluation embedded in its envelope
//! - `regenerate`: posts one rewritten variant to the generation endpoint
//!   and returns the plain-text completion
//!
//! ```text
//! View → evaluate  → envelope text → JSON payload → EvaluationResult
//! View → regenerate → envelope text (verbatim completion)
//! ```
//!
//! Both calls are fired exactly once per user action — never retried, never
//! cached, never deduplicated. Every failure is reduced to a `ClientError`
//! whose kind the view records; no partial result crosses this boundary.

pub mod envelope;
pub mod evaluate;
pub mod generate;

pub use evaluate::{DimensionScore, EvaluationResult, ImprovedPrompt, ImprovementSuggestions};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use crate::config::Config;
use crate::validation::PromptRequest;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid prompt: {reason}")]
    Validation { reason: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("response could not be decoded: {reason}")]
    Decode { reason: String },
}

/// The error taxonomy collapsed for the presentation layer: which stage
/// failed, stripped of transport-level detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Validation,
    Transport,
    Decode,
}

impl ClientError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ClientError::Validation { .. } => FailureKind::Validation,
            ClientError::Network(_) | ClientError::Status { .. } => FailureKind::Transport,
            ClientError::Decode { .. } => FailureKind::Decode,
        }
    }
}

/// Seam between the view layer and the network. Tests drive the view
/// against a stub implementation; production uses [`HttpPromptService`].
#[async_trait]
pub trait PromptService: Send + Sync {
    async fn evaluate(&self, request: &PromptRequest) -> Result<EvaluationResult, ClientError>;

    async fn regenerate(&self, variant: &str) -> Result<String, ClientError>;
}

/// Production implementation talking to the configured endpoints.
pub struct HttpPromptService {
    http: reqwest::Client,
    config: Config,
}

impl HttpPromptService {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// POST the request body to one endpoint and pull the candidate text
    /// out of the provider envelope. Caching is disabled on every call;
    /// there is deliberately no timeout and no retry — each user action
    /// maps to exactly one provider call.
    async fn post_prompt(&self, url: &Url, request: &PromptRequest) -> Result<String, ClientError> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, endpoint = %url, "sending prompt");

        let response = self
            .http
            .post(url.clone())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%request_id, status = status.as_u16(), "endpoint rejected request");
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        let raw = response.text().await?;
        envelope::first_candidate_text(&raw)
    }
}

#[async_trait]
impl PromptService for HttpPromptService {
    async fn evaluate(&self, request: &PromptRequest) -> Result<EvaluationResult, ClientError> {
        let text = self.post_prompt(&self.config.analyze_url, request).await?;
        evaluate::decode_analysis(&text)
    }

    async fn regenerate(&self, variant: &str) -> Result<String, ClientError> {
        let request = generate::prepare_variant(variant)?;
        // The completion comes back verbatim — no second JSON parse.
        self.post_prompt(&self.config.generate_url, &request).await
    }
}
