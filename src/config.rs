//! Endpoint configuration from the environment.

use anyhow::{Context, Result};
use url::Url;

/// Where the two prompt endpoints live and how to authenticate against them.
#[derive(Debug, Clone)]
pub struct Config {
    pub analyze_url: Url,
    pub generate_url: Url,
    pub api_key: String,
}

impl Config {
    /// Load the configuration from the environment. A `.env` file is
    /// honored in development.
    ///
    /// Required variables: `ANALYZE_URL`, `GENERATE_URL`, `API_KEY`.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let required = ["ANALYZE_URL", "GENERATE_URL", "API_KEY"];
        let missing: Vec<&str> = required
            .into_iter()
            .filter(|var| std::env::var(var).is_err())
            .collect();
        if !missing.is_empty() {
            anyhow::bail!(
                "missing required environment variables: {}",
                missing.join(", ")
            );
        }

        Self::from_parts(
            &std::env::var("ANALYZE_URL")?,
            &std::env::var("GENERATE_URL")?,
            std::env::var("API_KEY")?,
        )
    }

    fn from_parts(analyze: &str, generate: &str, api_key: String) -> Result<Self> {
        Ok(Self {
            analyze_url: Url::parse(analyze).context("ANALYZE_URL is not a valid URL")?,
            generate_url: Url::parse(generate).context("GENERATE_URL is not a valid URL")?,
            api_key,
        })
    }
}
