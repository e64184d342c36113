use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Gateway configuration: where the catalog service lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base endpoint without a trailing slash
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fakestoreapi.com".to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GatewayConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(Self::new(config.base_url))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl(e.to_string()))?;
        Ok(())
    }
}
