use super::super::{GatewayConfig, ImageModelConfig, TextModelConfig, TwitterConfig, VertexConfig};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which collaborator implementations are wired in at process start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Backend {
    /// Vertex AI Gemini + Imagen, X/Twitter when configured
    #[default]
    Vertex,
    /// Deterministic in-process stubs, no credentials needed
    Stub,
}

impl std::str::FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertex" => Ok(Self::Vertex),
            "stub" => Ok(Self::Stub),
            other => Err(ConfigError::Validation(format!(
                "unknown backend '{other}' (expected 'vertex' or 'stub')"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed at load time, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub backend: Backend,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub vertex: VertexConfig,

    #[serde(default)]
    pub text_model: TextModelConfig,

    #[serde(default)]
    pub image_model: ImageModelConfig,

    #[serde(default)]
    pub twitter: Option<TwitterConfig>,
}

impl Config {
    /// Check the settings the selected backend depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let text = &self.text_model;
        if !(0.0..=2.0).contains(&text.temperature) {
            return Err(ConfigError::Validation(format!(
                "text_model.temperature must be within 0.0..=2.0, got {}",
                text.temperature
            )));
        }
        if !(text.top_p > 0.0 && text.top_p <= 1.0) {
            return Err(ConfigError::Validation(format!(
                "text_model.top_p must be within (0.0, 1.0], got {}",
                text.top_p
            )));
        }
        if text.top_k == 0 {
            return Err(ConfigError::Validation(
                "text_model.top_k must be at least 1".into(),
            ));
        }
        if text.max_output_tokens == 0 {
            return Err(ConfigError::Validation(
                "text_model.max_output_tokens must be at least 1".into(),
            ));
        }
        if self.gateway.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "gateway.request_timeout_secs must be at least 1".into(),
            ));
        }

        if self.backend == Backend::Vertex {
            if self.project_id().is_none() {
                return Err(ConfigError::Validation(
                    "vertex.project_id is required (or set GCP_PROJECT_ID)".into(),
                ));
            }
            if self.access_token().is_none() {
                return Err(ConfigError::Validation(
                    "vertex.access_token is required (or set GCP_ACCESS_TOKEN)".into(),
                ));
            }
        }

        if let Some(twitter) = &self.twitter
            && twitter.access_token.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "twitter.access_token must not be empty".into(),
            ));
        }

        Ok(())
    }

    pub fn project_id(&self) -> Option<&str> {
        self.vertex
            .project_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    pub fn access_token(&self) -> Option<&str> {
        self.vertex
            .access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
