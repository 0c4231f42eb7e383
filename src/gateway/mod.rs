//! Axum HTTP gateway exposing the simulator as JSON routes.
//!
//! Body size is capped at 8 MiB because tweet requests carry the generated
//! image as a `data:` URL. Requests exceeding the configured timeout get a
//! 408.

mod handlers;
mod server;

pub use server::{build_app, run_gateway, run_gateway_with_listener};

use crate::app::backends::Backends;
use crate::publish::TweetPoster;
use crate::simulator::Simulator;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Maximum request body size (8 MiB)
pub const MAX_BODY_SIZE: usize = 8 * 1024 * 1024;
/// Reported by `GET /health`.
pub const HEALTH_STATUS: &str = "OK";

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub simulator: Arc<Simulator>,
    pub poster: Option<Arc<TweetPoster>>,
}

impl From<Backends> for AppState {
    fn from(backends: Backends) -> Self {
        Self {
            simulator: backends.simulator,
            poster: backends.poster,
        }
    }
}

/// Body of `POST /api/replies`
#[derive(Debug, Deserialize)]
pub struct TextBody {
    pub text: String,
}

/// Body of `POST /api/tweet`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetBody {
    pub text: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub add_hashtag: bool,
    #[serde(default = "default_true")]
    pub add_disclaimer: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tweet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tweet_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl TweetResponse {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_message: Some(message.into()),
            ..Self::default()
        }
    }
}
