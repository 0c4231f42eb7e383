//! Request-scoped value objects. Nothing here outlives a single call.

use serde::{Deserialize, Serialize};

pub const MIN_SEVERITY: i32 = 1;
pub const MAX_SEVERITY: i32 = 5;
pub const DEFAULT_ASPECT_RATIO: &str = "1:1";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub original_text: String,
    #[serde(alias = "level")]
    pub severity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InflammatoryResult {
    pub rewritten_text: String,
    pub explanation: String,
}

/// Fixed reply archetypes, in the order a reply set is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ReplyType {
    LogicalCriticism,
    Nitpicking,
    OffTarget,
    ExcessiveDefense,
}

impl ReplyType {
    pub const ALL: [Self; 4] = [
        Self::LogicalCriticism,
        Self::Nitpicking,
        Self::OffTarget,
        Self::ExcessiveDefense,
    ];

    /// Label the reply prompt table is keyed by.
    pub fn label(self) -> &'static str {
        match self {
            Self::LogicalCriticism => "正論で批判するタイプ",
            Self::Nitpicking => "揚げ足を取るタイプ",
            Self::OffTarget => "的外れな批判",
            Self::ExcessiveDefense => "過剰に擁護するタイプ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub id: String,
    #[serde(rename = "type")]
    pub reply_type: ReplyType,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageStyle {
    Realistic,
    Illustration,
    Meme,
    Dramatic,
}

impl ImageStyle {
    /// English suffix appended to the generated image prompt.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Realistic => ", photorealistic style",
            Self::Illustration => ", illustration style",
            Self::Meme => ", internet meme style",
            Self::Dramatic => ", dramatic cinematic lighting",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    pub text: String,
    #[serde(default)]
    pub style: Option<ImageStyle>,
    #[serde(default)]
    pub aspect_ratio: Option<String>,
}

impl ImageRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn aspect_ratio(&self) -> &str {
        self.aspect_ratio
            .as_deref()
            .map(str::trim)
            .filter(|ratio| !ratio.is_empty())
            .unwrap_or(DEFAULT_ASPECT_RATIO)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    pub prompt_used: String,
    pub image_url: String,
    pub generated_at: String,
}
