use serde::{Deserialize, Serialize};

/// Google Cloud Vertex AI project settings shared by the text and image
/// clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexConfig {
    pub project_id: Option<String>,
    #[serde(default = "default_location")]
    pub location: String,
    /// OAuth access token (e.g. `gcloud auth print-access-token`)
    pub access_token: Option<String>,
    /// Override for the regional endpoint, used by tests and proxies
    pub endpoint: Option<String>,
}

fn default_location() -> String {
    "us-central1".into()
}

impl Default for VertexConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            location: default_location(),
            access_token: None,
            endpoint: None,
        }
    }
}

impl VertexConfig {
    /// Base URL of the regional Vertex AI endpoint, without trailing slash.
    pub fn endpoint_base(&self) -> String {
        match self.endpoint.as_deref().map(str::trim) {
            Some(endpoint) if !endpoint.is_empty() => endpoint.trim_end_matches('/').to_string(),
            _ => format!("https://{}-aiplatform.googleapis.com", self.location),
        }
    }

    /// `…/publishers/google/models/{model}:{method}` for this project.
    pub fn model_url(&self, project_id: &str, model: &str, method: &str) -> String {
        format!(
            "{}/v1/projects/{project_id}/locations/{}/publishers/google/models/{model}:{method}",
            self.endpoint_base(),
            self.location,
        )
    }
}

/// Fixed sampling parameters for the text model. Not request-configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextModelConfig {
    #[serde(default = "default_text_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

fn default_text_model() -> String {
    "gemini-2.5-flash".into()
}

fn default_temperature() -> f64 {
    0.9
}

fn default_top_k() -> u32 {
    40
}

fn default_top_p() -> f64 {
    0.95
}

fn default_max_output_tokens() -> u32 {
    2048
}

impl Default for TextModelConfig {
    fn default() -> Self {
        Self {
            model: default_text_model(),
            temperature: default_temperature(),
            top_k: default_top_k(),
            top_p: default_top_p(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageModelConfig {
    #[serde(default = "default_image_model")]
    pub model: String,
    #[serde(default = "default_negative_prompt")]
    pub negative_prompt: String,
    #[serde(default = "default_sample_image_size")]
    pub sample_image_size: String,
}

fn default_image_model() -> String {
    "imagen-3.0-generate-001".into()
}

fn default_negative_prompt() -> String {
    "blurry, low quality, distorted, watermark, text".into()
}

fn default_sample_image_size() -> String {
    "1024".into()
}

impl Default for ImageModelConfig {
    fn default() -> Self {
        Self {
            model: default_image_model(),
            negative_prompt: default_negative_prompt(),
            sample_image_size: default_sample_image_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_defaults_to_regional_host() {
        let config = VertexConfig {
            location: "asia-northeast1".into(),
            ..VertexConfig::default()
        };
        assert_eq!(
            config.endpoint_base(),
            "https://asia-northeast1-aiplatform.googleapis.com"
        );
    }

    #[test]
    fn endpoint_override_strips_trailing_slash() {
        let config = VertexConfig {
            endpoint: Some("http://127.0.0.1:9999/".into()),
            ..VertexConfig::default()
        };
        assert_eq!(config.endpoint_base(), "http://127.0.0.1:9999");
    }

    #[test]
    fn model_url_targets_google_publisher() {
        let config = VertexConfig::default();
        assert_eq!(
            config.model_url("demo", "gemini-2.5-flash", "generateContent"),
            "https://us-central1-aiplatform.googleapis.com/v1/projects/demo/locations/us-central1/publishers/google/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn text_model_defaults_match_tuned_sampling() {
        let config = TextModelConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!((config.temperature - 0.9).abs() < f64::EPSILON);
        assert_eq!(config.top_k, 40);
        assert!((config.top_p - 0.95).abs() < f64::EPSILON);
        assert_eq!(config.max_output_tokens, 2048);
    }
}
