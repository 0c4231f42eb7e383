use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct PredictRequest {
    pub(super) instances: Vec<Instance>,
    pub(super) parameters: Parameters,
}

#[derive(Debug, Serialize)]
pub(super) struct Instance {
    pub(super) prompt: String,
}

#[derive(Debug, Serialize)]
pub(super) struct Parameters {
    #[serde(rename = "sampleCount")]
    pub(super) sample_count: u32,
    #[serde(rename = "aspectRatio", skip_serializing_if = "String::is_empty")]
    pub(super) aspect_ratio: String,
    #[serde(rename = "negativePrompt", skip_serializing_if = "String::is_empty")]
    pub(super) negative_prompt: String,
    #[serde(rename = "sampleImageSize", skip_serializing_if = "String::is_empty")]
    pub(super) sample_image_size: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct PredictResponse {
    #[serde(default)]
    pub(super) predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Prediction {
    #[serde(rename = "bytesBase64Encoded")]
    pub(super) bytes_base64_encoded: Option<String>,
    #[serde(rename = "mimeType")]
    pub(super) mime_type: Option<String>,
    #[serde(rename = "raiFilteredReason")]
    pub(super) rai_filtered_reason: Option<String>,
}
