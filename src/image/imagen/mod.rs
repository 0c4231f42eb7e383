//! Imagen on Vertex AI (`publishers/google/models/*:predict`).
//!
//! One sample per call. The base64 payload of the first prediction is
//! decoded and returned as raw image bytes.

use crate::config::{Config, ImageModelConfig, VertexConfig};
use crate::image::traits::ImageGenerator;
use crate::llm::{api_error, build_provider_client};
use anyhow::Context as _;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

mod types;
use types::{Instance, Parameters, PredictRequest, PredictResponse};

/// Aspect ratios the Imagen models accept.
pub const SUPPORTED_ASPECT_RATIOS: &[&str] = &["1:1", "3:4", "4:3", "9:16", "16:9"];

pub fn is_supported_aspect_ratio(aspect_ratio: &str) -> bool {
    SUPPORTED_ASPECT_RATIOS.contains(&aspect_ratio)
}

pub struct ImagenGenerator {
    url: String,
    access_token: String,
    negative_prompt: String,
    sample_image_size: String,
    client: Client,
}

impl ImagenGenerator {
    pub fn new(
        vertex: &VertexConfig,
        project_id: &str,
        access_token: &str,
        model: &ImageModelConfig,
    ) -> Self {
        Self {
            url: vertex.model_url(project_id, &model.model, "predict"),
            access_token: access_token.to_string(),
            negative_prompt: model.negative_prompt.clone(),
            sample_image_size: model.sample_image_size.clone(),
            client: build_provider_client(),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let project_id = config
            .project_id()
            .context("Vertex AI project id is not configured")?;
        let access_token = config
            .access_token()
            .context("Vertex AI access token is not configured")?;
        Ok(Self::new(
            &config.vertex,
            project_id,
            access_token,
            &config.image_model,
        ))
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }

    fn build_request(&self, prompt: &str, aspect_ratio: &str) -> PredictRequest {
        PredictRequest {
            instances: vec![Instance {
                prompt: prompt.to_string(),
            }],
            parameters: Parameters {
                sample_count: 1,
                aspect_ratio: aspect_ratio.to_string(),
                negative_prompt: self.negative_prompt.clone(),
                sample_image_size: self.sample_image_size.clone(),
            },
        }
    }

    async fn call_api(&self, prompt: &str, aspect_ratio: &str) -> anyhow::Result<PredictResponse> {
        let request = self.build_request(prompt, aspect_ratio);
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await
            .context("failed to reach Vertex AI")?;

        if !response.status().is_success() {
            return Err(api_error("Imagen", response).await);
        }

        response
            .json()
            .await
            .context("failed to decode Imagen response")
    }

    fn decode_first(result: PredictResponse) -> anyhow::Result<Vec<u8>> {
        let Some(prediction) = result.predictions.into_iter().next() else {
            anyhow::bail!("no image generated");
        };

        let Some(encoded) = prediction.bytes_base64_encoded else {
            if let Some(reason) = prediction.rai_filtered_reason {
                anyhow::bail!("image blocked by safety filter: {reason}");
            }
            anyhow::bail!("no image generated");
        };

        if let Some(mime) = prediction.mime_type.as_deref()
            && mime != "image/png"
        {
            tracing::debug!(mime, "Imagen returned a non-PNG image");
        }

        let bytes = STANDARD
            .decode(encoded.trim())
            .context("failed to decode Imagen image payload")?;
        if bytes.is_empty() {
            anyhow::bail!("no image generated");
        }
        Ok(bytes)
    }
}

impl ImageGenerator for ImagenGenerator {
    fn name(&self) -> &str {
        "imagen"
    }

    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        aspect_ratio: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<Vec<u8>>> + Send + 'a>> {
        Box::pin(async move {
            if !is_supported_aspect_ratio(aspect_ratio) {
                anyhow::bail!(
                    "unsupported aspect ratio {aspect_ratio:?} (expected one of {})",
                    SUPPORTED_ASPECT_RATIOS.join(", ")
                );
            }
            let result = self.call_api(prompt, aspect_ratio).await?;
            let bytes = Self::decode_first(result)?;
            tracing::debug!(bytes = bytes.len(), aspect_ratio, "Imagen image received");
            Ok(bytes)
        })
    }
}
