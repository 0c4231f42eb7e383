//! Gemini on Vertex AI (`publishers/google/models/*:generateContent`).
//!
//! Authenticates with an OAuth access token supplied through config at
//! startup. Sampling parameters come from `[text_model]` and apply to every
//! call.

use crate::config::{Config, TextModelConfig, VertexConfig};
use crate::llm::{api_error, build_provider_client, traits::TextGenerator};
use anyhow::Context as _;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

mod types;
use types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};

pub struct GeminiTextGenerator {
    url: String,
    access_token: String,
    generation_config: GenerationConfig,
    client: Client,
}

impl GeminiTextGenerator {
    pub fn new(
        vertex: &VertexConfig,
        project_id: &str,
        access_token: &str,
        model: &TextModelConfig,
    ) -> Self {
        Self {
            url: vertex.model_url(project_id, &model.model, "generateContent"),
            access_token: access_token.to_string(),
            generation_config: GenerationConfig {
                temperature: model.temperature,
                top_k: model.top_k,
                top_p: model.top_p,
                max_output_tokens: model.max_output_tokens,
            },
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
            &config.text_model,
        ))
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }

    fn build_request(&self, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: self.generation_config.clone(),
        }
    }

    async fn call_api(&self, prompt: &str) -> anyhow::Result<GenerateContentResponse> {
        let request = self.build_request(prompt);
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await
            .context("failed to reach Vertex AI")?;

        if !response.status().is_success() {
            return Err(api_error("Gemini", response).await);
        }

        response
            .json()
            .await
            .context("failed to decode Gemini response")
    }

    /// Joins every text part of every candidate, trimmed.
    fn extract_text(result: &GenerateContentResponse) -> String {
        result
            .candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }

    fn log_finish_reason(result: &GenerateContentResponse, prompt_chars: usize) {
        let Some(reason) = result
            .candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.as_deref())
        else {
            return;
        };

        match reason {
            "STOP" => {}
            "SAFETY" => {
                tracing::warn!(prompt_chars, "Gemini output blocked by safety filter");
            }
            other => {
                tracing::warn!(
                    finish_reason = other,
                    prompt_chars,
                    "Gemini generation finished early"
                );
            }
        }
    }
}

impl TextGenerator for GeminiTextGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let prompt_chars = prompt.chars().count();
            let result = self.call_api(prompt).await?;
            Self::log_finish_reason(&result, prompt_chars);

            if let Some(usage) = &result.usage_metadata {
                tracing::debug!(
                    model = result.model_version.as_deref().unwrap_or("unknown"),
                    input_tokens = usage.prompt_token_count,
                    output_tokens = usage.candidates_token_count,
                    "Gemini usage"
                );
            }

            let text = Self::extract_text(&result);
            if text.is_empty() {
                tracing::warn!(
                    candidates = result.candidates.len(),
                    prompt_chars,
                    "empty response from Gemini"
                );
                anyhow::bail!("no content generated");
            }
            Ok(text)
        })
    }
}
