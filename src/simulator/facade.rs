//! Orchestration façade: validates caller input, renders prompts and
//! sequences the text and image collaborators into one result record.
//!
//! Every operation either returns a complete result or fails as a whole.
//! Input is checked before any collaborator is touched.

use crate::error::{EnjoError, GenerationStage, Result};
use crate::image::ImageGenerator;
use crate::image::imagen::{SUPPORTED_ASPECT_RATIOS, is_supported_aspect_ratio};
use crate::llm::{TextGenerator, sanitize_api_error};
use crate::media::png_data_url;
use crate::prompt::PromptBuilder;
use crate::simulator::types::{
    ImageRequest, ImageResult, InflammatoryResult, MAX_SEVERITY, MIN_SEVERITY, Reply, ReplyType,
};
use chrono::{SecondsFormat, Utc};
use futures_util::future::try_join_all;
use std::sync::Arc;

fn scrubbed(error: anyhow::Error) -> anyhow::Error {
    anyhow::anyhow!(sanitize_api_error(&format!("{error:#}")))
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EnjoError::invalid(format!("{field} cannot be empty")));
    }
    Ok(())
}

pub struct Simulator {
    text: Arc<dyn TextGenerator>,
    image: Arc<dyn ImageGenerator>,
    prompts: PromptBuilder,
}

impl Simulator {
    pub fn new(text: Arc<dyn TextGenerator>, image: Arc<dyn ImageGenerator>) -> Result<Self> {
        Ok(Self {
            text,
            image,
            prompts: PromptBuilder::new()?,
        })
    }

    pub fn text_backend(&self) -> &str {
        self.text.name()
    }

    pub fn image_backend(&self) -> &str {
        self.image.name()
    }

    async fn generate_text(&self, stage: GenerationStage, prompt: &str) -> Result<String> {
        match self.text.generate(prompt).await {
            Ok(text) if !text.trim().is_empty() => Ok(text),
            Ok(_) => Err(EnjoError::generation(
                stage,
                anyhow::anyhow!("no content generated"),
            )),
            Err(error) => {
                let error = scrubbed(error);
                tracing::warn!(%stage, error = %error, "text generation failed");
                Err(EnjoError::generation(stage, error))
            }
        }
    }

    /// Rewrites `original` at `severity` (1..=5) and explains why the
    /// rewrite provokes. Two sequential calls; an explanation failure fails
    /// the whole operation.
    pub async fn rewrite_and_explain(
        &self,
        original: &str,
        severity: i32,
    ) -> Result<InflammatoryResult> {
        require_text("originalText", original)?;
        if !(MIN_SEVERITY..=MAX_SEVERITY).contains(&severity) {
            return Err(EnjoError::invalid(format!(
                "severity must be between {MIN_SEVERITY} and {MAX_SEVERITY}, got {severity}"
            )));
        }
        tracing::info!(severity, chars = original.chars().count(), "rewrite requested");

        let prompt = self
            .prompts
            .rewrite(original, severity)
            .map_err(|error| EnjoError::generation(GenerationStage::Rewrite, error))?;
        let rewritten_text = self
            .generate_text(GenerationStage::Rewrite, &prompt)
            .await?;

        let prompt = self
            .prompts
            .explanation(original, &rewritten_text)
            .map_err(|error| EnjoError::generation(GenerationStage::Explanation, error))?;
        let explanation = self
            .generate_text(GenerationStage::Explanation, &prompt)
            .await?;

        tracing::info!(severity, calls = 2, "rewrite completed");
        Ok(InflammatoryResult {
            rewritten_text,
            explanation,
        })
    }

    /// One reply per archetype, in `ReplyType::ALL` order. The four calls
    /// run concurrently; any failure discards the others.
    pub async fn generate_replies(&self, text: &str) -> Result<Vec<Reply>> {
        require_text("text", text)?;
        tracing::info!(chars = text.chars().count(), "reply set requested");

        let prompts = ReplyType::ALL
            .iter()
            .map(|reply_type| {
                self.prompts
                    .reply(text, reply_type.label())
                    .map(|prompt| (*reply_type, prompt))
                    .map_err(|error| EnjoError::generation(GenerationStage::Reply, error))
            })
            .collect::<Result<Vec<_>>>()?;

        let replies = try_join_all(prompts.iter().map(|(reply_type, prompt)| async move {
            let content = self.generate_text(GenerationStage::Reply, prompt).await?;
            Ok::<_, EnjoError>(Reply {
                id: uuid::Uuid::new_v4().to_string(),
                reply_type: *reply_type,
                content,
            })
        }))
        .await?;

        tracing::info!(calls = replies.len(), "reply set completed");
        Ok(replies)
    }

    /// Asks the text model for an English image prompt, renders it and
    /// returns the PNG as a `data:` URL.
    pub async fn generate_image(&self, request: &ImageRequest) -> Result<ImageResult> {
        require_text("text", &request.text)?;
        let aspect_ratio = request.aspect_ratio();
        if !is_supported_aspect_ratio(aspect_ratio) {
            return Err(EnjoError::invalid(format!(
                "unsupported aspect ratio {aspect_ratio:?} (expected one of {})",
                SUPPORTED_ASPECT_RATIOS.join(", ")
            )));
        }
        tracing::info!(
            style = request.style.map(|style| style.to_string()).as_deref().unwrap_or("none"),
            aspect_ratio,
            "image requested"
        );

        let meta_prompt = self
            .prompts
            .image_prompt(&request.text)
            .map_err(EnjoError::PromptGenerationFailed)?;
        let generated = match self.text.generate(&meta_prompt).await {
            Ok(prompt) if !prompt.trim().is_empty() => prompt.trim().to_string(),
            Ok(_) => {
                return Err(EnjoError::PromptGenerationFailed(anyhow::anyhow!(
                    "no content generated"
                )));
            }
            Err(error) => {
                let error = scrubbed(error);
                tracing::warn!(error = %error, "image prompt generation failed");
                return Err(EnjoError::PromptGenerationFailed(error));
            }
        };

        let prompt_used = match request.style {
            Some(style) => format!("{generated}{}", style.suffix()),
            None => generated,
        };

        let bytes = self
            .image
            .generate(&prompt_used, aspect_ratio)
            .await
            .map_err(|error| {
                let error = scrubbed(error);
                tracing::warn!(error = %error, "image generation failed");
                EnjoError::ImageGenerationFailed(error)
            })?;
        if bytes.is_empty() {
            return Err(EnjoError::ImageGenerationFailed(anyhow::anyhow!(
                "no image generated"
            )));
        }

        tracing::info!(bytes = bytes.len(), calls = 2, "image completed");
        Ok(ImageResult {
            image_url: png_data_url(&bytes),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            prompt_used,
        })
    }
}
