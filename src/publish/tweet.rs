//! Publishing adapter: composes the final post text, enforces the length
//! ceiling and sequences media upload before posting.

use crate::error::{EnjoError, Result};
use crate::llm::sanitize_api_error;
use crate::publish::traits::{PublishResult, Publisher};
use std::sync::Arc;

/// Post length ceiling, counted in Unicode code points.
pub const MAX_TWEET_LENGTH: usize = 280;

const HASHTAG: &str = " #炎上シミュレーター";
const DISCLAIMER: &str = "\n\n※炎上シミュレーターで生成";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweetOptions {
    pub add_hashtag: bool,
    pub add_disclaimer: bool,
}

impl Default for TweetOptions {
    fn default() -> Self {
        Self {
            add_hashtag: true,
            add_disclaimer: true,
        }
    }
}

pub fn build_tweet_text(text: &str, add_hashtag: bool, add_disclaimer: bool) -> String {
    let mut composed = String::with_capacity(text.len() + HASHTAG.len() + DISCLAIMER.len());
    composed.push_str(text);
    if add_hashtag {
        composed.push_str(HASHTAG);
    }
    if add_disclaimer {
        composed.push_str(DISCLAIMER);
    }
    composed
}

/// Validates `text` on its own and after suffixes, returning the composed
/// post.
pub fn compose_tweet(text: &str, options: TweetOptions) -> Result<String> {
    if text.is_empty() {
        return Err(EnjoError::Validation("tweet text cannot be empty".into()));
    }
    if text.chars().count() > MAX_TWEET_LENGTH {
        return Err(EnjoError::Validation(format!(
            "tweet text exceeds {MAX_TWEET_LENGTH} characters"
        )));
    }

    let composed = build_tweet_text(text, options.add_hashtag, options.add_disclaimer);
    if composed.chars().count() > MAX_TWEET_LENGTH {
        return Err(EnjoError::Validation(format!(
            "tweet text exceeds {MAX_TWEET_LENGTH} characters after adding options"
        )));
    }
    Ok(composed)
}

fn scrubbed(error: anyhow::Error) -> anyhow::Error {
    anyhow::anyhow!(sanitize_api_error(&format!("{error:#}")))
}

pub struct TweetPoster {
    publisher: Arc<dyn Publisher>,
}

impl TweetPoster {
    pub fn new(publisher: Arc<dyn Publisher>) -> Self {
        Self { publisher }
    }

    pub fn publisher_name(&self) -> &str {
        self.publisher.name()
    }

    pub async fn post_tweet(&self, text: &str, options: TweetOptions) -> Result<PublishResult> {
        let composed = compose_tweet(text, options)?;
        let result = self
            .publisher
            .post(&composed)
            .await
            .map_err(|error| EnjoError::PublishFailed(scrubbed(error)))?;
        tracing::info!(tweet_id = %result.id, chars = composed.chars().count(), "tweet posted");
        Ok(result)
    }

    /// Uploads `image` and then posts referencing it. A failed upload never
    /// reaches the post call; a failed post leaves the uploaded media behind.
    pub async fn post_tweet_with_image(
        &self,
        text: &str,
        image: &[u8],
        options: TweetOptions,
    ) -> Result<PublishResult> {
        if text.is_empty() {
            return Err(EnjoError::Validation("tweet text cannot be empty".into()));
        }
        if image.is_empty() {
            return Err(EnjoError::invalid("image data cannot be empty"));
        }
        let composed = compose_tweet(text, options)?;

        let media_id = self
            .publisher
            .upload_media(image)
            .await
            .map_err(|error| EnjoError::MediaUploadFailed(scrubbed(error)))?;

        let result = self
            .publisher
            .post_with_media(&composed, &media_id)
            .await
            .map_err(|error| {
                tracing::warn!(%media_id, "post failed after media upload");
                EnjoError::PublishFailed(scrubbed(error))
            })?;
        tracing::info!(tweet_id = %result.id, %media_id, "tweet with image posted");
        Ok(result)
    }
}
