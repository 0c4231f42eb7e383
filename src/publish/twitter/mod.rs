//! X (Twitter) API v2 client using an OAuth 2.0 user-context token.

use crate::config::TwitterConfig;
use crate::llm::{api_error, build_provider_client};
use crate::media::detect_image_mime;
use crate::publish::traits::{PublishResult, Publisher};
use anyhow::Context as _;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

mod types;
use types::{CreateTweetRequest, CreateTweetResponse, MediaUploadResponse, TweetMedia};

const STATUS_URL_BASE: &str = "https://x.com/i/web/status";

pub fn tweet_url(id: &str) -> String {
    format!("{STATUS_URL_BASE}/{id}")
}

pub struct TwitterPublisher {
    api_base: String,
    upload_base: String,
    access_token: String,
    client: Client,
}

impl TwitterPublisher {
    pub fn new(config: &TwitterConfig) -> Self {
        Self {
            api_base: config.api_base.trim_end_matches('/').to_string(),
            upload_base: config.upload_base.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            client: build_provider_client(),
        }
    }

    async fn create_tweet(&self, request: &CreateTweetRequest<'_>) -> anyhow::Result<PublishResult> {
        let url = format!("{}/2/tweets", self.api_base);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(request)
            .send()
            .await
            .context("failed to reach X API")?;

        if !response.status().is_success() {
            return Err(api_error("X", response).await);
        }

        let body: CreateTweetResponse = response
            .json()
            .await
            .context("failed to decode X tweet response")?;
        let id = body
            .data
            .map(|tweet| tweet.id)
            .filter(|id| !id.is_empty())
            .context("X API returned no tweet id")?;
        Ok(PublishResult {
            url: tweet_url(&id),
            id,
        })
    }
}

impl Publisher for TwitterPublisher {
    fn name(&self) -> &str {
        "twitter"
    }

    fn post<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<PublishResult>> + Send + 'a>> {
        Box::pin(async move {
            self.create_tweet(&CreateTweetRequest { text, media: None })
                .await
        })
    }

    fn upload_media<'a>(
        &'a self,
        bytes: &'a [u8],
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let mime = detect_image_mime(bytes).unwrap_or("image/png");
            let part = reqwest::multipart::Part::bytes(bytes.to_vec())
                .file_name("image")
                .mime_str(mime)
                .context("set X media MIME type")?;
            let form = reqwest::multipart::Form::new()
                .part("media", part)
                .text("media_category", "tweet_image");

            let url = format!("{}/2/media/upload", self.upload_base);
            let response = self
                .client
                .post(&url)
                .bearer_auth(&self.access_token)
                .multipart(form)
                .send()
                .await
                .context("failed to reach X media upload")?;

            if !response.status().is_success() {
                return Err(api_error("X media", response).await);
            }

            let body: MediaUploadResponse = response
                .json()
                .await
                .context("failed to decode X media response")?;
            let media = body.data.context("X API returned no media id")?;
            tracing::debug!(
                media_id = %media.id,
                media_key = media.media_key.as_deref().unwrap_or("-"),
                bytes = bytes.len(),
                mime,
                "media uploaded"
            );
            Ok(media.id)
        })
    }

    fn post_with_media<'a>(
        &'a self,
        text: &'a str,
        media_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<PublishResult>> + Send + 'a>> {
        Box::pin(async move {
            anyhow::ensure!(!media_id.is_empty(), "media id cannot be empty");
            self.create_tweet(&CreateTweetRequest {
                text,
                media: Some(TweetMedia {
                    media_ids: vec![media_id],
                }),
            })
            .await
        })
    }
}
