use crate::publish::traits::{PublishResult, Publisher};
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-process publisher that records what would have been posted.
#[derive(Default)]
pub struct StubPublisher {
    fail_upload: bool,
    fail_post: bool,
    uploads: AtomicUsize,
    posts: AtomicUsize,
    posted: Mutex<Vec<(String, Option<String>)>>,
}

impl StubPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_upload() -> Self {
        Self {
            fail_upload: true,
            ..Self::default()
        }
    }

    pub fn failing_post() -> Self {
        Self {
            fail_post: true,
            ..Self::default()
        }
    }

    pub fn upload_calls(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }

    /// Both plain and media posts.
    pub fn post_calls(&self) -> usize {
        self.posts.load(Ordering::SeqCst)
    }

    /// `(text, media_id)` for every post attempt.
    pub fn posted(&self) -> Vec<(String, Option<String>)> {
        self.posted
            .lock()
            .map(|posted| posted.clone())
            .unwrap_or_default()
    }

    fn record_post(&self, text: &str, media_id: Option<&str>) -> anyhow::Result<PublishResult> {
        let n = self.posts.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut posted) = self.posted.lock() {
            posted.push((text.to_string(), media_id.map(str::to_string)));
        }
        if self.fail_post {
            anyhow::bail!("stub post rejected");
        }
        let id = format!("stub-tweet-{n}");
        Ok(PublishResult {
            url: format!("https://x.com/i/web/status/{id}"),
            id,
        })
    }
}

impl Publisher for StubPublisher {
    fn name(&self) -> &str {
        "stub"
    }

    fn post<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<PublishResult>> + Send + 'a>> {
        Box::pin(async move { self.record_post(text, None) })
    }

    fn upload_media<'a>(
        &'a self,
        bytes: &'a [u8],
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let n = self.uploads.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_upload {
                anyhow::bail!("stub upload rejected");
            }
            anyhow::ensure!(!bytes.is_empty(), "image data cannot be empty");
            Ok(format!("stub-media-{n}"))
        })
    }

    fn post_with_media<'a>(
        &'a self,
        text: &'a str,
        media_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<PublishResult>> + Send + 'a>> {
        Box::pin(async move { self.record_post(text, Some(media_id)) })
    }
}
