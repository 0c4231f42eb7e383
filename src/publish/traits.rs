use serde::Serialize;
use std::future::Future;
use std::pin::Pin;

/// A post that made it onto the public feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishResult {
    pub id: String,
    pub url: String,
}

/// Publishing Collaborator: posts text, optionally with previously uploaded
/// media, to a public feed under a fixed user identity.
///
/// Attaching an image is a two-step sequence: `upload_media` yields a media
/// id that `post_with_media` then references.
pub trait Publisher: Send + Sync {
    fn name(&self) -> &str;

    fn post<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<PublishResult>> + Send + 'a>>;

    fn upload_media<'a>(
        &'a self,
        bytes: &'a [u8],
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>>;

    fn post_with_media<'a>(
        &'a self,
        text: &'a str,
        media_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<PublishResult>> + Send + 'a>>;
}
