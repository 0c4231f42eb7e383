use std::future::Future;
use std::pin::Pin;

/// Image-Generation Collaborator: turns an English prompt into raster
/// image bytes (PNG).
pub trait ImageGenerator: Send + Sync {
    /// Backend identifier (e.g. "imagen", "stub").
    fn name(&self) -> &str;

    /// Generate one image. `aspect_ratio` is a `W:H` string such as `"1:1"`.
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        aspect_ratio: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<Vec<u8>>> + Send + 'a>>;
}
