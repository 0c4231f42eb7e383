use crate::image::traits::ImageGenerator;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 1x1 transparent PNG.
pub const STUB_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

/// In-process image generator returning a fixed PNG.
pub struct StubImageGenerator {
    failure: Option<String>,
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, String)>>,
}

impl StubImageGenerator {
    pub fn new() -> Self {
        Self {
            failure: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(prompt, aspect_ratio)` pairs received so far.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Default for StubImageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageGenerator for StubImageGenerator {
    fn name(&self) -> &str {
        "stub"
    }

    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        aspect_ratio: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<Vec<u8>>> + Send + 'a>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut requests) = self.requests.lock() {
                requests.push((prompt.to_string(), aspect_ratio.to_string()));
            }
            if let Some(message) = &self.failure {
                anyhow::bail!("{message}");
            }
            Ok(STUB_PNG.to_vec())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::is_png;

    #[tokio::test]
    async fn returns_png_and_records_request() {
        let stub = StubImageGenerator::new();
        let bytes = stub.generate("burning phone", "16:9").await.unwrap();
        assert!(is_png(&bytes));
        assert_eq!(stub.calls(), 1);
        assert_eq!(
            stub.requests(),
            vec![("burning phone".to_string(), "16:9".to_string())]
        );
    }

    #[tokio::test]
    async fn failing_stub_errors() {
        let stub = StubImageGenerator::failing("quota exceeded");
        let err = stub.generate("x", "1:1").await.unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
        assert_eq!(stub.calls(), 1);
    }
}
