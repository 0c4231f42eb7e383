use std::future::Future;
use std::pin::Pin;

/// Text-Generation Collaborator: turns a fully rendered prompt into free
/// text.
///
/// Sampling parameters belong to the implementation and are fixed at
/// construction; callers only ever supply the prompt. An `Ok` value is
/// never empty; implementations report empty model output as an error.
pub trait TextGenerator: Send + Sync {
    /// Backend identifier (e.g. "gemini", "stub").
    fn name(&self) -> &str;

    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl TextGenerator for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn generate<'a>(
            &'a self,
            prompt: &'a str,
        ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
            Box::pin(async move { Ok(prompt.to_uppercase()) })
        }
    }

    #[tokio::test]
    async fn usable_as_trait_object() {
        let generator: Box<dyn TextGenerator> = Box::new(Echo);
        assert_eq!(generator.name(), "echo");
        assert_eq!(generator.generate("hi").await.unwrap(), "HI");
    }
}
