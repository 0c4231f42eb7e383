//! Collaborator selection, done once at process start.

use crate::config::{Backend, Config};
use crate::error::Result;
use crate::image::{ImageGenerator, ImagenGenerator, StubImageGenerator};
use crate::llm::{GeminiTextGenerator, StubTextGenerator, TextGenerator};
use crate::publish::{Publisher, StubPublisher, TweetPoster, TwitterPublisher};
use crate::simulator::Simulator;
use std::sync::Arc;

/// Everything a front end needs to serve requests.
#[derive(Clone)]
pub struct Backends {
    pub simulator: Arc<Simulator>,
    /// `None` when posting is not configured.
    pub poster: Option<Arc<TweetPoster>>,
}

impl Backends {
    pub fn new(
        text: Arc<dyn TextGenerator>,
        image: Arc<dyn ImageGenerator>,
        publisher: Option<Arc<dyn Publisher>>,
    ) -> Result<Self> {
        Ok(Self {
            simulator: Arc::new(Simulator::new(text, image)?),
            poster: publisher.map(|publisher| Arc::new(TweetPoster::new(publisher))),
        })
    }

    /// Deterministic in-process collaborators; needs no credentials.
    pub fn stub() -> Result<Self> {
        Self::new(
            Arc::new(StubTextGenerator::default()),
            Arc::new(StubImageGenerator::new()),
            Some(Arc::new(StubPublisher::new())),
        )
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let backends = match config.backend {
            Backend::Stub => Self::stub()?,
            Backend::Vertex => {
                let text: Arc<dyn TextGenerator> =
                    Arc::new(GeminiTextGenerator::from_config(config)?);
                let image: Arc<dyn ImageGenerator> =
                    Arc::new(ImagenGenerator::from_config(config)?);
                let publisher = config.twitter.as_ref().map(|twitter| {
                    Arc::new(TwitterPublisher::new(twitter)) as Arc<dyn Publisher>
                });
                Self::new(text, image, publisher)?
            }
        };

        tracing::info!(
            backend = %config.backend,
            text = backends.simulator.text_backend(),
            image = backends.simulator.image_backend(),
            publisher = backends
                .poster
                .as_ref()
                .map_or("disabled", |poster| poster.publisher_name()),
            "collaborators ready"
        );
        if backends.poster.is_none() {
            tracing::warn!("Twitter credentials not configured; posting is disabled");
        }
        Ok(backends)
    }
}
