use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `enjo`.
///
/// Collaborator clients work in `anyhow::Result`; the orchestration layer
/// folds those into the variant naming the step that failed so callers can
/// tell caller mistakes from vendor failures.
#[derive(Debug, Error)]
pub enum EnjoError {
    // ── Caller input ────────────────────────────────────────────────────
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // ── Text generation ─────────────────────────────────────────────────
    #[error("failed to generate {stage}: {source}")]
    GenerationFailed {
        stage: GenerationStage,
        #[source]
        source: anyhow::Error,
    },

    // ── Image pipeline ──────────────────────────────────────────────────
    #[error("failed to generate image prompt: {0}")]
    PromptGenerationFailed(#[source] anyhow::Error),

    #[error("failed to generate image: {0}")]
    ImageGenerationFailed(#[source] anyhow::Error),

    // ── Publishing ──────────────────────────────────────────────────────
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("failed to upload media: {0}")]
    MediaUploadFailed(#[source] anyhow::Error),

    #[error("failed to post tweet: {0}")]
    PublishFailed(#[source] anyhow::Error),

    #[error("Twitter posting is not configured")]
    PublishingDisabled,

    // ── Config ──────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Which text-generation call of a multi-step operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum GenerationStage {
    #[strum(serialize = "inflammatory text")]
    Rewrite,
    #[strum(serialize = "explanation")]
    Explanation,
    #[strum(serialize = "reply")]
    Reply,
}

impl EnjoError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn generation(stage: GenerationStage, source: anyhow::Error) -> Self {
        Self::GenerationFailed { stage, source }
    }
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, EnjoError>;
