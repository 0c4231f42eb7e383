// ── Infrastructure ───────────────────────────────────────────────────────────
pub mod http_client;
pub mod scrub;
pub mod traits;

// ── Text generator implementations ──────────────────────────────────────────
pub mod gemini;
pub mod stub;

// ── Infrastructure re-exports ───────────────────────────────────────────────
pub use http_client::build_provider_client;
pub use scrub::{api_error, sanitize_api_error, scrub_secret_patterns};
pub use traits::TextGenerator;

// ── Implementation re-exports ───────────────────────────────────────────────
pub use gemini::GeminiTextGenerator;
pub use stub::StubTextGenerator;
