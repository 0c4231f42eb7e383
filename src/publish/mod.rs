// ── Contract ─────────────────────────────────────────────────────────────────
pub mod traits;

// ── Implementations ─────────────────────────────────────────────────────────
pub mod stub;
pub mod twitter;

// ── Publishing adapter ──────────────────────────────────────────────────────
pub mod tweet;

pub use stub::StubPublisher;
pub use traits::{PublishResult, Publisher};
pub use tweet::{MAX_TWEET_LENGTH, TweetOptions, TweetPoster, build_tweet_text};
pub use twitter::TwitterPublisher;
