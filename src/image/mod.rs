// ── Contract ─────────────────────────────────────────────────────────────────
pub mod traits;

// ── Implementations ─────────────────────────────────────────────────────────
pub mod imagen;
pub mod stub;

pub use imagen::ImagenGenerator;
pub use stub::StubImageGenerator;
pub use traits::ImageGenerator;
