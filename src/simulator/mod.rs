pub mod facade;
pub mod types;

pub use facade::Simulator;
pub use types::{
    DEFAULT_ASPECT_RATIO, GenerationRequest, ImageRequest, ImageResult, ImageStyle,
    InflammatoryResult, MAX_SEVERITY, MIN_SEVERITY, Reply, ReplyType,
};
