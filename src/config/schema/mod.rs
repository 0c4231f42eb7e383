mod core;
mod gateway;
mod twitter;
mod vertex;

pub use core::{Backend, Config};
pub use gateway::GatewayConfig;
pub use twitter::TwitterConfig;
pub use vertex::{ImageModelConfig, TextModelConfig, VertexConfig};
