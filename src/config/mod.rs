pub mod schema;

pub use schema::{
    Backend, Config, GatewayConfig, ImageModelConfig, TextModelConfig, TwitterConfig,
    VertexConfig,
};
