mod builder;
mod templates;

pub use builder::{PromptBuilder, reply_instruction, severity_descriptor};
