// Service exports
pub mod openai;

pub use openai::{OpenAiClient, OpenAiError, TextGenerator};
