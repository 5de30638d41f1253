pub mod client;
pub mod http;
pub mod prompt;

pub use client::{AnthropicClient, GenerationRequest, TextGenerator};
