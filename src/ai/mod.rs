//! All AI/LLM functionality

pub mod client;
pub mod prompt_builder;
pub mod response_parser;

// Re-export main types for convenience
pub use client::{CompletionBackend, LlmClient};
pub use response_parser::parse_summary_response;
