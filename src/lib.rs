//! Moment Collage API - turns a handful of photos into a short story and journal prompts.
//!
//! The service receives photo references from the collage frontend, forwards them to a
//! hosted multimodal model, and reshapes the model's reply into a summary plus up to two
//! journal prompts.
//!
//! # Architecture
//!
//! Each request runs through one linear pipeline:
//! 1. `api` validates the payload and the item count
//! 2. `ai::prompt_builder` renders the system instruction and an interleaved text/image message
//! 3. `ai::client` sends it to an OpenAI-compatible chat completion endpoint
//! 4. `ai::response_parser` splits the free-text reply into a summary and prompts
//!
//! The system uses:
//! - axum and tower-http for the HTTP surface
//! - reqwest for the provider call
//! - openai-api-rs message types for prompt construction
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```
//! use moment_collage::ai::response_parser::parse_summary_response;
//!
//! let result = parse_summary_response(
//!     "A day at the beach.\n\nJournal Prompts:\n1. What did the sea sound like?",
//! );
//! assert_eq!(result.summary, "A day at the beach.");
//! assert_eq!(result.prompts, vec!["What did the sea sound like?".to_string()]);
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;

/// Configure structured logging with JSON format.
///
/// Honors `RUST_LOG` and falls back to `info`. Safe to call more than once; later calls
/// leave the first subscriber in place.
///
/// # Example
///
/// ```
/// moment_collage::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
