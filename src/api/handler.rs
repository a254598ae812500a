//! Request handlers for the story endpoint and the health check.
//!
//! Each request runs one linear pipeline: validate -> build prompt -> call provider -> parse.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{info, warn};
use uuid::Uuid;

use super::AppState;
use crate::ai::{parse_summary_response, prompt_builder::build_prompt};
use crate::core::models::{GenerateSummaryRequest, HealthStatus, MediaItem, SummaryResult};
use crate::errors::SummaryError;

/// `POST /generate-summary`
///
/// # Errors
///
/// Returns a 4xx for malformed bodies or item counts outside the allowed range, and a
/// 5xx for provider failures.
#[tracing::instrument(level = "info", skip(state, payload), fields(request_id = %Uuid::new_v4()))]
pub async fn generate_summary(
    State(state): State<AppState>,
    payload: Result<Json<GenerateSummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResult>, SummaryError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected summary request body: {}", rejection.body_text());
        SummaryError::InvalidPayload(rejection.body_text())
    })?;

    let result = summarize_media(&state, &request.media_items).await?;
    Ok(Json(result))
}

/// `GET /health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

/// Runs the full pipeline for an already-deserialized list of items.
///
/// # Errors
///
/// Validation errors are returned before the provider is contacted.
pub async fn summarize_media(
    state: &AppState,
    items: &[MediaItem],
) -> Result<SummaryResult, SummaryError> {
    validate_media_items(items, state.config.max_media_items)?;
    info!(media_items = items.len(), "Generating summary");

    let prompt = build_prompt(items);
    let raw = state.backend.complete(prompt).await?;

    let result = parse_summary_response(&raw);
    if result.prompts.is_empty() {
        warn!(reply_len = raw.len(), "No journal prompts found in LLM reply");
    }
    info!(prompts = result.prompts.len(), summary_len = result.summary.len(), "Summary generated");

    Ok(result)
}

/// # Errors
///
/// `EmptyMediaItems` when `items` is empty, `TooManyMediaItems` when it exceeds `max`.
pub fn validate_media_items(items: &[MediaItem], max: usize) -> Result<(), SummaryError> {
    if items.is_empty() {
        return Err(SummaryError::EmptyMediaItems);
    }
    if items.len() > max {
        return Err(SummaryError::TooManyMediaItems {
            count: items.len(),
            max,
        });
    }
    Ok(())
}
