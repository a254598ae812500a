use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("No media items provided")]
    EmptyMediaItems,

    #[error("Too many media items: {count} provided, maximum is {max}")]
    TooManyMediaItems { count: usize, max: usize },

    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    #[error("LLM API key not configured")]
    MissingCredential,

    #[error("LLM API error (status {status}): {body}")]
    ProviderStatus { status: u16, body: String },

    #[error("LLM API returned an empty or invalid response")]
    EmptyResponse,

    #[error("Request to LLM API timed out")]
    Timeout,

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Error generating summary: {0}")]
    Internal(String),
}

impl SummaryError {
    /// HTTP status reported to the caller for this failure.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            SummaryError::EmptyMediaItems => StatusCode::BAD_REQUEST,
            SummaryError::TooManyMediaItems { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            SummaryError::InvalidPayload(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SummaryError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            SummaryError::MissingCredential
            | SummaryError::ProviderStatus { .. }
            | SummaryError::EmptyResponse
            | SummaryError::HttpError(_)
            | SummaryError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the failure originated on the provider side of the pipeline.
    #[must_use]
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            SummaryError::MissingCredential
                | SummaryError::ProviderStatus { .. }
                | SummaryError::EmptyResponse
                | SummaryError::Timeout
                | SummaryError::HttpError(_)
        )
    }
}

impl From<reqwest::Error> for SummaryError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            SummaryError::Timeout
        } else {
            SummaryError::HttpError(error.to_string())
        }
    }
}
