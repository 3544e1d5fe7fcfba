//! Error types for ZeroBounce API operations.

use reqwest::StatusCode;

/// Errors returned by the ZeroBounce client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The service answered with a non-2xx status.
    ///
    /// Carries the status code and the raw response body so callers can
    /// inspect the service's error payload. This variant is always
    /// propagated, never converted into a degraded result.
    #[error("request failed with status {status}: {body}")]
    RequestFailed {
        /// HTTP status code returned by the service.
        status: StatusCode,
        /// Raw response body, unparsed.
        body: String,
    },

    /// Transport-level failure from the underlying HTTP client.
    #[error("http transport error")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("json decode error")]
    Json(#[from] serde_json::Error),

    /// The response was valid JSON but did not have the expected shape.
    #[error("unexpected response shape: {0}")]
    ResponseParse(String),
}
