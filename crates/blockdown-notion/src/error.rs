//! Error types for the Notion client.

use blockdown_render::RenderError;

/// Error from Notion API operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum NotionError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// Markdown could not be rendered to blocks.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// No integration token was provided.
    #[error("no Notion access token provided")]
    MissingToken,

    /// Object ID is not a UUID.
    #[error("invalid Notion object ID: {id}")]
    InvalidId {
        /// The rejected input.
        id: String,
    },
}
