//! `DocchiError` - failures surfaced by the Docchi client.

use reqwest::StatusCode;

/// Result alias for Docchi client operations.
pub type Result<T> = std::result::Result<T, DocchiError>;

/// Errors returned by the Docchi client.
///
/// None of these are retried internally.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum DocchiError {
    /// A required argument was missing or malformed. Raised before any request.
    #[error("a valid {0} must be provided")]
    InvalidArgument(&'static str),

    /// The server answered with a non-success status code.
    #[error("Docchi API error (HTTP {status}): {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The request could not complete (timeout, DNS, connection reset).
    #[error("request failed: {0}")]
    Connectivity(#[source] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("failed to decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    Url(#[from] url::ParseError),

    /// A configured base URL cannot take path segments (e.g. `mailto:`).
    #[error("base URL cannot be a base: {0}")]
    CannotBeABase(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The runtime backing the blocking client could not be started.
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl DocchiError {
    /// Builds an `HttpStatus` error from a response status and body.
    pub(crate) fn http_status(status: StatusCode, body: String) -> Self {
        Self::HttpStatus {
            status: status.as_u16(),
            body,
        }
    }

    /// Returns the HTTP status code if this is an `HttpStatus` error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the request timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Connectivity(e) if e.is_timeout())
    }
}
