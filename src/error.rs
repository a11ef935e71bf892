//! Error types for the TT REST API client.
//!
//! Every failure mode surfaces directly to the caller; nothing is retried or
//! recovered internally.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for TT REST operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all TT REST API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed before a response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The ttid token endpoint returned a non-200 status
    #[error("token acquisition failed: status={status}, description={description:?}")]
    TokenAcquisition {
        /// HTTP status code of the failed token exchange
        status: u16,
        /// `status_desc` field from the response body, when present
        description: Option<String>,
        /// Raw response body for diagnostics
        body: Value,
    },

    /// An authenticated data call returned a non-200 status
    #[error("request error: status={status}, message={message}")]
    Request {
        /// HTTP status code
        status: u16,
        /// Body-derived error text
        message: String,
        /// Raw response body for diagnostics
        body: Value,
    },

    /// The caller violated an endpoint's documented precondition
    #[error("usage error: {0}")]
    Usage(String),

    /// The server response was missing a field the pagination protocol requires
    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(String),
}

impl Error {
    /// Returns `true` if this error came from the token exchange.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::TokenAcquisition { .. })
    }

    /// The HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::TokenAcquisition { status, .. } | Error::Request { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Build a [`Error::TokenAcquisition`] from a failed token-exchange response.
    pub(crate) fn token_acquisition(status: u16, body: Value) -> Self {
        let description = body
            .get("status_desc")
            .and_then(|d| d.as_str())
            .map(String::from);

        Error::TokenAcquisition {
            status,
            description,
            body,
        }
    }

    /// Build a [`Error::Request`] from a failed data-call response.
    pub(crate) fn request(status: u16, body: Value) -> Self {
        let message = body
            .get("error_message")
            .or_else(|| body.get("text"))
            .and_then(|m| m.as_str())
            .unwrap_or("unknown request error")
            .to_string();

        Error::Request {
            status,
            message,
            body,
        }
    }
}
