//! NetBox client errors

use thiserror::Error;

/// Failure talking to NetBox
///
/// The provider only needs to tell three things apart: the object is gone
/// (404), the token was refused, or anything else. Everything else keeps
/// the HTTP status and body so diagnostics can show them.
#[derive(Debug, Error)]
pub enum NetBoxError {
    /// Transport failure: connection refused, timeout, TLS
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// NetBox answered with an unsuccessful status
    #[error("NetBox API error: {status} - {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Body as sent by NetBox
        body: String,
    },

    /// The body was not the JSON shape expected
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// NetBox refused the token (401 or 403)
    #[error("Authentication failed ({status}): {message}")]
    Authentication {
        /// 401 or 403
        status: u16,
        /// Request path and body as sent by NetBox
        message: String,
    },

    /// NetBox answered 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// The client was asked for something it cannot send
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl NetBoxError {
    /// HTTP status behind the error, when there was a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Authentication { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Serialization(_) | Self::InvalidRequest(_) => None,
        }
    }

    /// Whether NetBox reported the object as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
