//! Error types for request execution.

use thiserror::Error;

use crate::config::ConfigError;
use crate::url_template::TemplateError;

/// Failures below the HTTP status line: the request never produced a usable
/// `(status, body)` record.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum TransportError {
    /// Raised when the HTTP client cannot be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
    /// Raised when DNS resolution, TCP connect, or the TLS handshake fails.
    #[error("connection failed: {0}")]
    Connect(String),
    /// Raised when the request exceeds its transport timeout.
    #[error("request timed out: {0}")]
    Timeout(String),
    /// Raised for any other failure while sending or reading the response.
    #[error("request failed: {0}")]
    Request(String),
    /// Raised when a response body claims to be JSON but cannot be parsed.
    #[error("malformed JSON body in {status} response: {message}")]
    Decode {
        /// HTTP status that accompanied the body.
        status: u16,
        /// Parser message.
        message: String,
    },
}

impl From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            Self::Timeout(value.to_string())
        } else if value.is_connect() {
            Self::Connect(value.to_string())
        } else if value.is_builder() {
            Self::Client(value.to_string())
        } else {
            Self::Request(value.to_string())
        }
    }
}

/// Errors raised by endpoint adapters.
///
/// HTTP error statuses are not represented here; they come back as ordinary
/// [`Response`](super::Response) records.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum RequestError {
    /// Raised when the client is misconfigured (for example no credential).
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Raised when a URL template still has unresolved placeholders.
    #[error(transparent)]
    Template(#[from] TemplateError),
    /// Raised when the transport fails.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
