//! Errors raised by instance lifecycle operations.

use std::time::Duration;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::ConfigError;
use crate::http::RequestError;

/// Errors surfaced by [`Instance`](super::Instance) operations and the apply
/// controller.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum InstanceError {
    /// Raised when the create call answers anything other than
    /// `202 Accepted`.
    #[error("instance creation failed with HTTP {status}: {}", describe(.body))]
    CreateFailed {
        /// Status returned by the provider.
        status: u16,
        /// Body returned by the provider.
        body: Map<String, Value>,
    },
    /// Raised when an instance is not ready before the wait deadline.
    #[error("instance {id} was not ready within {}s", .timeout.as_secs())]
    ReadinessTimeout {
        /// Identifier of the instance being polled.
        id: String,
        /// Deadline that elapsed.
        timeout: Duration,
    },
    /// Raised when a response does not have the expected shape, or an
    /// operation is attempted in the wrong state.
    #[error("protocol error: {0}")]
    Protocol(String),
    /// Raised when `execute_action` receives an unknown action name.
    #[error("unsupported action '{0}'")]
    UnsupportedAction(String),
    /// Raised when an action's parameters are missing or mistyped.
    #[error("invalid action parameters: {0}")]
    InvalidAction(String),
    /// Raised when a cancellation signal interrupts an operation.
    #[error("operation cancelled")]
    Cancelled,
    /// Raised when a lifecycle call other than create answers with an
    /// unexpected status.
    #[error("{operation} rejected with HTTP {status}: {}", describe(.body))]
    Rejected {
        /// Operation that was attempted.
        operation: &'static str,
        /// Status returned by the provider.
        status: u16,
        /// Body returned by the provider.
        body: Map<String, Value>,
    },
    /// Raised when the apply policy or client configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Raised when the request could not be sent.
    #[error(transparent)]
    Request(#[from] RequestError),
}

fn describe(body: &Map<String, Value>) -> String {
    body.get("error")
        .and_then(Value::as_str)
        .map_or_else(|| Value::Object(body.clone()).to_string(), str::to_owned)
}
