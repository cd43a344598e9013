//! Request building, execution, and the transport seam.
//!
//! A [`Request`] accumulates method, headers, query parameters, and an
//! optional JSON body against a [`UrlTemplate`](crate::UrlTemplate). Executing
//! it renders the template into a [`PreparedRequest`] and hands that to a
//! [`Transport`]. Every HTTP status, including 4xx and 5xx, comes back as a
//! [`Response`] value; only transport failures are errors.

mod error;
mod request;
mod transport;

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

pub use error::{RequestError, TransportError};
pub use request::Request;
pub use transport::{ReqwestTransport, Transport, TransportFuture, decode_body};

/// HTTP methods used by the provider APIs.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Method {
    /// `GET`
    #[default]
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a JSON body.
    #[must_use]
    pub const fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully rendered request ready for a [`Transport`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PreparedRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL without the query string.
    pub url: String,
    /// Headers keyed by lowercase name.
    pub headers: BTreeMap<String, String>,
    /// Query parameters.
    pub params: BTreeMap<String, String>,
    /// JSON body, when one was set.
    pub body: Option<Map<String, Value>>,
}

impl PreparedRequest {
    /// Looks up a header by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Looks up a query parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// The `(status, body)` record returned by every adapter.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Parsed JSON object; empty when the server returned no JSON content.
    pub body: Map<String, Value>,
}

impl Response {
    /// Builds a response from a status and any JSON value. Non-object values
    /// become an empty body.
    #[must_use]
    pub fn new(status: u16, value: Value) -> Self {
        let body = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self { status, body }
    }

    /// Builds a response without content, such as a `204 No Content`.
    #[must_use]
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: Map::new(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns a top-level body field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    /// Returns a top-level body field when it is a JSON object.
    #[must_use]
    pub fn object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.body.get(key).and_then(Value::as_object)
    }

    /// Best-effort error message from a provider error body.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.body
            .get("error")
            .and_then(Value::as_str)
            .map_or_else(|| format!("HTTP {}", self.status), str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_object_bodies_become_empty() {
        assert!(Response::new(200, json!([1, 2, 3])).body.is_empty());
        assert!(Response::new(200, Value::Null).body.is_empty());
    }

    #[test]
    fn error_message_prefers_provider_text() {
        let rejected = Response::new(400, json!({"error": "Invalid plan", "status": 400}));
        assert_eq!(rejected.error_message(), "Invalid plan");
        assert_eq!(Response::empty(500).error_message(), "HTTP 500");
    }

    #[test]
    fn only_write_methods_carry_bodies() {
        assert!(Method::Post.carries_body());
        assert!(Method::Put.carries_body());
        assert!(Method::Patch.carries_body());
        assert!(!Method::Get.carries_body());
        assert!(!Method::Delete.carries_body());
    }
}
