//! Transport abstraction and the `reqwest` implementation.

use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::LazyLock;
use std::time::Duration;

use serde_json::{Map, Value};

use super::{Method, PreparedRequest, Response, TransportError};

/// Default per-request timeout for the shared client.
pub(crate) const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of body bytes echoed into logs.
const MAX_LOG_BODY_LENGTH: usize = 200;

static HTTP_CLIENT: LazyLock<Result<reqwest::Client, TransportError>> = LazyLock::new(|| {
    client_with_timeout(HTTP_TIMEOUT).map_err(|err| {
        tracing::error!(error = %err, "failed to build shared HTTP client");
        TransportError::Client(err.to_string())
    })
});

fn client_with_timeout(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(concat!("skyward/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
}

/// Future returned by [`Transport::send`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Response, TransportError>> + Send + 'a>>;

/// Sends one prepared request and yields its `(status, body)` record.
///
/// Implementations must not turn HTTP error statuses into errors, and must
/// release any connection they open on every exit path.
pub trait Transport: Debug + Send + Sync {
    /// Issues the request.
    fn send(&self, request: PreparedRequest) -> TransportFuture<'_>;
}

/// Production transport backed by a pooled `reqwest` client over rustls.
///
/// A client that failed to build is kept as its error; every send through
/// such a transport fails with [`TransportError::Client`].
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: Result<reqwest::Client, TransportError>,
}

impl ReqwestTransport {
    /// Returns a transport sharing the process-wide client (30 second
    /// request timeout).
    ///
    /// When the shared client cannot be built the failure is logged once and
    /// reported by every request sent through the transport.
    #[must_use]
    pub fn shared() -> Self {
        Self {
            client: HTTP_CLIENT.clone(),
        }
    }

    /// Builds a transport with its own connection pool and request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Client`] when the TLS backend cannot be
    /// initialised.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client =
            client_with_timeout(timeout).map_err(|err| TransportError::Client(err.to_string()))?;
        Ok(Self { client: Ok(client) })
    }

    async fn dispatch(&self, request: PreparedRequest) -> Result<Response, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let client = self.client.as_ref().map_err(Clone::clone)?;
        let mut builder = client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.params.is_empty() {
            builder = builder.query(&request.params);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = response.bytes().await?;

        if !(200..300).contains(&status) {
            tracing::debug!(
                status,
                body = %sanitize_for_log(&String::from_utf8_lossy(&bytes)),
                "provider returned error status"
            );
        }

        let body = decode_body(status, content_type.as_deref(), &bytes)?;
        Ok(Response { status, body })
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::shared()
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: PreparedRequest) -> TransportFuture<'_> {
        Box::pin(self.dispatch(request))
    }
}

/// Parses a response body into a JSON object.
///
/// Empty bodies, bodies with an explicit non-JSON content type, and JSON
/// values that are not objects all yield an empty object.
///
/// # Errors
///
/// Returns [`TransportError::Decode`] when a body that should be JSON fails
/// to parse.
pub fn decode_body(
    status: u16,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<Map<String, Value>, TransportError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    if let Some(kind) = content_type
        && !kind.to_ascii_lowercase().contains("json")
    {
        return Ok(Map::new());
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => {
            tracing::debug!(status, kind = json_kind(&other), "ignoring non-object JSON body");
            Ok(Map::new())
        }
        Err(err) => Err(TransportError::Decode {
            status,
            message: err.to_string(),
        }),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Truncates a body for logging and strips control characters.
fn sanitize_for_log(body: &str) -> String {
    let truncated: String = body.chars().take(MAX_LOG_BODY_LENGTH).collect();
    let mut cleaned: String = truncated
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .collect();
    if body.chars().count() > MAX_LOG_BODY_LENGTH {
        cleaned.push_str(&format!("... [truncated, {} bytes total]", body.len()));
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(b"" as &[u8])]
    #[case(b"   \n")]
    fn empty_bodies_decode_to_empty_object(#[case] bytes: &[u8]) {
        let body = decode_body(204, None, bytes).expect("empty body is fine");
        assert!(body.is_empty());
    }

    #[test]
    fn html_bodies_are_not_parsed() {
        let body = decode_body(502, Some("text/html; charset=utf-8"), b"<html>bad gateway</html>")
            .expect("non-JSON content type is tolerated");
        assert!(body.is_empty());
    }

    #[test]
    fn object_bodies_are_returned() {
        let body = decode_body(
            200,
            Some("application/json"),
            br#"{"account": {"balance": -5.5}}"#,
        )
        .expect("valid JSON");
        assert_eq!(body.get("account"), Some(&json!({"balance": -5.5})));
    }

    #[test]
    fn array_bodies_become_empty_objects() {
        let body = decode_body(200, Some("application/json"), b"[1,2]").expect("valid JSON");
        assert!(body.is_empty());
    }

    #[rstest]
    #[case(Some("application/json"))]
    #[case(None)]
    fn malformed_json_is_a_decode_error(#[case] content_type: Option<&str>) {
        let error = decode_body(200, content_type, b"{\"instance\":").expect_err("truncated JSON");
        assert!(matches!(error, TransportError::Decode { status: 200, .. }));
    }

    #[tokio::test]
    async fn unbuilt_client_fails_every_request() {
        let transport = ReqwestTransport {
            client: Err(TransportError::Client(String::from("no TLS backend"))),
        };
        let request = PreparedRequest {
            method: Method::Get,
            url: String::from("https://api.vultr.com/v2/account"),
            headers: std::collections::BTreeMap::new(),
            params: std::collections::BTreeMap::new(),
            body: None,
        };

        let error = transport
            .send(request)
            .await
            .expect_err("client was never built");

        assert_eq!(
            error,
            TransportError::Client(String::from("no TLS backend"))
        );
    }

    #[test]
    fn shared_transport_carries_a_built_client() {
        assert!(ReqwestTransport::shared().client.is_ok());
    }

    #[test]
    fn sanitize_truncates_and_strips_control_characters() {
        let long = "x".repeat(MAX_LOG_BODY_LENGTH + 10);
        let cleaned = sanitize_for_log(&long);
        assert!(cleaned.starts_with(&"x".repeat(MAX_LOG_BODY_LENGTH)));
        assert!(cleaned.contains("truncated, 210 bytes total"));
        assert_eq!(sanitize_for_log("a\tb\nc"), "abc");
    }
}
