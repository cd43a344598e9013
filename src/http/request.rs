//! Single-use request builder.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::transport::ReqwestTransport;
use super::{Method, PreparedRequest, RequestError, Response, Transport};
use crate::url_template::UrlTemplate;

/// Accumulates a request against a URL template. Not shareable: build a fresh
/// one per call and consume it with [`Request::execute`] or
/// [`Request::execute_with`].
#[derive(Clone, Debug)]
pub struct Request {
    template: UrlTemplate,
    method: Method,
    headers: BTreeMap<String, String>,
    params: BTreeMap<String, String>,
    body: Option<Map<String, Value>>,
}

impl Request {
    /// Starts a `GET` request with no headers, parameters, or body.
    #[must_use]
    pub const fn new(template: UrlTemplate) -> Self {
        Self {
            template,
            method: Method::Get,
            headers: BTreeMap::new(),
            params: BTreeMap::new(),
            body: None,
        }
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets a header. Names are case-insensitive; a later value for the same
    /// name replaces the earlier one.
    #[must_use]
    pub fn header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    /// Sets a query parameter, replacing any earlier value for `name`.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Sets the JSON object body.
    #[must_use]
    pub fn body(mut self, body: Map<String, Value>) -> Self {
        self.body = Some(body);
        self
    }

    /// Renders the template and freezes the request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Template`] when the URL template has unresolved
    /// placeholders.
    pub fn prepare(self) -> Result<PreparedRequest, RequestError> {
        let url = self.template.render()?;
        Ok(PreparedRequest {
            method: self.method,
            url,
            headers: self.headers,
            params: self.params,
            body: self.body,
        })
    }

    /// Executes the request over the shared `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] for template and transport failures. HTTP
    /// error statuses are returned as `Ok` responses.
    pub async fn execute(self) -> Result<Response, RequestError> {
        self.execute_with(&ReqwestTransport::shared()).await
    }

    /// Executes the request over the given transport.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] for template and transport failures. HTTP
    /// error statuses are returned as `Ok` responses.
    pub async fn execute_with(self, transport: &dyn Transport) -> Result<Response, RequestError> {
        let prepared = self.prepare()?;
        let method = prepared.method;
        let url = prepared.url.clone();
        match transport.send(prepared).await {
            Ok(response) => {
                tracing::debug!(%method, %url, status = response.status, "request completed");
                Ok(response)
            }
            Err(err) => {
                tracing::debug!(%method, %url, error = %err, "request failed");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Provider;
    use crate::test_support::ScriptedTransport;
    use serde_json::json;

    fn template() -> UrlTemplate {
        UrlTemplate::new(Provider::Vultr).with_path("instances/{instance-id}")
    }

    #[test]
    fn header_names_are_case_insensitive() {
        let prepared = Request::new(template().assign("instance-id", "i-1"))
            .header("Content-Type", "text/plain")
            .header("content-type", "application/json")
            .prepare()
            .expect("template resolves");
        assert_eq!(prepared.headers.len(), 1);
        assert_eq!(prepared.header("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn prepare_fails_on_unresolved_template() {
        let error = Request::new(template())
            .prepare()
            .expect_err("instance-id is unassigned");
        assert!(matches!(error, RequestError::Template(_)));
    }

    #[tokio::test]
    async fn execute_with_passes_everything_to_transport() {
        let transport = ScriptedTransport::new();
        transport.push_json(200, json!({"instance": {"id": "i-1"}}));

        let mut body = Map::new();
        body.insert(String::from("label"), json!("web"));
        let response = Request::new(template().assign("instance-id", "i-1"))
            .method(Method::Patch)
            .header("Authorization", "Bearer token")
            .param("per_page", "5")
            .body(body.clone())
            .execute_with(&transport)
            .await
            .expect("scripted response");

        assert_eq!(response.status, 200);
        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        let request = sent.first().expect("one request");
        assert_eq!(request.method, Method::Patch);
        assert_eq!(request.url, "https://api.vultr.com/v2/instances/i-1");
        assert_eq!(request.header("authorization"), Some("Bearer token"));
        assert_eq!(request.param("per_page"), Some("5"));
        assert_eq!(request.body.as_ref(), Some(&body));
    }

    #[tokio::test]
    async fn transport_failures_surface_as_request_errors() {
        let transport = ScriptedTransport::new();
        transport.push_error(crate::http::TransportError::Connect(String::from("refused")));
        let error = Request::new(template().assign("instance-id", "i-1"))
            .execute_with(&transport)
            .await
            .expect_err("scripted failure");
        assert!(matches!(error, RequestError::Transport(_)));
    }
}
