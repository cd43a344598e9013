//! Endpoint adapters.
//!
//! Each adapter maps one remote operation onto a URL template, a method, the
//! bearer header, and an optional JSON body, then returns the provider's
//! `(status, body)` record untouched. HTTP error statuses are data here; only
//! the apply controller and the instance contract interpret them.

mod account;
mod backups;
mod bare_metal;
mod block_storage;
mod catalog;
mod inference;
mod instances;
mod iso;
mod object_storage;
mod reserved_ips;
mod snapshots;
mod ssh_keys;
mod startup_scripts;
mod users;
mod vfs;
mod vpc;

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::config::ConfigError;
use crate::credential::{self, Credential};
use crate::http::{Method, Request, RequestError, ReqwestTransport, Response, Transport};
use crate::payload::{Page, Payload};
use crate::provider::Provider;
use crate::url_template::UrlTemplate;

pub use instances::InstanceFilter;

/// Result returned by every adapter.
pub type ApiResult = Result<Response, RequestError>;

/// Handle carrying everything an adapter needs: where to send requests, how
/// to authenticate, and how to reach the network.
///
/// Cloning is cheap and clones share the transport.
#[derive(Clone, Debug)]
pub struct Api {
    provider: Provider,
    credential: Credential,
    transport: Arc<dyn Transport>,
}

impl Api {
    /// Creates a handle that sends requests over the shared `reqwest` client.
    #[must_use]
    pub fn new(provider: Provider, credential: Credential) -> Self {
        Self::with_transport(provider, credential, ReqwestTransport::shared())
    }

    /// Creates a handle over a caller-supplied transport.
    #[must_use]
    pub fn with_transport(
        provider: Provider,
        credential: Credential,
        transport: impl Transport + 'static,
    ) -> Self {
        Self {
            provider,
            credential,
            transport: Arc::new(transport),
        }
    }

    /// Creates a handle from the process-wide default credential.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] when no default credential
    /// has been set.
    pub fn from_default_credential(provider: Provider) -> Result<Self, ConfigError> {
        Ok(Self::new(provider, credential::credential()?))
    }

    /// Returns the provider this handle targets.
    #[must_use]
    pub const fn provider(&self) -> &Provider {
        &self.provider
    }

    pub(crate) fn call(&self, method: Method, path: &str) -> Call<'_> {
        Call {
            api: self,
            method,
            template: UrlTemplate::new(self.provider.clone()).with_path(path),
            params: Vec::new(),
            body: None,
        }
    }
}

/// One adapter invocation being assembled.
pub(crate) struct Call<'a> {
    api: &'a Api,
    method: Method,
    template: UrlTemplate,
    params: Vec<(String, String)>,
    body: Option<Map<String, Value>>,
}

impl Call<'_> {
    pub(crate) fn assign(mut self, name: &str, value: &str) -> Self {
        self.template = self.template.assign(name, value);
        self
    }

    pub(crate) fn param(mut self, name: &str, value: impl ToString) -> Self {
        self.params.push((name.to_owned(), value.to_string()));
        self
    }

    /// Adds a query parameter only when a value is present.
    pub(crate) fn param_opt(self, name: &str, value: Option<impl ToString>) -> Self {
        let Some(text) = value else {
            return self;
        };
        self.param(name, text)
    }

    pub(crate) fn page(mut self, page: &Page) -> Self {
        for (name, value) in page.params() {
            self.params.push((name.to_owned(), value));
        }
        self
    }

    pub(crate) fn payload(mut self, payload: &impl Payload) -> Self {
        self.body = Some(payload.to_json());
        self
    }

    pub(crate) async fn send(self) -> ApiResult {
        let mut request = Request::new(self.template)
            .method(self.method)
            .header("Authorization", self.api.credential.bearer());
        if self.method.carries_body() {
            request = request.header("Content-Type", "application/json");
            if let Some(body) = self.body {
                request = request.body(body);
            }
        }
        for (name, value) in self.params {
            request = request.param(name, value);
        }
        request.execute_with(self.api.transport.as_ref()).await
    }
}
