//! Typed async client for cloud provider control-plane APIs.
//!
//! The crate is layered bottom-up: a [`Provider`] names a base URL, a
//! [`UrlTemplate`] renders resource paths against it, and [`http::Request`]
//! sends one call through a [`http::Transport`]. On top of that, [`api`]
//! exposes one adapter per Vultr v2 endpoint, [`payload`] builds sparse JSON
//! bodies, and [`apply`] drives the create → wait-for-ready lifecycle for
//! compute instances behind the provider-agnostic [`Instance`] contract.
//!
//! Adapters return every HTTP status as a [`Response`] value. Only the apply
//! controller interprets status codes.

pub mod api;
pub mod apply;
pub mod client;
pub mod config;
pub mod credential;
pub mod http;
pub mod instance;
pub mod payload;
pub mod provider;
pub mod test_support;
pub mod url_template;
pub mod vultr;

pub use api::{Api, ApiResult, InstanceFilter};
pub use apply::{
    ApplyController, CancelHandle, CancelSignal, FailurePolicy, RetryPolicy, WaitPolicy,
    cancel_pair,
};
pub use client::Client;
pub use config::{ClientConfig, ConfigError};
pub use credential::{Credential, clear_credential, credential, set_credential};
pub use http::{Method, RequestError, Response, TransportError};
pub use instance::{Instance, InstanceAction, InstanceError, InstanceView};
pub use payload::{CreateInstance, Page, Payload};
pub use provider::Provider;
pub use url_template::{TemplateError, UrlTemplate};
pub use vultr::VultrInstance;
