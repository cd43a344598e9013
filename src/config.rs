//! Configuration loading via `ortho-config`.
//!
//! The request and apply layers never read the environment themselves; this
//! module is the opt-in layer that turns defaults, `skyward.toml`,
//! `SKYWARD_*` environment variables, and CLI flags into a [`Client`].

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::api::Api;
use crate::apply::{FailurePolicy, RetryPolicy, WaitPolicy};
use crate::client::Client;
use crate::credential::Credential;
use crate::http::ReqwestTransport;
use crate::provider::Provider;

/// Client settings derived from environment variables, configuration files,
/// and CLI flags.
#[derive(Clone, Debug, Deserialize, OrthoConfig, PartialEq, Eq)]
#[ortho_config(prefix = "SKYWARD")]
pub struct ClientConfig {
    /// API key sent as a bearer token. This value is required.
    pub api_key: Option<String>,
    /// Provider name: `vultr` or `custom`. Defaults to `vultr`.
    #[ortho_config(default = "vultr".to_owned())]
    pub provider: String,
    /// Base URL for the `custom` provider.
    pub base_url: Option<String>,
    /// Create failure policy: `fail` or `retry`. Defaults to `fail`.
    #[ortho_config(default = "fail".to_owned())]
    pub failure_policy: String,
    /// Additional create attempts when the failure policy is `retry`.
    #[ortho_config(default = 3)]
    pub retry_attempts: u32,
    /// Seconds to sleep between create attempts.
    #[ortho_config(default = 5)]
    pub retry_interval_secs: u64,
    /// Seconds to wait for a new instance to become ready.
    #[ortho_config(default = 300)]
    pub wait_timeout_secs: u64,
    /// Seconds between readiness polls.
    #[ortho_config(default = 5)]
    pub wait_interval_secs: u64,
    /// Transport timeout in seconds for individual requests.
    #[ortho_config(default = 30)]
    pub request_timeout_secs: u64,
}

/// Metadata for a configuration field, used to generate actionable error messages.
struct FieldMetadata {
    description: &'static str,
    env_var: &'static str,
    toml_key: &'static str,
}

impl FieldMetadata {
    const fn new(description: &'static str, env_var: &'static str, toml_key: &'static str) -> Self {
        Self {
            description,
            env_var,
            toml_key,
        }
    }

    fn missing(&self) -> ConfigError {
        ConfigError::MissingField(format!(
            "missing {}: set {} or add {} to skyward.toml",
            self.description, self.env_var, self.toml_key
        ))
    }

    fn invalid(&self, reason: impl Into<String>) -> ConfigError {
        ConfigError::InvalidValue {
            field: format!("{} ({} / {})", self.description, self.env_var, self.toml_key),
            reason: reason.into(),
        }
    }
}

const API_KEY: FieldMetadata = FieldMetadata::new("API key", "SKYWARD_API_KEY", "api_key");
const FAILURE_POLICY: FieldMetadata = FieldMetadata::new(
    "create failure policy",
    "SKYWARD_FAILURE_POLICY",
    "failure_policy",
);
const WAIT_TIMEOUT: FieldMetadata = FieldMetadata::new(
    "readiness timeout",
    "SKYWARD_WAIT_TIMEOUT_SECS",
    "wait_timeout_secs",
);
const WAIT_INTERVAL: FieldMetadata = FieldMetadata::new(
    "readiness poll interval",
    "SKYWARD_WAIT_INTERVAL_SECS",
    "wait_interval_secs",
);
const REQUEST_TIMEOUT: FieldMetadata = FieldMetadata::new(
    "request timeout",
    "SKYWARD_REQUEST_TIMEOUT_SECS",
    "request_timeout_secs",
);

impl ClientConfig {
    /// Loads configuration using the `ortho-config` derive. Values merge
    /// defaults, configuration files, environment variables, and CLI flags in
    /// that order of precedence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the loader fails to merge sources.
    pub fn load_from_sources() -> Result<Self, ConfigError> {
        Self::load().map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Loads configuration without attempting to parse CLI arguments. Values
    /// still merge defaults, configuration files, and environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the merge fails.
    pub fn load_without_cli_args() -> Result<Self, ConfigError> {
        Self::load_from_iter([std::ffi::OsString::from("skyward")])
            .map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Performs semantic validation. Error messages name the environment
    /// variable and configuration key that supply each value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required field is missing or a value is
    /// out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.credential()?;
        self.provider()?;
        self.failure_policy()?;
        self.wait_policy()?;
        if self.request_timeout_secs == 0 {
            return Err(REQUEST_TIMEOUT.invalid("must be greater than zero"));
        }
        Ok(())
    }

    /// Returns the configured credential.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when no API key is configured.
    pub fn credential(&self) -> Result<Credential, ConfigError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| API_KEY.missing())
            .and_then(Credential::new)
    }

    /// Resolves the configured provider.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unknown provider names or invalid base URLs.
    pub fn provider(&self) -> Result<Provider, ConfigError> {
        Provider::from_parts(&self.provider, self.base_url.as_deref())
    }

    /// Parses the configured failure policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for values other than `fail` and
    /// `retry`.
    pub fn failure_policy(&self) -> Result<FailurePolicy, ConfigError> {
        self.failure_policy.parse().map_err(|_| {
            FAILURE_POLICY.invalid(format!(
                "expected 'fail' or 'retry', got '{}'",
                self.failure_policy
            ))
        })
    }

    /// Returns the configured create retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            Duration::from_secs(self.retry_interval_secs),
            self.retry_attempts,
        )
    }

    /// Returns the configured readiness wait policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the timeout or interval is
    /// zero.
    pub fn wait_policy(&self) -> Result<WaitPolicy, ConfigError> {
        if self.wait_timeout_secs == 0 {
            return Err(WAIT_TIMEOUT.invalid("must be greater than zero"));
        }
        if self.wait_interval_secs == 0 {
            return Err(WAIT_INTERVAL.invalid("must be greater than zero"));
        }
        Ok(WaitPolicy::ready_within(
            Duration::from_secs(self.wait_timeout_secs),
            Duration::from_secs(self.wait_interval_secs),
        ))
    }

    /// Validates the configuration and builds a [`Client`] with a dedicated
    /// transport honouring `request_timeout_secs`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when validation fails or the HTTP client cannot
    /// be constructed.
    pub fn build_client(&self) -> Result<Client, ConfigError> {
        self.validate()?;
        let transport =
            ReqwestTransport::with_timeout(Duration::from_secs(self.request_timeout_secs))
                .map_err(|err| REQUEST_TIMEOUT.invalid(err.to_string()))?;
        let api = Api::with_transport(self.provider()?, self.credential()?, transport);
        let mut client = Client::new(api);
        client.set_failure_policy(self.failure_policy()?);
        client.set_retry_policy(self.retry_policy());
        client.set_wait_policy(self.wait_policy()?);
        Ok(client)
    }
}

/// Errors raised during configuration loading and validation.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// Indicates a required configuration field is empty or missing.
    #[error("missing configuration field: {0}")]
    MissingField(String),
    /// Surfaces errors from the `ortho-config` loader.
    #[error("configuration parsing failed: {0}")]
    Parse(String),
    /// Raised when a provider name is not recognised.
    #[error("unknown provider '{0}'")]
    UnknownProvider(String),
    /// Raised when a custom provider base URL is unusable.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// URL as supplied.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
    /// Raised when a request needs a credential and none is available.
    #[error("no API credential configured")]
    MissingCredential,
    /// Raised when a value is present but out of range.
    #[error("invalid {field}: {reason}")]
    InvalidValue {
        /// Field that failed validation.
        field: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl From<ortho_config::OrthoError> for ConfigError {
    fn from(value: ortho_config::OrthoError) -> Self {
        Self::Parse(value.to_string())
    }
}
