//! Client façade holding default apply policies.

use crate::api::Api;
use crate::apply::{ApplyController, FailurePolicy, RetryPolicy, WaitPolicy};
use crate::config::ConfigError;
use crate::instance::InstanceError;
use crate::payload::CreateInstance;
use crate::provider::Provider;
use crate::vultr::VultrInstance;

/// Entry point for script-style callers.
///
/// Controllers minted by [`Client::new_instance`] copy the policies current
/// at that moment; later setter calls do not reach them.
#[derive(Clone, Debug)]
pub struct Client {
    api: Api,
    failure_policy: FailurePolicy,
    retry_policy: RetryPolicy,
    wait_policy: WaitPolicy,
}

impl Client {
    /// Wraps an API handle with default policies.
    #[must_use]
    pub fn new(api: Api) -> Self {
        Self {
            api,
            failure_policy: FailurePolicy::default(),
            retry_policy: RetryPolicy::default(),
            wait_policy: WaitPolicy::default(),
        }
    }

    /// Builds a client for `provider` from the process-wide credential.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] when
    /// [`set_credential`](crate::set_credential) has not been called.
    pub fn from_default_credential(provider: Provider) -> Result<Self, ConfigError> {
        Ok(Self::new(Api::from_default_credential(provider)?))
    }

    /// Underlying API handle for direct adapter calls.
    #[must_use]
    pub const fn api(&self) -> &Api {
        &self.api
    }

    /// Current create failure policy.
    #[must_use]
    pub const fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Current create retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }

    /// Current readiness wait policy used by [`Client::apply`].
    #[must_use]
    pub const fn wait_policy(&self) -> WaitPolicy {
        self.wait_policy
    }

    /// Replaces the failure policy for controllers minted from now on.
    pub const fn set_failure_policy(&mut self, policy: FailurePolicy) {
        self.failure_policy = policy;
    }

    /// Replaces the retry policy for controllers minted from now on.
    pub const fn set_retry_policy(&mut self, policy: RetryPolicy) {
        self.retry_policy = policy;
    }

    /// Replaces the wait policy used by [`Client::apply`].
    pub const fn set_wait_policy(&mut self, policy: WaitPolicy) {
        self.wait_policy = policy;
    }

    /// Prepares an apply controller for `payload` bound to the current
    /// policies.
    #[must_use]
    pub fn new_instance(&self, payload: CreateInstance) -> ApplyController {
        ApplyController::new(VultrInstance::new(self.api.clone(), payload))
            .with_failure_policy(self.failure_policy)
            .with_retry_policy(self.retry_policy)
    }

    /// Creates an instance and waits according to the client's wait policy.
    ///
    /// # Errors
    ///
    /// Propagates every error [`ApplyController::apply`] can return.
    pub async fn apply(&self, payload: CreateInstance) -> Result<VultrInstance, InstanceError> {
        self.new_instance(payload).apply(self.wait_policy).await
    }
}
