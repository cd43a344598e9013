//! Create-and-wait orchestration.
//!
//! [`ApplyController::apply`] provisions an instance, retrying the create
//! call when the failure policy allows it, then optionally polls until the
//! provider reports the instance ready. Only the create step honours the
//! retry policy; the readiness poll is bounded by the wait policy alone.

mod cancel;
mod policy;
mod wait;

use tokio::time::sleep;

use crate::http::RequestError;
use crate::instance::{InstanceError, InstanceView};
use crate::vultr::VultrInstance;

pub use cancel::{CancelHandle, CancelSignal, cancel_pair};
pub use policy::{FailurePolicy, RetryPolicy, WaitPolicy};

use cancel::until_cancelled;
use wait::wait_until_ready;

/// Drives one instance from nothing to ready.
#[derive(Clone, Debug)]
pub struct ApplyController {
    instance: VultrInstance,
    failure_policy: FailurePolicy,
    retry_policy: RetryPolicy,
    cancel: Option<CancelSignal>,
}

impl ApplyController {
    /// Wraps a prepared instance with the default policies: fail on the
    /// first create error, no retries.
    #[must_use]
    pub fn new(instance: VultrInstance) -> Self {
        Self {
            instance,
            failure_policy: FailurePolicy::default(),
            retry_policy: RetryPolicy::default(),
            cancel: None,
        }
    }

    /// Sets the create failure policy.
    #[must_use]
    pub const fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Sets the create retry policy.
    #[must_use]
    pub const fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Attaches a cancellation signal.
    #[must_use]
    pub fn with_cancel(mut self, signal: CancelSignal) -> Self {
        self.cancel = Some(signal);
        self
    }

    /// The instance this controller will provision.
    #[must_use]
    pub const fn instance(&self) -> &VultrInstance {
        &self.instance
    }

    /// Creates the instance and, when `wait` asks for it, polls until it is
    /// ready.
    ///
    /// The returned instance carries the initial snapshot when not waiting,
    /// and the ready snapshot otherwise.
    ///
    /// # Errors
    ///
    /// - [`InstanceError::Config`] when `wait` has a zero timeout or interval.
    /// - [`InstanceError::CreateFailed`] or [`InstanceError::Request`] when
    ///   the create step fails and the policy does not allow another attempt.
    /// - [`InstanceError::Protocol`] when the create response has no
    ///   instance id.
    /// - [`InstanceError::ReadinessTimeout`] when the instance is not ready
    ///   before the deadline.
    /// - [`InstanceError::Cancelled`] when the cancellation signal fires.
    pub async fn apply(self, wait: WaitPolicy) -> Result<VultrInstance, InstanceError> {
        wait.validate()?;
        let Self {
            mut instance,
            failure_policy,
            retry_policy,
            cancel,
        } = self;
        until_cancelled(cancel, async move {
            let created = create_with_policy(&mut instance, failure_policy, retry_policy).await?;
            if !wait.wait_for_ready() {
                return Ok(instance);
            }
            let ready = wait_until_ready(instance.api(), created.id(), &wait).await?;
            instance.record(ready);
            Ok(instance)
        })
        .await
    }
}

async fn create_with_policy(
    instance: &mut VultrInstance,
    failure_policy: FailurePolicy,
    retry_policy: RetryPolicy,
) -> Result<InstanceView, InstanceError> {
    let budget = match failure_policy {
        FailurePolicy::Fail => 0,
        FailurePolicy::Retry => retry_policy.attempts(),
    };
    let mut retries: u32 = 0;
    loop {
        match instance.provision().await {
            Ok(view) => return Ok(view),
            Err(err) if retries < budget && is_retryable(&err) => {
                retries = retries.saturating_add(1);
                tracing::warn!(
                    error = %err,
                    retry = retries,
                    remaining = budget.saturating_sub(retries),
                    "instance creation failed; retrying"
                );
                sleep(retry_policy.interval()).await;
            }
            Err(err) => return Err(err),
        }
    }
}

const fn is_retryable(error: &InstanceError) -> bool {
    matches!(
        error,
        InstanceError::CreateFailed { .. } | InstanceError::Request(RequestError::Transport(_))
    )
}
