//! Failure, retry, and wait policies for the apply controller.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::config::ConfigError;

const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(300);
const DEFAULT_WAIT_INTERVAL: Duration = Duration::from_secs(5);

/// What the controller does when the create call fails.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FailurePolicy {
    /// Surface the first failure.
    #[default]
    Fail,
    /// Retry according to the [`RetryPolicy`].
    Retry,
}

impl FromStr for FailurePolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "retry" => Ok(Self::Retry),
            other => Err(ConfigError::InvalidValue {
                field: String::from("failure policy"),
                reason: format!("expected 'fail' or 'retry', got '{other}'"),
            }),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fail => "fail",
            Self::Retry => "retry",
        })
    }
}

/// How often, and how many extra times, a failed create is retried.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RetryPolicy {
    interval: Duration,
    attempts: u32,
}

impl RetryPolicy {
    /// Retries up to `attempts` additional times, sleeping `interval`
    /// between attempts.
    #[must_use]
    pub const fn new(interval: Duration, attempts: u32) -> Self {
        Self { interval, attempts }
    }

    /// Pause between attempts.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Additional attempts after the first.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Whether `apply` waits for readiness, and for how long.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WaitPolicy {
    wait_for_ready: bool,
    timeout: Duration,
    interval: Duration,
}

impl WaitPolicy {
    /// Polls every `interval` until the instance is ready or `timeout`
    /// elapses.
    #[must_use]
    pub const fn ready_within(timeout: Duration, interval: Duration) -> Self {
        Self {
            wait_for_ready: true,
            timeout,
            interval,
        }
    }

    /// Returns the initial snapshot without polling.
    #[must_use]
    pub const fn no_wait() -> Self {
        Self {
            wait_for_ready: false,
            timeout: DEFAULT_WAIT_TIMEOUT,
            interval: DEFAULT_WAIT_INTERVAL,
        }
    }

    /// Whether the controller polls for readiness.
    #[must_use]
    pub const fn wait_for_ready(&self) -> bool {
        self.wait_for_ready
    }

    /// Overall readiness deadline.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Pause between polls.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Per-poll request timeout: nine tenths of the interval, always
    /// strictly shorter than the interval itself.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.interval.saturating_mul(9) / 10
    }

    /// Rejects a waiting policy with a zero timeout, a zero interval, or an
    /// interval too short to leave a non-zero per-poll request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.wait_for_ready {
            return Ok(());
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: String::from("wait timeout"),
                reason: String::from("must be greater than zero"),
            });
        }
        if self.interval.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: String::from("wait interval"),
                reason: String::from("must be greater than zero"),
            });
        }
        if self.request_timeout().is_zero() {
            return Err(ConfigError::InvalidValue {
                field: String::from("wait interval"),
                reason: format!(
                    "{:?} leaves no time for a readiness request",
                    self.interval
                ),
            });
        }
        Ok(())
    }
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self::ready_within(DEFAULT_WAIT_TIMEOUT, DEFAULT_WAIT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("fail", FailurePolicy::Fail)]
    #[case("RETRY", FailurePolicy::Retry)]
    #[case(" retry ", FailurePolicy::Retry)]
    fn parses_failure_policies(#[case] raw: &str, #[case] expected: FailurePolicy) {
        assert_eq!(raw.parse::<FailurePolicy>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_failure_policy() {
        assert!(matches!(
            "sometimes".parse::<FailurePolicy>(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn defaults_match_documented_values() {
        assert_eq!(FailurePolicy::default(), FailurePolicy::Fail);
        assert_eq!(RetryPolicy::default(), RetryPolicy::new(Duration::ZERO, 0));
        let wait = WaitPolicy::default();
        assert!(wait.wait_for_ready());
        assert_eq!(wait.timeout(), Duration::from_secs(300));
        assert_eq!(wait.interval(), Duration::from_secs(5));
    }

    #[rstest]
    #[case(Duration::from_secs(1))]
    #[case(Duration::from_secs(5))]
    #[case(Duration::from_millis(250))]
    fn request_timeout_is_shorter_than_interval(#[case] interval: Duration) {
        let policy = WaitPolicy::ready_within(Duration::from_secs(30), interval);
        assert!(policy.request_timeout() < interval);
        assert!(!policy.request_timeout().is_zero());
    }

    #[rstest]
    #[case(Duration::ZERO, Duration::from_secs(1))]
    #[case(Duration::from_secs(30), Duration::ZERO)]
    fn zero_durations_are_rejected(#[case] timeout: Duration, #[case] interval: Duration) {
        assert!(WaitPolicy::ready_within(timeout, interval).validate().is_err());
    }

    #[rstest]
    #[case(Duration::from_nanos(1))]
    #[case(Duration::from_nanos(0))]
    fn interval_without_request_budget_is_rejected(#[case] interval: Duration) {
        let error = WaitPolicy::ready_within(Duration::from_secs(30), interval)
            .validate()
            .expect_err("interval too short to poll");
        assert!(matches!(
            error,
            ConfigError::InvalidValue { ref field, .. } if field == "wait interval"
        ));
    }

    #[test]
    fn shortest_usable_interval_is_accepted() {
        let policy = WaitPolicy::ready_within(Duration::from_secs(30), Duration::from_nanos(2));
        assert_eq!(policy.request_timeout(), Duration::from_nanos(1));
        assert_eq!(policy.validate(), Ok(()));
    }

    #[test]
    fn no_wait_policy_is_always_valid() {
        assert_eq!(WaitPolicy::no_wait().validate(), Ok(()));
    }
}
