//! Readiness polling.

use tokio::time::{Instant, sleep, timeout};

use super::WaitPolicy;
use crate::api::Api;
use crate::http::RequestError;
use crate::instance::{InstanceError, InstanceView};

const OK: u16 = 200;

/// Why a poll did not yield a ready snapshot.
#[derive(Debug)]
enum NotReady {
    Status(u16),
    Malformed(InstanceError),
    Provisioning { status: String, server_status: String },
    Transport(RequestError),
    TimedOut,
}

/// Polls `get` for `id` every `interval` until the instance is active with
/// server status `ok`, or the policy's timeout elapses on the monotonic
/// clock.
///
/// Non-200 answers, missing or malformed `instance` objects, transport
/// faults, and per-request timeouts count as "not ready yet".
pub(super) async fn wait_until_ready(
    api: &Api,
    id: &str,
    policy: &WaitPolicy,
) -> Result<InstanceView, InstanceError> {
    let started = Instant::now();
    let mut polls: u32 = 0;
    while started.elapsed() < policy.timeout() {
        polls = polls.saturating_add(1);
        match poll_once(api, id, policy).await? {
            Ok(view) => {
                tracing::info!(
                    instance_id = id,
                    polls,
                    elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                    "instance ready"
                );
                return Ok(view);
            }
            Err(NotReady::Transport(err)) => {
                tracing::warn!(instance_id = id, error = %err, "readiness poll failed; retrying");
            }
            Err(NotReady::Malformed(err)) => {
                tracing::warn!(instance_id = id, error = %err, "malformed readiness response");
            }
            Err(NotReady::TimedOut) => {
                tracing::warn!(instance_id = id, "readiness poll timed out");
            }
            Err(NotReady::Status(status)) => {
                tracing::debug!(instance_id = id, status, "readiness poll returned non-200");
            }
            Err(NotReady::Provisioning {
                status,
                server_status,
            }) => {
                tracing::debug!(instance_id = id, %status, %server_status, "instance not ready");
            }
        }
        sleep(policy.interval()).await;
    }
    Err(InstanceError::ReadinessTimeout {
        id: id.to_owned(),
        timeout: policy.timeout(),
    })
}

/// Performs one bounded `get`. Only configuration and template errors are
/// fatal; everything else is reported as [`NotReady`].
async fn poll_once(
    api: &Api,
    id: &str,
    policy: &WaitPolicy,
) -> Result<Result<InstanceView, NotReady>, InstanceError> {
    let response = match timeout(policy.request_timeout(), api.get_instance(id)).await {
        Err(_elapsed) => return Ok(Err(NotReady::TimedOut)),
        Ok(Err(RequestError::Transport(err))) => {
            return Ok(Err(NotReady::Transport(RequestError::Transport(err))));
        }
        Ok(Err(err)) => return Err(err.into()),
        Ok(Ok(response)) => response,
    };
    if response.status != OK {
        return Ok(Err(NotReady::Status(response.status)));
    }
    let view = match InstanceView::from_body(&response.body) {
        Ok(view) => view,
        Err(err) => return Ok(Err(NotReady::Malformed(err))),
    };
    if view.is_ready() {
        Ok(Ok(view))
    } else {
        Ok(Err(NotReady::Provisioning {
            status: view.status().to_owned(),
            server_status: view.server_status().to_owned(),
        }))
    }
}
