//! Test support utilities shared across unit and integration tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::http::{PreparedRequest, Response, Transport, TransportError, TransportFuture};

/// Scripted transport that returns pre-seeded outcomes in FIFO order.
///
/// Every request is recorded before it is answered. When the queue is empty
/// the fallback outcome is returned if one was set, otherwise a connection
/// error. Clones share the same script and recording.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTransport {
    state: Arc<Mutex<ScriptState>>,
}

#[derive(Debug, Default)]
struct ScriptState {
    outcomes: VecDeque<Result<Response, TransportError>>,
    fallback: Option<Result<Response, TransportError>>,
    requests: Vec<PreparedRequest>,
}

impl ScriptedTransport {
    /// Creates a transport with no queued outcomes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ScriptState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queues a response with a JSON body. Non-object bodies become `{}`.
    pub fn push_json(&self, status: u16, body: Value) {
        self.lock()
            .outcomes
            .push_back(Ok(Response::new(status, body)));
    }

    /// Queues a response without content.
    pub fn push_empty(&self, status: u16) {
        self.lock().outcomes.push_back(Ok(Response::empty(status)));
    }

    /// Queues a transport failure.
    pub fn push_error(&self, error: TransportError) {
        self.lock().outcomes.push_back(Err(error));
    }

    /// Answers every request made after the queue drains with a JSON
    /// response.
    #[must_use]
    pub fn with_fallback(self, status: u16, body: Value) -> Self {
        self.lock().fallback = Some(Ok(Response::new(status, body)));
        self
    }

    /// Returns a snapshot of every request sent so far.
    #[must_use]
    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.lock().requests.clone()
    }

    /// Number of queued outcomes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lock().outcomes.len()
    }

    fn next_outcome(&self, request: PreparedRequest) -> Result<Response, TransportError> {
        let mut state = self.lock();
        let url = request.url.clone();
        state.requests.push(request);
        match state.outcomes.pop_front() {
            Some(outcome) => outcome,
            None => state.fallback.clone().unwrap_or_else(|| {
                Err(TransportError::Connect(format!(
                    "no scripted response for {url}"
                )))
            }),
        }
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: PreparedRequest) -> TransportFuture<'_> {
        let outcome = self.next_outcome(request);
        Box::pin(async move { outcome })
    }
}
