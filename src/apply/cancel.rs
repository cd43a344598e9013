//! Cooperative cancellation for long-running apply operations.

use std::future::Future;

use tokio::sync::watch;

use crate::instance::InstanceError;

/// Creates a connected handle and signal.
#[must_use]
pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (sender, receiver) = watch::channel(false);
    (CancelHandle { sender }, CancelSignal { receiver })
}

/// Triggers cancellation. Held by the caller.
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    /// Requests cancellation. Every signal observes it, including signals
    /// cloned after this call.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }
}

/// Observes cancellation. Handed to the apply controller.
#[derive(Clone, Debug)]
pub struct CancelSignal {
    receiver: watch::Receiver<bool>,
}

impl CancelSignal {
    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Resolves once cancellation is requested. Never resolves if the handle
    /// is dropped without cancelling.
    pub async fn cancelled(&mut self) {
        if self.receiver.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Runs `operation` until it finishes or `signal` fires. Cancelling drops the
/// operation, which aborts any request it has in flight.
pub(crate) async fn until_cancelled<T>(
    signal: Option<CancelSignal>,
    operation: impl Future<Output = Result<T, InstanceError>>,
) -> Result<T, InstanceError> {
    let Some(mut signal) = signal else {
        return operation.await;
    };
    tokio::select! {
        biased;
        () = signal.cancelled() => Err(InstanceError::Cancelled),
        outcome = operation => outcome,
    }
}
