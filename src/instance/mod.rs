//! Provider-agnostic instance contract.
//!
//! [`Instance`] is a flat capability trait: common lifecycle operations are
//! methods, and anything provider-specific goes through
//! [`Instance::execute_action`] with a named [`InstanceAction`].

mod action;
mod error;
mod view;

use std::future::Future;
use std::pin::Pin;

use serde_json::{Map, Value};

use crate::http::Response;
use crate::provider::Provider;

pub use action::InstanceAction;
pub use error::InstanceError;
pub use view::InstanceView;

/// Future returned by instance operations.
pub type InstanceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, InstanceError>> + Send + 'a>>;

/// Lifecycle operations every provider implementation offers.
///
/// Accessors read the most recent snapshot; they return `None` until the
/// instance has been created or fetched.
pub trait Instance: Send + Sync {
    /// Provider identifier, once known.
    fn id(&self) -> Option<&str>;

    /// Provider the instance belongs to.
    fn provider(&self) -> &Provider;

    /// Lifecycle status from the latest snapshot.
    fn status(&self) -> Option<&str>;

    /// Region from the latest snapshot, or the requested region before
    /// creation.
    fn region(&self) -> Option<&str>;

    /// Main IPv4 address from the latest snapshot.
    fn main_ip(&self) -> Option<&str>;

    /// The complete provider object from the latest snapshot.
    fn provider_specific_data(&self) -> Option<&Map<String, Value>>;

    /// Issues the create call and records the initial snapshot.
    fn create(&mut self) -> InstanceFuture<'_, InstanceView>;

    /// Refreshes the snapshot. Yields `None` when the provider no longer
    /// knows the instance.
    fn get(&mut self) -> InstanceFuture<'_, Option<InstanceView>>;

    /// Deletes the instance. Yields `None` on success and the provider's
    /// error message otherwise.
    fn delete(&self) -> InstanceFuture<'_, Option<String>>;

    /// Reboots the instance.
    fn reboot(&self) -> InstanceFuture<'_, ()>;

    /// Powers the instance on.
    fn start(&self) -> InstanceFuture<'_, ()>;

    /// Powers the instance off.
    fn halt(&self) -> InstanceFuture<'_, ()>;

    /// Runs a provider-specific action by name and returns the provider's
    /// response.
    fn execute_action(
        &self,
        name: &str,
        params: &Map<String, Value>,
    ) -> InstanceFuture<'_, Response>;
}
