//! Vultr implementation of the instance contract.
//!
//! [`VultrInstance`] works against any provider speaking the Vultr v2 wire
//! contract, including [`Provider::Custom`] endpoints.

mod lifecycle;

use serde_json::{Map, Value};

use crate::api::Api;
use crate::http::Response;
use crate::instance::{Instance, InstanceAction, InstanceError, InstanceFuture, InstanceView};
use crate::payload::CreateInstance;
use crate::provider::Provider;

use lifecycle::Power;

/// A compute instance managed through the Vultr instances API.
#[derive(Clone, Debug)]
pub struct VultrInstance {
    api: Api,
    payload: Option<CreateInstance>,
    view: Option<InstanceView>,
}

impl VultrInstance {
    /// Prepares an instance that [`Instance::create`] will provision from
    /// `payload`.
    #[must_use]
    pub const fn new(api: Api, payload: CreateInstance) -> Self {
        Self {
            api,
            payload: Some(payload),
            view: None,
        }
    }

    /// Wraps an instance that already exists, for example one found through
    /// [`Api::list_instances`]. Calling [`Instance::create`] on it fails.
    #[must_use]
    pub const fn existing(api: Api, view: InstanceView) -> Self {
        Self {
            api,
            payload: None,
            view: Some(view),
        }
    }

    /// Latest snapshot, if any.
    #[must_use]
    pub const fn view(&self) -> Option<&InstanceView> {
        self.view.as_ref()
    }

    /// API handle used for every call.
    #[must_use]
    pub const fn api(&self) -> &Api {
        &self.api
    }

    /// Create payload, when this instance was prepared for provisioning.
    #[must_use]
    pub const fn payload(&self) -> Option<&CreateInstance> {
        self.payload.as_ref()
    }

    /// Runs an already-parsed action.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::Protocol`] before the instance has an id,
    /// [`InstanceError::Rejected`] on a non-2xx answer, and
    /// [`InstanceError::Request`] when the request cannot be sent.
    pub async fn perform(&self, action: InstanceAction) -> Result<Response, InstanceError> {
        self.run_action(action).await
    }

    pub(crate) fn record(&mut self, view: InstanceView) {
        self.view = Some(view);
    }

    fn require_id(&self) -> Result<&str, InstanceError> {
        self.view.as_ref().map(InstanceView::id).ok_or_else(|| {
            InstanceError::Protocol(String::from("instance has not been created yet"))
        })
    }
}

impl Instance for VultrInstance {
    fn id(&self) -> Option<&str> {
        self.view.as_ref().map(InstanceView::id)
    }

    fn provider(&self) -> &Provider {
        self.api.provider()
    }

    fn status(&self) -> Option<&str> {
        self.view.as_ref().map(InstanceView::status)
    }

    fn region(&self) -> Option<&str> {
        self.view
            .as_ref()
            .map(InstanceView::region)
            .filter(|region| !region.is_empty())
            .or_else(|| self.payload.as_ref().map(CreateInstance::region))
    }

    fn main_ip(&self) -> Option<&str> {
        self.view.as_ref().map(InstanceView::main_ip)
    }

    fn provider_specific_data(&self) -> Option<&Map<String, Value>> {
        self.view.as_ref().map(InstanceView::provider_specific_data)
    }

    fn create(&mut self) -> InstanceFuture<'_, InstanceView> {
        Box::pin(self.provision())
    }

    fn get(&mut self) -> InstanceFuture<'_, Option<InstanceView>> {
        Box::pin(self.refresh())
    }

    fn delete(&self) -> InstanceFuture<'_, Option<String>> {
        Box::pin(self.destroy())
    }

    fn reboot(&self) -> InstanceFuture<'_, ()> {
        Box::pin(self.power(Power::Reboot))
    }

    fn start(&self) -> InstanceFuture<'_, ()> {
        Box::pin(self.power(Power::Start))
    }

    fn halt(&self) -> InstanceFuture<'_, ()> {
        Box::pin(self.power(Power::Halt))
    }

    fn execute_action(
        &self,
        name: &str,
        params: &Map<String, Value>,
    ) -> InstanceFuture<'_, Response> {
        let parsed = InstanceAction::parse(name, params);
        Box::pin(async move { self.run_action(parsed?).await })
    }
}
