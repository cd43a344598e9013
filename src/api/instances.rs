//! Compute instance adapters.

use super::{Api, ApiResult};
use crate::http::Method;
use crate::payload::{
    AttachIso, BackupSchedule, CreateInstance, Page, ReinstallInstance, RestoreInstance,
    UpdateInstance, Vpc2Attachment, VpcAttachment,
};

const INSTANCE: &str = "instance-id";

/// Filters accepted by `GET /instances`. Unset filters are omitted from the
/// query string.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InstanceFilter {
    tag: Option<String>,
    label: Option<String>,
    main_ip: Option<String>,
    region: Option<String>,
    firewall_group_id: Option<String>,
    hostname: Option<String>,
}

impl InstanceFilter {
    /// Starts with no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only instances carrying this tag.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Only instances with this label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Only the instance with this main IP address.
    #[must_use]
    pub fn main_ip(mut self, main_ip: impl Into<String>) -> Self {
        self.main_ip = Some(main_ip.into());
        self
    }

    /// Only instances in this region.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Only instances in this firewall group.
    #[must_use]
    pub fn firewall_group_id(mut self, id: impl Into<String>) -> Self {
        self.firewall_group_id = Some(id.into());
        self
    }

    /// Only instances with this hostname.
    #[must_use]
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }
}

impl Api {
    /// `GET /instances`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_instances(&self, filter: &InstanceFilter, page: &Page) -> ApiResult {
        self.call(Method::Get, "instances")
            .param_opt("tag", filter.tag.as_deref())
            .param_opt("label", filter.label.as_deref())
            .param_opt("main_ip", filter.main_ip.as_deref())
            .param_opt("region", filter.region.as_deref())
            .param_opt("firewall_group_id", filter.firewall_group_id.as_deref())
            .param_opt("hostname", filter.hostname.as_deref())
            .page(page)
            .send()
            .await
    }

    /// `GET /instances/{instance-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_instance(&self, instance_id: &str) -> ApiResult {
        self.call(Method::Get, "instances/{instance-id}")
            .assign(INSTANCE, instance_id)
            .send()
            .await
    }

    /// `POST /instances`; the provider answers `202 Accepted`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn create_instance(&self, payload: &CreateInstance) -> ApiResult {
        self.call(Method::Post, "instances")
            .payload(payload)
            .send()
            .await
    }

    /// `PATCH /instances/{instance-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn update_instance(&self, instance_id: &str, payload: &UpdateInstance) -> ApiResult {
        self.call(Method::Patch, "instances/{instance-id}")
            .assign(INSTANCE, instance_id)
            .payload(payload)
            .send()
            .await
    }

    /// `DELETE /instances/{instance-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn delete_instance(&self, instance_id: &str) -> ApiResult {
        self.call(Method::Delete, "instances/{instance-id}")
            .assign(INSTANCE, instance_id)
            .send()
            .await
    }

    /// `POST /instances/{instance-id}/reboot`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn reboot_instance(&self, instance_id: &str) -> ApiResult {
        self.instance_action(instance_id, "instances/{instance-id}/reboot")
            .await
    }

    /// `POST /instances/{instance-id}/start`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn start_instance(&self, instance_id: &str) -> ApiResult {
        self.instance_action(instance_id, "instances/{instance-id}/start")
            .await
    }

    /// `POST /instances/{instance-id}/halt`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn halt_instance(&self, instance_id: &str) -> ApiResult {
        self.instance_action(instance_id, "instances/{instance-id}/halt")
            .await
    }

    /// `POST /instances/{instance-id}/reinstall`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn reinstall_instance(
        &self,
        instance_id: &str,
        payload: &ReinstallInstance,
    ) -> ApiResult {
        self.call(Method::Post, "instances/{instance-id}/reinstall")
            .assign(INSTANCE, instance_id)
            .payload(payload)
            .send()
            .await
    }

    /// `GET /instances/{instance-id}/bandwidth`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_instance_bandwidth(&self, instance_id: &str) -> ApiResult {
        self.instance_get(instance_id, "instances/{instance-id}/bandwidth")
            .await
    }

    /// `GET /instances/{instance-id}/neighbors`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_instance_neighbors(&self, instance_id: &str) -> ApiResult {
        self.instance_get(instance_id, "instances/{instance-id}/neighbors")
            .await
    }

    /// `GET /instances/{instance-id}/ipv4`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_instance_ipv4(
        &self,
        instance_id: &str,
        public_network: Option<bool>,
        page: &Page,
    ) -> ApiResult {
        self.call(Method::Get, "instances/{instance-id}/ipv4")
            .assign(INSTANCE, instance_id)
            .param_opt("public_network", public_network)
            .page(page)
            .send()
            .await
    }

    /// `GET /instances/{instance-id}/user-data`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_instance_user_data(&self, instance_id: &str) -> ApiResult {
        self.instance_get(instance_id, "instances/{instance-id}/user-data")
            .await
    }

    /// `GET /instances/{instance-id}/upgrades`, optionally narrowed to one
    /// upgrade type (`all`, `applications`, `os`, or `plans`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_instance_upgrades(
        &self,
        instance_id: &str,
        upgrade_type: Option<&str>,
    ) -> ApiResult {
        self.call(Method::Get, "instances/{instance-id}/upgrades")
            .assign(INSTANCE, instance_id)
            .param_opt("type", upgrade_type)
            .send()
            .await
    }

    /// `GET /instances/{instance-id}/backup-schedule`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_backup_schedule(&self, instance_id: &str) -> ApiResult {
        self.instance_get(instance_id, "instances/{instance-id}/backup-schedule")
            .await
    }

    /// `POST /instances/{instance-id}/backup-schedule`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn set_backup_schedule(
        &self,
        instance_id: &str,
        payload: &BackupSchedule,
    ) -> ApiResult {
        self.call(Method::Post, "instances/{instance-id}/backup-schedule")
            .assign(INSTANCE, instance_id)
            .payload(payload)
            .send()
            .await
    }

    /// `GET /instances/{instance-id}/iso`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_iso_status(&self, instance_id: &str) -> ApiResult {
        self.instance_get(instance_id, "instances/{instance-id}/iso")
            .await
    }

    /// `POST /instances/{instance-id}/iso/attach`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn attach_iso(&self, instance_id: &str, payload: &AttachIso) -> ApiResult {
        self.call(Method::Post, "instances/{instance-id}/iso/attach")
            .assign(INSTANCE, instance_id)
            .payload(payload)
            .send()
            .await
    }

    /// `POST /instances/{instance-id}/iso/detach`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn detach_iso(&self, instance_id: &str) -> ApiResult {
        self.instance_action(instance_id, "instances/{instance-id}/iso/detach")
            .await
    }

    /// `POST /instances/{instance-id}/restore`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn restore_instance(&self, instance_id: &str, payload: &RestoreInstance) -> ApiResult {
        self.call(Method::Post, "instances/{instance-id}/restore")
            .assign(INSTANCE, instance_id)
            .payload(payload)
            .send()
            .await
    }

    /// `GET /instances/{instance-id}/vpcs`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_instance_vpcs(&self, instance_id: &str, page: &Page) -> ApiResult {
        self.call(Method::Get, "instances/{instance-id}/vpcs")
            .assign(INSTANCE, instance_id)
            .page(page)
            .send()
            .await
    }

    /// `POST /instances/{instance-id}/vpcs/attach`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn attach_vpc(&self, instance_id: &str, payload: &VpcAttachment) -> ApiResult {
        self.call(Method::Post, "instances/{instance-id}/vpcs/attach")
            .assign(INSTANCE, instance_id)
            .payload(payload)
            .send()
            .await
    }

    /// `POST /instances/{instance-id}/vpcs/detach`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn detach_vpc(&self, instance_id: &str, payload: &VpcAttachment) -> ApiResult {
        self.call(Method::Post, "instances/{instance-id}/vpcs/detach")
            .assign(INSTANCE, instance_id)
            .payload(payload)
            .send()
            .await
    }

    /// `GET /instances/{instance-id}/vpc2`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_instance_vpc2(&self, instance_id: &str, page: &Page) -> ApiResult {
        self.call(Method::Get, "instances/{instance-id}/vpc2")
            .assign(INSTANCE, instance_id)
            .page(page)
            .send()
            .await
    }

    /// `POST /instances/{instance-id}/vpc2/attach`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn attach_vpc2(&self, instance_id: &str, payload: &Vpc2Attachment) -> ApiResult {
        self.call(Method::Post, "instances/{instance-id}/vpc2/attach")
            .assign(INSTANCE, instance_id)
            .payload(payload)
            .send()
            .await
    }

    /// `POST /instances/{instance-id}/vpc2/detach`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn detach_vpc2(&self, instance_id: &str, payload: &Vpc2Attachment) -> ApiResult {
        self.call(Method::Post, "instances/{instance-id}/vpc2/detach")
            .assign(INSTANCE, instance_id)
            .payload(payload)
            .send()
            .await
    }

    async fn instance_get(&self, instance_id: &str, path: &str) -> ApiResult {
        self.call(Method::Get, path)
            .assign(INSTANCE, instance_id)
            .send()
            .await
    }

    async fn instance_action(&self, instance_id: &str, path: &str) -> ApiResult {
        self.call(Method::Post, path)
            .assign(INSTANCE, instance_id)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{answering, assert_routes, scripted};
    use crate::test_support::ScriptedTransport;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[tokio::test]
    async fn list_sends_only_set_filters(scripted: (Api, ScriptedTransport)) {
        let (api, transport) = scripted;
        transport.push_json(200, json!({"instances": [], "meta": {"total": 0}}));

        let filter = InstanceFilter::new().region("ewr").tag("web");
        let response = api
            .list_instances(&filter, &Page::new().per_page(10))
            .await
            .expect("scripted");
        assert_eq!(response.status, 200);

        let sent = transport.requests();
        let request = sent.first().expect("one request");
        assert_eq!(request.url, "https://api.vultr.com/v2/instances");
        assert_eq!(request.param("region"), Some("ewr"));
        assert_eq!(request.param("tag"), Some("web"));
        assert_eq!(request.param("per_page"), Some("10"));
        assert_eq!(request.params.len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn power_actions_post_without_body(scripted: (Api, ScriptedTransport)) {
        let (api, transport) = scripted;
        transport.push_empty(204);
        transport.push_empty(204);
        transport.push_empty(204);

        api.reboot_instance("abc123").await.expect("scripted");
        api.start_instance("abc123").await.expect("scripted");
        api.halt_instance("abc123").await.expect("scripted");

        let urls: Vec<_> = transport
            .requests()
            .into_iter()
            .map(|request| {
                assert_eq!(request.method, Method::Post);
                assert!(request.body.is_none());
                request.url
            })
            .collect();
        assert_eq!(
            urls,
            [
                "https://api.vultr.com/v2/instances/abc123/reboot",
                "https://api.vultr.com/v2/instances/abc123/start",
                "https://api.vultr.com/v2/instances/abc123/halt",
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn error_statuses_are_returned_as_data(scripted: (Api, ScriptedTransport)) {
        let (api, transport) = scripted;
        transport.push_json(404, json!({"error": "Invalid instance-id.", "status": 404}));

        let response = api.get_instance("missing").await.expect("404 is not an error");
        assert_eq!(response.status, 404);
        assert_eq!(response.error_message(), "Invalid instance-id.");
    }

    #[rstest]
    #[tokio::test]
    async fn vpc2_attach_posts_payload(scripted: (Api, ScriptedTransport)) {
        let (api, transport) = scripted;
        transport.push_empty(204);

        api.attach_vpc2("i-1", &Vpc2Attachment::new("vpc2-1").ip_address("10.0.0.5"))
            .await
            .expect("scripted");

        let sent = transport.requests();
        let request = sent.first().expect("one request");
        assert_eq!(request.url, "https://api.vultr.com/v2/instances/i-1/vpc2/attach");
        assert_eq!(
            request.body.clone().map(serde_json::Value::Object),
            Some(json!({"vpc_id": "vpc2-1", "ip_address": "10.0.0.5"}))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn every_adapter_uses_its_route(answering: (Api, ScriptedTransport)) {
        let (api, transport) = answering;
        let page = Page::new();

        api.list_instances(&InstanceFilter::new(), &page)
            .await
            .expect("scripted");
        api.get_instance("i-1").await.expect("scripted");
        api.create_instance(&CreateInstance::new("ewr", "vc2-1c-1gb"))
            .await
            .expect("scripted");
        api.update_instance("i-1", &UpdateInstance::new().label("web-2"))
            .await
            .expect("scripted");
        api.delete_instance("i-1").await.expect("scripted");
        api.reboot_instance("i-1").await.expect("scripted");
        api.start_instance("i-1").await.expect("scripted");
        api.halt_instance("i-1").await.expect("scripted");
        api.reinstall_instance("i-1", &ReinstallInstance::new())
            .await
            .expect("scripted");
        api.get_instance_bandwidth("i-1").await.expect("scripted");
        api.list_instance_neighbors("i-1").await.expect("scripted");
        api.list_instance_ipv4("i-1", Some(true), &page)
            .await
            .expect("scripted");
        api.get_instance_user_data("i-1").await.expect("scripted");
        api.get_instance_upgrades("i-1", None).await.expect("scripted");
        api.get_backup_schedule("i-1").await.expect("scripted");
        api.set_backup_schedule("i-1", &BackupSchedule::new("daily").hour(3_u8))
            .await
            .expect("scripted");
        api.get_iso_status("i-1").await.expect("scripted");
        api.attach_iso("i-1", &AttachIso::new("iso-1"))
            .await
            .expect("scripted");
        api.detach_iso("i-1").await.expect("scripted");
        api.restore_instance("i-1", &RestoreInstance::Snapshot(String::from("snap-1")))
            .await
            .expect("scripted");
        api.list_instance_vpcs("i-1", &page).await.expect("scripted");
        api.attach_vpc("i-1", &VpcAttachment::new("vpc-1"))
            .await
            .expect("scripted");
        api.detach_vpc("i-1", &VpcAttachment::new("vpc-1"))
            .await
            .expect("scripted");
        api.list_instance_vpc2("i-1", &page).await.expect("scripted");
        api.attach_vpc2("i-1", &Vpc2Attachment::new("vpc2-1"))
            .await
            .expect("scripted");
        api.detach_vpc2("i-1", &Vpc2Attachment::new("vpc2-1"))
            .await
            .expect("scripted");

        assert_routes(
            &transport,
            &[
                (Method::Get, "instances", false),
                (Method::Get, "instances/i-1", false),
                (Method::Post, "instances", true),
                (Method::Patch, "instances/i-1", true),
                (Method::Delete, "instances/i-1", false),
                (Method::Post, "instances/i-1/reboot", false),
                (Method::Post, "instances/i-1/start", false),
                (Method::Post, "instances/i-1/halt", false),
                (Method::Post, "instances/i-1/reinstall", true),
                (Method::Get, "instances/i-1/bandwidth", false),
                (Method::Get, "instances/i-1/neighbors", false),
                (Method::Get, "instances/i-1/ipv4", false),
                (Method::Get, "instances/i-1/user-data", false),
                (Method::Get, "instances/i-1/upgrades", false),
                (Method::Get, "instances/i-1/backup-schedule", false),
                (Method::Post, "instances/i-1/backup-schedule", true),
                (Method::Get, "instances/i-1/iso", false),
                (Method::Post, "instances/i-1/iso/attach", true),
                (Method::Post, "instances/i-1/iso/detach", false),
                (Method::Post, "instances/i-1/restore", true),
                (Method::Get, "instances/i-1/vpcs", false),
                (Method::Post, "instances/i-1/vpcs/attach", true),
                (Method::Post, "instances/i-1/vpcs/detach", true),
                (Method::Get, "instances/i-1/vpc2", false),
                (Method::Post, "instances/i-1/vpc2/attach", true),
                (Method::Post, "instances/i-1/vpc2/detach", true),
            ],
        );
    }
}
