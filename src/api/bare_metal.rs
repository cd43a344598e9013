//! Bare metal server adapters.

use super::{Api, ApiResult};
use crate::http::Method;
use crate::payload::{CreateBareMetal, Page, ReinstallInstance, UpdateBareMetal};

impl Api {
    /// `GET /bare-metals`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_bare_metals(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "bare-metals")
            .page(page)
            .send()
            .await
    }

    /// `GET /bare-metals/{baremetal-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_bare_metal(&self, baremetal_id: &str) -> ApiResult {
        self.call(Method::Get, "bare-metals/{baremetal-id}")
            .assign("baremetal-id", baremetal_id)
            .send()
            .await
    }

    /// `POST /bare-metals`; the provider answers `202 Accepted`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn create_bare_metal(&self, payload: &CreateBareMetal) -> ApiResult {
        self.call(Method::Post, "bare-metals")
            .payload(payload)
            .send()
            .await
    }

    /// `PATCH /bare-metals/{baremetal-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn update_bare_metal(
        &self,
        baremetal_id: &str,
        payload: &UpdateBareMetal,
    ) -> ApiResult {
        self.call(Method::Patch, "bare-metals/{baremetal-id}")
            .assign("baremetal-id", baremetal_id)
            .payload(payload)
            .send()
            .await
    }

    /// `DELETE /bare-metals/{baremetal-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn delete_bare_metal(&self, baremetal_id: &str) -> ApiResult {
        self.call(Method::Delete, "bare-metals/{baremetal-id}")
            .assign("baremetal-id", baremetal_id)
            .send()
            .await
    }

    /// `POST /bare-metals/{baremetal-id}/reboot`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn reboot_bare_metal(&self, baremetal_id: &str) -> ApiResult {
        self.call(Method::Post, "bare-metals/{baremetal-id}/reboot")
            .assign("baremetal-id", baremetal_id)
            .send()
            .await
    }

    /// `POST /bare-metals/{baremetal-id}/start`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn start_bare_metal(&self, baremetal_id: &str) -> ApiResult {
        self.call(Method::Post, "bare-metals/{baremetal-id}/start")
            .assign("baremetal-id", baremetal_id)
            .send()
            .await
    }

    /// `POST /bare-metals/{baremetal-id}/halt`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn halt_bare_metal(&self, baremetal_id: &str) -> ApiResult {
        self.call(Method::Post, "bare-metals/{baremetal-id}/halt")
            .assign("baremetal-id", baremetal_id)
            .send()
            .await
    }

    /// `POST /bare-metals/{baremetal-id}/reinstall`; takes the same body as an instance reinstall.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn reinstall_bare_metal(
        &self,
        baremetal_id: &str,
        payload: &ReinstallInstance,
    ) -> ApiResult {
        self.call(Method::Post, "bare-metals/{baremetal-id}/reinstall")
            .assign("baremetal-id", baremetal_id)
            .payload(payload)
            .send()
            .await
    }

    /// `GET /bare-metals/{baremetal-id}/bandwidth`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_bare_metal_bandwidth(&self, baremetal_id: &str) -> ApiResult {
        self.call(Method::Get, "bare-metals/{baremetal-id}/bandwidth")
            .assign("baremetal-id", baremetal_id)
            .send()
            .await
    }

    /// `GET /bare-metals/{baremetal-id}/ipv4`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_bare_metal_ipv4(&self, baremetal_id: &str) -> ApiResult {
        self.call(Method::Get, "bare-metals/{baremetal-id}/ipv4")
            .assign("baremetal-id", baremetal_id)
            .send()
            .await
    }

    /// `GET /bare-metals/{baremetal-id}/ipv6`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_bare_metal_ipv6(&self, baremetal_id: &str) -> ApiResult {
        self.call(Method::Get, "bare-metals/{baremetal-id}/ipv6")
            .assign("baremetal-id", baremetal_id)
            .send()
            .await
    }

    /// `GET /bare-metals/{baremetal-id}/user-data`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_bare_metal_user_data(&self, baremetal_id: &str) -> ApiResult {
        self.call(Method::Get, "bare-metals/{baremetal-id}/user-data")
            .assign("baremetal-id", baremetal_id)
            .send()
            .await
    }

    /// `GET /bare-metals/{baremetal-id}/upgrades`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_bare_metal_upgrades(
        &self,
        baremetal_id: &str,
        upgrade_type: Option<&str>,
    ) -> ApiResult {
        self.call(Method::Get, "bare-metals/{baremetal-id}/upgrades")
            .assign("baremetal-id", baremetal_id)
            .param_opt("type", upgrade_type)
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
    async fn create_posts_to_collection(scripted: (Api, ScriptedTransport)) {
        let (api, transport) = scripted;
        transport.push_json(202, json!({"bare_metal": {"id": "bm-1"}}));

        let response = api
            .create_bare_metal(&CreateBareMetal::new("ams", "vbm-4c-32gb"))
            .await
            .expect("scripted");
        assert_eq!(response.status, 202);

        let sent = transport.requests();
        let request = sent.first().expect("one request");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "https://api.vultr.com/v2/bare-metals");
    }

    #[rstest]
    #[tokio::test]
    async fn upgrades_filter_by_type(scripted: (Api, ScriptedTransport)) {
        let (api, transport) = scripted;
        transport.push_json(200, json!({"upgrades": {}}));

        api.get_bare_metal_upgrades("bm-1", Some("os"))
            .await
            .expect("scripted");

        let sent = transport.requests();
        let request = sent.first().expect("one request");
        assert_eq!(
            request.url,
            "https://api.vultr.com/v2/bare-metals/bm-1/upgrades"
        );
        assert_eq!(request.param("type"), Some("os"));
    }

    #[rstest]
    #[tokio::test]
    async fn every_adapter_uses_its_route(answering: (Api, ScriptedTransport)) {
        let (api, transport) = answering;

        api.list_bare_metals(&Page::new()).await.expect("scripted");
        api.get_bare_metal("bm-1").await.expect("scripted");
        api.create_bare_metal(&CreateBareMetal::new("ams", "vbm-4c-32gb"))
            .await
            .expect("scripted");
        api.update_bare_metal("bm-1", &UpdateBareMetal::new().label("db-1"))
            .await
            .expect("scripted");
        api.delete_bare_metal("bm-1").await.expect("scripted");
        api.reboot_bare_metal("bm-1").await.expect("scripted");
        api.start_bare_metal("bm-1").await.expect("scripted");
        api.halt_bare_metal("bm-1").await.expect("scripted");
        api.reinstall_bare_metal("bm-1", &ReinstallInstance::new())
            .await
            .expect("scripted");
        api.get_bare_metal_bandwidth("bm-1").await.expect("scripted");
        api.list_bare_metal_ipv4("bm-1").await.expect("scripted");
        api.list_bare_metal_ipv6("bm-1").await.expect("scripted");
        api.get_bare_metal_user_data("bm-1").await.expect("scripted");
        api.get_bare_metal_upgrades("bm-1", None).await.expect("scripted");

        assert_routes(
            &transport,
            &[
                (Method::Get, "bare-metals", false),
                (Method::Get, "bare-metals/bm-1", false),
                (Method::Post, "bare-metals", true),
                (Method::Patch, "bare-metals/bm-1", true),
                (Method::Delete, "bare-metals/bm-1", false),
                (Method::Post, "bare-metals/bm-1/reboot", false),
                (Method::Post, "bare-metals/bm-1/start", false),
                (Method::Post, "bare-metals/bm-1/halt", false),
                (Method::Post, "bare-metals/bm-1/reinstall", true),
                (Method::Get, "bare-metals/bm-1/bandwidth", false),
                (Method::Get, "bare-metals/bm-1/ipv4", false),
                (Method::Get, "bare-metals/bm-1/ipv6", false),
                (Method::Get, "bare-metals/bm-1/user-data", false),
                (Method::Get, "bare-metals/bm-1/upgrades", false),
            ],
        );
    }
}
