//! Read-only catalogue adapters: applications, marketplace variables,
//! operating systems, plans, and regions.

use super::{Api, ApiResult};
use crate::http::Method;
use crate::payload::Page;

impl Api {
    /// `GET /applications`, optionally narrowed to `all`, `marketplace`, or `one-click`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_applications(&self, app_type: Option<&str>, page: &Page) -> ApiResult {
        self.call(Method::Get, "applications")
            .param_opt("type", app_type)
            .page(page)
            .send()
            .await
    }

    /// `GET /marketplace/apps/{image-id}/variables`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_marketplace_app_variables(&self, image_id: &str) -> ApiResult {
        self.call(Method::Get, "marketplace/apps/{image-id}/variables")
            .assign("image-id", image_id)
            .send()
            .await
    }

    /// `GET /os`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_os(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "os")
            .page(page)
            .send()
            .await
    }

    /// `GET /plans`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_plans(
        &self,
        plan_type: Option<&str>,
        os: Option<&str>,
        page: &Page,
    ) -> ApiResult {
        self.call(Method::Get, "plans")
            .param_opt("type", plan_type)
            .param_opt("os", os)
            .page(page)
            .send()
            .await
    }

    /// `GET /plans-metal`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_metal_plans(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "plans-metal")
            .page(page)
            .send()
            .await
    }

    /// `GET /regions`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_regions(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "regions")
            .page(page)
            .send()
            .await
    }

    /// `GET /regions/{region-id}/availability`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_region_availability(
        &self,
        region_id: &str,
        plan_type: Option<&str>,
    ) -> ApiResult {
        self.call(Method::Get, "regions/{region-id}/availability")
            .assign("region-id", region_id)
            .param_opt("type", plan_type)
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
    #[case(None, None, 0)]
    #[case(Some("vc2"), None, 1)]
    #[case(Some("vhf"), Some("windows"), 2)]
    #[tokio::test]
    async fn plan_filters_are_sparse(
        scripted: (Api, ScriptedTransport),
        #[case] plan_type: Option<&str>,
        #[case] os: Option<&str>,
        #[case] expected: usize,
    ) {
        let (api, transport) = scripted;
        transport.push_json(200, json!({"plans": []}));

        api.list_plans(plan_type, os, &Page::new())
            .await
            .expect("scripted");

        let sent = transport.requests();
        let request = sent.first().expect("one request");
        assert_eq!(request.url, "https://api.vultr.com/v2/plans");
        assert_eq!(request.params.len(), expected);
        assert_eq!(request.param("type"), plan_type);
        assert_eq!(request.param("os"), os);
    }

    #[rstest]
    #[tokio::test]
    async fn region_availability_assigns_region(scripted: (Api, ScriptedTransport)) {
        let (api, transport) = scripted;
        transport.push_json(200, json!({"available_plans": ["vc2-1c-1gb"]}));

        let response = api
            .list_region_availability("ewr", None)
            .await
            .expect("scripted");
        assert_eq!(response.get("available_plans"), Some(&json!(["vc2-1c-1gb"])));

        let sent = transport.requests();
        let request = sent.first().expect("one request");
        assert_eq!(
            request.url,
            "https://api.vultr.com/v2/regions/ewr/availability"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn every_adapter_uses_its_route(answering: (Api, ScriptedTransport)) {
        let (api, transport) = answering;
        let page = Page::new();

        api.list_applications(Some("marketplace"), &page)
            .await
            .expect("scripted");
        api.list_marketplace_app_variables("docker")
            .await
            .expect("scripted");
        api.list_os(&page).await.expect("scripted");
        api.list_plans(None, None, &page).await.expect("scripted");
        api.list_metal_plans(&page).await.expect("scripted");
        api.list_regions(&page).await.expect("scripted");
        api.list_region_availability("ewr", Some("vc2"))
            .await
            .expect("scripted");

        assert_routes(
            &transport,
            &[
                (Method::Get, "applications", false),
                (Method::Get, "marketplace/apps/docker/variables", false),
                (Method::Get, "os", false),
                (Method::Get, "plans", false),
                (Method::Get, "plans-metal", false),
                (Method::Get, "regions", false),
                (Method::Get, "regions/ewr/availability", false),
            ],
        );
    }
}
