//! Object storage adapters.

use super::{Api, ApiResult};
use crate::http::Method;
use crate::payload::{CreateObjectStorage, Page, UpdateObjectStorage};

impl Api {
    /// `GET /object-storage`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_object_storage(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "object-storage")
            .page(page)
            .send()
            .await
    }

    /// `GET /object-storage/{object-storage-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_object_storage(&self, object_storage_id: &str) -> ApiResult {
        self.call(Method::Get, "object-storage/{object-storage-id}")
            .assign("object-storage-id", object_storage_id)
            .send()
            .await
    }

    /// `POST /object-storage`; the provider answers `202 Accepted`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn create_object_storage(&self, payload: &CreateObjectStorage) -> ApiResult {
        self.call(Method::Post, "object-storage")
            .payload(payload)
            .send()
            .await
    }

    /// `PUT /object-storage/{object-storage-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn update_object_storage(
        &self,
        object_storage_id: &str,
        payload: &UpdateObjectStorage,
    ) -> ApiResult {
        self.call(Method::Put, "object-storage/{object-storage-id}")
            .assign("object-storage-id", object_storage_id)
            .payload(payload)
            .send()
            .await
    }

    /// `DELETE /object-storage/{object-storage-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn delete_object_storage(&self, object_storage_id: &str) -> ApiResult {
        self.call(Method::Delete, "object-storage/{object-storage-id}")
            .assign("object-storage-id", object_storage_id)
            .send()
            .await
    }

    /// `POST /object-storage/{object-storage-id}/regenerate-keys`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn regenerate_object_storage_keys(&self, object_storage_id: &str) -> ApiResult {
        self.call(Method::Post, "object-storage/{object-storage-id}/regenerate-keys")
            .assign("object-storage-id", object_storage_id)
            .send()
            .await
    }

    /// `GET /object-storage/clusters`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_object_storage_clusters(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "object-storage/clusters")
            .page(page)
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
    async fn update_uses_put(scripted: (Api, ScriptedTransport)) {
        let (api, transport) = scripted;
        transport.push_empty(204);

        api.update_object_storage("os-1", &UpdateObjectStorage::new("backups"))
            .await
            .expect("scripted");

        let sent = transport.requests();
        let request = sent.first().expect("one request");
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, "https://api.vultr.com/v2/object-storage/os-1");
        assert_eq!(request.header("content-type"), Some("application/json"));
    }

    #[rstest]
    #[tokio::test]
    async fn every_adapter_uses_its_route(answering: (Api, ScriptedTransport)) {
        let (api, transport) = answering;
        let page = Page::new();

        api.list_object_storage(&page).await.expect("scripted");
        api.get_object_storage("os-1").await.expect("scripted");
        api.create_object_storage(&CreateObjectStorage::new(2))
            .await
            .expect("scripted");
        api.update_object_storage("os-1", &UpdateObjectStorage::new("backups"))
            .await
            .expect("scripted");
        api.delete_object_storage("os-1").await.expect("scripted");
        api.regenerate_object_storage_keys("os-1")
            .await
            .expect("scripted");
        api.list_object_storage_clusters(&page)
            .await
            .expect("scripted");

        assert_routes(
            &transport,
            &[
                (Method::Get, "object-storage", false),
                (Method::Get, "object-storage/os-1", false),
                (Method::Post, "object-storage", true),
                (Method::Put, "object-storage/os-1", true),
                (Method::Delete, "object-storage/os-1", false),
                (Method::Post, "object-storage/os-1/regenerate-keys", false),
                (Method::Get, "object-storage/clusters", false),
            ],
        );
    }

    #[rstest]
    #[tokio::test]
    async fn regenerated_keys_are_returned(scripted: (Api, ScriptedTransport)) {
        let (api, transport) = scripted;
        transport.push_json(
            201,
            json!({"s3_credentials": {"s3_access_key": "AK", "s3_secret_key": "SK"}}),
        );

        let response = api
            .regenerate_object_storage_keys("os-1")
            .await
            .expect("scripted");

        assert_eq!(response.status, 201);
        assert_eq!(
            response
                .object("s3_credentials")
                .and_then(|keys| keys.get("s3_access_key")),
            Some(&json!("AK"))
        );
    }
}
