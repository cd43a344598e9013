//! Virtual file system adapters.

use super::{Api, ApiResult};
use crate::http::Method;
use crate::payload::{CreateVfs, Page, UpdateVfs};

impl Api {
    /// `GET /vfs/regions`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_vfs_regions(&self) -> ApiResult {
        self.call(Method::Get, "vfs/regions")
            .send()
            .await
    }

    /// `GET /vfs`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_vfs(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "vfs")
            .page(page)
            .send()
            .await
    }

    /// `GET /vfs/{vfs-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_vfs(&self, vfs_id: &str) -> ApiResult {
        self.call(Method::Get, "vfs/{vfs-id}")
            .assign("vfs-id", vfs_id)
            .send()
            .await
    }

    /// `POST /vfs`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn create_vfs(&self, payload: &CreateVfs) -> ApiResult {
        self.call(Method::Post, "vfs")
            .payload(payload)
            .send()
            .await
    }

    /// `PUT /vfs/{vfs-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn update_vfs(&self, vfs_id: &str, payload: &UpdateVfs) -> ApiResult {
        self.call(Method::Put, "vfs/{vfs-id}")
            .assign("vfs-id", vfs_id)
            .payload(payload)
            .send()
            .await
    }

    /// `DELETE /vfs/{vfs-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn delete_vfs(&self, vfs_id: &str) -> ApiResult {
        self.call(Method::Delete, "vfs/{vfs-id}")
            .assign("vfs-id", vfs_id)
            .send()
            .await
    }

    /// `GET /vfs/{vfs-id}/attachments`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_vfs_attachments(&self, vfs_id: &str) -> ApiResult {
        self.call(Method::Get, "vfs/{vfs-id}/attachments")
            .assign("vfs-id", vfs_id)
            .send()
            .await
    }

    /// `GET /vfs/{vfs-id}/attachments/{target-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_vfs_attachment(&self, vfs_id: &str, target_id: &str) -> ApiResult {
        self.call(Method::Get, "vfs/{vfs-id}/attachments/{target-id}")
            .assign("vfs-id", vfs_id)
            .assign("target-id", target_id)
            .send()
            .await
    }

    /// `PUT /vfs/{vfs-id}/attachments/{target-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn attach_vfs(&self, vfs_id: &str, target_id: &str) -> ApiResult {
        self.call(Method::Put, "vfs/{vfs-id}/attachments/{target-id}")
            .assign("vfs-id", vfs_id)
            .assign("target-id", target_id)
            .send()
            .await
    }

    /// `DELETE /vfs/{vfs-id}/attachments/{target-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn detach_vfs(&self, vfs_id: &str, target_id: &str) -> ApiResult {
        self.call(Method::Delete, "vfs/{vfs-id}/attachments/{target-id}")
            .assign("vfs-id", vfs_id)
            .assign("target-id", target_id)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{answering, assert_routes, scripted};
    use crate::payload::StorageSize;
    use crate::test_support::ScriptedTransport;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[tokio::test]
    async fn attachment_paths_assign_both_ids(scripted: (Api, ScriptedTransport)) {
        let (api, transport) = scripted;
        transport.push_json(200, json!({"vfs_id": "fs-1", "target_id": "i-9"}));
        transport.push_empty(204);

        api.attach_vfs("fs-1", "i-9").await.expect("scripted");
        api.detach_vfs("fs-1", "i-9").await.expect("scripted");

        let sent = transport.requests();
        let methods: Vec<_> = sent.iter().map(|request| request.method).collect();
        assert_eq!(methods, [Method::Put, Method::Delete]);
        for request in &sent {
            assert_eq!(
                request.url,
                "https://api.vultr.com/v2/vfs/fs-1/attachments/i-9"
            );
        }
    }

    #[rstest]
    #[tokio::test]
    async fn every_adapter_uses_its_route(answering: (Api, ScriptedTransport)) {
        let (api, transport) = answering;

        api.list_vfs_regions().await.expect("scripted");
        api.list_vfs(&Page::new()).await.expect("scripted");
        api.get_vfs("fs-1").await.expect("scripted");
        api.create_vfs(&CreateVfs::new("ewr", "shared", StorageSize::gb(10)))
            .await
            .expect("scripted");
        api.update_vfs("fs-1", &UpdateVfs::new().storage_size(StorageSize::gb(20)))
            .await
            .expect("scripted");
        api.delete_vfs("fs-1").await.expect("scripted");
        api.list_vfs_attachments("fs-1").await.expect("scripted");
        api.get_vfs_attachment("fs-1", "i-9").await.expect("scripted");
        api.attach_vfs("fs-1", "i-9").await.expect("scripted");
        api.detach_vfs("fs-1", "i-9").await.expect("scripted");

        assert_routes(
            &transport,
            &[
                (Method::Get, "vfs/regions", false),
                (Method::Get, "vfs", false),
                (Method::Get, "vfs/fs-1", false),
                (Method::Post, "vfs", true),
                (Method::Put, "vfs/fs-1", true),
                (Method::Delete, "vfs/fs-1", false),
                (Method::Get, "vfs/fs-1/attachments", false),
                (Method::Get, "vfs/fs-1/attachments/i-9", false),
                (Method::Put, "vfs/fs-1/attachments/i-9", false),
                (Method::Delete, "vfs/fs-1/attachments/i-9", false),
            ],
        );
    }
}
