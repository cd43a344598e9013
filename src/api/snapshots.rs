//! Snapshot adapters.

use super::{Api, ApiResult};
use crate::http::Method;
use crate::payload::{CreateSnapshot, CreateSnapshotFromUrl, Page, UpdateSnapshot};

impl Api {
    /// `GET /snapshots`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_snapshots(&self, description: Option<&str>, page: &Page) -> ApiResult {
        self.call(Method::Get, "snapshots")
            .param_opt("description", description)
            .page(page)
            .send()
            .await
    }

    /// `GET /snapshots/{snapshot-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_snapshot(&self, snapshot_id: &str) -> ApiResult {
        self.call(Method::Get, "snapshots/{snapshot-id}")
            .assign("snapshot-id", snapshot_id)
            .send()
            .await
    }

    /// `POST /snapshots`; the provider answers `202 Accepted`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn create_snapshot(&self, payload: &CreateSnapshot) -> ApiResult {
        self.call(Method::Post, "snapshots")
            .payload(payload)
            .send()
            .await
    }

    /// `POST /snapshots/create-from-url`; the provider answers `202 Accepted`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn create_snapshot_from_url(&self, payload: &CreateSnapshotFromUrl) -> ApiResult {
        self.call(Method::Post, "snapshots/create-from-url")
            .payload(payload)
            .send()
            .await
    }

    /// `PUT /snapshots/{snapshot-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn update_snapshot(&self, snapshot_id: &str, payload: &UpdateSnapshot) -> ApiResult {
        self.call(Method::Put, "snapshots/{snapshot-id}")
            .assign("snapshot-id", snapshot_id)
            .payload(payload)
            .send()
            .await
    }

    /// `DELETE /snapshots/{snapshot-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn delete_snapshot(&self, snapshot_id: &str) -> ApiResult {
        self.call(Method::Delete, "snapshots/{snapshot-id}")
            .assign("snapshot-id", snapshot_id)
            .send()
            .await
    }
}
