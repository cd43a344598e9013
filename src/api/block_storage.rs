//! Block storage adapters.

use super::{Api, ApiResult};
use crate::http::Method;
use crate::payload::{
    AttachBlockStorage, CreateBlockStorage, DetachBlockStorage, Page, UpdateBlockStorage,
};

impl Api {
    /// `GET /blocks`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_block_storage(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "blocks")
            .page(page)
            .send()
            .await
    }

    /// `GET /blocks/{block-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_block_storage(&self, block_id: &str) -> ApiResult {
        self.call(Method::Get, "blocks/{block-id}")
            .assign("block-id", block_id)
            .send()
            .await
    }

    /// `POST /blocks`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn create_block_storage(&self, payload: &CreateBlockStorage) -> ApiResult {
        self.call(Method::Post, "blocks")
            .payload(payload)
            .send()
            .await
    }

    /// `PATCH /blocks/{block-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn update_block_storage(
        &self,
        block_id: &str,
        payload: &UpdateBlockStorage,
    ) -> ApiResult {
        self.call(Method::Patch, "blocks/{block-id}")
            .assign("block-id", block_id)
            .payload(payload)
            .send()
            .await
    }

    /// `DELETE /blocks/{block-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn delete_block_storage(&self, block_id: &str) -> ApiResult {
        self.call(Method::Delete, "blocks/{block-id}")
            .assign("block-id", block_id)
            .send()
            .await
    }

    /// `POST /blocks/{block-id}/attach`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn attach_block_storage(
        &self,
        block_id: &str,
        payload: &AttachBlockStorage,
    ) -> ApiResult {
        self.call(Method::Post, "blocks/{block-id}/attach")
            .assign("block-id", block_id)
            .payload(payload)
            .send()
            .await
    }

    /// `POST /blocks/{block-id}/detach`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn detach_block_storage(
        &self,
        block_id: &str,
        payload: &DetachBlockStorage,
    ) -> ApiResult {
        self.call(Method::Post, "blocks/{block-id}/detach")
            .assign("block-id", block_id)
            .payload(payload)
            .send()
            .await
    }
}
