//! ISO image adapters.

use super::{Api, ApiResult};
use crate::http::Method;
use crate::payload::{CreateIso, Page};

impl Api {
    /// `GET /iso`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_isos(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "iso")
            .page(page)
            .send()
            .await
    }

    /// `GET /iso-public`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_public_isos(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "iso-public")
            .page(page)
            .send()
            .await
    }

    /// `GET /iso/{iso-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_iso(&self, iso_id: &str) -> ApiResult {
        self.call(Method::Get, "iso/{iso-id}")
            .assign("iso-id", iso_id)
            .send()
            .await
    }

    /// `POST /iso`; the provider answers `202 Accepted`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn create_iso(&self, payload: &CreateIso) -> ApiResult {
        self.call(Method::Post, "iso")
            .payload(payload)
            .send()
            .await
    }

    /// `DELETE /iso/{iso-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn delete_iso(&self, iso_id: &str) -> ApiResult {
        self.call(Method::Delete, "iso/{iso-id}")
            .assign("iso-id", iso_id)
            .send()
            .await
    }
}
