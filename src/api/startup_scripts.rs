//! Startup script adapters.

use super::{Api, ApiResult};
use crate::http::Method;
use crate::payload::{CreateStartupScript, Page, UpdateStartupScript};

impl Api {
    /// `GET /startup-scripts`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_startup_scripts(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "startup-scripts")
            .page(page)
            .send()
            .await
    }

    /// `GET /startup-scripts/{startup-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_startup_script(&self, startup_id: &str) -> ApiResult {
        self.call(Method::Get, "startup-scripts/{startup-id}")
            .assign("startup-id", startup_id)
            .send()
            .await
    }

    /// `POST /startup-scripts`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn create_startup_script(&self, payload: &CreateStartupScript) -> ApiResult {
        self.call(Method::Post, "startup-scripts")
            .payload(payload)
            .send()
            .await
    }

    /// `PATCH /startup-scripts/{startup-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn update_startup_script(
        &self,
        startup_id: &str,
        payload: &UpdateStartupScript,
    ) -> ApiResult {
        self.call(Method::Patch, "startup-scripts/{startup-id}")
            .assign("startup-id", startup_id)
            .payload(payload)
            .send()
            .await
    }

    /// `DELETE /startup-scripts/{startup-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn delete_startup_script(&self, startup_id: &str) -> ApiResult {
        self.call(Method::Delete, "startup-scripts/{startup-id}")
            .assign("startup-id", startup_id)
            .send()
            .await
    }
}
