//! SSH key adapters.

use super::{Api, ApiResult};
use crate::http::Method;
use crate::payload::{CreateSshKey, Page, UpdateSshKey};

impl Api {
    /// `GET /ssh-keys`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_ssh_keys(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "ssh-keys")
            .page(page)
            .send()
            .await
    }

    /// `GET /ssh-keys/{ssh-key-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_ssh_key(&self, ssh_key_id: &str) -> ApiResult {
        self.call(Method::Get, "ssh-keys/{ssh-key-id}")
            .assign("ssh-key-id", ssh_key_id)
            .send()
            .await
    }

    /// `POST /ssh-keys`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn create_ssh_key(&self, payload: &CreateSshKey) -> ApiResult {
        self.call(Method::Post, "ssh-keys")
            .payload(payload)
            .send()
            .await
    }

    /// `PATCH /ssh-keys/{ssh-key-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn update_ssh_key(&self, ssh_key_id: &str, payload: &UpdateSshKey) -> ApiResult {
        self.call(Method::Patch, "ssh-keys/{ssh-key-id}")
            .assign("ssh-key-id", ssh_key_id)
            .payload(payload)
            .send()
            .await
    }

    /// `DELETE /ssh-keys/{ssh-key-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn delete_ssh_key(&self, ssh_key_id: &str) -> ApiResult {
        self.call(Method::Delete, "ssh-keys/{ssh-key-id}")
            .assign("ssh-key-id", ssh_key_id)
            .send()
            .await
    }
}
