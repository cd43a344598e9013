//! User and subaccount adapters.

use super::{Api, ApiResult};
use crate::http::Method;
use crate::payload::{CreateSubaccount, CreateUser, Page, UpdateUser};

impl Api {
    /// `GET /users`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_users(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "users")
            .page(page)
            .send()
            .await
    }

    /// `GET /users/{user-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_user(&self, user_id: &str) -> ApiResult {
        self.call(Method::Get, "users/{user-id}")
            .assign("user-id", user_id)
            .send()
            .await
    }

    /// `POST /users`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn create_user(&self, payload: &CreateUser) -> ApiResult {
        self.call(Method::Post, "users")
            .payload(payload)
            .send()
            .await
    }

    /// `PATCH /users/{user-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn update_user(&self, user_id: &str, payload: &UpdateUser) -> ApiResult {
        self.call(Method::Patch, "users/{user-id}")
            .assign("user-id", user_id)
            .payload(payload)
            .send()
            .await
    }

    /// `DELETE /users/{user-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn delete_user(&self, user_id: &str) -> ApiResult {
        self.call(Method::Delete, "users/{user-id}")
            .assign("user-id", user_id)
            .send()
            .await
    }

    /// `GET /subaccounts`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_subaccounts(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "subaccounts")
            .page(page)
            .send()
            .await
    }

    /// `POST /subaccounts`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn create_subaccount(&self, payload: &CreateSubaccount) -> ApiResult {
        self.call(Method::Post, "subaccounts")
            .payload(payload)
            .send()
            .await
    }
}
