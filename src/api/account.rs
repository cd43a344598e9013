//! Account and billing adapters.

use super::{Api, ApiResult};
use crate::http::Method;
use crate::payload::Page;

impl Api {
    /// `GET /account`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_account(&self) -> ApiResult {
        self.call(Method::Get, "account")
            .send()
            .await
    }

    /// `GET /account/bandwidth`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_account_bandwidth(&self) -> ApiResult {
        self.call(Method::Get, "account/bandwidth")
            .send()
            .await
    }

    /// `GET /billing/history`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_billing_history(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "billing/history")
            .page(page)
            .send()
            .await
    }

    /// `GET /billing/invoices`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_invoices(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "billing/invoices")
            .page(page)
            .send()
            .await
    }

    /// `GET /billing/invoices/{invoice-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_invoice(&self, invoice_id: &str) -> ApiResult {
        self.call(Method::Get, "billing/invoices/{invoice-id}")
            .assign("invoice-id", invoice_id)
            .send()
            .await
    }

    /// `GET /billing/invoices/{invoice-id}/items`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_invoice_items(&self, invoice_id: &str, page: &Page) -> ApiResult {
        self.call(Method::Get, "billing/invoices/{invoice-id}/items")
            .assign("invoice-id", invoice_id)
            .page(page)
            .send()
            .await
    }

    /// `GET /billing/pending-charges`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_pending_charges(&self) -> ApiResult {
        self.call(Method::Get, "billing/pending-charges")
            .send()
            .await
    }
}
