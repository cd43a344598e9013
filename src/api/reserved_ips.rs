//! Reserved IP adapters.

use super::{Api, ApiResult};
use crate::http::Method;
use crate::payload::{AttachReservedIp, ConvertReservedIp, CreateReservedIp, Page, UpdateReservedIp};

impl Api {
    /// `GET /reserved-ips`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_reserved_ips(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "reserved-ips")
            .page(page)
            .send()
            .await
    }

    /// `GET /reserved-ips/{reserved-ip}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_reserved_ip(&self, reserved_ip: &str) -> ApiResult {
        self.call(Method::Get, "reserved-ips/{reserved-ip}")
            .assign("reserved-ip", reserved_ip)
            .send()
            .await
    }

    /// `POST /reserved-ips`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn create_reserved_ip(&self, payload: &CreateReservedIp) -> ApiResult {
        self.call(Method::Post, "reserved-ips")
            .payload(payload)
            .send()
            .await
    }

    /// `PATCH /reserved-ips/{reserved-ip}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn update_reserved_ip(
        &self,
        reserved_ip: &str,
        payload: &UpdateReservedIp,
    ) -> ApiResult {
        self.call(Method::Patch, "reserved-ips/{reserved-ip}")
            .assign("reserved-ip", reserved_ip)
            .payload(payload)
            .send()
            .await
    }

    /// `DELETE /reserved-ips/{reserved-ip}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn delete_reserved_ip(&self, reserved_ip: &str) -> ApiResult {
        self.call(Method::Delete, "reserved-ips/{reserved-ip}")
            .assign("reserved-ip", reserved_ip)
            .send()
            .await
    }

    /// `POST /reserved-ips/{reserved-ip}/attach`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn attach_reserved_ip(
        &self,
        reserved_ip: &str,
        payload: &AttachReservedIp,
    ) -> ApiResult {
        self.call(Method::Post, "reserved-ips/{reserved-ip}/attach")
            .assign("reserved-ip", reserved_ip)
            .payload(payload)
            .send()
            .await
    }

    /// `POST /reserved-ips/{reserved-ip}/detach`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn detach_reserved_ip(&self, reserved_ip: &str) -> ApiResult {
        self.call(Method::Post, "reserved-ips/{reserved-ip}/detach")
            .assign("reserved-ip", reserved_ip)
            .send()
            .await
    }

    /// `POST /reserved-ips/convert`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn convert_reserved_ip(&self, payload: &ConvertReservedIp) -> ApiResult {
        self.call(Method::Post, "reserved-ips/convert")
            .payload(payload)
            .send()
            .await
    }
}
