//! VPC and VPC 2.0 adapters.

use super::{Api, ApiResult};
use crate::http::Method;
use crate::payload::{CreateVpc, CreateVpc2, Page, UpdateVpc, UpdateVpc2, Vpc2Nodes};

impl Api {
    /// `GET /vpcs`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_vpcs(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "vpcs")
            .page(page)
            .send()
            .await
    }

    /// `GET /vpcs/{vpc-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_vpc(&self, vpc_id: &str) -> ApiResult {
        self.call(Method::Get, "vpcs/{vpc-id}")
            .assign("vpc-id", vpc_id)
            .send()
            .await
    }

    /// `POST /vpcs`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn create_vpc(&self, payload: &CreateVpc) -> ApiResult {
        self.call(Method::Post, "vpcs")
            .payload(payload)
            .send()
            .await
    }

    /// `PUT /vpcs/{vpc-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn update_vpc(&self, vpc_id: &str, payload: &UpdateVpc) -> ApiResult {
        self.call(Method::Put, "vpcs/{vpc-id}")
            .assign("vpc-id", vpc_id)
            .payload(payload)
            .send()
            .await
    }

    /// `DELETE /vpcs/{vpc-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn delete_vpc(&self, vpc_id: &str) -> ApiResult {
        self.call(Method::Delete, "vpcs/{vpc-id}")
            .assign("vpc-id", vpc_id)
            .send()
            .await
    }

    /// `GET /vpc2`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_vpc2(&self, page: &Page) -> ApiResult {
        self.call(Method::Get, "vpc2")
            .page(page)
            .send()
            .await
    }

    /// `GET /vpc2/{vpc-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_vpc2(&self, vpc_id: &str) -> ApiResult {
        self.call(Method::Get, "vpc2/{vpc-id}")
            .assign("vpc-id", vpc_id)
            .send()
            .await
    }

    /// `POST /vpc2`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn create_vpc2(&self, payload: &CreateVpc2) -> ApiResult {
        self.call(Method::Post, "vpc2")
            .payload(payload)
            .send()
            .await
    }

    /// `PUT /vpc2/{vpc-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn update_vpc2(&self, vpc_id: &str, payload: &UpdateVpc2) -> ApiResult {
        self.call(Method::Put, "vpc2/{vpc-id}")
            .assign("vpc-id", vpc_id)
            .payload(payload)
            .send()
            .await
    }

    /// `DELETE /vpc2/{vpc-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn delete_vpc2(&self, vpc_id: &str) -> ApiResult {
        self.call(Method::Delete, "vpc2/{vpc-id}")
            .assign("vpc-id", vpc_id)
            .send()
            .await
    }

    /// `GET /vpc2/{vpc-id}/nodes`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_vpc2_nodes(&self, vpc_id: &str, page: &Page) -> ApiResult {
        self.call(Method::Get, "vpc2/{vpc-id}/nodes")
            .assign("vpc-id", vpc_id)
            .page(page)
            .send()
            .await
    }

    /// `POST /vpc2/{vpc-id}/nodes/attach`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn attach_vpc2_nodes(&self, vpc_id: &str, payload: &Vpc2Nodes) -> ApiResult {
        self.call(Method::Post, "vpc2/{vpc-id}/nodes/attach")
            .assign("vpc-id", vpc_id)
            .payload(payload)
            .send()
            .await
    }

    /// `POST /vpc2/{vpc-id}/nodes/detach`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn detach_vpc2_nodes(&self, vpc_id: &str, payload: &Vpc2Nodes) -> ApiResult {
        self.call(Method::Post, "vpc2/{vpc-id}/nodes/detach")
            .assign("vpc-id", vpc_id)
            .payload(payload)
            .send()
            .await
    }
}
