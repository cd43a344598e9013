//! Serverless inference adapters.

use super::{Api, ApiResult};
use crate::http::Method;
use crate::payload::{CreateInference, UpdateInference};

impl Api {
    /// `GET /inference`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn list_inference(&self) -> ApiResult {
        self.call(Method::Get, "inference")
            .send()
            .await
    }

    /// `GET /inference/{inference-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_inference(&self, inference_id: &str) -> ApiResult {
        self.call(Method::Get, "inference/{inference-id}")
            .assign("inference-id", inference_id)
            .send()
            .await
    }

    /// `POST /inference`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn create_inference(&self, payload: &CreateInference) -> ApiResult {
        self.call(Method::Post, "inference")
            .payload(payload)
            .send()
            .await
    }

    /// `PATCH /inference/{inference-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn update_inference(
        &self,
        inference_id: &str,
        payload: &UpdateInference,
    ) -> ApiResult {
        self.call(Method::Patch, "inference/{inference-id}")
            .assign("inference-id", inference_id)
            .payload(payload)
            .send()
            .await
    }

    /// `DELETE /inference/{inference-id}`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn delete_inference(&self, inference_id: &str) -> ApiResult {
        self.call(Method::Delete, "inference/{inference-id}")
            .assign("inference-id", inference_id)
            .send()
            .await
    }

    /// `GET /inference/{inference-id}/usage`
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`](crate::http::RequestError) when the request
    /// cannot be sent.
    pub async fn get_inference_usage(&self, inference_id: &str) -> ApiResult {
        self.call(Method::Get, "inference/{inference-id}/usage")
            .assign("inference-id", inference_id)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{answering, assert_routes, scripted};
    use crate::test_support::ScriptedTransport;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[tokio::test]
    async fn every_adapter_uses_its_route(answering: (Api, ScriptedTransport)) {
        let (api, transport) = answering;

        api.list_inference().await.expect("scripted");
        api.get_inference("inf-1").await.expect("scripted");
        api.create_inference(&CreateInference::new("chatbot"))
            .await
            .expect("scripted");
        api.update_inference("inf-1", &UpdateInference::new("chatbot-eu"))
            .await
            .expect("scripted");
        api.delete_inference("inf-1").await.expect("scripted");
        api.get_inference_usage("inf-1").await.expect("scripted");

        assert_routes(
            &transport,
            &[
                (Method::Get, "inference", false),
                (Method::Get, "inference/inf-1", false),
                (Method::Post, "inference", true),
                (Method::Patch, "inference/inf-1", true),
                (Method::Delete, "inference/inf-1", false),
                (Method::Get, "inference/inf-1/usage", false),
            ],
        );
    }

    #[rstest]
    #[tokio::test]
    async fn usage_is_returned_as_data(scripted: (Api, ScriptedTransport)) {
        let (api, transport) = scripted;
        transport.push_json(200, json!({"usage": {"chat": {"current_tokens": 12}}}));

        let response = api.get_inference_usage("inf-1").await.expect("scripted");

        assert_eq!(
            response.object("usage").and_then(|usage| usage.get("chat")),
            Some(&json!({"current_tokens": 12}))
        );
        let sent = transport.requests();
        let request = sent.first().expect("one request");
        assert!(request.params.is_empty());
    }
}
