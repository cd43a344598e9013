//! Immutable instance snapshots.

use serde_json::{Map, Value};

use super::InstanceError;

const READY_STATUS: &str = "active";
const READY_SERVER_STATUS: &str = "ok";

/// One observation of an instance as returned by the provider.
///
/// The full `instance` object is kept as provider-specific data; the common
/// fields are lifted out for convenience and default to empty strings when
/// absent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstanceView {
    id: String,
    status: String,
    server_status: String,
    power_status: String,
    region: String,
    main_ip: String,
    label: String,
    plan: String,
    data: Map<String, Value>,
}

impl InstanceView {
    /// Parses the `instance` object of a provider response.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::Protocol`] when `id` is missing, empty, or not
    /// a string.
    pub fn from_json(object: &Map<String, Value>) -> Result<Self, InstanceError> {
        let id = object
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| InstanceError::Protocol(String::from("instance object has no id")))?;
        let text = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned()
        };
        Ok(Self {
            id: id.to_owned(),
            status: text("status"),
            server_status: text("server_status"),
            power_status: text("power_status"),
            region: text("region"),
            main_ip: text("main_ip"),
            label: text("label"),
            plan: text("plan"),
            data: object.clone(),
        })
    }

    /// Extracts the `instance` object from a response body.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::Protocol`] when the body has no `instance`
    /// object or the object has no id.
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, InstanceError> {
        let object = body.get("instance").and_then(Value::as_object).ok_or_else(|| {
            InstanceError::Protocol(String::from("response has no instance object"))
        })?;
        Self::from_json(object)
    }

    /// Provider identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Lifecycle status (`pending`, `active`, `suspended`, ...).
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Server status (`none`, `locked`, `installingbooting`, `ok`, ...).
    #[must_use]
    pub fn server_status(&self) -> &str {
        &self.server_status
    }

    /// Power status (`running` or `stopped`).
    #[must_use]
    pub fn power_status(&self) -> &str {
        &self.power_status
    }

    /// Region the instance lives in.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Main IPv4 address; `0.0.0.0` or empty until assigned.
    #[must_use]
    pub fn main_ip(&self) -> &str {
        &self.main_ip
    }

    /// User-visible label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Plan identifier.
    #[must_use]
    pub fn plan(&self) -> &str {
        &self.plan
    }

    /// The complete `instance` object as returned by the provider.
    #[must_use]
    pub const fn provider_specific_data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Whether the instance is active and its server reports `ok`.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.status == READY_STATUS && self.server_status == READY_SERVER_STATUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn lifts_common_fields() {
        let view = InstanceView::from_json(&object(json!({
            "id": "i-1",
            "status": "pending",
            "server_status": "none",
            "power_status": "stopped",
            "region": "ewr",
            "main_ip": "0.0.0.0",
            "label": "web",
            "plan": "vc2-1c-1gb",
            "vcpu_count": 1,
        })))
        .expect("id present");
        assert_eq!(view.id(), "i-1");
        assert_eq!(view.status(), "pending");
        assert_eq!(view.region(), "ewr");
        assert_eq!(view.plan(), "vc2-1c-1gb");
        assert_eq!(view.provider_specific_data().get("vcpu_count"), Some(&json!(1)));
        assert!(!view.is_ready());
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({"id": ""}))]
    #[case(json!({"id": 42}))]
    fn missing_id_is_a_protocol_error(#[case] body: Value) {
        assert!(matches!(
            InstanceView::from_json(&object(body)),
            Err(InstanceError::Protocol(_))
        ));
    }

    #[test]
    fn missing_instance_object_is_a_protocol_error() {
        assert!(matches!(
            InstanceView::from_body(&object(json!({"instances": []}))),
            Err(InstanceError::Protocol(_))
        ));
    }

    #[rstest]
    #[case("active", "ok", true)]
    #[case("active", "installingbooting", false)]
    #[case("pending", "ok", false)]
    fn readiness_needs_both_statuses(
        #[case] status: &str,
        #[case] server_status: &str,
        #[case] ready: bool,
    ) {
        let view = InstanceView::from_json(&object(json!({
            "id": "i-1",
            "status": status,
            "server_status": server_status,
        })))
        .expect("id present");
        assert_eq!(view.is_ready(), ready);
    }
}
