//! Private network and reserved address bodies.

use serde::Serialize;

use super::Payload;

/// Body for `POST /vpcs`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CreateVpc {
    region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    v4_subnet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    v4_subnet_mask: Option<u8>,
}

impl CreateVpc {
    /// Starts a VPC in `region`; the provider picks a subnet when none is set.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            description: None,
            v4_subnet: None,
            v4_subnet_mask: None,
        }
    }
}

optional_setters!(CreateVpc {
    /// Free-form description.
    description: String,
    /// IPv4 network address, for example `10.99.0.0`.
    v4_subnet: String,
    /// Prefix length of `v4_subnet`.
    v4_subnet_mask: u8,
});

impl Payload for CreateVpc {}

/// Body for `PUT /vpcs/{vpc-id}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UpdateVpc {
    description: String,
}

impl UpdateVpc {
    /// Replaces the description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl Payload for UpdateVpc {}

/// Body for `POST /vpc2`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CreateVpc2 {
    region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ip_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ip_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix_length: Option<u8>,
}

impl CreateVpc2 {
    /// Starts a VPC 2.0 network in `region`.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            description: None,
            ip_type: None,
            ip_block: None,
            prefix_length: None,
        }
    }
}

optional_setters!(CreateVpc2 {
    /// Free-form description.
    description: String,
    /// Address family; the provider only accepts `v4`.
    ip_type: String,
    /// Network address of the block.
    ip_block: String,
    /// Prefix length of `ip_block`.
    prefix_length: u8,
});

impl Payload for CreateVpc2 {}

/// Body for `PUT /vpc2/{vpc-id}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UpdateVpc2 {
    description: String,
}

impl UpdateVpc2 {
    /// Replaces the description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl Payload for UpdateVpc2 {}

/// Body for the VPC 2.0 node attach and detach endpoints.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Vpc2Nodes {
    nodes: Vec<String>,
}

impl Vpc2Nodes {
    /// Targets the given instance or bare metal ids.
    #[must_use]
    pub fn new<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nodes: nodes.into_iter().map(Into::into).collect(),
        }
    }
}

impl Payload for Vpc2Nodes {}

/// Body for `POST /reserved-ips`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CreateReservedIp {
    region: String,
    ip_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl CreateReservedIp {
    /// Reserves a `v4` or `v6` address in `region`.
    #[must_use]
    pub fn new(region: impl Into<String>, ip_type: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ip_type: ip_type.into(),
            label: None,
        }
    }
}

optional_setters!(CreateReservedIp {
    /// User-visible label.
    label: String,
});

impl Payload for CreateReservedIp {}

/// Body for `PATCH /reserved-ips/{reserved-ip}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UpdateReservedIp {
    label: String,
}

impl UpdateReservedIp {
    /// Replaces the label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Payload for UpdateReservedIp {}

/// Body for `POST /reserved-ips/{reserved-ip}/attach`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AttachReservedIp {
    instance_id: String,
}

impl AttachReservedIp {
    /// Attaches the address to `instance_id`.
    #[must_use]
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
        }
    }
}

impl Payload for AttachReservedIp {}

/// Body for `POST /reserved-ips/convert`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ConvertReservedIp {
    ip_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl ConvertReservedIp {
    /// Converts an instance's existing address into a reserved one.
    #[must_use]
    pub fn new(ip_address: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            label: None,
        }
    }
}

optional_setters!(ConvertReservedIp {
    /// User-visible label.
    label: String,
});

impl Payload for ConvertReservedIp {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Map, Value, json};

    #[test]
    fn vpc_subnet_fields_are_sparse() {
        assert_eq!(
            serde_json::Value::Object(CreateVpc::new("ewr").to_json()),
            json!({"region": "ewr"})
        );
        let body = CreateVpc::new("ewr")
            .v4_subnet("10.99.0.0")
            .v4_subnet_mask(24_u8)
            .to_json();
        assert_eq!(
            serde_json::Value::Object(body),
            json!({"region": "ewr", "v4_subnet": "10.99.0.0", "v4_subnet_mask": 24})
        );
    }

    #[test]
    fn vpc2_nodes_are_listed() {
        assert_eq!(
            serde_json::Value::Object(Vpc2Nodes::new(["i-1", "i-2"]).to_json()),
            json!({"nodes": ["i-1", "i-2"]})
        );
    }

    #[rstest]
    #[case(
        CreateVpc::new("ewr").description("backend").to_json(),
        json!({"region": "ewr", "description": "backend"})
    )]
    #[case(UpdateVpc::new("backend tier").to_json(), json!({"description": "backend tier"}))]
    #[case(CreateVpc2::new("ams").to_json(), json!({"region": "ams"}))]
    #[case(
        CreateVpc2::new("ams")
            .description("mesh")
            .ip_type("v4")
            .ip_block("10.20.0.0")
            .prefix_length(24_u8)
            .to_json(),
        json!({
            "region": "ams",
            "description": "mesh",
            "ip_type": "v4",
            "ip_block": "10.20.0.0",
            "prefix_length": 24,
        })
    )]
    #[case(UpdateVpc2::new("mesh-2").to_json(), json!({"description": "mesh-2"}))]
    #[case(
        CreateReservedIp::new("ewr", "v4").to_json(),
        json!({"region": "ewr", "ip_type": "v4"})
    )]
    #[case(
        CreateReservedIp::new("ewr", "v6").label("edge").to_json(),
        json!({"region": "ewr", "ip_type": "v6", "label": "edge"})
    )]
    #[case(UpdateReservedIp::new("edge-2").to_json(), json!({"label": "edge-2"}))]
    #[case(AttachReservedIp::new("i-1").to_json(), json!({"instance_id": "i-1"}))]
    #[case(
        ConvertReservedIp::new("192.0.2.10").to_json(),
        json!({"ip_address": "192.0.2.10"})
    )]
    #[case(
        ConvertReservedIp::new("192.0.2.10").label("kept").to_json(),
        json!({"ip_address": "192.0.2.10", "label": "kept"})
    )]
    fn bodies_carry_only_set_fields(#[case] body: Map<String, Value>, #[case] expected: Value) {
        assert_eq!(Value::Object(body), expected);
    }
}
