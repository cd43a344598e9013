//! Bodies for images and boot material: snapshots, ISOs, SSH keys, and
//! startup scripts.

use serde::Serialize;

use super::{Payload, encode_base64};

/// Body for `POST /snapshots`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CreateSnapshot {
    instance_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl CreateSnapshot {
    /// Snapshots the given instance.
    #[must_use]
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            description: None,
        }
    }
}

optional_setters!(CreateSnapshot {
    /// Free-form description.
    description: String,
});

impl Payload for CreateSnapshot {}

/// Body for `POST /snapshots/create-from-url`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CreateSnapshotFromUrl {
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl CreateSnapshotFromUrl {
    /// Imports a raw disk image from `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: None,
        }
    }
}

optional_setters!(CreateSnapshotFromUrl {
    /// Free-form description.
    description: String,
});

impl Payload for CreateSnapshotFromUrl {}

/// Body for `PUT /snapshots/{snapshot-id}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UpdateSnapshot {
    description: String,
}

impl UpdateSnapshot {
    /// Replaces the description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl Payload for UpdateSnapshot {}

/// Body for `POST /iso`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CreateIso {
    url: String,
}

impl CreateIso {
    /// Downloads an ISO from `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Payload for CreateIso {}

/// Body for `POST /ssh-keys`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CreateSshKey {
    name: String,
    ssh_key: String,
}

impl CreateSshKey {
    /// Registers a public key under `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, ssh_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ssh_key: ssh_key.into(),
        }
    }
}

impl Payload for CreateSshKey {}

/// Body for `PATCH /ssh-keys/{ssh-key-id}`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct UpdateSshKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ssh_key: Option<String>,
}

impl UpdateSshKey {
    /// Starts an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

optional_setters!(UpdateSshKey {
    /// New name.
    name: String,
    /// Replacement public key.
    ssh_key: String,
});

impl Payload for UpdateSshKey {}

/// Body for `POST /startup-scripts`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CreateStartupScript {
    name: String,
    script: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    script_type: Option<String>,
}

impl CreateStartupScript {
    /// Registers `script` under `name`; the script text is base64-encoded
    /// here.
    #[must_use]
    pub fn new(name: impl Into<String>, script: impl AsRef<[u8]>) -> Self {
        Self {
            name: name.into(),
            script: encode_base64(script),
            script_type: None,
        }
    }

    /// Sets the script type (`boot` or `pxe`).
    #[must_use]
    pub fn script_type(mut self, script_type: impl Into<String>) -> Self {
        self.script_type = Some(script_type.into());
        self
    }
}

impl Payload for CreateStartupScript {}

/// Body for `PATCH /startup-scripts/{startup-id}`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct UpdateStartupScript {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    script: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    script_type: Option<String>,
}

impl UpdateStartupScript {
    /// Starts an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the script body; the text is base64-encoded here.
    #[must_use]
    pub fn script(mut self, script: impl AsRef<[u8]>) -> Self {
        self.script = Some(encode_base64(script));
        self
    }

    /// Sets the script type (`boot` or `pxe`).
    #[must_use]
    pub fn script_type(mut self, script_type: impl Into<String>) -> Self {
        self.script_type = Some(script_type.into());
        self
    }
}

optional_setters!(UpdateStartupScript {
    /// New name.
    name: String,
});

impl Payload for UpdateStartupScript {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Map, Value, json};

    #[test]
    fn startup_script_is_encoded_and_type_renamed() {
        let body = CreateStartupScript::new("bootstrap", "#!/bin/sh\n")
            .script_type("boot")
            .to_json();
        assert_eq!(
            serde_json::Value::Object(body),
            json!({"name": "bootstrap", "script": "IyEvYmluL3NoCg==", "type": "boot"})
        );
    }

    #[test]
    fn update_ssh_key_sends_only_name() {
        assert_eq!(
            serde_json::Value::Object(UpdateSshKey::new().name("laptop").to_json()),
            json!({"name": "laptop"})
        );
    }

    #[test]
    fn snapshot_description_is_optional() {
        assert_eq!(
            serde_json::Value::Object(CreateSnapshot::new("i-1").to_json()),
            json!({"instance_id": "i-1"})
        );
    }

    #[rstest]
    #[case(
        CreateSnapshot::new("i-1").description("nightly").to_json(),
        json!({"instance_id": "i-1", "description": "nightly"})
    )]
    #[case(
        CreateSnapshotFromUrl::new("https://images.example/disk.raw").to_json(),
        json!({"url": "https://images.example/disk.raw"})
    )]
    #[case(
        CreateSnapshotFromUrl::new("https://images.example/disk.raw")
            .description("imported")
            .to_json(),
        json!({"url": "https://images.example/disk.raw", "description": "imported"})
    )]
    #[case(UpdateSnapshot::new("golden").to_json(), json!({"description": "golden"}))]
    #[case(
        CreateIso::new("https://images.example/alpine.iso").to_json(),
        json!({"url": "https://images.example/alpine.iso"})
    )]
    #[case(
        CreateSshKey::new("laptop", "ssh-ed25519 AAAA").to_json(),
        json!({"name": "laptop", "ssh_key": "ssh-ed25519 AAAA"})
    )]
    #[case(UpdateSshKey::new().to_json(), json!({}))]
    #[case(
        UpdateSshKey::new().ssh_key("ssh-ed25519 BBBB").to_json(),
        json!({"ssh_key": "ssh-ed25519 BBBB"})
    )]
    #[case(
        CreateStartupScript::new("bootstrap", "#!/bin/sh\n").to_json(),
        json!({"name": "bootstrap", "script": "IyEvYmluL3NoCg=="})
    )]
    #[case(UpdateStartupScript::new().to_json(), json!({}))]
    #[case(
        UpdateStartupScript::new().name("renamed").to_json(),
        json!({"name": "renamed"})
    )]
    #[case(
        UpdateStartupScript::new().script("#!/bin/sh\n").script_type("pxe").to_json(),
        json!({"script": "IyEvYmluL3NoCg==", "type": "pxe"})
    )]
    fn bodies_carry_only_set_fields(#[case] body: Map<String, Value>, #[case] expected: Value) {
        assert_eq!(Value::Object(body), expected);
    }
}
