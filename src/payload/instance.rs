//! Compute instance bodies.

use serde::{Deserialize, Serialize};

use super::{Payload, encode_base64};

/// Automatic backup setting for an instance.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupsMode {
    /// Automatic backups on.
    Enabled,
    /// Automatic backups off.
    Disabled,
}

impl From<bool> for BackupsMode {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

/// Body for `POST /instances`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CreateInstance {
    region: String,
    plan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    os_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    iso_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    script_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ipxe_chain_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sshkey_id: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    backups: Option<BackupsMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_ipv6: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    disable_public_ipv4: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attach_vpc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attach_vpc2: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_vpc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_vpc2: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ddos_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    activation_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    firewall_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reserved_ipv4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_scheme: Option<String>,
}

impl CreateInstance {
    /// Starts a body for the given region (for example `ewr`) and plan (for
    /// example `vc2-1c-1gb`).
    #[must_use]
    pub fn new(region: impl Into<String>, plan: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            plan: plan.into(),
            os_id: None,
            iso_id: None,
            snapshot_id: None,
            app_id: None,
            image_id: None,
            script_id: None,
            ipxe_chain_url: None,
            label: None,
            hostname: None,
            tags: None,
            sshkey_id: None,
            backups: None,
            enable_ipv6: None,
            disable_public_ipv4: None,
            attach_vpc: None,
            attach_vpc2: None,
            enable_vpc: None,
            enable_vpc2: None,
            user_data: None,
            ddos_protection: None,
            activation_email: None,
            firewall_group_id: None,
            reserved_ipv4: None,
            user_scheme: None,
        }
    }

    /// Returns the target region.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the requested plan.
    #[must_use]
    pub fn plan(&self) -> &str {
        &self.plan
    }

    /// Sets cloud-init user data; the raw text is base64-encoded here.
    #[must_use]
    pub fn user_data(mut self, raw: impl AsRef<[u8]>) -> Self {
        self.user_data = Some(encode_base64(raw));
        self
    }
}

optional_setters!(CreateInstance {
    /// Operating system id from `GET /os`.
    os_id: u32,
    /// ISO to boot from.
    iso_id: String,
    /// Snapshot to restore onto the new instance.
    snapshot_id: String,
    /// One-click application id.
    app_id: u32,
    /// Marketplace image id.
    image_id: String,
    /// Startup script to run on first boot.
    script_id: String,
    /// iPXE chain URL for custom boots.
    ipxe_chain_url: String,
    /// User-visible label.
    label: String,
    /// Hostname assigned to the server.
    hostname: String,
    /// Automatic backups.
    backups: BackupsMode,
    /// Assigns an IPv6 address.
    enable_ipv6: bool,
    /// Skips the public IPv4 address.
    disable_public_ipv4: bool,
    /// Attaches the instance to a new default VPC.
    enable_vpc: bool,
    /// Attaches the instance to a new default VPC 2.0 network.
    enable_vpc2: bool,
    /// Enables DDoS protection.
    ddos_protection: bool,
    /// Sends the activation email.
    activation_email: bool,
    /// Firewall group to join.
    firewall_group_id: String,
    /// Reserved IPv4 to use as the main address.
    reserved_ipv4: String,
    /// Linux user scheme (`root` or `limited`).
    user_scheme: String,
});

list_setters!(CreateInstance {
    /// Tags applied to the instance.
    tags,
    /// SSH keys installed on first boot.
    sshkey_id,
    /// VPCs to attach.
    attach_vpc,
    /// VPC 2.0 networks to attach.
    attach_vpc2,
});

impl Payload for CreateInstance {}

/// Body for `PATCH /instances/{instance-id}`. All fields are optional.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateInstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    os_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    backups: Option<BackupsMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    firewall_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_ipv6: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ddos_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attach_vpc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detach_vpc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attach_vpc2: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detach_vpc2: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_vpc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_vpc2: Option<bool>,
}

impl UpdateInstance {
    /// Starts an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces cloud-init user data; the raw text is base64-encoded here.
    #[must_use]
    pub fn user_data(mut self, raw: impl AsRef<[u8]>) -> Self {
        self.user_data = Some(encode_base64(raw));
        self
    }
}

optional_setters!(UpdateInstance {
    /// Reinstalls with a one-click application.
    app_id: u32,
    /// Reinstalls with a marketplace image.
    image_id: String,
    /// Reinstalls with an operating system.
    os_id: u32,
    /// Upgrades to a larger plan.
    plan: String,
    /// New label.
    label: String,
    /// Automatic backups.
    backups: BackupsMode,
    /// Firewall group to join.
    firewall_group_id: String,
    /// Assigns an IPv6 address.
    enable_ipv6: bool,
    /// Enables DDoS protection.
    ddos_protection: bool,
    /// Attaches a new default VPC.
    enable_vpc: bool,
    /// Attaches a new default VPC 2.0 network.
    enable_vpc2: bool,
});

list_setters!(UpdateInstance {
    /// Replaces the tag set.
    tags,
    /// VPCs to attach.
    attach_vpc,
    /// VPCs to detach.
    detach_vpc,
    /// VPC 2.0 networks to attach.
    attach_vpc2,
    /// VPC 2.0 networks to detach.
    detach_vpc2,
});

impl Payload for UpdateInstance {}

/// Body for `POST /instances/{instance-id}/reinstall`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReinstallInstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    hostname: Option<String>,
}

impl ReinstallInstance {
    /// Reinstalls keeping the current hostname.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

optional_setters!(ReinstallInstance {
    /// Hostname to assign after reinstalling.
    hostname: String,
});

impl Payload for ReinstallInstance {}

/// Body for `POST /instances/{instance-id}/backup-schedule`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BackupSchedule {
    #[serde(rename = "type")]
    schedule_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hour: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dow: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dom: Option<u8>,
}

impl BackupSchedule {
    /// Starts a schedule of the given type: `daily`, `weekly`, `monthly`,
    /// `daily_alt_even`, or `daily_alt_odd`.
    #[must_use]
    pub fn new(schedule_type: impl Into<String>) -> Self {
        Self {
            schedule_type: schedule_type.into(),
            hour: None,
            dow: None,
            dom: None,
        }
    }
}

optional_setters!(BackupSchedule {
    /// UTC hour to start the backup.
    hour: u8,
    /// Day of week for weekly schedules (1 = Sunday).
    dow: u8,
    /// Day of month for monthly schedules.
    dom: u8,
});

impl Payload for BackupSchedule {}

/// Body for `POST /instances/{instance-id}/restore`; exactly one source is
/// serialised.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RestoreInstance {
    /// Restores from a backup.
    #[serde(rename = "backup_id")]
    Backup(String),
    /// Restores from a snapshot.
    #[serde(rename = "snapshot_id")]
    Snapshot(String),
}

impl Payload for RestoreInstance {}

/// Body for `POST /instances/{instance-id}/iso/attach`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AttachIso {
    iso_id: String,
}

impl AttachIso {
    /// Attaches the given ISO.
    #[must_use]
    pub fn new(iso_id: impl Into<String>) -> Self {
        Self {
            iso_id: iso_id.into(),
        }
    }
}

impl Payload for AttachIso {}

/// Body for the legacy VPC attach and detach actions.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VpcAttachment {
    vpc_id: String,
}

impl VpcAttachment {
    /// Targets the given VPC.
    #[must_use]
    pub fn new(vpc_id: impl Into<String>) -> Self {
        Self {
            vpc_id: vpc_id.into(),
        }
    }
}

impl Payload for VpcAttachment {}

/// Body for the VPC 2.0 attach and detach actions.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Vpc2Attachment {
    vpc_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    ip_address: Option<String>,
}

impl Vpc2Attachment {
    /// Targets the given VPC 2.0 network.
    #[must_use]
    pub fn new(vpc_id: impl Into<String>) -> Self {
        Self {
            vpc_id: vpc_id.into(),
            ip_address: None,
        }
    }
}

optional_setters!(Vpc2Attachment {
    /// Requests a specific private address when attaching.
    ip_address: String,
});

impl Payload for Vpc2Attachment {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_fields_only() {
        let body = CreateInstance::new("ewr", "vc2-1c-1gb").to_json();
        assert_eq!(
            serde_json::Value::Object(body),
            json!({"region": "ewr", "plan": "vc2-1c-1gb"})
        );
    }

    #[test]
    fn optional_fields_use_wire_names() {
        let body = CreateInstance::new("ewr", "vc2-1c-1gb")
            .os_id(2284_u32)
            .label("web-1")
            .tags(["web", "prod"])
            .sshkey_id(["key-1"])
            .backups(false)
            .enable_ipv6(true)
            .user_data("#cloud-config\n")
            .to_json();
        assert_eq!(
            serde_json::Value::Object(body),
            json!({
                "region": "ewr",
                "plan": "vc2-1c-1gb",
                "os_id": 2284,
                "label": "web-1",
                "tags": ["web", "prod"],
                "sshkey_id": ["key-1"],
                "backups": "disabled",
                "enable_ipv6": true,
                "user_data": "I2Nsb3VkLWNvbmZpZwo=",
            })
        );
    }

    #[test]
    fn restore_serialises_single_source() {
        assert_eq!(
            serde_json::Value::Object(RestoreInstance::Snapshot(String::from("snap-1")).to_json()),
            json!({"snapshot_id": "snap-1"})
        );
        assert_eq!(
            serde_json::Value::Object(RestoreInstance::Backup(String::from("bk-1")).to_json()),
            json!({"backup_id": "bk-1"})
        );
    }

    #[test]
    fn backup_schedule_renames_type() {
        let body = BackupSchedule::new("weekly").hour(3_u8).dow(1_u8).to_json();
        assert_eq!(
            serde_json::Value::Object(body),
            json!({"type": "weekly", "hour": 3, "dow": 1})
        );
    }

    #[test]
    fn empty_update_serialises_to_empty_object() {
        assert!(UpdateInstance::new().to_json().is_empty());
        assert!(ReinstallInstance::new().to_json().is_empty());
    }
}
