//! Bare metal server bodies.

use serde::Serialize;

use super::{Payload, encode_base64};

/// Body for `POST /bare-metals`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CreateBareMetal {
    region: String,
    plan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    os_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    script_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sshkey_id: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_ipv6: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    activation_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reserved_ipv4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    persistent_pxe: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attach_vpc2: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_vpc2: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mdisk_mode: Option<String>,
}

impl CreateBareMetal {
    /// Starts a body for the given region and bare metal plan.
    #[must_use]
    pub fn new(region: impl Into<String>, plan: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            plan: plan.into(),
            os_id: None,
            script_id: None,
            snapshot_id: None,
            app_id: None,
            image_id: None,
            label: None,
            hostname: None,
            tags: None,
            sshkey_id: None,
            enable_ipv6: None,
            user_data: None,
            activation_email: None,
            reserved_ipv4: None,
            persistent_pxe: None,
            attach_vpc2: None,
            enable_vpc2: None,
            mdisk_mode: None,
        }
    }

    /// Sets cloud-init user data; the raw text is base64-encoded here.
    #[must_use]
    pub fn user_data(mut self, raw: impl AsRef<[u8]>) -> Self {
        self.user_data = Some(encode_base64(raw));
        self
    }
}

optional_setters!(CreateBareMetal {
    /// Operating system id.
    os_id: u32,
    /// Startup script id.
    script_id: String,
    /// Snapshot to restore.
    snapshot_id: String,
    /// One-click application id.
    app_id: u32,
    /// Marketplace image id.
    image_id: String,
    /// User-visible label.
    label: String,
    /// Hostname assigned to the server.
    hostname: String,
    /// Assigns an IPv6 address.
    enable_ipv6: bool,
    /// Sends the activation email.
    activation_email: bool,
    /// Reserved IPv4 to use as the main address.
    reserved_ipv4: String,
    /// Keeps PXE as the first boot device.
    persistent_pxe: bool,
    /// Attaches a new default VPC 2.0 network.
    enable_vpc2: bool,
    /// RAID layout (`raid1`, `jbod`, or `none`).
    mdisk_mode: String,
});

list_setters!(CreateBareMetal {
    /// Tags applied to the server.
    tags,
    /// SSH keys installed on first boot.
    sshkey_id,
    /// VPC 2.0 networks to attach.
    attach_vpc2,
});

impl Payload for CreateBareMetal {}

/// Body for `PATCH /bare-metals/{baremetal-id}`. All fields are optional.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct UpdateBareMetal {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    os_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_ipv6: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attach_vpc2: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detach_vpc2: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_vpc2: Option<bool>,
}

impl UpdateBareMetal {
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

optional_setters!(UpdateBareMetal {
    /// New label.
    label: String,
    /// Reinstalls with an operating system.
    os_id: u32,
    /// Reinstalls with a one-click application.
    app_id: u32,
    /// Reinstalls with a marketplace image.
    image_id: String,
    /// Assigns an IPv6 address.
    enable_ipv6: bool,
    /// Attaches a new default VPC 2.0 network.
    enable_vpc2: bool,
});

list_setters!(UpdateBareMetal {
    /// Replaces the tag set.
    tags,
    /// VPC 2.0 networks to attach.
    attach_vpc2,
    /// VPC 2.0 networks to detach.
    detach_vpc2,
});

impl Payload for UpdateBareMetal {}
