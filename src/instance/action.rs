//! Provider-specific instance actions reachable through
//! [`Instance::execute_action`](super::Instance::execute_action).

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::InstanceError;
use crate::payload::{
    AttachIso, BackupSchedule, ReinstallInstance, RestoreInstance, UpdateInstance,
    Vpc2Attachment, VpcAttachment,
};

/// A named action together with its typed parameters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InstanceAction {
    /// Reinstalls the operating system.
    Reinstall(ReinstallInstance),
    /// Replaces the automatic backup schedule.
    SetBackupSchedule(BackupSchedule),
    /// Reads the automatic backup schedule.
    GetBackupSchedule,
    /// Mounts an ISO.
    AttachIso(AttachIso),
    /// Unmounts the current ISO.
    DetachIso,
    /// Reads the ISO mount status.
    IsoStatus,
    /// Restores from a backup or snapshot.
    Restore(RestoreInstance),
    /// Attaches a legacy VPC.
    AttachVpc(VpcAttachment),
    /// Detaches a legacy VPC.
    DetachVpc(VpcAttachment),
    /// Attaches a VPC 2.0 network.
    AttachVpc2(Vpc2Attachment),
    /// Detaches a VPC 2.0 network.
    DetachVpc2(Vpc2Attachment),
    /// Reads bandwidth usage.
    Bandwidth,
    /// Lists instances sharing the same host.
    Neighbors,
    /// Reads the base64 user data.
    UserData,
    /// Lists available upgrades, optionally narrowed by type.
    Upgrades(Option<String>),
    /// Applies a partial update.
    Update(UpdateInstance),
}

impl InstanceAction {
    /// Parses an action from its name and a JSON parameter object.
    ///
    /// Parameter objects use the same keys as the corresponding request
    /// body; unknown keys are rejected. `update` expects `user_data` to be
    /// base64-encoded already.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::UnsupportedAction`] for unknown names and
    /// [`InstanceError::InvalidAction`] when parameters are missing or
    /// mistyped.
    pub fn parse(name: &str, params: &Map<String, Value>) -> Result<Self, InstanceError> {
        let action = match name {
            "reinstall" => Self::Reinstall(decode(name, params)?),
            "set_backup_schedule" => Self::SetBackupSchedule(decode(name, params)?),
            "get_backup_schedule" => Self::GetBackupSchedule,
            "attach_iso" => Self::AttachIso(decode(name, params)?),
            "detach_iso" => Self::DetachIso,
            "iso_status" => Self::IsoStatus,
            "restore" => Self::Restore(decode(name, params)?),
            "attach_vpc" => Self::AttachVpc(decode(name, params)?),
            "detach_vpc" => Self::DetachVpc(decode(name, params)?),
            "attach_vpc2" => Self::AttachVpc2(decode(name, params)?),
            "detach_vpc2" => Self::DetachVpc2(decode(name, params)?),
            "bandwidth" => Self::Bandwidth,
            "neighbors" => Self::Neighbors,
            "user_data" => Self::UserData,
            "upgrades" => Self::Upgrades(upgrade_type(params)?),
            "update" => Self::Update(decode(name, params)?),
            other => return Err(InstanceError::UnsupportedAction(other.to_owned())),
        };
        Ok(action)
    }

    /// Name accepted by [`InstanceAction::parse`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Reinstall(_) => "reinstall",
            Self::SetBackupSchedule(_) => "set_backup_schedule",
            Self::GetBackupSchedule => "get_backup_schedule",
            Self::AttachIso(_) => "attach_iso",
            Self::DetachIso => "detach_iso",
            Self::IsoStatus => "iso_status",
            Self::Restore(_) => "restore",
            Self::AttachVpc(_) => "attach_vpc",
            Self::DetachVpc(_) => "detach_vpc",
            Self::AttachVpc2(_) => "attach_vpc2",
            Self::DetachVpc2(_) => "detach_vpc2",
            Self::Bandwidth => "bandwidth",
            Self::Neighbors => "neighbors",
            Self::UserData => "user_data",
            Self::Upgrades(_) => "upgrades",
            Self::Update(_) => "update",
        }
    }
}

fn decode<T: DeserializeOwned>(name: &str, params: &Map<String, Value>) -> Result<T, InstanceError> {
    serde_json::from_value(Value::Object(params.clone()))
        .map_err(|err| InstanceError::InvalidAction(format!("{name}: {err}")))
}

fn upgrade_type(params: &Map<String, Value>) -> Result<Option<String>, InstanceError> {
    match params.get("type") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(kind)) => Ok(Some(kind.clone())),
        Some(_) => Err(InstanceError::InvalidAction(String::from(
            "upgrades: `type` must be a string",
        ))),
    }
}
