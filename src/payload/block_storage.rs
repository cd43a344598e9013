//! Block storage bodies.

use serde::Serialize;

use super::Payload;

/// Body for `POST /blocks`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CreateBlockStorage {
    region: String,
    size_gb: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_type: Option<String>,
}

impl CreateBlockStorage {
    /// Starts a body for a volume of `size_gb` gigabytes in `region`.
    #[must_use]
    pub fn new(region: impl Into<String>, size_gb: u32) -> Self {
        Self {
            region: region.into(),
            size_gb,
            label: None,
            block_type: None,
        }
    }
}

optional_setters!(CreateBlockStorage {
    /// User-visible label.
    label: String,
    /// Storage class (`high_perf` or `storage_opt`).
    block_type: String,
});

impl Payload for CreateBlockStorage {}

/// Body for `PATCH /blocks/{block-id}`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct UpdateBlockStorage {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size_gb: Option<u32>,
}

impl UpdateBlockStorage {
    /// Starts an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

optional_setters!(UpdateBlockStorage {
    /// New label.
    label: String,
    /// New size in gigabytes; volumes only grow.
    size_gb: u32,
});

impl Payload for UpdateBlockStorage {}

/// Body for `POST /blocks/{block-id}/attach`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AttachBlockStorage {
    instance_id: String,
    live: bool,
}

impl AttachBlockStorage {
    /// Attaches to `instance_id`; `live` skips the instance restart.
    #[must_use]
    pub fn new(instance_id: impl Into<String>, live: bool) -> Self {
        Self {
            instance_id: instance_id.into(),
            live,
        }
    }
}

impl Payload for AttachBlockStorage {}

/// Body for `POST /blocks/{block-id}/detach`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct DetachBlockStorage {
    live: bool,
}

impl DetachBlockStorage {
    /// Detaches; `live` skips the instance restart.
    #[must_use]
    pub const fn new(live: bool) -> Self {
        Self { live }
    }
}

impl Payload for DetachBlockStorage {}
