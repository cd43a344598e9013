//! Virtual file system bodies.

use serde::Serialize;

use super::Payload;

/// Nested size object used by the file system endpoints.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct StorageSize {
    gb: u32,
}

impl StorageSize {
    /// A size of `gb` gigabytes.
    #[must_use]
    pub const fn gb(gb: u32) -> Self {
        Self { gb }
    }
}

/// Body for `POST /vfs`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CreateVfs {
    region: String,
    label: String,
    storage_size: StorageSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    disk_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
}

impl CreateVfs {
    /// Starts a file system of the given size in `region`.
    #[must_use]
    pub fn new(region: impl Into<String>, label: impl Into<String>, storage_size: StorageSize) -> Self {
        Self {
            region: region.into(),
            label: label.into(),
            storage_size,
            disk_type: None,
            tags: None,
        }
    }
}

optional_setters!(CreateVfs {
    /// Disk class, for example `nvme`.
    disk_type: String,
});

list_setters!(CreateVfs {
    /// Tags applied to the file system.
    tags,
});

impl Payload for CreateVfs {}

/// Body for `PUT /vfs/{vfs-id}`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct UpdateVfs {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    storage_size: Option<StorageSize>,
}

impl UpdateVfs {
    /// Starts an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

optional_setters!(UpdateVfs {
    /// New label.
    label: String,
    /// New size.
    storage_size: StorageSize,
});

impl Payload for UpdateVfs {}
