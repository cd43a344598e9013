//! Object storage and serverless inference bodies.

use serde::Serialize;

use super::Payload;

/// Body for `POST /object-storage`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CreateObjectStorage {
    cluster_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl CreateObjectStorage {
    /// Subscribes to the cluster with the given id.
    #[must_use]
    pub const fn new(cluster_id: u32) -> Self {
        Self {
            cluster_id,
            label: None,
        }
    }
}

optional_setters!(CreateObjectStorage {
    /// User-visible label.
    label: String,
});

impl Payload for CreateObjectStorage {}

/// Body for `PUT /object-storage/{object-storage-id}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UpdateObjectStorage {
    label: String,
}

impl UpdateObjectStorage {
    /// Replaces the label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Payload for UpdateObjectStorage {}

/// Body for `POST /inference`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CreateInference {
    label: String,
}

impl CreateInference {
    /// Creates a subscription with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Payload for CreateInference {}

/// Body for `PATCH /inference/{inference-id}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UpdateInference {
    label: String,
}

impl UpdateInference {
    /// Replaces the label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Payload for UpdateInference {}
