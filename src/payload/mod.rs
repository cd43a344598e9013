//! Request body builders.
//!
//! Every builder takes its endpoint's required fields in `new` and exposes a
//! chainable setter per optional field. Unset optional fields are skipped
//! during serialisation rather than sent as `null`, because the provider
//! treats an omitted field differently from an explicit empty value.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde_json::{Map, Value};

/// Generates `Option` setters that accept anything convertible into the
/// field type.
macro_rules! optional_setters {
    ($builder:ty { $( $(#[$doc:meta])* $field:ident: $ty:ty ),* $(,)? }) => {
        impl $builder {
            $(
                $(#[$doc])*
                #[must_use]
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }
    };
}

/// Generates `Option<Vec<String>>` setters accepting any iterable of strings.
macro_rules! list_setters {
    ($builder:ty { $( $(#[$doc:meta])* $field:ident ),* $(,)? }) => {
        impl $builder {
            $(
                $(#[$doc])*
                #[must_use]
                pub fn $field<I, S>(mut self, values: I) -> Self
                where
                    I: IntoIterator<Item = S>,
                    S: Into<String>,
                {
                    self.$field = Some(values.into_iter().map(Into::into).collect());
                    self
                }
            )*
        }
    };
}

mod account;
mod bare_metal;
mod block_storage;
mod instance;
mod media;
mod network;
mod object_storage;
mod vfs;

pub use account::{CreateSubaccount, CreateUser, UpdateUser};
pub use bare_metal::{CreateBareMetal, UpdateBareMetal};
pub use block_storage::{AttachBlockStorage, CreateBlockStorage, DetachBlockStorage, UpdateBlockStorage};
pub use instance::{
    AttachIso, BackupSchedule, BackupsMode, CreateInstance, ReinstallInstance, RestoreInstance,
    UpdateInstance, Vpc2Attachment, VpcAttachment,
};
pub use media::{
    CreateIso, CreateSnapshot, CreateSnapshotFromUrl, CreateSshKey, CreateStartupScript,
    UpdateSnapshot, UpdateSshKey, UpdateStartupScript,
};
pub use network::{
    AttachReservedIp, ConvertReservedIp, CreateReservedIp, CreateVpc, CreateVpc2, UpdateReservedIp,
    UpdateVpc, UpdateVpc2, Vpc2Nodes,
};
pub use object_storage::{
    CreateInference, CreateObjectStorage, UpdateInference, UpdateObjectStorage,
};
pub use vfs::{CreateVfs, StorageSize, UpdateVfs};

/// A serialisable request body.
///
/// `to_json` is pure: calling it repeatedly yields equal maps and never
/// mutates the builder.
pub trait Payload: Serialize {
    /// Serialises the builder into the JSON object sent on the wire.
    fn to_json(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Base64-encodes user data or script bodies as the provider expects.
pub(crate) fn encode_base64(raw: impl AsRef<[u8]>) -> String {
    STANDARD.encode(raw)
}

/// Pagination controls for list endpoints.
///
/// Both fields are optional; unset fields are left out of the query string
/// so the provider applies its own defaults.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Page {
    per_page: Option<u32>,
    cursor: Option<String>,
}

impl Page {
    /// Starts with provider defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            per_page: None,
            cursor: None,
        }
    }

    /// Sets the number of items per page.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Sets the opaque cursor returned in a previous page's `meta.links`.
    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Query parameters for the set fields.
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(2);
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        if let Some(cursor) = &self.cursor {
            params.push(("cursor", cursor.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_produce_no_params() {
        assert!(Page::new().params().is_empty());
    }

    #[test]
    fn page_emits_only_set_fields() {
        assert_eq!(Page::new().per_page(5).params(), vec![("per_page", String::from("5"))]);
        assert_eq!(
            Page::new().cursor("bmV4dA==").params(),
            vec![("cursor", String::from("bmV4dA=="))]
        );
    }

    #[test]
    fn base64_matches_standard_alphabet() {
        assert_eq!(encode_base64("#cloud-config\n"), "I2Nsb3VkLWNvbmZpZwo=");
    }
}
