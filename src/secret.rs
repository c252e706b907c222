//! Secret and field wire types.
//!
//! Member names mirror the Secret Server REST API exactly (PascalCase; the
//! field list arrives as `Items`). Every member carries a serde default so
//! partial server responses still decode.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A secret: a named, templated bundle of sensitive fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Secret {
    pub id: i32,
    pub name: String,
    pub folder_id: i32,
    pub site_id: i32,
    pub secret_template_id: i32,
    pub secret_policy_id: i32,
    pub active: bool,
    pub checked_out: bool,
    pub check_out_enabled: bool,
    /// Field entries, in server response order.
    #[serde(rename = "Items")]
    pub fields: Vec<SecretField>,
    /// Server-side key generation flags, submitted on create against an
    /// SSH-key template. Absent on read and update unless re-submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_key_args: Option<SshKeyArgs>,
}

/// One field of a secret.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SecretField {
    pub item_id: i32,
    /// References the template's field definition; stable across secrets
    /// of the same template.
    pub field_id: i32,
    /// Non-zero marks the field as file-backed: its real content lives in
    /// a separate attachment and `item_value` holds a placeholder until
    /// hydration substitutes it.
    pub file_attachment_id: i32,
    pub field_description: String,
    pub field_name: String,
    pub filename: String,
    pub item_value: String,
    /// Short URL-safe alternate identifier, also used in attachment
    /// sub-resource paths.
    pub slug: String,
    pub is_file: bool,
    pub is_notes: bool,
    pub is_password: bool,
}

/// Flags for server-side SSH key material generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SshKeyArgs {
    pub generate_ssh_keys: bool,
    pub generate_passphrase: bool,
}

impl Secret {
    /// Value of the first field whose `FieldName` or `Slug` equals `name`
    /// (case-sensitive, sequence order). A miss is not an error.
    pub fn field(&self, name: &str) -> Option<&str> {
        let found = self
            .fields
            .iter()
            .find(|f| f.field_name == name || f.slug == name);
        if found.is_none() {
            debug!(secret = %self.name, field = name, "no matching field");
        }
        found.map(|f| f.item_value.as_str())
    }

    /// Value of the first field whose `FieldId` equals `id`, for callers
    /// that know the template's field schema.
    pub fn field_by_id(&self, id: i32) -> Option<&str> {
        let found = self.fields.iter().find(|f| f.field_id == id);
        if found.is_none() {
            debug!(secret = %self.name, field_id = id, "no matching field id");
        }
        found.map(|f| f.item_value.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
