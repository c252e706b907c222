//! Secret reference resolution.
//!
//! A secret is addressed either by its server-assigned numeric ID or by its
//! fully qualified folder path plus name, beginning with a leading slash
//! (e.g. `/Personal Folders/Test Secret`). [`SecretRef`] captures both
//! shapes so a single retrieval operation can accept either.

use std::fmt;

/// A reference to a secret, by numeric ID or by folder path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretRef {
    /// The server-assigned secret ID.
    Id(i32),
    /// Fully qualified folder path and secret name, with a leading slash.
    Path(String),
}

impl SecretRef {
    /// Renders the sub-path under the `secrets` resource for this
    /// reference: the decimal ID, or the sentinel ID `0` plus a
    /// `secretPath` query parameter carrying the escaped path.
    pub fn resource_path(&self) -> String {
        match self {
            SecretRef::Id(id) => id.to_string(),
            SecretRef::Path(path) => format!("0?secretPath={}", query_escape(path)),
        }
    }
}

impl From<i32> for SecretRef {
    fn from(id: i32) -> Self {
        SecretRef::Id(id)
    }
}

impl From<&str> for SecretRef {
    fn from(path: &str) -> Self {
        SecretRef::Path(path.to_owned())
    }
}

impl From<String> for SecretRef {
    fn from(path: String) -> Self {
        SecretRef::Path(path)
    }
}

impl fmt::Display for SecretRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretRef::Id(id) => write!(f, "{id}"),
            SecretRef::Path(path) => f.write_str(path),
        }
    }
}

/// Escape a string for use as a query parameter value, form-encoding
/// style: space becomes `+`, unreserved bytes pass through, everything
/// else is percent-encoded.
fn query_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        let safe = b.is_ascii_uppercase()
            || b.is_ascii_lowercase()
            || b.is_ascii_digit()
            || matches!(b, b'-' | b'_' | b'.' | b'~');
        if safe {
            out.push(b as char);
        } else if b == b' ' {
            out.push('+');
        } else {
            out.push('%');
            out.push(
                char::from_digit((b >> 4) as u32, 16)
                    .unwrap()
                    .to_ascii_uppercase(),
            );
            out.push(
                char::from_digit((b & 0x0F) as u32, 16)
                    .unwrap()
                    .to_ascii_uppercase(),
            );
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
