//! Upload constraints: size limit, MIME allow-list, and picker hints.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One mebibyte, the unit used in user-facing size messages.
pub const BYTES_PER_MEGABYTE: u64 = 1024 * 1024;

/// Default upload limit: 4.5 MB.
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 9 * BYTES_PER_MEGABYTE / 2;

/// MIME types accepted by default.
pub const DEFAULT_ACCEPTED_MIME_TYPES: &[&str] =
    &["application/pdf", "image/jpeg", "image/jpg", "image/png"];

/// File extensions offered to the platform file picker by default.
pub const DEFAULT_ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png"];

/// Validation limits applied to every candidate file.
///
/// The MIME allow-list is authoritative. The extension list only feeds
/// the file picker's `accept` hint and the wording of rejection messages.
///
/// Deserializing a partial document keeps the defaults for any field
/// that is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    /// Largest accepted file size in bytes (inclusive).
    pub max_size_bytes: u64,

    /// Exact MIME types a file must report to be accepted.
    pub accepted_mime_types: Vec<String>,

    /// Extensions (without the leading dot) shown to the file picker.
    pub accepted_extensions: Vec<String>,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
            accepted_mime_types: DEFAULT_ACCEPTED_MIME_TYPES
                .iter()
                .map(|&s| s.to_owned())
                .collect(),
            accepted_extensions: DEFAULT_ACCEPTED_EXTENSIONS
                .iter()
                .map(|&s| s.to_owned())
                .collect(),
        }
    }
}

/// Problems with a [`Constraints`] value that would make every file fail
/// or produce an unreadable rejection message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintsError {
    /// No MIME type is accepted.
    #[error("accepted_mime_types must not be empty")]
    NoMimeTypes,

    /// No extension is listed for the picker or the rejection message.
    #[error("accepted_extensions must not be empty")]
    NoExtensions,
}

impl Constraints {
    /// Check that both allow-lists are non-empty.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConstraintsError`] found.
    pub fn check(&self) -> Result<(), ConstraintsError> {
        if self.accepted_mime_types.is_empty() {
            return Err(ConstraintsError::NoMimeTypes);
        }
        if self.accepted_extensions.is_empty() {
            return Err(ConstraintsError::NoExtensions);
        }
        Ok(())
    }

    /// Whether `mime_type` is on the allow-list (exact match).
    #[must_use]
    pub fn accepts_mime_type(&self, mime_type: &str) -> bool {
        self.accepted_mime_types.iter().any(|m| m == mime_type)
    }

    /// Value for an `<input type="file" accept=...>` attribute,
    /// e.g. `.pdf,.jpg,.jpeg,.png`.
    #[must_use]
    pub fn accept_attribute(&self) -> String {
        self.accepted_extensions
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// The size limit in a form suitable for messages.
    #[must_use]
    pub const fn size_limit(&self) -> Megabytes {
        Megabytes(self.max_size_bytes)
    }

    /// The accepted formats in a form suitable for messages.
    #[must_use]
    pub fn format_list(&self) -> FormatList {
        FormatList(
            self.accepted_extensions
                .iter()
                .map(|ext| ext.to_ascii_uppercase())
                .collect(),
        )
    }
}

/// A byte count displayed in megabytes, e.g. `4.5` or `5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Megabytes(pub u64);

impl fmt::Display for Megabytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[expect(clippy::cast_precision_loss)]
        let mb = self.0 as f64 / BYTES_PER_MEGABYTE as f64;
        write!(f, "{mb}")
    }
}

/// Human-readable list of format names, e.g. `PDF, JPG, JPEG, or PNG`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatList(pub Vec<String>);

impl fmt::Display for FormatList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => Ok(()),
            [only] => f.write_str(only),
            [first, second] => write!(f, "{first} or {second}"),
            [init @ .., last] => {
                for name in init {
                    write!(f, "{name}, ")?;
                }
                write!(f, "or {last}")
            }
        }
    }
}
