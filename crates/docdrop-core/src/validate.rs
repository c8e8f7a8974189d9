//! Candidate-file validation against [`Constraints`].

use serde::{Deserialize, Serialize};

use crate::constraints::{Constraints, FormatList, Megabytes};

/// Metadata of a file offered by the picker or a drop, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFile {
    /// File name as reported by the platform (no directory part).
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// MIME type as reported by the platform; may be empty.
    pub mime_type: String,
}

impl CandidateFile {
    /// Create candidate metadata.
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Whether the file's bytes can be shown as an inline image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Why a candidate file was rejected.
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The file is larger than the configured limit.
    #[error("File size should not exceed {limit}MB.")]
    OversizeFile {
        /// The limit that was exceeded.
        limit: Megabytes,
    },

    /// The file's MIME type is not on the allow-list.
    #[error("Invalid file format. Please upload a {formats} file.")]
    UnsupportedFormat {
        /// The formats that would have been accepted.
        formats: FormatList,
    },
}

/// Check a candidate file against the constraints.
///
/// Rules are applied in order and the first failure wins:
///
/// 1. `size_bytes` must not exceed `max_size_bytes` (a zero-byte file
///    passes).
/// 2. `mime_type` must be on the allow-list.
///
/// # Errors
///
/// Returns [`Rejection::OversizeFile`] or [`Rejection::UnsupportedFormat`]
/// for the first rule the file breaks.
pub fn validate(file: &CandidateFile, constraints: &Constraints) -> Result<(), Rejection> {
    if file.size_bytes > constraints.max_size_bytes {
        return Err(Rejection::OversizeFile {
            limit: constraints.size_limit(),
        });
    }
    if !constraints.accepts_mime_type(&file.mime_type) {
        return Err(Rejection::UnsupportedFormat {
            formats: constraints.format_list(),
        });
    }
    Ok(())
}
