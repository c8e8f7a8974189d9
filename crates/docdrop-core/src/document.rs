//! Identity document types offered next to the upload zone.
//!
//! The selected type is carried into the submission as metadata only;
//! it has no influence on validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of identity document the user is uploading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Aadhaar card.
    #[default]
    Aadhaar,
    /// Permanent Account Number card.
    Pan,
}

impl DocumentType {
    /// All document types in dropdown order.
    pub const ALL: [Self; 2] = [Self::Aadhaar, Self::Pan];

    /// Form value used for the `<option value=...>` attribute.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Aadhaar => "aadhaar",
            Self::Pan => "pan",
        }
    }

    /// Display label shown in the dropdown.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aadhaar => "Aadhaar Card",
            Self::Pan => "PAN Card",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown document type value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document type: {0:?}")]
pub struct UnknownDocumentType(pub String);

impl FromStr for DocumentType {
    type Err = UnknownDocumentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.value() == s)
            .ok_or_else(|| UnknownDocumentType(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_has_two_fixed_options() {
        let options: Vec<_> = DocumentType::ALL
            .iter()
            .map(|t| (t.value(), t.label()))
            .collect();
        assert_eq!(
            options,
            vec![("aadhaar", "Aadhaar Card"), ("pan", "PAN Card")]
        );
    }

    #[test]
    fn default_is_first_option() {
        assert_eq!(DocumentType::default(), DocumentType::ALL[0]);
    }

    #[test]
    fn values_parse_back() {
        for t in DocumentType::ALL {
            assert_eq!(t.value().parse::<DocumentType>().unwrap(), t);
        }
        assert_eq!(
            "passport".parse::<DocumentType>(),
            Err(UnknownDocumentType("passport".into()))
        );
    }

    #[test]
    fn serde_uses_form_values() {
        assert_eq!(serde_json::to_string(&DocumentType::Pan).unwrap(), "\"pan\"");
        let t: DocumentType = serde_json::from_str("\"aadhaar\"").unwrap();
        assert_eq!(t, DocumentType::Aadhaar);
    }
}
