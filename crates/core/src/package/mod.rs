//! Package kinds, the enumerations their forms select from, and the typed
//! drafts the validator produces.

pub mod draft;
pub mod options;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub use draft::{FaqEntry, TourDetails, TourDraft, TransferDetails, TransferDraft, ValidDraft};
pub use options::{Label, Period, PickupOption, TourType, TransferType};

/// The two kinds of bookable package managed by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    Tour,
    Transfer,
}

impl PackageKind {
    pub const ALL: [PackageKind; 2] = [PackageKind::Tour, PackageKind::Transfer];

    /// Parse a kind tag as used in routes and form state.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "tour" => Ok(Self::Tour),
            "transfer" => Ok(Self::Transfer),
            _ => Err(CoreError::UnknownKind(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tour => "tour",
            Self::Transfer => "transfer",
        }
    }

    /// Allowed values of the `type` field for this kind.
    pub fn type_options(&self) -> &'static [&'static str] {
        match self {
            Self::Tour => TourType::VALUES,
            Self::Transfer => TransferType::VALUES,
        }
    }
}

impl std::str::FromStr for PackageKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for PackageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn kind_parse_roundtrip() {
        for kind in PackageKind::ALL {
            assert_eq!(PackageKind::parse(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn kind_parse_rejects_unknown() {
        assert_matches!(PackageKind::parse("blog"), Err(CoreError::UnknownKind(k)) if k == "blog");
        assert!(PackageKind::parse("Tour").is_err());
        assert!(PackageKind::parse("").is_err());
    }

    #[test]
    fn kind_type_options() {
        assert_eq!(PackageKind::Tour.type_options(), &["co-tour", "private"]);
        assert_eq!(
            PackageKind::Transfer.type_options(),
            &["Van", "Van + Ferry", "Private"]
        );
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(PackageKind::Transfer).unwrap(),
            serde_json::json!("transfer")
        );
    }
}
