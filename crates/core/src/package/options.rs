//! Closed value sets offered by the package forms' select inputs.
//!
//! Each enum serializes to exactly the string the dashboard sends, and
//! exposes `VALUES` so the API can hand the options to the form.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tour type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TourType {
    #[serde(rename = "co-tour")]
    CoTour,
    #[serde(rename = "private")]
    Private,
}

impl TourType {
    pub const VALUES: &'static [&'static str] = &["co-tour", "private"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "co-tour" => Some(Self::CoTour),
            "private" => Some(Self::Private),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CoTour => "co-tour",
            Self::Private => "private",
        }
    }
}

// ---------------------------------------------------------------------------
// Transfer type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferType {
    Van,
    #[serde(rename = "Van + Ferry")]
    VanFerry,
    Private,
}

impl TransferType {
    pub const VALUES: &'static [&'static str] = &["Van", "Van + Ferry", "Private"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Van" => Some(Self::Van),
            "Van + Ferry" => Some(Self::VanFerry),
            "Private" => Some(Self::Private),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Van => "Van",
            Self::VanFerry => "Van + Ferry",
            Self::Private => "Private",
        }
    }

    /// Shared-seat transfers are priced per person and need head counts.
    pub fn is_shared(&self) -> bool {
        !matches!(self, Self::Private)
    }
}

// ---------------------------------------------------------------------------
// Period
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "Half-Day")]
    HalfDay,
    #[serde(rename = "Full-Day")]
    FullDay,
}

impl Period {
    pub const VALUES: &'static [&'static str] = &["Half-Day", "Full-Day"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Half-Day" => Some(Self::HalfDay),
            "Full-Day" => Some(Self::FullDay),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HalfDay => "Half-Day",
            Self::FullDay => "Full-Day",
        }
    }
}

// ---------------------------------------------------------------------------
// Pickup option
// ---------------------------------------------------------------------------

/// Who supplies the pickup point of a transfer: the operator (`admin`) fixes
/// it on the package, or the customer (`user`) enters it when booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickupOption {
    Admin,
    User,
}

impl PickupOption {
    pub const VALUES: &'static [&'static str] = &["admin", "user"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "user" => Some(Self::User),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// Legacy spelling sent by the tour edit form.
pub const LEGACY_BEST_SELLER: &str = "Best seller";

/// Marketing badge shown on the package card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Recommended,
    Popular,
    #[serde(rename = "Best Value")]
    BestValue,
    #[serde(rename = "Best Seller", alias = "Best seller")]
    BestSeller,
    #[serde(rename = "None")]
    Unlabeled,
}

impl Label {
    /// Canonical values, in the order the form lists them.
    pub const VALUES: &'static [&'static str] =
        &["Recommended", "Popular", "Best Value", "Best Seller", "None"];

    /// Parse a label, accepting [`LEGACY_BEST_SELLER`] for [`Label::BestSeller`].
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Recommended" => Some(Self::Recommended),
            "Popular" => Some(Self::Popular),
            "Best Value" => Some(Self::BestValue),
            "Best Seller" | LEGACY_BEST_SELLER => Some(Self::BestSeller),
            "None" => Some(Self::Unlabeled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recommended => "Recommended",
            Self::Popular => "Popular",
            Self::BestValue => "Best Value",
            Self::BestSeller => "Best Seller",
            Self::Unlabeled => "None",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tour_type_roundtrip() {
        for v in TourType::VALUES {
            assert_eq!(TourType::parse(v).unwrap().as_str(), *v);
        }
        assert!(TourType::parse("Private").is_none());
    }

    #[test]
    fn transfer_type_roundtrip() {
        for v in TransferType::VALUES {
            assert_eq!(TransferType::parse(v).unwrap().as_str(), *v);
        }
        assert!(TransferType::parse("private").is_none());
    }

    #[test]
    fn only_private_transfer_is_not_shared() {
        assert!(TransferType::Van.is_shared());
        assert!(TransferType::VanFerry.is_shared());
        assert!(!TransferType::Private.is_shared());
    }

    #[test]
    fn period_and_pickup_roundtrip() {
        for v in Period::VALUES {
            assert_eq!(Period::parse(v).unwrap().as_str(), *v);
        }
        for v in PickupOption::VALUES {
            assert_eq!(PickupOption::parse(v).unwrap().as_str(), *v);
        }
    }

    #[test]
    fn label_roundtrip() {
        for v in Label::VALUES {
            assert_eq!(Label::parse(v).unwrap().as_str(), *v);
        }
    }

    #[test]
    fn legacy_best_seller_maps_to_canonical() {
        let label = Label::parse(LEGACY_BEST_SELLER).unwrap();
        assert_eq!(label, Label::BestSeller);
        assert_eq!(label.as_str(), "Best Seller");
    }

    #[test]
    fn label_rejects_other_casings() {
        assert!(Label::parse("best seller").is_none());
        assert!(Label::parse("none").is_none());
    }

    #[test]
    fn serde_matches_form_strings() {
        assert_eq!(
            serde_json::to_value(TransferType::VanFerry).unwrap(),
            serde_json::json!("Van + Ferry")
        );
        assert_eq!(
            serde_json::to_value(Label::Unlabeled).unwrap(),
            serde_json::json!("None")
        );
        let legacy: Label = serde_json::from_value(serde_json::json!("Best seller")).unwrap();
        assert_eq!(legacy, Label::BestSeller);
    }
}
