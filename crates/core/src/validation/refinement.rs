//! Cross-field rules, run only on drafts whose individual fields are valid.
//!
//! Each kind has a fixed, ordered table of refinements. Every entry is
//! evaluated and every failure is reported against the entry's path, which
//! need not be the field that caused it (a bad minimum is reported on the
//! maximum).

use super::rules::ErrorSet;
use crate::markup::stripped_len;
use crate::package::{PickupOption, TourDraft, TourType, TransferDraft, TransferType};

/// One cross-field rule: if `holds` is false, `message` is reported at `path`.
pub struct Refinement<T> {
    pub path: &'static str,
    pub message: &'static str,
    pub holds: fn(&T) -> bool,
}

/// Evaluate `refinements` in order, appending failures to `errors`.
pub fn apply_refinements<T>(draft: &T, refinements: &[Refinement<T>], errors: &mut ErrorSet) {
    for refinement in refinements {
        if !(refinement.holds)(draft) {
            errors.push(refinement.path, refinement.message);
        }
    }
}

pub const TOUR_REFINEMENTS: &[Refinement<TourDraft>] = &[
    Refinement {
        path: "newPrice",
        message: "New price must be less than or equal to the old price",
        holds: |t| t.new_price <= t.old_price,
    },
    Refinement {
        path: "maximumPerson",
        message: "Maximum person must be greater than minimum person",
        holds: |t| t.tour_type == TourType::Private || t.maximum_person > t.minimum_person,
    },
    Refinement {
        path: "vehicle",
        message: "Vehicle is required for private tours",
        holds: |t| {
            t.tour_type != TourType::Private
                || t.vehicle.as_deref().is_some_and(|v| !v.trim().is_empty())
        },
    },
];

pub const TRANSFER_REFINEMENTS: &[Refinement<TransferDraft>] = &[
    Refinement {
        path: "newPrice",
        message: "New price must be less than or equal to the old price",
        holds: |t| t.new_price <= t.old_price,
    },
    Refinement {
        path: "childPrice",
        message: "Child price is required for shared transfers",
        holds: |t| !t.transfer_type.is_shared() || t.child_price.is_some(),
    },
    Refinement {
        path: "minimumPerson",
        message: "Minimum person is required for shared transfers",
        holds: |t| !t.transfer_type.is_shared() || t.minimum_person.is_some(),
    },
    Refinement {
        path: "maximumPerson",
        message: "Maximum person is required for shared transfers",
        holds: |t| !t.transfer_type.is_shared() || t.maximum_person.is_some(),
    },
    Refinement {
        path: "maximumPerson",
        message: "Maximum person must be greater than minimum person",
        holds: |t| match (t.transfer_type.is_shared(), t.minimum_person, t.maximum_person) {
            (true, Some(min), Some(max)) => max > min,
            _ => true,
        },
    },
    Refinement {
        path: "to",
        message: "Destination must differ from the origin",
        holds: |t| t.from.to_lowercase() != t.to.to_lowercase(),
    },
    Refinement {
        path: "details.pickupGuidelines",
        message: "Pickup guidelines must be at least 15 characters",
        holds: |t| {
            t.details
                .pickup_guidelines
                .as_deref()
                .is_some_and(|g| stripped_len(g) >= 15)
        },
    },
    Refinement {
        path: "details.pickupLocation",
        message: "Pickup location must be at least 10 characters when the operator sets it",
        holds: |t| {
            t.details.pickup_option != PickupOption::Admin
                || t.details
                    .pickup_location
                    .as_deref()
                    .is_some_and(|l| stripped_len(l) >= 10)
        },
    },
    Refinement {
        path: "vehicle",
        message: "Vehicle must be at least 2 characters for private transfers",
        holds: |t| {
            t.transfer_type != TransferType::Private
                || t.vehicle.as_deref().is_some_and(|v| stripped_len(v) >= 2)
        },
    },
];
