//! Per-kind field layout: which fields a draft has, their rules and the
//! order they are checked in (common fields first, then kind-specific ones).

use serde_json::Value;

use super::fields::{FieldChecker, Record};
use super::refinement::{apply_refinements, TOUR_REFINEMENTS, TRANSFER_REFINEMENTS};
use super::rules::{ErrorSet, ROOT_PATH};
use crate::package::{
    FaqEntry, Label, PackageKind, Period, PickupOption, TourDetails, TourDraft, TourType,
    TransferDetails, TransferDraft, TransferType,
};
use crate::slug::generate_slug;

pub const TITLE_MIN: u64 = 20;
pub const TITLE_MAX: u64 = 100;
pub const TOUR_DESCRIPTION_MIN: u64 = 50;
pub const TOUR_DESCRIPTION_MAX: u64 = 110;
pub const LONG_RICH_TEXT_MIN: usize = 100;
pub const SHORT_RICH_TEXT_MIN: usize = 10;
pub const PICKUP_GUIDELINES_MIN: usize = 15;
pub const ROUTE_END_MIN: u64 = 2;

/// Fields shared by both kinds, as read from the form.
struct Common {
    title: Option<String>,
    slug: Option<String>,
    image: Option<String>,
    tags: Option<Vec<String>>,
    description: Option<String>,
    duration: Option<String>,
    booked_count: Option<u32>,
    old_price: Option<f64>,
    new_price: Option<f64>,
    child_price: Option<f64>,
    minimum_person: Option<u32>,
    maximum_person: Option<u32>,
    vehicle: Option<String>,
    departure_times: Option<Vec<String>>,
    label: Option<Label>,
    about: Option<String>,
    itinerary: Option<String>,
    note: Option<String>,
    pickup_guidelines: Option<String>,
    faq: Option<Vec<FaqEntry>>,
}

impl Common {
    /// An empty slug is filled from the title.
    fn resolved_slug(&self) -> Option<String> {
        match (self.slug.as_deref(), self.title.as_deref()) {
            (Some(""), Some(title)) => Some(generate_slug(title)),
            (slug, _) => slug.map(str::to_string),
        }
    }
}

/// Read the common fields, opening `details` after the top-level ones.
/// The details record is returned for the kind-specific fields.
fn read_common<'a>(
    c: &mut FieldChecker,
    root: &Record<'a>,
    kind: PackageKind,
) -> (Common, Record<'a>) {
    let (description_min, description_max) = match kind {
        PackageKind::Tour => (TOUR_DESCRIPTION_MIN, Some(TOUR_DESCRIPTION_MAX)),
        PackageKind::Transfer => (1, None),
    };
    // Tours always carry per-person pricing; transfers only when shared,
    // which the refinements enforce once the type is known.
    let per_person_required = kind == PackageKind::Tour;

    let title = c.text(root, "title", "Title", TITLE_MIN, Some(TITLE_MAX));
    let slug = c.slug(root, "slug");
    let image = c.text(root, "image", "Image", 1, None);
    let tags = c.text_list(root, "tags", "Tags", "tag", 1);
    let description = c.text(
        root,
        "description",
        "Description",
        description_min,
        description_max,
    );
    let duration = c.text(root, "duration", "Duration", 1, None);
    let booked_count = c.integer(root, "bookedCount", "Booked count", 0);
    let old_price = c.number(root, "oldPrice", "Old price", 0.0);
    let new_price = c.number(root, "newPrice", "New price", 0.0);
    let (child_price, minimum_person, maximum_person) = if per_person_required {
        (
            c.number(root, "childPrice", "Child price", 0.0),
            c.integer(root, "minimumPerson", "Minimum person", 1),
            c.integer(root, "maximumPerson", "Maximum person", 1),
        )
    } else {
        (
            c.optional_number(root, "childPrice", "Child price", 0.0),
            c.optional_integer(root, "minimumPerson", "Minimum person", 1),
            c.optional_integer(root, "maximumPerson", "Maximum person", 1),
        )
    };
    let vehicle = c.optional_text(root, "vehicle", "Vehicle");
    let departure_times = c.text_list(
        root,
        "departureTimes",
        "Departure times",
        "departure time",
        1,
    );
    let label = c.label(root, "label");

    let details = c.object(root, "details", "Details", "details.");
    let about = c.rich_text(&details, "about", "About", LONG_RICH_TEXT_MIN);
    let itinerary = c.rich_text(&details, "itinerary", "Itinerary", LONG_RICH_TEXT_MIN);
    let note = c.rich_text(&details, "note", "Note", SHORT_RICH_TEXT_MIN);
    let pickup_guidelines = c.optional_rich_text(
        &details,
        "pickupGuidelines",
        "Pickup guidelines",
        PICKUP_GUIDELINES_MIN,
    );
    let faq = c.faq(&details, "faq");

    let common = Common {
        title,
        slug,
        image,
        tags,
        description,
        duration,
        booked_count,
        old_price,
        new_price,
        child_price,
        minimum_person,
        maximum_person,
        vehicle,
        departure_times,
        label,
        about,
        itinerary,
        note,
        pickup_guidelines,
        faq,
    };
    (common, details)
}

/// Reported if a clean checker still failed to produce a value, which would
/// mean a field is read as optional but assembled as required.
fn incomplete() -> ErrorSet {
    let mut errors = ErrorSet::new();
    errors.push(ROOT_PATH, "Draft is incomplete");
    errors
}

/// Field rules, then refinements, for a tour draft.
pub fn check_tour(draft: &Value) -> Result<TourDraft, ErrorSet> {
    let mut c = FieldChecker::new();
    let root = c.root(draft);

    let (common, details) = read_common(&mut c, &root, PackageKind::Tour);
    let tour_type = c.choice(&root, "type", "Type", TourType::parse, TourType::VALUES);
    let period = c.choice(&root, "period", "Period", Period::parse, Period::VALUES);
    let pickup_location = c.rich_text(
        &details,
        "pickupLocation",
        "Pickup location",
        SHORT_RICH_TEXT_MIN,
    );

    if !c.is_clean() {
        return Err(c.into_errors());
    }

    let slug = common.resolved_slug();
    let tour = (move || {
        Some(TourDraft {
            title: common.title?,
            slug: slug?,
            image: common.image?,
            tags: common.tags?,
            description: common.description?,
            duration: common.duration?,
            booked_count: common.booked_count?,
            old_price: common.old_price?,
            new_price: common.new_price?,
            child_price: common.child_price?,
            minimum_person: common.minimum_person?,
            maximum_person: common.maximum_person?,
            vehicle: common.vehicle,
            departure_times: common.departure_times?,
            label: common.label?,
            tour_type: tour_type?,
            period: period?,
            details: TourDetails {
                about: common.about?,
                itinerary: common.itinerary?,
                note: common.note?,
                pickup_guidelines: common.pickup_guidelines,
                faq: common.faq?,
                pickup_location: pickup_location?,
            },
        })
    })()
    .ok_or_else(incomplete)?;

    let mut errors = ErrorSet::new();
    apply_refinements(&tour, TOUR_REFINEMENTS, &mut errors);
    if errors.is_empty() {
        Ok(tour)
    } else {
        Err(errors)
    }
}

/// Field rules, then refinements, for a transfer draft.
pub fn check_transfer(draft: &Value) -> Result<TransferDraft, ErrorSet> {
    let mut c = FieldChecker::new();
    let root = c.root(draft);

    let (common, details) = read_common(&mut c, &root, PackageKind::Transfer);
    let transfer_type = c.choice(
        &root,
        "type",
        "Type",
        TransferType::parse,
        TransferType::VALUES,
    );
    let from = c.text(&root, "from", "Origin", ROUTE_END_MIN, None);
    let to = c.text(&root, "to", "Destination", ROUTE_END_MIN, None);
    let seat_capacity = c.integer(&root, "seatCapacity", "Seat capacity", 1);
    let pickup_option = c.choice(
        &details,
        "pickupOption",
        "Pickup option",
        PickupOption::parse,
        PickupOption::VALUES,
    );
    let pickup_location = c.optional_text(&details, "pickupLocation", "Pickup location");
    let drop_off_location = c.optional_text(&details, "dropOffLocation", "Drop-off location");

    if !c.is_clean() {
        return Err(c.into_errors());
    }

    let slug = common.resolved_slug();
    let transfer = (move || {
        Some(TransferDraft {
            title: common.title?,
            slug: slug?,
            image: common.image?,
            tags: common.tags?,
            description: common.description?,
            duration: common.duration?,
            booked_count: common.booked_count?,
            old_price: common.old_price?,
            new_price: common.new_price?,
            child_price: common.child_price,
            minimum_person: common.minimum_person,
            maximum_person: common.maximum_person,
            vehicle: common.vehicle,
            departure_times: common.departure_times?,
            label: common.label?,
            transfer_type: transfer_type?,
            from: from?,
            to: to?,
            seat_capacity: seat_capacity?,
            details: TransferDetails {
                about: common.about?,
                itinerary: common.itinerary?,
                note: common.note?,
                pickup_guidelines: common.pickup_guidelines,
                faq: common.faq?,
                pickup_option: pickup_option?,
                pickup_location,
                drop_off_location,
            },
        })
    })()
    .ok_or_else(incomplete)?;

    let mut errors = ErrorSet::new();
    apply_refinements(&transfer, TRANSFER_REFINEMENTS, &mut errors);
    if errors.is_empty() {
        Ok(transfer)
    } else {
        Err(errors)
    }
}
