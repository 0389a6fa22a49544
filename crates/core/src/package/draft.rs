//! Typed, normalized package drafts.
//!
//! Values of these types only come out of the validator, so every field
//! already satisfies its per-field rules. Field names serialize in the
//! camelCase the dashboard and the REST backend use.

use serde::{Deserialize, Serialize};

use super::options::{Label, Period, PickupOption, TourType, TransferType};
use super::PackageKind;

/// One question/answer pair shown in the package FAQ accordion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    /// Both the question and the answer carry visible text.
    pub fn is_complete(&self) -> bool {
        !self.question.trim().is_empty() && !self.answer.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDetails {
    pub about: String,
    pub itinerary: String,
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_guidelines: Option<String>,
    pub faq: Vec<FaqEntry>,
    pub pickup_location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDraft {
    pub title: String,
    pub slug: String,
    pub image: String,
    pub tags: Vec<String>,
    pub description: String,
    pub duration: String,
    pub booked_count: u32,
    pub old_price: f64,
    pub new_price: f64,
    pub child_price: f64,
    pub minimum_person: u32,
    pub maximum_person: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    pub departure_times: Vec<String>,
    pub label: Label,
    #[serde(rename = "type")]
    pub tour_type: TourType,
    pub period: Period,
    pub details: TourDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferDetails {
    pub about: String,
    pub itinerary: String,
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_guidelines: Option<String>,
    pub faq: Vec<FaqEntry>,
    pub pickup_option: PickupOption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_off_location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferDraft {
    pub title: String,
    pub slug: String,
    pub image: String,
    pub tags: Vec<String>,
    pub description: String,
    pub duration: String,
    pub booked_count: u32,
    pub old_price: f64,
    pub new_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_person: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_person: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    pub departure_times: Vec<String>,
    pub label: Label,
    #[serde(rename = "type")]
    pub transfer_type: TransferType,
    pub from: String,
    pub to: String,
    pub seat_capacity: u32,
    pub details: TransferDetails,
}

/// A draft that passed validation, ready to be sent to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ValidDraft {
    Tour(TourDraft),
    Transfer(TransferDraft),
}

impl ValidDraft {
    pub fn kind(&self) -> PackageKind {
        match self {
            Self::Tour(_) => PackageKind::Tour,
            Self::Transfer(_) => PackageKind::Transfer,
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            Self::Tour(t) => &t.slug,
            Self::Transfer(t) => &t.slug,
        }
    }

    pub fn faq(&self) -> &[FaqEntry] {
        match self {
            Self::Tour(t) => &t.details.faq,
            Self::Transfer(t) => &t.details.faq,
        }
    }

    /// Drop FAQ entries that are missing a question or an answer.
    pub fn retain_complete_faqs(&mut self) {
        let faq = match self {
            Self::Tour(t) => &mut t.details.faq,
            Self::Transfer(t) => &mut t.details.faq,
        };
        faq.retain(FaqEntry::is_complete);
    }
}
