//! Package draft validation.
//!
//! Validation runs in two phases:
//!
//! 1. The **schema pass** ([`validate`]): per-field rules for every field,
//!    then, only if all of them pass, the kind's ordered cross-field
//!    refinements.
//! 2. The **completeness pass**: at least one FAQ entry must have both a
//!    question and an answer.
//!
//! [`validate_draft`] runs both and returns one error set; it is what forms
//! and the API call. Everything here is pure and never panics on input.

pub mod fields;
pub mod refinement;
pub mod rules;
pub mod schema;

#[cfg(test)]
pub(crate) mod fixtures;

use serde_json::Value;

use crate::package::{PackageKind, ValidDraft};

pub use rules::{ErrorSet, FieldError, ROOT_PATH};

/// Path the completeness pass reports on.
pub const FAQ_PATH: &str = "details.faq";

pub const FAQ_INCOMPLETE_MESSAGE: &str =
    "At least one FAQ entry needs both a question and an answer";

/// Schema pass: per-field rules, then cross-field refinements.
///
/// On success the draft comes back normalized: numbers coerced, plain text
/// trimmed, an empty slug derived from the title.
pub fn validate(kind: PackageKind, draft: &Value) -> Result<ValidDraft, ErrorSet> {
    let result = match kind {
        PackageKind::Tour => schema::check_tour(draft).map(ValidDraft::Tour),
        PackageKind::Transfer => schema::check_transfer(draft).map(ValidDraft::Transfer),
    };
    match &result {
        Ok(_) => tracing::debug!(%kind, "Schema pass succeeded"),
        Err(errors) => tracing::debug!(
            %kind,
            error_count = errors.len(),
            fields = ?errors.paths().collect::<Vec<_>>(),
            "Schema pass failed"
        ),
    }
    result
}

/// Whether the raw draft has at least one FAQ entry with a non-blank
/// question and a non-blank answer.
pub fn faq_is_complete(draft: &Value) -> bool {
    let text = |entry: &Value, key: &str| {
        entry
            .get(key)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty())
    };
    draft
        .pointer("/details/faq")
        .and_then(Value::as_array)
        .is_some_and(|entries| {
            entries
                .iter()
                .any(|entry| text(entry, "question") && text(entry, "answer"))
        })
}

/// Both phases. Errors from the completeness pass join the schema errors;
/// a valid draft keeps only its complete FAQ entries.
pub fn validate_draft(kind: PackageKind, draft: &Value) -> Result<ValidDraft, ErrorSet> {
    let schema = validate(kind, draft);

    let mut completeness = ErrorSet::new();
    if !faq_is_complete(draft) {
        tracing::debug!(%kind, "Completeness pass failed: no complete FAQ entry");
        completeness.push(FAQ_PATH, FAQ_INCOMPLETE_MESSAGE);
    }

    match schema {
        Ok(mut valid) if completeness.is_empty() => {
            valid.retain_complete_faqs();
            tracing::debug!(
                kind = %valid.kind(),
                faq_entries = valid.faq().len(),
                "Draft passed both phases"
            );
            Ok(valid)
        }
        Ok(_) => Err(completeness),
        Err(mut errors) => {
            errors.merge(completeness);
            Err(errors)
        }
    }
}
