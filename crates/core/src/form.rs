//! Form state for creating or editing one package.
//!
//! Tracks when a validation result can be trusted. Any edit invalidates the
//! last result, and only a form whose current values were validated may be
//! submitted:
//!
//! ```text
//! Dirty ──validate──> Validating ──> Valid ──submit──> (cleared)
//!   ^                     │            │
//!   │                     └──> Invalid │
//!   └──── any edit ─────────────┴──────┘
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::package::{PackageKind, ValidDraft};
use crate::validation::{validate_draft, ErrorSet};

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    /// Edited since the last validation (or never validated).
    Dirty,
    /// A validation run is in progress.
    Validating,
    /// The current values passed validation.
    Valid,
    /// The current values failed validation.
    Invalid,
}

impl FormState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dirty => "dirty",
            Self::Validating => "validating",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        }
    }

    pub fn can_submit(&self) -> bool {
        *self == Self::Valid
    }
}

impl std::fmt::Display for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a state transition.
///
/// Edits move any settled state back to `Dirty`; validation may start from
/// any settled state and always ends in `Valid` or `Invalid`.
pub fn validate_transition(from: FormState, to: FormState) -> Result<(), CoreError> {
    use FormState::*;

    let allowed = matches!(
        (from, to),
        (Dirty | Valid | Invalid, Dirty)
            | (Dirty | Valid | Invalid, Validating)
            | (Validating, Valid | Invalid)
    );
    if allowed {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition { from, to })
    }
}

// ---------------------------------------------------------------------------
// Package form
// ---------------------------------------------------------------------------

/// In-memory draft of one tour or transfer form.
#[derive(Debug, Clone)]
pub struct PackageForm {
    kind: PackageKind,
    values: Value,
    state: FormState,
    errors: ErrorSet,
    validated: Option<ValidDraft>,
}

impl PackageForm {
    /// An empty form.
    pub fn new(kind: PackageKind) -> Self {
        Self::with_values(kind, Value::Object(Map::new()))
    }

    /// A form prefilled with existing values, as when editing a package.
    /// Prefilled values are not trusted until validated.
    pub fn with_values(kind: PackageKind, values: Value) -> Self {
        Self {
            kind,
            values,
            state: FormState::Dirty,
            errors: ErrorSet::new(),
            validated: None,
        }
    }

    pub fn kind(&self) -> PackageKind {
        self.kind
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn values(&self) -> &Value {
        &self.values
    }

    /// Errors from the last validation. Empty while dirty.
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// Value at a dotted path (`details.about`, `tags.0`).
    pub fn field(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.values, |value, segment| match value {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Set the value at a dotted path, creating intermediate objects.
    /// Numeric segments index into existing lists; an index one past the
    /// end appends.
    pub fn set_field(&mut self, path: &str, value: Value) -> Result<(), CoreError> {
        let invalid = || CoreError::Validation(format!("Invalid field path '{path}'"));
        let segments: Vec<&str> = path.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(invalid());
        }

        let (last, parents) = segments.split_last().ok_or_else(invalid)?;
        let mut target = &mut self.values;
        for segment in parents {
            if target.is_null() {
                *target = Value::Object(Map::new());
            }
            target = match target {
                Value::Object(map) => map
                    .entry(segment.to_string())
                    .or_insert_with(|| Value::Object(Map::new())),
                Value::Array(items) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| items.get_mut(i))
                    .ok_or_else(invalid)?,
                _ => return Err(invalid()),
            };
        }

        if target.is_null() {
            *target = Value::Object(Map::new());
        }
        match target {
            Value::Object(map) => {
                map.insert(last.to_string(), value);
            }
            Value::Array(items) => match last.parse::<usize>() {
                Ok(i) if i < items.len() => items[i] = value,
                Ok(i) if i == items.len() => items.push(value),
                _ => return Err(invalid()),
            },
            _ => return Err(invalid()),
        }

        self.mark_dirty()
    }

    /// Remove the value at a dotted path, returning it if it existed.
    pub fn remove_field(&mut self, path: &str) -> Result<Option<Value>, CoreError> {
        let (parent, last) = match path.rsplit_once('.') {
            Some((parent, last)) => (Some(parent), last),
            None => (None, path),
        };
        let container = match parent {
            Some(parent) => {
                let mut target = Some(&mut self.values);
                for segment in parent.split('.') {
                    target = target.and_then(|value| match value {
                        Value::Object(map) => map.get_mut(segment),
                        Value::Array(items) => {
                            segment.parse::<usize>().ok().and_then(|i| items.get_mut(i))
                        }
                        _ => None,
                    });
                }
                target
            }
            None => Some(&mut self.values),
        };

        let removed = match container {
            Some(Value::Object(map)) => map.remove(last),
            Some(Value::Array(items)) => match last.parse::<usize>() {
                Ok(i) if i < items.len() => Some(items.remove(i)),
                _ => None,
            },
            _ => None,
        };

        if removed.is_some() {
            self.mark_dirty()?;
        }
        Ok(removed)
    }

    /// Run both validation passes on the current values.
    pub fn validate(&mut self) -> Result<FormState, CoreError> {
        self.transition(FormState::Validating)?;

        let outcome = match validate_draft(self.kind, &self.values) {
            Ok(draft) => {
                self.errors = ErrorSet::new();
                self.validated = Some(draft);
                FormState::Valid
            }
            Err(errors) => {
                self.errors = errors;
                self.validated = None;
                FormState::Invalid
            }
        };

        self.transition(outcome)?;
        Ok(outcome)
    }

    /// Hand out the validated draft and clear the form.
    ///
    /// Rejected unless the current values were validated successfully.
    pub fn submit(&mut self) -> Result<ValidDraft, CoreError> {
        if !self.state.can_submit() {
            tracing::debug!(kind = %self.kind, state = %self.state, "Submit rejected");
            return Err(CoreError::NotValidated(self.state));
        }
        let draft = self
            .validated
            .take()
            .ok_or(CoreError::NotValidated(self.state))?;
        tracing::info!(kind = %self.kind, slug = %draft.slug(), "Draft submitted");
        self.clear();
        Ok(draft)
    }

    /// Discard all values and results.
    pub fn clear(&mut self) {
        *self = Self::new(self.kind);
    }

    fn mark_dirty(&mut self) -> Result<(), CoreError> {
        self.transition(FormState::Dirty)?;
        self.errors = ErrorSet::new();
        self.validated = None;
        Ok(())
    }

    fn transition(&mut self, to: FormState) -> Result<(), CoreError> {
        validate_transition(self.state, to)?;
        if self.state != to {
            tracing::trace!(kind = %self.kind, from = %self.state, %to, "Form state change");
        }
        self.state = to;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
