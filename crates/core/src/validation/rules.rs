//! Validation error types.

use serde::{Deserialize, Serialize};

/// Path reported for problems with the draft as a whole (e.g. not an object).
pub const ROOT_PATH: &str = "";

/// A single rule violation, tagged with the dotted path of the offending
/// field (`title`, `details.about`, `tags.0`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

/// Ordered violations from one validation pass.
///
/// Holds at most one error per path: the first rule to fail on a field wins
/// and later rules on the same path are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("draft has {} invalid field(s)", .errors.len())]
pub struct ErrorSet {
    errors: Vec<FieldError>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation. Returns `false` if `path` already had one.
    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) -> bool {
        let path = path.into();
        if self.contains(&path) {
            return false;
        }
        self.errors.push(FieldError {
            path,
            message: message.into(),
        });
        true
    }

    /// Append every error of `other` not shadowed by one already recorded.
    pub fn merge(&mut self, other: ErrorSet) {
        for error in other.errors {
            self.push(error.path, error.message);
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }

    /// Message recorded for `path`, if any.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.message.as_str())
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
