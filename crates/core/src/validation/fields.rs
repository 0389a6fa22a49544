//! Per-field checks over a raw form snapshot.
//!
//! Form values arrive as loosely typed JSON: numbers may be strings, cleared
//! inputs may be `""` or `null`. Each check reads one field, coerces it,
//! records at most one error for its path and hands back the normalized
//! value. A `None` from a required check means an error was recorded; a
//! `None` from an optional check means the field is absent or failed, so
//! callers only assemble a typed draft once the error set is empty.

use serde_json::{Map, Value};
use validator::ValidateLength;

use super::rules::{ErrorSet, ROOT_PATH};
use crate::markup::stripped_len;
use crate::package::options::LEGACY_BEST_SELLER;
use crate::package::{FaqEntry, Label};
use crate::slug::is_valid_slug;

/// A JSON object being read, with the path prefix of its fields.
///
/// An absent record stands for a parent object that was missing or
/// malformed; that problem is already reported, so reads from it yield
/// nothing and record nothing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Record<'a> {
    fields: Option<&'a Map<String, Value>>,
    prefix: &'static str,
}

impl<'a> Record<'a> {
    fn get(&self, key: &str) -> Lookup<'a> {
        match self.fields {
            None => Lookup::Skipped,
            Some(fields) => match fields.get(key) {
                None | Some(Value::Null) => Lookup::Missing,
                Some(value) => Lookup::Found(value),
            },
        }
    }

    fn path(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

enum Lookup<'a> {
    Skipped,
    Missing,
    Found(&'a Value),
}

/// Text content of a scalar form value. Numbers count as text so that a
/// duration typed as `4` reads the same as `"4"`.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Accumulates per-field errors in evaluation order.
#[derive(Debug, Default)]
pub(crate) struct FieldChecker {
    errors: ErrorSet,
}

impl FieldChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> ErrorSet {
        self.errors
    }

    fn fail(&mut self, path: String, message: String) {
        self.errors.push(path, message);
    }

    /// Open the draft itself. Anything but a JSON object is a root error.
    pub fn root<'a>(&mut self, draft: &'a Value) -> Record<'a> {
        match draft {
            Value::Object(fields) => Record {
                fields: Some(fields),
                prefix: "",
            },
            _ => {
                self.fail(ROOT_PATH.to_string(), "Draft must be an object".to_string());
                Record {
                    fields: None,
                    prefix: "",
                }
            }
        }
    }

    /// Open a nested object field. Its fields are reported under `prefix`.
    pub fn object<'a>(
        &mut self,
        record: &Record<'a>,
        key: &str,
        label: &str,
        prefix: &'static str,
    ) -> Record<'a> {
        let fields = match record.get(key) {
            Lookup::Skipped => None,
            Lookup::Missing => {
                self.fail(record.path(key), format!("{label} are required"));
                None
            }
            Lookup::Found(Value::Object(fields)) => Some(fields),
            Lookup::Found(_) => {
                self.fail(record.path(key), format!("{label} must be an object"));
                None
            }
        };
        Record { fields, prefix }
    }

    /// Required plain text, trimmed, with a character-length window.
    pub fn text(
        &mut self,
        record: &Record<'_>,
        key: &str,
        label: &str,
        min: u64,
        max: Option<u64>,
    ) -> Option<String> {
        let path = record.path(key);
        let value = match record.get(key) {
            Lookup::Skipped => return None,
            Lookup::Missing => {
                self.fail(path, format!("{label} is required"));
                return None;
            }
            Lookup::Found(value) => value,
        };
        let Some(raw) = as_text(value) else {
            self.fail(path, format!("{label} must be text"));
            return None;
        };

        let text = raw.trim().to_string();
        if text.is_empty() && min > 0 {
            self.fail(path, format!("{label} is required"));
            return None;
        }
        if !text.validate_length(Some(min), None, None) {
            self.fail(path, format!("{label} must be at least {min} characters"));
            return None;
        }
        if let Some(max) = max {
            if !text.validate_length(None, Some(max), None) {
                self.fail(path, format!("{label} must be at most {max} characters"));
                return None;
            }
        }
        Some(text)
    }

    /// Optional plain text. Blank counts as absent.
    pub fn optional_text(&mut self, record: &Record<'_>, key: &str, label: &str) -> Option<String> {
        let Lookup::Found(value) = record.get(key) else {
            return None;
        };
        match as_text(value) {
            Some(raw) => {
                let text = raw.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
            None => {
                self.fail(record.path(key), format!("{label} must be text"));
                None
            }
        }
    }

    /// Optional slug. Absent or blank yields an empty slug; anything else is
    /// checked as written, surrounding spaces included.
    pub fn slug(&mut self, record: &Record<'_>, key: &str) -> Option<String> {
        let path = record.path(key);
        let slug = match record.get(key) {
            Lookup::Skipped => return None,
            Lookup::Missing => return Some(String::new()),
            Lookup::Found(Value::String(s)) if s.trim().is_empty() => String::new(),
            Lookup::Found(Value::String(s)) => s.clone(),
            Lookup::Found(_) => {
                self.fail(path, "Slug must be text".to_string());
                return None;
            }
        };
        if !is_valid_slug(&slug) {
            self.fail(
                path,
                "Slug may only contain lowercase letters, numbers and hyphens".to_string(),
            );
            return None;
        }
        Some(slug)
    }

    /// Required rich text measured on its stripped length. The markup is kept.
    pub fn rich_text(
        &mut self,
        record: &Record<'_>,
        key: &str,
        label: &str,
        min: usize,
    ) -> Option<String> {
        let path = record.path(key);
        let value = match record.get(key) {
            Lookup::Skipped => return None,
            Lookup::Missing => {
                self.fail(path, format!("{label} is required"));
                return None;
            }
            Lookup::Found(value) => value,
        };
        let Value::String(html) = value else {
            self.fail(path, format!("{label} must be text"));
            return None;
        };
        if stripped_len(html) < min {
            self.fail(path, format!("{label} must be at least {min} characters"));
            return None;
        }
        Some(html.clone())
    }

    /// Optional rich text. Content with no visible text counts as absent;
    /// otherwise the stripped length must reach `min`.
    pub fn optional_rich_text(
        &mut self,
        record: &Record<'_>,
        key: &str,
        label: &str,
        min: usize,
    ) -> Option<String> {
        let Lookup::Found(value) = record.get(key) else {
            return None;
        };
        let Value::String(html) = value else {
            self.fail(record.path(key), format!("{label} must be text"));
            return None;
        };
        match stripped_len(html) {
            0 => None,
            len if len < min => {
                self.fail(
                    record.path(key),
                    format!("{label} must be at least {min} characters"),
                );
                None
            }
            _ => Some(html.clone()),
        }
    }

    /// Required decimal, `>= min`. Numeric strings are coerced.
    pub fn number(&mut self, record: &Record<'_>, key: &str, label: &str, min: f64) -> Option<f64> {
        match record.get(key) {
            Lookup::Skipped => None,
            Lookup::Missing => {
                self.fail(record.path(key), format!("{label} is required"));
                None
            }
            Lookup::Found(value) => self.coerce_number(record, key, label, value, min, true),
        }
    }

    /// Optional decimal. `null` and `""` count as absent.
    pub fn optional_number(
        &mut self,
        record: &Record<'_>,
        key: &str,
        label: &str,
        min: f64,
    ) -> Option<f64> {
        match record.get(key) {
            Lookup::Found(value) => self.coerce_number(record, key, label, value, min, false),
            _ => None,
        }
    }

    /// Required whole number, `>= min`.
    pub fn integer(&mut self, record: &Record<'_>, key: &str, label: &str, min: u32) -> Option<u32> {
        let value = self.number(record, key, label, f64::from(min))?;
        self.whole(record, key, label, value)
    }

    /// Optional whole number, `>= min` when present.
    pub fn optional_integer(
        &mut self,
        record: &Record<'_>,
        key: &str,
        label: &str,
        min: u32,
    ) -> Option<u32> {
        let value = self.optional_number(record, key, label, f64::from(min))?;
        self.whole(record, key, label, value)
    }

    fn coerce_number(
        &mut self,
        record: &Record<'_>,
        key: &str,
        label: &str,
        value: &Value,
        min: f64,
        required: bool,
    ) -> Option<f64> {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) if s.trim().is_empty() => {
                if required {
                    self.fail(record.path(key), format!("{label} is required"));
                }
                return None;
            }
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        let Some(number) = parsed.filter(|n| n.is_finite()) else {
            self.fail(record.path(key), format!("{label} must be a number"));
            return None;
        };
        if number < min {
            self.fail(record.path(key), format!("{label} must be at least {min}"));
            return None;
        }
        Some(number)
    }

    fn whole(&mut self, record: &Record<'_>, key: &str, label: &str, value: f64) -> Option<u32> {
        if value.fract() != 0.0 {
            self.fail(record.path(key), format!("{label} must be a whole number"));
            return None;
        }
        if value > f64::from(u32::MAX) {
            self.fail(
                record.path(key),
                format!("{label} must be at most {}", u32::MAX),
            );
            return None;
        }
        // Range checked above; `min` is never negative.
        Some(value as u32)
    }

    /// Required member of a closed value set.
    pub fn choice<T>(
        &mut self,
        record: &Record<'_>,
        key: &str,
        label: &str,
        parse: fn(&str) -> Option<T>,
        allowed: &[&str],
    ) -> Option<T> {
        let path = record.path(key);
        let value = match record.get(key) {
            Lookup::Skipped => return None,
            Lookup::Missing => {
                self.fail(path, format!("{label} is required"));
                return None;
            }
            Lookup::Found(value) => value,
        };
        let parsed = value.as_str().and_then(parse);
        if parsed.is_none() {
            self.fail(
                path,
                format!("{label} must be one of: {}", allowed.join(", ")),
            );
        }
        parsed
    }

    /// The package badge. The legacy casing is accepted but logged so the
    /// form sending it can be found and fixed.
    pub fn label(&mut self, record: &Record<'_>, key: &str) -> Option<Label> {
        let label = self.choice(record, key, "Label", Label::parse, Label::VALUES)?;
        if let Lookup::Found(Value::String(raw)) = record.get(key) {
            if raw == LEGACY_BEST_SELLER {
                tracing::warn!(
                    field = %record.path(key),
                    value = %raw,
                    "Legacy label casing accepted; canonical form is 'Best Seller'"
                );
            }
        }
        Some(label)
    }

    /// Required list of non-blank text items, at least `min_items` long.
    /// Item errors are reported at `key.<index>`.
    pub fn text_list(
        &mut self,
        record: &Record<'_>,
        key: &str,
        label: &str,
        item_label: &str,
        min_items: usize,
    ) -> Option<Vec<String>> {
        let path = record.path(key);
        let items = match record.get(key) {
            Lookup::Skipped => return None,
            Lookup::Missing => {
                self.fail(path, format!("At least {min_items} {item_label} is required"));
                return None;
            }
            Lookup::Found(Value::Array(items)) => items,
            Lookup::Found(_) => {
                self.fail(path, format!("{label} must be a list"));
                return None;
            }
        };
        if items.len() < min_items {
            self.fail(path, format!("At least {min_items} {item_label} is required"));
            return None;
        }

        let mut out = Vec::with_capacity(items.len());
        let mut ok = true;
        for (index, item) in items.iter().enumerate() {
            match as_text(item).map(|s| s.trim().to_string()) {
                Some(text) if !text.is_empty() => out.push(text),
                _ => {
                    self.fail(
                        format!("{path}.{index}"),
                        format!("{item_label} must not be empty"),
                    );
                    ok = false;
                }
            }
        }
        ok.then_some(out)
    }

    /// FAQ entries. An absent list is empty; entry texts may be blank here,
    /// completeness is judged separately.
    pub fn faq(&mut self, record: &Record<'_>, key: &str) -> Option<Vec<FaqEntry>> {
        let path = record.path(key);
        let items = match record.get(key) {
            Lookup::Skipped => return None,
            Lookup::Missing => return Some(Vec::new()),
            Lookup::Found(Value::Array(items)) => items,
            Lookup::Found(_) => {
                self.fail(path, "FAQ must be a list".to_string());
                return None;
            }
        };

        let mut out = Vec::with_capacity(items.len());
        let mut ok = true;
        for (index, item) in items.iter().enumerate() {
            let entry_path = format!("{path}.{index}");
            let Value::Object(fields) = item else {
                self.fail(
                    entry_path,
                    "FAQ entry must have a question and an answer".to_string(),
                );
                ok = false;
                continue;
            };
            let question = self.faq_text(fields, &entry_path, "question", "Question");
            let answer = self.faq_text(fields, &entry_path, "answer", "Answer");
            match (question, answer) {
                (Some(question), Some(answer)) => out.push(FaqEntry { question, answer }),
                _ => ok = false,
            }
        }
        ok.then_some(out)
    }

    fn faq_text(
        &mut self,
        fields: &Map<String, Value>,
        entry_path: &str,
        key: &str,
        label: &str,
    ) -> Option<String> {
        match fields.get(key) {
            None | Some(Value::Null) => Some(String::new()),
            Some(Value::String(s)) => Some(s.trim().to_string()),
            Some(_) => {
                self.fail(format!("{entry_path}.{key}"), format!("{label} must be text"));
                None
            }
        }
    }
}
