//! Form validation
//!
//! Pure validators over [`FormState`]. Each field is checked independently
//! and the first applicable rule wins: a required-but-empty field fails the
//! required check and nothing else is evaluated for it; otherwise the single
//! pattern/length rule of the field's kind applies (empty values are exempt
//! from pattern checks).

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::field::FieldKind;
use crate::form::{FieldPatch, FormState};
use crate::messages;

/// Letters (incl. accented vowels and ñ/Ñ) and spaces only.
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-zÁÉÍÓÚáéíóúñÑ ]+$").unwrap());

/// Exactly 10 decimal digits (submit-time phone rule).
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// Up to 10 decimal digits (live phone rule, while typing).
static PHONE_PARTIAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{0,10}$").unwrap());

/// One `@` with no surrounding whitespace and at least one `.` after it.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Outcome of checking a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCheck {
    pub valid: bool,
    pub message: Option<String>,
}

impl FieldCheck {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            valid: false,
            message: Some(message.to_string()),
        }
    }
}

/// Aggregated outcome of validating a whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub overall_valid: bool,
    /// Per-field result, keyed by unprefixed field name.
    pub fields: HashMap<String, FieldCheck>,
    /// UI changes to apply, in the form's declaration order.
    pub patches: Vec<FieldPatch>,
}

/// Validates every field of the form for submission.
///
/// The report is a pure function of the form's values: running it twice on
/// an unchanged form yields the same result.
pub fn validate(form: &FormState) -> ValidationReport {
    let mut fields = HashMap::new();
    let mut patches = Vec::new();
    let mut overall_valid = true;

    for field in form.fields() {
        let check = validate_field(field.spec.kind, field.spec.required, &field.value);
        let id = form.field_id(&field.spec.name);
        let patch = match &check.message {
            Some(msg) => FieldPatch::fail(id, msg.clone()),
            None => FieldPatch::ok(id),
        };
        overall_valid &= check.valid;
        fields.insert(field.spec.name.clone(), check);
        patches.push(patch);
    }

    if !overall_valid {
        tracing::debug!(prefix = form.prefix(), "form failed validation");
    }

    ValidationReport {
        overall_valid,
        fields,
        patches,
    }
}

/// Submit-time rule for a single field.
pub fn validate_field(kind: FieldKind, required: bool, value: &str) -> FieldCheck {
    if required && value.trim().is_empty() {
        return FieldCheck::fail(messages::REQUIRED);
    }
    if value.is_empty() {
        return FieldCheck::ok();
    }

    match kind {
        FieldKind::PersonName if !NAME_RE.is_match(value) => {
            FieldCheck::fail(messages::LETTERS_ONLY)
        }
        FieldKind::Phone if !PHONE_RE.is_match(value) => {
            FieldCheck::fail(messages::PHONE_TEN_DIGITS)
        }
        FieldKind::Salary => validate_salary(value),
        FieldKind::Email if !EMAIL_RE.is_match(value) => FieldCheck::fail(messages::EMAIL_INVALID),
        _ => FieldCheck::ok(),
    }
}

/// Live (per-keystroke) rule for a single field. Phone tolerates partial
/// input here; everything else matches the submit-time rule.
pub fn validate_field_live(kind: FieldKind, value: &str) -> FieldCheck {
    if value.is_empty() {
        return FieldCheck::ok();
    }
    match kind {
        FieldKind::Phone => {
            if PHONE_PARTIAL_RE.is_match(value) {
                FieldCheck::ok()
            } else {
                FieldCheck::fail(messages::PHONE_DIGITS_ONLY)
            }
        }
        other => validate_field(other, false, value),
    }
}

// Sign and decimal point count toward the 10-character cap; the raw string
// length is authoritative, not the numeric magnitude.
fn validate_salary(value: &str) -> FieldCheck {
    let number: f64 = value.parse().unwrap_or(f64::NAN);
    if number < 0.0 {
        FieldCheck::fail(messages::SALARY_NEGATIVE)
    } else if value.len() > 10 {
        FieldCheck::fail(messages::SALARY_MAX_DIGITS)
    } else {
        FieldCheck::ok()
    }
}
