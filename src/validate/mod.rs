//! Advisory range validation for applicant fields.
//!
//! Warnings surfaced here are display-only: they never mutate the form and
//! never gate the predict action. Out-of-range numeric values still reach
//! the model; only the prediction engine's completeness and coercion checks
//! can stop a request.

use crate::features::{ApplicantForm, FieldBounds, FIELD_BOUNDS};
use std::fmt;

/// Classification of an advisory validation warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Value parsed but falls outside the field's inclusive bounds.
    OutOfRange,
    /// Value is non-empty but not numeric.
    NonNumeric,
}

/// A field-scoped advisory warning.
///
/// Display text mirrors the original form's wording.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    /// Field the warning applies to.
    pub field: &'static str,
    /// What went wrong.
    pub kind: WarningKind,
    /// Inclusive lower bound for the field.
    pub min: f32,
    /// Inclusive upper bound for the field.
    pub max: f32,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::OutOfRange => write!(
                f,
                "Please enter a valid numeric value between {} and {} for {}.",
                self.min, self.max, self.field
            ),
            WarningKind::NonNumeric => write!(
                f,
                "Invalid input for {}. Please enter a valid numeric value.",
                self.field
            ),
        }
    }
}

/// Validates one raw value against inclusive bounds.
///
/// - Empty value: no warning (treated as "not yet entered").
/// - Unparseable value: [`WarningKind::NonNumeric`].
/// - Parsed value outside `[min, max]`: [`WarningKind::OutOfRange`].
/// - Otherwise: no warning.
///
/// # Examples
///
/// ```
/// use admitir::validate::validate_range;
///
/// assert!(validate_range("320", 260.0, 340.0, "GRE Score").is_none());
/// assert!(validate_range("259", 260.0, 340.0, "GRE Score").is_some());
/// assert!(validate_range("", 260.0, 340.0, "GRE Score").is_none());
/// ```
#[must_use]
pub fn validate_range(value: &str, min: f32, max: f32, field: &'static str) -> Option<Warning> {
    if value.is_empty() {
        return None;
    }

    let Ok(numeric) = value.parse::<f32>() else {
        return Some(Warning {
            field,
            kind: WarningKind::NonNumeric,
            min,
            max,
        });
    };

    if numeric >= min && numeric <= max {
        None
    } else {
        Some(Warning {
            field,
            kind: WarningKind::OutOfRange,
            min,
            max,
        })
    }
}

/// Validates every field of the form against the authoritative bounds table.
///
/// Returns the warnings in column order; an empty vector means nothing to
/// display. The result carries no control-flow weight.
#[must_use]
pub fn validate_form(form: &ApplicantForm) -> Vec<Warning> {
    FIELD_BOUNDS
        .iter()
        .zip(form.fields())
        .filter_map(|(bounds, (_, value))| validate_field(value, bounds))
        .collect()
}

fn validate_field(value: &str, bounds: &FieldBounds) -> Option<Warning> {
    if let Some(warning) = validate_range(value, bounds.min, bounds.max, bounds.name) {
        return Some(warning);
    }

    // A binary field accepts only its two bound values; anything strictly
    // between them (e.g. Research = 0.5) is out of range.
    if bounds.binary {
        if let Ok(numeric) = value.parse::<f32>() {
            if numeric != bounds.min && numeric != bounds.max {
                return Some(Warning {
                    field: bounds.name,
                    kind: WarningKind::OutOfRange,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
    }

    None
}
