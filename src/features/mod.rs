//! Applicant form fields and the fixed-order feature row.
//!
//! The scaler and model artifacts were fit on one exact column order; the
//! types here pin that order statically so it cannot drift.

use crate::error::{AdmitirError, Result};

/// Number of applicant features.
pub const N_FEATURES: usize = 7;

/// Feature column names in the exact order the artifacts were fit on.
pub const FEATURE_COLUMNS: [&str; N_FEATURES] = [
    "GRE Score",
    "TOEFL Score",
    "University Rating",
    "SOP",
    "LOR",
    "CGPA",
    "Research",
];

/// Inclusive numeric bounds for one applicant field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    /// Field name, matching [`FEATURE_COLUMNS`].
    pub name: &'static str,
    /// Inclusive lower bound.
    pub min: f32,
    /// Inclusive upper bound.
    pub max: f32,
    /// Whether only the two bound values themselves are accepted
    /// (Research is a 0-or-1 flag, not a continuous range).
    pub binary: bool,
}

/// Authoritative per-field bounds, positionally aligned with [`FEATURE_COLUMNS`].
pub const FIELD_BOUNDS: [FieldBounds; N_FEATURES] = [
    FieldBounds {
        name: "GRE Score",
        min: 260.0,
        max: 340.0,
        binary: false,
    },
    FieldBounds {
        name: "TOEFL Score",
        min: 80.0,
        max: 120.0,
        binary: false,
    },
    FieldBounds {
        name: "University Rating",
        min: 1.0,
        max: 5.0,
        binary: false,
    },
    FieldBounds {
        name: "SOP",
        min: 1.0,
        max: 5.0,
        binary: false,
    },
    FieldBounds {
        name: "LOR",
        min: 1.0,
        max: 5.0,
        binary: false,
    },
    FieldBounds {
        name: "CGPA",
        min: 1.0,
        max: 10.0,
        binary: false,
    },
    FieldBounds {
        name: "Research",
        min: 0.0,
        max: 1.0,
        binary: true,
    },
];

/// Raw applicant inputs as captured from the form, one free-text string per
/// field. An empty string means "not yet entered", not invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicantForm {
    /// GRE Score (260-340)
    pub gre_score: String,
    /// TOEFL Score (80-120)
    pub toefl_score: String,
    /// University Rating (1-5)
    pub university_rating: String,
    /// Statement of Purpose strength (1-5)
    pub sop: String,
    /// Letter of Recommendation strength (1-5)
    pub lor: String,
    /// CGPA (1-10)
    pub cgpa: String,
    /// Research experience (0 or 1)
    pub research: String,
}

impl ApplicantForm {
    /// Returns `(column name, raw value)` pairs in artifact column order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); N_FEATURES] {
        [
            (FEATURE_COLUMNS[0], self.gre_score.as_str()),
            (FEATURE_COLUMNS[1], self.toefl_score.as_str()),
            (FEATURE_COLUMNS[2], self.university_rating.as_str()),
            (FEATURE_COLUMNS[3], self.sop.as_str()),
            (FEATURE_COLUMNS[4], self.lor.as_str()),
            (FEATURE_COLUMNS[5], self.cgpa.as_str()),
            (FEATURE_COLUMNS[6], self.research.as_str()),
        ]
    }
}

/// One applicant's attributes as a fixed-order numeric row.
///
/// Replaces the dynamic named-column construction of the original tool with
/// a statically ordered record, so column order can never drift from what
/// the artifacts expect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f32; N_FEATURES],
}

impl FeatureVector {
    /// Creates a feature row from already-numeric values in column order.
    #[must_use]
    pub fn new(values: [f32; N_FEATURES]) -> Self {
        Self { values }
    }

    /// Coerces a raw form into a feature row.
    ///
    /// Completeness is checked first across the whole form: any empty field
    /// fails with [`AdmitirError::IncompleteInput`] naming the first empty
    /// field, and no coercion happens. A non-empty field that fails `f32`
    /// parsing fails with [`AdmitirError::InvalidFeatureValue`] so that no
    /// NaN ever reaches the model.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteInput` or `InvalidFeatureValue` as above.
    pub fn from_form(form: &ApplicantForm) -> Result<Self> {
        let fields = form.fields();

        for (name, value) in &fields {
            if value.is_empty() {
                return Err(AdmitirError::IncompleteInput {
                    field: (*name).to_string(),
                });
            }
        }

        let mut values = [0.0; N_FEATURES];
        for (slot, (name, value)) in values.iter_mut().zip(&fields) {
            *slot = value
                .parse::<f32>()
                .map_err(|_| AdmitirError::InvalidFeatureValue {
                    field: (*name).to_string(),
                    value: (*value).to_string(),
                })?;
        }

        Ok(Self { values })
    }

    /// Returns the values in column order.
    #[must_use]
    pub fn values(&self) -> &[f32; N_FEATURES] {
        &self.values
    }

    /// Returns the row as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}
