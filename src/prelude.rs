//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use admitir::prelude::*;
//! ```

pub use crate::engine::{Prediction, Predictor, MODEL_FILE, SCALER_FILE};
pub use crate::error::{AdmitirError, Result};
pub use crate::features::{ApplicantForm, FeatureVector, FEATURE_COLUMNS, FIELD_BOUNDS, N_FEATURES};
pub use crate::linear_model::Lasso;
pub use crate::preprocessing::StandardScaler;
pub use crate::validate::{validate_form, validate_range, Warning, WarningKind};
