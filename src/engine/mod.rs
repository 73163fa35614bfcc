//! The prediction engine: artifact loading and the predict-on-submit flow.
//!
//! A [`Predictor`] loads the scaler and model artifacts once at `open` and
//! is immutable afterwards. One submission runs one sequential pass:
//! completeness check, numeric coercion in fixed column order, standard-score
//! transform, linear-model evaluation, percentage conversion.

use crate::error::{AdmitirError, Result};
use crate::features::{ApplicantForm, FeatureVector, N_FEATURES};
use crate::linear_model::Lasso;
use crate::preprocessing::StandardScaler;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

/// Fixed filename of the scaler artifact.
pub const SCALER_FILE: &str = "lasso_scaler.safetensors";

/// Fixed filename of the model artifact.
pub const MODEL_FILE: &str = "lasso_model.safetensors";

/// The scalar result of one prediction.
///
/// The percentage is `round(model output, 2) * 100`, deliberately not
/// clamped to [0, 100]: the model output is passed through as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    percentage: f32,
}

impl Prediction {
    /// Returns the predicted chance of admission as a percentage.
    #[must_use]
    pub fn percentage(&self) -> f32 {
        self.percentage
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicted Chances of Admit: {}%", self.percentage)
    }
}

/// Loads the pre-trained artifacts once and answers prediction requests.
///
/// # Example
///
/// ```
/// use admitir::prelude::*;
///
/// let scaler = StandardScaler::from_stats(vec![0.0; 7], vec![1.0; 7]).unwrap();
/// let model = Lasso::from_parameters(vec![0.0; 7], 0.65);
/// let predictor = Predictor::from_parts(scaler, model).unwrap();
///
/// let form = ApplicantForm {
///     gre_score: "320".into(),
///     toefl_score: "110".into(),
///     university_rating: "4".into(),
///     sop: "4.5".into(),
///     lor: "4".into(),
///     cgpa: "9.1".into(),
///     research: "1".into(),
/// };
/// let prediction = predictor.predict(&form).unwrap();
/// assert_eq!(prediction.percentage(), 65.0);
/// ```
#[derive(Debug, Clone)]
pub struct Predictor {
    scaler: StandardScaler,
    model: Lasso,
}

impl Predictor {
    /// Opens the artifacts by their fixed filenames under `dir`.
    ///
    /// Both artifacts are loaded exactly once; the returned predictor is
    /// immutable and every later request reuses the loaded state.
    ///
    /// # Errors
    ///
    /// Returns [`AdmitirError::ArtifactUnavailable`] naming the offending
    /// artifact if either file is missing, corrupt, or mis-shaped.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();

        let scaler = StandardScaler::load_safetensors(dir.join(SCALER_FILE)).map_err(|reason| {
            AdmitirError::ArtifactUnavailable {
                artifact: SCALER_FILE.to_string(),
                reason,
            }
        })?;

        let model = Lasso::load_safetensors(dir.join(MODEL_FILE)).map_err(|reason| {
            AdmitirError::ArtifactUnavailable {
                artifact: MODEL_FILE.to_string(),
                reason,
            }
        })?;

        Self::from_parts(scaler, model)
    }

    /// Builds a predictor from already-loaded artifacts, checking that both
    /// match the fixed 7-column feature layout.
    ///
    /// # Errors
    ///
    /// Returns [`AdmitirError::ArtifactUnavailable`] on a shape mismatch.
    pub fn from_parts(scaler: StandardScaler, model: Lasso) -> Result<Self> {
        if scaler.n_features() != N_FEATURES {
            return Err(AdmitirError::ArtifactUnavailable {
                artifact: SCALER_FILE.to_string(),
                reason: format!(
                    "expected statistics for {N_FEATURES} features, found {}",
                    scaler.n_features()
                ),
            });
        }
        if model.n_features() != N_FEATURES {
            return Err(AdmitirError::ArtifactUnavailable {
                artifact: MODEL_FILE.to_string(),
                reason: format!(
                    "expected coefficients for {N_FEATURES} features, found {}",
                    model.n_features()
                ),
            });
        }

        Ok(Self { scaler, model })
    }

    /// Returns the loaded scaler.
    #[must_use]
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// Returns the loaded model.
    #[must_use]
    pub fn model(&self) -> &Lasso {
        &self.model
    }

    /// Runs one prediction request.
    ///
    /// Range validation is advisory and happens elsewhere; out-of-range
    /// numeric values deliberately flow into the model unchanged. Only
    /// emptiness and non-numeric text stop a request.
    ///
    /// # Errors
    ///
    /// Returns [`AdmitirError::IncompleteInput`] if any field is empty (the
    /// model is not invoked), or [`AdmitirError::InvalidFeatureValue`] if a
    /// non-empty field is not numeric.
    pub fn predict(&self, form: &ApplicantForm) -> Result<Prediction> {
        let row = FeatureVector::from_form(form)?;
        let scaled = self.scaler.transform(&row)?;
        let output = self.model.predict_one(&scaled)?;

        // round(output, 2) * 100 collapses to rounding the percentage itself.
        let percentage = (output * 100.0).round();

        Ok(Prediction { percentage })
    }
}

static SHARED: OnceLock<Predictor> = OnceLock::new();

/// Returns the process-wide predictor, loading the artifacts from `dir` on
/// first use.
///
/// The cache is immutable after initialization; later calls ignore `dir`
/// and reuse the first successfully loaded artifacts.
///
/// # Errors
///
/// Returns [`AdmitirError::ArtifactUnavailable`] if the first load fails.
/// A failed load is not cached, so the next call retries.
pub fn shared<P: AsRef<Path>>(dir: P) -> Result<&'static Predictor> {
    if let Some(predictor) = SHARED.get() {
        return Ok(predictor);
    }
    let loaded = Predictor::open(dir)?;
    Ok(SHARED.get_or_init(|| loaded))
}
