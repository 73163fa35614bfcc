//! The pre-trained Lasso regression model.
//!
//! Lasso is a linear model with L1-regularized coefficients. The
//! regularization only matters at training time; here the model is an
//! opaque, pre-fitted artifact and prediction is a dot product plus
//! intercept over the scaled feature row.

use crate::error::{AdmitirError, Result};
use crate::features::FeatureVector;
use crate::serialization::safetensors;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Pre-fitted Lasso regression model.
///
/// # Example
///
/// ```
/// use admitir::linear_model::Lasso;
/// use admitir::features::FeatureVector;
///
/// let model = Lasso::from_parameters(vec![0.0; 7], 0.65);
/// let row = FeatureVector::new([1.0; 7]);
/// let output = model.predict_one(&row).unwrap();
/// assert_eq!(output, 0.65);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lasso {
    /// Regularization strength used at training time (carried as metadata).
    alpha: f32,
    /// Coefficients for features (excluding intercept).
    coefficients: Vec<f32>,
    /// Intercept (bias) term.
    intercept: f32,
}

impl Lasso {
    /// Creates a model from pre-fitted parameters.
    #[must_use]
    pub fn from_parameters(coefficients: Vec<f32>, intercept: f32) -> Self {
        Self {
            alpha: 0.0,
            coefficients,
            intercept,
        }
    }

    /// Sets the training-time regularization strength metadata.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Returns the regularization strength (alpha).
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Returns the coefficients (excluding intercept).
    #[must_use]
    pub fn coefficients(&self) -> &[f32] {
        &self.coefficients
    }

    /// Returns the intercept term.
    #[must_use]
    pub fn intercept(&self) -> f32 {
        self.intercept
    }

    /// Returns the number of features the model was fit on.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Predicts one scalar output for a single (scaled) feature row.
    ///
    /// # Errors
    ///
    /// Returns an error if the row width does not match the coefficients.
    pub fn predict_one(&self, row: &FeatureVector) -> Result<f32> {
        let values = row.values();
        if values.len() != self.coefficients.len() {
            return Err(AdmitirError::Other(format!(
                "Feature dimension mismatch: model expects {}, got {}",
                self.coefficients.len(),
                values.len()
            )));
        }

        let mut output = self.intercept;
        for (coef, value) in self.coefficients.iter().zip(values.iter()) {
            output += coef * value;
        }

        Ok(output)
    }

    /// Saves the model to a binary file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::result::Result<(), String> {
        let bytes = bincode::serialize(self).map_err(|e| format!("Serialization failed: {e}"))?;
        fs::write(path, bytes).map_err(|e| format!("File write failed: {e}"))?;
        Ok(())
    }

    /// Loads a model from a binary file.
    ///
    /// # Errors
    ///
    /// Returns an error if file reading or deserialization fails.
    pub fn load<P: AsRef<Path>>(path: P) -> std::result::Result<Self, String> {
        let bytes = fs::read(path).map_err(|e| format!("File read failed: {e}"))?;
        let model =
            bincode::deserialize(&bytes).map_err(|e| format!("Deserialization failed: {e}"))?;
        Ok(model)
    }

    /// Saves the model to `SafeTensors` format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save_safetensors<P: AsRef<Path>>(&self, path: P) -> std::result::Result<(), String> {
        let mut tensors = BTreeMap::new();

        tensors.insert(
            "coefficients".to_string(),
            (self.coefficients.clone(), vec![self.coefficients.len()]),
        );
        tensors.insert("intercept".to_string(), (vec![self.intercept], vec![1]));
        tensors.insert("alpha".to_string(), (vec![self.alpha], vec![1]));

        safetensors::save_safetensors(path, &tensors)?;
        Ok(())
    }

    /// Loads a model from `SafeTensors` format.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or required tensors are missing.
    pub fn load_safetensors<P: AsRef<Path>>(path: P) -> std::result::Result<Self, String> {
        let (metadata, raw_data) = safetensors::load_safetensors(path)?;

        let coefficients = safetensors::required_tensor(&metadata, &raw_data, "coefficients")?;

        let intercept = safetensors::required_tensor(&metadata, &raw_data, "intercept")?
            .first()
            .copied()
            .ok_or_else(|| "Empty 'intercept' tensor".to_string())?;

        let alpha = safetensors::required_tensor(&metadata, &raw_data, "alpha")?
            .first()
            .copied()
            .ok_or_else(|| "Empty 'alpha' tensor".to_string())?;

        Ok(Self {
            alpha,
            coefficients,
            intercept,
        })
    }
}
