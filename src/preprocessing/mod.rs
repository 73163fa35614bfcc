//! The feature scaler applied before model evaluation.
//!
//! The scaler is a pre-fitted artifact: its per-feature statistics were
//! captured at training time and are immutable here. This crate only applies
//! the transform; it never fits.

use crate::error::{AdmitirError, Result};
use crate::features::FeatureVector;
use crate::serialization::safetensors;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Standardizes features by removing mean and scaling to unit variance.
///
/// The standard score of a sample x is: z = (x - mean) / std, using the
/// statistics fixed when the artifact was created.
///
/// # Example
///
/// ```
/// use admitir::preprocessing::StandardScaler;
/// use admitir::features::FeatureVector;
///
/// let scaler = StandardScaler::from_stats(
///     vec![316.0, 107.0, 3.0, 3.5, 3.5, 8.6, 0.5],
///     vec![11.0, 6.0, 1.0, 1.0, 1.0, 0.6, 0.5],
/// ).unwrap();
///
/// let row = FeatureVector::new([316.0, 107.0, 3.0, 3.5, 3.5, 8.6, 0.5]);
/// let scaled = scaler.transform(&row).unwrap();
/// assert_eq!(scaled.values(), &[0.0; 7]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Mean of each feature (fixed at artifact-creation time).
    mean: Vec<f32>,
    /// Standard deviation of each feature (fixed at artifact-creation time).
    std: Vec<f32>,
    /// Whether to center the data (subtract mean).
    with_mean: bool,
    /// Whether to scale the data (divide by std).
    with_std: bool,
}

impl StandardScaler {
    /// Creates a scaler from pre-fitted statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the statistics are empty or of unequal length.
    pub fn from_stats(mean: Vec<f32>, std: Vec<f32>) -> Result<Self> {
        if mean.is_empty() {
            return Err("Scaler statistics must not be empty".into());
        }
        if mean.len() != std.len() {
            return Err(AdmitirError::Other(format!(
                "Scaler statistics length mismatch: {} means vs {} stds",
                mean.len(),
                std.len()
            )));
        }

        Ok(Self {
            mean,
            std,
            with_mean: true,
            with_std: true,
        })
    }

    /// Sets whether to center the data by subtracting the mean.
    #[must_use]
    pub fn with_mean(mut self, with_mean: bool) -> Self {
        self.with_mean = with_mean;
        self
    }

    /// Sets whether to scale the data by dividing by standard deviation.
    #[must_use]
    pub fn with_std(mut self, with_std: bool) -> Self {
        self.with_std = with_std;
        self
    }

    /// Returns the mean of each feature.
    #[must_use]
    pub fn mean(&self) -> &[f32] {
        &self.mean
    }

    /// Returns the standard deviation of each feature.
    #[must_use]
    pub fn std(&self) -> &[f32] {
        &self.std
    }

    /// Returns the number of features the scaler was fit on.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Standardizes one feature row using the fitted statistics.
    ///
    /// A standard deviation below epsilon leaves the centered value
    /// undivided rather than blowing up.
    ///
    /// # Errors
    ///
    /// Returns an error if the row width does not match the statistics.
    pub fn transform(&self, row: &FeatureVector) -> Result<FeatureVector> {
        let values = row.values();
        if values.len() != self.mean.len() {
            return Err(AdmitirError::Other(format!(
                "Feature dimension mismatch: scaler expects {}, got {}",
                self.mean.len(),
                values.len()
            )));
        }

        let mut result = *values;
        for (j, val) in result.iter_mut().enumerate() {
            if self.with_mean {
                *val -= self.mean[j];
            }
            if self.with_std && self.std[j] > 1e-10 {
                *val /= self.std[j];
            }
        }

        Ok(FeatureVector::new(result))
    }

    /// Saves the scaler to a binary file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::result::Result<(), String> {
        let bytes = bincode::serialize(self).map_err(|e| format!("Serialization failed: {e}"))?;
        fs::write(path, bytes).map_err(|e| format!("File write failed: {e}"))?;
        Ok(())
    }

    /// Loads a scaler from a binary file.
    ///
    /// # Errors
    ///
    /// Returns an error if file reading or deserialization fails.
    pub fn load<P: AsRef<Path>>(path: P) -> std::result::Result<Self, String> {
        let bytes = fs::read(path).map_err(|e| format!("File read failed: {e}"))?;
        let scaler =
            bincode::deserialize(&bytes).map_err(|e| format!("Deserialization failed: {e}"))?;
        Ok(scaler)
    }

    /// Saves the scaler to `SafeTensors` format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save_safetensors<P: AsRef<Path>>(&self, path: P) -> std::result::Result<(), String> {
        let mut tensors = BTreeMap::new();

        tensors.insert(
            "mean".to_string(),
            (self.mean.clone(), vec![self.mean.len()]),
        );
        tensors.insert("std".to_string(), (self.std.clone(), vec![self.std.len()]));

        let with_mean_val = if self.with_mean { 1.0 } else { 0.0 };
        tensors.insert("with_mean".to_string(), (vec![with_mean_val], vec![1]));

        let with_std_val = if self.with_std { 1.0 } else { 0.0 };
        tensors.insert("with_std".to_string(), (vec![with_std_val], vec![1]));

        safetensors::save_safetensors(path, &tensors)?;
        Ok(())
    }

    /// Loads a scaler from `SafeTensors` format.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or required tensors are missing.
    pub fn load_safetensors<P: AsRef<Path>>(path: P) -> std::result::Result<Self, String> {
        let (metadata, raw_data) = safetensors::load_safetensors(path)?;

        let mean = safetensors::required_tensor(&metadata, &raw_data, "mean")?;
        let std = safetensors::required_tensor(&metadata, &raw_data, "std")?;

        if mean.len() != std.len() {
            return Err("Mean and std vectors have different lengths".to_string());
        }

        let with_mean = safetensors::required_tensor(&metadata, &raw_data, "with_mean")?
            .first()
            .copied()
            .ok_or_else(|| "Empty 'with_mean' tensor".to_string())?
            > 0.5;
        let with_std = safetensors::required_tensor(&metadata, &raw_data, "with_std")?
            .first()
            .copied()
            .ok_or_else(|| "Empty 'with_std' tensor".to_string())?
            > 0.5;

        Ok(Self {
            mean,
            std,
            with_mean,
            with_std,
        })
    }
}
