//! Error types for admitir operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for admitir operations.
///
/// Distinguishes input problems (missing or malformed applicant fields)
/// from artifact problems (missing or corrupt scaler/model files) so that
/// callers can message root cause differently.
///
/// # Examples
///
/// ```
/// use admitir::error::AdmitirError;
///
/// let err = AdmitirError::IncompleteInput {
///     field: "CGPA".to_string(),
/// };
/// assert!(err.to_string().contains("CGPA"));
/// ```
#[derive(Debug)]
pub enum AdmitirError {
    /// A required applicant field was empty at predict time.
    IncompleteInput {
        /// Name of the first empty field
        field: String,
    },

    /// A non-empty applicant field failed numeric coercion.
    InvalidFeatureValue {
        /// Field name
        field: String,
        /// The rejected raw value
        value: String,
    },

    /// Scaler or model artifact is missing, corrupt, or mis-shaped.
    ArtifactUnavailable {
        /// Artifact filename
        artifact: String,
        /// Underlying failure description
        reason: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for AdmitirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdmitirError::IncompleteInput { field } => {
                write!(
                    f,
                    "Missing input for {field}: provide all input features before predicting"
                )
            }
            AdmitirError::InvalidFeatureValue { field, value } => {
                write!(f, "Invalid value for {field}: {value:?} is not numeric")
            }
            AdmitirError::ArtifactUnavailable { artifact, reason } => {
                write!(f, "Artifact unavailable: {artifact}: {reason}")
            }
            AdmitirError::Io(e) => write!(f, "I/O error: {e}"),
            AdmitirError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            AdmitirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AdmitirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdmitirError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AdmitirError {
    fn from(err: std::io::Error) -> Self {
        AdmitirError::Io(err)
    }
}

impl From<&str> for AdmitirError {
    fn from(msg: &str) -> Self {
        AdmitirError::Other(msg.to_string())
    }
}

impl From<String> for AdmitirError {
    fn from(msg: String) -> Self {
        AdmitirError::Other(msg)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, AdmitirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_input_display() {
        let err = AdmitirError::IncompleteInput {
            field: "GRE Score".to_string(),
        };
        assert!(err.to_string().contains("GRE Score"));
        assert!(err.to_string().contains("all input features"));
    }

    #[test]
    fn test_invalid_feature_value_display() {
        let err = AdmitirError::InvalidFeatureValue {
            field: "CGPA".to_string(),
            value: "nine".to_string(),
        };
        assert!(err.to_string().contains("CGPA"));
        assert!(err.to_string().contains("nine"));
    }

    #[test]
    fn test_artifact_unavailable_display() {
        let err = AdmitirError::ArtifactUnavailable {
            artifact: "lasso_model.safetensors".to_string(),
            reason: "File read failed".to_string(),
        };
        assert!(err.to_string().contains("lasso_model.safetensors"));
    }

    #[test]
    fn test_from_str() {
        let err: AdmitirError = "something broke".into();
        assert_eq!(err.to_string(), "something broke");
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AdmitirError::from(io);
        assert!(err.source().is_some());
    }
}
