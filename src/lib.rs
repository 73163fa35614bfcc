//! Admitir: admission-chance prediction from pre-trained artifacts.
//!
//! Collects seven applicant metrics as free text, validates their ranges
//! (advisory-only), and produces one scalar admission-probability prediction
//! from a pre-trained Lasso regression model plus its standard scaler, both
//! loaded from local `SafeTensors` artifacts.
//!
//! # Quick Start
//!
//! ```
//! use admitir::prelude::*;
//!
//! // Artifacts are normally loaded with `Predictor::open(dir)`; here they
//! // are built in memory.
//! let scaler = StandardScaler::from_stats(vec![0.0; 7], vec![1.0; 7]).unwrap();
//! let model = Lasso::from_parameters(vec![0.0; 7], 0.65);
//! let predictor = Predictor::from_parts(scaler, model).unwrap();
//!
//! let form = ApplicantForm {
//!     gre_score: "320".into(),
//!     toefl_score: "110".into(),
//!     university_rating: "4".into(),
//!     sop: "4.5".into(),
//!     lor: "4".into(),
//!     cgpa: "9.1".into(),
//!     research: "1".into(),
//! };
//!
//! // Advisory warnings never block prediction.
//! assert!(validate_form(&form).is_empty());
//!
//! let prediction = predictor.predict(&form).unwrap();
//! assert_eq!(prediction.percentage(), 65.0);
//! ```
//!
//! # Modules
//!
//! - [`features`]: Applicant form and the fixed-order feature row
//! - [`validate`]: Advisory range validation
//! - [`preprocessing`]: The pre-fitted standard scaler
//! - [`linear_model`]: The pre-fitted Lasso model
//! - [`serialization`]: `SafeTensors` artifact format
//! - [`engine`]: Artifact loading and the predict-on-submit flow
//! - [`error`]: Error types

pub mod engine;
pub mod error;
pub mod features;
pub mod linear_model;
pub mod prelude;
pub mod preprocessing;
pub mod serialization;
pub mod validate;
