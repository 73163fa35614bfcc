//! Artifact serialization support.
//!
//! The scaler and model artifacts are stored in `SafeTensors` format, with a
//! bincode fallback offered directly on the artifact types.

pub mod safetensors;
