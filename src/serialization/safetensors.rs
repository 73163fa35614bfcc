//! `SafeTensors` format implementation for artifact serialization.
//!
//! Implements the `SafeTensors` layout:
//! ```text
//! [8-byte header: u64 metadata length (little-endian)]
//! [JSON metadata: tensor names, dtypes, shapes, data_offsets]
//! [Raw tensor data: F32 values in little-endian]
//! ```
//!
//! Only F32 tensors are read or written; that is the sole dtype the scaler
//! and model artifacts carry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Metadata for a single tensor in `SafeTensors` format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TensorMetadata {
    /// Data type of the tensor (always "F32" here).
    pub dtype: String,
    /// Shape of the tensor (e.g., `[n_features]` or `[1]`).
    pub shape: Vec<usize>,
    /// Data offsets `[start, end]` in the raw data section.
    pub data_offsets: [usize; 2],
}

/// Complete `SafeTensors` metadata structure.
/// Uses `BTreeMap` for deterministic JSON serialization (sorted keys).
pub type SafeTensorsMetadata = BTreeMap<String, TensorMetadata>;

/// Saves tensors to `SafeTensors` format.
///
/// # Arguments
///
/// * `path` - File path to write to
/// * `tensors` - Map of tensor names to (data, shape) tuples
///
/// # Errors
///
/// Returns an error if file writing or JSON serialization fails.
pub fn save_safetensors<P: AsRef<Path>>(
    path: P,
    tensors: &BTreeMap<String, (Vec<f32>, Vec<usize>)>,
) -> Result<(), String> {
    let mut metadata = SafeTensorsMetadata::new();
    let mut raw_data = Vec::new();
    let mut current_offset = 0;

    // BTreeMap already provides sorted iteration
    for (name, (data, shape)) in tensors {
        let start_offset = current_offset;
        let data_size = data.len() * 4; // F32 = 4 bytes
        let end_offset = current_offset + data_size;

        metadata.insert(
            name.clone(),
            TensorMetadata {
                dtype: "F32".to_string(),
                shape: shape.clone(),
                data_offsets: [start_offset, end_offset],
            },
        );

        for &value in data {
            raw_data.extend_from_slice(&value.to_le_bytes());
        }

        current_offset = end_offset;
    }

    let metadata_json =
        serde_json::to_string(&metadata).map_err(|e| format!("JSON serialization failed: {e}"))?;
    let metadata_bytes = metadata_json.as_bytes();
    let metadata_len = metadata_bytes.len() as u64;

    let mut output = Vec::new();
    output.extend_from_slice(&metadata_len.to_le_bytes());
    output.extend_from_slice(metadata_bytes);
    output.extend_from_slice(&raw_data);

    fs::write(path, output).map_err(|e| format!("File write failed: {e}"))?;
    Ok(())
}

/// Loads tensors from a `SafeTensors` file.
///
/// Returns `(metadata, raw_data)`; individual tensors are pulled out with
/// [`extract_tensor`].
///
/// # Errors
///
/// Returns an error if:
/// - File reading fails
/// - Header is invalid (< 8 bytes, or length exceeds the file)
/// - JSON parsing fails
pub fn load_safetensors<P: AsRef<Path>>(path: P) -> Result<(SafeTensorsMetadata, Vec<u8>), String> {
    let bytes = fs::read(path).map_err(|e| format!("File read failed: {e}"))?;
    let metadata_len = validate_and_read_header(&bytes)?;
    let metadata = parse_metadata(&bytes, metadata_len)?;
    let raw_data = bytes[8 + metadata_len..].to_vec();
    Ok((metadata, raw_data))
}

/// Extracts a tensor from raw `SafeTensors` data.
///
/// # Errors
///
/// Returns an error if data offsets are invalid or the dtype is not F32.
pub fn extract_tensor(raw_data: &[u8], tensor_meta: &TensorMetadata) -> Result<Vec<f32>, String> {
    let [start, end] = tensor_meta.data_offsets;

    if end > raw_data.len() {
        return Err(format!(
            "Invalid data offset: end={} exceeds data size={}",
            end,
            raw_data.len()
        ));
    }

    if start >= end {
        return Err(format!("Invalid data offset: start={start} >= end={end}"));
    }

    if tensor_meta.dtype != "F32" {
        return Err(format!(
            "Unsupported dtype: {}. Supported: F32",
            tensor_meta.dtype
        ));
    }

    extract_f32(&raw_data[start..end])
}

fn validate_and_read_header(bytes: &[u8]) -> Result<usize, String> {
    if bytes.len() < 8 {
        return Err("Invalid SafeTensors file: missing 8-byte header".to_string());
    }

    let header: [u8; 8] = bytes[0..8].try_into().expect("slice is 8 bytes");
    let metadata_len = u64::from_le_bytes(header) as usize;

    // Checked this way round so a hostile length cannot overflow.
    if metadata_len > bytes.len() - 8 {
        return Err(format!(
            "Invalid SafeTensors file: metadata length {metadata_len} exceeds file size {}",
            bytes.len()
        ));
    }

    Ok(metadata_len)
}

fn parse_metadata(bytes: &[u8], metadata_len: usize) -> Result<SafeTensorsMetadata, String> {
    let metadata_json = std::str::from_utf8(&bytes[8..8 + metadata_len])
        .map_err(|e| format!("Invalid metadata encoding: {e}"))?;
    serde_json::from_str(metadata_json).map_err(|e| format!("JSON parsing failed: {e}"))
}

fn extract_f32(tensor_bytes: &[u8]) -> Result<Vec<f32>, String> {
    if tensor_bytes.len() % 4 != 0 {
        return Err(format!(
            "Invalid F32 tensor data: size {} is not a multiple of 4 bytes",
            tensor_bytes.len()
        ));
    }

    let values: Vec<f32> = tensor_bytes
        .chunks_exact(4)
        .map(|chunk| {
            let bytes: [u8; 4] = chunk.try_into().expect("chunk is 4 bytes");
            f32::from_le_bytes(bytes)
        })
        .collect();

    Ok(values)
}

/// Looks up a named tensor and extracts its values.
///
/// # Errors
///
/// Returns an error if the tensor is missing or its data is invalid.
pub fn required_tensor(
    metadata: &SafeTensorsMetadata,
    raw_data: &[u8],
    name: &str,
) -> Result<Vec<f32>, String> {
    let meta = metadata
        .get(name)
        .ok_or_else(|| format!("Missing '{name}' tensor in SafeTensors file"))?;
    extract_tensor(raw_data, meta)
}
