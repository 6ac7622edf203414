//! Stateless feature extraction entry points
//!
//! Thin wrappers: validation and math live in `crate::features`.

use wasm_bindgen::prelude::*;

use crate::features::{self, HandPose, RawLandmark, FEATURE_NAMES};
use crate::session::encode_features;

/// Called from JavaScript with 63 values (21 landmarks × x, y, z).
/// Returns the 30 classifier features, or throws on malformed input.
#[wasm_bindgen]
pub fn extract_hand_features(flat_data: &[f64]) -> Result<Vec<f64>, JsValue> {
    Ok(features::extract(flat_data)?.to_vec())
}

/// Same as `extract_hand_features`, encoded as a JSON array for text transports
#[wasm_bindgen]
pub fn extract_hand_features_json(flat_data: &[f64]) -> Result<String, JsValue> {
    let vector = features::extract(flat_data)?;
    Ok(encode_features(&vector)?)
}

/// Guard before handing features to the transport
#[wasm_bindgen]
pub fn validate_feature_vector(values: &[f64]) -> Result<Vec<f64>, JsValue> {
    Ok(features::validate_features(values)?.to_vec())
}

/// Feature names in the order the classifier expects
#[wasm_bindgen]
pub fn feature_names() -> js_sys::Array {
    FEATURE_NAMES.iter().map(|name| JsValue::from_str(name)).collect()
}

/// Overlay connections as flat index pairs `[a0, b0, a1, b1, ...]`
#[wasm_bindgen]
pub fn hand_skeleton() -> Vec<u32> {
    features::skeleton_flat()
}

/// Flatten tracker landmark objects (`[{x, y, z?}, ...]` as JSON) into 63
/// values, defaulting missing depth to 0
#[wasm_bindgen]
pub fn flatten_hand_landmarks(landmarks_json: &str) -> Result<Vec<f64>, JsValue> {
    let points: Vec<RawLandmark> = serde_json::from_str(landmarks_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid landmark JSON: {}", e)))?;
    Ok(HandPose::from_points(&points)?.to_flat())
}
