//! Messages exchanged with the remote classifier
//!
//! The socket transport is owned by JS. This module only fixes the event
//! names and the payload shapes on both sides of it.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::features::FeatureVector;

/// Outgoing frame event
pub const HAND_DATA_EVENT: &str = "hand_data";

/// Incoming classification
pub const PREDICTION_RESULT_EVENT: &str = "prediction_result";

/// Incoming server-side failure
pub const PREDICTION_ERROR_EVENT: &str = "prediction_error";

/// Classifier answer for one frame
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted sign label
    #[serde(rename = "prediction")]
    pub label: String,

    /// Model confidence, 0-1
    pub confidence: f32,

    /// Server inference time in ms
    #[serde(rename = "processing_time", default, skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<f64>,

    /// Requests per second seen by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_frequency: Option<f64>,
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed classifier message: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("confidence {0} outside 0-1")]
    ConfidenceOutOfRange(f32),
}

impl From<ProtocolError> for JsValue {
    fn from(err: ProtocolError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Parse a `prediction_result` payload
pub fn parse_prediction(json: &str) -> Result<Prediction, ProtocolError> {
    let prediction: Prediction = serde_json::from_str(json)?;

    if !(0.0..=1.0).contains(&prediction.confidence) {
        return Err(ProtocolError::ConfidenceOutOfRange(prediction.confidence));
    }

    Ok(prediction)
}

/// Serialize features as the JSON array sent with `hand_data`
pub fn encode_features(features: &FeatureVector) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(features.as_slice())?)
}
