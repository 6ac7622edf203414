//! Session configuration pushed from the page
//!
//! Every field has a default, so the page may send `{}` or only the fields
//! it wants to change.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Hosted classifier backend
pub const ONLINE_ENDPOINT: &str = "https://aslmodelbackend.onrender.com/";

/// Classifier running on the same machine
pub const LOCAL_ENDPOINT: &str = "http://127.0.0.1:10000/";

/// Which classifier backend the socket connects to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerMode {
    #[default]
    Online,
    Local,
}

impl ServerMode {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ServerMode::Online => ONLINE_ENDPOINT,
            ServerMode::Local => LOCAL_ENDPOINT,
        }
    }
}

/// Options handed to the hand tracking library, serialized camelCase
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackingOptions {
    pub max_num_hands: u32,
    pub model_complexity: u32,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

impl Default for TrackingOptions {
    fn default() -> Self {
        Self {
            max_num_hands: 1,
            model_complexity: 1,
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.5,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub mode: ServerMode,
    pub tracking: TrackingOptions,
    /// Drop the shown prediction as soon as the hand leaves the frame
    pub clear_prediction_on_hand_lost: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed session config: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("{name} must be within 0-1, got {value}")]
    ConfidenceOutOfRange { name: &'static str, value: f32 },

    #[error("max_num_hands must be at least 1")]
    NoHands,
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl SessionConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let tracking = &self.tracking;
        if tracking.max_num_hands == 0 {
            return Err(ConfigError::NoHands);
        }

        for (name, value) in [
            ("min_detection_confidence", tracking.min_detection_confidence),
            ("min_tracking_confidence", tracking.min_tracking_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ConfidenceOutOfRange { name, value });
            }
        }

        Ok(())
    }

    /// JSON for the tracking library's `setOptions`
    pub fn tracking_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(&self.tracking)?)
    }
}
