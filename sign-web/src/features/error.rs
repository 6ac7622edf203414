//! Feature extraction errors
//!
//! Degenerate geometry is never an error here; it is substituted with 0.0
//! inside the extractor. Only malformed input or output is reported.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised at the landmark and feature boundaries
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// Landmark input was not 21 x 3 values
    #[error("expected 63 landmark values (21 landmarks x 3), got {0}")]
    InvalidInputShape(usize),

    /// A landmark coordinate was NaN or infinite
    #[error("landmark value at index {index} is not a finite number ({value})")]
    InvalidInputType { index: usize, value: f64 },

    /// Assembled feature vector had the wrong length
    #[error("expected 30 features, got {0}")]
    InvalidFeatureShape(usize),
}

impl From<FeatureError> for JsValue {
    fn from(err: FeatureError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_expected_sizes() {
        assert_eq!(
            FeatureError::InvalidInputShape(60).to_string(),
            "expected 63 landmark values (21 landmarks x 3), got 60"
        );
        assert_eq!(
            FeatureError::InvalidFeatureShape(29).to_string(),
            "expected 30 features, got 29"
        );
    }
}
