//! Session module - per-frame state around the feature extractor
//!
//! Holds everything the page needs between frames as one explicit value
//! (`FrameState`) advanced by a pure `update`. No browser calls in here.

mod config;
mod connection;
mod frame;
mod protocol;

pub use config::{ConfigError, ServerMode, SessionConfig, TrackingOptions};
pub use connection::{ConnectionEvent, ConnectionStatus, TransitionError};
pub use frame::{update, FrameAction, FrameEvent, FrameState, SendRate, SessionStats, Update};
pub use protocol::{
    encode_features, parse_prediction, Prediction, ProtocolError,
    HAND_DATA_EVENT, PREDICTION_ERROR_EVENT, PREDICTION_RESULT_EVENT,
};
