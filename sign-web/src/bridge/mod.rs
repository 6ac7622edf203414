//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod features;
mod session;

pub use features::{
    extract_hand_features,
    extract_hand_features_json,
    feature_names,
    hand_skeleton,
    flatten_hand_landmarks,
    validate_feature_vector,
};

pub use session::{
    // Configuration
    configure_session,
    tracking_options,
    classifier_endpoint,
    socket_event_names,
    // Frame loop
    process_hand_frame,
    hand_lost,
    apply_prediction_result,
    apply_prediction_error,
    // Socket status
    socket_connecting,
    socket_connected,
    socket_disconnected,
    socket_error,
    // Readout
    connection_status,
    current_prediction,
    current_confidence,
    session_stats,
    reset_session,
};
