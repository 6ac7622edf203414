//! Session storage and JS bridge
//!
//! Receives tracker frames and socket callbacks from JavaScript, runs them
//! through the pure session update, and tells JS what to emit.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::session::{
    parse_prediction, update, ConnectionEvent, FrameAction, FrameEvent, FrameState,
    SessionConfig, Update, HAND_DATA_EVENT, PREDICTION_ERROR_EVENT, PREDICTION_RESULT_EVENT,
};

/// Current frame state plus the config it runs under
#[derive(Default)]
struct SessionStore {
    state: FrameState,
    config: SessionConfig,
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<SessionStore> = RefCell::new(SessionStore::default());
}

/// Run one event through `update` and keep the new state
fn dispatch(event: FrameEvent) -> FrameAction {
    SESSION.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        let state = std::mem::take(&mut store.state);
        let Update { state, action } = update(state, event, &store.config);
        store.state = state;
        action
    })
}

fn read<T>(f: impl FnOnce(&FrameState) -> T) -> T {
    SESSION.with(|store_cell| f(&store_cell.borrow().state))
}

fn connection_event(event: ConnectionEvent) {
    match dispatch(FrameEvent::Connection(event)) {
        FrameAction::Rejected(err) => console_warn!("⚠️ {}", err),
        _ => console_log!("🔌 Classifier socket {}", connection_status()),
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Replace the session config; fields left out keep their defaults
#[wasm_bindgen]
pub fn configure_session(config_json: &str) -> Result<(), JsValue> {
    let config = SessionConfig::from_json(config_json)?;
    console_log!("⚙️ Session configured for {:?} classifier", config.mode);
    SESSION.with(|store_cell| store_cell.borrow_mut().config = config);
    Ok(())
}

/// Options object for the hand tracker's `setOptions`, as JSON
#[wasm_bindgen]
pub fn tracking_options() -> Result<String, JsValue> {
    let json = SESSION.with(|store_cell| store_cell.borrow().config.tracking_json())?;
    Ok(json)
}

/// Socket URL for the configured classifier
#[wasm_bindgen]
pub fn classifier_endpoint() -> String {
    SESSION.with(|store_cell| store_cell.borrow().config.mode.endpoint().to_string())
}

/// `{ handData, predictionResult, predictionError }` socket event names
#[wasm_bindgen]
pub fn socket_event_names() -> Result<js_sys::Object, JsValue> {
    let names = js_sys::Object::new();
    js_sys::Reflect::set(&names, &"handData".into(), &HAND_DATA_EVENT.into())?;
    js_sys::Reflect::set(&names, &"predictionResult".into(), &PREDICTION_RESULT_EVENT.into())?;
    js_sys::Reflect::set(&names, &"predictionError".into(), &PREDICTION_ERROR_EVENT.into())?;
    Ok(names)
}

// ============================================================================
// FRAME LOOP
// ============================================================================

/// Called from JavaScript for every tracked hand (63 values).
/// Returns the features to emit as `hand_data`, or undefined when nothing
/// should be sent for this frame.
#[wasm_bindgen]
pub fn process_hand_frame(flat_data: &[f64]) -> Option<Vec<f64>> {
    let timestamp = js_sys::Date::now() / 1000.0;
    let event = FrameEvent::Hand { landmarks: flat_data.to_vec(), timestamp };

    match dispatch(event) {
        FrameAction::Send(features) => Some(features.to_vec()),
        FrameAction::Skip(err) => {
            console_warn!("Skipping hand frame: {}", err);
            None
        }
        _ => None,
    }
}

/// Called from JavaScript when a frame has no hand
#[wasm_bindgen]
pub fn hand_lost() {
    dispatch(FrameEvent::HandLost);
}

/// Called with the `prediction_result` payload as JSON
#[wasm_bindgen]
pub fn apply_prediction_result(result_json: &str) -> Result<(), JsValue> {
    let prediction = parse_prediction(result_json)?;
    dispatch(FrameEvent::PredictionReceived(prediction));
    Ok(())
}

/// Called with the `prediction_error` message
#[wasm_bindgen]
pub fn apply_prediction_error(message: &str) {
    console_warn!("Prediction error: {}", message);
    dispatch(FrameEvent::PredictionFailed(message.to_string()));
}

// ============================================================================
// SOCKET STATUS
// ============================================================================

#[wasm_bindgen]
pub fn socket_connecting() {
    connection_event(ConnectionEvent::Connect);
}

#[wasm_bindgen]
pub fn socket_connected() {
    connection_event(ConnectionEvent::Opened);
}

#[wasm_bindgen]
pub fn socket_disconnected() {
    connection_event(ConnectionEvent::Closed);
}

#[wasm_bindgen]
pub fn socket_error() {
    connection_event(ConnectionEvent::Failed);
}

// ============================================================================
// READOUT
// ============================================================================

/// "disconnected" | "connecting" | "connected" | "error"
#[wasm_bindgen]
pub fn connection_status() -> String {
    read(|state| state.connection.as_str().to_string())
}

/// Latest predicted label, if any
#[wasm_bindgen]
pub fn current_prediction() -> Option<String> {
    read(|state| state.prediction.as_ref().map(|p| p.label.clone()))
}

#[wasm_bindgen]
pub fn current_confidence() -> Option<f32> {
    read(|state| state.prediction.as_ref().map(|p| p.confidence))
}

/// Counters and send rate, as JSON
#[wasm_bindgen]
pub fn session_stats() -> Result<String, JsValue> {
    let stats = read(|state| state.stats);
    serde_json::to_string(&stats).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Forget frames, prediction and socket status; keeps the config
#[wasm_bindgen]
pub fn reset_session() {
    SESSION.with(|store_cell| store_cell.borrow_mut().state = FrameState::default());
}
