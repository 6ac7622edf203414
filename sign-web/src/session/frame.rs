//! Per-frame session update
//!
//! `FrameState` is the whole page state between frames. The bridge owns one
//! value and replaces it with the result of `update` on every event, so
//! there is exactly one copy and no ordering surprises.

use serde::Serialize;

use super::config::SessionConfig;
use super::connection::{ConnectionEvent, ConnectionStatus, TransitionError};
use super::protocol::Prediction;
use crate::features::{extract, FeatureError, FeatureVector};

/// EMA weight of the newest send interval
const RATE_SMOOTHING: f64 = 0.2;

/// Smoothed rate at which frames are emitted to the classifier
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SendRate {
    last_timestamp: Option<f64>,
    hz: f64,
}

impl SendRate {
    /// Record a send at `timestamp` (seconds)
    pub fn record(&mut self, timestamp: f64) {
        if let Some(prev) = self.last_timestamp {
            let dt = timestamp - prev;
            if dt > 0.0 {
                let instant = 1.0 / dt;
                self.hz = if self.hz == 0.0 {
                    instant
                } else {
                    RATE_SMOOTHING * instant + (1.0 - RATE_SMOOTHING) * self.hz
                };
            }
        }
        self.last_timestamp = Some(timestamp);
    }

    pub fn hz(&self) -> f64 {
        self.hz
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Counters shown in the stats panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SessionStats {
    /// Frames emitted to the classifier
    pub frames_sent: u64,
    /// Frames rejected by feature extraction
    pub frames_skipped: u64,
    /// Valid frames not sent because the socket was not open
    pub frames_dropped: u64,
    /// `prediction_error` events from the classifier
    pub prediction_errors: u64,
    pub send_rate_hz: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameState {
    pub connection: ConnectionStatus,
    /// Latest classifier answer, kept until replaced or cleared
    pub prediction: Option<Prediction>,
    pub hand_present: bool,
    /// Why the most recent frame was skipped, cleared by the next good frame
    pub last_error: Option<FeatureError>,
    pub last_prediction_error: Option<String>,
    pub stats: SessionStats,
    send_rate: SendRate,
}

/// Inputs to the session, one per callback from the page
#[derive(Clone, Debug, PartialEq)]
pub enum FrameEvent {
    /// Tracker produced a hand; `timestamp` in seconds
    Hand { landmarks: Vec<f64>, timestamp: f64 },
    /// Tracker produced a frame with no hand
    HandLost,
    PredictionReceived(Prediction),
    PredictionFailed(String),
    Connection(ConnectionEvent),
}

/// What the caller has to do after an update
#[derive(Clone, Debug, PartialEq)]
pub enum FrameAction {
    None,
    /// Emit these features to the classifier
    Send(FeatureVector),
    /// Frame was unusable and has been skipped
    Skip(FeatureError),
    /// Connection event did not fit the current status; state unchanged
    Rejected(TransitionError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    pub state: FrameState,
    pub action: FrameAction,
}

/// Advance the session by one event
pub fn update(mut state: FrameState, event: FrameEvent, config: &SessionConfig) -> Update {
    let action = match event {
        FrameEvent::Hand { landmarks, timestamp } => {
            state.hand_present = true;
            match extract(&landmarks) {
                Ok(features) => {
                    state.last_error = None;
                    if state.connection.can_send() {
                        state.send_rate.record(timestamp);
                        state.stats.frames_sent += 1;
                        state.stats.send_rate_hz = state.send_rate.hz();
                        FrameAction::Send(features)
                    } else {
                        state.stats.frames_dropped += 1;
                        FrameAction::None
                    }
                }
                Err(err) => {
                    state.stats.frames_skipped += 1;
                    state.last_error = Some(err.clone());
                    FrameAction::Skip(err)
                }
            }
        }

        FrameEvent::HandLost => {
            state.hand_present = false;
            if config.clear_prediction_on_hand_lost {
                state.prediction = None;
            }
            FrameAction::None
        }

        FrameEvent::PredictionReceived(prediction) => {
            state.prediction = Some(prediction);
            state.last_prediction_error = None;
            FrameAction::None
        }

        FrameEvent::PredictionFailed(message) => {
            state.stats.prediction_errors += 1;
            state.last_prediction_error = Some(message);
            FrameAction::None
        }

        FrameEvent::Connection(event) => match state.connection.transition(event) {
            Ok(next) => {
                if !next.can_send() {
                    state.send_rate.reset();
                    state.stats.send_rate_hz = 0.0;
                }
                state.connection = next;
                FrameAction::None
            }
            Err(err) => FrameAction::Rejected(err),
        },
    };

    Update { state, action }
}
