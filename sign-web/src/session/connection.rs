//! Classifier socket status as an explicit state machine
//!
//! The transport itself lives in JS; it reports socket events here and asks
//! `can_send()` before emitting a frame.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Error,
}

/// Socket events reported by the transport
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionEvent {
    /// A connection attempt started (first try or retry)
    Connect,
    /// Socket is open
    Opened,
    /// Socket closed, by either side
    Closed,
    /// Connection attempt or live socket failed
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid connection transition: {event:?} while {from:?}")]
pub struct TransitionError {
    pub from: ConnectionStatus,
    pub event: ConnectionEvent,
}

impl From<TransitionError> for JsValue {
    fn from(err: TransitionError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl ConnectionStatus {
    /// Next status for `event`, or an error if the pair is not allowed
    pub fn transition(self, event: ConnectionEvent) -> Result<Self, TransitionError> {
        use ConnectionEvent::*;
        use ConnectionStatus::*;

        match (self, event) {
            (Disconnected | Error, Connect) => Ok(Connecting),
            // Error -> Connected is the transport reconnecting on its own
            (Connecting | Error, Opened) => Ok(Connected),
            (_, Closed) => Ok(Disconnected),
            (Connecting | Connected, Failed) => Ok(Error),
            (from, event) => Err(TransitionError { from, event }),
        }
    }

    /// Frames may only be emitted on an open socket
    pub fn can_send(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::Connecting => "connecting",
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Error => "error",
        }
    }
}
