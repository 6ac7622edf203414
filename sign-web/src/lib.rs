//! Sign Web - hand-landmark features for browser sign recognition
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - Console logging macros
//! - wasm_bindgen entry points that delegate to submodules

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

macro_rules! console_warn {
    ($($t:tt)*) => (web_sys::console::warn_1(&format!($($t)*).into()))
}

pub mod features;
pub mod session;
mod bridge;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::*;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("✅ Sign feature extractor loaded");
}
