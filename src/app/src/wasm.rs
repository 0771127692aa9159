//! WebAssembly bindings for the browser shell
//!
//! The page forwards clicks and keystrokes as serialized events and executes
//! the returned effects: `Http` through `fetch()` after stripping
//! [`BASE_URL`](crate::BASE_URL), `Render` by reading [`view`].

use lazy_static::lazy_static;
use wasm_bindgen::prelude::{wasm_bindgen, JsError};

use crux_core::{
    bridge::{Bridge, EffectId},
    Core,
};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Set up console logging when the module is loaded
#[wasm_bindgen(start)]
pub fn init_wasm() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // a second initialization only means a logger is already installed
    let _ = console_log::init_with_level(level);
}

/// Process a serialized event, returning the serialized effects
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Result<Vec<u8>, JsError> {
    let mut effects = Vec::new();
    CORE.update(event_bytes, &mut effects)
        .map_err(|e| JsError::new(&format!("failed to process event: {e}")))?;
    Ok(effects)
}

/// Current serialized view model (the model with its session view)
#[wasm_bindgen]
pub fn view() -> Result<Vec<u8>, JsError> {
    let mut view = Vec::new();
    CORE.view(&mut view)
        .map_err(|e| JsError::new(&format!("failed to serialize view: {e}")))?;
    Ok(view)
}

/// Resolve an effect (typically an HTTP response) and return follow-up effects
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Result<Vec<u8>, JsError> {
    let mut effects = Vec::new();
    CORE.resolve(EffectId(id), response_bytes, &mut effects)
        .map_err(|e| JsError::new(&format!("failed to resolve effect {id}: {e}")))?;
    Ok(effects)
}
