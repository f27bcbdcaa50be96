use wasm_bindgen::prelude::*;

mod macros;

pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod reducers;
pub mod update;

#[cfg(test)]
mod tests;

pub use messages::Action;
pub use models::{CommentsState, StatePatch};
pub use update::dispatch;

use network::config::ApiConfig;
use network::{AdminApi, AdminApiClient, CommentsApi, MembersApiClient};

// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    // Compile-time URLs are optional; the embedding script may still call
    // `init_api_config_js()` once it knows where the site lives.
    if let Err(e) = network::init_api_config() {
        debug_log!("API config not set at start-up ({})", e);
    }
    Ok(())
}

/// Initialize the API configuration from JS-provided URLs.
#[wasm_bindgen]
pub fn init_api_config_js(site_url: &str, admin_url: &str) -> Result<(), JsValue> {
    debug_log!("Initializing API config from JS: {} / {}", site_url, admin_url);
    network::set_api_config(ApiConfig::from_urls(site_url, admin_url)).map_err(JsValue::from_str)
}

/// Handle a widget action by name and resolve to the state fragment to merge.
///
/// Unknown action names resolve to `{}` without touching the network.
#[wasm_bindgen]
pub async fn handle_action(action: String, data: JsValue, state: JsValue) -> Result<JsValue, JsValue> {
    run_action(&action, data, state, || {
        let config = network::current_api_config().map_err(JsValue::from_str)?;
        Ok((
            MembersApiClient::new(config.clone()),
            AdminApiClient::new(config),
        ))
    })
    .await
}

/// Decode, dispatch and encode one action against the collaborators returned
/// by `clients`, which is only called for registered action names.
pub(crate) async fn run_action<A, M, F>(
    action: &str,
    data: JsValue,
    state: JsValue,
    clients: F,
) -> Result<JsValue, JsValue>
where
    A: CommentsApi,
    M: AdminApi<Error = A::Error>,
    A::Error: Into<JsValue>,
    F: FnOnce() -> Result<(A, M), JsValue>,
{
    // The name is checked before the payload is looked at: an unknown action
    // is a no-op whatever it was given.
    let Some(takes_payload) = Action::takes_payload(action) else {
        debug_log!("Ignoring unknown action {}", action);
        return Ok(js_sys::Object::new().into());
    };

    let payload: serde_json::Value = if !takes_payload || data.is_undefined() || data.is_null() {
        serde_json::Value::Null
    } else {
        serde_wasm_bindgen::from_value(data)
            .map_err(|e| JsValue::from_str(&format!("Invalid data for {}: {}", action, e)))?
    };

    let parsed = Action::from_name(action, payload)
        .map_err(|e| JsValue::from_str(&format!("Invalid data for {}: {}", action, e)))?
        .ok_or_else(|| JsValue::from_str(&format!("Unregistered action {}", action)))?;

    let state: CommentsState = serde_wasm_bindgen::from_value(state)
        .map_err(|e| JsValue::from_str(&format!("Invalid state for {}: {}", action, e)))?;

    let (api, admin_api) = clients()?;

    let patch = match dispatch(&parsed, &state, &api, &admin_api).await {
        Ok(patch) => patch,
        Err(e) => {
            let e: JsValue = e.into();
            web_sys::console::error_1(&format!("{} failed: {:?}", action, e).into());
            return Err(e);
        }
    };

    patch_to_js(&patch)
}

/// Serialize a patch as a plain JS object (maps become objects, not `Map`s).
pub(crate) fn patch_to_js(patch: &StatePatch) -> Result<JsValue, JsValue> {
    use serde::Serialize;

    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    patch
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize state update: {}", e)))
}
