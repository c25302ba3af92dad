//! Gathering Commands
//!
//! Frontend bindings for the backend gathering API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{call, call_pywebview, invoke, js_error, to_js};
use crate::bridge::BridgeError;
use crate::models::{BridgeResponse, CatalogEntry, GatheringPayload, ProgressRecord};

// ========================
// Argument / Response Structs
// ========================

#[derive(Serialize)]
struct UpdateItemsArgs<'a> {
    items: &'a GatheringPayload,
}

#[derive(Deserialize)]
struct CatalogResponse {
    success: bool,
    #[serde(default)]
    items: Vec<CatalogEntry>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct ProgressResponse {
    success: bool,
    #[serde(default)]
    items: HashMap<String, ProgressRecord>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct ToggleResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    is_gathering: Option<bool>,
}

#[derive(Deserialize)]
struct StatusResponse {
    is_gathering: bool,
}

// ========================
// Commands
// ========================

/// Replace the backend's gathering list with `payload` over Tauri IPC
pub async fn update_gathering_items(payload: &GatheringPayload) -> Result<BridgeResponse, BridgeError> {
    let js_args = to_js(&UpdateItemsArgs { items: payload })
        .map_err(|e| BridgeError::Serialize(e.to_string()))?;
    let result = invoke("update_gathering_items", js_args)
        .await
        .map_err(|e| BridgeError::Rejected(js_error(e)))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| BridgeError::Deserialize(e.to_string()))
}

/// Same as `update_gathering_items`, through `window.pywebview.api`
pub async fn update_gathering_items_pywebview(payload: &GatheringPayload) -> Result<BridgeResponse, BridgeError> {
    let js_payload = to_js(payload).map_err(|e| BridgeError::Serialize(e.to_string()))?;
    let result = call_pywebview("update_gathering_items", &[js_payload])
        .await
        .map_err(|e| BridgeError::Rejected(js_error(e)))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| BridgeError::Deserialize(e.to_string()))
}

/// Gatherable items known to the backend, sorted by level
pub async fn get_gathering_items() -> Result<Vec<CatalogEntry>, String> {
    let result = call("get_gathering_items").await.map_err(js_error)?;
    let response: CatalogResponse = serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())?;
    if response.success {
        Ok(response.items)
    } else {
        Err(response.message.unwrap_or_else(|| "Failed to load gathering catalog".to_string()))
    }
}

pub async fn get_gathering_progress() -> Result<HashMap<String, ProgressRecord>, String> {
    let result = call("get_gathering_progress").await.map_err(js_error)?;
    let response: ProgressResponse = serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())?;
    if response.success {
        Ok(response.items)
    } else {
        Err(response.message.unwrap_or_else(|| "Failed to load gathering progress".to_string()))
    }
}

/// Start or stop the gathering automation; returns the new running state
pub async fn toggle_gathering() -> Result<bool, String> {
    let result = call("toggle_gathering").await.map_err(js_error)?;
    // The backend answers `null` when gathering is not available at all
    let response: Option<ToggleResponse> = serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())?;
    match response {
        Some(ToggleResponse { success: true, is_gathering, .. }) => Ok(is_gathering.unwrap_or(false)),
        Some(response) => Err(response.message.unwrap_or_else(|| "Failed to toggle gathering".to_string())),
        None => Err("Gathering is not available".to_string()),
    }
}

pub async fn get_gathering_status() -> Result<bool, String> {
    let result = call("get_gathering_status").await.map_err(js_error)?;
    let response: StatusResponse = serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())?;
    Ok(response.is_gathering)
}
