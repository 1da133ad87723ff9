//! WebAssembly module for Correria reports
//!
//! Lets the browser run the same reports as the server on a JSON snapshot:
//! - Kardex and reference detail
//! - Client pending units and seller performance
//! - Offline snapshot validation

use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::reports::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Decode like the server does: absent collections come from the seed
fn parse_snapshot(snapshot_json: &str) -> Result<AppSnapshot, JsValue> {
    AppSnapshot::migrate_from_json(snapshot_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Empty strings from form inputs mean "no filter"
fn non_empty(filter: Option<String>) -> Option<String> {
    filter.filter(|f| !f.trim().is_empty())
}

/// Kardex rows: lots, incoming, outgoing and available per reference
#[wasm_bindgen]
pub fn kardex_report(snapshot_json: &str) -> Result<String, JsValue> {
    let snapshot = parse_snapshot(snapshot_json)?;
    to_json(&ReportBook::new(&snapshot).kardex().rows())
}

/// Reference detail rows, optionally filtered by reference id
#[wasm_bindgen]
pub fn reference_report(snapshot_json: &str, filter: Option<String>) -> Result<String, JsValue> {
    let snapshot = parse_snapshot(snapshot_json)?;
    let filter = non_empty(filter);
    to_json(&ReportBook::new(&snapshot).references(filter.as_deref()))
}

/// Client pending units for a correria (`"global"` or an id)
#[wasm_bindgen]
pub fn client_report(
    snapshot_json: &str,
    correria: Option<String>,
    filter: Option<String>,
) -> Result<String, JsValue> {
    let snapshot = parse_snapshot(snapshot_json)?;
    let scope = CampaignScope::from_param(correria.as_deref());
    let filter = non_empty(filter);
    to_json(&ReportBook::new(&snapshot).clients(&scope, filter.as_deref()))
}

/// Seller performance grouped by seller name
#[wasm_bindgen]
pub fn seller_report(
    snapshot_json: &str,
    correria: Option<String>,
    filter: Option<String>,
) -> Result<String, JsValue> {
    let snapshot = parse_snapshot(snapshot_json)?;
    let scope = CampaignScope::from_param(correria.as_deref());
    let filter = non_empty(filter);
    to_json(&ReportBook::new(&snapshot).sellers(&scope, filter.as_deref()))
}

/// Seller performance keyed by seller id
#[wasm_bindgen]
pub fn seller_report_by_id(snapshot_json: &str, correria: Option<String>) -> Result<String, JsValue> {
    let snapshot = parse_snapshot(snapshot_json)?;
    let scope = CampaignScope::from_param(correria.as_deref());
    to_json(&ReportBook::new(&snapshot).sellers_by_id(&scope))
}

/// Validate a snapshot document, returning the issue list as JSON
#[wasm_bindgen]
pub fn validate_snapshot_json(snapshot_json: &str) -> Result<String, JsValue> {
    let snapshot = parse_snapshot(snapshot_json)?;
    let issues: Vec<String> = validate_snapshot(&snapshot)
        .iter()
        .map(ToString::to_string)
        .collect();
    to_json(&issues)
}
