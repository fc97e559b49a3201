//! WASM API: `#[wasm_bindgen]` exports for the form builder frontend.
//!
//! This module is only compiled when targeting `wasm32`. It provides:
//! - `init_session` / `destroy_session`: lifecycle
//! - `add_block` / `resize_choice_group`: block creation
//! - `begin_drag` / `hover_drag` / `end_drag` / `cancel_drag`: drag reorder
//! - `get_blocks` / `has_blocks` / `get_block_variants`: rendering and navigation
//! - `set_render_callback`: push the list to the renderer after every change

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::config::EditorConfig;
use crate::core::{BlockList, PendingBlock, ValidationError, Variant};
use crate::runtime::FormSession;

// ── Global state ────────────────────────────────────────────────────────────

thread_local! {
    static SESSION: RefCell<Option<FormSession>> = RefCell::new(None);
}

fn with_session<R>(f: impl FnOnce(&mut FormSession) -> R) -> Result<R, String> {
    SESSION.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(session) => Ok(f(session)),
            None => Err("Session not initialized. Call init_session() first.".into()),
        }
    })
}

// ── JSON interchange types ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct ResizeJson {
    #[serde(default)]
    labels: Vec<String>,
    count: String,
}

// ── Response types ──────────────────────────────────────────────────────────

#[derive(Serialize)]
struct OkResponse {
    id: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
}

#[derive(Serialize)]
struct LabelsResponse {
    labels: Vec<String>,
}

#[derive(Serialize)]
struct DragResponse {
    changed: bool,
    blocks: BlockList,
}

#[derive(Serialize)]
struct DropResponse {
    origin: usize,
    index: usize,
    moved: bool,
}

#[derive(Serialize)]
struct VariantInfo {
    #[serde(rename = "type")]
    variant: &'static str,
    name: &'static str,
    #[serde(rename = "asksRequired")]
    asks_required: bool,
    #[serde(rename = "usesChoices")]
    uses_choices: bool,
    #[serde(rename = "usesOptions")]
    uses_options: bool,
    #[serde(rename = "inputType", skip_serializing_if = "Option::is_none")]
    input_type: Option<&'static str>,
}

fn json_ok(id: &str) -> String {
    serde_json::to_string(&OkResponse { id: id.into() }).unwrap_or_default()
}

fn json_err(msg: impl Into<String>) -> String {
    serde_json::to_string(&ErrorResponse {
        error: msg.into(),
        kind: None,
    })
    .unwrap_or_default()
}

fn json_validation_err(err: ValidationError) -> String {
    serde_json::to_string(&ErrorResponse {
        error: err.to_string(),
        kind: Some(err.kind()),
    })
    .unwrap_or_default()
}

fn json_blocks(blocks: &BlockList) -> String {
    serde_json::to_string(blocks).unwrap_or_default()
}

// ── Exported functions ──────────────────────────────────────────────────────

/// Start a session. `config_json` may be empty for the defaults.
#[wasm_bindgen]
pub fn init_session(config_json: &str) -> String {
    console_error_panic_hook::set_once();

    let config = if config_json.trim().is_empty() {
        EditorConfig::default()
    } else {
        match EditorConfig::from_json_str(config_json) {
            Ok(c) => c,
            Err(e) => return json_err(format!("{:#}", e)),
        }
    };

    SESSION.with(|cell| {
        *cell.borrow_mut() = Some(FormSession::with_config(config));
    });
    json_ok("session")
}

#[wasm_bindgen]
pub fn destroy_session() {
    SESSION.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// Register a JS function called with the block list JSON after every change.
///
/// The callback runs while the session is borrowed and must not call back
/// into this module.
#[wasm_bindgen]
pub fn set_render_callback(callback: js_sys::Function) -> String {
    match with_session(move |session| {
        session.subscribe(move |blocks: &BlockList| {
            let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(&json_blocks(blocks)));
        });
    }) {
        Ok(()) => json_ok("render_callback"),
        Err(e) => json_err(e),
    }
}

#[wasm_bindgen]
pub fn add_block(pending_json: &str) -> String {
    let pending: PendingBlock = match serde_json::from_str(pending_json) {
        Ok(p) => p,
        Err(e) => return json_err(format!("Invalid block JSON: {}", e)),
    };

    match with_session(|session| session.add_block(&pending)) {
        Ok(Ok(id)) => json_ok(&id.to_string()),
        Ok(Err(e)) => json_validation_err(e),
        Err(e) => json_err(e),
    }
}

#[wasm_bindgen]
pub fn resize_choice_group(resize_json: &str) -> String {
    let rj: ResizeJson = match serde_json::from_str(resize_json) {
        Ok(r) => r,
        Err(e) => return json_err(format!("Invalid resize JSON: {}", e)),
    };

    match crate::core::resize_choice_group(&rj.labels, &rj.count) {
        Ok(labels) => serde_json::to_string(&LabelsResponse { labels }).unwrap_or_default(),
        Err(e) => json_validation_err(e),
    }
}

#[wasm_bindgen]
pub fn begin_drag(index: usize) -> bool {
    with_session(|session| session.begin_drag(index)).unwrap_or(false)
}

#[wasm_bindgen]
pub fn hover_drag(target: usize) -> String {
    match with_session(|session| {
        let changed = session.hover_drag(target);
        DragResponse {
            changed,
            blocks: session.blocks().clone(),
        }
    }) {
        Ok(resp) => serde_json::to_string(&resp).unwrap_or_default(),
        Err(e) => json_err(e),
    }
}

#[wasm_bindgen]
pub fn end_drag() -> String {
    finish_drag(FormSession::end_drag)
}

#[wasm_bindgen]
pub fn cancel_drag() -> String {
    finish_drag(FormSession::cancel_drag)
}

#[wasm_bindgen]
pub fn get_blocks() -> String {
    match with_session(|session| json_blocks(session.blocks())) {
        Ok(json) => json,
        Err(e) => json_err(e),
    }
}

#[wasm_bindgen]
pub fn has_blocks() -> bool {
    with_session(|session| session.has_blocks()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn get_block_variants() -> String {
    let variants: Vec<VariantInfo> = Variant::ALL
        .iter()
        .map(|v| VariantInfo {
            variant: v.tag(),
            name: v.display_name(),
            asks_required: v.asks_required(),
            uses_choices: v.uses_choices(),
            uses_options: v.uses_options(),
            input_type: v.input_type(),
        })
        .collect();

    serde_json::to_string(&variants).unwrap_or_default()
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn finish_drag(
    finish: fn(&mut FormSession) -> Option<crate::runtime::drag::DragOutcome>,
) -> String {
    match with_session(finish) {
        Ok(Some(outcome)) => serde_json::to_string(&DropResponse {
            origin: outcome.origin,
            index: outcome.index,
            moved: outcome.moved,
        })
        .unwrap_or_default(),
        Ok(None) => json_err("No drag in progress"),
        Err(e) => json_err(e),
    }
}
