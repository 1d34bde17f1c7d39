//! Event handlers the page invokes. All transient state lives behind the
//! managed `ViewState`; every handler returns the full render model so the
//! page redraws from scratch.

use std::sync::Mutex;

use tauri::command;
use tauri_plugin_clipboard_manager::ClipboardExt;
use tracing::warn;

use crate::llm::HttpPromptService;
use crate::view::{self, EvaluationView, ViewState};

#[command]
pub async fn submit_prompt(
    prompt: String,
    service: tauri::State<'_, HttpPromptService>,
    state: tauri::State<'_, Mutex<ViewState>>,
) -> Result<EvaluationView, String> {
    Ok(view::submit_prompt(state.inner(), service.inner(), prompt).await)
}

#[command]
pub async fn try_variant(
    index: usize,
    text: String,
    service: tauri::State<'_, HttpPromptService>,
    state: tauri::State<'_, Mutex<ViewState>>,
) -> Result<EvaluationView, String> {
    Ok(view::try_variant(state.inner(), service.inner(), index, text).await)
}

#[command]
pub fn copy_variant(app: tauri::AppHandle, text: String) -> Result<(), String> {
    // Best effort: a failed clipboard write is logged, never surfaced.
    if let Err(error) = app.clipboard().write_text(text) {
        warn!(%error, "clipboard write failed");
    }
    Ok(())
}

#[command]
pub fn get_view(state: tauri::State<'_, Mutex<ViewState>>) -> Result<EvaluationView, String> {
    Ok(EvaluationView::project(&state.lock().unwrap()))
}
