// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/

mod commands;
pub mod config;
pub mod llm;
pub mod validation;
pub mod view;

use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::commands::*;
use crate::config::Config;
use crate::llm::HttpPromptService;
use crate::view::ViewState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().expect("endpoint configuration is incomplete");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_clipboard_manager::init())
        .manage(HttpPromptService::new(config))
        .manage(Mutex::new(ViewState::default()))
        .invoke_handler(tauri::generate_handler![
            submit_prompt,
            try_variant,
            copy_variant,
            get_view
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
