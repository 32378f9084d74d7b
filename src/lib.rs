// ============================================================================
// INVESTMENT ADVISOR - FRONTEND MVVM (YEW + WASM)
// ============================================================================
// Layers:
// - Models: request/response shapes shared with the backend
// - Services: HTTP transport, API client, token storage
// - State: session store with change subscribers
// - ViewModels: form state, generate flow, chart derivation
// - Hooks / Components: yew glue and rendering
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

use crate::components::App;
use crate::config::CONFIG;

/// Boots logging and mounts the app on `<body>`.
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 Investment Advisor starting ({} build)",
        CONFIG.environment
    );

    yew::Renderer::<App>::new().render();
}
