//! Franchisee Portal Shell - Main Entry Point
//!
//! Server/native builds install the tracing subscriber before launching;
//! the browser build logs to the console.

use franchisee_portal_shell::app::App;

// Server and native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Initialize tracing BEFORE dioxus::launch
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Franchisee Portal Shell...");

    dioxus::launch(App);
}

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    web_sys::console::log_1(&"[WASM] Franchisee Portal Shell - WASM initialized!".into());
    dioxus::launch(App);
}
