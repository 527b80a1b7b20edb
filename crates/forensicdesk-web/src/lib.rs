//! ForensicDesk login page — Leptos CSR WASM application.
//!
//! Binds the `forensicdesk-common` login controller to a reactive view.
//! There is no backend: sign-in is simulated with browser timers and a
//! successful attempt navigates to a static, role-specific dashboard page.

pub mod browser;
pub mod pages;

use forensicdesk_common::LoginConfig;
use leptos::prelude::*;

use pages::login::LoginPage;

const LOGIN_TOML: &str = include_str!("../login.toml");

/// Resolves the embedded config, falling back to defaults if it is broken.
fn load_config() -> LoginConfig {
    LoginConfig::from_toml_str(LOGIN_TOML).unwrap_or_else(|e| {
        log::warn!("Ignoring login.toml: {e}");
        LoginConfig::default()
    })
}

// ── App Root ────────────────────────────────────────────────────────

/// Leptos application root.
#[component]
pub fn App() -> impl IntoView {
    provide_context(load_config());

    view! { <LoginPage /> }
}

// ── WASM entry point ────────────────────────────────────────────────

/// Called by trunk to mount the app.
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("ForensicDesk login starting");
    leptos::mount::mount_to_body(App);
}
