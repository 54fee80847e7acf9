// ============================================================================
// CAVEMAN BOARD - FRONTEND (RUST PURO)
// ============================================================================
// - Views: wire the static DOM (no business logic)
// - Services: backend + storage communication only
// - State: state management with Rc<RefCell>
// - Models: wire types shared with the backend
// ============================================================================

pub mod app;
pub mod dom;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;

// Holds the App instance for the lifetime of the module
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🦴 Caveman Board starting...");

    // A page without the login markup keeps the module alive anyway; the
    // exported API stays usable.
    match App::new() {
        Ok(app) => {
            APP.with(|app_cell| {
                *app_cell.borrow_mut() = Some(app);
            });
        }
        Err(e) => {
            log::error!("❌ [APP] Startup failed: {:?}", e);
        }
    }

    Ok(())
}

/// Clear the persisted session so the next page load shows the login form
/// again. Exposed to the hosting page; nothing in this module calls it.
#[wasm_bindgen]
pub fn logout() {
    if let Err(e) = services::session_service::clear_session() {
        log::error!("❌ [APP] Error clearing session: {}", e);
    }

    APP.with(|app_cell| {
        if let Some(app) = app_cell.borrow().as_ref() {
            app.state().auth.set_logged_in(false);
            app.state().auth.set_uuid(None);
        }
    });

    log::info!("👋 [APP] Session cleared");
}
