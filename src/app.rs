// ============================================================================
// APP - session restore + login form wiring
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::services::session_service;
use crate::state::AppState;
use crate::views;

/// Main application
pub struct App {
    state: AppState,
}

impl App {
    /// Wire the page: restore a persisted session if one exists, then attach
    /// the login form handler.
    pub fn new() -> Result<Self, JsValue> {
        let state = AppState::new();

        // Restore session from storage if present
        if session_service::has_active_session() {
            log::info!("💾 [APP] Session found in storage, restoring...");

            state.auth.set_logged_in(true);
            state.auth.set_uuid(session_service::session_uuid());

            // Same transition as a fresh login, but without touching the backend
            views::show_board()?;

            log::info!("✅ [APP] Session restored from storage");
        }

        views::bind_login_form(&state)?;

        Ok(Self { state })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
