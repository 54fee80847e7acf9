// ============================================================================
// LOGIN VIEW - wires the static login form
// ============================================================================
// The page owns the markup; this module only looks elements up by id and
// attaches behavior to them.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use crate::dom::{alert, get_element_by_id, on_submit, set_style};
use crate::models::LoginFailure;
use crate::services::{auth_service, session_service};
use crate::state::AppState;
use crate::utils::board_ffi;
use crate::utils::constants::{
    BOARD_CONTAINER_ID, BOARD_Z_INDEX, LOGIN_CONTAINER_ID, LOGIN_FORM_ID, PASSWORD_INPUT_ID,
    USERNAME_INPUT_ID,
};

const ALERT_WRONG_PASS: &str = "🪓 Wrong password, ooga!";
const ALERT_NO_USER: &str = "👤 User not found. Wanna sign in?";
const ALERT_GENERIC: &str = "Something broke in the cave.";

/// Attach the submit handler to the login form owned by the page.
pub fn bind_login_form(state: &AppState) -> Result<(), JsValue> {
    let form = get_element_by_id(LOGIN_FORM_ID)
        .ok_or_else(|| JsValue::from_str("No #loginForm element found"))?;

    let state = state.clone();

    on_submit(&form, move |e: web_sys::Event| {
        e.prevent_default();

        // Field values go out as-is; the backend does the validating
        let username = input_value(USERNAME_INPUT_ID);
        let password = input_value(PASSWORD_INPUT_ID);

        let state = state.clone();

        spawn_local(async move {
            log::info!("🔐 [LOGIN] Submitting credentials...");

            match auth_service::perform_login(&username, &password).await {
                Ok(response) => {
                    if response.success {
                        let uuid = response.uuid.unwrap_or_default();

                        if let Err(e) = session_service::save_session(&uuid) {
                            log::error!("❌ [LOGIN] Error persisting session: {}", e);
                        }

                        state.auth.set_logged_in(true);
                        state.auth.set_uuid(Some(uuid));

                        if let Err(e) = show_board() {
                            log::error!("❌ [LOGIN] Board transition failed: {:?}", e);
                        }
                    } else {
                        match response.failure() {
                            LoginFailure::WrongPassword => alert(ALERT_WRONG_PASS),
                            LoginFailure::UnknownUser => alert(ALERT_NO_USER),
                            LoginFailure::Unrecognized => {
                                // No user feedback for codes outside the known set
                                log::warn!(
                                    "⚠️ [LOGIN] Unrecognized error code: {:?}",
                                    response.error
                                );
                            }
                        }
                    }
                }
                Err(e) => {
                    log::error!("❌ [LOGIN] Login error: {}", e);
                    alert(ALERT_GENERIC);
                }
            }
        });
    })?;

    Ok(())
}

/// Hide the login layer, lift the board above it and hand off to the page's
/// board renderer. Shared by the login success branch and session restore.
pub fn show_board() -> Result<(), JsValue> {
    if let Some(login_container) = get_element_by_id(LOGIN_CONTAINER_ID) {
        set_style(&login_container, "display", "none")?;
    }

    if let Some(board) = get_element_by_id(BOARD_CONTAINER_ID) {
        set_style(&board, "z-index", BOARD_Z_INDEX)?;
    }

    board_ffi::render_board();

    Ok(())
}

fn input_value(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}
