//! Browser-side checks for session persistence and the board reveal.
//!
//! Run with `wasm-pack test --headless --firefox` (or `--chrome`).

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use caveman_board::services::session_service;
use caveman_board::utils::constants::{
    BOARD_CONTAINER_ID, LOGIN_CONTAINER_ID, SESSION_LOGGED_IN_KEY, SESSION_UUID_KEY,
};
use caveman_board::utils::storage;
use caveman_board::views;

wasm_bindgen_test_configure!(run_in_browser);

fn reset_storage() {
    let _ = storage::remove_storage_item(SESSION_LOGGED_IN_KEY);
    let _ = storage::remove_storage_item(SESSION_UUID_KEY);
}

#[wasm_bindgen_test]
fn session_round_trip() {
    reset_storage();

    session_service::save_session("grok-1").unwrap();

    assert!(session_service::has_active_session());
    assert_eq!(session_service::session_uuid().as_deref(), Some("grok-1"));

    // The entries are raw text, readable by anything else on the page
    assert_eq!(
        storage::get_storage_item(SESSION_LOGGED_IN_KEY).as_deref(),
        Some("true")
    );
    assert_eq!(
        storage::get_storage_item(SESSION_UUID_KEY).as_deref(),
        Some("grok-1")
    );

    session_service::clear_session().unwrap();

    assert!(!session_service::has_active_session());
    assert_eq!(session_service::session_uuid(), None);
}

#[wasm_bindgen_test]
fn only_exact_true_counts_as_logged_in() {
    reset_storage();
    assert!(!session_service::has_active_session());

    storage::set_storage_item(SESSION_LOGGED_IN_KEY, "TRUE").unwrap();
    assert!(!session_service::has_active_session());

    storage::set_storage_item(SESSION_LOGGED_IN_KEY, "false").unwrap();
    assert!(!session_service::has_active_session());

    storage::set_storage_item(SESSION_LOGGED_IN_KEY, "true").unwrap();
    assert!(session_service::has_active_session());

    reset_storage();
}

#[wasm_bindgen_test]
fn show_board_hides_login_and_lifts_board() {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();

    let login_container = document.create_element("div").unwrap();
    login_container.set_id(LOGIN_CONTAINER_ID);
    body.append_child(&login_container).unwrap();

    let board = document.create_element("div").unwrap();
    board.set_id(BOARD_CONTAINER_ID);
    body.append_child(&board).unwrap();

    // Count collaborator invocations through the page-global hook
    js_sys::eval(
        "window.renderBoardCalls = 0; \
         window.renderBoard = function() { window.renderBoardCalls += 1; };",
    )
    .unwrap();

    views::show_board().unwrap();

    let login_style = login_container.dyn_ref::<HtmlElement>().unwrap().style();
    let board_style = board.dyn_ref::<HtmlElement>().unwrap().style();

    assert_eq!(login_style.get_property_value("display").unwrap(), "none");
    assert_eq!(board_style.get_property_value("z-index").unwrap(), "10");
    assert_eq!(
        js_sys::eval("window.renderBoardCalls").unwrap().as_f64(),
        Some(1.0)
    );

    // Running the transition again must not toggle anything back
    views::show_board().unwrap();

    assert_eq!(login_style.get_property_value("display").unwrap(), "none");
    assert_eq!(board_style.get_property_value("z-index").unwrap(), "10");
    assert_eq!(
        js_sys::eval("window.renderBoardCalls").unwrap().as_f64(),
        Some(2.0)
    );

    login_container.remove();
    board.remove();
}

#[wasm_bindgen_test]
fn missing_board_markup_is_tolerated() {
    // No #login-form / #board in the page: the transition is a no-op
    views::show_board().unwrap();
}
