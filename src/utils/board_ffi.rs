// ============================================================================
// BOARD FFI - JavaScript collaborator
// ============================================================================
// Wrappers for page-supplied functions only - no state, no logic
// ============================================================================

/// Hand off to the page's board renderer, if it is loaded.
pub fn render_board() {
    if let Some(window) = web_sys::window() {
        let function =
            js_sys::Function::new_no_args("if (window.renderBoard) window.renderBoard();");
        let _ = function.call0(&window.into());
    }
}
