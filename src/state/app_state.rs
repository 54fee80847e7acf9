use crate::state::AuthState;

/// Global application state. Single-threaded; clones share the same cells.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            auth: AuthState::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
