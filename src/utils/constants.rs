/// Backend base URL, configured at compile time:
/// - Development: http://localhost:8000 (default)
/// - Production: via BACKEND_URL env var (see build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

// localStorage keys
pub const SESSION_LOGGED_IN_KEY: &str = "cavemanLoggedIn";
pub const SESSION_UUID_KEY: &str = "cavemanUUID";

// Element ids owned by the static page
pub const LOGIN_FORM_ID: &str = "loginForm";
pub const USERNAME_INPUT_ID: &str = "User-name";
pub const PASSWORD_INPUT_ID: &str = "User-password";
pub const LOGIN_CONTAINER_ID: &str = "login-form";
pub const BOARD_CONTAINER_ID: &str = "board";

/// z-index that lifts the board above the login layer.
pub const BOARD_Z_INDEX: &str = "10";
