use crate::utils::constants::{SESSION_LOGGED_IN_KEY, SESSION_UUID_KEY};
use crate::utils::storage::{get_storage_item, remove_storage_item, set_storage_item};

/// Persist a fresh session after a successful login.
///
/// Both entries are raw text values: the flag is the literal `"true"` and the
/// identifier is stored as-is, so the hosting page can read them directly.
pub fn save_session(uuid: &str) -> Result<(), String> {
    set_storage_item(SESSION_LOGGED_IN_KEY, "true")?;
    set_storage_item(SESSION_UUID_KEY, uuid)?;
    Ok(())
}

/// True when a prior login is recorded. Only the exact text `"true"` counts.
pub fn has_active_session() -> bool {
    matches!(
        get_storage_item(SESSION_LOGGED_IN_KEY).as_deref(),
        Some("true")
    )
}

/// Identifier returned by the last successful login, if any. Meaningful only
/// while [`has_active_session`] holds.
pub fn session_uuid() -> Option<String> {
    get_storage_item(SESSION_UUID_KEY)
}

/// Remove both session entries.
pub fn clear_session() -> Result<(), String> {
    remove_storage_item(SESSION_LOGGED_IN_KEY)?;
    remove_storage_item(SESSION_UUID_KEY)?;
    Ok(())
}
