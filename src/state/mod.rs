// ============================================================================
// STATE MODULE - state management with Rc<RefCell>
// ============================================================================

pub mod app_state;
pub mod auth_state;

pub use app_state::*;
pub use auth_state::*;
