// ============================================================================
// DOM MODULE - helpers over web-sys
// ============================================================================

pub mod element;
pub mod events;

pub use element::*;
pub use events::*;
