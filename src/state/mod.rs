// ============================================================================
// STATE MODULE - Reducible UI state
// ============================================================================

pub mod dialog_state;
pub mod session_state;

pub use dialog_state::*;
pub use session_state::*;
