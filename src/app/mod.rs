//! App layer - central state management and command processing
//!
//! The App actor receives UI events, applies them to the comment
//! store and UI state, and emits render state.

pub mod state;
pub mod actor;
pub mod commands;

pub use state::AppState;
pub use actor::AppActor;
