//! App layer - central state management and command processing
//!
//! The App actor receives UI events and task events, drives the refresh
//! state machine and emits render state.

pub mod state;
pub mod actor;
pub mod commands;
pub mod refresh;
pub mod gesture;

pub use state::AppState;
pub use actor::AppActor;
