//! # Pull to Refresh TUI
//!
//! A single-screen terminal demo: a list that fills itself after a simulated
//! delay, refreshed by dragging it down or by a "Load list" button.
//!
//! ## Features
//! - Observable list and loading flag (`tokio::sync::watch`)
//! - Cancellable loads; a newer load supersedes a pending one
//! - Refresh indicator that resets on load completion or after a fixed pause
//! - Mouse pull gesture with a threshold
//! - Toast notification on button press
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - List Layer (Tokio tasks behind watch channels)

pub mod config;
pub mod constants;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod list;

// Re-export commonly used types
pub use config::{Config, OverlapPolicy, RefreshReset};
pub use models::{LoadOutcome, LoadRecord, Toast};
pub use messages::{UiEvent, TaskEvent, RenderState, IndicatorState};
pub use app::{AppState, AppActor};
pub use list::{ListState, ListWatch, LoadHandle, SampleFeed};
