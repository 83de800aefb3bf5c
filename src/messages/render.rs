//! Render state - data structure sent from App layer to UI for rendering

use crate::config::RefreshReset;
use crate::models::LoadRecord;

/// What the refresh indicator at the top of the screen shows
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum IndicatorState {
    #[default]
    Hidden,
    /// A pull is in progress; `armed` once release would refresh
    Pulling { progress: f32, armed: bool },
    Refreshing,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // List
    pub items: Vec<String>,
    pub is_loading: bool,
    pub scroll: u16,

    // Refresh
    pub indicator: IndicatorState,
    pub refresh_reset: RefreshReset,

    // Toast
    pub toast: Option<String>,

    // Status bar
    pub last_load: Option<LoadRecord>,

    // Popups
    pub show_help: bool,
}
