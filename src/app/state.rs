//! App state - the screen's data, with list loading delegated to `ListState`

use std::time::Duration;

use tokio::sync::mpsc;

use crate::app::gesture::PullGesture;
use crate::app::refresh::RefreshIndicator;
use crate::config::Config;
use crate::list::{ListState, SampleFeed};
use crate::messages::{IndicatorState, RenderState, TaskEvent};
use crate::models::{LoadRecord, Toast};

/// A delayed task event the actor has to schedule
#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    pub after: Duration,
    pub event: TaskEvent,
}

/// Main application state
pub struct AppState {
    pub config: Config,

    // List
    pub list: ListState,
    pub scroll: u16,

    // Refresh
    pub refresh: RefreshIndicator,
    pub gesture: PullGesture,

    // Toast
    pub toast: Option<Toast>,
    pub next_toast_id: u64,

    // Status bar
    pub last_load: Option<LoadRecord>,

    // Popups
    pub show_help: bool,
}

impl AppState {
    /// Finished loads are reported on `events`
    pub fn new(config: Config, events: mpsc::UnboundedSender<TaskEvent>) -> Self {
        let feed = SampleFeed::new(config.load_delay());
        AppState {
            list: ListState::new(feed, config.overlap).with_events(events),
            scroll: 0,
            refresh: RefreshIndicator::new(config.refresh_reset),
            gesture: PullGesture::new(config.pull_threshold_rows),
            toast: None,
            next_toast_id: 0,
            last_load: None,
            show_help: false,
            config,
        }
    }

    /// Generate a unique toast ID
    pub fn next_toast_id(&mut self) -> u64 {
        self.next_toast_id += 1;
        self.next_toast_id
    }

    fn indicator(&self) -> IndicatorState {
        if self.refresh.is_refreshing() {
            return IndicatorState::Refreshing;
        }
        match self.gesture.progress() {
            Some(progress) => IndicatorState::Pulling {
                progress,
                armed: self.gesture.is_armed(),
            },
            None => IndicatorState::Hidden,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            items: self.list.items(),
            is_loading: self.list.is_loading(),
            scroll: self.scroll,
            indicator: self.indicator(),
            refresh_reset: self.refresh.reset_mode(),
            toast: self.toast.as_ref().map(|t| t.message.clone()),
            last_load: self.last_load.clone(),
            show_help: self.show_help,
        }
    }
}
