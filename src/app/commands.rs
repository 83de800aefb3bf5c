//! Command handlers - business logic for processing UI and task events

use crate::app::state::{AppState, Timer};
use crate::config::RefreshReset;
use crate::constants::LOAD_TOAST_MESSAGE;
use crate::messages::TaskEvent;
use crate::models::{LoadOutcome, LoadRecord, Toast};

impl AppState {
    // ========================
    // Refresh
    // ========================

    /// Start a refresh unless one is running.
    ///
    /// Returns the pause timer in fixed-pause mode.
    pub fn request_refresh(&mut self) -> Option<Timer> {
        if self.refresh.is_refreshing() {
            tracing::debug!(pending = ?self.list.pending_id(), "Refresh already running");
            return None;
        }
        self.gesture.cancel();

        let load_id = self.list.load_items().id();
        let refresh_id = self.refresh.begin(load_id)?;

        match self.refresh.reset_mode() {
            RefreshReset::FixedPause => Some(Timer {
                after: self.config.refresh_pause(),
                event: TaskEvent::RefreshPauseElapsed { refresh_id },
            }),
            RefreshReset::Completion => None,
        }
    }

    pub fn pull_start(&mut self, row: u16) {
        if !self.refresh.is_refreshing() {
            self.gesture.press(row);
        }
    }

    pub fn pull_move(&mut self, row: u16) {
        self.gesture.drag(row);
    }

    pub fn pull_release(&mut self, row: u16) -> Option<Timer> {
        if self.gesture.release(row) {
            self.request_refresh()
        } else {
            None
        }
    }

    // ========================
    // Load button
    // ========================

    /// Load without the refresh indicator and show the toast.
    ///
    /// Returns the toast expiry timer.
    pub fn load_list(&mut self) -> Timer {
        self.list.load_items();
        self.show_toast(LOAD_TOAST_MESSAGE)
    }

    // ========================
    // Toast
    // ========================

    pub fn show_toast(&mut self, message: &str) -> Timer {
        let id = self.next_toast_id();
        self.toast = Some(Toast {
            id,
            message: message.to_string(),
        });
        Timer {
            after: self.config.toast_duration(),
            event: TaskEvent::ToastExpired { id },
        }
    }

    // ========================
    // Scrolling
    // ========================

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let max = self.list.items().len().saturating_sub(1);
        let max = u16::try_from(max).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Task events
    // ========================

    /// Apply a task event coming back from a load or timer
    pub fn handle_task_event(&mut self, event: TaskEvent) {
        tracing::debug!(id = event.id(), ?event, "Task event");
        match event {
            TaskEvent::LoadFinished { id, outcome } => {
                self.refresh.on_load_finished(id, &outcome);
                if outcome != LoadOutcome::Superseded {
                    if outcome.is_loaded() {
                        let max = self.list.items().len().saturating_sub(1);
                        self.scroll = self.scroll.min(u16::try_from(max).unwrap_or(u16::MAX));
                    }
                    self.last_load = Some(LoadRecord::new(id, outcome));
                }
            }
            TaskEvent::RefreshPauseElapsed { refresh_id } => {
                self.refresh.on_pause_elapsed(refresh_id);
            }
            TaskEvent::ToastExpired { id } => {
                // Only the newest toast's own timer clears it
                if self.toast.as_ref().map(|t| t.id) == Some(id) {
                    self.toast = None;
                }
            }
        }
    }
}
