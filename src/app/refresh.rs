//! Refresh indicator state machine
//!
//! `Idle -> Refreshing` when a refresh is requested. The way back depends on
//! [`RefreshReset`]: when the load the refresh started finishes (loaded,
//! superseded or failed), or after a fixed pause that ignores the load.

use crate::config::RefreshReset;
use crate::models::LoadOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPhase {
    #[default]
    Idle,
    Refreshing { refresh_id: u64, load_id: u64 },
}

#[derive(Debug, Clone)]
pub struct RefreshIndicator {
    phase: RefreshPhase,
    reset: RefreshReset,
    next_refresh_id: u64,
}

impl RefreshIndicator {
    pub fn new(reset: RefreshReset) -> Self {
        RefreshIndicator {
            phase: RefreshPhase::Idle,
            reset,
            next_refresh_id: 0,
        }
    }

    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    pub fn reset_mode(&self) -> RefreshReset {
        self.reset
    }

    pub fn is_refreshing(&self) -> bool {
        matches!(self.phase, RefreshPhase::Refreshing { .. })
    }

    /// Enter `Refreshing` for `load_id`. Returns the refresh id, or
    /// `None` if a refresh is already running.
    pub fn begin(&mut self, load_id: u64) -> Option<u64> {
        if self.is_refreshing() {
            return None;
        }
        self.next_refresh_id += 1;
        let refresh_id = self.next_refresh_id;
        self.phase = RefreshPhase::Refreshing { refresh_id, load_id };
        tracing::info!(refresh_id, load_id, reset = ?self.reset, "Refresh started");
        Some(refresh_id)
    }

    /// Returns true if this finished load ended the refresh. A superseded
    /// load counts as finished.
    pub fn on_load_finished(&mut self, finished_id: u64, outcome: &LoadOutcome) -> bool {
        if self.reset != RefreshReset::Completion {
            return false;
        }
        match self.phase {
            RefreshPhase::Refreshing { refresh_id, load_id } if load_id == finished_id => {
                tracing::info!(refresh_id, outcome = %outcome.label(), "Refresh finished");
                self.phase = RefreshPhase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Returns true if this pause ended the refresh
    pub fn on_pause_elapsed(&mut self, elapsed_id: u64) -> bool {
        if self.reset != RefreshReset::FixedPause {
            return false;
        }
        match self.phase {
            RefreshPhase::Refreshing { refresh_id, .. } if refresh_id == elapsed_id => {
                tracing::info!(refresh_id, "Refresh pause elapsed");
                self.phase = RefreshPhase::Idle;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOADED: LoadOutcome = LoadOutcome::Loaded { count: 7 };

    #[test]
    fn test_completion_resets_on_own_load() {
        let mut refresh = RefreshIndicator::new(RefreshReset::Completion);
        let id = refresh.begin(1).unwrap();
        assert_eq!(refresh.phase(), RefreshPhase::Refreshing { refresh_id: id, load_id: 1 });

        assert!(!refresh.on_pause_elapsed(id));
        assert!(!refresh.on_load_finished(2, &LOADED));
        assert!(refresh.is_refreshing());

        assert!(refresh.on_load_finished(1, &LOADED));
        assert_eq!(refresh.phase(), RefreshPhase::Idle);
    }

    #[test]
    fn test_superseded_load_ends_refresh() {
        let mut refresh = RefreshIndicator::new(RefreshReset::Completion);
        refresh.begin(1);

        assert!(refresh.on_load_finished(1, &LoadOutcome::Superseded));
        assert!(!refresh.on_load_finished(2, &LOADED));
        assert_eq!(refresh.phase(), RefreshPhase::Idle);
    }

    #[test]
    fn test_fixed_pause_ignores_load_completion() {
        let mut refresh = RefreshIndicator::new(RefreshReset::FixedPause);
        let id = refresh.begin(1).unwrap();

        assert!(!refresh.on_load_finished(1, &LOADED));
        assert!(refresh.is_refreshing());
        assert!(!refresh.on_pause_elapsed(id + 1));
        assert!(refresh.on_pause_elapsed(id));
        assert!(!refresh.is_refreshing());
    }

    #[test]
    fn test_begin_while_refreshing_is_ignored() {
        let mut refresh = RefreshIndicator::new(RefreshReset::Completion);
        assert!(refresh.begin(1).is_some());
        assert!(refresh.begin(2).is_none());
        assert_eq!(
            refresh.phase(),
            RefreshPhase::Refreshing { refresh_id: 1, load_id: 1 }
        );
    }
}
