//! Task events - messages from background tasks to the App layer

use crate::models::LoadOutcome;

/// Sent by load tasks and timers when they finish
#[derive(Debug, Clone, PartialEq)]
pub enum TaskEvent {
    /// A load finished, was superseded, or failed
    LoadFinished {
        id: u64,
        outcome: LoadOutcome,
    },
    /// The fixed pause of a refresh elapsed
    RefreshPauseElapsed {
        refresh_id: u64,
    },
    /// A toast reached the end of its lifetime
    ToastExpired {
        id: u64,
    },
}

impl TaskEvent {
    /// Id of the load, refresh or toast this event belongs to
    pub fn id(&self) -> u64 {
        match self {
            TaskEvent::LoadFinished { id, .. } => *id,
            TaskEvent::RefreshPauseElapsed { refresh_id } => *refresh_id,
            TaskEvent::ToastExpired { id } => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_covers_every_event() {
        let loaded = TaskEvent::LoadFinished {
            id: 3,
            outcome: LoadOutcome::Loaded { count: 7 },
        };
        assert_eq!(loaded.id(), 3);
        assert_eq!(TaskEvent::RefreshPauseElapsed { refresh_id: 4 }.id(), 4);
        assert_eq!(TaskEvent::ToastExpired { id: 5 }.id(), 5);
    }
}
