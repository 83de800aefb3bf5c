use chrono::{DateTime, Local};

/// Result carried by every finished load
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The list was replaced with `count` entries
    Loaded { count: usize },
    /// A newer load (or a cancel) aborted this one before it wrote anything
    Superseded,
    /// The load task died without writing
    Failed(String),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }

    pub fn label(&self) -> String {
        match self {
            LoadOutcome::Loaded { count } => format!("loaded {} items", count),
            LoadOutcome::Superseded => String::from("superseded"),
            LoadOutcome::Failed(reason) => format!("failed: {}", reason),
        }
    }
}

/// Last finished load, shown in the status bar
#[derive(Clone, Debug)]
pub struct LoadRecord {
    pub id: u64,
    pub outcome: LoadOutcome,
    pub finished_at: DateTime<Local>,
}

impl LoadRecord {
    pub fn new(id: u64, outcome: LoadOutcome) -> Self {
        LoadRecord {
            id,
            outcome,
            finished_at: Local::now(),
        }
    }
}

/// Transient notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        assert_eq!(LoadOutcome::Loaded { count: 7 }.label(), "loaded 7 items");
        assert_eq!(LoadOutcome::Superseded.label(), "superseded");
        assert_eq!(
            LoadOutcome::Failed("panic".into()).label(),
            "failed: panic"
        );
        assert!(LoadOutcome::Loaded { count: 0 }.is_loaded());
        assert!(!LoadOutcome::Superseded.is_loaded());
    }
}
