//! Application constants
//!
//! Centralized location for labels, sample data and timing defaults.

/// Application name
pub const APP_NAME: &str = "Pull to Refresh";

/// Label on the manual load button
pub const LOAD_BUTTON_LABEL: &str = "Load list";

/// Toast shown when the load button is pressed
pub const LOAD_TOAST_MESSAGE: &str = "Clicked";

/// Simulated latency of a load
pub const DEFAULT_LOAD_DELAY_MS: u64 = 1000;

/// Pause before the refresh indicator resets in fixed-pause mode
pub const DEFAULT_REFRESH_PAUSE_MS: u64 = 1500;

/// Toast lifetime (matches a short platform toast)
pub const DEFAULT_TOAST_MS: u64 = 2000;

/// Rows a pull must travel before release triggers a refresh
pub const DEFAULT_PULL_THRESHOLD_ROWS: u16 = 3;

/// Sample entries written by every completed load, in display order
pub const SAMPLE_ITEMS: [&str; 7] = [
    "Item 1", "Item 2", "Item 3", "Item 4", "Item 5", "Item 6", "Item 7",
];

/// Log file written next to the working directory
pub const LOG_FILE_NAME: &str = "pullrefresh.log";

/// Directory under $HOME holding the config file
pub const CONFIG_DIR_NAME: &str = ".pullrefresh";

/// Config file name inside CONFIG_DIR_NAME
pub const CONFIG_FILE_NAME: &str = "config.yaml";
