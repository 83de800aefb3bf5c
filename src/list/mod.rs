//! List layer - the observable item list and its loading flag
//!
//! `ListState` owns both values and publishes every change through
//! `tokio::sync::watch`, so the app actor re-renders without polling.

pub mod feed;
pub mod state;

pub use feed::SampleFeed;
pub use state::{ListState, ListWatch, LoadHandle};
