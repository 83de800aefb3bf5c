//! Message types for inter-layer communication in the actor-based architecture.
//!
//! UI events flow from the terminal loop to the App actor, task events flow
//! from timers and load tasks to the App actor, and render state flows back
//! to the terminal loop.

pub mod ui_events;
pub mod task_events;
pub mod render;

pub use ui_events::UiEvent;
pub use task_events::TaskEvent;
pub use render::{IndicatorState, RenderState};
