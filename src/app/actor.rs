//! App actor - message loop processing UI events, task events and list changes

use tokio::sync::mpsc;

use crate::app::state::{AppState, Timer};
use crate::config::Config;
use crate::list::ListWatch;
use crate::messages::{RenderState, TaskEvent, UiEvent};

/// App actor that owns the screen state
pub struct AppActor {
    state: AppState,
    watch: ListWatch,
    task_tx: mpsc::UnboundedSender<TaskEvent>,
    task_rx: mpsc::UnboundedReceiver<TaskEvent>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(config: Config, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        let (task_tx, task_rx) = mpsc::unbounded_channel();
        let state = AppState::new(config, task_tx.clone());
        let watch = state.list.subscribe();
        AppActor {
            state,
            watch,
            task_tx,
            task_rx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        // The screen refreshes once when it first appears
        if let Some(timer) = self.state.request_refresh() {
            self.schedule(timer);
        }
        self.render();

        loop {
            tokio::select! {
                event = ui_rx.recv() => {
                    // Quit, or the UI loop is gone
                    let quit = match event {
                        Some(event) => self.handle_ui_event(event),
                        None => true,
                    };
                    if quit {
                        self.state.list.cancel();
                        break;
                    }
                    self.render();
                }
                Some(event) = self.task_rx.recv() => {
                    self.state.handle_task_event(event);
                    self.render();
                }
                Ok(()) = self.watch.is_loading.changed() => self.render(),
                Ok(()) = self.watch.items.changed() => self.render(),
            }
        }
    }

    fn render(&self) {
        let _ = self.render_tx.send(self.state.to_render_state());
    }

    /// Deliver `timer.event` back to this actor after `timer.after`
    fn schedule(&self, timer: Timer) {
        let task_tx = self.task_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(timer.after).await;
            let _ = task_tx.send(timer.event);
        });
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Refresh
            UiEvent::Refresh => {
                if let Some(timer) = self.state.request_refresh() {
                    self.schedule(timer);
                }
            }
            UiEvent::PullStart { row } => self.state.pull_start(row),
            UiEvent::PullMove { row } => self.state.pull_move(row),
            UiEvent::PullRelease { row } => {
                if let Some(timer) = self.state.pull_release(row) {
                    self.schedule(timer);
                }
            }

            // Load button
            UiEvent::LoadList => {
                let timer = self.state.load_list();
                self.schedule(timer);
            }

            // Scrolling
            UiEvent::ScrollUp => self.state.scroll_up(),
            UiEvent::ScrollDown => self.state.scroll_down(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RefreshReset;
    use crate::messages::IndicatorState;
    use std::time::Duration;
    use tokio::time::sleep;

    struct Harness {
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        render_rx: mpsc::UnboundedReceiver<RenderState>,
        latest: RenderState,
    }

    impl Harness {
        fn start(config: Config) -> Self {
            let (ui_tx, ui_rx) = mpsc::unbounded_channel();
            let (render_tx, render_rx) = mpsc::unbounded_channel();
            tokio::spawn(AppActor::new(config, render_tx).run(ui_rx));
            Harness {
                ui_tx,
                render_rx,
                latest: RenderState::default(),
            }
        }

        /// Let virtual time pass, then keep the newest render
        async fn after(&mut self, ms: u64) -> &RenderState {
            sleep(Duration::from_millis(ms)).await;
            while let Ok(state) = self.render_rx.try_recv() {
                self.latest = state;
            }
            &self.latest
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_refreshes_on_start() {
        let mut h = Harness::start(Config::default());

        let state = h.after(1).await;
        assert_eq!(state.indicator, IndicatorState::Refreshing);
        assert!(state.is_loading);
        assert!(state.items.is_empty());

        let state = h.after(1010).await;
        assert_eq!(state.indicator, IndicatorState::Hidden);
        assert!(!state.is_loading);
        assert_eq!(state.items.len(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_pause_outlasts_load() {
        let config = Config {
            refresh_reset: RefreshReset::FixedPause,
            ..Config::default()
        };
        let mut h = Harness::start(config);

        let state = h.after(1100).await;
        assert_eq!(state.items.len(), 7);
        assert_eq!(state.indicator, IndicatorState::Refreshing);

        let state = h.after(500).await;
        assert_eq!(state.indicator, IndicatorState::Hidden);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_button_shows_toast() {
        let mut h = Harness::start(Config::default());
        h.after(1100).await;

        h.ui_tx.send(UiEvent::LoadList).unwrap();
        let state = h.after(1).await;
        assert!(state.is_loading);
        assert_eq!(state.toast.as_deref(), Some("Clicked"));
        assert_eq!(state.indicator, IndicatorState::Hidden);

        let state = h.after(1010).await;
        assert!(!state.is_loading);
        assert_eq!(state.toast.as_deref(), Some("Clicked"));

        let state = h.after(1000).await;
        assert_eq!(state.toast, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_load_ends_valid() {
        let mut h = Harness::start(Config::default());
        h.after(1100).await;

        h.ui_tx.send(UiEvent::LoadList).unwrap();
        h.ui_tx.send(UiEvent::LoadList).unwrap();

        let state = h.after(1010).await;
        assert!(!state.is_loading);
        assert_eq!(state.items.len(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_button_presses_end_refresh() {
        let mut h = Harness::start(Config::default());
        h.after(1).await;

        for _ in 0..5 {
            h.ui_tx.send(UiEvent::LoadList).unwrap();
            h.after(900).await;
        }
        let state = h.after(1).await;
        assert_eq!(state.indicator, IndicatorState::Hidden);
        assert!(state.is_loading);

        let state = h.after(200).await;
        assert_eq!(state.indicator, IndicatorState::Hidden);
        assert!(!state.is_loading);
        assert_eq!(state.items.len(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_ui_channel_stops_actor() {
        let mut h = Harness::start(Config::default());
        h.after(1).await;

        drop(std::mem::replace(&mut h.ui_tx, mpsc::unbounded_channel().0));
        h.after(1).await;
        assert!(h.render_rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_stops_actor() {
        let mut h = Harness::start(Config::default());
        h.after(1).await;

        h.ui_tx.send(UiEvent::Quit).unwrap();
        h.after(1).await;
        assert!(h.render_rx.recv().await.is_none());
    }
}
