//! List state holder - observable items plus loading flag

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::AbortHandle;

use crate::config::OverlapPolicy;
use crate::list::feed::SampleFeed;
use crate::messages::TaskEvent;
use crate::models::LoadOutcome;

/// Receivers for both observable values
#[derive(Clone, Debug)]
pub struct ListWatch {
    pub items: watch::Receiver<Vec<String>>,
    pub is_loading: watch::Receiver<bool>,
}

/// Handle to one started load
#[derive(Debug)]
pub struct LoadHandle {
    id: u64,
    outcome_rx: oneshot::Receiver<LoadOutcome>,
}

impl LoadHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Wait for the load to finish, be superseded, or fail
    pub async fn outcome(self) -> LoadOutcome {
        self.outcome_rx
            .await
            .unwrap_or_else(|_| LoadOutcome::Failed(String::from("load supervisor dropped")))
    }
}

#[derive(Default)]
struct Ledger {
    /// Newest started load
    latest: u64,
    /// Loads at or below this id were cancelled
    fence: u64,
    /// Started loads that have not finished yet
    outstanding: usize,
}

/// State shared between the holder and its load tasks
struct Shared {
    items: watch::Sender<Vec<String>>,
    is_loading: watch::Sender<bool>,
    ledger: Mutex<Ledger>,
}

impl Shared {
    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_loading(&self, value: bool) {
        self.is_loading.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });
    }

    fn begin(&self, id: u64) {
        let mut ledger = self.ledger();
        ledger.latest = id;
        ledger.outstanding += 1;
        self.set_loading(true);
    }

    /// Called by a load task once its data is ready. Writes happen under the
    /// ledger lock so a concurrent `begin` or `cancel` can never interleave.
    fn complete(&self, id: u64, policy: OverlapPolicy, items: Vec<String>) -> LoadOutcome {
        let mut ledger = self.ledger();
        ledger.outstanding = ledger.outstanding.saturating_sub(1);

        let stale = id <= ledger.fence || (policy == OverlapPolicy::Supersede && id != ledger.latest);
        let outcome = if stale {
            LoadOutcome::Superseded
        } else {
            let count = items.len();
            self.items.send_replace(items);
            LoadOutcome::Loaded { count }
        };

        if ledger.outstanding == 0 {
            self.set_loading(false);
        }
        outcome
    }

    /// Called for a load task that was aborted or panicked
    fn abandon(&self) {
        let mut ledger = self.ledger();
        ledger.outstanding = ledger.outstanding.saturating_sub(1);
        if ledger.outstanding == 0 {
            self.set_loading(false);
        }
    }

    fn cancel(&self, fence: u64) {
        let mut ledger = self.ledger();
        ledger.fence = fence;
        ledger.latest = fence;
        self.set_loading(false);
    }
}

/// Holds the displayed items and the loading flag.
///
/// `items` is only ever replaced as a whole by a finished load. `is_loading`
/// is true while at least one load is outstanding.
pub struct ListState {
    shared: Arc<Shared>,
    feed: Arc<SampleFeed>,
    policy: OverlapPolicy,
    next_id: u64,
    pending: Vec<(u64, AbortHandle)>,
    events: Option<mpsc::UnboundedSender<TaskEvent>>,
}

impl ListState {
    pub fn new(feed: SampleFeed, policy: OverlapPolicy) -> Self {
        let (items, _) = watch::channel(Vec::new());
        let (is_loading, _) = watch::channel(false);
        ListState {
            shared: Arc::new(Shared {
                items,
                is_loading,
                ledger: Mutex::new(Ledger::default()),
            }),
            feed: Arc::new(feed),
            policy,
            next_id: 0,
            pending: Vec::new(),
            events: None,
        }
    }

    /// Report every finished load on `events`
    pub fn with_events(mut self, events: mpsc::UnboundedSender<TaskEvent>) -> Self {
        self.events = Some(events);
        self
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn subscribe(&self) -> ListWatch {
        ListWatch {
            items: self.shared.items.subscribe(),
            is_loading: self.shared.is_loading.subscribe(),
        }
    }

    pub fn items(&self) -> Vec<String> {
        self.shared.items.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.shared.is_loading.borrow()
    }

    /// Id of the newest load that is still running
    pub fn pending_id(&self) -> Option<u64> {
        self.pending
            .iter()
            .rev()
            .find(|(_, handle)| !handle.is_finished())
            .map(|(id, _)| *id)
    }

    /// Start a load.
    ///
    /// `is_loading` flips to true before this returns. After the feed delay
    /// the items are replaced and the flag cleared. Under
    /// `OverlapPolicy::Supersede` any load still pending is aborted first.
    pub fn load_items(&mut self) -> LoadHandle {
        let id = self.next_id();
        self.pending.retain(|(_, handle)| !handle.is_finished());

        self.shared.begin(id);

        if self.policy == OverlapPolicy::Supersede {
            for (old_id, handle) in self.pending.drain(..) {
                tracing::debug!(old_id, new_id = id, "Superseding pending load");
                handle.abort();
            }
        }

        tracing::info!(id, delay_ms = self.feed.delay().as_millis() as u64, "Starting load");

        let deadline = self.feed.deadline();
        let feed = Arc::clone(&self.feed);
        let shared = Arc::clone(&self.shared);
        let policy = self.policy;

        let work = tokio::spawn(async move {
            let items = feed.fetch_at(deadline).await;
            shared.complete(id, policy, items)
        });
        self.pending.push((id, work.abort_handle()));

        let (outcome_tx, outcome_rx) = oneshot::channel();
        let shared = Arc::clone(&self.shared);
        let events = self.events.clone();

        tokio::spawn(async move {
            let outcome = match work.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    shared.abandon();
                    if e.is_panic() {
                        LoadOutcome::Failed(String::from("load task panicked"))
                    } else {
                        LoadOutcome::Superseded
                    }
                }
            };
            tracing::info!(id, outcome = %outcome.label(), "Load finished");
            let _ = outcome_tx.send(outcome.clone());
            if let Some(events) = events {
                let _ = events.send(TaskEvent::LoadFinished { id, outcome });
            }
        });

        LoadHandle { id, outcome_rx }
    }

    /// Abort every pending load and clear the loading flag. Items are kept.
    pub fn cancel(&mut self) {
        let fence = self.next_id();
        self.shared.cancel(fence);
        for (id, handle) in self.pending.drain(..) {
            tracing::info!(id, "Cancelling load");
            handle.abort();
        }
    }
}

impl Drop for ListState {
    fn drop(&mut self) {
        for (_, handle) in self.pending.drain(..) {
            handle.abort();
        }
    }
}
