//! Sample data source with a simulated delay

use std::time::Duration;
use tokio::time::{sleep_until, Instant};

use crate::constants::{DEFAULT_LOAD_DELAY_MS, SAMPLE_ITEMS};

/// Produces the fixed sample entries after a delay
#[derive(Clone, Debug)]
pub struct SampleFeed {
    delay: Duration,
    items: Vec<String>,
    #[cfg(test)]
    panic_on_fetch: bool,
}

impl Default for SampleFeed {
    fn default() -> Self {
        SampleFeed::new(Duration::from_millis(DEFAULT_LOAD_DELAY_MS))
    }
}

impl SampleFeed {
    pub fn new(delay: Duration) -> Self {
        SampleFeed {
            delay,
            items: SAMPLE_ITEMS.iter().map(|s| s.to_string()).collect(),
            #[cfg(test)]
            panic_on_fetch: false,
        }
    }

    /// A feed whose fetch panics once the delay has passed
    #[cfg(test)]
    pub(crate) fn panicking(delay: Duration) -> Self {
        SampleFeed {
            panic_on_fetch: true,
            ..SampleFeed::new(delay)
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Deadline of a fetch started now
    pub fn deadline(&self) -> Instant {
        Instant::now() + self.delay
    }

    /// Wait for `deadline`, then hand back a fresh copy of the entries
    pub async fn fetch_at(&self, deadline: Instant) -> Vec<String> {
        sleep_until(deadline).await;
        #[cfg(test)]
        if self.panic_on_fetch {
            panic!("sample feed failed");
        }
        self.items.clone()
    }
}
