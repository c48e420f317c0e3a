use std::ops::Range;
use std::time::Duration;

use rand::Rng;

/// Default simulated round-trip range in milliseconds.
pub const DEFAULT_RANGE_MS: Range<u64> = 1000..2000;

/// Simulated network round-trip applied at the top of every store operation.
///
/// The pause is drawn uniformly from the configured range, does not vary with
/// payload size, and is not cancellable.
#[derive(Debug, Clone)]
pub struct Latency {
    range_ms: Option<Range<u64>>,
}

impl Latency {
    pub fn uniform(range_ms: Range<u64>) -> Self {
        Self {
            range_ms: Some(range_ms),
        }
    }

    /// No pause at all; used by tests.
    pub fn none() -> Self {
        Self { range_ms: None }
    }

    pub async fn pause(&self) {
        if let Some(delay) = self.pick() {
            tokio::time::sleep(delay).await;
        }
    }

    fn pick(&self) -> Option<Duration> {
        self.range_ms
            .clone()
            .map(|range| Duration::from_millis(rand::thread_rng().gen_range(range)))
    }
}
