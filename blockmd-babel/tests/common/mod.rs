//! Shared test doubles for the injected generation capabilities.

use blockmd_babel::ids::{Clock, IdSource};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic id source: `id000`, `id001`, …
pub struct SeqIds(AtomicUsize);

impl SeqIds {
    pub fn new() -> Self {
        SeqIds(AtomicUsize::new(0))
    }
}

impl IdSource for SeqIds {
    fn next_id(&self) -> String {
        format!("id{:03}", self.0.fetch_add(1, Ordering::Relaxed))
    }
}

/// Clock pinned to a fixed instant.
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}
