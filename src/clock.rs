//! Wall-clock sources
//!
//! Cooldowns compare Unix timestamps in milliseconds, the same unit the
//! web client stores.

use std::cell::Cell;
use std::rc::Rc;

/// Source of the current time
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_ms(&self) -> u64;
}

/// System time (native only; the browser build uses `Date.now()`)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Hand-driven clock for tests and replays
///
/// Clones share the same instant.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get().saturating_add(delta_ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
