//! Clock Abstraction
//!
//! Supplies the engine with "now" so TTL behavior can be tested
//! deterministically without real delays.

use std::time::{SystemTime, UNIX_EPOCH};

// == Clock Trait ==
/// Source of the current time in Unix milliseconds.
///
/// The engine never reads the wall clock directly; it asks its injected
/// clock instead, so tests can substitute a manually advanced one.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Returns the current time as Unix milliseconds.
    fn now_ms(&self) -> u64;
}

// == System Clock ==
/// Production clock backed by `SystemTime`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System time is before the Unix epoch")
            .as_millis() as u64
    }
}

// == Manual Clock ==
/// Test clock that only moves when told to.
#[cfg(test)]
pub mod manual {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    use super::Clock;

    /// Manually advanced clock for deterministic TTL tests.
    ///
    /// Cloning shares the underlying time, so a test can keep a handle
    /// while the engine owns another.
    #[derive(Debug, Default, Clone)]
    pub struct ManualClock {
        now_ms: Arc<AtomicU64>,
    }

    impl ManualClock {
        /// Creates a clock starting at the given Unix millisecond time.
        pub fn starting_at(now_ms: u64) -> Self {
            Self {
                now_ms: Arc::new(AtomicU64::new(now_ms)),
            }
        }

        /// Advances the clock by the given number of milliseconds.
        pub fn advance_ms(&self, delta_ms: u64) {
            self.now_ms.fetch_add(delta_ms, Ordering::SeqCst);
        }

        /// Advances the clock by the given number of seconds.
        pub fn advance_secs(&self, delta_secs: u64) {
            self.advance_ms(delta_secs * 1000);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> u64 {
            self.now_ms.load(Ordering::SeqCst)
        }
    }
}
