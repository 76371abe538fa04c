use std::time::{Duration, Instant};

/// Source of monotonic time for the standalone-ESC heuristic.
///
/// The classifier never reads the wall clock directly; it asks its injected
/// clock instead, so tests can simulate elapsed time without sleeping.
pub trait Clock {
    /// Monotonic time elapsed since an arbitrary fixed origin.
    fn now(&mut self) -> Duration;
}

/// Clock backed by [`Instant`], used outside of tests.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&mut self) -> Duration {
        self.origin.elapsed()
    }
}
