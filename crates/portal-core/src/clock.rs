use instant::Instant;

/// Monotonic elapsed-time source.
///
/// Injected into [`crate::Portal`] rather than reached through a global so
/// tests can drive time by hand. Elapsed time is carried as `f64`
/// milliseconds; that keeps sub-microsecond precision for far longer than any
/// session lives, so no wraparound handling is needed.
pub trait Clock {
    /// Milliseconds since the clock started. Monotonic, non-negative.
    fn elapsed_millis(&self) -> f64;
}

/// Wall clock measured from construction.
#[derive(Clone, Debug)]
pub struct StartClock {
    started: Instant,
}

impl StartClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for StartClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StartClock {
    fn elapsed_millis(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock advanced by hand, for host-side tests.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    elapsed_millis: f64,
}

impl ManualClock {
    pub fn set_millis(&mut self, millis: f64) {
        self.elapsed_millis = millis;
    }

    pub fn advance_millis(&mut self, millis: f64) {
        self.elapsed_millis += millis;
    }
}

impl Clock for ManualClock {
    fn elapsed_millis(&self) -> f64 {
        self.elapsed_millis
    }
}
