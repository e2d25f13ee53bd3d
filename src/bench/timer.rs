// =====================================================================
// File: bench/timer.rs
// Date: Oct. 16, 2026
//
//! Wall-clock stopwatch for the build and query phases.
// =====================================================================
use std::time::Instant;

/// Measures elapsed time from its creation or last `reset`.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}


impl Timer {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Milliseconds since the start point, with sub-millisecond precision.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1_000.0
    }
}


impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
