//! Performance instrumentation.
//!
//! Pointer handlers run once per event and must stay well under a frame.
//! With the `profiling` feature, [`profile_scope!`] wraps a block in a
//! [`ScopedTimer`] that reports slow scopes through `tracing`. Without the
//! feature the macro expands to nothing.
//!
//! ```ignore
//! fn handle_pointer_up(&mut self) {
//!     profile_scope!("handle_pointer_up");
//!     // ... event handling code ...
//! }
//! ```

use crate::constants::SLOW_HANDLER_MS;
use std::time::Instant;
use tracing::trace;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// RAII timer that logs when dropped after more than `threshold_ms`.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the slow-handler threshold.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, SLOW_HANDLER_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
        }
    }
}
