//! Timing middleware for pure computations.

use std::time::Instant;
use tracing::debug;

/// Run a closure, log its elapsed time at debug level, and return its value
/// unchanged.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = f();
    debug!("⏱️  {} completed in {:?}", label, start.elapsed());
    result
}
