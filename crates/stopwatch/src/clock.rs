//! Time sources for the registry.
//!
//! Every reading is expressed as fractional seconds since an arbitrary epoch.
//! Only differences between two readings of the same clock are meaningful.

use cpu_time::ProcessTime;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// A source of timestamps.
pub trait Clock: fmt::Debug + Send {
    /// Current time in seconds.
    fn take_time(&self) -> f64;
}

/// Wall clock, seconds since the UNIX epoch.
///
/// Subject to system clock adjustments, so a lapse may come out negative if
/// the clock is stepped backwards mid-interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn take_time(&self) -> f64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since_epoch) => since_epoch.as_secs_f64(),
            Err(before_epoch) => -before_epoch.duration().as_secs_f64(),
        }
    }
}

/// Monotonic clock anchored at its creation.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock reading 0.0 seconds now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn take_time(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Process CPU time, seconds consumed by this process since the clock was
/// created.
///
/// Only advances while some thread of the process is on a CPU, so sleeps and
/// blocking waits do not count.
#[derive(Debug)]
pub struct CpuClock {
    origin: ProcessTime,
}

impl CpuClock {
    /// Create a clock reading 0.0 seconds of CPU time now.
    pub fn new() -> Self {
        Self {
            origin: ProcessTime::now(),
        }
    }
}

impl Default for CpuClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for CpuClock {
    fn take_time(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same reading, so a test can hand one clone to a
/// [`Stopwatch`](crate::Stopwatch) and advance time through another.
///
/// ```rust
/// use stopwatch::{ManualClock, Stopwatch};
///
/// let clock = ManualClock::new();
/// let mut sw = Stopwatch::with_clock(clock.clone());
/// sw.start("step");
/// clock.advance(0.5);
/// sw.stop("step").unwrap();
/// assert_eq!(sw.get_total_time("step").unwrap(), 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    bits: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock reading 0.0 seconds.
    pub fn new() -> Self {
        Self::starting_at(0.0)
    }

    /// Create a clock with a specific initial reading.
    pub fn starting_at(seconds: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(seconds.to_bits())),
        }
    }

    /// Set the current reading.
    pub fn set(&self, seconds: f64) {
        self.bits.store(seconds.to_bits(), Ordering::SeqCst);
    }

    /// Move the reading forward (or backward, for a negative delta).
    pub fn advance(&self, seconds: f64) {
        self.set(self.take_time() + seconds);
    }
}

impl Clock for ManualClock {
    fn take_time(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::SeqCst))
    }
}
