//! Scope-bound timing

use crate::error::StopwatchResult;
use crate::registry::Stopwatch;

/// Starts a label on creation and stops it when dropped.
///
/// # Example
///
/// ```rust
/// use stopwatch::Stopwatch;
///
/// let mut sw = Stopwatch::new();
/// {
///     let _lap = sw.lap("parse");
///     // ... parsing ...
/// }
/// assert_eq!(sw.get_stops("parse").unwrap(), 1);
/// ```
#[derive(Debug)]
pub struct Lap<'a> {
    stopwatch: &'a mut Stopwatch,
    label: String,
    finished: bool,
}

impl<'a> Lap<'a> {
    pub(crate) fn new(stopwatch: &'a mut Stopwatch, label: &str) -> Self {
        stopwatch.start(label);
        Self {
            stopwatch,
            label: label.to_owned(),
            finished: false,
        }
    }

    /// The label being timed.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Seconds since this lap started.
    pub fn elapsed(&self) -> StopwatchResult<f64> {
        self.stopwatch.get_time_so_far(&self.label)
    }

    /// Stop now instead of at drop.
    pub fn stop(mut self) -> StopwatchResult<()> {
        self.finished = true;
        self.stopwatch.stop(&self.label)
    }

    /// Pause instead of stopping; a later `start` resumes the interval.
    pub fn pause(mut self) -> StopwatchResult<()> {
        self.finished = true;
        self.stopwatch.pause(&self.label)
    }
}

impl Drop for Lap<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if let Err(err) = self.stopwatch.stop(&self.label) {
            tracing::warn!(target: "stopwatch", label = %self.label, error = %err, "lap not stopped");
        }
    }
}

impl Stopwatch {
    /// Start `label` and return a guard that stops it on drop.
    pub fn lap(&mut self, label: &str) -> Lap<'_> {
        Lap::new(self, label)
    }
}

/// Time the rest of the enclosing scope under a label.
///
/// ```rust
/// use stopwatch::{time_lap, Stopwatch};
///
/// let mut sw = Stopwatch::new();
/// fn work(sw: &mut Stopwatch) {
///     time_lap!(sw, "work");
///     // ... work ...
/// }
/// work(&mut sw);
/// assert!(sw.contains("work"));
/// ```
#[macro_export]
macro_rules! time_lap {
    ($stopwatch:expr, $label:expr) => {
        let _lap = $stopwatch.lap($label);
    };
}
