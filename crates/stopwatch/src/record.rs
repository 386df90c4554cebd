//! Per-label timing state

use serde::{Deserialize, Serialize};

/// Timing state for one label.
///
/// All times are in seconds. `min_time` and `max_time` track the length of
/// whole logical intervals (start through any pauses to the terminating stop),
/// while `total_time` sums every running segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    /// Timestamp of the most recent start or resume
    pub clock_start: f64,
    /// Sum of all running segments
    pub total_time: f64,
    /// Shortest logical interval; 0.0 means no stop yet
    pub min_time: f64,
    /// Longest logical interval
    pub max_time: f64,
    /// Time banked in the current logical interval, or the length of the
    /// last completed one
    pub last_time: f64,
    /// Paused but not stopped
    pub paused: bool,
    /// Completed stops
    pub stops: u64,
}

impl PerformanceRecord {
    /// Begin or resume running at `now`.
    ///
    /// A fresh start discards `last_time`; a resume after `pause` keeps it.
    pub fn begin(&mut self, now: f64) {
        self.clock_start = now;
        if !self.paused {
            self.last_time = 0.0;
        }
        self.paused = false;
    }

    /// Close the logical interval at `now`. Returns the segment lapse.
    pub fn finish(&mut self, now: f64) -> f64 {
        let lapse = now - self.clock_start;
        let unpaused_lapse = self.last_time + lapse;

        self.last_time = unpaused_lapse;
        if unpaused_lapse >= self.max_time {
            self.max_time = unpaused_lapse;
        }
        // Zero doubles as "unset", so the first stop always lands here.
        if unpaused_lapse <= self.min_time || self.min_time == 0.0 {
            self.min_time = unpaused_lapse;
        }
        self.total_time += lapse;
        self.stops += 1;

        lapse
    }

    /// Bank the running segment at `now` without closing the interval.
    pub fn suspend(&mut self, now: f64) -> f64 {
        let lapse = now - self.clock_start;
        self.last_time += lapse;
        self.total_time += lapse;
        self.paused = true;
        lapse
    }

    /// Zero every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// `total_time / stops`. Infinite after a pause with no stops, and a
    /// negative NaN (reported as `-nan`) when nothing was ever timed.
    pub fn average_time(&self) -> f64 {
        if self.stops == 0 && self.total_time == 0.0 {
            // 0/0 yields the sign of the target's default NaN; pin it to x86's.
            return -f64::NAN;
        }
        self.total_time / self.stops as f64
    }

    /// Seconds since the last start or resume.
    pub fn time_so_far(&self, now: f64) -> f64 {
        now - self.clock_start
    }
}
