//! Label-keyed timer registry

use crate::clock::{Clock, SystemClock};
use crate::config::StopwatchConfig;
use crate::error::{StopwatchError, StopwatchResult};
use crate::record::PerformanceRecord;
use crate::report::write_report;
use crate::summary::LabelStats;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// A registry of named performance timers.
///
/// Each label owns a [`PerformanceRecord`] created by its first
/// [`start`](Self::start). Every other operation fails with
/// [`StopwatchError::NotInitialized`] for a label that was never started.
///
/// Labels are kept in lexicographic order, which is the order used by
/// [`report_all`](Self::report_all), [`labels`](Self::labels) and
/// [`summary`](Self::summary).
///
/// The registry does no locking. Share it across threads behind a `Mutex`
/// if needed.
///
/// # Example
///
/// ```rust
/// use stopwatch::Stopwatch;
///
/// let mut sw = Stopwatch::new();
/// sw.start("load");
/// // ... work ...
/// sw.stop("load").unwrap();
///
/// assert_eq!(sw.get_total_time("load").unwrap(), sw.get_average_time("load").unwrap());
/// sw.print_report("load").unwrap();
/// ```
#[derive(Debug)]
pub struct Stopwatch {
    active: bool,
    records: BTreeMap<String, PerformanceRecord>,
    clock: Box<dyn Clock>,
}

impl Stopwatch {
    /// Create an active registry reading the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an active registry reading the given clock.
    pub fn with_clock<C: Clock + 'static>(clock: C) -> Self {
        Self {
            active: true,
            records: BTreeMap::new(),
            clock: Box::new(clock),
        }
    }

    /// Create a registry from configuration.
    pub fn from_config(config: &StopwatchConfig) -> Self {
        Self {
            active: config.active,
            records: BTreeMap::new(),
            clock: config.clock.build(),
        }
    }

    /// Replace the time source.
    ///
    /// Running intervals keep their start timestamps, so switch clocks only
    /// while nothing is running.
    pub fn set_clock<C: Clock + 'static>(&mut self, clock: C) {
        self.clock = Box::new(clock);
    }

    /// Current time from the registry's clock, in seconds.
    pub(crate) fn take_time(&self) -> f64 {
        self.clock.take_time()
    }

    /// Enable recording.
    pub fn turn_on(&mut self) {
        tracing::info!(target: "stopwatch", "Stopwatch active.");
        self.active = true;
    }

    /// Disable recording. Mutating and reporting operations become no-ops.
    pub fn turn_off(&mut self) {
        tracing::info!(target: "stopwatch", "Stopwatch inactive.");
        self.active = false;
    }

    /// Whether the registry is recording.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether `label` has been started.
    pub fn contains(&self, label: &str) -> bool {
        self.records.contains_key(label)
    }

    /// All known labels, in report order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Number of known labels.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no label has been started.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A copy of the record for `label`.
    pub fn record(&self, label: &str) -> StopwatchResult<PerformanceRecord> {
        self.lookup(label).copied()
    }

    /// Start or resume timing `label`, creating its record on first use.
    pub fn start(&mut self, label: &str) {
        if !self.active {
            return;
        }

        let now = self.take_time();
        let record = self.records.entry(label.to_owned()).or_default();
        let resumed = record.paused;
        record.begin(now);

        tracing::trace!(target: "stopwatch", label, resumed, "timer started");
    }

    /// Stop timing `label`, closing the current logical interval.
    pub fn stop(&mut self, label: &str) -> StopwatchResult<()> {
        if !self.active {
            return Ok(());
        }

        let now = self.take_time();
        let record = self.lookup_mut(label)?;
        let lapse = record.finish(now);
        let interval = record.last_time;

        tracing::trace!(target: "stopwatch", label, lapse, interval, "timer stopped");
        Ok(())
    }

    /// Pause `label`, banking the running segment until the next `start`.
    pub fn pause(&mut self, label: &str) -> StopwatchResult<()> {
        if !self.active {
            return Ok(());
        }

        let now = self.take_time();
        let record = self.lookup_mut(label)?;
        let lapse = record.suspend(now);

        tracing::trace!(target: "stopwatch", label, lapse, "timer paused");
        Ok(())
    }

    /// Zero every statistic of `label`. The label stays known.
    pub fn reset(&mut self, label: &str) -> StopwatchResult<()> {
        if !self.active {
            return Ok(());
        }

        self.lookup_mut(label)?.clear();

        tracing::debug!(target: "stopwatch", label, "timer reset");
        Ok(())
    }

    /// Reset every known label.
    pub fn reset_all(&mut self) {
        if !self.active {
            return;
        }

        self.records.values_mut().for_each(PerformanceRecord::clear);

        tracing::debug!(target: "stopwatch", labels = self.records.len(), "all timers reset");
    }

    /// Write the report block for `label` to `output`.
    pub fn report<W: Write + ?Sized>(&self, label: &str, output: &mut W) -> StopwatchResult<()> {
        if !self.active {
            return Ok(());
        }

        let record = self.lookup(label)?;
        write_report(label, record, output)?;
        Ok(())
    }

    /// Write the report block of every label to `output`.
    pub fn report_all<W: Write + ?Sized>(&self, output: &mut W) -> StopwatchResult<()> {
        if !self.active {
            return Ok(());
        }

        for (label, record) in &self.records {
            write_report(label, record, output)?;
        }
        Ok(())
    }

    /// [`report`](Self::report) to standard output.
    pub fn print_report(&self, label: &str) -> StopwatchResult<()> {
        self.report(label, &mut io::stdout().lock())
    }

    /// [`report_all`](Self::report_all) to standard output.
    pub fn print_report_all(&self) -> StopwatchResult<()> {
        self.report_all(&mut io::stdout().lock())
    }

    /// Seconds since `label` was last started or resumed, whatever its state.
    pub fn get_time_so_far(&self, label: &str) -> StopwatchResult<f64> {
        let now = self.take_time();
        Ok(self.lookup(label)?.time_so_far(now))
    }

    /// Sum of every running segment of `label`.
    pub fn get_total_time(&self, label: &str) -> StopwatchResult<f64> {
        Ok(self.lookup(label)?.total_time)
    }

    /// Total time divided by the number of stops.
    ///
    /// NaN (or infinite, after a pause) for a label that was never stopped.
    pub fn get_average_time(&self, label: &str) -> StopwatchResult<f64> {
        Ok(self.lookup(label)?.average_time())
    }

    /// Shortest logical interval of `label`.
    pub fn get_min_time(&self, label: &str) -> StopwatchResult<f64> {
        Ok(self.lookup(label)?.min_time)
    }

    /// Longest logical interval of `label`.
    pub fn get_max_time(&self, label: &str) -> StopwatchResult<f64> {
        Ok(self.lookup(label)?.max_time)
    }

    /// Length of the last logical interval, or the time banked so far if paused.
    pub fn get_last_time(&self, label: &str) -> StopwatchResult<f64> {
        Ok(self.lookup(label)?.last_time)
    }

    /// Number of completed stops of `label`.
    pub fn get_stops(&self, label: &str) -> StopwatchResult<u64> {
        Ok(self.lookup(label)?.stops)
    }

    /// Statistics for every label, in report order.
    pub fn summary(&self) -> Vec<LabelStats> {
        self.records
            .iter()
            .map(|(label, record)| LabelStats::from_record(label, record))
            .collect()
    }

    /// [`summary`](Self::summary) as pretty-printed JSON.
    pub fn summary_json(&self) -> StopwatchResult<String> {
        Ok(serde_json::to_string_pretty(&self.summary())?)
    }

    fn lookup(&self, label: &str) -> StopwatchResult<&PerformanceRecord> {
        self.records
            .get(label)
            .ok_or_else(|| StopwatchError::not_initialized(label))
    }

    fn lookup_mut(&mut self, label: &str) -> StopwatchResult<&mut PerformanceRecord> {
        self.records
            .get_mut(label)
            .ok_or_else(|| StopwatchError::not_initialized(label))
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
