//! Serializable snapshot of registry statistics

use crate::record::PerformanceRecord;
use serde::{Deserialize, Serialize};

/// Aggregate statistics for one label, in seconds.
///
/// `average` is `None` (JSON `null`) when the label has never been stopped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelStats {
    pub label: String,
    pub average: Option<f64>,
    pub min: f64,
    pub max: f64,
    pub total: f64,
    pub last: f64,
    pub stops: u64,
    pub paused: bool,
}

impl LabelStats {
    /// Build statistics from a record.
    pub fn from_record(label: &str, record: &PerformanceRecord) -> Self {
        let average = record.average_time();
        Self {
            label: label.to_string(),
            average: average.is_finite().then_some(average),
            min: record.min_time,
            max: record.max_time,
            total: record.total_time,
            last: record.last_time,
            stops: record.stops,
            paused: record.paused,
        }
    }
}
