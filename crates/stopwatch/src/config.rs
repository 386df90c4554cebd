//! Registry configuration

use crate::clock::{Clock, CpuClock, MonotonicClock, SystemClock};
use crate::error::StopwatchResult;
use serde::{Deserialize, Serialize};

/// Which clock a registry reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockSource {
    /// Wall clock, seconds since the UNIX epoch
    #[default]
    Wall,
    /// Monotonic clock, seconds since the registry was built
    Monotonic,
    /// Process CPU time, seconds since the registry was built
    Cpu,
}

impl ClockSource {
    /// Build a boxed clock for this source.
    pub fn build(self) -> Box<dyn Clock> {
        match self {
            ClockSource::Wall => Box::new(SystemClock),
            ClockSource::Monotonic => Box::new(MonotonicClock::new()),
            ClockSource::Cpu => Box::new(CpuClock::new()),
        }
    }
}

/// Settings used to construct a [`Stopwatch`](crate::Stopwatch).
///
/// ```rust
/// use stopwatch::{ClockSource, StopwatchConfig};
///
/// let config = StopwatchConfig::from_json(r#"{ "clock": "monotonic" }"#).unwrap();
/// assert!(config.active);
/// assert_eq!(config.clock, ClockSource::Monotonic);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StopwatchConfig {
    /// Whether the registry records anything; `false` makes every mutating
    /// operation a silent no-op.
    pub active: bool,
    /// Time source
    pub clock: ClockSource,
}

impl StopwatchConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> StopwatchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder method to set the enable switch.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builder method to set the clock source.
    pub fn with_clock(mut self, clock: ClockSource) -> Self {
        self.clock = clock;
        self
    }
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            active: true,
            clock: ClockSource::Wall,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StopwatchConfig::default();
        assert!(config.active);
        assert_eq!(config.clock, ClockSource::Wall);
    }

    #[test]
    fn test_from_json_partial() {
        let config = StopwatchConfig::from_json(r#"{ "active": false }"#).unwrap();
        assert!(!config.active);
        assert_eq!(config.clock, ClockSource::Wall);

        let config = StopwatchConfig::from_json("{}").unwrap();
        assert_eq!(config, StopwatchConfig::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_clock() {
        let err = StopwatchConfig::from_json(r#"{ "clock": "gpu" }"#).unwrap_err();
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_from_json_cpu_clock() {
        let config = StopwatchConfig::from_json(r#"{ "clock": "cpu" }"#).unwrap();
        assert_eq!(config.clock, ClockSource::Cpu);

        let clock = config.clock.build();
        assert!(clock.take_time() >= 0.0);
    }

    #[test]
    fn test_builders() {
        let config = StopwatchConfig::default()
            .with_active(false)
            .with_clock(ClockSource::Monotonic);
        assert!(!config.active);
        assert_eq!(config.clock, ClockSource::Monotonic);
    }
}
