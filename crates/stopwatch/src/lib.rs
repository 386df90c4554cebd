//! Label-keyed Performance Timers
//!
//! This crate provides ad-hoc profiling of named code sections:
//! - A [`Stopwatch`] registry with start, stop, pause and reset per label
//! - Aggregate statistics (min, max, average, total, last, stop count)
//! - A fixed-layout text report and a serializable summary
//! - Wall, monotonic and process CPU clocks
//! - RAII [`Lap`] guards for scope timing
//!
//! # Example
//!
//! ```rust
//! use stopwatch::Stopwatch;
//!
//! let mut sw = Stopwatch::new();
//!
//! sw.start("download");
//! // ... first half ...
//! sw.pause("download").unwrap();
//!
//! sw.start("download");
//! // ... second half ...
//! sw.stop("download").unwrap();
//!
//! sw.report_all(&mut std::io::stdout()).unwrap();
//! ```

mod clock;
mod config;
mod error;
mod lap;
mod record;
mod registry;
mod report;
mod summary;

pub use clock::*;
pub use config::*;
pub use error::*;
pub use lap::*;
pub use record::*;
pub use registry::*;
pub use report::*;
pub use summary::*;
