#![warn(missing_docs)]
//! BenchDeck Core - Benchmark Result Model
//!
//! The entities a benchmark summary is assembled from:
//! - `Benchmark` and `Job` identities (jobs group runtime descriptors)
//! - `BenchmarkReport` with optional pre-computed `Statistics`
//! - `HostEnvironmentInfo` for the machine producing the summary
//! - `ValidationError` with critical/advisory `Severity`
//! - `TimeUnit` ladder and shared unit selection

mod benchmark;
mod host;
mod job;
mod report;
mod units;
mod validation;

pub use benchmark::{Benchmark, BenchmarkParameter};
pub use host::HostEnvironmentInfo;
pub use job::{DEFAULT_JOB_ID, Job};
pub use report::{BenchmarkReport, Statistics};
pub use units::{TimeUnit, best_time_unit};
pub use validation::{Severity, ValidationError};
