//! Benchmark Report Data Structures
//!
//! Reports arrive from the measurement engine with statistics already
//! computed. A report without statistics is a valid state: the run failed,
//! crashed or was skipped.

use crate::benchmark::Benchmark;
use serde::{Deserialize, Serialize};

/// Pre-computed timing statistics for one benchmark (all times in nanoseconds)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of samples
    pub sample_count: usize,
    /// Mean time
    pub mean_ns: f64,
    /// Median time
    pub median_ns: f64,
    /// Standard deviation
    pub std_dev_ns: f64,
    /// Fastest sample
    pub min_ns: f64,
    /// Slowest sample
    pub max_ns: f64,
}

/// Outcome of running one benchmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Benchmark this report belongs to
    pub benchmark: Benchmark,
    /// Present only if the run completed successfully
    pub statistics: Option<Statistics>,
    /// Runtime descriptor reported by the process that ran the benchmark
    pub runtime_info: Option<String>,
}

impl BenchmarkReport {
    /// Create a report with no statistics and no runtime descriptor
    pub fn new(benchmark: Benchmark) -> Self {
        Self {
            benchmark,
            statistics: None,
            runtime_info: None,
        }
    }

    /// Attach statistics, builder style
    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    /// Attach a runtime descriptor, builder style
    pub fn with_runtime_info(mut self, runtime_info: impl Into<String>) -> Self {
        self.runtime_info = Some(runtime_info.into());
        self
    }

    /// Runtime descriptor, if the run produced one
    pub fn runtime_info(&self) -> Option<&str> {
        self.runtime_info.as_deref()
    }

    /// Mean time in nanoseconds, if statistics are present
    pub fn mean_ns(&self) -> Option<f64> {
        self.statistics.as_ref().map(|s| s.mean_ns)
    }

    /// Whether the run completed with statistics
    pub fn is_success(&self) -> bool {
        self.statistics.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::Job;

    #[test]
    fn test_report_without_statistics() {
        let report = BenchmarkReport::new(Benchmark::new("crashy", Job::new()));
        assert!(!report.is_success());
        assert_eq!(report.mean_ns(), None);
        assert_eq!(report.runtime_info(), None);
    }

    #[test]
    fn test_report_builders() {
        let report = BenchmarkReport::new(Benchmark::new("parse", Job::named("J1")))
            .with_statistics(Statistics {
                sample_count: 10,
                mean_ns: 1200.0,
                std_dev_ns: 12.0,
                ..Default::default()
            })
            .with_runtime_info("rustc 1.80.0, x86_64");

        assert!(report.is_success());
        assert_eq!(report.mean_ns(), Some(1200.0));
        assert_eq!(report.runtime_info(), Some("rustc 1.80.0, x86_64"));
    }

    #[test]
    fn test_report_serializes() {
        let report = BenchmarkReport::new(Benchmark::new("parse", Job::new()));
        let json = serde_json::to_string(&report).unwrap();
        let back: BenchmarkReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
