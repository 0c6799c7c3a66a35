//! Validation Results
//!
//! Validation runs before or while preparing a benchmark run and is owned by
//! an external validator. The summary only stores its findings.

use crate::benchmark::Benchmark;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity levels for CI integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Critical - the summary should not be used for decisions
    Critical,
    /// Warning level - logged but doesn't invalidate the run
    Warning,
    /// Informational only
    Info,
}

/// A problem flagged by a validator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// How much the problem matters
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
    /// Benchmark the problem applies to, if it is benchmark-specific
    pub benchmark: Option<Benchmark>,
}

impl ValidationError {
    /// Create a validation error that is not tied to a benchmark
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            benchmark: None,
        }
    }

    /// Shorthand for a critical error
    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Severity::Critical, message)
    }

    /// Shorthand for an advisory warning
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Tie the error to a benchmark, builder style
    pub fn for_benchmark(mut self, benchmark: Benchmark) -> Self {
        self.benchmark = Some(benchmark);
        self
    }

    /// Critical errors make the whole summary unfit for decisions
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.benchmark {
            Some(bench) => write!(f, "[{:?}] {}: {}", self.severity, bench, self.message),
            None => write!(f, "[{:?}] {}", self.severity, self.message),
        }
    }
}
