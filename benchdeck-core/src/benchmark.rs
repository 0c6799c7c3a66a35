//! Benchmark Identity

use crate::job::Job;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named parameter value a benchmark case was instantiated with
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BenchmarkParameter {
    /// Parameter name (e.g. `size`)
    pub name: String,
    /// Display value (e.g. `1024`)
    pub value: String,
}

impl BenchmarkParameter {
    /// Create a parameter
    pub fn new(name: impl Into<String>, value: impl ToString) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }
}

/// A single measured unit of code under a specific job.
///
/// Equality and hashing cover every field, so a `Benchmark` can key the
/// report lookup directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Benchmark {
    /// Target name (function or method being measured)
    pub target: String,
    /// Job the benchmark ran under
    pub job: Job,
    /// Parameter values for this case, in declaration order
    #[serde(default)]
    pub parameters: Vec<BenchmarkParameter>,
    /// Position of the benchmark in its declaring suite
    #[serde(default)]
    pub declaration_index: usize,
}

impl Benchmark {
    /// Create a benchmark for `target` under `job`
    pub fn new(target: impl Into<String>, job: Job) -> Self {
        Self {
            target: target.into(),
            job,
            parameters: Vec::new(),
            declaration_index: 0,
        }
    }

    /// Add a parameter value, builder style
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.parameters.push(BenchmarkParameter::new(name, value));
        self
    }

    /// Set the declaration index, builder style
    pub fn at_index(mut self, index: usize) -> Self {
        self.declaration_index = index;
        self
    }

    /// Value of the named parameter, if this case has one
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// `Target(p=v, ...) [JobId]` form used in logs and errors
    pub fn display_info(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target)?;
        if !self.parameters.is_empty() {
            let params: Vec<String> = self
                .parameters
                .iter()
                .map(|p| format!("{}={}", p.name, p.value))
                .collect();
            write!(f, "({})", params.join(", "))?;
        }
        write!(f, " [{}]", self.job.resolved_id())
    }
}
