//! Job Configuration
//!
//! A job is the named execution configuration (toolchain, platform, run
//! strategy, ...) a benchmark was measured under. Several benchmarks usually
//! share one job, and the summary groups runtime descriptors by the job's
//! resolved id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Resolved id of a job with neither an explicit id nor characteristics
pub const DEFAULT_JOB_ID: &str = "DefaultJob";

/// Execution configuration shared by one or more benchmarks
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Job {
    /// Explicit display id, if the user named the job
    pub id: Option<String>,
    /// Configuration characteristics (e.g. `runtime = "stable"`, `platform = "x64"`)
    #[serde(default)]
    pub characteristics: BTreeMap<String, String>,
}

impl Job {
    /// Create an anonymous job with no characteristics
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a job with an explicit id
    pub fn named(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            characteristics: BTreeMap::new(),
        }
    }

    /// Set a characteristic, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.characteristics.insert(key.into(), value.into());
        self
    }

    /// Display identifier used for grouping.
    ///
    /// Explicit id if present, [`DEFAULT_JOB_ID`] for a job without
    /// characteristics, otherwise `Job-XXXXXX` derived from the characteristics.
    /// The derived id is deterministic across processes, so two jobs with the
    /// same characteristics always resolve to the same id.
    pub fn resolved_id(&self) -> String {
        if let Some(id) = &self.id {
            return id.clone();
        }
        if self.characteristics.is_empty() {
            return DEFAULT_JOB_ID.to_string();
        }

        let mut hasher = fxhash::FxHasher64::default();
        self.characteristics.hash(&mut hasher);
        format!("Job-{:06X}", hasher.finish() & 0xFF_FFFF)
    }
}
