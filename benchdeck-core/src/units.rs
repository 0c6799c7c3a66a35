//! Time Units
//!
//! Benchmark means span many orders of magnitude. A summary shows all of them
//! in one shared unit, picked from a fixed ladder so the fastest benchmark
//! still reads with at least one integer digit and fewer than four.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display unit for timings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Nanoseconds (`ns`)
    #[default]
    Nanosecond,
    /// Microseconds (`us`)
    Microsecond,
    /// Milliseconds (`ms`)
    Millisecond,
    /// Seconds (`s`)
    Second,
    /// Minutes (`min`)
    Minute,
    /// Hours (`h`)
    Hour,
}

impl TimeUnit {
    /// The ladder, smallest first
    pub const ALL: [TimeUnit; 6] = [
        TimeUnit::Nanosecond,
        TimeUnit::Microsecond,
        TimeUnit::Millisecond,
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
    ];

    /// Length of one unit in nanoseconds
    pub fn nanoseconds(self) -> f64 {
        match self {
            TimeUnit::Nanosecond => 1.0,
            TimeUnit::Microsecond => 1e3,
            TimeUnit::Millisecond => 1e6,
            TimeUnit::Second => 1e9,
            TimeUnit::Minute => 60e9,
            TimeUnit::Hour => 3_600e9,
        }
    }

    /// Short suffix (`ns`, `us`, `ms`, `s`, `min`, `h`)
    pub fn abbreviation(self) -> &'static str {
        match self {
            TimeUnit::Nanosecond => "ns",
            TimeUnit::Microsecond => "us",
            TimeUnit::Millisecond => "ms",
            TimeUnit::Second => "s",
            TimeUnit::Minute => "min",
            TimeUnit::Hour => "h",
        }
    }

    /// Convert a nanosecond value into this unit
    pub fn convert(self, nanos: f64) -> f64 {
        nanos / self.nanoseconds()
    }

    /// Format a nanosecond value in this unit with three decimals
    pub fn format(self, nanos: f64) -> String {
        format!("{:.3} {}", self.convert(nanos), self.abbreviation())
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Pick the shared display unit for a set of mean times (nanoseconds).
///
/// Driven by the smallest finite, non-negative value: the first unit `u` with
/// `min < 1000 * u` wins, values past the top of the ladder use hours.
/// Only the minimum matters, so the result is independent of input order.
/// An empty (or all non-finite) input falls back to nanoseconds.
pub fn best_time_unit(means_ns: &[f64]) -> TimeUnit {
    let min = means_ns
        .iter()
        .copied()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .min_by(|a, b| a.total_cmp(b));

    let Some(min) = min else {
        return TimeUnit::default();
    };

    TimeUnit::ALL
        .into_iter()
        .find(|unit| min < 1000.0 * unit.nanoseconds())
        .unwrap_or(TimeUnit::Hour)
}
