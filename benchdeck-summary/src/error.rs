//! Summary Errors

use thiserror::Error;

/// Errors from summary construction.
///
/// Business input never fails construction (missing statistics, missing
/// runtime descriptors and empty lists are all valid). These variants report
/// an order provider that broke its contract of returning a permutation of
/// the candidate benchmarks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SummaryError {
    /// The provider returned a different number of benchmarks than it was given.
    #[error("order provider '{provider}' returned {actual} benchmarks, expected {expected}")]
    OrderLengthMismatch {
        /// Provider name
        provider: String,
        /// Number of candidate benchmarks
        expected: usize,
        /// Number of benchmarks returned
        actual: usize,
    },

    /// The provider returned a benchmark that was not a candidate.
    #[error("order provider '{provider}' returned unknown benchmark: {benchmark}")]
    UnknownBenchmark {
        /// Provider name
        provider: String,
        /// Display info of the offending benchmark
        benchmark: String,
    },

    /// The provider returned the same benchmark more than once.
    #[error("order provider '{provider}' returned duplicate benchmark: {benchmark}")]
    DuplicateBenchmark {
        /// Provider name
        provider: String,
        /// Display info of the offending benchmark
        benchmark: String,
    },
}
