//! Summary Ordering
//!
//! Decides the display sequence of benchmarks. Ordering is pluggable: the
//! configuration may name a built-in policy or attach a custom
//! [`OrderProvider`]; [`DefaultOrderProvider`] is used when it does neither.
//!
//! Providers run after reports are collected and before the time unit and
//! table are derived, so they can read measured data through [`SummaryView`].
//! Whatever they return is checked to be a permutation of their input.

use crate::error::SummaryError;
use benchdeck_core::{Benchmark, BenchmarkParameter, BenchmarkReport};
use fxhash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::fmt;

/// Read access to a summary whose order is still being resolved
#[derive(Clone, Copy)]
pub struct SummaryView<'a> {
    title: &'a str,
    reports: &'a FxHashMap<Benchmark, BenchmarkReport>,
}

impl<'a> SummaryView<'a> {
    pub(crate) fn new(title: &'a str, reports: &'a FxHashMap<Benchmark, BenchmarkReport>) -> Self {
        Self { title, reports }
    }

    /// Title of the summary under construction
    pub fn title(&self) -> &'a str {
        self.title
    }

    /// Whether a report exists for the benchmark
    pub fn has_report(&self, benchmark: &Benchmark) -> bool {
        self.reports.contains_key(benchmark)
    }

    /// Report for the benchmark, if any
    pub fn report_for(&self, benchmark: &Benchmark) -> Option<&'a BenchmarkReport> {
        self.reports.get(benchmark)
    }

    /// Mean time (ns) of the benchmark, if its run produced statistics
    pub fn mean_ns(&self, benchmark: &Benchmark) -> Option<f64> {
        self.report_for(benchmark).and_then(|r| r.mean_ns())
    }
}

impl fmt::Debug for SummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummaryView")
            .field("title", &self.title)
            .field("reports", &self.reports.len())
            .finish()
    }
}

/// Ordering policy for a summary.
///
/// Implementations must return exactly the benchmarks they were given, each
/// once. Construction fails with a [`SummaryError`] otherwise.
pub trait OrderProvider: fmt::Debug + Send + Sync {
    /// Short policy name used in logs and errors
    fn name(&self) -> &str;

    /// Return `benchmarks` in display order
    fn summary_order(&self, benchmarks: &[Benchmark], summary: &SummaryView<'_>) -> Vec<Benchmark>;
}

/// Groups by job, then by parameter values, then by declaration order
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOrderProvider;

impl OrderProvider for DefaultOrderProvider {
    fn name(&self) -> &str {
        "default"
    }

    fn summary_order(
        &self,
        benchmarks: &[Benchmark],
        _summary: &SummaryView<'_>,
    ) -> Vec<Benchmark> {
        let mut keyed: Vec<(String, &Benchmark)> = benchmarks
            .iter()
            .map(|b| (b.job.resolved_id(), b))
            .collect();

        keyed.sort_by(|(job_a, a), (job_b, b)| {
            job_a
                .cmp(job_b)
                .then_with(|| compare_parameters(&a.parameters, &b.parameters))
                .then_with(|| a.declaration_index.cmp(&b.declaration_index))
        });

        keyed.into_iter().map(|(_, b)| b.clone()).collect()
    }
}

/// Declaration order only
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredOrderProvider;

impl OrderProvider for DeclaredOrderProvider {
    fn name(&self) -> &str {
        "declared"
    }

    fn summary_order(
        &self,
        benchmarks: &[Benchmark],
        _summary: &SummaryView<'_>,
    ) -> Vec<Benchmark> {
        let mut ordered = benchmarks.to_vec();
        ordered.sort_by_key(|b| b.declaration_index);
        ordered
    }
}

/// Ascending mean time; benchmarks without statistics go last
#[derive(Debug, Clone, Copy, Default)]
pub struct FastestFirstOrderProvider;

impl OrderProvider for FastestFirstOrderProvider {
    fn name(&self) -> &str {
        "fastest-first"
    }

    fn summary_order(
        &self,
        benchmarks: &[Benchmark],
        summary: &SummaryView<'_>,
    ) -> Vec<Benchmark> {
        let mut keyed: Vec<(Option<f64>, &Benchmark)> = benchmarks
            .iter()
            .map(|b| (summary.mean_ns(b), b))
            .collect();

        keyed.sort_by(|(mean_a, a), (mean_b, b)| {
            let by_mean = match (mean_a, mean_b) {
                (Some(x), Some(y)) => x.total_cmp(y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            by_mean.then_with(|| a.declaration_index.cmp(&b.declaration_index))
        });

        keyed.into_iter().map(|(_, b)| b.clone()).collect()
    }
}

/// Alphabetical by target name, then job id
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphabeticalOrderProvider;

impl OrderProvider for AlphabeticalOrderProvider {
    fn name(&self) -> &str {
        "alphabetical"
    }

    fn summary_order(
        &self,
        benchmarks: &[Benchmark],
        _summary: &SummaryView<'_>,
    ) -> Vec<Benchmark> {
        let mut ordered = benchmarks.to_vec();
        ordered.sort_by_key(|b| b.declaration_index);
        ordered.sort_by_cached_key(|b| (b.target.clone(), b.job.resolved_id()));
        ordered
    }
}

/// Compare parameter lists pairwise; numeric values compare as numbers
fn compare_parameters(a: &[BenchmarkParameter], b: &[BenchmarkParameter]) -> Ordering {
    for (pa, pb) in a.iter().zip(b) {
        let ord = match pa.name.cmp(&pb.name) {
            Ordering::Equal => compare_values(&pa.value, &pb.value),
            other => other,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

fn compare_values(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        _ => a.cmp(b),
    }
}

/// Check that `ordered` is a permutation of `candidates` (which are distinct)
pub(crate) fn validate_order(
    provider: &str,
    candidates: &[Benchmark],
    ordered: &[Benchmark],
) -> Result<(), SummaryError> {
    if candidates.len() != ordered.len() {
        return Err(SummaryError::OrderLengthMismatch {
            provider: provider.to_string(),
            expected: candidates.len(),
            actual: ordered.len(),
        });
    }

    let known: FxHashSet<&Benchmark> = candidates.iter().collect();
    let mut seen: FxHashSet<&Benchmark> = FxHashSet::default();

    for bench in ordered {
        if !known.contains(bench) {
            return Err(SummaryError::UnknownBenchmark {
                provider: provider.to_string(),
                benchmark: bench.display_info(),
            });
        }
        if !seen.insert(bench) {
            return Err(SummaryError::DuplicateBenchmark {
                provider: provider.to_string(),
                benchmark: bench.display_info(),
            });
        }
    }

    Ok(())
}
