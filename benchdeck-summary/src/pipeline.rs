//! Construction Pipeline
//!
//! Each stage consumes the previous one, so the steps can only run in order:
//!
//! ```text
//! Vec<BenchmarkReport>
//!        │ collect      identity map, duplicates: last write wins
//!        ▼
//!    Collected
//!        │ order        provider output checked to be a permutation
//!        ▼
//!     Ordered
//!        │ finalize     time unit, table, runtime block
//!        ▼
//!    Finalized
//! ```

use crate::error::SummaryError;
use crate::order::{OrderProvider, SummaryView, validate_order};
use crate::runtimes::build_all_runtimes;
use crate::table::SummaryTable;
use benchdeck_core::{Benchmark, BenchmarkReport, TimeUnit, best_time_unit};
use fxhash::FxHashMap;
use tracing::{debug, warn};

/// Reports keyed by benchmark, plus distinct benchmarks in first-seen order
pub(crate) struct Collected {
    benchmarks: Vec<Benchmark>,
    reports: FxHashMap<Benchmark, BenchmarkReport>,
}

impl Collected {
    pub(crate) fn collect(reports: Vec<BenchmarkReport>) -> Self {
        let mut benchmarks = Vec::with_capacity(reports.len());
        let mut map = FxHashMap::default();

        for report in reports {
            let bench = report.benchmark.clone();
            if map.insert(bench.clone(), report).is_some() {
                warn!(benchmark = %bench, "duplicate report, keeping the last one");
            } else {
                benchmarks.push(bench);
            }
        }

        debug!(benchmarks = benchmarks.len(), "collected benchmark reports");
        Self {
            benchmarks,
            reports: map,
        }
    }

    pub(crate) fn order(
        self,
        provider: &dyn OrderProvider,
        title: &str,
    ) -> Result<Ordered, SummaryError> {
        let view = SummaryView::new(title, &self.reports);
        let ordered = provider.summary_order(&self.benchmarks, &view);

        if let Err(e) = validate_order(provider.name(), &self.benchmarks, &ordered) {
            warn!(error = %e, "order provider broke its contract");
            return Err(e);
        }
        debug!(provider = provider.name(), "resolved summary order");

        let mut reports = self.reports;
        let mut paired = Vec::with_capacity(ordered.len());
        for bench in &ordered {
            // validate_order guarantees every ordered benchmark is a key, each once
            let Some(report) = reports.remove(bench) else {
                return Err(SummaryError::UnknownBenchmark {
                    provider: provider.name().to_string(),
                    benchmark: bench.display_info(),
                });
            };
            paired.push(report);
        }

        Ok(Ordered {
            benchmarks: ordered,
            reports: paired,
        })
    }
}

/// Benchmarks in display order with `reports[i]` belonging to `benchmarks[i]`
pub(crate) struct Ordered {
    benchmarks: Vec<Benchmark>,
    reports: Vec<BenchmarkReport>,
}

impl Ordered {
    pub(crate) fn finalize(self, host_runtime: &str) -> Finalized {
        let means: Vec<f64> = self.reports.iter().filter_map(|r| r.mean_ns()).collect();
        let time_unit = best_time_unit(&means);
        debug!(unit = %time_unit, sampled = means.len(), "selected time unit");

        let table = SummaryTable::build(&self.reports, time_unit);
        let all_runtimes = build_all_runtimes(host_runtime, &self.reports);

        Finalized {
            benchmarks: self.benchmarks,
            reports: self.reports,
            time_unit,
            table,
            all_runtimes,
        }
    }
}

/// Everything derived from the ordered reports
pub(crate) struct Finalized {
    pub(crate) benchmarks: Vec<Benchmark>,
    pub(crate) reports: Vec<BenchmarkReport>,
    pub(crate) time_unit: TimeUnit,
    pub(crate) table: SummaryTable,
    pub(crate) all_runtimes: String,
}
