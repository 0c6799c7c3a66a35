//! Benchmark Summary
//!
//! The immutable aggregate exporters and console printers read from. A
//! summary is built in one shot, either from reports or, when measurement
//! could not start, from the attempted benchmark list alone.

use crate::config::{OrderPolicy, SummaryConfig};
use crate::error::SummaryError;
use crate::pipeline::Collected;
use crate::runtimes::build_all_runtimes;
use crate::table::SummaryTable;
use benchdeck_core::{
    Benchmark, BenchmarkReport, HostEnvironmentInfo, Job, TimeUnit, ValidationError,
};
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::info;

/// Terminal construction state of a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryState {
    /// Built from reports; table, unit and runtimes reflect measured data
    Finalized,
    /// Measurement could not start; benchmarks only, no reports
    Failed,
}

/// Pass-through inputs shared by both construction paths
#[derive(Debug, Clone)]
pub struct SummaryContext {
    /// Summary title
    pub title: String,
    /// Host environment descriptor
    pub host: HostEnvironmentInfo,
    /// Configuration, including the order provider
    pub config: SummaryConfig,
    /// Explicit results directory; the config's directory is used when unset
    pub results_directory: Option<PathBuf>,
    /// Wall time of the whole run; ignored by [`Summary::failed`]
    pub total_time: Duration,
    /// Findings of the external validator
    pub validation_errors: Vec<ValidationError>,
}

impl SummaryContext {
    /// Context with default config, no validation errors and zero total time
    pub fn new(title: impl Into<String>, host: HostEnvironmentInfo) -> Self {
        Self {
            title: title.into(),
            host,
            config: SummaryConfig::default(),
            results_directory: None,
            total_time: Duration::ZERO,
            validation_errors: Vec::new(),
        }
    }

    /// Replace the config
    pub fn with_config(mut self, config: SummaryConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the config's results directory
    pub fn with_results_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.results_directory = Some(path.into());
        self
    }

    /// Explicit results directory if set, else the config's
    pub fn resolved_results_directory(&self) -> PathBuf {
        self.results_directory
            .clone()
            .unwrap_or_else(|| self.config.results_directory())
    }

    /// Set the total wall time of the run
    pub fn with_total_time(mut self, total_time: Duration) -> Self {
        self.total_time = total_time;
        self
    }

    /// Set the validation errors found for the run
    pub fn with_validation_errors(mut self, errors: Vec<ValidationError>) -> Self {
        self.validation_errors = errors;
        self
    }
}

/// Immutable summary of a benchmark run.
///
/// `benchmarks()[i]` and `reports()[i]` always describe the same benchmark.
/// All derived data is computed during construction, except [`Summary::jobs`],
/// which is computed once on first access.
#[derive(Debug)]
pub struct Summary {
    title: String,
    host: HostEnvironmentInfo,
    config: SummaryConfig,
    results_directory: PathBuf,
    total_time: Duration,
    validation_errors: Vec<ValidationError>,
    state: SummaryState,
    benchmarks: Vec<Benchmark>,
    reports: Vec<BenchmarkReport>,
    report_index: FxHashMap<Benchmark, usize>,
    time_unit: TimeUnit,
    table: SummaryTable,
    all_runtimes: String,
    jobs: OnceLock<Vec<Job>>,
}

impl Summary {
    /// Build a summary from the reports of a completed run.
    ///
    /// Reports may come in any order; duplicates of a benchmark keep the last
    /// report. Fails only if the configured order provider does not return a
    /// permutation of the benchmarks.
    pub fn from_reports(
        context: SummaryContext,
        reports: Vec<BenchmarkReport>,
    ) -> Result<Self, SummaryError> {
        let provider = context
            .config
            .order_provider()
            .unwrap_or_else(|| OrderPolicy::Default.provider());

        let finalized = Collected::collect(reports)
            .order(provider.as_ref(), &context.title)?
            .finalize(context.host.runtime_info());
        let results_directory = context.resolved_results_directory();

        let report_index = finalized
            .benchmarks
            .iter()
            .enumerate()
            .map(|(i, b)| (b.clone(), i))
            .collect();

        let summary = Self {
            title: context.title,
            host: context.host,
            config: context.config,
            results_directory,
            total_time: context.total_time,
            validation_errors: context.validation_errors,
            state: SummaryState::Finalized,
            benchmarks: finalized.benchmarks,
            reports: finalized.reports,
            report_index,
            time_unit: finalized.time_unit,
            table: finalized.table,
            all_runtimes: finalized.all_runtimes,
            jobs: OnceLock::new(),
        };

        info!(
            title = %summary.title,
            benchmarks = summary.benchmarks.len(),
            unit = %summary.time_unit,
            critical = summary.has_critical_validation_errors(),
            "built summary"
        );
        Ok(summary)
    }

    /// Build a summary for a run whose measurement could not start.
    ///
    /// Keeps the attempted benchmarks as given, with no reports, an empty
    /// table, a host-only runtime block and zero total time.
    pub fn failed(context: SummaryContext, benchmarks: Vec<Benchmark>) -> Self {
        let time_unit = TimeUnit::default();
        let all_runtimes = build_all_runtimes(context.host.runtime_info(), &[]);
        let results_directory = context.resolved_results_directory();

        let summary = Self {
            title: context.title,
            host: context.host,
            config: context.config,
            results_directory,
            total_time: Duration::ZERO,
            validation_errors: context.validation_errors,
            state: SummaryState::Failed,
            benchmarks,
            reports: Vec::new(),
            report_index: FxHashMap::default(),
            time_unit,
            table: SummaryTable::build(&[], time_unit),
            all_runtimes,
            jobs: OnceLock::new(),
        };

        info!(
            title = %summary.title,
            benchmarks = summary.benchmarks.len(),
            critical = summary.has_critical_validation_errors(),
            "built failed summary"
        );
        summary
    }

    /// Summary title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Host the summary was produced on
    pub fn host_environment(&self) -> &HostEnvironmentInfo {
        &self.host
    }

    /// Configuration the summary was built with
    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Directory exporters write artifacts to
    pub fn results_directory(&self) -> &Path {
        &self.results_directory
    }

    /// Wall time of the run (zero for a failed summary)
    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    /// Which construction path produced the summary
    pub fn state(&self) -> SummaryState {
        self.state
    }

    /// Benchmarks in display order
    pub fn benchmarks(&self) -> &[Benchmark] {
        &self.benchmarks
    }

    /// Reports parallel to [`Summary::benchmarks`]; empty for a failed summary
    pub fn reports(&self) -> &[BenchmarkReport] {
        &self.reports
    }

    /// Whether a report exists for the benchmark
    pub fn has_report(&self, benchmark: &Benchmark) -> bool {
        self.report_index.contains_key(benchmark)
    }

    /// Report for the benchmark, `None` if it has none
    pub fn report_for(&self, benchmark: &Benchmark) -> Option<&BenchmarkReport> {
        self.report_index
            .get(benchmark)
            .and_then(|&i| self.reports.get(i))
    }

    /// Benchmarks in display order with their report, if any
    pub fn iter(&self) -> impl Iterator<Item = (&Benchmark, Option<&BenchmarkReport>)> + '_ {
        self.benchmarks.iter().map(|b| (b, self.report_for(b)))
    }

    /// Shared display unit for all timings
    pub fn time_unit(&self) -> TimeUnit {
        self.time_unit
    }

    /// Tabular projection, built once during construction
    pub fn table(&self) -> &SummaryTable {
        &self.table
    }

    /// Aligned runtime block: the host line, then one line per job
    pub fn all_runtimes(&self) -> &str {
        &self.all_runtimes
    }

    /// Validation errors, as supplied
    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.validation_errors
    }

    /// True iff at least one validation error is critical
    pub fn has_critical_validation_errors(&self) -> bool {
        self.validation_errors.iter().any(|e| e.is_critical())
    }

    /// Job of each benchmark in display order, computed on first access
    pub fn jobs(&self) -> &[Job] {
        self.jobs
            .get_or_init(|| self.benchmarks.iter().map(|b| b.job.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{OrderProvider, SummaryView};
    use benchdeck_core::Statistics;
    use std::sync::Arc;

    fn context() -> SummaryContext {
        SummaryContext::new("Suite", HostEnvironmentInfo::new("host-rt"))
    }

    fn report(target: &str, job: &str, mean_ns: Option<f64>) -> BenchmarkReport {
        let r = BenchmarkReport::new(Benchmark::new(target, Job::named(job)))
            .with_runtime_info(format!("{}-rt", job));
        match mean_ns {
            Some(mean_ns) => r.with_statistics(Statistics {
                mean_ns,
                ..Default::default()
            }),
            None => r,
        }
    }

    #[derive(Debug)]
    struct Empty;

    impl OrderProvider for Empty {
        fn name(&self) -> &str {
            "empty"
        }

        fn summary_order(&self, _: &[Benchmark], _: &SummaryView<'_>) -> Vec<Benchmark> {
            Vec::new()
        }
    }

    #[test]
    fn test_from_reports_pairs_and_lookup() {
        let summary = Summary::from_reports(
            context(),
            vec![
                report("b", "J2", Some(2_000.0)),
                report("a", "J1", Some(1_000.0)),
            ],
        )
        .unwrap();

        assert_eq!(summary.state(), SummaryState::Finalized);
        assert_eq!(summary.benchmarks().len(), 2);
        assert_eq!(summary.reports().len(), 2);
        for (bench, report) in summary.benchmarks().iter().zip(summary.reports()) {
            assert_eq!(&report.benchmark, bench);
            assert!(summary.has_report(bench));
            assert_eq!(summary.report_for(bench), Some(report));
        }
        // Default order groups by job id
        assert_eq!(summary.benchmarks()[0].target, "a");
        assert_eq!(summary.time_unit(), TimeUnit::Microsecond);
    }

    #[test]
    fn test_unknown_benchmark_lookup() {
        let summary = Summary::from_reports(context(), vec![report("a", "J1", None)]).unwrap();
        let other = Benchmark::new("other", Job::named("J1"));
        assert!(!summary.has_report(&other));
        assert!(summary.report_for(&other).is_none());
    }

    #[test]
    fn test_bad_provider_fails_construction() {
        let config = SummaryConfig::default().with_order_provider(Arc::new(Empty));
        let result =
            Summary::from_reports(context().with_config(config), vec![report("a", "J1", None)]);
        let err = result.unwrap_err();
        assert!(matches!(err, SummaryError::OrderLengthMismatch { .. }));
    }

    #[test]
    fn test_configured_policy_is_used() {
        let config = SummaryConfig::default().with_order_policy(OrderPolicy::FastestFirst);
        let summary = Summary::from_reports(
            context().with_config(config),
            vec![
                report("slow", "J1", Some(900.0)),
                report("fast", "J2", Some(100.0)),
            ],
        )
        .unwrap();
        assert_eq!(summary.benchmarks()[0].target, "fast");
    }

    #[test]
    fn test_failed_summary() {
        let benches = vec![
            Benchmark::new("a", Job::named("J1")),
            Benchmark::new("b", Job::named("J1")),
        ];
        let summary = Summary::failed(
            context()
                .with_total_time(Duration::from_secs(3))
                .with_validation_errors(vec![ValidationError::critical("no runtime")]),
            benches.clone(),
        );

        assert_eq!(summary.state(), SummaryState::Failed);
        assert_eq!(summary.benchmarks(), benches.as_slice());
        assert!(summary.reports().is_empty());
        assert!(summary.table().is_empty());
        assert_eq!(summary.all_runtimes(), "  [Host] : host-rt");
        assert_eq!(summary.total_time(), Duration::ZERO);
        assert!(summary.has_critical_validation_errors());
        assert!(!summary.has_report(&benches[0]));

        let pairs: Vec<_> = summary.iter().collect();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|(_, r)| r.is_none()));
    }

    #[test]
    fn test_critical_flag() {
        let none = Summary::from_reports(context(), Vec::new()).unwrap();
        assert!(!none.has_critical_validation_errors());

        let advisory = Summary::from_reports(
            context().with_validation_errors(vec![ValidationError::warning("debug build")]),
            Vec::new(),
        )
        .unwrap();
        assert!(!advisory.has_critical_validation_errors());
        assert_eq!(advisory.validation_errors().len(), 1);
    }

    #[test]
    fn test_jobs_computed_once() {
        let summary = Summary::from_reports(
            context(),
            vec![report("a", "J1", None), report("b", "J2", None)],
        )
        .unwrap();

        let first = summary.jobs().as_ptr();
        let ids: Vec<_> = summary.jobs().iter().map(Job::resolved_id).collect();
        assert_eq!(ids, vec!["J1", "J2"]);
        assert_eq!(first, summary.jobs().as_ptr());
    }

    #[test]
    fn test_jobs_shared_across_threads() {
        let summary = Summary::from_reports(
            context(),
            vec![report("a", "J1", None), report("b", "J2", None)],
        )
        .unwrap();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| summary.jobs().len())).collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), 2);
            }
        });
    }

    #[test]
    fn test_context_paths() {
        let summary = Summary::from_reports(
            context()
                .with_results_directory("/tmp/out")
                .with_total_time(Duration::from_millis(1500)),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(summary.results_directory(), Path::new("/tmp/out"));
        assert_eq!(summary.total_time(), Duration::from_millis(1500));
        assert_eq!(summary.title(), "Suite");
        assert_eq!(summary.host_environment().runtime_info(), "host-rt");
        assert!(summary.config().order_provider().is_none());
    }

    #[test]
    fn test_results_directory_independent_of_builder_order() {
        let config = SummaryConfig::default();

        let path_first = context()
            .with_results_directory("/bench-out")
            .with_config(config.clone());
        let config_first = context()
            .with_config(config)
            .with_results_directory("/bench-out");

        for ctx in [path_first, config_first] {
            let summary = Summary::from_reports(ctx, Vec::new()).unwrap();
            assert_eq!(summary.results_directory(), Path::new("/bench-out"));
        }
    }

    #[test]
    fn test_results_directory_follows_config() {
        let mut config = SummaryConfig::default();
        config.summary.results_directory = "bench-out".to_string();

        let summary = Summary::failed(context().with_config(config), Vec::new());
        assert_eq!(summary.results_directory(), Path::new("bench-out"));

        let summary = Summary::failed(context(), Vec::new());
        assert_eq!(
            summary.results_directory(),
            Path::new("target/benchdeck/results")
        );
    }
}
