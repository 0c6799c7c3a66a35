//! JSON Output

use crate::summary::{Summary, SummaryState};
use crate::table::SummaryTable;
use benchdeck_core::{Benchmark, HostEnvironmentInfo, Statistics, TimeUnit, ValidationError};
use serde::Serialize;
use std::path::Path;

/// Version of the JSON document layout
pub const SUMMARY_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct SummaryDocument<'a> {
    schema_version: u32,
    title: &'a str,
    state: SummaryState,
    time_unit: TimeUnit,
    total_time_ms: f64,
    results_directory: &'a Path,
    host: &'a HostEnvironmentInfo,
    all_runtimes: &'a str,
    has_critical_validation_errors: bool,
    validation_errors: &'a [ValidationError],
    benchmarks: Vec<BenchmarkEntry<'a>>,
    table: &'a SummaryTable,
}

#[derive(Serialize)]
struct BenchmarkEntry<'a> {
    display_info: String,
    job_id: String,
    benchmark: &'a Benchmark,
    statistics: Option<&'a Statistics>,
    runtime_info: Option<&'a str>,
}

/// Generate a prettified JSON snapshot of a summary.
///
/// Benchmarks appear in display order with their report data inline.
pub fn generate_json_summary(summary: &Summary) -> Result<String, serde_json::Error> {
    let benchmarks = summary
        .iter()
        .map(|(bench, report)| BenchmarkEntry {
            display_info: bench.display_info(),
            job_id: bench.job.resolved_id(),
            benchmark: bench,
            statistics: report.and_then(|r| r.statistics.as_ref()),
            runtime_info: report.and_then(|r| r.runtime_info()),
        })
        .collect();

    let document = SummaryDocument {
        schema_version: SUMMARY_SCHEMA_VERSION,
        title: summary.title(),
        state: summary.state(),
        time_unit: summary.time_unit(),
        total_time_ms: summary.total_time().as_secs_f64() * 1000.0,
        results_directory: summary.results_directory(),
        host: summary.host_environment(),
        all_runtimes: summary.all_runtimes(),
        has_critical_validation_errors: summary.has_critical_validation_errors(),
        validation_errors: summary.validation_errors(),
        benchmarks,
        table: summary.table(),
    };

    serde_json::to_string_pretty(&document)
}
