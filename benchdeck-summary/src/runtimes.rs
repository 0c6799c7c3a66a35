//! Runtime Block
//!
//! Renders the execution environments a summary's benchmarks ran under, one
//! aligned line per distinct job, headed by the host:
//!
//! ```text
//!   [Host] : rustc 1.80.0, linux x86_64
//!   J1     : rustc 1.80.0, linux x86_64 (release)
//!   J2     : rustc 1.81.0-nightly, linux x86_64 (release)
//! ```

use benchdeck_core::BenchmarkReport;
use fxhash::FxHashSet;

/// Label of the host line, always rendered first
pub const HOST_LABEL: &str = "[Host]";

/// Platform line terminator
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Platform line terminator
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Build the runtime block from the host descriptor and reports in display order.
///
/// The first report seen for a job id decides that job's runtime text; later
/// reports for the same id are ignored even if their text differs. Reports
/// without a runtime descriptor contribute nothing. The host line is always
/// present, so the output has at least one line.
pub fn build_all_runtimes(host_runtime: &str, reports: &[BenchmarkReport]) -> String {
    let mut entries: Vec<(String, &str)> = vec![(HOST_LABEL.to_string(), host_runtime)];
    let mut seen: FxHashSet<String> = FxHashSet::default();
    seen.insert(HOST_LABEL.to_string());

    for report in reports {
        let Some(runtime) = report.runtime_info() else {
            continue;
        };
        let job_id = report.benchmark.job.resolved_id();
        if seen.insert(job_id.clone()) {
            entries.push((job_id, runtime));
        }
    }

    let width = entries
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|(label, runtime)| format!("  {label:<width$} : {runtime}"))
        .collect::<Vec<_>>()
        .join(LINE_ENDING)
}
