//! Summary Table
//!
//! Format-agnostic tabular projection of a finalized summary. Cells are
//! already formatted in the summary's time unit and each column knows its
//! display width, so text, Markdown or HTML exporters only lay it out.

use benchdeck_core::{BenchmarkReport, Statistics, TimeUnit};
use serde::Serialize;

/// Cell text for a metric of a run without statistics
pub const NOT_AVAILABLE: &str = "NA";

/// Cell text for a parameter a benchmark case does not define
pub const MISSING_PARAMETER: &str = "-";

/// Prefix for a parameter column whose name is already a header
pub const PARAMETER_HEADER_PREFIX: &str = "param:";

/// Headers of the identity and metric columns
const FIXED_HEADERS: [&str; 6] = ["Benchmark", "Job", "Mean", "StdDev", "Median", "Samples"];

/// What a column describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Benchmark or job identity
    Identity,
    /// A benchmark parameter
    Parameter,
    /// A measured value
    Metric,
}

/// One column of the table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTableColumn {
    /// Header text, unique within the table
    pub header: String,
    /// What the column describes
    pub kind: ColumnKind,
    /// One formatted cell per row
    pub cells: Vec<String>,
    /// Display width in chars (header and cells)
    pub width: usize,
    /// All cells identical; exporters may hoist the value out of the table
    pub is_common: bool,
}

impl SummaryTableColumn {
    fn new(header: impl Into<String>, kind: ColumnKind, cells: Vec<String>) -> Self {
        let header = header.into();
        let width = cells
            .iter()
            .map(|c| c.chars().count())
            .chain(std::iter::once(header.chars().count()))
            .max()
            .unwrap_or(0);
        let is_common = cells
            .first()
            .is_some_and(|first| cells.iter().all(|c| c == first));

        Self {
            header,
            kind,
            cells,
            width,
            is_common,
        }
    }
}

/// Tabular projection of a summary, one row per reported benchmark
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    time_unit: TimeUnit,
    row_count: usize,
    columns: Vec<SummaryTableColumn>,
}

impl SummaryTable {
    /// Build the table from reports in display order
    pub fn build(reports: &[BenchmarkReport], time_unit: TimeUnit) -> Self {
        let mut columns = Vec::new();

        columns.push(SummaryTableColumn::new(
            "Benchmark",
            ColumnKind::Identity,
            reports.iter().map(|r| r.benchmark.target.clone()).collect(),
        ));

        // Parameter columns in first-seen order
        let mut headers: Vec<String> = FIXED_HEADERS.iter().map(|h| h.to_string()).collect();
        let mut parameter_names: Vec<&str> = Vec::new();
        for report in reports {
            for param in &report.benchmark.parameters {
                if !parameter_names.contains(&param.name.as_str()) {
                    parameter_names.push(&param.name);
                }
            }
        }
        for name in parameter_names {
            let cells = reports
                .iter()
                .map(|r| {
                    r.benchmark
                        .parameter(name)
                        .unwrap_or(MISSING_PARAMETER)
                        .to_string()
                })
                .collect();
            let header = unique_header(name, &headers);
            headers.push(header.clone());
            let column = SummaryTableColumn::new(header, ColumnKind::Parameter, cells);
            columns.push(column);
        }

        columns.push(SummaryTableColumn::new(
            "Job",
            ColumnKind::Identity,
            reports
                .iter()
                .map(|r| r.benchmark.job.resolved_id())
                .collect(),
        ));

        let metric = |header: &str, value: fn(&Statistics) -> f64| {
            let cells = reports
                .iter()
                .map(|r| match &r.statistics {
                    Some(stats) => time_unit.format(value(stats)),
                    None => NOT_AVAILABLE.to_string(),
                })
                .collect();
            SummaryTableColumn::new(header, ColumnKind::Metric, cells)
        };
        columns.push(metric("Mean", |s| s.mean_ns));
        columns.push(metric("StdDev", |s| s.std_dev_ns));
        columns.push(metric("Median", |s| s.median_ns));

        columns.push(SummaryTableColumn::new(
            "Samples",
            ColumnKind::Metric,
            reports
                .iter()
                .map(|r| match &r.statistics {
                    Some(stats) => stats.sample_count.to_string(),
                    None => NOT_AVAILABLE.to_string(),
                })
                .collect(),
        ));

        Self {
            time_unit,
            row_count: reports.len(),
            columns,
        }
    }

    /// Unit all time cells are formatted in
    pub fn time_unit(&self) -> TimeUnit {
        self.time_unit
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// All columns, left to right
    pub fn columns(&self) -> &[SummaryTableColumn] {
        &self.columns
    }

    /// Column headers, left to right
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    /// Column by header.
    ///
    /// A parameter named like another column is found under its prefixed
    /// header, e.g. `param:Mean`.
    pub fn column(&self, header: &str) -> Option<&SummaryTableColumn> {
        self.columns.iter().find(|c| c.header == header)
    }

    /// Cells of one row, left to right
    pub fn row(&self, index: usize) -> Option<Vec<&str>> {
        if index >= self.row_count {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| c.cells[index].as_str())
                .collect(),
        )
    }
}

/// `name`, prefixed until it no longer collides with a taken header
fn unique_header(name: &str, taken: &[String]) -> String {
    let mut header = name.to_string();
    while taken.contains(&header) {
        header.insert_str(0, PARAMETER_HEADER_PREFIX);
    }
    header
}
