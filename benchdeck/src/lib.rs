#![warn(missing_docs)]
//! # BenchDeck
//!
//! Benchmark result aggregation for Rust benchmark harnesses.
//!
//! A measurement engine hands over one [`BenchmarkReport`] per benchmark;
//! BenchDeck turns them into an immutable [`Summary`] that exporters and
//! console printers read from:
//! - **Pluggable Ordering**: a policy named in `benchdeck.toml`, or any [`OrderProvider`]
//! - **Shared Time Unit**: one unit chosen so every mean stays readable
//! - **Validation Flags**: critical vs advisory validation errors
//! - **Runtime Block**: aligned, deduplicated environment lines, host first
//! - **Table Projection**: pre-formatted, format-agnostic columns
//!
//! ## Quick Start
//!
//! ```
//! use benchdeck::prelude::*;
//!
//! let job = Job::named("Stable");
//! let reports = vec![
//!     BenchmarkReport::new(Benchmark::new("parse", job.clone()))
//!         .with_statistics(Statistics { mean_ns: 1_200.0, ..Default::default() })
//!         .with_runtime_info("rustc 1.80.0, linux x86_64"),
//!     BenchmarkReport::new(Benchmark::new("encode", job)),
//! ];
//!
//! let context = SummaryContext::new("Codec", HostEnvironmentInfo::new("rustc 1.80.0"));
//! let summary = Summary::from_reports(context, reports).unwrap();
//!
//! assert_eq!(summary.time_unit(), TimeUnit::Microsecond);
//! assert_eq!(summary.reports().len(), 2);
//! ```

pub use benchdeck_core::{
    Benchmark, BenchmarkParameter, BenchmarkReport, DEFAULT_JOB_ID, HostEnvironmentInfo, Job,
    Severity, Statistics, TimeUnit, ValidationError, best_time_unit,
};

pub use benchdeck_summary::{
    AlphabeticalOrderProvider, CONFIG_FILE_NAME, ColumnKind, DeclaredOrderProvider,
    DefaultOrderProvider, FastestFirstOrderProvider, HOST_LABEL, LINE_ENDING, MISSING_PARAMETER,
    NOT_AVAILABLE, OrderPolicy, OrderProvider, PARAMETER_HEADER_PREFIX, SUMMARY_SCHEMA_VERSION,
    Summary, SummaryConfig, SummaryContext, SummaryError, SummarySection, SummaryState,
    SummaryTable, SummaryTableColumn, SummaryView, build_all_runtimes, generate_json_summary,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Benchmark, BenchmarkReport, HostEnvironmentInfo, Job, OrderPolicy, OrderProvider,
        Severity, Statistics, Summary, SummaryConfig, SummaryContext, SummaryView, TimeUnit,
        ValidationError,
    };
}
