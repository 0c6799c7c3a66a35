#![warn(missing_docs)]
//! BenchDeck Summary - Benchmark Result Aggregation
//!
//! Assembles per-benchmark reports from a measurement engine into one
//! immutable [`Summary`]:
//!
//! ```text
//! reports ──▶ collect ──▶ order ──▶ time unit ──▶ table + runtime block
//!                         (OrderProvider)
//! ```
//!
//! - Pluggable display order (`OrderProvider`, selected via `SummaryConfig`)
//! - One shared `TimeUnit` for all timings
//! - Critical/advisory validation errors
//! - Deduplicated, aligned runtime block, host first
//!
//! Statistics, validation and exporters live elsewhere; the summary only
//! stores and projects what it is given.

mod config;
mod error;
mod json;
mod order;
mod pipeline;
mod runtimes;
mod summary;
mod table;

pub use config::{CONFIG_FILE_NAME, OrderPolicy, SummaryConfig, SummarySection};
pub use error::SummaryError;
pub use json::{SUMMARY_SCHEMA_VERSION, generate_json_summary};
pub use order::{
    AlphabeticalOrderProvider, DeclaredOrderProvider, DefaultOrderProvider,
    FastestFirstOrderProvider, OrderProvider, SummaryView,
};
pub use runtimes::{HOST_LABEL, LINE_ENDING, build_all_runtimes};
pub use summary::{Summary, SummaryContext, SummaryState};
pub use table::{
    ColumnKind, MISSING_PARAMETER, NOT_AVAILABLE, PARAMETER_HEADER_PREFIX, SummaryTable,
    SummaryTableColumn,
};
