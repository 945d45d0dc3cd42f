// Copyright 2025 Perf Summary Contributors
// SPDX-License-Identifier: Apache-2.0

//! Performance test summary aggregation.
//!
//! This crate merges the JSON result files written by performance tests and
//! renders them as a single markdown report, one section per test name.
//!
//! # Quick Start
//!
//! ```no_run
//! use perf_summary_report::{io, summarize, SummaryOptions};
//!
//! let files = io::resolve_inputs(&["target/**/performance_test_result.json"]);
//! let summary = summarize(&files, &SummaryOptions::default());
//!
//! for failure in &summary.failures {
//!     eprintln!("{}", failure);
//! }
//! println!("{}", summary.markdown);
//! ```
//!
//! # Modules
//!
//! - [`record`] - Report documents and summary records
//! - [`io`] - Input resolution, loading and writing
//! - [`aggregate`] - Grouping by test name
//! - [`markdown`] - Markdown rendering
//! - [`error`] - Load errors

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod aggregate;
pub mod error;
pub mod io;
pub mod markdown;
pub mod record;

pub use aggregate::GroupedResults;
pub use error::LoadError;
pub use record::{ReportDocument, SummaryRecord};

use std::path::Path;
use tracing::info;

/// Options that extend the base report.
#[derive(Debug, Clone, Default)]
pub struct SummaryOptions {
    /// Append each document's top-level run properties to the parameters of
    /// its records.
    pub include_run_properties: bool,
}

/// Rendered report plus the inputs that could not be loaded.
#[derive(Debug)]
pub struct Summary {
    /// Markdown document.
    pub markdown: String,
    /// Number of test sections rendered.
    pub groups: usize,
    /// Number of table rows rendered.
    pub records: usize,
    /// Files skipped because they were missing or malformed.
    pub failures: Vec<LoadError>,
}

/// Load, group and render the given report files.
///
/// An empty path list yields the "no results" document without touching
/// the filesystem.
pub fn summarize<P: AsRef<Path>>(paths: &[P], options: &SummaryOptions) -> Summary {
    if paths.is_empty() {
        info!("No report files found");
        return Summary {
            markdown: markdown::NO_RESULTS.to_string(),
            groups: 0,
            records: 0,
            failures: Vec::new(),
        };
    }

    let outcome = io::load_reports(paths, options);
    let grouped = GroupedResults::from_records(outcome.records);
    let markdown = markdown::render(&grouped);

    info!(
        files = paths.len(),
        failed = outcome.failures.len(),
        groups = grouped.len(),
        records = grouped.record_count(),
        "Rendered performance summary"
    );

    Summary {
        markdown,
        groups: grouped.len(),
        records: grouped.record_count(),
        failures: outcome.failures,
    }
}
