// Copyright 2025 Perf Summary Contributors
// SPDX-License-Identifier: Apache-2.0

//! I/O operations for performance reports.
//!
//! This module resolves the caller's input arguments into report files,
//! loads them one at a time, and writes the rendered summary back out.

use crate::error::{LoadError, Result};
use crate::record::{ReportDocument, SummaryRecord};
use crate::SummaryOptions;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const GLOB_OPTIONS: glob::MatchOptions = glob::MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

/// Records loaded from a batch of report files, plus the files that failed.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Summaries across all loaded files, in load order.
    pub records: Vec<SummaryRecord>,
    /// One entry per file that could not be loaded.
    pub failures: Vec<LoadError>,
}

/// Expand input arguments into existing regular files.
///
/// Arguments containing `*` are glob patterns (`**` recurses); anything else
/// is a literal path. Paths that do not exist or are not regular files are
/// dropped silently. A file reached more than once is loaded each time.
/// As with shell globbing, `*` and `**` do not match hidden entries.
pub fn resolve_inputs<S: AsRef<str>>(args: &[S]) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        if !arg.contains('*') {
            candidates.push(PathBuf::from(arg));
            continue;
        }

        match glob::glob_with(arg, GLOB_OPTIONS) {
            Ok(paths) => {
                for entry in paths {
                    match entry {
                        Ok(path) => candidates.push(path),
                        Err(e) => debug!(error = %e, "Skipping unreadable glob entry"),
                    }
                }
            }
            Err(e) => warn!(pattern = arg, error = %e, "Invalid glob pattern"),
        }
    }

    candidates
        .into_iter()
        .filter(|path| path.is_file())
        .inspect(|path| debug!(path = %path.display(), "Resolved report file"))
        .collect()
}

/// Read and parse a single report document.
pub fn load_report(path: impl AsRef<Path>) -> Result<ReportDocument> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|e| LoadError::from_io(path, e))?;
    serde_json::from_slice(&content).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every path in order, collecting records and per-file failures.
///
/// A failure on one file is logged and recorded; loading continues with the
/// next path.
pub fn load_reports<P: AsRef<Path>>(paths: &[P], options: &SummaryOptions) -> LoadOutcome {
    let mut outcome = LoadOutcome::default();

    for path in paths {
        let path = path.as_ref();
        match load_report(path) {
            Ok(document) => {
                debug!(
                    path = %path.display(),
                    summaries = document.summaries.len(),
                    "Loaded report"
                );
                let ReportDocument {
                    summaries,
                    properties,
                } = document;
                for mut record in summaries {
                    if options.include_run_properties {
                        record.merge_properties(&properties);
                    }
                    outcome.records.push(record);
                }
            }
            Err(e) => {
                warn!(path = %e.path().display(), error = %e, "Skipping report");
                outcome.failures.push(e);
            }
        }
    }

    outcome
}

/// Write the rendered summary, creating parent directories as needed.
pub fn write_summary(path: impl AsRef<Path>, markdown: &str) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, markdown)
}
