// Copyright 2025 Perf Summary Contributors
// SPDX-License-Identifier: Apache-2.0

//! Markdown rendering of grouped performance results.
//!
//! Each test name gets its own section with one table row per measured run.

use crate::aggregate::GroupedResults;
use crate::record::{display_value, SummaryRecord};
use std::fmt::Write;

/// Report heading.
pub const HEADER: &str = "## Performance Test Results";

/// Complete document emitted when there is nothing to report.
pub const NO_RESULTS: &str = "## Performance Test Results\n\nNo performance test results found.";

const TABLE_HEADER: &str = "| Duration (ms) | Max Memory (GB) | Processors | Parameters |";
const TABLE_DIVIDER: &str = "|---------------|-----------------|------------|------------|";

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Render grouped results as a markdown document.
pub fn render(grouped: &GroupedResults) -> String {
    if grouped.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut output = String::new();

    writeln!(output, "{}", HEADER).unwrap();
    writeln!(output).unwrap();

    for (name, records) in grouped.sorted() {
        writeln!(output, "### {}", name).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "{}", TABLE_HEADER).unwrap();
        writeln!(output, "{}", TABLE_DIVIDER).unwrap();

        for record in records {
            writeln!(
                output,
                "| {} | {} | {} | {} |",
                record.duration_text(),
                format_memory_gib(record.max_memory_bytes()),
                record.processors_text(),
                format_parameters(record)
            )
            .unwrap();
        }

        writeln!(output).unwrap();
    }

    output
}

/// Bytes to GiB with two decimals. Non-positive input renders as `0.00`.
pub fn format_memory_gib(bytes: f64) -> String {
    if bytes <= 0.0 || !bytes.is_finite() {
        return "0.00".to_string();
    }
    format!("{:.2}", bytes / BYTES_PER_GIB)
}

/// `key=value` pairs for every dynamic parameter, or `-` when there are none.
pub fn format_parameters(record: &SummaryRecord) -> String {
    if record.parameters.is_empty() {
        return "-".to_string();
    }

    record
        .parameters
        .iter()
        .map(|(key, value)| escape_cell(&format!("{}={}", key, display_value(value))))
        .collect::<Vec<_>>()
        .join(", ")
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
