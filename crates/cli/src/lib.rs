// Copyright 2025 Perf Summary Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI for rendering performance test summaries.
//!
//! Takes report files or glob patterns, prints the merged markdown report
//! on stdout and logs skipped inputs on stderr.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::{Parser, ValueEnum};
use perf_summary_report::{io as report_io, summarize, Summary, SummaryOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Performance summary CLI.
#[derive(Parser, Debug)]
#[command(name = "perf-summary")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Report files or glob patterns (`*`, `**` recurses).
    #[arg(required = true, value_name = "INPUTS")]
    pub inputs: Vec<String>,

    /// Also write the report to this file.
    #[arg(short, long, env = "PERF_SUMMARY_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Do not print the report on stdout.
    #[arg(short, long, requires = "output")]
    pub quiet: bool,

    /// Add each file's top-level run properties to its rows' parameters.
    #[arg(long)]
    pub run_properties: bool,

    /// Log filter directive, e.g. `warn` or `perf_summary_report=debug`.
    #[arg(long, env = "PERF_SUMMARY_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log line format.
    #[arg(long, env = "PERF_SUMMARY_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Log output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

impl Cli {
    fn options(&self) -> SummaryOptions {
        SummaryOptions {
            include_run_properties: self.run_properties,
        }
    }
}

/// Install the stderr log subscriber.
pub fn init_tracing(directive: &str, format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log filter `{}`", directive))?;

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}

/// Resolve the inputs, build the report and deliver it.
///
/// The report goes to `out` unless `--quiet` is set, and to the `--output`
/// file when one is given.
pub fn execute(cli: &Cli, out: &mut impl Write) -> anyhow::Result<Summary> {
    let files = report_io::resolve_inputs(&cli.inputs);
    debug!(
        inputs = cli.inputs.len(),
        files = files.len(),
        "Resolved report inputs"
    );
    let summary = summarize(&files, &cli.options());

    if let Some(path) = &cli.output {
        report_io::write_summary(path, &summary.markdown)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
    }

    if !cli.quiet {
        writeln!(out, "{}", summary.markdown).context("failed to write report to stdout")?;
        out.flush().context("failed to write report to stdout")?;
    }

    Ok(summary)
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, including when no results were found.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_format)?;

    let stdout = std::io::stdout();
    execute(&cli, &mut stdout.lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use perf_summary_report::markdown::NO_RESULTS;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("perf-summary").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_requires_inputs() {
        let err = Cli::try_parse_from(["perf-summary"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_quiet_requires_output() {
        assert!(Cli::try_parse_from(["perf-summary", "--quiet", "a.json"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["a.json", "reports/*.json"]);
        assert_eq!(cli.inputs, ["a.json", "reports/*.json"]);
        assert!(cli.output.is_none());
        assert!(!cli.run_properties);
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn test_execute_without_files_prints_fallback() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("none.json");
        let cli = parse(&[missing.to_str().unwrap()]);

        let mut out = Vec::new();
        let summary = execute(&cli, &mut out).unwrap();

        assert_eq!(summary.groups, 0);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", NO_RESULTS));
    }

    #[test]
    fn test_execute_writes_output_file_quietly() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("result.json");
        fs::write(
            &input,
            r#"{"summaries": [{"name": "Naive performance test", "duration": 1500}]}"#,
        )
        .unwrap();
        let output = dir.path().join("docs").join("perf.md");
        let cli = parse(&[
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--quiet",
        ]);

        let mut out = Vec::new();
        execute(&cli, &mut out).unwrap();

        assert!(out.is_empty());
        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("### Naive performance test"));
        assert!(written.contains("| 1500 | 0.00 | 0 | - |"));
    }

    #[test]
    fn test_execute_with_run_properties() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("result.json");
        fs::write(
            &input,
            r#"{"cluster": "kind", "summaries": [{"name": "T", "duration": 1}]}"#,
        )
        .unwrap();
        let cli = parse(&[input.to_str().unwrap(), "--run-properties"]);

        let mut out = Vec::new();
        execute(&cli, &mut out).unwrap();

        assert!(String::from_utf8(out)
            .unwrap()
            .contains("| 1 | 0.00 | 0 | cluster=kind |"));
    }
}
