// Copyright 2025 Perf Summary Contributors
// SPDX-License-Identifier: Apache-2.0

//! Performance summary CLI entry point.

fn main() {
    if let Err(e) = perf_summary_cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
