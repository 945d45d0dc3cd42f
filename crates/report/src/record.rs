// Copyright 2025 Perf Summary Contributors
// SPDX-License-Identifier: Apache-2.0

//! Performance report document types.
//!
//! A report document is one JSON file written by a performance test run.
//! It carries a list of summaries, one per measured run, plus any
//! run-level properties the test copied into the top level.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Name used for a summary that carries no `name` field.
pub const UNKNOWN_TEST: &str = "Unknown Test";

/// Field keys with a fixed meaning. Every other key is a dynamic parameter.
pub const RESERVED_FIELDS: [&str; 4] = ["name", "duration", "numberOfProcessors", "maxMemory"];

/// Returns true if `key` is one of the reserved summary fields.
pub fn is_reserved(key: &str) -> bool {
    RESERVED_FIELDS.contains(&key)
}

/// One parsed input file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportDocument {
    /// Measured runs, in file order. `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summaries: Vec<SummaryRecord>,
    /// Top-level keys other than `summaries`, in file order.
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SummaryRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<SummaryRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Metrics of a single measured run.
///
/// Reserved fields are kept as raw JSON values so that a record never fails
/// to load because of a missing or oddly typed metric; defaults are applied
/// by the accessors instead.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SummaryRecord {
    /// Test identifier.
    #[serde(default)]
    pub name: Option<Value>,
    /// Elapsed milliseconds.
    #[serde(default)]
    pub duration: Option<Value>,
    /// Concurrency width used during the run.
    #[serde(default, rename = "numberOfProcessors")]
    pub number_of_processors: Option<Value>,
    /// Peak memory in bytes.
    #[serde(default, rename = "maxMemory")]
    pub max_memory: Option<Value>,
    /// Every other field, in declaration order.
    #[serde(flatten)]
    pub parameters: Map<String, Value>,
}

impl SummaryRecord {
    /// Group key for this record, with `Unknown Test` substituted when absent.
    pub fn test_name(&self) -> String {
        match &self.name {
            Some(value) => display_value(value),
            None => UNKNOWN_TEST.to_string(),
        }
    }

    /// Duration in its natural textual form, `0` when absent.
    pub fn duration_text(&self) -> String {
        metric_text(self.duration.as_ref())
    }

    /// Processor count in its natural textual form, `0` when absent.
    pub fn processors_text(&self) -> String {
        metric_text(self.number_of_processors.as_ref())
    }

    /// Peak memory in bytes; zero when absent or not numeric.
    pub fn max_memory_bytes(&self) -> f64 {
        self.max_memory
            .as_ref()
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }

    /// Append run properties that the record does not already define.
    pub fn merge_properties(&mut self, properties: &Map<String, Value>) {
        for (key, value) in properties {
            if is_reserved(key) || self.parameters.contains_key(key) {
                continue;
            }
            self.parameters.insert(key.clone(), value.clone());
        }
    }
}

fn metric_text(value: Option<&Value>) -> String {
    value.map(display_value).unwrap_or_else(|| "0".to_string())
}

/// Render a JSON value the way it reads in the report: strings unquoted,
/// everything else in compact JSON form.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
