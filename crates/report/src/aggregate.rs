// Copyright 2025 Perf Summary Contributors
// SPDX-License-Identifier: Apache-2.0

//! Grouping of summary records by test name.

use crate::record::SummaryRecord;
use std::collections::HashMap;

/// Summary records grouped by test name.
///
/// Records keep the order they were added in within each group. The map
/// itself is unordered; callers that present groups sort the names.
#[derive(Debug, Clone, Default)]
pub struct GroupedResults {
    groups: HashMap<String, Vec<SummaryRecord>>,
}

impl GroupedResults {
    /// Create an empty set of groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Group records in the order given.
    pub fn from_records(records: impl IntoIterator<Item = SummaryRecord>) -> Self {
        let mut grouped = Self::new();
        for record in records {
            grouped.push(record);
        }
        grouped
    }

    /// Add a record to the group named by its test name.
    pub fn push(&mut self, record: SummaryRecord) {
        self.groups
            .entry(record.test_name())
            .or_default()
            .push(record);
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no records have been added.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total records across all groups.
    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Records for a test name, in insertion order.
    pub fn get(&self, name: &str) -> Option<&[SummaryRecord]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Groups in ascending test-name order.
    pub fn sorted(&self) -> Vec<(&str, &[SummaryRecord])> {
        let mut groups: Vec<(&str, &[SummaryRecord])> = self
            .groups
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
            .collect();
        groups.sort_by(|a, b| a.0.cmp(b.0));
        groups
    }
}

impl FromIterator<SummaryRecord> for GroupedResults {
    fn from_iter<I: IntoIterator<Item = SummaryRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}
