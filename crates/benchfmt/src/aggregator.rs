// Benchfmt - Go benchmark backend comparison formatter
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Grouping of classified records by operation and backend.

use crate::record::{Backend, MeasurementRecord};
use std::collections::BTreeMap;

/// Records of one operation, keyed by backend.
pub type BackendRecords = BTreeMap<Backend, MeasurementRecord>;

/// Classified records grouped by operation name, then backend.
///
/// Holds at most one record per (operation, backend) pair. Iteration is in
/// lexicographic operation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedResults {
    operations: BTreeMap<String, BackendRecords>,
}

impl GroupedResults {
    /// Creates an empty grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, replacing any earlier record for the same operation
    /// and backend. The replaced record is returned.
    pub fn insert(&mut self, record: MeasurementRecord) -> Option<MeasurementRecord> {
        self.operations
            .entry(record.operation().to_string())
            .or_default()
            .insert(record.backend(), record)
    }

    /// Returns the records of one operation.
    pub fn get(&self, operation: &str) -> Option<&BackendRecords> {
        self.operations.get(operation)
    }

    /// Returns the record of one operation on one backend.
    pub fn record(&self, operation: &str, backend: Backend) -> Option<&MeasurementRecord> {
        self.get(operation).and_then(|records| records.get(&backend))
    }

    /// Iterates over operations in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BackendRecords)> {
        self.operations
            .iter()
            .map(|(name, records)| (name.as_str(), records))
    }

    /// Number of distinct operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Groups records by operation name and backend.
///
/// A later record for an (operation, backend) pair silently replaces an
/// earlier one.
pub fn group_by_operation<I>(records: I) -> GroupedResults
where
    I: IntoIterator<Item = MeasurementRecord>,
{
    let mut grouped = GroupedResults::new();

    for record in records {
        let line = record.line();
        if let Some(previous) = grouped.insert(record) {
            tracing::debug!(
                operation = previous.operation(),
                backend = %previous.backend(),
                replaced_line = previous.line() + 1,
                line = line + 1,
                "duplicate measurement replaced"
            );
        }
    }

    grouped
}
