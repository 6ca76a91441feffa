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

//! End-to-end pipeline: raw lines to a [`ComparisonReport`].
//!
//! Input is buffered completely before parsing starts, because backend
//! classification may look back at earlier lines.

use crate::aggregator::{group_by_operation, GroupedResults};
use crate::classifier::classify_lines;
use crate::comparator::{compare_all, summarize, Comparison, Summary};
use crate::error::{BenchfmtError, Result};
use crate::record::Backend;
use std::io::BufRead;

/// Counters collected while building a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Input lines scanned.
    pub lines: usize,
    /// Benchmark lines parsed.
    pub records: usize,
    /// Parsed lines no backend could be assigned to.
    pub unclassified: usize,
}

/// Everything a reporter needs, computed once.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    grouped: GroupedResults,
    comparisons: Vec<Comparison>,
    summary: Summary,
    stats: PipelineStats,
}

impl ComparisonReport {
    /// Derives comparisons and the summary from grouped results.
    pub fn from_grouped(grouped: GroupedResults) -> Self {
        let comparisons = compare_all(&grouped);
        let summary = summarize(&comparisons);

        Self {
            grouped,
            comparisons,
            summary,
            stats: PipelineStats::default(),
        }
    }

    /// Every classified record, `Unknown` backend included.
    pub fn grouped(&self) -> &GroupedResults {
        &self.grouped
    }

    /// Comparison rows in lexicographic operation order.
    pub fn comparisons(&self) -> &[Comparison] {
        &self.comparisons
    }

    /// Average ratio and highlighted differences.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Line and record counters from the run that built this report.
    pub fn stats(&self) -> PipelineStats {
        self.stats
    }

    /// Whether no benchmark result was recorded at all.
    pub fn is_empty(&self) -> bool {
        self.grouped.is_empty()
    }
}

/// Reads all of `reader` into lines with trailing whitespace removed.
///
/// Invalid UTF-8 is replaced rather than rejected; such lines simply fail
/// to match the benchmark pattern.
pub fn read_lines<R: BufRead>(mut reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            break;
        }
        lines.push(String::from_utf8_lossy(&buf).trim_end().to_string());
    }

    Ok(lines)
}

/// Runs the whole pipeline over buffered input.
///
/// # Errors
///
/// - [`BenchfmtError::NoInput`] when `lines` is empty.
/// - [`BenchfmtError::NoResults`] when no line is a benchmark result.
///
/// # Examples
///
/// ```
/// use benchfmt::pipeline::build_report;
///
/// let input = [
///     "CGO_ENABLED=0 go test -bench=. -benchmem",
///     "BenchmarkComparison_ScalarMul-10  9624  120260 ns/op  136 B/op  2 allocs/op",
///     "CGO_ENABLED=1 go test -tags=ethereum_secp256k1 -bench=. -benchmem",
///     "BenchmarkComparison_ScalarMul-10  101220  35105 ns/op  136 B/op  2 allocs/op",
/// ];
///
/// let report = build_report(&input).unwrap();
/// assert_eq!(report.comparisons()[0].judgment.to_string(), "3.4x faster");
/// ```
pub fn build_report<S: AsRef<str>>(lines: &[S]) -> Result<ComparisonReport> {
    if lines.is_empty() {
        return Err(BenchfmtError::NoInput);
    }

    let records = classify_lines(lines);
    if records.is_empty() {
        tracing::info!(lines = lines.len(), "no benchmark results in input");
        return Err(BenchfmtError::NoResults { lines: lines.len() });
    }

    let unclassified = records
        .iter()
        .filter(|r| r.backend() == Backend::Unknown)
        .count();
    if unclassified > 0 {
        tracing::warn!(
            count = unclassified,
            "benchmark results without a backend marker are left out of the comparison"
        );
    }

    let stats = PipelineStats {
        lines: lines.len(),
        records: records.len(),
        unclassified,
    };

    let mut report = ComparisonReport::from_grouped(group_by_operation(records));
    report.stats = stats;

    tracing::info!(
        lines = stats.lines,
        records = stats.records,
        operations = report.grouped.len(),
        compared = report.summary.compared,
        "report built"
    );

    Ok(report)
}
