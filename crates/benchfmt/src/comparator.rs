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

//! Backend comparison.
//!
//! The ratio is always Decred time over Ethereum time, so a ratio above 1
//! means the Ethereum (libsecp256k1) backend is faster.

use crate::aggregator::GroupedResults;
use crate::record::{Backend, MeasurementRecord};
use std::fmt;

/// Ratio at or above which a difference is reported as an improvement.
pub const IMPROVEMENT_THRESHOLD: f64 = 1.1;

/// Ratio at or below which a difference is reported as a regression.
pub const REGRESSION_THRESHOLD: f64 = 0.9;

/// Maximum number of entries in [`Summary::top_differences`].
pub const TOP_DIFFERENCES: usize = 5;

/// Verdict of one Decred/Ethereum comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Judgment {
    /// Ethereum is faster; holds the ratio (> 1).
    Faster(f64),
    /// Ethereum is as fast or slower; holds the ratio (<= 1).
    Slower(f64),
    /// One side is missing or measured zero.
    NotApplicable,
}

impl Judgment {
    /// Decred/Ethereum ratio, or `1.0` when not applicable.
    pub fn ratio(&self) -> f64 {
        match self {
            Judgment::Faster(ratio) | Judgment::Slower(ratio) => *ratio,
            Judgment::NotApplicable => 1.0,
        }
    }

    pub fn is_applicable(&self) -> bool {
        !matches!(self, Judgment::NotApplicable)
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Judgment::Faster(ratio) => write!(f, "{:.1}x faster", ratio),
            Judgment::Slower(ratio) => write!(f, "{:.1}x slower", 1.0 / ratio),
            Judgment::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// Compares a Decred time-per-op against an Ethereum time-per-op.
///
/// # Examples
///
/// ```
/// use benchfmt::comparator::{compare, Judgment};
///
/// assert_eq!(compare(200.0, 100.0), Judgment::Faster(2.0));
/// assert_eq!(compare(200.0, 100.0).to_string(), "2.0x faster");
/// assert_eq!(compare(100.0, 200.0).to_string(), "2.0x slower");
/// assert_eq!(compare(0.0, 100.0).to_string(), "N/A");
/// ```
pub fn compare(decred_ns: f64, ethereum_ns: f64) -> Judgment {
    if decred_ns == 0.0 || ethereum_ns == 0.0 {
        return Judgment::NotApplicable;
    }

    let ratio = decred_ns / ethereum_ns;
    if ethereum_ns < decred_ns {
        Judgment::Faster(ratio)
    } else {
        Judgment::Slower(ratio)
    }
}

/// One operation's comparison row.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Operation name.
    pub operation: String,
    /// Pure Go measurement, if one was recorded.
    pub decred: Option<MeasurementRecord>,
    /// libsecp256k1 measurement, if one was recorded.
    pub ethereum: Option<MeasurementRecord>,
    /// Verdict, `NotApplicable` unless both sides are present.
    pub judgment: Judgment,
}

impl Comparison {
    /// Whether both backends were measured.
    pub fn is_complete(&self) -> bool {
        self.decred.is_some() && self.ethereum.is_some()
    }

    /// Ratio used for ranking and averaging, if this row has one.
    pub fn ratio(&self) -> Option<f64> {
        if self.is_complete() && self.judgment.is_applicable() {
            Some(self.judgment.ratio())
        } else {
            None
        }
    }
}

/// Builds one comparison row per operation, in lexicographic order.
///
/// Operations that only have `Unknown` records are left out.
pub fn compare_all(grouped: &GroupedResults) -> Vec<Comparison> {
    grouped
        .iter()
        .filter_map(|(operation, records)| {
            let decred = records.get(&Backend::Decred).cloned();
            let ethereum = records.get(&Backend::Ethereum).cloned();

            let judgment = match (&decred, &ethereum) {
                (Some(d), Some(e)) => compare(d.ns_per_op(), e.ns_per_op()),
                (None, None) => return None,
                _ => Judgment::NotApplicable,
            };

            Some(Comparison {
                operation: operation.to_string(),
                decred,
                ethereum,
                judgment,
            })
        })
        .collect()
}

/// Direction of a highlighted difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifferenceKind {
    /// Ratio at or above [`IMPROVEMENT_THRESHOLD`].
    Improvement,
    /// Ratio at or below [`REGRESSION_THRESHOLD`].
    Regression,
}

/// A difference large enough to highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    /// Operation name.
    pub operation: String,
    /// Decred time over Ethereum time.
    pub ratio: f64,
    /// Verdict rendered next to the name.
    pub judgment: Judgment,
    /// Which threshold the ratio crossed.
    pub kind: DifferenceKind,
}

/// Summary statistics over all complete comparisons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Highlighted differences, highest ratio first.
    pub top_differences: Vec<Difference>,
    /// Mean ratio over every complete comparison.
    pub average_ratio: Option<f64>,
    /// Number of comparisons the average covers.
    pub compared: usize,
}

/// Computes the average ratio and the top differences.
///
/// The [`TOP_DIFFERENCES`] highest ratios are taken first and then filtered
/// by [`IMPROVEMENT_THRESHOLD`] and [`REGRESSION_THRESHOLD`], so fewer
/// entries than the limit may be highlighted. Ties keep the input order.
pub fn summarize(comparisons: &[Comparison]) -> Summary {
    let mut ranked: Vec<(&Comparison, f64)> = comparisons
        .iter()
        .filter_map(|c| c.ratio().map(|ratio| (c, ratio)))
        .collect();

    if ranked.is_empty() {
        return Summary::default();
    }

    let average_ratio = ranked.iter().map(|(_, ratio)| ratio).sum::<f64>() / ranked.len() as f64;

    // Stable sort, so equal ratios stay in operation order.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let top_differences = ranked
        .iter()
        .take(TOP_DIFFERENCES)
        .filter_map(|(c, ratio)| {
            let kind = if *ratio >= IMPROVEMENT_THRESHOLD {
                DifferenceKind::Improvement
            } else if *ratio <= REGRESSION_THRESHOLD {
                DifferenceKind::Regression
            } else {
                return None;
            };

            Some(Difference {
                operation: c.operation.clone(),
                ratio: *ratio,
                judgment: c.judgment,
                kind,
            })
        })
        .collect();

    Summary {
        top_differences,
        average_ratio: Some(average_ratio),
        compared: ranked.len(),
    }
}
