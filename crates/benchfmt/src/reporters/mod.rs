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

//! Report renderers.
//!
//! Both renderers read the same [`ComparisonReport`] and never look at the
//! raw input again.
//!
//! # Modules
//!
//! - `markdown`: Markdown tables for pull requests and CI summaries
//! - `terminal`: aligned, styled columns for an interactive terminal

pub mod markdown;
pub mod terminal;

pub use markdown::MarkdownReporter;
pub use terminal::TerminalReporter;

use crate::pipeline::ComparisonReport;
use crate::record::MeasurementRecord;
use crate::units::format_time;

/// Text rendered when there is nothing to compare.
pub const NO_RESULTS: &str = "❌ No benchmark results found to compare.";

/// Placeholder for a missing measurement or verdict.
pub const NOT_AVAILABLE: &str = "N/A";

/// Renders a comparison report as text.
pub trait Reporter {
    /// Full report text, ready to print.
    fn render(&self, report: &ComparisonReport) -> String;
}

fn time_or_na(record: Option<&MeasurementRecord>) -> String {
    record
        .map(|r| format_time(r.ns_per_op()))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::aggregator::group_by_operation;
    use crate::pipeline::ComparisonReport;
    use crate::record::{record, Backend};

    /// Two complete operations, one Decred-only operation.
    pub fn sample_report() -> ComparisonReport {
        ComparisonReport::from_grouped(group_by_operation(vec![
            record("ScalarMul", Backend::Decred, 120_260.0),
            record("ScalarMul", Backend::Ethereum, 35_105.0),
            record("Verify", Backend::Decred, 100_000.0),
            record("Verify", Backend::Ethereum, 200_000.0),
            record("Memory", Backend::Decred, 1_500_000.0),
        ]))
    }

    pub fn empty_report() -> ComparisonReport {
        ComparisonReport::from_grouped(group_by_operation(Vec::new()))
    }
}
