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

//! Markdown renderer.

use super::{time_or_na, Reporter, NO_RESULTS};
use crate::pipeline::ComparisonReport;
use crate::units::{format_count, format_memory};

/// Renders GitHub-flavoured Markdown tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Creates a Markdown reporter.
    pub fn new() -> Self {
        Self
    }

    fn comparison_table(&self, report: &ComparisonReport, md: &mut String) {
        md.push_str("🔬 **Performance Comparison: Decred vs Ethereum Backends**\n\n");
        md.push_str("| Operation | Decred (Pure Go) | Ethereum (libsecp256k1) | Improvement |\n");
        md.push_str("|-----------|------------------|--------------------------|-------------|\n");

        for comparison in report.comparisons() {
            md.push_str(&format!(
                "| **{}** | {} | {} | **{}** |\n",
                comparison.operation,
                time_or_na(comparison.decred.as_ref()),
                time_or_na(comparison.ethereum.as_ref()),
                comparison.judgment
            ));
        }
        md.push('\n');
    }

    fn memory_table(&self, report: &ComparisonReport, md: &mut String) {
        let complete: Vec<_> = report
            .comparisons()
            .iter()
            .filter_map(|c| match (&c.decred, &c.ethereum) {
                (Some(d), Some(e)) => Some((c.operation.as_str(), d, e)),
                _ => None,
            })
            .collect();

        if complete.is_empty() {
            return;
        }

        md.push_str("### Memory Usage Comparison\n\n");
        md.push_str(
            "| Operation | Decred Memory | Ethereum Memory | Decred Allocs | Ethereum Allocs |\n",
        );
        md.push_str(
            "|-----------|---------------|-----------------|---------------|-----------------|\n",
        );

        for (operation, decred, ethereum) in complete {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                operation,
                format_memory(decred.bytes_per_op()),
                format_memory(ethereum.bytes_per_op()),
                format_count(decred.allocs_per_op()),
                format_count(ethereum.allocs_per_op())
            ));
        }
    }

    fn summary(&self, report: &ComparisonReport, md: &mut String) {
        let summary = report.summary();
        let Some(average) = summary.average_ratio else {
            return;
        };

        md.push_str("### 🚀 **Performance Summary**\n\n");
        md.push_str("**Top Improvements (Ethereum vs Decred):**\n\n");

        for difference in &summary.top_differences {
            md.push_str(&format!(
                "- **{}**: {}\n",
                difference.operation, difference.judgment
            ));
        }
        md.push('\n');

        md.push_str(&format!(
            "**Average Performance Improvement**: {:.1}x",
            average
        ));
    }

    fn usage_tips(&self, md: &mut String) {
        md.push_str("---\n");
        md.push_str("💡 **Usage Tips:**\n");
        md.push_str("- Run `make benchmark_all | benchfmt` for full comparison\n");
        md.push_str("- Use `make benchmark_report` for quick results\n");
        md.push_str("- Both backends must be available for meaningful comparison");
    }
}

impl Reporter for MarkdownReporter {
    fn render(&self, report: &ComparisonReport) -> String {
        if report.is_empty() {
            return NO_RESULTS.to_string();
        }

        let mut md = String::new();
        self.comparison_table(report, &mut md);
        self.memory_table(report, &mut md);
        md.push('\n');

        self.summary(report, &mut md);
        md.push_str("\n\n");

        self.usage_tips(&mut md);
        md
    }
}
