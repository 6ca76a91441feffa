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

//! Terminal renderer.
//!
//! Fixed-width columns separated by box-drawing characters. Rows are ranked
//! by ratio and tagged with a glyph for their ratio band. Colors come from
//! `colored`, which turns them off when stdout is not a terminal or
//! `NO_COLOR` is set.

use super::{time_or_na, Reporter, NO_RESULTS};
use crate::comparator::{Comparison, DifferenceKind};
use crate::pipeline::ComparisonReport;
use crate::units::{format_count, format_memory};
use colored::Colorize;

/// Minimum width of the operation column.
const MIN_OPERATION_WIDTH: usize = 22;

/// Width of the rule under the title.
const TITLE_RULE_WIDTH: usize = 65;

/// Glyph for a ratio band.
///
/// ```
/// use benchfmt::reporters::terminal::severity_glyph;
///
/// assert_eq!(severity_glyph(3.4), "🚀");
/// assert_eq!(severity_glyph(1.0), "  ");
/// ```
pub fn severity_glyph(ratio: f64) -> &'static str {
    if ratio >= 3.0 {
        "🚀"
    } else if ratio >= 2.0 {
        "⚡"
    } else if ratio >= 1.3 {
        "✨"
    } else if ratio < 0.9 {
        "⚠️ "
    } else {
        "  "
    }
}

/// Renders aligned tables for an interactive terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalReporter;

impl TerminalReporter {
    /// Creates a terminal reporter.
    pub fn new() -> Self {
        Self
    }

    /// Complete rows by descending ratio, then incomplete rows in name order.
    fn ranked<'a>(&self, report: &'a ComparisonReport) -> Vec<&'a Comparison> {
        let (mut complete, incomplete): (Vec<&Comparison>, Vec<&Comparison>) = report
            .comparisons()
            .iter()
            .partition(|c| c.is_complete());

        complete.sort_by(|a, b| b.judgment.ratio().total_cmp(&a.judgment.ratio()));
        complete.extend(incomplete);
        complete
    }

    fn performance_table(&self, rows: &[&Comparison], width: usize, out: &mut Vec<String>) {
        let header = format!(
            "{:<width$} │ {:<9} │ {:<9} │ {:<14}",
            "Operation",
            "Decred",
            "Ethereum",
            "Improvement",
            width = width
        );
        let header_rule = rule('─', header.chars().count());
        out.push(header);
        out.push(header_rule);

        for row in rows {
            let glyph = if row.is_complete() {
                severity_glyph(row.judgment.ratio())
            } else {
                "  "
            };
            let verdict = format!("{} {}", glyph, row.judgment);

            out.push(format!(
                "{:<width$} │ {:>9} │ {:>9} │ {:<14}",
                row.operation,
                time_or_na(row.decred.as_ref()),
                time_or_na(row.ethereum.as_ref()),
                verdict,
                width = width
            ));
        }
        out.push(String::new());
    }

    fn memory_table(&self, rows: &[&Comparison], width: usize, out: &mut Vec<String>) {
        let complete: Vec<_> = rows
            .iter()
            .filter_map(|c| match (&c.decred, &c.ethereum) {
                (Some(d), Some(e)) => Some((c.operation.as_str(), d, e)),
                _ => None,
            })
            .collect();

        if complete.is_empty() {
            return;
        }

        out.push("Memory Usage Comparison".bold().to_string());
        out.push(rule('─', 35));
        out.push(String::new());

        let header = format!(
            "{:<width$} │ {:<10} │ {:<10} │ {:<8}",
            "Operation",
            "Decred",
            "Ethereum",
            "Allocs",
            width = width
        );
        let header_rule = rule('─', header.chars().count());
        out.push(header);
        out.push(header_rule);

        for (operation, decred, ethereum) in complete {
            let allocs = format!(
                "{}/{}",
                format_count(decred.allocs_per_op()),
                format_count(ethereum.allocs_per_op())
            );
            out.push(format!(
                "{:<width$} │ {:>10} │ {:>10} │ {:<8}",
                operation,
                format_memory(decred.bytes_per_op()),
                format_memory(ethereum.bytes_per_op()),
                allocs,
                width = width
            ));
        }
        out.push(String::new());
    }

    fn summary(&self, report: &ComparisonReport, out: &mut Vec<String>) {
        let summary = report.summary();
        let Some(average) = summary.average_ratio else {
            return;
        };

        out.push("🚀 Performance Summary".bold().to_string());
        out.push(rule('─', 25));
        out.push(String::new());

        if !summary.top_differences.is_empty() {
            out.push("Top Improvements (Ethereum vs Decred):".to_string());
            for difference in &summary.top_differences {
                let glyph = match difference.kind {
                    DifferenceKind::Improvement if difference.ratio >= 2.0 => "🚀",
                    DifferenceKind::Improvement => "⚡",
                    DifferenceKind::Regression => "⚠️ ",
                };
                out.push(format!(
                    "  {} {}: {}",
                    glyph, difference.operation, difference.judgment
                ));
            }
            out.push(String::new());
        }

        out.push(format!("Average Performance Improvement: {:.1}x", average));
        out.push(String::new());
    }
}

impl Reporter for TerminalReporter {
    fn render(&self, report: &ComparisonReport) -> String {
        if report.is_empty() {
            return NO_RESULTS.to_string();
        }

        let rows = self.ranked(report);
        let width = rows
            .iter()
            .map(|c| c.operation.chars().count() + 2)
            .max()
            .unwrap_or(0)
            .max(MIN_OPERATION_WIDTH);

        let mut out = vec![
            String::new(),
            "🔬 Performance Comparison: Decred vs Ethereum Backends"
                .cyan()
                .bold()
                .to_string(),
            rule('=', TITLE_RULE_WIDTH).bright_black().to_string(),
            String::new(),
        ];

        self.performance_table(&rows, width, &mut out);
        self.memory_table(&rows, width, &mut out);
        self.summary(report, &mut out);

        out.iter()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn rule(ch: char, len: usize) -> String {
    std::iter::repeat(ch).take(len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::fixtures::{empty_report, sample_report};

    fn render_plain(report: &ComparisonReport) -> String {
        colored::control::set_override(false);
        TerminalReporter::new().render(report)
    }

    #[test]
    fn test_severity_glyph_bands() {
        assert_eq!(severity_glyph(3.0), "🚀");
        assert_eq!(severity_glyph(2.0), "⚡");
        assert_eq!(severity_glyph(1.3), "✨");
        assert_eq!(severity_glyph(1.29), "  ");
        assert_eq!(severity_glyph(0.9), "  ");
        assert_eq!(severity_glyph(0.5), "⚠️ ");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_plain(&empty_report()), NO_RESULTS);
    }

    #[test]
    fn test_rows_ranked_by_ratio() {
        let out = render_plain(&sample_report());

        let scalar = out.find("ScalarMul ").unwrap();
        let verify = out.find("Verify ").unwrap();
        let memory = out.find("Memory      ").unwrap();
        assert!(scalar < verify);
        assert!(verify < memory);
    }

    #[test]
    fn test_row_layout() {
        let out = render_plain(&sample_report());

        assert!(out.contains(&format!(
            "{:<22} │ {:>9} │ {:>9} │ 🚀 3.4x faster",
            "ScalarMul", "120μs", "35μs"
        )));
        assert!(out.contains("│ ⚠️  2.0x slower"));
        assert!(out.contains(&format!(
            "{:<22} │ {:>9} │ {:>9} │    N/A",
            "Memory", "1.5ms", "N/A"
        )));
    }

    #[test]
    fn test_header_rule_matches_header_width() {
        let out = render_plain(&sample_report());
        let lines: Vec<&str> = out.lines().collect();

        let idx = lines
            .iter()
            .position(|l| l.starts_with("Operation"))
            .unwrap();
        let header = format!(
            "{:<22} │ {:<9} │ {:<9} │ {:<14}",
            "Operation", "Decred", "Ethereum", "Improvement"
        );
        assert_eq!(lines[idx], header.trim_end());
        assert_eq!(lines[idx + 1].chars().count(), header.chars().count());
        assert!(lines[idx + 1].chars().all(|c| c == '─'));
    }

    #[test]
    fn test_memory_section() {
        let out = render_plain(&sample_report());

        assert!(out.contains("Memory Usage Comparison"));
        assert!(out.contains(&format!(
            "{:<22} │ {:>10} │ {:>10} │ 2/2",
            "ScalarMul", "136B", "136B"
        )));
    }

    #[test]
    fn test_summary() {
        let out = render_plain(&sample_report());

        assert!(out.contains("🚀 Performance Summary"));
        assert!(out.contains("  🚀 ScalarMul: 3.4x faster"));
        assert!(out.contains("  ⚠️  Verify: 2.0x slower"));
        assert!(out.contains("Average Performance Improvement: 2.0x"));
    }

    #[test]
    fn test_long_operation_names_widen_column() {
        use crate::aggregator::group_by_operation;
        use crate::record::{record, Backend};

        let name = "DLEQProofVerificationWithBatching";
        let report = ComparisonReport::from_grouped(group_by_operation(vec![
            record(name, Backend::Decred, 2_000.0),
            record(name, Backend::Ethereum, 1_000.0),
        ]));
        let out = render_plain(&report);

        let width = name.len() + 2;
        assert!(out.contains(&format!("{:<width$} │", name, width = width)));
        assert!(out.contains("⚡ 2.0x faster"));
    }

    #[test]
    fn test_no_trailing_whitespace() {
        let out = render_plain(&sample_report());
        assert!(out.lines().all(|l| l == l.trim_end()));
    }
}
