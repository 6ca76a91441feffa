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

//! Backend classification.
//!
//! Go benchmark output does not say which backend produced a line, so the
//! backend is inferred from marker text around it: the `make` target
//! banners, `CGO_ENABLED=...` echoes and build tags.
//!
//! Two mechanisms are combined by [`classify_lines`]:
//!
//! - [`BackendContext`] tracks the most recent marker while scanning forward.
//! - [`scan_backward`] looks at a bounded window of preceding lines.
//!
//! The context is consulted first. Because it has already seen every line the
//! window could contain, the backward scan only answers when the context is
//! still `Unknown`, and then it finds nothing either. It is kept as a
//! fallback so that classification never depends on call order.

use crate::parser::parse_line;
use crate::record::{Backend, MeasurementRecord};

/// Number of preceding lines examined by [`scan_backward`].
pub const BACKWARD_WINDOW: usize = 10;

/// Marker substrings in precedence order, lowercase.
///
/// When a line carries several markers, the first entry found in this table
/// decides.
const MARKERS: &[(&str, Backend)] = &[
    ("decred", Backend::Decred),
    ("pure go", Backend::Decred),
    ("ethereum", Backend::Ethereum),
    ("libsecp256k1", Backend::Ethereum),
    ("cgo_enabled=0", Backend::Decred),
    ("cgo_enabled=1", Backend::Ethereum),
    ("tags=ethereum_secp256k1", Backend::Ethereum),
];

/// Returns the backend named by a marker in `line`, ignoring case.
///
/// # Examples
///
/// ```
/// use benchfmt::classifier::detect_marker;
/// use benchfmt::Backend;
///
/// assert_eq!(detect_marker("Running CGO_ENABLED=0 go test"), Some(Backend::Decred));
/// assert_eq!(detect_marker("=== libsecp256k1 ==="), Some(Backend::Ethereum));
/// assert_eq!(detect_marker("PASS"), None);
/// ```
pub fn detect_marker(line: &str) -> Option<Backend> {
    let lower = line.to_lowercase();
    MARKERS
        .iter()
        .find(|(marker, _)| lower.contains(marker))
        .map(|(_, backend)| *backend)
}

/// Running backend state for a forward scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendContext {
    current: Backend,
}

impl Default for BackendContext {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendContext {
    /// Creates a context in the `Unknown` state.
    pub fn new() -> Self {
        Self {
            current: Backend::Unknown,
        }
    }

    /// Feeds one line. A marker overwrites the current backend; other lines
    /// leave it unchanged.
    pub fn observe(&mut self, line: &str) {
        if let Some(backend) = detect_marker(line) {
            if backend != self.current {
                tracing::debug!(from = %self.current, to = %backend, "backend context switch");
            }
            self.current = backend;
        }
    }

    pub fn current(&self) -> Backend {
        self.current
    }
}

/// Looks for a marker in the [`BACKWARD_WINDOW`] lines before `index`.
///
/// The window is clipped at the start of input and excludes `lines[index]`.
/// It is walked in forward order and the first marker found wins, so the
/// oldest marker in the window decides.
pub fn scan_backward<S: AsRef<str>>(lines: &[S], index: usize) -> Backend {
    let end = index.min(lines.len());
    let start = end.saturating_sub(BACKWARD_WINDOW);

    lines[start..end]
        .iter()
        .find_map(|line| detect_marker(line.as_ref()))
        .unwrap_or(Backend::Unknown)
}

/// Parses and classifies every benchmark line in `lines`.
///
/// Records come back in input order.
pub fn classify_lines<S: AsRef<str>>(lines: &[S]) -> Vec<MeasurementRecord> {
    let mut context = BackendContext::new();
    let mut records = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        context.observe(line);

        let Some(parsed) = parse_line(line) else {
            continue;
        };

        let backend = match context.current() {
            Backend::Unknown => scan_backward(lines, index),
            known => known,
        };

        tracing::debug!(
            operation = %parsed.operation,
            backend = %backend,
            line = index + 1,
            "parsed benchmark result"
        );
        records.push(MeasurementRecord::new(parsed, backend, index));
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECRED_LINE: &str =
        "BenchmarkComparison_ScalarMul-10    9624    120260 ns/op    136 B/op    2 allocs/op";
    const ETHEREUM_LINE: &str =
        "BenchmarkComparison_ScalarMul-10    101220    35105 ns/op    136 B/op    2 allocs/op";

    #[test]
    fn test_detect_marker_is_case_insensitive() {
        assert_eq!(detect_marker("Testing DECRED backend"), Some(Backend::Decred));
        assert_eq!(detect_marker("(Pure Go)"), Some(Backend::Decred));
        assert_eq!(detect_marker("CGO_ENABLED=1 go test"), Some(Backend::Ethereum));
        assert_eq!(
            detect_marker("go test -TAGS=ETHEREUM_SECP256K1"),
            Some(Backend::Ethereum)
        );
        assert_eq!(detect_marker("goos: linux"), None);
    }

    #[test]
    fn test_detect_marker_precedence() {
        assert_eq!(detect_marker("decred vs ethereum"), Some(Backend::Decred));
        assert_eq!(
            detect_marker("ethereum build, CGO_ENABLED=0 fallback"),
            Some(Backend::Ethereum)
        );
    }

    #[test]
    fn test_context_persists_until_overwritten() {
        let mut ctx = BackendContext::new();
        assert_eq!(ctx.current(), Backend::Unknown);

        ctx.observe("CGO_ENABLED=0 go test -bench=.");
        assert_eq!(ctx.current(), Backend::Decred);

        ctx.observe("goos: linux");
        ctx.observe(DECRED_LINE);
        assert_eq!(ctx.current(), Backend::Decred);

        ctx.observe("Testing Ethereum backend (libsecp256k1)");
        assert_eq!(ctx.current(), Backend::Ethereum);
    }

    #[test]
    fn test_scan_backward_window() {
        let mut lines = vec!["Pure Go backend".to_string()];
        lines.extend((0..10).map(|i| format!("filler {}", i)));
        lines.push(DECRED_LINE.to_string());

        // Marker is 11 lines above the benchmark: out of range.
        assert_eq!(scan_backward(&lines, 11), Backend::Unknown);
        // Exactly 10 lines above: in range.
        assert_eq!(scan_backward(&lines, 10), Backend::Decred);
    }

    #[test]
    fn test_scan_backward_excludes_current_line() {
        let lines = ["decred line itself"];
        assert_eq!(scan_backward(&lines, 0), Backend::Unknown);
    }

    #[test]
    fn test_scan_backward_oldest_marker_wins() {
        let lines = ["decred", "ethereum", DECRED_LINE];
        assert_eq!(scan_backward(&lines, 2), Backend::Decred);
    }

    #[test]
    fn test_scan_backward_clips_out_of_range_index() {
        let lines = ["ethereum"];
        assert_eq!(scan_backward(&lines, 5), Backend::Ethereum);
    }

    #[test]
    fn test_classify_lines_follows_context() {
        let lines = [
            "CGO_ENABLED=0 go test -bench=BenchmarkComparison -benchmem",
            DECRED_LINE,
            "CGO_ENABLED=1 go test -tags=ethereum_secp256k1 -bench=BenchmarkComparison -benchmem",
            ETHEREUM_LINE,
        ];

        let records = classify_lines(&lines);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].backend(), Backend::Decred);
        assert_eq!(records[0].line(), 1);
        assert_eq!(records[1].backend(), Backend::Ethereum);
        assert_eq!(records[1].ns_per_op(), 35_105.0);
    }

    #[test]
    fn test_classify_lines_without_markers() {
        let records = classify_lines(&[DECRED_LINE, "PASS"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].backend(), Backend::Unknown);
    }

    #[test]
    fn test_classify_lines_skips_non_matching() {
        let records = classify_lines(&["goos: linux", "goarch: amd64", "PASS"]);
        assert!(records.is_empty());
    }
}
