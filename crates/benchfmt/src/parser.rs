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

//! Go benchmark line parser.
//!
//! Recognizes `-benchmem` result lines such as
//!
//! ```text
//! BenchmarkComparison_ScalarMul-10    	    9624	    120260 ns/op	     136 B/op	       2 allocs/op
//! ```
//!
//! Whitespace runs are collapsed before matching, so tab- and
//! space-separated output parse the same way.

use crate::record::ParsedLine;
use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix the comparison benchmarks carry in their names.
pub const COMPARISON_PREFIX: &str = "Comparison_";

static BENCHMARK_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Benchmark(\w+)-[0-9]+ ([0-9]+) ([0-9]+) ns/op ([0-9]+) B/op ([0-9]+) allocs/op",
    )
    .expect("benchmark line pattern is valid")
});

/// Parses one line of benchmark output.
///
/// Returns `None` for anything that is not a benchmark result line.
///
/// # Examples
///
/// ```
/// use benchfmt::parser::parse_line;
///
/// let parsed = parse_line("BenchmarkScalarMul-10  9624  120260 ns/op  136 B/op  2 allocs/op")
///     .unwrap();
/// assert_eq!(parsed.operation, "ScalarMul");
/// assert_eq!(parsed.ns_per_op, 120260.0);
///
/// assert!(parse_line("PASS").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    if !line.contains("ns/op") {
        return None;
    }

    let normalized = normalize_whitespace(line);
    let caps = BENCHMARK_LINE.captures(&normalized)?;

    let iterations = match caps[2].parse::<u64>() {
        Ok(n) => n,
        Err(e) => {
            tracing::debug!(line, error = %e, "iteration count out of range");
            return None;
        }
    };

    Some(ParsedLine {
        operation: strip_comparison_prefix(&caps[1]).to_string(),
        iterations,
        ns_per_op: parse_metric(&caps[3])?,
        bytes_per_op: parse_metric(&caps[4])?,
        allocs_per_op: parse_metric(&caps[5])?,
    })
}

/// Removes the `Comparison_` prefix from a benchmark name, if present.
pub fn strip_comparison_prefix(name: &str) -> &str {
    name.strip_prefix(COMPARISON_PREFIX).unwrap_or(name)
}

fn normalize_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_metric(digits: &str) -> Option<f64> {
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_separated_line() {
        let line = "BenchmarkScalarMul-10    \t    9624\t    120260 ns/op\t     136 B/op\t       2 allocs/op";
        let parsed = parse_line(line).unwrap();

        assert_eq!(parsed.operation, "ScalarMul");
        assert_eq!(parsed.iterations, 9624);
        assert_eq!(parsed.ns_per_op, 120_260.0);
        assert_eq!(parsed.bytes_per_op, 136.0);
        assert_eq!(parsed.allocs_per_op, 2.0);
    }

    #[test]
    fn test_comparison_prefix_is_stripped() {
        let parsed =
            parse_line("BenchmarkComparison_ScalarMul-10 9624 120260 ns/op 136 B/op 2 allocs/op")
                .unwrap();
        assert_eq!(parsed.operation, "ScalarMul");

        assert_eq!(strip_comparison_prefix("Comparison_Sign"), "Sign");
        assert_eq!(strip_comparison_prefix("ScalarMul"), "ScalarMul");
        assert_eq!(strip_comparison_prefix("MyComparison_Sign"), "MyComparison_Sign");
    }

    #[test]
    fn test_leading_whitespace_is_trimmed() {
        let parsed =
            parse_line("   BenchmarkSign-8  100  5000 ns/op  64 B/op  1 allocs/op   ").unwrap();
        assert_eq!(parsed.operation, "Sign");
        assert_eq!(parsed.iterations, 100);
    }

    #[test]
    fn test_trailing_text_is_allowed() {
        let parsed =
            parse_line("BenchmarkSign-8 100 5000 ns/op 64 B/op 1 allocs/op 12.3 MB/s").unwrap();
        assert_eq!(parsed.ns_per_op, 5_000.0);
    }

    #[test]
    fn test_requires_parallelism_suffix() {
        assert!(parse_line("BenchmarkSign 100 5000 ns/op 64 B/op 1 allocs/op").is_none());
    }

    #[test]
    fn test_match_must_start_the_line() {
        assert!(parse_line("ok BenchmarkSign-8 100 5000 ns/op 64 B/op 1 allocs/op").is_none());
    }

    #[test]
    fn test_fractional_time_is_rejected() {
        assert!(parse_line("BenchmarkSign-8 100 0.31 ns/op 0 B/op 0 allocs/op").is_none());
    }

    #[test]
    fn test_missing_benchmem_columns() {
        assert!(parse_line("BenchmarkSign-8 100 5000 ns/op").is_none());
    }

    #[test]
    fn test_non_benchmark_lines() {
        assert!(parse_line("").is_none());
        assert!(parse_line("goos: darwin").is_none());
        assert!(parse_line("PASS").is_none());
        assert!(parse_line("ok  github.com/example/go-dleq  12.345s").is_none());
    }

    #[test]
    fn test_iteration_overflow_is_no_match() {
        let line = "BenchmarkSign-8 99999999999999999999999 5000 ns/op 64 B/op 1 allocs/op";
        assert!(parse_line(line).is_none());
    }
}
