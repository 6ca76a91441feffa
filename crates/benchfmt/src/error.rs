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

//! Error types for benchmark report generation.
//!
//! None of these are fatal. Lines that do not look like benchmark output are
//! skipped by the parser and never reach this module; the variants here cover
//! the run-level conditions that stop a report from being produced.

use std::io;
use thiserror::Error;

/// Result type for report generation.
pub type Result<T> = std::result::Result<T, BenchfmtError>;

/// Conditions that end a run without a report.
///
/// The `Display` text of [`BenchfmtError::NoInput`] and
/// [`BenchfmtError::NoResults`] is the user-facing message; front-ends print
/// it to stdout together with [`BenchfmtError::hint`] and exit successfully.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchfmtError {
    /// Standard input closed before a single line was read.
    #[error("❌ No input provided. Please pipe benchmark output to this script.")]
    NoInput,

    /// Input was present but no line matched the benchmark format.
    #[error("❌ No benchmark results found in input.")]
    NoResults {
        /// Number of lines that were scanned
        lines: usize,
    },

    /// Reading standard input failed.
    #[error("I/O error: {message}")]
    Io {
        /// The error message
        message: String,
    },
}

impl BenchfmtError {
    /// Second line printed under the message, if any.
    ///
    /// `program` is the invoking binary's name and shows up in the usage
    /// example for [`BenchfmtError::NoInput`].
    ///
    /// # Examples
    ///
    /// ```
    /// use benchfmt::BenchfmtError;
    ///
    /// let hint = BenchfmtError::NoInput.hint("benchfmt").unwrap();
    /// assert!(hint.contains("| benchfmt"));
    /// ```
    pub fn hint(&self, program: &str) -> Option<String> {
        match self {
            BenchfmtError::NoInput => Some(format!(
                "Example: go test -bench=. -benchmem | {}",
                program
            )),
            BenchfmtError::NoResults { .. } => Some(
                "Make sure you're piping Go benchmark output (go test -bench=. -benchmem)"
                    .to_string(),
            ),
            BenchfmtError::Io { .. } => None,
        }
    }
}

// `Interrupted` never arrives here: `BufRead` retries it.
impl From<io::Error> for BenchfmtError {
    fn from(err: io::Error) -> Self {
        BenchfmtError::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        let no_input = BenchfmtError::NoInput.to_string();
        let no_results = BenchfmtError::NoResults { lines: 3 }.to_string();

        assert!(no_input.contains("No input provided"));
        assert!(no_results.contains("No benchmark results found"));
        assert_ne!(no_input, no_results);
    }

    #[test]
    fn test_hints() {
        let hint = BenchfmtError::NoInput.hint("benchfmt-term").unwrap();
        assert_eq!(hint, "Example: go test -bench=. -benchmem | benchfmt-term");

        let hint = BenchfmtError::NoResults { lines: 1 }.hint("benchfmt").unwrap();
        assert!(hint.contains("go test -bench=. -benchmem"));

        let io_err = BenchfmtError::Io {
            message: "gone".to_string(),
        };
        assert!(io_err.hint("benchfmt").is_none());
    }

    #[test]
    fn test_from_io_error() {
        let err: BenchfmtError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert_eq!(
            err,
            BenchfmtError::Io {
                message: "gone".to_string()
            }
        );
        assert_eq!(err.to_string(), "I/O error: gone");
    }
}
