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

//! Go benchmark comparison for the Decred and Ethereum secp256k1 backends.
//!
//! Turns the text printed by `go test -bench=. -benchmem` into a side-by-side
//! comparison of the pure Go (Decred) backend and the libsecp256k1
//! (Ethereum) backend.
//!
//! ## Pipeline
//!
//! 1. [`parser`]: benchmark lines become [`ParsedLine`]s
//! 2. [`classifier`]: each parsed line gets a [`Backend`] from marker text
//!    around it
//! 3. [`aggregator`]: records are grouped by operation and backend
//! 4. [`comparator`]: ratios, verdicts and summary statistics
//! 5. [`reporters`]: Markdown or terminal rendering
//!
//! ## Usage
//!
//! ```
//! use benchfmt::reporters::{MarkdownReporter, Reporter};
//!
//! let input = [
//!     "Testing Decred backend (Pure Go)",
//!     "BenchmarkComparison_ScalarMul-10  9624  120260 ns/op  136 B/op  2 allocs/op",
//!     "Testing Ethereum backend (libsecp256k1)",
//!     "BenchmarkComparison_ScalarMul-10  101220  35105 ns/op  136 B/op  2 allocs/op",
//! ];
//!
//! let report = benchfmt::build_report(&input).unwrap();
//! let text = MarkdownReporter::new().render(&report);
//! assert!(text.contains("| **ScalarMul** | 120μs | 35μs | **3.4x faster** |"));
//! ```

#![warn(missing_docs)]

pub mod aggregator;
pub mod classifier;
pub mod comparator;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod record;
pub mod reporters;
pub mod units;

pub use aggregator::{group_by_operation, GroupedResults};
pub use comparator::{compare, Comparison, Judgment, Summary};
pub use error::{BenchfmtError, Result};
pub use pipeline::{build_report, read_lines, ComparisonReport, PipelineStats};
pub use record::{Backend, MeasurementRecord, ParsedLine};
pub use reporters::{MarkdownReporter, Reporter, TerminalReporter};
