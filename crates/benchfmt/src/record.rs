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

//! Measurement records.
//!
//! Records are built in two phases. The parser produces a [`ParsedLine`],
//! which carries no backend. The classifier then turns it into a
//! [`MeasurementRecord`] with its backend fixed. Nothing outside this crate
//! can build a record with a backend it did not infer.

use std::fmt;

/// secp256k1 implementation a measurement was taken against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Backend {
    /// Pure Go implementation (`CGO_ENABLED=0`).
    Decred,
    /// libsecp256k1 through cgo (`-tags=ethereum_secp256k1`).
    Ethereum,
    /// No backend marker was seen.
    Unknown,
}

impl Backend {
    /// Returns the backend's display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Decred => "Decred",
            Backend::Ethereum => "Ethereum",
            Backend::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One benchmark line as parsed, before backend classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    /// Operation name with the `Comparison_` prefix removed.
    pub operation: String,
    /// Number of iterations the harness ran.
    pub iterations: u64,
    /// Nanoseconds per iteration.
    pub ns_per_op: f64,
    /// Bytes allocated per iteration.
    pub bytes_per_op: f64,
    /// Allocations per iteration.
    pub allocs_per_op: f64,
}

/// A classified benchmark observation.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRecord {
    parsed: ParsedLine,
    backend: Backend,
    line: usize,
}

impl MeasurementRecord {
    pub(crate) fn new(parsed: ParsedLine, backend: Backend, line: usize) -> Self {
        Self {
            parsed,
            backend,
            line,
        }
    }

    /// Operation name, `Comparison_` prefix already stripped.
    pub fn operation(&self) -> &str {
        &self.parsed.operation
    }

    /// Backend the classifier assigned.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Iterations the Go harness ran.
    pub fn iterations(&self) -> u64 {
        self.parsed.iterations
    }

    /// Nanoseconds per operation.
    pub fn ns_per_op(&self) -> f64 {
        self.parsed.ns_per_op
    }

    /// Bytes allocated per operation.
    pub fn bytes_per_op(&self) -> f64 {
        self.parsed.bytes_per_op
    }

    /// Allocations per operation.
    pub fn allocs_per_op(&self) -> f64 {
        self.parsed.allocs_per_op
    }

    /// Zero-based index of the input line this record came from.
    pub fn line(&self) -> usize {
        self.line
    }
}

#[cfg(test)]
pub(crate) fn record(operation: &str, backend: Backend, ns_per_op: f64) -> MeasurementRecord {
    MeasurementRecord::new(
        ParsedLine {
            operation: operation.to_string(),
            iterations: 1_000,
            ns_per_op,
            bytes_per_op: 136.0,
            allocs_per_op: 2.0,
        },
        backend,
        0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_names() {
        assert_eq!(Backend::Decred.to_string(), "Decred");
        assert_eq!(Backend::Ethereum.as_str(), "Ethereum");
        assert_eq!(Backend::Unknown.as_str(), "Unknown");
    }

    #[test]
    fn test_backend_ordering() {
        assert!(Backend::Decred < Backend::Ethereum);
        assert!(Backend::Ethereum < Backend::Unknown);
    }

    #[test]
    fn test_record_accessors() {
        let rec = record("ScalarMul", Backend::Ethereum, 35_105.0);
        assert_eq!(rec.operation(), "ScalarMul");
        assert_eq!(rec.backend(), Backend::Ethereum);
        assert_eq!(rec.iterations(), 1_000);
        assert_eq!(rec.ns_per_op(), 35_105.0);
        assert_eq!(rec.bytes_per_op(), 136.0);
        assert_eq!(rec.allocs_per_op(), 2.0);
        assert_eq!(rec.line(), 0);
    }
}
