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

//! Human-readable units shared by the reporters.

/// Formats nanoseconds as `s`, `ms`, `μs` or `ns`.
///
/// ```
/// use benchfmt::units::format_time;
///
/// assert_eq!(format_time(1_500.0), "2μs");
/// assert_eq!(format_time(1_500_000.0), "1.5ms");
/// ```
pub fn format_time(ns: f64) -> String {
    if ns >= 1_000_000_000.0 {
        format!("{:.1}s", ns / 1_000_000_000.0)
    } else if ns >= 1_000_000.0 {
        format!("{:.1}ms", ns / 1_000_000.0)
    } else if ns >= 1_000.0 {
        format!("{:.0}μs", ns / 1_000.0)
    } else {
        format!("{:.0}ns", ns)
    }
}

/// Formats a byte count as `MB`, `KB` or `B` (binary multiples).
pub fn format_memory(bytes: f64) -> String {
    if bytes >= 1_048_576.0 {
        format!("{:.1}MB", bytes / 1_048_576.0)
    } else if bytes >= 1_024.0 {
        format!("{:.1}KB", bytes / 1_024.0)
    } else {
        format!("{:.0}B", bytes)
    }
}

/// Formats a count with `M`/`K` suffixes.
pub fn format_count(count: f64) -> String {
    if count >= 1_000_000.0 {
        format!("{:.1}M", count / 1_000_000.0)
    } else if count >= 1_000.0 {
        format!("{:.1}K", count / 1_000.0)
    } else {
        format!("{:.0}", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(512.0), "512ns");
        assert_eq!(format_time(999.0), "999ns");
        assert_eq!(format_time(1_000.0), "1μs");
        assert_eq!(format_time(1_500.0), "2μs");
        assert_eq!(format_time(120_260.0), "120μs");
        assert_eq!(format_time(35_105.0), "35μs");
        assert_eq!(format_time(1_500_000.0), "1.5ms");
        assert_eq!(format_time(2_000_000_000.0), "2.0s");
    }

    #[test]
    fn test_format_memory() {
        assert_eq!(format_memory(136.0), "136B");
        assert_eq!(format_memory(1_023.0), "1023B");
        assert_eq!(format_memory(2_048.0), "2.0KB");
        assert_eq!(format_memory(3_145_728.0), "3.0MB");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(2.0), "2");
        assert_eq!(format_count(999.0), "999");
        assert_eq!(format_count(1_500.0), "1.5K");
        assert_eq!(format_count(2_500_000.0), "2.5M");
    }
}
