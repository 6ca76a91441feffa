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

//! Shared front-end for the `benchfmt` and `benchfmt-term` binaries.
//!
//! Both binaries read Go benchmark output from stdin and print a report on
//! stdout. They differ only in the [`Style`] of the report:
//!
//! - **benchfmt**: Markdown tables, for pull requests and CI summaries
//! - **benchfmt-term**: aligned columns with colors, for a terminal
//!
//! # Exit status
//!
//! Zero for every completed run. "No input" and "no results" are reported on
//! stdout with a hint. Ctrl-C while input is being read exits with zero and
//! no output; once input is buffered it exits with 130.
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`. The default filter is
//! `benchfmt=warn`; set `RUST_LOG` (for example `RUST_LOG=benchfmt=debug`)
//! to see how each line was classified.

use benchfmt::{
    build_report, read_lines, BenchfmtError, MarkdownReporter, Reporter, TerminalReporter,
};
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "benchfmt=warn";

/// Exit status for an interrupt outside the input phase (128 + SIGINT).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

static READING_INPUT: AtomicBool = AtomicBool::new(false);

const USAGE: &str = "\
This program processes Go benchmark output and creates formatted tables
comparing Decred (pure Go) vs Ethereum (libsecp256k1) backends.

Backends are recognized from marker lines in the input such as
\"CGO_ENABLED=0\", \"Pure Go\", \"CGO_ENABLED=1\", \"libsecp256k1\" or
\"-tags=ethereum_secp256k1\".

Examples:
    {bin} < benchmark_output.txt
    make benchmark_all | {bin}
    go test -bench=. -benchmem | {bin}";

/// Benchmark formatter for go-dleq performance comparison.
#[derive(Parser, Debug)]
#[command(disable_version_flag = true, disable_help_flag = true)]
pub struct Cli {
    /// Print help
    #[allow(dead_code)]
    #[arg(short = 'h', long = "help", action = ArgAction::HelpLong)]
    help: Option<bool>,
}

/// Report layout, one per binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Markdown,
    Terminal,
}

impl Style {
    /// Name of the binary that renders this style.
    pub fn program(&self) -> &'static str {
        match self {
            Style::Markdown => "benchfmt",
            Style::Terminal => "benchfmt-term",
        }
    }

    fn about(&self) -> &'static str {
        match self {
            Style::Markdown => "Benchmark formatter for go-dleq performance comparison",
            Style::Terminal => {
                "Terminal-optimized benchmark formatter for go-dleq performance comparison"
            }
        }
    }

    pub fn reporter(&self) -> Box<dyn Reporter> {
        match self {
            Style::Markdown => Box::new(MarkdownReporter::new()),
            Style::Terminal => Box::new(TerminalReporter::new()),
        }
    }
}

/// Installs the stderr log subscriber.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A second call (as in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Whether the arguments ask for the help text.
///
/// Anything else on the command line is ignored with a warning.
fn wants_help<I, T>(style: Style, args: I) -> Option<clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let command = Cli::command()
        .name(style.program())
        .bin_name(style.program())
        .about(style.about())
        .long_about(format!(
            "{}.\n\n{}",
            style.about(),
            USAGE.replace("{bin}", style.program())
        ));

    match command.try_get_matches_from(args) {
        Ok(_) => None,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => Some(err),
        Err(err) => {
            tracing::warn!(kind = ?err.kind(), "ignoring unrecognized arguments");
            None
        }
    }
}

/// Buffers all input lines.
///
/// An interrupt while this runs ends the process quietly with status 0.
pub fn read_input<R: BufRead>(reader: R) -> benchfmt::Result<Vec<String>> {
    READING_INPUT.store(true, Ordering::SeqCst);
    let lines = read_lines(reader);
    READING_INPUT.store(false, Ordering::SeqCst);
    lines
}

/// Exit status for an interrupt received right now.
pub fn interrupt_exit_code() -> i32 {
    if READING_INPUT.load(Ordering::SeqCst) {
        0
    } else {
        INTERRUPTED_EXIT_CODE
    }
}

/// Reads all input and renders the report.
pub fn render<R: BufRead>(style: Style, reader: R) -> benchfmt::Result<String> {
    let lines = read_input(reader)?;
    tracing::debug!(lines = lines.len(), "input buffered");

    let report = build_report(&lines)?;
    Ok(style.reporter().render(&report))
}

/// Text printed for a run that produced no report.
pub fn describe_error(style: Style, err: &BenchfmtError) -> String {
    let mut text = err.to_string();
    if let Some(hint) = err.hint(style.program()) {
        text.push('\n');
        text.push_str(&hint);
    }
    text
}

/// Runs a binary end to end.
pub fn run(style: Style) -> ExitCode {
    init_logging();

    if let Some(help) = wants_help(style, std::env::args_os()) {
        if let Err(e) = help.print() {
            tracing::debug!(error = %e, "failed to print help");
        }
        return ExitCode::SUCCESS;
    }

    // Ctrl-C while waiting on input ends the run quietly; later it aborts
    // with the conventional status.
    if let Err(e) = ctrlc::set_handler(|| std::process::exit(interrupt_exit_code())) {
        tracing::warn!(error = %e, "could not install interrupt handler");
    }

    let text = match render(style, io::stdin().lock()) {
        Ok(text) => text,
        Err(err) => describe_error(style, &err),
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", text) {
        tracing::debug!(error = %e, "stdout closed");
    }

    ExitCode::SUCCESS
}
