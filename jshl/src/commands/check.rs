//! Check command implementation.
//!
//! Lexes every input on a worker pool and reports each lexical error with
//! its location and a source snippet. Reports come out in input order.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use jslex_lex::Lexer;
use jslex_util::{Diagnostic, Handler, SourceFile};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::commands::common::{read_source, warn_if_blank};
use crate::commands::traits::Command;
use crate::error::{JshlError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Files to check; `-` reads standard input.
    pub inputs: Vec<PathBuf>,
    /// Number of worker threads.
    pub jobs: usize,
}

/// Lexical diagnostics for one input.
#[derive(Debug)]
pub struct FileReport {
    /// The lexed source.
    pub file: SourceFile,
    /// One diagnostic per error token, in source order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Totals over every input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    /// Inputs that were lexed.
    pub files_checked: usize,
    /// Inputs with at least one lexical error.
    pub files_with_errors: usize,
    /// Lexical errors across all inputs.
    pub errors: usize,
    /// Inputs that could not be read.
    pub unreadable: usize,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Lexes every input on a pool of `jobs` threads.
    fn check_all(&self) -> Result<Vec<Result<FileReport>>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.args.jobs)
            .build()
            .map_err(|e| JshlError::Config(format!("Failed to start worker threads: {}", e)))?;

        Ok(pool.install(|| {
            self.args
                .inputs
                .par_iter()
                .map(|path| check_file(path))
                .collect()
        }))
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckSummary;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let start_time = Instant::now();
        let reports = self.check_all()?;

        let mut summary = CheckSummary::default();
        let mut stdout = std::io::stdout().lock();
        for report in reports {
            match report {
                Ok(report) => {
                    summary.files_checked += 1;
                    if !report.diagnostics.is_empty() {
                        summary.files_with_errors += 1;
                        summary.errors += report.diagnostics.len();
                    }
                    for diagnostic in &report.diagnostics {
                        stdout.write_all(format_diagnostic(&report.file, diagnostic).as_bytes())?;
                    }
                }
                Err(e) => {
                    summary.unreadable += 1;
                    eprintln!("error: {}", e);
                }
            }
        }
        stdout.flush()?;

        info!(
            files = summary.files_checked,
            errors = summary.errors,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "check finished"
        );

        if summary.errors > 0 {
            return Err(JshlError::LexicalErrors {
                errors: summary.errors,
                files: summary.files_with_errors,
            });
        }
        if summary.unreadable > 0 {
            return Err(JshlError::FileOperation(format!(
                "{} file(s) could not be read",
                summary.unreadable
            )));
        }

        writeln!(
            stdout,
            "checked {} file(s): no lexical errors",
            summary.files_checked
        )?;
        Ok(summary)
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    crate::commands::traits::run::<CheckCommand>(args).map(|_| ())
}

/// Lexes one input, collecting a diagnostic per error token.
pub fn check_file(path: &Path) -> Result<FileReport> {
    let file = read_source(path)?;
    if warn_if_blank(&file) {
        return Ok(FileReport {
            file,
            diagnostics: Vec::new(),
        });
    }

    let handler = Handler::new();
    let token_count = Lexer::with_handler(file.content(), &handler).count();
    debug!(
        input = %file.name(),
        tokens = token_count,
        errors = handler.error_count(),
        "lexed"
    );

    Ok(FileReport {
        diagnostics: handler.take_diagnostics(),
        file,
    })
}

/// Formats `diagnostic` as `path:line:col: error[code]: message` followed by
/// a snippet of the offending line.
pub fn format_diagnostic(file: &SourceFile, diagnostic: &Diagnostic) -> String {
    let mut out = format!(
        "{}:{}:{}: {}\n",
        file.name(),
        diagnostic.span.line,
        diagnostic.span.column,
        diagnostic
    );

    if let Ok(snippet) = file.snippet(diagnostic.span) {
        out.push_str(&snippet.format());
        out.push('\n');
    }
    for help in &diagnostic.helps {
        out.push_str(&format!("    = help: {}\n", help));
    }
    out
}
