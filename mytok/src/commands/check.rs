//! Check command implementation.
//!
//! Tokenizes every given file in strict mode and reports which ones are
//! well-formed.

use std::io::Write;
use std::path::PathBuf;

use mython_lex::LexerOptions;

use crate::commands::common::lex_path;
use crate::commands::traits::{Command, CommandDescription};
use crate::error::{MytokError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Files to check.
    pub inputs: Vec<PathBuf>,
}

/// Outcome of a check run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Files that tokenized cleanly.
    pub passed: usize,
    /// Files that failed.
    pub failed: usize,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Checks every input, writing one status line per file to `out`.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<CheckReport> {
        let mut report = CheckReport::default();

        for path in &self.args.inputs {
            match lex_path(path, LexerOptions::strict()) {
                Ok(lexer) => {
                    report.passed += 1;
                    writeln!(
                        out,
                        "ok: {} ({} tokens)",
                        path.display(),
                        lexer.tokens().len()
                    )?;
                }
                Err(err) => {
                    report.failed += 1;
                    tracing::warn!(path = %path.display(), "{}", err);
                    writeln!(out, "error: {}: {}", path.display(), err)?;
                }
            }
        }

        Ok(report)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckReport;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let report = self.run_to(&mut out)?;
        out.flush()?;
        tracing::info!(
            passed = report.passed,
            failed = report.failed,
            "{} finished",
            Self::name()
        );
        Ok(report)
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Tokenize files in strict mode and report malformed ones"
    }
}

/// Run the check command, failing if any file did not tokenize.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let report = CheckCommand::new(args).execute()?;
    if report.failed > 0 {
        return Err(MytokError::CheckFailed {
            failed: report.failed,
            total: report.passed + report.failed,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mixed_inputs() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.my");
        let bad = dir.path().join("bad.my");
        std::fs::write(&good, "def f():\n  return 1\n").unwrap();
        std::fs::write(&bad, "x = 99999999999\n").unwrap();
        let missing = dir.path().join("missing.my");

        let command = CheckCommand::new(CheckArgs {
            inputs: vec![good, bad, missing],
        });
        let mut out = Vec::new();
        let report = command.run_to(&mut out).unwrap();

        assert_eq!(report, CheckReport { passed: 1, failed: 2 });
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("ok: ") && lines[0].ends_with("(12 tokens)"));
        assert!(lines[1].contains("does not fit in 32 bits"));
        assert!(lines[2].contains("Cannot open"));
    }

    #[test]
    fn test_no_inputs() {
        let command = CheckCommand::new(CheckArgs { inputs: Vec::new() });
        let report = command.run_to(&mut Vec::new()).unwrap();
        assert_eq!(report, CheckReport::default());
    }
}
