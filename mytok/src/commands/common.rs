//! Common types and utilities for mytok commands.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use mython_lex::{Lexer, LexerOptions, Token};
use serde::{Deserialize, Serialize};

use crate::error::{MytokError, Result};

/// Path argument meaning "read standard input".
pub const STDIN_PATH: &str = "-";

// ============================================================================
// Output Format
// ============================================================================

/// How `mytok tokens` prints the token stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line, `Name{payload}` form.
    #[default]
    Text,
    /// A JSON array of tokens.
    Json,
}

// ============================================================================
// Source Input
// ============================================================================

/// Opens `path` for reading, or standard input for `-`.
pub fn open_source(path: &Path) -> Result<Box<dyn BufRead>> {
    if path.as_os_str() == STDIN_PATH {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).map_err(|source| MytokError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

/// Opens and tokenizes `path`.
pub fn lex_path(path: &Path, options: LexerOptions) -> Result<Lexer> {
    let reader = open_source(path)?;
    let lexer = Lexer::with_options(reader, options)?;
    tracing::debug!(
        path = %path.display(),
        tokens = lexer.tokens().len(),
        "tokenized file"
    );
    Ok(lexer)
}

// ============================================================================
// Rendering
// ============================================================================

/// Writes `tokens` to `out` in the requested format.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(out, "{}", token)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, tokens)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
