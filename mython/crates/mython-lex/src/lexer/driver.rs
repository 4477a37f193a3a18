//! Line loop and indentation tracking.
//!
//! Input is read one physical line at a time. Blank and comment-only lines
//! are dropped before indentation is measured, so they never open or close
//! a block. Every other line first bridges the indentation difference with
//! `Indent` / `Dedent` tokens and is then handed to the line scanner.

use std::io::BufRead;

use tracing::{debug, trace, warn};

use crate::cursor::LineCursor;
use crate::error::{LexerError, Result};
use crate::options::LexerOptions;
use crate::token::Token;

/// Number of leading spaces that make up one indentation unit.
pub(crate) const SPACES_PER_INDENT: usize = 2;

/// Construction-time token sink shared by the per-line scanners.
pub(crate) struct Scanner {
    tokens: Vec<Token>,
    options: LexerOptions,
}

impl Scanner {
    pub(crate) fn new(options: LexerOptions) -> Self {
        Self {
            tokens: Vec::new(),
            options,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub(crate) fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Emits one `Indent` or `Dedent` per unit between `*current` and
    /// `new_level`, then records `new_level`.
    pub(crate) fn set_indent_level(&mut self, current: &mut usize, new_level: usize) {
        for _ in *current..new_level {
            self.push(Token::Indent);
        }
        for _ in new_level..*current {
            self.push(Token::Dedent);
        }
        *current = new_level;
    }

    /// Handles a recoverable problem: fails in strict mode, logs otherwise.
    pub(crate) fn recover(&self, error: LexerError) -> Result<()> {
        if self.options.strict {
            return Err(error);
        }
        warn!("{}", error);
        Ok(())
    }

    pub(crate) fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// Reads `input` to the end and returns the finished token buffer.
///
/// The buffer always ends with exactly one `Eof`, preceded by whatever
/// `Dedent` tokens are needed to close the blocks still open.
pub(crate) fn tokenize<R: BufRead>(mut input: R, options: LexerOptions) -> Result<Vec<Token>> {
    let mut scanner = Scanner::new(options);
    let mut indent_level = 0usize;
    let mut line_number: u32 = 0;
    let mut raw = Vec::new();

    loop {
        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        line_number += 1;
        if raw.last() == Some(&b'\n') {
            raw.pop();
        }

        if is_blank_line(&raw) {
            trace!(line = line_number, "skipping blank line");
            continue;
        }

        let (level, content) = split_indent(&raw);
        scanner.set_indent_level(&mut indent_level, level);

        let before = scanner.token_count();
        scanner.scan_line(LineCursor::new(content, line_number))?;
        trace!(
            line = line_number,
            indent = level,
            tokens = scanner.token_count() - before,
            "scanned line"
        );
    }

    scanner.set_indent_level(&mut indent_level, 0);
    scanner.push(Token::Eof);

    let tokens = scanner.into_tokens();
    debug!(
        lines = line_number,
        tokens = tokens.len(),
        strict = options.strict,
        "tokenized source"
    );
    Ok(tokens)
}

/// Returns true for lines that produce no tokens at all.
///
/// That is: the empty line, a line of spaces, a line whose first non-space
/// byte is `#`, and a line whose only non-space byte is its last one and
/// follows at least one space (this covers a stray `\r` after indentation).
pub(crate) fn is_blank_line(line: &[u8]) -> bool {
    match line.iter().position(|&b| b != b' ') {
        None => true,
        Some(first) => line[first] == b'#' || (first > 0 && first == line.len() - 1),
    }
}

/// Splits a line into its indentation level and the text after the
/// leading spaces.
///
/// Every two leading spaces are one level; an odd trailing space is
/// dropped. Tabs are not indentation.
pub(crate) fn split_indent(line: &[u8]) -> (usize, &[u8]) {
    let spaces = line.iter().take_while(|&&b| b == b' ').count();
    (spaces / SPACES_PER_INDENT, &line[spaces..])
}
