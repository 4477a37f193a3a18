//! Error types for mython-lex.

use thiserror::Error;

use crate::token::Token;

/// Everything that can go wrong while building or reading a token stream.
///
/// In the default lenient mode only [`LexerError::Io`] can come out of
/// construction. The `UnterminatedString`, `IntegerOverflow` and `StrayByte`
/// variants are raised only when `strict` is set in [`LexerOptions`].
///
/// [`LexerOptions`]: crate::LexerOptions
#[derive(Debug, Error)]
pub enum LexerError {
    /// The input reader failed.
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),

    /// A string literal ran to the end of its line without a closing quote.
    #[error("line {line}: unterminated string literal")]
    UnterminatedString {
        /// 1-based line of the opening quote.
        line: u32,
    },

    /// A digit run does not fit in `i32`.
    #[error("line {line}: integer literal `{literal}` does not fit in 32 bits")]
    IntegerOverflow {
        /// 1-based source line.
        line: u32,
        /// The digit run as written.
        literal: String,
    },

    /// A byte that no token can start with (non-ASCII or a control byte).
    #[error("line {line}: unexpected byte {byte:#04x}")]
    StrayByte {
        /// 1-based source line.
        line: u32,
        /// The offending byte.
        byte: u8,
    },

    /// The parser asked for one token and the stream held another.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        /// Display form of the wanted token or token kind.
        expected: String,
        /// The token actually under the cursor.
        found: Token,
    },

    /// The read cursor is past the end of the token buffer.
    #[error("token cursor {position} out of range (buffer holds {len} tokens)")]
    CursorOutOfRange {
        /// Cursor index.
        position: usize,
        /// Buffer length.
        len: usize,
    },
}

/// Result type alias for lexer operations.
pub type Result<T> = std::result::Result<T, LexerError>;
