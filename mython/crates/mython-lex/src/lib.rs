//! mython-lex - Lexical Analyzer for the Mython scripting language
//!
//! This crate turns Mython source text into a flat, immutable buffer of
//! tokens and hands the parser a forward-only cursor over it.
//!
//! Mython is indentation-structured, so besides values, keywords and
//! operators the lexer synthesizes structural tokens from leading
//! whitespace: `Indent`, `Dedent`, `Newline` and a final `Eof`.
//!
//! # Example Usage
//!
//! ```
//! use mython_lex::{Lexer, Token};
//!
//! let lexer = Lexer::from_source("if x:\n  return 1\n").unwrap();
//!
//! assert_eq!(
//!     lexer.tokens(),
//!     &[
//!         Token::If,
//!         Token::Id("x".to_string()),
//!         Token::Char(':'),
//!         Token::Newline,
//!         Token::Indent,
//!         Token::Return,
//!         Token::Number(1),
//!         Token::Newline,
//!         Token::Dedent,
//!         Token::Eof,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Line loop, indentation tracking and the token cursor
//! - [`cursor`] - Byte cursor for scanning a single line
//! - [`options`] - Lenient / strict configuration
//! - [`error`] - Error type
//!
//! # Lexical Rules
//!
//! ## Indentation
//!
//! Two leading spaces make one indentation level (odd spaces round down,
//! tabs do not count). Each level gained emits one `Indent`, each level
//! lost one `Dedent`. Blank lines and comment-only lines are skipped before
//! indentation is measured. All open levels are closed before `Eof`.
//!
//! ## Keywords
//!
//! `class`, `return`, `if`, `else`, `def`, `print`, `and`, `or`, `not`,
//! `None`, `True`, `False`
//!
//! ## Literals
//!
//! - **Integer**: decimal digits, 32-bit signed (`42`, `007`)
//! - **String**: `'...'` or `"..."`, with `\n` and `\t` escapes
//!
//! ## Operators
//!
//! `==`, `!=`, `<=`, `>=` are single tokens. Every other operator or
//! punctuation character is a `Char` token.
//!
//! ## Comments
//!
//! `#` to end of line. A comment after code still ends that line with a
//! `Newline`; a comment-only line produces nothing.
//!
//! # Strictness
//!
//! By default malformed input is tolerated: an unterminated string ends
//! at the end of its line, overflowing integers wrap, and stray bytes
//! where a token would start are skipped. Setting `strict` in
//! [`LexerOptions`] turns each of these into an error.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod options;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::LineCursor;
pub use error::{LexerError, Result};
pub use lexer::Lexer;
pub use options::LexerOptions;
pub use token::{keyword_from_ident, Token, TokenKind};
