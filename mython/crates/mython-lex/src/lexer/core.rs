//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct: the finished token buffer and
//! the forward-only read cursor handed to the parser.

use std::io::BufRead;

use crate::error::{LexerError, Result};
use crate::lexer::driver;
use crate::options::LexerOptions;
use crate::token::{Token, TokenKind};

/// Lexer for Mython source code.
///
/// All tokenization happens in the constructor. Afterwards the token buffer
/// is immutable and only the cursor moves. The buffer always ends with
/// exactly one [`Token::Eof`], and the cursor never moves past it.
///
/// # Example
///
/// ```
/// use mython_lex::{Lexer, Token};
///
/// let mut lexer = Lexer::from_source("x = 1\n").unwrap();
///
/// assert_eq!(lexer.current_token(), &Token::Id("x".to_string()));
/// assert_eq!(lexer.next_token(), &Token::Char('='));
/// assert_eq!(lexer.next_token(), &Token::Number(1));
/// assert_eq!(lexer.next_token(), &Token::Newline);
/// assert_eq!(lexer.next_token(), &Token::Eof);
/// assert_eq!(lexer.next_token(), &Token::Eof);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer {
    /// Finished token buffer, ending in `Eof`.
    tokens: Vec<Token>,

    /// Index of the current token.
    head: usize,
}

impl Lexer {
    /// Tokenizes `input` with the default, lenient options.
    ///
    /// # Errors
    ///
    /// Only read failures from `input` are reported.
    pub fn new<R: BufRead>(input: R) -> Result<Self> {
        Self::with_options(input, LexerOptions::default())
    }

    /// Tokenizes `input` with explicit options.
    ///
    /// # Errors
    ///
    /// Read failures from `input`, and in strict mode the first malformed
    /// literal or stray byte.
    pub fn with_options<R: BufRead>(input: R, options: LexerOptions) -> Result<Self> {
        let tokens = driver::tokenize(input, options)?;
        Ok(Self { tokens, head: 0 })
    }

    /// Tokenizes an in-memory source with the default options.
    pub fn from_source(source: &str) -> Result<Self> {
        Self::new(source.as_bytes())
    }

    /// Returns the token under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past the end of the buffer. The `Eof`
    /// sentinel makes that impossible through the public API.
    pub fn current_token(&self) -> &Token {
        match self.try_current_token() {
            Ok(token) => token,
            Err(err) => panic!("{}", err),
        }
    }

    /// Returns the token under the cursor, or `CursorOutOfRange`.
    pub fn try_current_token(&self) -> Result<&Token> {
        self.tokens
            .get(self.head)
            .ok_or_else(|| LexerError::CursorOutOfRange {
                position: self.head,
                len: self.tokens.len(),
            })
    }

    /// Moves to the next token and returns it.
    ///
    /// `Eof` is sticky: once the cursor reaches it, further calls stay put.
    pub fn next_token(&mut self) -> &Token {
        if self.head + 1 < self.tokens.len() {
            self.head += 1;
        }
        self.current_token()
    }

    /// Checks that the current token is of case `kind` and returns it.
    pub fn expect(&self, kind: TokenKind) -> Result<&Token> {
        let token = self.current_token();
        if token.is(kind) {
            Ok(token)
        } else {
            Err(LexerError::UnexpectedToken {
                expected: kind.to_string(),
                found: token.clone(),
            })
        }
    }

    /// Checks that the current token equals `expected`, payload included.
    pub fn expect_token(&self, expected: &Token) -> Result<&Token> {
        let token = self.current_token();
        if token == expected {
            Ok(token)
        } else {
            Err(LexerError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.clone(),
            })
        }
    }

    /// Advances, then behaves like [`expect`](Self::expect).
    pub fn expect_next(&mut self, kind: TokenKind) -> Result<&Token> {
        self.next_token();
        self.expect(kind)
    }

    /// Advances, then behaves like [`expect_token`](Self::expect_token).
    pub fn expect_next_token(&mut self, expected: &Token) -> Result<&Token> {
        self.next_token();
        self.expect_token(expected)
    }

    /// The whole token buffer. A consumer that needs its own position can
    /// keep an index into this slice.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Index of the current token.
    pub fn position(&self) -> usize {
        self.head
    }

    /// Number of tokens in the buffer, `Eof` included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false: even empty source yields `Eof`.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns true once the cursor sits on `Eof`.
    pub fn is_at_end(&self) -> bool {
        self.head + 1 >= self.tokens.len()
    }
}

impl<'a> IntoIterator for &'a Lexer {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
