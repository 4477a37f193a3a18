//! Dispatch over one logical line.

use crate::cursor::LineCursor;
use crate::error::{LexerError, Result};
use crate::lexer::driver::Scanner;
use crate::token::Token;

impl Scanner {
    /// Scans the indentation-stripped text of one line.
    ///
    /// A `Newline` is appended only if the line produced at least one token.
    /// A `#` ends the line: whatever follows is comment text.
    pub(crate) fn scan_line(&mut self, mut cursor: LineCursor<'_>) -> Result<()> {
        let start = self.token_count();

        while let Some(byte) = cursor.current() {
            match byte {
                b' ' => cursor.advance(),
                b'#' => {
                    cursor.skip_rest();
                    break;
                }
                b'0'..=b'9' => self.lex_number(&mut cursor)?,
                b'=' | b'!' | b'<' | b'>' => self.lex_comparison(&mut cursor),
                b'*' | b'/' | b'+' | b'-' | b'(' | b')' | b',' | b'.' | b':' | b';' | b'\t'
                | b'\n' => {
                    cursor.advance();
                    self.push(Token::Char(char::from(byte)));
                }
                b'\'' | b'"' => self.lex_string(&mut cursor)?,
                b if is_printable(b) || is_space(b) => self.lex_identifier(&mut cursor),
                other => {
                    self.recover(LexerError::StrayByte {
                        line: cursor.line(),
                        byte: other,
                    })?;
                    cursor.advance();
                }
            }
        }

        if self.token_count() > start {
            self.push(Token::Newline);
        }
        Ok(())
    }

    /// Lexes `==`, `!=`, `<=`, `>=`, or the lone first character as a `Char`.
    fn lex_comparison(&mut self, cursor: &mut LineCursor<'_>) {
        let Some(first) = cursor.bump() else {
            return;
        };
        if !cursor.match_byte(b'=') {
            self.push(Token::Char(char::from(first)));
            return;
        }
        let token = match first {
            b'=' => Token::Eq,
            b'!' => Token::NotEq,
            b'<' => Token::LessOrEq,
            _ => Token::GreaterOrEq,
        };
        self.push(token);
    }
}

/// ASCII graphic characters and the space.
#[inline]
pub(crate) fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7e)
}

/// ASCII whitespace, including vertical tab and form feed.
#[inline]
pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// ASCII punctuation: every graphic character that is not alphanumeric.
#[inline]
pub(crate) fn is_punct(byte: u8) -> bool {
    byte.is_ascii_punctuation()
}
