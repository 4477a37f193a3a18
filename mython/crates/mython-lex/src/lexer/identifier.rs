//! Identifier and keyword lexing.

use crate::cursor::LineCursor;
use crate::lexer::driver::Scanner;
use crate::lexer::line::{is_punct, is_space};
use crate::token::{keyword_from_ident, Token};

impl Scanner {
    /// Lexes an identifier or keyword.
    ///
    /// Reads up to whitespace or punctuation other than `_`. Control and
    /// non-ASCII bytes inside the word are kept. A whitespace terminator is
    /// consumed; punctuation is left under the cursor for the line scanner
    /// to dispatch.
    ///
    /// A punctuation byte that no other rule claimed (`[`, `%`, `@`, ...)
    /// cannot start an identifier and becomes a `Char` token.
    pub(crate) fn lex_identifier(&mut self, cursor: &mut LineCursor<'_>) {
        let start = cursor.position();
        let mut end = start;

        while let Some(byte) = cursor.current() {
            if is_space(byte) {
                cursor.advance();
                break;
            }
            if !is_ident_byte(byte) {
                break;
            }
            cursor.advance();
            end = cursor.position();
        }

        if end == start {
            if let Some(byte) = cursor.current() {
                if is_punct(byte) && cursor.position() == start {
                    cursor.advance();
                    self.push(Token::Char(char::from(byte)));
                }
            }
            return;
        }

        let text = String::from_utf8_lossy(&cursor.slice_from(start)[..end - start]);
        let token = keyword_from_ident(&text).unwrap_or_else(|| Token::Id(text.into_owned()));
        self.push(token);
    }
}

#[inline]
fn is_ident_byte(byte: u8) -> bool {
    byte == b'_' || !is_punct(byte)
}
