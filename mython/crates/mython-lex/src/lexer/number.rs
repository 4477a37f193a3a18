//! Integer literal lexing.

use crate::cursor::LineCursor;
use crate::error::{LexerError, Result};
use crate::lexer::driver::Scanner;
use crate::token::Token;

impl Scanner {
    /// Lexes a run of decimal digits as an `i32`.
    ///
    /// There is no sign, no float and no radix prefix. A literal that does
    /// not fit wraps around in two's complement unless strict mode is on.
    pub(crate) fn lex_number(&mut self, cursor: &mut LineCursor<'_>) -> Result<()> {
        let start = cursor.position();
        let mut value: i32 = 0;
        let mut overflowed = false;

        while let Some(byte) = cursor.current() {
            if !byte.is_ascii_digit() {
                break;
            }
            let digit = i32::from(byte - b'0');
            match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                Some(next) => value = next,
                None => {
                    overflowed = true;
                    value = value.wrapping_mul(10).wrapping_add(digit);
                }
            }
            cursor.advance();
        }

        if overflowed {
            self.recover(LexerError::IntegerOverflow {
                line: cursor.line(),
                literal: String::from_utf8_lossy(cursor.slice_from(start)).into_owned(),
            })?;
        }

        self.push(Token::Number(value));
        Ok(())
    }
}
