//! String literal lexing.

use crate::cursor::LineCursor;
use crate::error::{LexerError, Result};
use crate::lexer::driver::Scanner;
use crate::token::Token;

impl Scanner {
    /// Lexes a string literal opened by `'` or `"`.
    ///
    /// Only `\n` and `\t` are translated; any other escaped byte is kept
    /// as-is with the backslash dropped, so `\'` and `\\` work as expected.
    /// Strings never span lines: a missing closing quote ends the literal at
    /// the end of the line.
    pub(crate) fn lex_string(&mut self, cursor: &mut LineCursor<'_>) -> Result<()> {
        let Some(delimiter) = cursor.bump() else {
            return Ok(());
        };

        let mut content = Vec::new();
        let mut terminated = false;

        while let Some(byte) = cursor.bump() {
            if byte == delimiter {
                terminated = true;
                break;
            }
            if byte != b'\\' {
                content.push(byte);
                continue;
            }
            match cursor.bump() {
                Some(b'n') => content.push(b'\n'),
                Some(b't') => content.push(b'\t'),
                Some(escaped) => content.push(escaped),
                // A trailing backslash is kept literally.
                None => content.push(b'\\'),
            }
        }

        if !terminated {
            self.recover(LexerError::UnterminatedString {
                line: cursor.line(),
            })?;
        }

        self.push(Token::String(
            String::from_utf8_lossy(&content).into_owned(),
        ));
        Ok(())
    }
}
