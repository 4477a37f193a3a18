//! Byte cursor for scanning a single source line.
//!
//! The lexer works one physical line at a time. `LineCursor` walks the
//! bytes of that line and gives the scanners an explicit one-byte lookahead
//! (`current` / `peek`) instead of pushing characters back into a stream.
//! A byte is "pushed back" simply by not advancing past it.

/// A cursor over the bytes of one source line.
///
/// # Example
///
/// ```
/// use mython_lex::cursor::LineCursor;
///
/// let mut cursor = LineCursor::new(b"x = 1", 1);
///
/// assert_eq!(cursor.current(), Some(b'x'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some(b' '));
/// assert_eq!(cursor.peek(1), Some(b'='));
/// ```
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    /// Bytes of the line, without the trailing `\n`.
    bytes: &'a [u8],

    /// Current byte position in the line.
    position: usize,

    /// 1-based number of this line in the source.
    line: u32,
}

impl<'a> LineCursor<'a> {
    /// Creates a cursor at the start of `bytes`.
    ///
    /// `line` is the 1-based source line number, used only for diagnostics.
    pub fn new(bytes: &'a [u8], line: u32) -> Self {
        Self {
            bytes,
            position: 0,
            line,
        }
    }

    /// Returns the byte under the cursor, or `None` at the end of the line.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.peek(0)
    }

    /// Returns the byte `offset` positions ahead (0 = current).
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.position + offset).copied()
    }

    /// Moves past the current byte. Does nothing at the end of the line.
    #[inline]
    pub fn advance(&mut self) {
        if self.position < self.bytes.len() {
            self.position += 1;
        }
    }

    /// Returns the current byte and moves past it.
    ///
    /// ```
    /// use mython_lex::cursor::LineCursor;
    ///
    /// let mut cursor = LineCursor::new(b"ab", 1);
    /// assert_eq!(cursor.bump(), Some(b'a'));
    /// assert_eq!(cursor.bump(), Some(b'b'));
    /// assert_eq!(cursor.bump(), None);
    /// ```
    #[inline]
    pub fn bump(&mut self) -> Option<u8> {
        let byte = self.current()?;
        self.position += 1;
        Some(byte)
    }

    /// Consumes the current byte if it equals `expected`.
    pub fn match_byte(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Returns true when every byte has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.bytes.len()
    }

    /// Moves the cursor to the end of the line.
    pub fn skip_rest(&mut self) {
        self.position = self.bytes.len();
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the 1-based source line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the bytes between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.bytes[start..self.position]
    }

    /// Returns the unconsumed bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.position..]
    }
}
