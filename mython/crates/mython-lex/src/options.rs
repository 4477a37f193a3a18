//! Lexer configuration.

/// Knobs for [`Lexer::with_options`](crate::Lexer::with_options).
///
/// The default is lenient: malformed input never fails construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LexerOptions {
    /// Reject unterminated strings, overflowing integers and stray bytes
    /// instead of recovering from them.
    pub strict: bool,
}

impl LexerOptions {
    /// Lenient options (same as `Default`).
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Strict options.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}
