//! Token definitions for Mython source code.
//!
//! A [`Token`] is a closed sum type: valued cases carry their payload,
//! everything else is a unit variant. [`TokenKind`] mirrors the cases
//! without payload so callers can ask "is this an `Id`?" without caring
//! which identifier it is.

use std::fmt;

/// A single lexical token.
///
/// Two tokens are equal when they are the same case and, for valued cases,
/// carry equal payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    // ===== Valued =====
    /// Integer literal. Decimal digits only, `i32` wide.
    Number(i32),
    /// Identifier that did not match a reserved word.
    Id(String),
    /// Quoted string literal, escapes already applied.
    String(String),
    /// Punctuation or operator character not classified otherwise.
    Char(char),

    // ===== Keywords =====
    /// `class`
    Class,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `def`
    Def,
    /// `print`
    Print,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// `None`
    None,
    /// `True`
    True,
    /// `False`
    False,

    // ===== Comparison =====
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<=`
    LessOrEq,
    /// `>=`
    GreaterOrEq,

    // ===== Structural =====
    /// End of a logical line.
    Newline,
    /// Indentation grew by one unit.
    Indent,
    /// Indentation shrank by one unit.
    Dedent,
    /// End of input. Always the last token, exactly once.
    Eof,
}

/// The case of a [`Token`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum TokenKind {
    Number,
    Id,
    String,
    Char,
    Class,
    Return,
    If,
    Else,
    Def,
    Print,
    And,
    Or,
    Not,
    None,
    True,
    False,
    Eq,
    NotEq,
    LessOrEq,
    GreaterOrEq,
    Newline,
    Indent,
    Dedent,
    Eof,
}

impl Token {
    /// Returns the case of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Id(_) => TokenKind::Id,
            Token::String(_) => TokenKind::String,
            Token::Char(_) => TokenKind::Char,
            Token::Class => TokenKind::Class,
            Token::Return => TokenKind::Return,
            Token::If => TokenKind::If,
            Token::Else => TokenKind::Else,
            Token::Def => TokenKind::Def,
            Token::Print => TokenKind::Print,
            Token::And => TokenKind::And,
            Token::Or => TokenKind::Or,
            Token::Not => TokenKind::Not,
            Token::None => TokenKind::None,
            Token::True => TokenKind::True,
            Token::False => TokenKind::False,
            Token::Eq => TokenKind::Eq,
            Token::NotEq => TokenKind::NotEq,
            Token::LessOrEq => TokenKind::LessOrEq,
            Token::GreaterOrEq => TokenKind::GreaterOrEq,
            Token::Newline => TokenKind::Newline,
            Token::Indent => TokenKind::Indent,
            Token::Dedent => TokenKind::Dedent,
            Token::Eof => TokenKind::Eof,
        }
    }

    /// Returns true if this token has the given case.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    /// Returns true for reserved words.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::Class
                | Token::Return
                | Token::If
                | Token::Else
                | Token::Def
                | Token::Print
                | Token::And
                | Token::Or
                | Token::Not
                | Token::None
                | Token::True
                | Token::False
        )
    }

    /// Returns true for `Newline`, `Indent`, `Dedent` and `Eof`.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Token::Newline | Token::Indent | Token::Dedent | Token::Eof
        )
    }
}

impl TokenKind {
    /// The case name, as used in diagnostics and token dumps.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Number => "Number",
            TokenKind::Id => "Id",
            TokenKind::String => "String",
            TokenKind::Char => "Char",
            TokenKind::Class => "Class",
            TokenKind::Return => "Return",
            TokenKind::If => "If",
            TokenKind::Else => "Else",
            TokenKind::Def => "Def",
            TokenKind::Print => "Print",
            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::Not => "Not",
            TokenKind::None => "None",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::Eq => "Eq",
            TokenKind::NotEq => "NotEq",
            TokenKind::LessOrEq => "LessOrEq",
            TokenKind::GreaterOrEq => "GreaterOrEq",
            TokenKind::Newline => "Newline",
            TokenKind::Indent => "Indent",
            TokenKind::Dedent => "Dedent",
            TokenKind::Eof => "Eof",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Token {
    /// Valued cases render as `Name{payload}`, the rest as `Name`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind().as_str();
        match self {
            Token::Number(value) => write!(f, "{}{{{}}}", name, value),
            Token::Id(value) | Token::String(value) => write!(f, "{}{{{}}}", name, value),
            Token::Char(value) => write!(f, "{}{{{}}}", name, value),
            _ => f.write_str(name),
        }
    }
}

/// Looks up a reserved word.
///
/// Returns `None` for anything that is not exactly one of the twelve
/// keywords; the match is case-sensitive (`none` is an identifier).
pub fn keyword_from_ident(ident: &str) -> Option<Token> {
    let token = match ident {
        "class" => Token::Class,
        "return" => Token::Return,
        "if" => Token::If,
        "else" => Token::Else,
        "def" => Token::Def,
        "print" => Token::Print,
        "or" => Token::Or,
        "None" => Token::None,
        "and" => Token::And,
        "not" => Token::Not,
        "True" => Token::True,
        "False" => Token::False,
        _ => return None,
    };
    Some(token)
}
