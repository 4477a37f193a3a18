//! Lexer module.
//!
//! The lexer is split into small focused pieces:
//! - `core` - the `Lexer` itself: construction and the token cursor
//! - `driver` - line loop and indentation tracking
//! - `line` - dispatch over one logical line
//! - `identifier` - identifier and keyword lexing
//! - `number` - integer literal lexing
//! - `string` - string literal lexing

mod core;
mod driver;
mod identifier;
mod line;
mod number;
mod string;

pub use self::core::Lexer;
