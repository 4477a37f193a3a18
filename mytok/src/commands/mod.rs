//! Command modules for the mytok CLI.
//!
//! Each subcommand lives in its own file and implements the [`traits::Command`]
//! trait.

pub mod common;
pub mod traits;

pub mod check;
pub mod tokens;
