//! Tokens command implementation.
//!
//! Tokenizes one source file (or standard input) and prints the token
//! stream.

use std::io::Write;
use std::path::PathBuf;

use crate::commands::common::{lex_path, write_tokens, OutputFormat};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source file, or `-` for standard input.
    pub input: PathBuf,
    /// Output format; falls back to the configured one.
    pub format: Option<OutputFormat>,
    /// Force strict lexing regardless of configuration.
    pub strict: bool,
    /// Effective configuration.
    pub config: Config,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Format after applying the CLI override.
    pub fn effective_format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.args.config.output.format)
    }

    /// Tokenizes the input and writes the dump to `out`.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<usize> {
        let mut options = self.args.config.lexer;
        options.strict |= self.args.strict;

        let lexer = lex_path(&self.args.input, options)?;
        write_tokens(out, lexer.tokens(), self.effective_format())?;
        Ok(lexer.tokens().len())
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = usize;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let count = self.run_to(&mut out)?;
        out.flush()?;
        tracing::info!(tokens = count, "{} finished", Self::name());
        Ok(count)
    }

    fn name() -> &'static str {
        "tokens"
    }
}

impl CommandDescription for TokensCommand {
    fn description() -> &'static str {
        "Print the token stream of a Mython source file"
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    TokensCommand::new(args).execute().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MytokError;
    use mython_lex::LexerError;
    use tempfile::TempDir;

    fn args_for(path: PathBuf) -> TokensArgs {
        TokensArgs {
            input: path,
            format: None,
            strict: false,
            config: Config::default(),
        }
    }

    fn write_source(dir: &TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("prog.my");
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_text_dump() {
        let dir = TempDir::new().unwrap();
        let command = TokensCommand::new(args_for(write_source(&dir, "x = 1\n")));

        let mut out = Vec::new();
        let count = command.run_to(&mut out).unwrap();

        assert_eq!(count, 5);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Id{x}\nChar{=}\nNumber{1}\nNewline\nEof\n"
        );
    }

    #[test]
    fn test_format_override() {
        let dir = TempDir::new().unwrap();
        let mut args = args_for(write_source(&dir, "print 1\n"));
        args.config.output.format = OutputFormat::Text;
        args.format = Some(OutputFormat::Json);
        let command = TokensCommand::new(args);
        assert_eq!(command.effective_format(), OutputFormat::Json);

        let mut out = Vec::new();
        command.run_to(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_strict_flag() {
        let dir = TempDir::new().unwrap();
        let mut args = args_for(write_source(&dir, "s = 'open\n"));
        args.strict = true;

        let err = TokensCommand::new(args).run_to(&mut Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            MytokError::Lexer(LexerError::UnterminatedString { line: 1 })
        ));
    }

    #[test]
    fn test_lenient_by_default() {
        let dir = TempDir::new().unwrap();
        let command = TokensCommand::new(args_for(write_source(&dir, "s = 'open\n")));
        assert!(command.run_to(&mut Vec::new()).is_ok());
    }
}
