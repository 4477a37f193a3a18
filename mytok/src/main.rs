//! mytok - command-line front end for the Mython lexer.
//!
//! This is the main entry point for the mytok CLI application.
//! It uses clap for argument parsing and dispatches to the
//! command handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs, CheckCommand},
    common::OutputFormat,
    tokens::{run_tokens, TokensArgs, TokensCommand},
    traits::CommandDescription,
};
use config::Config;
use error::{MytokError, Result};

/// mytok - inspect Mython token streams
#[derive(Parser, Debug)]
#[command(name = "mytok")]
#[command(author = "Mython Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize Mython source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MYTOK_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MYTOK_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MYTOK_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the mytok CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = TokensCommand::description())]
    Tokens(TokensCommandArgs),

    #[command(about = CheckCommand::description())]
    Check(CheckCommandArgs),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommandArgs {
    /// Source file, or `-` for standard input
    input: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Fail on malformed literals and stray bytes
    #[arg(long)]
    strict: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommandArgs {
    /// Source files to check
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

/// Main entry point for the mytok CLI.
///
/// Errors are printed with their `Display` message and turn into a
/// non-zero exit status.
fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration, initializes logging, and dispatches to the
/// appropriate command handler.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token dumps on stdout stay machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MytokError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => run_tokens(TokensArgs {
            input: args.input,
            format: args.format,
            strict: args.strict,
            config,
        }),
        Commands::Check(args) => run_check(CheckArgs {
            inputs: args.inputs,
        }),
    }
}
