//! jshl - JavaScript token highlighter and checker.
//!
//! This is the main entry point for the jshl CLI application. It uses clap
//! for argument parsing and dispatches to the command handlers, which all
//! drive the `jslex-lex` lexer.

mod commands;
mod config;
mod error;
mod style;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::TokenFormat, run_check, run_highlight, run_tokens, CheckArgs, HighlightArgs,
    TokensArgs,
};
use config::Config;
use error::{JshlError, Result};

/// jshl - Highlight, dump and check JavaScript tokens
///
/// Every command runs the same lossless lexer: malformed input never stops
/// it, it shows up as error tokens instead.
#[derive(Parser, Debug)]
#[command(name = "jshl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Highlight, dump and check JavaScript tokens", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "JSHL_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "JSHL_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "JSHL_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the jshl CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a source file with syntax highlighting
    ///
    /// Every token is drawn in the style of its kind. With colors disabled
    /// the output is identical to the input.
    Highlight(HighlightCommand),

    /// Dump the token stream
    ///
    /// Prints the position, kind and exact text of every token, as text or
    /// as a JSON array.
    Tokens(TokensCommand),

    /// Report lexical errors
    ///
    /// Lexes each file and prints every error token with its location and
    /// a source snippet. Exits with status 1 if any error is found.
    Check(CheckCommand),
}

/// Arguments for the highlight subcommand.
#[derive(Parser, Debug)]
struct HighlightCommand {
    /// Source file, or `-` for standard input
    input: PathBuf,

    /// Prefix every line with its line number
    #[arg(short = 'n', long)]
    line_numbers: bool,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file, or `-` for standard input
    input: PathBuf,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Leave whitespace and comments out of the dump
    #[arg(long)]
    skip_trivia: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Files to check
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Number of parallel jobs
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    jobs: Option<u16>,
}

/// Main entry point for the jshl CLI.
///
/// Errors are printed as `error: <message>` and exit with status 1.
fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parses arguments, initializes logging, loads configuration and runs the
/// selected command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    config.validate()?;

    execute_command(cli.command, cli.no_color, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that command output on stdout stays clean.
/// `RUST_LOG`, when set, takes precedence over `--verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| JshlError::Logging(e.to_string()))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command. Flags override configuration values.
fn execute_command(command: Commands, no_color: bool, config: Config) -> Result<()> {
    match command {
        Commands::Highlight(args) => execute_highlight(args, no_color, config),
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Check(args) => execute_check(args, config),
    }
}

/// Execute the highlight command.
fn execute_highlight(args: HighlightCommand, no_color: bool, config: Config) -> Result<()> {
    run_highlight(HighlightArgs {
        input: args.input,
        line_numbers: args.line_numbers || config.highlight.line_numbers,
        color: !no_color && config.highlight.color,
    })
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, config: Config) -> Result<()> {
    let format = args
        .format
        .as_deref()
        .unwrap_or(&config.tokens.format)
        .parse::<TokenFormat>()?;

    run_tokens(TokensArgs {
        input: args.input,
        format,
        skip_trivia: args.skip_trivia || config.tokens.skip_trivia,
    })
}

/// Execute the check command.
fn execute_check(args: CheckCommand, config: Config) -> Result<()> {
    run_check(CheckArgs {
        inputs: args.inputs,
        jobs: args.jobs.map_or(config.check.jobs, usize::from),
    })
}
