//! Tokens command implementation.
//!
//! Dumps the token stream as text or JSON.

use std::io::Write;
use std::path::PathBuf;

use jslex_lex::{Lexer, Token};
use serde::Serialize;

use crate::commands::common::{read_source, warn_if_blank, TokenFormat};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source file, or `-` for standard input.
    pub input: PathBuf,
    /// Output format.
    pub format: TokenFormat,
    /// Leave whitespace and comments out.
    pub skip_trivia: bool,
}

/// One token in the JSON dump.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TokenRecord<'a> {
    /// Lowercase kind name.
    pub kind: &'static str,
    /// Exact source text.
    pub lexeme: &'a str,
    /// Start byte offset.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// 1-based line.
    pub line: u32,
    /// 1-based column, in characters.
    pub column: u32,
}

impl<'a> From<Token<'a>> for TokenRecord<'a> {
    fn from(token: Token<'a>) -> Self {
        Self {
            kind: token.kind.as_str(),
            lexeme: token.lexeme,
            start: token.span.start,
            end: token.span.end,
            line: token.span.line,
            column: token.span.column,
        }
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let file = read_source(&self.args.input)?;
        if warn_if_blank(&file) {
            return Ok(());
        }

        let tokens = collect_tokens(file.content(), self.args.skip_trivia);
        let mut stdout = std::io::stdout().lock();
        write_tokens(&mut stdout, &tokens, self.args.format)?;
        stdout.flush()?;
        Ok(())
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    crate::commands::traits::run::<TokensCommand>(args)
}

/// Lexes `source`, optionally dropping trivia.
pub fn collect_tokens(source: &str, skip_trivia: bool) -> Vec<Token<'_>> {
    Lexer::new(source)
        .filter(|token| !(skip_trivia && token.is_trivia()))
        .collect()
}

/// Writes `tokens` to `out` in `format`.
pub fn write_tokens(out: &mut impl Write, tokens: &[Token<'_>], format: TokenFormat) -> Result<()> {
    match format {
        TokenFormat::Text => {
            for token in tokens {
                writeln!(
                    out,
                    "{}:{}  {:<11}  {:?}",
                    token.span.line, token.span.column, token.kind, token.lexeme
                )?;
            }
        }
        TokenFormat::Json => {
            let records: Vec<TokenRecord<'_>> =
                tokens.iter().copied().map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
