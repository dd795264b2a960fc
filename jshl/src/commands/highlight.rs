//! Highlight command implementation.
//!
//! Prints the source with every token drawn in the style of its kind. With
//! colors off and no gutter the output is the input, byte for byte.

use std::io::Write;
use std::path::PathBuf;

use jslex_lex::Lexer;

use crate::commands::common::{read_source, warn_if_blank};
use crate::commands::traits::Command;
use crate::error::Result;
use crate::style::{style_for, TokenStyle};

/// Arguments for the highlight command.
#[derive(Debug, Clone)]
pub struct HighlightArgs {
    /// Source file, or `-` for standard input.
    pub input: PathBuf,
    /// Prefix every line with its number.
    pub line_numbers: bool,
    /// Emit ANSI colors.
    pub color: bool,
}

/// Highlight command handler.
pub struct HighlightCommand {
    args: HighlightArgs,
}

impl Command for HighlightCommand {
    type Args = HighlightArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let file = read_source(&self.args.input)?;
        if warn_if_blank(&file) {
            return Ok(());
        }

        let rendered = render(
            file.content(),
            self.args.color,
            self.args.line_numbers.then(|| file.line_count()),
        );

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn name() -> &'static str {
        "highlight"
    }
}

/// Run the highlight command.
pub fn run_highlight(args: HighlightArgs) -> Result<()> {
    crate::commands::traits::run::<HighlightCommand>(args)
}

/// Renders `source` token by token.
///
/// `line_count` switches on the line-number gutter; its digit count sets the
/// gutter width. Multi-line tokens are split at line breaks so that every
/// line gets its own gutter and escape codes never span a line break.
pub fn render(source: &str, color: bool, line_count: Option<usize>) -> String {
    let mut out = String::with_capacity(source.len() * if color { 2 } else { 1 });
    let gutter_width = line_count.map(|count| count.to_string().len());
    let mut line = 1;
    let mut at_line_start = true;

    for token in Lexer::new(source) {
        let style = if color { style_for(token.kind) } else { TokenStyle::PLAIN };

        for piece in token.lexeme.split_inclusive('\n') {
            if let (true, Some(width)) = (at_line_start, gutter_width) {
                push_gutter(&mut out, line, width, color);
            }

            match piece.strip_suffix('\n') {
                Some(text) => {
                    style.paint_into(text, &mut out);
                    out.push('\n');
                    line += 1;
                    at_line_start = true;
                }
                None => {
                    style.paint_into(piece, &mut out);
                    at_line_start = false;
                }
            }
        }
    }

    out
}

fn push_gutter(out: &mut String, line: usize, width: usize, color: bool) {
    let gutter = format!("{:>width$} | ", line);
    if color {
        TokenStyle {
            italic: false,
            ..style_for(jslex_lex::TokenKind::Comment)
        }
        .paint_into(&gutter, out);
    } else {
        out.push_str(&gutter);
    }
}
