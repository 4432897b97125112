//! Human-readable renderings of a token list.
//!
//! Every view writes to any [`io::Write`] and ends with a line break, so
//! views printed back to back are separated by a blank line.

use std::io::{self, Write};

use bitflags::bitflags;
use pylex_ir::{LineIndex, TokenKind, TokenList};

bitflags! {
    /// Which views a session prints, always in declaration order.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ViewSet: u8 {
        /// The raw source text.
        const SOURCE = 1 << 0;
        /// Token kinds laid out by line and indentation level.
        const LAYOUT = 1 << 1;
        /// Compact `<lexeme , KIND>` pairs.
        const TOKENS = 1 << 2;
        /// Diagnostic tokens only.
        const ERRORS = 1 << 3;
    }
}

impl Default for ViewSet {
    fn default() -> Self {
        ViewSet::all()
    }
}

impl ViewSet {
    /// Parse a view name as accepted by `--view=`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "source" => Some(ViewSet::SOURCE),
            "layout" => Some(ViewSet::LAYOUT),
            "tokens" => Some(ViewSet::TOKENS),
            "errors" => Some(ViewSet::ERRORS),
            "all" => Some(ViewSet::all()),
            _ => None,
        }
    }

    /// Write each selected view in order.
    pub fn write<W: Write>(self, out: &mut W, source: &str, tokens: &TokenList) -> io::Result<()> {
        if self.contains(ViewSet::SOURCE) {
            write_source(out, source)?;
        }
        if self.contains(ViewSet::LAYOUT) {
            write_layout(out, tokens)?;
        }
        if self.contains(ViewSet::TOKENS) {
            write_lexemes(out, source, tokens)?;
        }
        if self.contains(ViewSet::ERRORS) {
            write_errors(out, source, tokens)?;
        }
        Ok(())
    }
}

const LEVEL_INDENT: &str = "    ";

fn pad<W: Write>(out: &mut W, level: usize) -> io::Result<()> {
    for _ in 0..level {
        out.write_all(LEVEL_INDENT.as_bytes())?;
    }
    Ok(())
}

/// Echo the source unchanged.
pub fn write_source<W: Write>(out: &mut W, source: &str) -> io::Result<()> {
    out.write_all(source.as_bytes())?;
    writeln!(out)
}

/// Dump token kinds, one logical line per output line, indented four
/// spaces per block level.
///
/// `SKIP` is suppressed. `INDENT` prints at the current level and then
/// deepens it; `DEDENT` first returns to the enclosing level and then
/// prints. Both sit on a line of their own.
pub fn write_layout<W: Write>(out: &mut W, tokens: &TokenList) -> io::Result<()> {
    let mut level = 0usize;
    let mut at_line_start = true;

    for token in tokens {
        match token.kind {
            TokenKind::Skip => {}
            TokenKind::Indent => {
                pad(out, level)?;
                level += 1;
                writeln!(out, "{}", token.kind)?;
                at_line_start = true;
            }
            TokenKind::Dedent => {
                level = level.saturating_sub(1);
                pad(out, level)?;
                writeln!(out, "{}", token.kind)?;
                at_line_start = true;
            }
            kind => {
                if at_line_start {
                    pad(out, level)?;
                    at_line_start = false;
                }
                write!(out, "{kind} ")?;
                if kind == TokenKind::Newline {
                    writeln!(out)?;
                    at_line_start = true;
                }
            }
        }
    }
    writeln!(out)
}

/// Write `<lexeme , KIND> ` for every token that carries source meaning.
///
/// Structural kinds (indentation markers, line breaks, joins and
/// whitespace) are left out.
pub fn write_lexemes<W: Write>(out: &mut W, source: &str, tokens: &TokenList) -> io::Result<()> {
    for token in tokens.iter().filter(|t| !t.kind.is_structural()) {
        write!(out, "<{} , {}> ", token.lexeme(source), token.kind)?;
    }
    writeln!(out)
}

/// Write one `< lexeme , KIND > at line:col` line per diagnostic token.
pub fn write_errors<W: Write>(out: &mut W, source: &str, tokens: &TokenList) -> io::Result<()> {
    let index = LineIndex::new(source);
    for token in tokens.errors() {
        let (line, col) = index.line_col(source, token.span.start);
        writeln!(
            out,
            "< {} , {} > at {line}:{col}",
            token.lexeme(source),
            token.kind
        )?;
    }
    writeln!(out)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
