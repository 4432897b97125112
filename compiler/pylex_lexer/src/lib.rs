//! Multi-pass tokenizer for an indentation-sensitive, Python-like language.
//!
//! Every source byte starts unresolved. Passes run in a fixed order and
//! each may only claim bytes no earlier pass took:
//!
//! 1. shield patterns (comments, strings, explicit joins)
//! 2. bracket-depth implicit joins
//! 3. line patterns (newlines)
//! 4. indentation tracking (markers and tab errors)
//! 5. body patterns (keywords, names, numbers, punctuation, whitespace)
//! 6. error sweep
//!
//! The assembler then run-length encodes the byte tags into a
//! [`TokenList`]. Tokenization is total: any input produces a token list
//! whose non-empty spans partition the source.

mod assemble;
mod indent;
mod joins;
pub mod patterns;
mod tagger;

use pylex_ir::TokenList;
use tracing::debug;

pub use indent::TAB_WIDTH;
pub use patterns::{
    Matcher, Pattern, PatternTable, Phase, TableError, DELIMITERS, KEYWORDS, OPERATORS,
};

use tagger::TagBuffer;

/// A tokenizer bound to one pattern table.
///
/// Holds no per-run state, so one `Lexer` can tokenize any number of
/// sources.
#[derive(Clone, Copy, Debug)]
pub struct Lexer<'t> {
    table: &'t PatternTable,
}

impl<'t> Lexer<'t> {
    pub fn new(table: &'t PatternTable) -> Self {
        Lexer { table }
    }

    /// Tokenize `source` into a complete token list.
    ///
    /// # Panics
    /// Token spans are `u32` byte offsets, so `source` must be at most
    /// `u32::MAX` bytes long. `pylexc::load_source` refuses larger files.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn tokenize(&self, source: &str) -> TokenList {
        let mut buf = TagBuffer::new(source);

        tagger::tag_all(self.table.phase(Phase::Shield), &mut buf);
        joins::classify_joins(&mut buf);
        tagger::tag_all(self.table.phase(Phase::Line), &mut buf);
        let markers = indent::track_indentation(&mut buf);
        tagger::tag_all(self.table.phase(Phase::Body), &mut buf);
        assemble::sweep_errors(&mut buf);

        let tokens = assemble::assemble(&buf, markers);
        debug!(
            tokens = tokens.len(),
            errors = tokens.errors().count(),
            "tokenized"
        );
        tokens
    }
}

/// Tokenize `source` with `table`.
///
/// Shorthand for `Lexer::new(table).tokenize(source)`, with the same
/// `u32::MAX` byte limit on `source`.
pub fn tokenize(source: &str, table: &PatternTable) -> TokenList {
    Lexer::new(table).tokenize(source)
}
