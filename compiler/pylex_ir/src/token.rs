//! Token types produced by the pylex tokenizer.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use super::Span;

/// A classified run of source bytes.
///
/// Structural markers (`Indent`, `Dedent`, `IndentError`) have an empty span
/// anchored where the indentation change was detected.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// The source text covered by this token.
    ///
    /// Returns an empty string for zero-width markers or a span that does
    /// not fit `source`.
    pub fn lexeme<'src>(&self, source: &'src str) -> &'src str {
        source.get(self.span.to_range()).unwrap_or_default()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    crate::static_assert_size!(TokenKind, 1);
    // TokenKind (1 byte, padded to 4) + Span (8 bytes)
    crate::static_assert_size!(Token, 12);
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
