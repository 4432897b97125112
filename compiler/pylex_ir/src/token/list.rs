//! Immutable token sequence.

use super::{Token, TokenKind};

/// The ordered output of one tokenization.
///
/// Built once by the assembler and never mutated afterwards. Spans of
/// non-empty tokens partition the source in order; zero-width markers sit
/// between them at their anchor offsets.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create from an already ordered Vec of tokens.
    #[inline]
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Kinds of all tokens, in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Tokens whose kind is one of the diagnostic kinds.
    pub fn errors(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.kind.is_error())
    }

    /// Returns `true` if any token is a diagnostic.
    pub fn has_errors(&self) -> bool {
        self.tokens.iter().any(|t| t.kind.is_error())
    }

    /// Number of tokens of the given kind.
    pub fn count(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|t| t.kind == kind).count()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
