//! Token kind vocabulary.

use std::fmt;

/// Classification assigned to every run of source bytes.
///
/// The printed names returned by [`TokenKind::name`] are part of the
/// external interface and must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    /// Horizontal whitespace that carries no meaning.
    Skip,
    /// Backslash immediately followed by a line terminator.
    ExplicitJoin,
    /// Line terminator inside an open bracket.
    ImplicitJoin,
    /// Line terminator ending a logical line.
    Newline,
    Comment,
    Indent,
    Dedent,
    Keyword,
    Identifier,
    StringLiteral,
    IntLiteral,
    FloatLiteral,
    Operator,
    Delimiter,
    /// Backslash followed by anything other than a line terminator.
    JoinError,
    /// Indentation width that matches no enclosing level.
    IndentError,
    /// Tab whose column advance disagrees with the previous tab.
    TabError,
    /// Bytes matched by no pattern.
    Error,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 18] = [
        TokenKind::Skip,
        TokenKind::ExplicitJoin,
        TokenKind::ImplicitJoin,
        TokenKind::Newline,
        TokenKind::Comment,
        TokenKind::Indent,
        TokenKind::Dedent,
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::StringLiteral,
        TokenKind::IntLiteral,
        TokenKind::FloatLiteral,
        TokenKind::Operator,
        TokenKind::Delimiter,
        TokenKind::JoinError,
        TokenKind::IndentError,
        TokenKind::TabError,
        TokenKind::Error,
    ];

    /// The consumer-facing name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Skip => "SKIP",
            TokenKind::ExplicitJoin => "EXPLICIT_JOIN",
            TokenKind::ImplicitJoin => "IMPLICIT_JOIN",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Comment => "COMMENT",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::IntLiteral => "INT_NUMBER_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_NUMBER_LITERAL",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::JoinError => "JOIN_ERROR",
            TokenKind::IndentError => "INDENT_ERROR",
            TokenKind::TabError => "TAB_ERROR",
            TokenKind::Error => "ERROR",
        }
    }

    /// Look up a kind by its consumer-facing name.
    pub fn from_name(name: &str) -> Option<TokenKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Returns `true` for the four diagnostic kinds.
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(
            self,
            TokenKind::JoinError | TokenKind::IndentError | TokenKind::TabError | TokenKind::Error
        )
    }

    /// Returns `true` for kinds that shape lines and blocks but carry no
    /// lexeme of interest: indentation markers, line terminators, joins and
    /// whitespace.
    #[inline]
    pub const fn is_structural(self) -> bool {
        matches!(
            self,
            TokenKind::Indent
                | TokenKind::Dedent
                | TokenKind::Newline
                | TokenKind::Skip
                | TokenKind::ExplicitJoin
                | TokenKind::ImplicitJoin
        )
    }

    /// Returns `true` for kinds that are always emitted with an empty span.
    #[inline]
    pub const fn is_zero_width(self) -> bool {
        matches!(
            self,
            TokenKind::Indent | TokenKind::Dedent | TokenKind::IndentError
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
