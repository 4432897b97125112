//! Ordered pattern table driving the buffer tagger.
//!
//! Each [`Pattern`] pairs a [`TokenKind`] with a [`Matcher`]. Table order is
//! classification priority: an earlier pattern claims bytes first and a
//! later pattern can never overwrite them. Patterns are grouped into
//! [`Phase`]s so the lexer can run the join classifier and the indentation
//! pass between them.
//!
//! The table is built by the caller and owned by the caller. Nothing here
//! is cached in a static.

use std::ops::Range;

use pylex_ir::TokenKind;
use regex::Regex;
use thiserror::Error;

/// Where a pattern runs relative to the non-pattern passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Before the join classifier. Regions claimed here (comments, strings,
    /// continuations) shield their contents from every later pass.
    Shield,
    /// After the join classifier, before indentation tracking.
    Line,
    /// After indentation tracking.
    Body,
}

/// Finds the leftmost occurrence of a grammar at or after a byte offset.
#[derive(Clone, Debug)]
pub enum Matcher {
    /// A compiled regular expression. Searching uses `find_at`, so word
    /// boundary assertions see the text before the cursor.
    Regex(Regex),
    /// A maximal-munch punctuation scanner shared by several patterns.
    ///
    /// `munch` splits punctuation into runs the same way for every pattern
    /// that shares it; the matcher yields the first run at or after the
    /// cursor whose text is in `accept`. Sharing the split keeps `+=` from
    /// being claimed as `+` by an earlier pattern.
    Lexeme {
        munch: Regex,
        accept: &'static [&'static str],
    },
    /// A string-literal regex that refuses an empty `""` or `''` followed by
    /// a third quote of the same kind.
    ///
    /// Such a pair is the opener of a triple-quoted string that never
    /// closes; the search resumes past the third quote so the opener stays
    /// unclaimed for the unterminated-string pattern.
    Quoted(Regex),
}

impl Matcher {
    /// Leftmost match in `text` starting at or after `start`.
    pub fn find_at(&self, text: &str, start: usize) -> Option<Range<usize>> {
        match self {
            Matcher::Regex(re) => re.find_at(text, start).map(|m| m.range()),
            Matcher::Lexeme { munch, accept } => {
                let mut pos = start;
                while let Some(m) = munch.find_at(text, pos) {
                    if accept.contains(&m.as_str()) {
                        return Some(m.range());
                    }
                    pos = if m.is_empty() {
                        next_char_boundary(text, m.end())
                    } else {
                        m.end()
                    };
                    if pos > text.len() {
                        break;
                    }
                }
                None
            }
            Matcher::Quoted(re) => {
                let mut pos = start;
                while let Some(m) = re.find_at(text, pos) {
                    match open_triple_quote_end(text, m.range()) {
                        Some(resume) => pos = resume,
                        None => return Some(m.range()),
                    }
                    if pos > text.len() {
                        break;
                    }
                }
                None
            }
        }
    }
}

/// If `range` is an empty quote pair (after any prefix letters) and the
/// same quote follows it, the offset just past that third quote.
fn open_triple_quote_end(text: &str, range: Range<usize>) -> Option<usize> {
    let body = text[range.clone()].trim_start_matches(|c: char| c.is_ascii_alphabetic());
    let quote = match body {
        "\"\"" => '"',
        "''" => '\'',
        _ => return None,
    };
    text[range.end..].starts_with(quote).then_some(range.end + 1)
}

/// First char boundary strictly after `pos` (or `text.len() + 1` past the end).
pub(crate) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text.get(pos..)
        .and_then(|rest| rest.chars().next())
        .map_or(pos + 1, |c| pos + c.len_utf8())
}

/// One entry of the pattern table.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub kind: TokenKind,
    pub phase: Phase,
    pub matcher: Matcher,
    /// Adjacent claims of a mergeable pattern fold into one token.
    pub mergeable: bool,
}

impl Pattern {
    /// Compile a regex pattern.
    pub fn regex(kind: TokenKind, phase: Phase, pattern: &str) -> Result<Self, TableError> {
        let re = Regex::new(pattern).map_err(|source| TableError::InvalidRegex { kind, source })?;
        Ok(Pattern {
            kind,
            phase,
            matcher: Matcher::Regex(re),
            mergeable: false,
        })
    }

    /// Compile a string-literal pattern that leaves unterminated
    /// triple-quote openers alone.
    pub fn quoted(kind: TokenKind, phase: Phase, pattern: &str) -> Result<Self, TableError> {
        let re = Regex::new(pattern).map_err(|source| TableError::InvalidRegex { kind, source })?;
        Ok(Pattern {
            kind,
            phase,
            matcher: Matcher::Quoted(re),
            mergeable: false,
        })
    }

    /// A pattern accepting a fixed lexeme set out of a shared munch regex.
    pub fn lexemes(
        kind: TokenKind,
        phase: Phase,
        munch: &Regex,
        accept: &'static [&'static str],
    ) -> Self {
        Pattern {
            kind,
            phase,
            matcher: Matcher::Lexeme {
                munch: munch.clone(),
                accept,
            },
            mergeable: false,
        }
    }

    /// Mark the pattern's claims as foldable into their neighbours.
    #[must_use]
    pub fn mergeable(mut self) -> Self {
        self.mergeable = true;
        self
    }
}

/// Errors building a [`PatternTable`].
#[derive(Debug, Error)]
pub enum TableError {
    #[error("invalid {kind} pattern: {source}")]
    InvalidRegex {
        kind: TokenKind,
        #[source]
        source: regex::Error,
    },
    #[error("{kind} pattern in phase {phase:?} is listed after a {previous:?} pattern")]
    PhaseOrder {
        kind: TokenKind,
        phase: Phase,
        previous: Phase,
    },
    #[error("{kind} is a structural marker and cannot be matched by a pattern")]
    MarkerKind { kind: TokenKind },
}

/// Immutable, ordered list of patterns.
#[derive(Clone, Debug)]
pub struct PatternTable {
    patterns: Vec<Pattern>,
}

impl PatternTable {
    /// Build a table from patterns in priority order.
    ///
    /// Phases must be non-decreasing, and zero-width marker kinds (which
    /// only the indentation pass emits) cannot be pattern kinds.
    pub fn new(patterns: Vec<Pattern>) -> Result<Self, TableError> {
        let mut previous = Phase::Shield;
        for pattern in &patterns {
            if pattern.kind.is_zero_width() {
                return Err(TableError::MarkerKind { kind: pattern.kind });
            }
            if pattern.phase < previous {
                return Err(TableError::PhaseOrder {
                    kind: pattern.kind,
                    phase: pattern.phase,
                    previous,
                });
            }
            previous = pattern.phase;
        }
        Ok(PatternTable { patterns })
    }

    /// The standard table for the Python-like source language.
    pub fn standard() -> Result<Self, TableError> {
        let punctuation = Regex::new(PUNCTUATION).map_err(|source| TableError::InvalidRegex {
            kind: TokenKind::Operator,
            source,
        })?;

        Self::new(vec![
            Pattern::regex(TokenKind::Comment, Phase::Shield, COMMENT)?,
            Pattern::quoted(TokenKind::StringLiteral, Phase::Shield, &string_literal())?,
            Pattern::regex(TokenKind::Error, Phase::Shield, &unterminated_string())?,
            Pattern::regex(TokenKind::ExplicitJoin, Phase::Shield, EXPLICIT_JOIN)?,
            Pattern::regex(TokenKind::JoinError, Phase::Shield, JOIN_ERROR)?,
            Pattern::regex(TokenKind::Newline, Phase::Line, NEWLINE)?,
            Pattern::regex(TokenKind::Keyword, Phase::Body, &keyword())?,
            Pattern::regex(TokenKind::Identifier, Phase::Body, IDENTIFIER)?,
            Pattern::regex(TokenKind::FloatLiteral, Phase::Body, &float_literal())?,
            Pattern::regex(TokenKind::IntLiteral, Phase::Body, INT_LITERAL)?,
            Pattern::lexemes(TokenKind::Operator, Phase::Body, &punctuation, OPERATORS),
            Pattern::lexemes(TokenKind::Delimiter, Phase::Body, &punctuation, DELIMITERS),
            Pattern::regex(TokenKind::Skip, Phase::Body, WHITESPACE)?.mergeable(),
        ])
    }

    /// Patterns of one phase, in table order.
    pub fn phase(&self, phase: Phase) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter().filter(move |p| p.phase == phase)
    }

    #[inline]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

/// Reserved words, always tagged `KEYWORD` even though they are also valid
/// identifiers.
pub const KEYWORDS: [&str; 35] = [
    "False", "await", "else", "import", "pass", "None", "break", "except", "in", "raise", "True",
    "class", "finally", "is", "return", "and", "continue", "lambda", "try", "as", "def", "from",
    "nonlocal", "while", "assert", "del", "global", "for", "async", "elif", "if", "or", "not",
    "with", "yield",
];

pub const OPERATORS: &[&str] = &[
    "+", "-", "*", "**", "/", "//", "%", "@", "<<", ">>", "&", "|", "^", "~", ":=", "<", ">", "<=",
    ">=", "==", "!=",
];

// `@` is listed in both sets; the operator pattern runs first and wins.
pub const DELIMITERS: &[&str] = &[
    "(", ")", "[", "]", "{", "}", ",", ":", ".", ";", "@", "=", "->", "+=", "-=", "*=", "/=", "//=",
    "%=", "@=", "&=", "|=", "^=", ">>=", "<<=", "**=",
];

// Longest alternatives first: the regex engine is leftmost-first.
const PUNCTUATION: &str =
    r"\*\*=|//=|>>=|<<=|->|:=|\*\*|//|<<|>>|<=|>=|==|!=|[-+*/%@&|^]=|[-+*/%@&|^~<>()\[\]{},:.;=]";

const COMMENT: &str = r"#[^\r\n]*";
const EXPLICIT_JOIN: &str = r"\\\r?\n";
const JOIN_ERROR: &str = r"\\[^\r\n]*";
const NEWLINE: &str = r"\r?\n";
const IDENTIFIER: &str = r"\b[A-Za-z_][A-Za-z0-9_]*\b";
const INT_LITERAL: &str =
    r"\b(?:0[bB](?:_?[01])+|0[oO](?:_?[0-7])+|0[xX](?:_?[0-9a-fA-F])+|[1-9](?:_?[0-9])*|0(?:_?0)*)\b";
const WHITESPACE: &str = r"[ \t\x0C]";

const STRING_PREFIX: &str = r"(?:\b(?:[rR][bBfF]?|[bBfF][rR]?|[uU]))?";
const ESCAPE: &str = r"\\(?:\r\n|(?s:.))";

fn keyword() -> String {
    format!(r"\b(?:{})\b", KEYWORDS.join("|"))
}

fn string_literal() -> String {
    let triple = |q: &str| {
        let plain = format!(r"[^{q}\\]");
        format!(
            "{q}{q}{q}(?:{plain}|{ESCAPE}|{q}(?:{plain}|{ESCAPE})|{q}{q}(?:{plain}|{ESCAPE}))*{q}{q}{q}"
        )
    };
    let single = |q: &str| format!(r"{q}(?:[^{q}\\\r\n]|{ESCAPE})*{q}");
    format!(
        "{STRING_PREFIX}(?:{}|{}|{}|{})",
        triple("\""),
        triple("'"),
        single("\""),
        single("'")
    )
}

/// An opening quote with no closing partner, up to the next quote
/// character (any line for triple quotes, the current line otherwise).
fn unterminated_string() -> String {
    format!(
        r#"{STRING_PREFIX}(?:(?:"""|''')(?:[^"'\\]|{ESCAPE})*|["'](?:[^"'\\\r\n]|{ESCAPE})*)"#
    )
}

fn float_literal() -> String {
    let digits = r"[0-9](?:_?[0-9])*";
    let exponent = format!(r"[eE][+-]?{digits}");
    format!(
        r"\b{digits}\.(?:{digits})?(?:{exponent})?|\.{digits}(?:{exponent})?|\b{digits}{exponent}"
    )
}
