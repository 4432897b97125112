use super::*;
use crate::Span;
use pretty_assertions::assert_eq;

#[test]
fn names_are_unique_and_round_trip() {
    let mut seen = std::collections::HashSet::new();
    for kind in TokenKind::ALL {
        assert!(seen.insert(kind.name()), "duplicate name {}", kind.name());
        assert_eq!(TokenKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(seen.len(), 18);
    assert_eq!(TokenKind::from_name("UNDEFINED"), None);
}

#[test]
fn literal_names_carry_number_suffix() {
    assert_eq!(TokenKind::IntLiteral.name(), "INT_NUMBER_LITERAL");
    assert_eq!(TokenKind::FloatLiteral.name(), "FLOAT_NUMBER_LITERAL");
    assert_eq!(TokenKind::StringLiteral.to_string(), "STRING_LITERAL");
}

#[test]
fn error_kinds() {
    let errors: Vec<_> = TokenKind::ALL
        .into_iter()
        .filter(|k| k.is_error())
        .collect();
    assert_eq!(
        errors,
        vec![
            TokenKind::JoinError,
            TokenKind::IndentError,
            TokenKind::TabError,
            TokenKind::Error,
        ]
    );
}

#[test]
fn structural_kinds() {
    let structural: Vec<_> = TokenKind::ALL
        .into_iter()
        .filter(|k| k.is_structural())
        .collect();
    assert_eq!(
        structural,
        vec![
            TokenKind::Skip,
            TokenKind::ExplicitJoin,
            TokenKind::ImplicitJoin,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Dedent,
        ]
    );
}

#[test]
fn lexeme_slices_source() {
    let source = "def f";
    let tok = Token::new(TokenKind::Keyword, Span::new(0, 3));
    assert_eq!(tok.lexeme(source), "def");

    let marker = Token::new(TokenKind::Indent, Span::point(4));
    assert_eq!(marker.lexeme(source), "");

    let out_of_range = Token::new(TokenKind::Error, Span::new(4, 40));
    assert_eq!(out_of_range.lexeme(source), "");
}

#[test]
fn list_queries() {
    let list = TokenList::from_vec(vec![
        Token::new(TokenKind::Identifier, Span::new(0, 1)),
        Token::new(TokenKind::Error, Span::new(1, 2)),
        Token::new(TokenKind::Newline, Span::new(2, 3)),
        Token::new(TokenKind::Identifier, Span::new(3, 4)),
    ]);
    assert_eq!(list.len(), 4);
    assert!(!list.is_empty());
    assert!(list.has_errors());
    assert_eq!(list.count(TokenKind::Identifier), 2);
    assert_eq!(list.errors().count(), 1);
    assert_eq!(list.get(1).unwrap().kind, TokenKind::Error);
    assert_eq!(list[2].kind, TokenKind::Newline);
    assert_eq!(
        list.kinds(),
        vec![
            TokenKind::Identifier,
            TokenKind::Error,
            TokenKind::Newline,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn token_debug_format() {
    let tok = Token::new(TokenKind::Comment, Span::new(4, 9));
    assert_eq!(format!("{tok:?}"), "Comment @ 4..9");
}
