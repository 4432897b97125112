use super::*;
use crate::patterns::Phase;
use pretty_assertions::assert_eq;

fn pattern(kind: TokenKind, re: &str) -> Pattern {
    Pattern::regex(kind, Phase::Body, re).unwrap()
}

fn tags(buf: &TagBuffer<'_>) -> Vec<Option<TokenKind>> {
    (0..buf.len()).map(|i| buf.get(i)).collect()
}

#[test]
fn new_buffer_is_unresolved() {
    let buf = TagBuffer::new("abc");
    assert_eq!(buf.len(), 3);
    assert!((0..3).all(|i| buf.is_unresolved(i)));
    assert!(!buf.is_unresolved(3));
    assert_eq!(buf.get(3), None);
}

#[test]
fn claim_is_write_once() {
    let mut buf = TagBuffer::new("abcd");
    assert!(buf.claim(1..3, TokenKind::Identifier, false));
    assert!(!buf.claim(0..2, TokenKind::Keyword, false));
    assert!(!buf.claim(2..4, TokenKind::Keyword, false));
    assert_eq!(
        tags(&buf),
        vec![None, Some(TokenKind::Identifier), Some(TokenKind::Identifier), None]
    );
    assert!(buf.is_boundary(3));
    assert!(!buf.is_boundary(2));
}

#[test]
fn claim_out_of_range_fails() {
    let mut buf = TagBuffer::new("ab");
    assert!(!buf.claim(1..5, TokenKind::Error, false));
    assert!(buf.is_unresolved(1));
}

#[test]
fn mergeable_claims_record_no_boundary() {
    let mut buf = TagBuffer::new("  ");
    assert!(buf.claim(0..1, TokenKind::Skip, true));
    assert!(buf.claim(1..2, TokenKind::Skip, true));
    assert!(!buf.is_boundary(1));
    assert!(!buf.is_boundary(2));
}

#[test]
fn earlier_pattern_wins() {
    let patterns = [
        pattern(TokenKind::Keyword, r"\bif\b"),
        pattern(TokenKind::Identifier, r"\b[a-z]+\b"),
    ];
    let mut buf = TagBuffer::new("if x");
    tag_all(&patterns, &mut buf);
    assert_eq!(
        tags(&buf),
        vec![
            Some(TokenKind::Keyword),
            Some(TokenKind::Keyword),
            None,
            Some(TokenKind::Identifier),
        ]
    );
}

#[test]
fn overlapping_match_is_consumed_without_claiming() {
    // The comment claims "#b". The identifier search then finds "b" inside
    // it, skips it, and must still go on to claim "c".
    let patterns = [
        pattern(TokenKind::Comment, r"#[a-z]"),
        pattern(TokenKind::Identifier, r"[a-z]"),
    ];
    let mut buf = TagBuffer::new("a#bc");
    tag_all(&patterns, &mut buf);
    assert_eq!(
        tags(&buf),
        vec![
            Some(TokenKind::Identifier),
            Some(TokenKind::Comment),
            Some(TokenKind::Comment),
            Some(TokenKind::Identifier),
        ]
    );
}

#[test]
fn partially_claimed_match_is_skipped_whole() {
    let patterns = [
        pattern(TokenKind::Delimiter, r"\("),
        pattern(TokenKind::Identifier, r"[a-z(]+"),
    ];
    let mut buf = TagBuffer::new("ab(cd");
    tag_all(&patterns, &mut buf);
    assert_eq!(
        tags(&buf),
        vec![None, None, Some(TokenKind::Delimiter), None, None]
    );
}

#[test]
fn adjacent_claims_get_boundaries() {
    let patterns = [pattern(TokenKind::Delimiter, r"[()]")];
    let mut buf = TagBuffer::new("()");
    tag_all(&patterns, &mut buf);
    assert!(buf.is_boundary(1));
    assert!(buf.is_boundary(2));
}

#[test]
fn empty_matches_do_not_loop() {
    let patterns = [pattern(TokenKind::Identifier, r"[a-z]*")];
    let mut buf = TagBuffer::new("1é2");
    tag_all(&patterns, &mut buf);
    assert!((0..buf.len()).all(|i| buf.is_unresolved(i)));
}

#[test]
fn fill_unresolved_counts_slots() {
    let mut buf = TagBuffer::new("a b");
    buf.claim(1..2, TokenKind::Skip, true);
    assert_eq!(buf.fill_unresolved(TokenKind::Error), 2);
    assert_eq!(buf.fill_unresolved(TokenKind::Error), 0);
    assert_eq!(buf.get(0), Some(TokenKind::Error));
    assert_eq!(buf.get(1), Some(TokenKind::Skip));
}
