use super::*;
use pretty_assertions::assert_eq;
use pylex_lexer::{tokenize, PatternTable};

fn render(source: &str, view: fn(&mut Vec<u8>, &str, &TokenList) -> io::Result<()>) -> String {
    let table = PatternTable::standard().unwrap();
    let tokens = tokenize(source, &table);
    let mut out = Vec::new();
    view(&mut out, source, &tokens).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn source_view_echoes_text() {
    let mut out = Vec::new();
    write_source(&mut out, "x = 1\n").unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "x = 1\n\n");
}

#[test]
fn layout_view_indents_blocks() {
    let out = render("if x:\n    y\n", |out, _, tokens| write_layout(out, tokens));
    assert_eq!(
        out,
        "KEYWORD IDENTIFIER DELIMITER NEWLINE \n\
         INDENT\n    \
         IDENTIFIER NEWLINE \n\
         DEDENT\n\n"
    );
}

#[test]
fn layout_view_keeps_joined_lines_together() {
    let out = render("f(a,\n  b)\n", |out, _, tokens| write_layout(out, tokens));
    assert_eq!(
        out,
        "IDENTIFIER DELIMITER IDENTIFIER DELIMITER IMPLICIT_JOIN IDENTIFIER DELIMITER NEWLINE \n\n"
    );
}

#[test]
fn lexeme_view_skips_structural_tokens() {
    let out = render("if x:\n    y\n", write_lexemes);
    assert_eq!(
        out,
        "<if , KEYWORD> <x , IDENTIFIER> <: , DELIMITER> <y , IDENTIFIER> \n"
    );
}

#[test]
fn error_view_lists_diagnostics_with_positions() {
    let out = render("a\n    b\n  c $\n", write_errors);
    assert_eq!(
        out,
        "<  , INDENT_ERROR > at 3:3\n\
         < $ , ERROR > at 3:5\n\n"
    );
}

#[test]
fn error_view_is_blank_without_errors() {
    assert_eq!(render("x = 1\n", write_errors), "\n");
}

#[test]
fn view_names() {
    assert_eq!(ViewSet::parse("tokens"), Some(ViewSet::TOKENS));
    assert_eq!(ViewSet::parse("all"), Some(ViewSet::all()));
    assert_eq!(ViewSet::parse("everything"), None);
    assert_eq!(ViewSet::default(), ViewSet::all());
}

#[test]
fn selected_views_print_in_order() {
    let table = PatternTable::standard().unwrap();
    let source = "\"abc";
    let tokens = tokenize(source, &table);
    let mut out = Vec::new();
    (ViewSet::ERRORS | ViewSet::SOURCE)
        .write(&mut out, source, &tokens)
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\"abc\n< \"abc , ERROR > at 1:1\n\n"
    );
}
