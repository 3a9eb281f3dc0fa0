use super::*;

#[test]
fn unicode_bom_skipped() {
    assert_tokens("\u{FEFF}record", &[Token::Record]);
}

#[test]
fn unicode_bom_offsets_spans() {
    assert_span("\u{FEFF}a b", 0, 3, 4);
    assert_span("\u{FEFF}a b", 1, 5, 6);
}

#[test]
fn unicode_bom_only() {
    assert!(lex("\u{FEFF}").is_empty());
    assert_eq!(eof_of("\u{FEFF}"), Span::point(3));
}

#[test]
fn unicode_bom_only_at_start() {
    let tokens = lex("a \u{FEFF} b");
    assert!(tokens.iter().any(|t| t.0 == Token::Illegal));
}

#[test]
fn unicode_in_string() {
    assert_tokens("\"日本語 🎉\"", &[Token::String]);
}

#[test]
fn unicode_in_comment() {
    assert_tokens("# café ☕\nx", &[Token::Comment, Token::Ident]);
}

#[test]
fn unicode_ident_is_illegal() {
    let tokens = lex("é foo");
    assert_eq!(tokens[0].0, Token::Illegal);
    assert_eq!(tokens.last().map(|t| t.1), Some("foo"));
}
