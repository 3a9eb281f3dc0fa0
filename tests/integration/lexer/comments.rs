use super::*;

// Comments are part of the scanner's output; the parser decides what to do
// with them.

#[test]
fn comment_line() {
    assert_tokens("# hello\nfoo", &[Token::Comment, Token::Ident]);
    assert_literals("# hello\nfoo", &["# hello", "foo"]);
}

#[test]
fn comment_excludes_newline() {
    assert_span("# hi\n", 0, 0, 4);
}

#[test]
fn comment_empty() {
    assert_literals("#", &["#"]);
}

#[test]
fn comment_after_token() {
    assert_tokens("foo # trailing", &[Token::Ident, Token::Comment]);
}

#[test]
fn comment_without_space() {
    assert_tokens("foo#bar", &[Token::Ident, Token::Comment]);
    assert_literals("foo#bar", &["foo", "#bar"]);
}

#[test]
fn comment_swallows_tokens_on_its_line() {
    assert_tokens("# a = record { }\nb", &[Token::Comment, Token::Ident]);
}

#[test]
fn comment_consecutive_lines() {
    assert_tokens("# one\n# two\n\n# three", &[Token::Comment, Token::Comment, Token::Comment]);
}
