use super::*;

#[test]
fn ident_simple() {
    assert_tokens("foo", &[Token::Ident]);
    assert_literals("foo _bar baz_9", &["foo", "_bar", "baz_9"]);
}

#[test]
fn ident_single_underscore() {
    assert_tokens("_", &[Token::Ident]);
}

#[test]
fn ident_cannot_start_with_digit() {
    assert_tokens("9lives", &[Token::Int, Token::Ident]);
    assert_literals("9lives", &["9", "lives"]);
}

#[test]
fn keywords_all_recognized() {
    assert_tokens(
        "enum flags record interface map set list deriving eq ord parcelable static const",
        &[
            Token::Enum,
            Token::Flags,
            Token::Record,
            Token::Interface,
            Token::Map,
            Token::Set,
            Token::List,
            Token::Deriving,
            Token::Equality,
            Token::Ordering,
            Token::Parcelable,
            Token::Static,
            Token::Const,
        ],
    );
}

#[test]
fn keywords_are_case_sensitive() {
    assert_tokens("Record ENUM Interface", &[Token::Ident, Token::Ident, Token::Ident]);
}

#[test]
fn keyword_prefix_is_ident() {
    assert_tokens("recording enumerate constant", &[Token::Ident, Token::Ident, Token::Ident]);
}

#[test]
fn keyword_with_underscore_suffix_is_ident() {
    assert_tokens("map_ list_ eq_", &[Token::Ident, Token::Ident, Token::Ident]);
}

#[test]
fn import_without_at_is_ident() {
    assert_tokens("import", &[Token::Ident]);
}
