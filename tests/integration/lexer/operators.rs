use super::*;

#[test]
fn punctuation_all() {
    assert_tokens(
        "=(){}<>,;:",
        &[
            Token::Assign,
            Token::LParen,
            Token::RParen,
            Token::LBrace,
            Token::RBrace,
            Token::LAngle,
            Token::RAngle,
            Token::Comma,
            Token::Semicolon,
            Token::Colon,
        ],
    );
}

#[test]
fn nested_generics_close_separately() {
    assert_tokens(
        "list<list<i32>>",
        &[
            Token::List,
            Token::LAngle,
            Token::List,
            Token::LAngle,
            Token::Ident,
            Token::RAngle,
            Token::RAngle,
        ],
    );
}

#[test]
fn lang_flags() {
    assert_tokens("+c +o +j", &[Token::Cpp, Token::ObjC, Token::Java]);
}

#[test]
fn lang_flags_without_spaces() {
    assert_tokens("+c+o+j", &[Token::Cpp, Token::ObjC, Token::Java]);
}

#[test]
fn lang_flag_followed_by_letters() {
    assert_tokens("+cx", &[Token::Cpp, Token::Ident]);
}

#[test]
fn import_directive() {
    assert_tokens("@import", &[Token::Import]);
}

#[test]
fn import_directive_with_suffix_is_illegal() {
    assert_tokens("@imports", &[Token::Illegal]);
    assert_literals("@imports", &["@imports"]);
}
