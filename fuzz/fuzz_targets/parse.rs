#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use idl_parser::parser::MAX_ERRORS;

/// Fuzzing-friendly fragments of IDL syntax
#[derive(Arbitrary, Debug)]
enum FuzzToken {
    Ident,
    Int,
    Float,
    Str,
    Comment,
    Assign,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftAngle,
    RightAngle,
    Comma,
    Semicolon,
    Colon,
    Enum,
    Flags,
    Record,
    Interface,
    Map,
    List,
    Deriving,
    Eq,
    Static,
    Const,
    Import,
    Cpp,
    Newline,
}

impl FuzzToken {
    fn text(&self) -> &'static str {
        match self {
            FuzzToken::Ident => "x",
            FuzzToken::Int => "42",
            FuzzToken::Float => "3.14",
            FuzzToken::Str => "\"str\"",
            FuzzToken::Comment => "# doc\n",
            FuzzToken::Assign => "=",
            FuzzToken::LeftParen => "(",
            FuzzToken::RightParen => ")",
            FuzzToken::LeftBrace => "{",
            FuzzToken::RightBrace => "}",
            FuzzToken::LeftAngle => "<",
            FuzzToken::RightAngle => ">",
            FuzzToken::Comma => ",",
            FuzzToken::Semicolon => ";",
            FuzzToken::Colon => ":",
            FuzzToken::Enum => "enum",
            FuzzToken::Flags => "flags",
            FuzzToken::Record => "record",
            FuzzToken::Interface => "interface",
            FuzzToken::Map => "map",
            FuzzToken::List => "list",
            FuzzToken::Deriving => "deriving",
            FuzzToken::Eq => "eq",
            FuzzToken::Static => "static",
            FuzzToken::Const => "const",
            FuzzToken::Import => "@import",
            FuzzToken::Cpp => "+c",
            FuzzToken::Newline => "\n",
        }
    }
}

#[derive(Arbitrary, Debug)]
struct FuzzTokens {
    tokens: Vec<FuzzToken>,
}

fuzz_target!(|input: FuzzTokens| {
    let source = input
        .tokens
        .iter()
        .map(FuzzToken::text)
        .collect::<Vec<_>>()
        .join(" ");

    // Feed to parser - should never panic or loop
    let parsed = idl_parser::parse(&source);
    assert!(parsed.errors.len() <= MAX_ERRORS);
});
