#![no_main]
use idl_parser::lexer::{Scanner, Token};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Scanning arbitrary text must never panic and must reach EOF
    if let Ok(s) = std::str::from_utf8(data) {
        let mut scanner = Scanner::new(s);
        let mut prev_end = 0;
        loop {
            let lexeme = scanner.scan();
            assert!(lexeme.span.start >= prev_end);
            assert_eq!(&s[lexeme.span.range()], lexeme.literal);
            if lexeme.token == Token::Eof {
                break;
            }
            prev_end = lexeme.span.end;
        }
    }
});
