pub mod token;

pub use token::Token;

use logos::Logos;
use tracing::trace;

use crate::span::Span;

const BOM: char = '\u{FEFF}';

/// One scanned token together with its raw source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub token: Token,
    pub literal: &'a str,
    pub span: Span,
}

/// Pull-based scanner over a fully buffered source.
///
/// `scan` never fails: unrecognized input comes back as [`Token::Illegal`]
/// carrying the offending text, and once the input is exhausted every call
/// returns [`Token::Eof`] at the same offset.
pub struct Scanner<'a> {
    source: &'a str,
    lexer: logos::Lexer<'a, Token>,
    // bytes of a leading byte-order mark that were skipped
    base: usize,
    at_eof: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        let base = if source.starts_with(BOM) { BOM.len_utf8() } else { 0 };
        Self {
            source,
            lexer: Token::lexer(&source[base..]),
            base,
            at_eof: false,
        }
    }

    pub fn scan(&mut self) -> Lexeme<'a> {
        if self.at_eof {
            return self.eof();
        }
        let Some(result) = self.lexer.next() else {
            self.at_eof = true;
            return self.eof();
        };

        let range = self.lexer.span();
        let literal = self.lexer.slice();
        let token = match result {
            Ok(Token::Ident) => Token::lookup(literal),
            Ok(tok) => tok,
            Err(()) => Token::Illegal,
        };
        let span = Span::new(range.start + self.base, range.end + self.base);
        trace!(%token, literal, start = span.start, "scanned");
        Lexeme { token, literal, span }
    }

    fn eof(&self) -> Lexeme<'a> {
        Lexeme {
            token: Token::Eof,
            literal: "",
            span: Span::point(self.source.len()),
        }
    }
}

/// Scan the whole source. The trailing `Eof` is not included.
pub fn tokenize(source: &str) -> Vec<Lexeme<'_>> {
    let mut scanner = Scanner::new(source);
    let mut lexemes = Vec::new();
    loop {
        let lexeme = scanner.scan();
        if lexeme.token == Token::Eof {
            return lexemes;
        }
        lexemes.push(lexeme);
    }
}
