use std::path::PathBuf;

use thiserror::Error;

use crate::lexer::Token;
use crate::span::Span;

/// A structural mismatch found while parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("expected {}, found {}", describe_expected(.expected), describe_found(.found, .literal))]
pub struct ParseError {
    /// Tokens that would have been accepted here. Never empty.
    pub expected: Vec<Token>,
    pub found: Token,
    /// Source text of the offending token.
    pub literal: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(expected: impl Into<Vec<Token>>, found: Token, literal: impl Into<String>, span: Span) -> Self {
        Self {
            expected: expected.into(),
            found,
            literal: literal.into(),
            span,
        }
    }
}

fn quoted(tok: Token) -> String {
    match tok {
        Token::Ident => "identifier".to_string(),
        Token::Int => "integer".to_string(),
        Token::Float => "float".to_string(),
        Token::String => "string".to_string(),
        Token::Comment => "comment".to_string(),
        Token::Eof => "end of file".to_string(),
        Token::Illegal => "illegal token".to_string(),
        tok => format!("'{tok}'"),
    }
}

fn describe_expected(expected: &[Token]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [one] => quoted(*one),
        many => {
            let list: Vec<String> = many.iter().map(|t| quoted(*t)).collect();
            format!("one of {}", list.join(", "))
        }
    }
}

fn describe_found(found: &Token, literal: &str) -> String {
    if found.is_spelled() || literal.is_empty() {
        quoted(*found)
    } else {
        format!("{} '{literal}'", quoted(*found))
    }
}

/// All errors collected during one parse, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorList {
    errors: Vec<ParseError>,
}

impl ErrorList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, err: ParseError) {
        self.errors.push(err);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn first(&self) -> Option<&ParseError> {
        self.errors.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParseError> {
        self.errors.iter()
    }

    /// `Ok(())` if nothing was recorded.
    pub fn into_result(self) -> Result<(), ErrorList> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ErrorList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.errors.as_slice() {
            [] => f.write_str("no errors"),
            [only] => write!(f, "{only}"),
            [first, rest @ ..] => write!(f, "{first} (and {} more errors)", rest.len()),
        }
    }
}

impl std::error::Error for ErrorList {}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a ParseError;
    type IntoIter = std::slice::Iter<'a, ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl IntoIterator for ErrorList {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Failure to obtain source text. Raised before any parsing happens.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read source stream: {0}")]
    Stream(#[from] std::io::Error),

    #[error("source is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Render parse errors with ariadne for terminal output.
pub fn render_errors(source: &str, filename: &str, errors: &ErrorList) {
    use ariadne::{Label, Report, ReportKind, Source};

    for err in errors {
        let result = Report::build(ReportKind::Error, (), err.span.start)
            .with_message(format!("syntax error in {filename}"))
            .with_label(Label::new(err.span.range()).with_message(err.to_string()))
            .finish()
            .eprint(Source::from(source));
        if let Err(e) = result {
            eprintln!("error: {err} (failed to render report: {e})");
        }
    }
}
