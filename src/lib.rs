pub mod span;
pub mod diagnostics;
pub mod lexer;
pub mod parser;

use std::io::Read;
use std::path::{Path, PathBuf};

pub use diagnostics::{ErrorList, ParseError, SourceError};
pub use parser::ast::IdlFile;
pub use parser::{parse, Parsed};

/// Where IDL source text comes from.
pub enum Source {
    Path(PathBuf),
    Str(String),
    Bytes(Vec<u8>),
    Reader(Box<dyn Read>),
}

impl Source {
    /// Load the full text. Bytes must be valid UTF-8; a leading byte-order
    /// mark is left in place for the scanner to skip.
    pub fn read(self) -> Result<String, SourceError> {
        match self {
            Source::Path(path) => {
                std::fs::read_to_string(&path).map_err(|source| SourceError::Read { path, source })
            }
            Source::Str(text) => Ok(text),
            Source::Bytes(bytes) => Ok(String::from_utf8(bytes)?),
            Source::Reader(mut reader) => {
                let mut bytes = Vec::new();
                reader.read_to_end(&mut bytes)?;
                Ok(String::from_utf8(bytes)?)
            }
        }
    }
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Source::Str(text) => f.debug_tuple("Str").field(&text.len()).finish(),
            Source::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Source::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::Str(text.to_string())
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Str(text)
    }
}

impl From<Vec<u8>> for Source {
    fn from(bytes: Vec<u8>) -> Self {
        Source::Bytes(bytes)
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

/// Read and parse. Only failure to obtain the text is an `Err`; syntax
/// errors are reported in the returned [`Parsed`].
pub fn parse_source(source: Source) -> Result<Parsed, SourceError> {
    let text = source.read()?;
    Ok(parse(&text))
}

pub fn parse_path(path: &Path) -> Result<Parsed, SourceError> {
    parse_source(Source::Path(path.to_path_buf()))
}
