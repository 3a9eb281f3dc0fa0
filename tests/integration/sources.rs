use std::io::Cursor;

use idl_parser::{Source, SourceError, parse_path, parse_source};

const SRC: &str = "foo = record { a: i32 }\n";

#[test]
fn source_from_str() {
    assert_eq!(Source::from(SRC).read().unwrap(), SRC);
    assert_eq!(Source::Str(SRC.to_string()).read().unwrap(), SRC);
}

#[test]
fn source_from_bytes() {
    assert_eq!(Source::Bytes(SRC.as_bytes().to_vec()).read().unwrap(), SRC);
}

#[test]
fn source_from_reader() {
    let reader = Cursor::new(SRC.as_bytes().to_vec());
    assert_eq!(Source::Reader(Box::new(reader)).read().unwrap(), SRC);
}

#[test]
fn source_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("types.idl");
    std::fs::write(&path, SRC).unwrap();
    assert_eq!(Source::Path(path).read().unwrap(), SRC);
}

#[test]
fn invalid_utf8_is_rejected() {
    let err = Source::Bytes(vec![b'a', 0xff, 0xfe]).read().unwrap_err();
    assert!(matches!(err, SourceError::Utf8(_)));
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.idl");
    let err = Source::Path(path.clone()).read().unwrap_err();
    assert!(matches!(err, SourceError::Read { .. }));
    assert!(err.to_string().contains("nope.idl"), "{err}");
}

#[test]
fn parse_source_reports_syntax_errors_in_result() {
    let parsed = parse_source(Source::from("foo record { }")).unwrap();
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.file.type_decls.len(), 1);
}

#[test]
fn parse_path_with_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bom.idl");
    std::fs::write(&path, format!("\u{FEFF}{SRC}")).unwrap();
    let parsed = parse_path(&path).unwrap();
    assert!(parsed.is_ok());
    let decl = &parsed.file.type_decls[0];
    assert_eq!(decl.ident.name(), Some("foo"));
    assert_eq!(decl.ident.span.start, 3);
}

#[test]
fn parse_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(parse_path(&dir.path().join("missing.idl")).is_err());
}
