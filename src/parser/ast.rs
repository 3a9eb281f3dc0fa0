use serde::Serialize;

use crate::span::{Span, Spanned};

/// A parsed IDL file: imports and type declarations, both in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IdlFile {
    pub imports: Vec<Spanned<String>>,
    pub type_decls: Vec<TypeDecl>,
}

impl IdlFile {
    pub fn import_paths(&self) -> Vec<&str> {
        self.imports.iter().map(|i| i.node.as_str()).collect()
    }

    /// First declaration with the given name, if any.
    pub fn decl(&self, name: &str) -> Option<&TypeDecl> {
        self.type_decls.iter().find(|d| d.ident.name() == Some(name))
    }
}

/// A name. `name` is `None` when the parser had to invent a placeholder
/// after a missing identifier; such names must be treated as absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ident {
    pub name: Option<String>,
    pub span: Span,
}

impl Ident {
    /// Spelling used when a missing identifier is displayed.
    pub const PLACEHOLDER: &'static str = "_";

    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self { name: Some(name.into()), span }
    }

    pub fn missing(span: Span) -> Self {
        Self { name: None, span }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_missing(&self) -> bool {
        self.name.is_none()
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name().unwrap_or(Self::PLACEHOLDER))
    }
}

// ----------------------------------------------------------------------------
// Comments

/// A single `#` line comment, excluding the trailing newline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub text: String,
    pub span: Span,
}

/// Contiguous line comments with no blank line or other token between them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentGroup {
    pub list: Vec<Comment>,
}

impl CommentGroup {
    pub fn span(&self) -> Span {
        match (self.list.first(), self.list.last()) {
            (Some(first), Some(last)) => first.span.to(last.span),
            _ => Span::dummy(),
        }
    }

    /// The comment text with markers removed.
    ///
    /// The `#` and one following space are stripped from each line, trailing
    /// whitespace is trimmed, leading and trailing blank lines are dropped and
    /// runs of blank lines collapse to one. Unless empty, the result ends in a
    /// newline.
    pub fn text(&self) -> String {
        let mut lines: Vec<&str> = Vec::with_capacity(self.list.len());
        for comment in &self.list {
            let body = comment.text.strip_prefix('#').unwrap_or(&comment.text);
            let body = body.strip_prefix(' ').unwrap_or(body);
            let line = body.trim_end();
            if line.is_empty() && lines.last().is_none_or(|prev| prev.is_empty()) {
                continue;
            }
            lines.push(line);
        }
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        if lines.is_empty() {
            return String::new();
        }
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

// ----------------------------------------------------------------------------
// Types and members

/// A type reference such as `i32`, `MyRecord` or `map<string, list<i64>>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeExpr {
    pub ident: Ident,
    pub args: Vec<TypeExpr>,
}

impl TypeExpr {
    pub fn named(ident: Ident) -> Self {
        Self { ident, args: Vec::new() }
    }

    pub fn is_generic(&self) -> bool {
        !self.args.is_empty()
    }
}

impl std::fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ident)?;
        if let Some((first, rest)) = self.args.split_first() {
            write!(f, "<{first}")?;
            for arg in rest {
                write!(f, ", {arg}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub doc: Option<CommentGroup>,
    pub ident: Ident,
    pub ty: TypeExpr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Method {
    pub doc: Option<CommentGroup>,
    pub ident: Ident,
    pub params: Vec<Field>,
    pub ret: Option<TypeExpr>,
    pub is_static: bool,
    pub is_const: bool,
}

/// Value of a constant. The raw text is kept; numbers are not range checked
/// and strings keep their escapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Literal {
    Int(String),
    Float(String),
    /// Contents between the quotes.
    String(String),
    /// A bare name such as `true` or an enum option.
    Ident(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Const {
    pub doc: Option<CommentGroup>,
    pub ident: Ident,
    pub ty: TypeExpr,
    pub value: Option<Spanned<Literal>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumOption {
    pub doc: Option<CommentGroup>,
    pub ident: Ident,
}

/// Target languages a declaration provides native implementations for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Ext {
    pub cpp: bool,
    pub objc: bool,
    pub java: bool,
}

impl Ext {
    pub fn is_empty(&self) -> bool {
        !(self.cpp || self.objc || self.java)
    }
}

/// Traits requested by a record's `deriving (...)` clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Deriving {
    pub eq: bool,
    pub ord: bool,
    pub parcelable: bool,
}

// ----------------------------------------------------------------------------
// Type definitions

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Enum {
    pub options: Vec<EnumOption>,
    /// Declared with `flags`: options combine as a bitmask.
    pub flags: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    pub ext: Ext,
    pub fields: Vec<Field>,
    pub consts: Vec<Const>,
    pub deriving: Deriving,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Interface {
    pub ext: Ext,
    pub methods: Vec<Method>,
    pub consts: Vec<Const>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TypeDef {
    Enum(Enum),
    Record(Record),
    Interface(Interface),
}

impl TypeDef {
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeDef::Enum(e) if e.flags => "flags",
            TypeDef::Enum(_) => "enum",
            TypeDef::Record(_) => "record",
            TypeDef::Interface(_) => "interface",
        }
    }
}

/// `name = <type definition>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDecl {
    pub doc: Option<CommentGroup>,
    pub ident: Ident,
    /// `None` only when the definition keyword itself was malformed.
    pub body: Option<TypeDef>,
    pub span: Span,
}

impl TypeDecl {
    pub fn as_record(&self) -> Option<&Record> {
        match &self.body {
            Some(TypeDef::Record(r)) => Some(r),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&Interface> {
        match &self.body {
            Some(TypeDef::Interface(i)) => Some(i),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&Enum> {
        match &self.body {
            Some(TypeDef::Enum(e)) => Some(e),
            _ => None,
        }
    }
}
