pub mod ast;

use tracing::debug;

use crate::diagnostics::{ErrorList, ParseError};
use crate::lexer::{Lexeme, Scanner, Token};
use crate::span::{Span, Spanned};
use ast::*;

/// Parsing stops recovering once this many errors have been recorded.
pub const MAX_ERRORS: usize = 10;

/// Deepest nesting of type arguments accepted, as in `list<list<i32>>`.
pub const MAX_TYPE_DEPTH: usize = 64;

const RECORD_MEMBER: [Token; 2] = [Token::Ident, Token::Const];
const INTERFACE_MEMBER: [Token; 3] = [Token::Ident, Token::Static, Token::Const];
const ENUM_MEMBER: [Token; 1] = [Token::Ident];
const DERIVABLE: [Token; 3] = [Token::Equality, Token::Ordering, Token::Parcelable];
const LITERAL: [Token; 4] = [Token::Int, Token::Float, Token::String, Token::Ident];

/// Outcome of a parse: whatever AST could be built plus the errors found.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub file: IdlFile,
    pub errors: ErrorList,
}

impl Parsed {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<IdlFile, ErrorList> {
        self.errors.into_result().map(|()| self.file)
    }
}

/// Parse IDL source text. Always completes; see [`Parsed::errors`].
pub fn parse(source: &str) -> Parsed {
    let mut parser = Parser::new(source);
    let file = parser.parse_file();
    Parsed { file, errors: parser.errors }
}

/// Recursive-descent parser with one token of lookahead.
pub struct Parser<'a> {
    source: &'a str,
    scanner: Scanner<'a>,

    tok: Token,
    lit: &'a str,
    span: Span,
    // end offset of the previously consumed token
    prev_end: usize,
    primed: bool,

    lead_comment: Option<CommentGroup>,

    errors: ErrorList,
    bailed: bool,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut parser = Self {
            source,
            scanner: Scanner::new(source),
            tok: Token::Eof,
            lit: "",
            span: Span::dummy(),
            prev_end: 0,
            primed: false,
            lead_comment: None,
            errors: ErrorList::new(),
            bailed: false,
        };
        parser.next();
        parser
    }

    // ------------------------------------------------------------------------
    // Token stream

    /// Advance to the next non-comment token, collecting the comments in
    /// between so a lead comment can be attached to what follows.
    fn next(&mut self) {
        if self.bailed {
            return;
        }
        let prev = self.primed.then_some(self.span.end);
        if let Some(end) = prev {
            self.prev_end = end;
        }
        self.primed = true;
        self.lead_comment = None;

        let mut group: Vec<Comment> = Vec::new();
        let mut lexeme = self.scanner.scan();
        while lexeme.token == Token::Comment {
            let after = group.last().map(|c| c.span.end).or(prev);
            match after.map(|end| self.newlines_between(end, lexeme.span.start)) {
                // same line as the previous token: a trailing comment
                Some(0) => {}
                Some(1) if !group.is_empty() => group.push(comment(&lexeme)),
                _ => {
                    group.clear();
                    group.push(comment(&lexeme));
                }
            }
            lexeme = self.scanner.scan();
        }

        let attached = group
            .last()
            .is_some_and(|last| self.newlines_between(last.span.end, lexeme.span.start) == 1);
        if attached {
            self.lead_comment = Some(CommentGroup { list: group });
        }

        self.tok = lexeme.token;
        self.lit = lexeme.literal;
        self.span = lexeme.span;
    }

    fn newlines_between(&self, start: usize, end: usize) -> usize {
        self.source
            .get(start..end)
            .map_or(0, |gap| gap.bytes().filter(|b| *b == b'\n').count())
    }

    fn error(&mut self, expected: impl Into<Vec<Token>>) {
        if self.bailed {
            return;
        }
        self.errors.push(ParseError::new(expected, self.tok, self.lit, self.span));
        if self.errors.len() >= MAX_ERRORS {
            debug!(errors = self.errors.len(), offset = self.span.start, "too many errors, giving up");
            self.bailed = true;
            self.tok = Token::Eof;
            self.lit = "";
            self.span = Span::point(self.source.len());
            self.lead_comment = None;
        }
    }

    /// Consume `tok`, or report it missing. A stray literal or illegal token
    /// is skipped; anything the surrounding grammar can still use is kept.
    fn expect(&mut self, tok: Token) {
        if self.tok == tok {
            self.next();
        } else {
            self.error([tok]);
            self.skip_junk();
        }
    }

    fn skip_junk(&mut self) {
        if matches!(
            self.tok,
            Token::Illegal | Token::Int | Token::Float | Token::String | Token::Cpp | Token::ObjC | Token::Java
        ) {
            self.next();
        }
    }

    fn skip_semicolon(&mut self) {
        if self.tok == Token::Semicolon {
            self.next();
        }
    }

    /// Skip a balanced `{ ... }` block starting at the current `{`.
    fn skip_block(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.tok {
                Token::LBrace => depth += 1,
                Token::RBrace => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.next();
                        return;
                    }
                }
                Token::Eof => return,
                _ => {}
            }
            self.next();
        }
    }

    /// Report a body member that matches no alternative and skip to the next
    /// member boundary.
    fn bad_member(&mut self, starts: &[Token]) {
        self.error(starts);
        if self.tok == Token::LBrace {
            self.skip_block();
        } else {
            self.next();
        }
        loop {
            match self.tok {
                Token::Eof | Token::RBrace => return,
                Token::Semicolon => {
                    self.next();
                    return;
                }
                Token::LBrace => self.skip_block(),
                tok if starts.contains(&tok) => return,
                _ => self.next(),
            }
        }
    }

    /// Consume the `{` opening a body. Returns false when it is missing, in
    /// which case the body is not parsed at all.
    fn open_body(&mut self) -> bool {
        if self.tok == Token::LBrace {
            self.next();
            true
        } else {
            self.error([Token::LBrace]);
            false
        }
    }

    // ------------------------------------------------------------------------
    // File

    pub fn parse_file(&mut self) -> IdlFile {
        let mut imports = Vec::new();
        while self.tok == Token::Import {
            if let Some(import) = self.parse_import() {
                imports.push(import);
            }
        }

        let mut type_decls = Vec::new();
        while self.tok != Token::Eof {
            if self.tok == Token::Ident {
                type_decls.push(self.parse_decl());
            } else {
                self.error([Token::Ident]);
                self.sync_decl();
            }
        }

        IdlFile { imports, type_decls }
    }

    /// Skip ahead to the next token that can start a declaration.
    fn sync_decl(&mut self) {
        if self.tok == Token::LBrace {
            self.skip_block();
        } else {
            self.next();
        }
        while !matches!(self.tok, Token::Ident | Token::Eof) {
            if self.tok == Token::LBrace {
                self.skip_block();
            } else {
                self.next();
            }
        }
    }

    fn parse_import(&mut self) -> Option<Spanned<String>> {
        let start = self.span.start;
        self.next(); // '@import'
        if self.tok != Token::String {
            // whatever stands in for the path belongs to the import
            self.error([Token::String]);
            if self.tok != Token::Eof {
                self.next();
            }
            return None;
        }
        let path = string_contents(self.lit).to_string();
        let span = Span::new(start, self.span.end);
        self.next();
        Some(Spanned::new(path, span))
    }

    fn parse_decl(&mut self) -> TypeDecl {
        let doc = self.lead_comment.take();
        let start = self.span.start;
        let ident = self.parse_ident();
        self.expect(Token::Assign);
        let body = self.parse_type_def();

        debug!(
            name = %ident,
            kind = body.as_ref().map_or("<missing>", TypeDef::keyword),
            "parsed type declaration"
        );
        TypeDecl {
            doc,
            ident,
            body,
            span: Span::new(start, self.prev_end.max(start)),
        }
    }

    fn parse_type_def(&mut self) -> Option<TypeDef> {
        match self.tok {
            Token::Record => Some(TypeDef::Record(self.parse_record())),
            Token::Interface => Some(TypeDef::Interface(self.parse_interface())),
            Token::Enum => Some(TypeDef::Enum(self.parse_enum(false))),
            Token::Flags => Some(TypeDef::Enum(self.parse_enum(true))),
            _ => {
                self.error(Token::TYPE_DEFS);
                match self.tok {
                    Token::LBrace => self.skip_block(),
                    Token::Eof | Token::RBrace => {}
                    _ => {
                        self.next();
                        if self.tok == Token::LBrace {
                            self.skip_block();
                        }
                    }
                }
                None
            }
        }
    }

    // ------------------------------------------------------------------------
    // Type definitions

    fn parse_lang_ext(&mut self) -> Ext {
        let mut ext = Ext::default();
        loop {
            match self.tok {
                Token::Cpp => ext.cpp = true,
                Token::ObjC => ext.objc = true,
                Token::Java => ext.java = true,
                _ => return ext,
            }
            self.next();
        }
    }

    fn parse_record(&mut self) -> Record {
        self.next(); // 'record'
        let mut record = Record {
            ext: self.parse_lang_ext(),
            ..Record::default()
        };
        if !self.open_body() {
            return record;
        }

        while !matches!(self.tok, Token::RBrace | Token::Eof) {
            match self.tok {
                Token::Ident => {
                    let field = self.parse_field();
                    self.skip_semicolon();
                    record.fields.push(field);
                }
                Token::Const => {
                    let doc = self.lead_comment.take();
                    self.next(); // 'const'
                    let ident = self.parse_ident();
                    record.consts.push(self.finish_const(doc, ident));
                }
                _ => self.bad_member(&RECORD_MEMBER),
            }
        }
        self.expect(Token::RBrace);

        if self.tok == Token::Deriving {
            record.deriving = self.parse_deriving();
        }
        record
    }

    fn parse_deriving(&mut self) -> Deriving {
        self.next(); // 'deriving'
        let mut deriving = Deriving::default();
        if self.tok != Token::LParen {
            self.error([Token::LParen]);
            return deriving;
        }
        self.next();

        loop {
            match self.tok {
                Token::Equality => deriving.eq = true,
                Token::Ordering => deriving.ord = true,
                Token::Parcelable => deriving.parcelable = true,
                _ => {
                    self.error(DERIVABLE);
                    // an unknown name is skipped so the rest of the list still counts
                    if self.tok != Token::Ident {
                        break;
                    }
                }
            }
            self.next();
            if self.tok != Token::Comma {
                break;
            }
            self.next();
        }
        self.expect(Token::RParen);
        deriving
    }

    fn parse_interface(&mut self) -> Interface {
        self.next(); // 'interface'
        let mut iface = Interface {
            ext: self.parse_lang_ext(),
            ..Interface::default()
        };
        if !self.open_body() {
            return iface;
        }

        while !matches!(self.tok, Token::RBrace | Token::Eof) {
            if INTERFACE_MEMBER.contains(&self.tok) {
                self.parse_interface_member(&mut iface);
            } else {
                self.bad_member(&INTERFACE_MEMBER);
            }
        }
        self.expect(Token::RBrace);
        iface
    }

    /// A method or a constant. `const name:` starts a constant, while
    /// `const name(` is a method declared constant.
    fn parse_interface_member(&mut self, iface: &mut Interface) {
        let doc = self.lead_comment.take();
        let mut is_static = false;
        let mut is_const = false;
        loop {
            match self.tok {
                Token::Static => is_static = true,
                Token::Const => is_const = true,
                _ => break,
            }
            self.next();
        }

        let ident = self.parse_ident();
        if is_const && !is_static && self.tok == Token::Colon {
            iface.consts.push(self.finish_const(doc, ident));
        } else {
            iface.methods.push(self.finish_method(doc, ident, is_static, is_const));
        }
    }

    fn parse_enum(&mut self, flags: bool) -> Enum {
        self.next(); // 'enum' or 'flags'
        let mut decl = Enum { options: Vec::new(), flags };
        if !self.open_body() {
            return decl;
        }

        while !matches!(self.tok, Token::RBrace | Token::Eof) {
            if self.tok == Token::Ident {
                let doc = self.lead_comment.take();
                let ident = self.parse_ident();
                self.skip_semicolon();
                decl.options.push(EnumOption { doc, ident });
            } else {
                self.bad_member(&ENUM_MEMBER);
            }
        }
        self.expect(Token::RBrace);
        decl
    }

    // ------------------------------------------------------------------------
    // Members

    fn parse_field(&mut self) -> Field {
        let doc = self.lead_comment.take();
        let ident = self.parse_ident();
        self.expect(Token::Colon);
        let ty = self.parse_type();
        Field { doc, ident, ty }
    }

    fn finish_method(&mut self, doc: Option<CommentGroup>, ident: Ident, is_static: bool, is_const: bool) -> Method {
        let mut params = Vec::new();
        if self.tok == Token::LParen {
            self.next();
            if self.tok != Token::RParen {
                loop {
                    params.push(self.parse_field());
                    if self.tok != Token::Comma {
                        break;
                    }
                    self.next();
                }
            }
            self.expect(Token::RParen);
        } else {
            self.error([Token::LParen]);
        }

        let ret = if self.tok == Token::Colon {
            self.next();
            Some(self.parse_type())
        } else {
            None
        };
        self.skip_semicolon();

        Method { doc, ident, params, ret, is_static, is_const }
    }

    fn finish_const(&mut self, doc: Option<CommentGroup>, ident: Ident) -> Const {
        self.expect(Token::Colon);
        let ty = self.parse_type();
        self.expect(Token::Assign);
        let value = self.parse_literal();
        self.skip_semicolon();
        Const { doc, ident, ty, value }
    }

    fn parse_literal(&mut self) -> Option<Spanned<Literal>> {
        let value = match self.tok {
            Token::Int => Literal::Int(self.lit.to_string()),
            Token::Float => Literal::Float(self.lit.to_string()),
            Token::String => Literal::String(string_contents(self.lit).to_string()),
            Token::Ident => Literal::Ident(self.lit.to_string()),
            _ => {
                self.error(LITERAL);
                return None;
            }
        };
        let span = self.span;
        self.next();
        Some(Spanned::new(value, span))
    }

    // ------------------------------------------------------------------------
    // Names and types

    /// On failure the placeholder is returned and an error recorded.
    fn parse_ident(&mut self) -> Ident {
        if self.tok == Token::Ident {
            let ident = Ident::new(self.lit, self.span);
            self.next();
            ident
        } else {
            let span = self.span;
            self.expect(Token::Ident);
            Ident::missing(span)
        }
    }

    fn parse_type(&mut self) -> TypeExpr {
        self.parse_type_at(0)
    }

    fn parse_type_at(&mut self, depth: usize) -> TypeExpr {
        let ident = match self.tok {
            Token::Map | Token::Set | Token::List => {
                let ident = Ident::new(self.lit, self.span);
                self.next();
                ident
            }
            _ => self.parse_ident(),
        };

        let mut args = Vec::new();
        if self.tok == Token::LAngle {
            if depth >= MAX_TYPE_DEPTH {
                debug!(offset = self.span.start, "type arguments nested too deeply");
                self.error([Token::RAngle]);
                self.skip_type_args();
                return TypeExpr { ident, args };
            }
            self.next();
            loop {
                args.push(self.parse_type_at(depth + 1));
                if self.tok != Token::Comma {
                    break;
                }
                self.next();
            }
            self.expect(Token::RAngle);
        }
        TypeExpr { ident, args }
    }

    /// Skip a balanced `< ... >` run starting at the current `<`. Stops early
    /// at the end of the member.
    fn skip_type_args(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.tok {
                Token::LAngle => depth += 1,
                Token::RAngle => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.next();
                        return;
                    }
                }
                Token::Semicolon | Token::RBrace | Token::RParen | Token::Eof => return,
                _ => {}
            }
            self.next();
        }
    }
}

fn comment(lexeme: &Lexeme<'_>) -> Comment {
    Comment {
        text: lexeme.literal.to_string(),
        span: lexeme.span,
    }
}

/// The text between the quotes of a string literal. An unterminated literal
/// only loses its opening quote.
fn string_contents(lit: &str) -> &str {
    let inner = lit.strip_prefix('"').unwrap_or(lit);
    match inner.strip_suffix('"') {
        Some(body) => {
            let escapes = body.bytes().rev().take_while(|b| *b == b'\\').count();
            if escapes % 2 == 0 { body } else { inner }
        }
        None => inner,
    }
}
