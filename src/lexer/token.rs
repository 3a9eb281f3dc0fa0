use logos::Logos;

/// Lexical tokens of the IDL.
///
/// Keywords carry no logos pattern: they lex as [`Token::Ident`] and the
/// scanner reclassifies them through [`Token::lookup`], so the keyword table
/// below is the single source of truth for reserved words.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    // Special tokens
    /// Unrecognized input, including `@` directives other than `@import`.
    #[regex(r"@[a-zA-Z_][a-zA-Z0-9_]*")]
    Illegal,
    Eof,
    #[regex(r"#[^\n]*")]
    Comment,

    // Literals
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r"[0-9]+\.[0-9]*")]
    Float,
    /// Runs to the closing quote; an unterminated string stops at end of line.
    #[regex(r#""([^"\\\n]|\\[^\n])*"?"#)]
    String,

    // Operators
    #[token("=")]
    Assign,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("<")]
    LAngle,
    #[token(">")]
    RAngle,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,

    // Type definition keywords
    Enum,
    Flags,
    Record,
    Interface,

    // Container keywords
    Map,
    Set,
    List,

    // Record derivations
    Deriving,
    Equality,
    Ordering,
    Parcelable,

    // Member modifiers
    Static,
    Const,
    #[token("@import")]
    Import,

    // Language extension flags
    #[token("+c")]
    Cpp,
    #[token("+o")]
    ObjC,
    #[token("+j")]
    Java,
}

const KEYWORDS: [Token; 14] = [
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
    Token::Import,
];

impl Token {
    /// The four keywords that may introduce a type definition.
    pub const TYPE_DEFS: [Token; 4] = [Token::Enum, Token::Flags, Token::Record, Token::Interface];

    /// Maps an identifier to its keyword token, or `Ident` if it is not reserved.
    pub fn lookup(ident: &str) -> Token {
        KEYWORDS
            .iter()
            .copied()
            .find(|kw| kw.as_str() == ident)
            .unwrap_or(Token::Ident)
    }

    /// The literal spelling for operators, keywords and flags; the symbolic
    /// name for everything else.
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Illegal => "ILLEGAL",
            Token::Eof => "EOF",
            Token::Comment => "COMMENT",
            Token::Ident => "IDENT",
            Token::Int => "INT",
            Token::Float => "FLOAT",
            Token::String => "STRING",
            Token::Assign => "=",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::LAngle => "<",
            Token::RAngle => ">",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::Colon => ":",
            Token::Enum => "enum",
            Token::Flags => "flags",
            Token::Record => "record",
            Token::Interface => "interface",
            Token::Map => "map",
            Token::Set => "set",
            Token::List => "list",
            Token::Deriving => "deriving",
            Token::Equality => "eq",
            Token::Ordering => "ord",
            Token::Parcelable => "parcelable",
            Token::Static => "static",
            Token::Const => "const",
            Token::Import => "@import",
            Token::Cpp => "+c",
            Token::ObjC => "+o",
            Token::Java => "+j",
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Ident | Token::Int | Token::Float | Token::String)
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::Assign
                | Token::LParen
                | Token::RParen
                | Token::LBrace
                | Token::RBrace
                | Token::LAngle
                | Token::RAngle
                | Token::Comma
                | Token::Semicolon
                | Token::Colon
        )
    }

    pub fn is_keyword(&self) -> bool {
        KEYWORDS.contains(self)
    }

    pub fn is_lang_ext(&self) -> bool {
        matches!(self, Token::Cpp | Token::ObjC | Token::Java)
    }

    pub fn is_type_def(&self) -> bool {
        Self::TYPE_DEFS.contains(self)
    }

    /// True for tokens whose `Display` is their literal spelling.
    pub fn is_spelled(&self) -> bool {
        self.is_operator() || self.is_keyword() || self.is_lang_ext()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
