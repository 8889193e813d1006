//! Token definitions for Recast.

use recast_common::{SourcePos, Span};
use std::fmt;

/// A token with its kind, source text, and location.
///
/// Tokens are immutable once produced. The parse tree stores clones of
/// them, so they stay valid for as long as the tree does even when the
/// token buffer of one parse call is gone.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub lexeme: Lexeme,
    pub text: String,
    pub pos: SourcePos,
    pub span: Span,
}

impl Token {
    pub fn new(lexeme: Lexeme, text: impl Into<String>, pos: SourcePos, span: Span) -> Self {
        Self {
            lexeme,
            text: text.into(),
            pos,
            span,
        }
    }

    pub fn position(&self) -> SourcePos {
        self.pos
    }

    /// Textual comparison, used to recognize contextual keywords.
    pub fn is(&self, text: &str) -> bool {
        self.text == text
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lexeme {
    // Literals
    Integer,
    Float,
    Hexadecimal,
    Binary,
    Str,
    Char,

    // Names
    Ident,
    Keyword,

    // Delimiters
    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
    LBrace,   // {
    RBrace,   // }

    // Punctuation
    Scope,     // ::
    Colon,     // :
    Semicolon, // ;
    Comma,     // ,
    Dot,       // .

    // Operators
    Plus,       // +
    Minus,      // -
    Star,       // *
    Slash,      // /
    Percent,    // %
    PlusPlus,   // ++
    MinusMinus, // --
    Caret,      // ^
    Ampersand,  // &
    Tilde,      // ~
    Dollar,     // $
    Bang,       // !
    Eq,         // =
    EqEq,       // ==
    BangEq,     // !=
    Lt,         // <
    LtEq,       // <=
    Gt,         // >
    GtEq,       // >=
    Spaceship,  // <=>
    Shl,        // <<
    Shr,        // >>
    AndAnd,     // &&
    OrOr,       // ||
    StarEq,     // *=
    SlashEq,    // /=
    PercentEq,  // %=
    PlusEq,     // +=
    MinusEq,    // -=
    ShlEq,      // <<=
    ShrEq,      // >>=

    // Special
    Error,
}

impl Lexeme {
    /// Returns true for every literal kind.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Lexeme::Integer
                | Lexeme::Float
                | Lexeme::Hexadecimal
                | Lexeme::Binary
                | Lexeme::Str
                | Lexeme::Char
        )
    }

    /// prefix-operator: one of `!`
    pub fn is_prefix_operator(self) -> bool {
        matches!(self, Lexeme::Bang)
    }

    /// postfix-operator: one of `++ -- ^ & ~ $`
    pub fn is_postfix_operator(self) -> bool {
        matches!(
            self,
            Lexeme::PlusPlus
                | Lexeme::MinusMinus
                | Lexeme::Caret
                | Lexeme::Ampersand
                | Lexeme::Tilde
                | Lexeme::Dollar
        )
    }

    /// assignment-operator: one of `= *= /= %= += -= >>= <<=`
    pub fn is_assignment_operator(self) -> bool {
        matches!(
            self,
            Lexeme::Eq
                | Lexeme::StarEq
                | Lexeme::SlashEq
                | Lexeme::PercentEq
                | Lexeme::PlusEq
                | Lexeme::MinusEq
                | Lexeme::ShrEq
                | Lexeme::ShlEq
        )
    }
}

/// Returns true if `s` is a reserved keyword.
///
/// The reserved set is the fundamental type names plus the words the
/// grammar itself spells out. The passing-style and this-specifier words
/// (`in`, `out`, `virtual`, ...) are deliberately NOT reserved; they lex
/// as identifiers and only mean something in the positions the grammar
/// looks for them.
pub fn is_keyword(s: &str) -> bool {
    matches!(
        s,
        "auto"
            | "bool"
            | "char"
            | "constexpr"
            | "double"
            | "else"
            | "false"
            | "float"
            | "if"
            | "int"
            | "is"
            | "as"
            | "long"
            | "short"
            | "signed"
            | "true"
            | "unsigned"
            | "void"
    )
}

/// Spellings of the contextual keywords.
///
/// These are matched against identifier (or keyword, for `is`/`as`/`if`/
/// `else`/`constexpr`) token text in the specific grammar positions that
/// give them meaning.
pub mod contextual {
    pub const IS: &str = "is";
    pub const AS: &str = "as";
    pub const IF: &str = "if";
    pub const ELSE: &str = "else";
    pub const CONSTEXPR: &str = "constexpr";

    // passing styles
    pub const IN: &str = "in";
    pub const INOUT: &str = "inout";
    pub const OUT: &str = "out";
    pub const MOVE: &str = "move";
    pub const FORWARD: &str = "forward";

    // this-specifiers
    pub const IMPLICIT: &str = "implicit";
    pub const VIRTUAL: &str = "virtual";
    pub const OVERRIDE: &str = "override";
    pub const FINAL: &str = "final";
}
