//! Name nodes: unqualified, qualified, and id-expressions.

use recast_common::SourcePos;
use recast_lexer::Token;

/// A single-token name. The token may be an identifier or a keyword,
/// because the fundamental type names lex as keywords.
#[derive(Debug, Clone)]
pub struct UnqualifiedId {
    pub token: Token,
}

impl UnqualifiedId {
    pub fn position(&self) -> SourcePos {
        self.token.position()
    }

    /// The name's source text.
    pub fn text(&self) -> &str {
        &self.token.text
    }
}

/// A `::`-joined name with at least two components, e.g. `std::vector`.
#[derive(Debug, Clone)]
pub struct QualifiedId {
    /// Never empty.
    pub ids: Vec<UnqualifiedId>,
}

impl QualifiedId {
    pub fn position(&self) -> SourcePos {
        match self.ids.first() {
            Some(id) => id.position(),
            None => SourcePos::SYNTHETIC,
        }
    }
}

/// A qualified or unqualified name, or nothing at all. `Empty` is the
/// elided-type case of an object declaration.
#[derive(Debug, Clone)]
pub enum IdExpression {
    Empty,
    Qualified(QualifiedId),
    Unqualified(UnqualifiedId),
}

impl IdExpression {
    pub fn position(&self) -> SourcePos {
        match self {
            IdExpression::Empty => SourcePos::SYNTHETIC,
            IdExpression::Qualified(id) => id.position(),
            IdExpression::Unqualified(id) => id.position(),
        }
    }
}
