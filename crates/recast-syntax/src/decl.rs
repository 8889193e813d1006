//! Declaration nodes and the translation-unit root.

use crate::{IdExpression, PassingStyle, Statement, UnqualifiedId};
use recast_common::SourcePos;
use recast_lexer::contextual;

/// The root of a parse: an ordered sequence of declarations.
///
/// The parser keeps one translation unit alive across `parse()` calls
/// and splices every call's declarations into it.
#[derive(Debug, Clone, Default)]
pub struct TranslationUnit {
    pub declarations: Vec<Declaration>,
}

impl TranslationUnit {
    pub fn position(&self) -> SourcePos {
        match self.declarations.first() {
            Some(d) => d.position(),
            None => SourcePos::SYNTHETIC,
        }
    }
}

/// A declaration: `name : type? ( = initializer )?`.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub name: UnqualifiedId,
    pub ty: DeclarationType,
    pub initializer: Option<Box<Statement>>,
}

/// What a declaration declares: a function (its type is a parameter
/// list) or an object (its type is a possibly elided id-expression).
#[derive(Debug, Clone)]
pub enum DeclarationType {
    Function(ParameterList),
    Object(IdExpression),
}

impl Declaration {
    pub fn is_function(&self) -> bool {
        matches!(self.ty, DeclarationType::Function(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self.ty, DeclarationType::Object(_))
    }

    pub fn position(&self) -> SourcePos {
        self.name.position()
    }
}

/// A parenthesized, possibly empty parameter list. The paren positions
/// are recorded even when the list is empty.
#[derive(Debug, Clone)]
pub struct ParameterList {
    pub open_paren: SourcePos,
    pub close_paren: SourcePos,
    pub parameters: Vec<ParameterDeclaration>,
}

impl ParameterList {
    pub fn position(&self) -> SourcePos {
        self.open_paren
    }
}

/// One parameter: optional passing style, optional this-specifier, and
/// the nested declaration itself.
#[derive(Debug, Clone)]
pub struct ParameterDeclaration {
    pub pos: SourcePos,
    pub pass: PassingStyle,
    pub specifier: ThisSpecifier,
    pub declaration: Declaration,
}

impl ParameterDeclaration {
    pub fn position(&self) -> SourcePos {
        self.pos
    }
}

/// Modifier on an implicit-receiver parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThisSpecifier {
    #[default]
    None,
    Implicit,
    Virtual,
    Override,
    Final,
}

impl ThisSpecifier {
    /// Recognize a this-specifier word by its identifier text.
    pub fn from_ident(text: &str) -> Option<ThisSpecifier> {
        match text {
            contextual::IMPLICIT => Some(ThisSpecifier::Implicit),
            contextual::VIRTUAL => Some(ThisSpecifier::Virtual),
            contextual::OVERRIDE => Some(ThisSpecifier::Override),
            contextual::FINAL => Some(ThisSpecifier::Final),
            _ => None,
        }
    }

    /// Source spelling, or `None` for the default no-specifier state.
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            ThisSpecifier::None => None,
            ThisSpecifier::Implicit => Some("implicit"),
            ThisSpecifier::Virtual => Some("virtual"),
            ThisSpecifier::Override => Some("override"),
            ThisSpecifier::Final => Some("final"),
        }
    }
}
