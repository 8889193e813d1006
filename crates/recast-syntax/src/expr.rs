//! Expression nodes.

use recast_common::SourcePos;
use recast_lexer::{contextual, Token};

/// An expression: a thin carrier for the top of the binary-operator
/// ladder, so that statements and lists do not care how the ladder is
/// layered.
#[derive(Debug, Clone)]
pub struct Expression {
    /// The assignment-level expression.
    pub expr: BinaryExpr,
}

impl Expression {
    pub fn position(&self) -> SourcePos {
        self.expr.position()
    }
}

/// The precedence ladder of the binary-expression layers, lowest binding
/// first. Each level knows the next-tighter level below it; the bottom
/// level's operands are prefix-expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryLevel {
    Assignment,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Compare,
    Shift,
    Additive,
    Multiplicative,
    IsAs,
}

impl BinaryLevel {
    /// The next-tighter level, or `None` at the bottom of the ladder.
    ///
    /// Bitwise and/or/xor rungs between equality and logical-and are
    /// reserved for later; logical-and currently feeds on equality.
    pub fn next(self) -> Option<BinaryLevel> {
        match self {
            BinaryLevel::Assignment => Some(BinaryLevel::LogicalOr),
            BinaryLevel::LogicalOr => Some(BinaryLevel::LogicalAnd),
            BinaryLevel::LogicalAnd => Some(BinaryLevel::Equality),
            BinaryLevel::Equality => Some(BinaryLevel::Relational),
            BinaryLevel::Relational => Some(BinaryLevel::Compare),
            BinaryLevel::Compare => Some(BinaryLevel::Shift),
            BinaryLevel::Shift => Some(BinaryLevel::Additive),
            BinaryLevel::Additive => Some(BinaryLevel::Multiplicative),
            BinaryLevel::Multiplicative => Some(BinaryLevel::IsAs),
            BinaryLevel::IsAs => None,
        }
    }

    /// Display name of the level, as printed by the tree printer.
    pub fn name(self) -> &'static str {
        match self {
            BinaryLevel::Assignment => "assignment",
            BinaryLevel::LogicalOr => "logical-or",
            BinaryLevel::LogicalAnd => "logical-and",
            BinaryLevel::Equality => "equality",
            BinaryLevel::Relational => "relational",
            BinaryLevel::Compare => "compare",
            BinaryLevel::Shift => "shift",
            BinaryLevel::Additive => "additive",
            BinaryLevel::Multiplicative => "multiplicative",
            BinaryLevel::IsAs => "is-as",
        }
    }
}

/// One operand of a binary layer: either the node of the next-tighter
/// layer, or a prefix-expression at the bottom of the ladder.
#[derive(Debug, Clone)]
pub enum BinaryOperand {
    Binary(Box<BinaryExpr>),
    Prefix(Box<PrefixExpr>),
}

impl BinaryOperand {
    pub fn position(&self) -> SourcePos {
        match self {
            BinaryOperand::Binary(e) => e.position(),
            BinaryOperand::Prefix(e) => e.position(),
        }
    }
}

/// One `(operator, operand)` pair collected by a binary layer.
#[derive(Debug, Clone)]
pub struct BinaryTerm {
    pub op: Token,
    pub expr: BinaryOperand,
}

/// A binary-expression layer: a head operand plus the operator/operand
/// pairs collected at this precedence level.
///
/// Terms are stored flat; `a - b - c` is one additive node with terms
/// `[(-,b), (-,c)]`, interpreted left to right by later stages.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub level: BinaryLevel,
    pub head: BinaryOperand,
    pub tail: Vec<BinaryTerm>,
}

impl BinaryExpr {
    pub fn position(&self) -> SourcePos {
        self.head.position()
    }
}

/// A prefix-expression: zero or more prefix operators applied to a
/// postfix-expression.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub ops: Vec<Token>,
    pub expr: Box<PostfixExpr>,
}

impl PrefixExpr {
    pub fn position(&self) -> SourcePos {
        if let Some(op) = self.ops.first() {
            return op.position();
        }
        self.expr.position()
    }
}

/// One link of a postfix chain. `args` is present only when the operator
/// is `[` or `(`.
#[derive(Debug, Clone)]
pub struct PostfixTerm {
    pub op: Token,
    pub args: Option<ExpressionList>,
}

/// A postfix-expression: a primary extended by postfix operators,
/// subscripts, and call argument lists.
#[derive(Debug, Clone)]
pub struct PostfixExpr {
    pub expr: PrimaryExpr,
    pub ops: Vec<PostfixTerm>,
}

impl PostfixExpr {
    pub fn position(&self) -> SourcePos {
        self.expr.position()
    }
}

/// A primary-expression: a single literal/identifier/keyword token, or a
/// parenthesized expression-list. `Empty` is the legitimate "no primary"
/// state.
#[derive(Debug, Clone)]
pub enum PrimaryExpr {
    Empty,
    Ident(Token),
    List(ExpressionList),
}

impl PrimaryExpr {
    pub fn position(&self) -> SourcePos {
        match self {
            PrimaryExpr::Empty => SourcePos::SYNTHETIC,
            PrimaryExpr::Ident(tok) => tok.position(),
            PrimaryExpr::List(list) => list.position(),
        }
    }
}

/// How an argument or parameter is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassingStyle {
    #[default]
    In,
    Inout,
    Out,
    Move,
    Forward,
}

impl PassingStyle {
    /// Recognize a passing-style word by its identifier text.
    pub fn from_ident(text: &str) -> Option<PassingStyle> {
        match text {
            contextual::IN => Some(PassingStyle::In),
            contextual::INOUT => Some(PassingStyle::Inout),
            contextual::OUT => Some(PassingStyle::Out),
            contextual::MOVE => Some(PassingStyle::Move),
            contextual::FORWARD => Some(PassingStyle::Forward),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PassingStyle::In => "in",
            PassingStyle::Inout => "inout",
            PassingStyle::Out => "out",
            PassingStyle::Move => "move",
            PassingStyle::Forward => "forward",
        }
    }
}

/// One element of an expression-list with its passing style (`in` unless
/// the element was marked `out`).
#[derive(Debug, Clone)]
pub struct ExprListTerm {
    pub pass: PassingStyle,
    pub expr: Expression,
}

/// A comma-separated, non-empty list of expressions.
#[derive(Debug, Clone)]
pub struct ExpressionList {
    pub terms: Vec<ExprListTerm>,
}

impl ExpressionList {
    pub fn position(&self) -> SourcePos {
        match self.terms.first() {
            Some(term) => term.expr.position(),
            None => SourcePos::SYNTHETIC,
        }
    }
}
