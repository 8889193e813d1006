//! The visitor protocol and tree traversal.
//!
//! Every node exposes `visit(visitor, depth)`: it calls the visitor's
//! `start_*` hook, descends into its children in declaration order at
//! `depth + 1`, then calls the matching `end_*` hook. Tokens reached
//! during traversal (operators, the `if` keyword, name tokens) get a
//! `start_token` call with no matching end.
//!
//! `Visitor` is a capability, not a base class: every hook has an empty
//! default body, so implementors override only the nodes they care
//! about. The tree neither knows nor cares what visitors do.

use crate::*;
use recast_lexer::Token;

/// Receiver of a tree traversal.
#[allow(unused_variables)]
pub trait Visitor {
    fn start_token(&mut self, token: &Token, depth: usize) {}

    fn start_translation_unit(&mut self, node: &TranslationUnit, depth: usize) {}
    fn end_translation_unit(&mut self, node: &TranslationUnit, depth: usize) {}

    fn start_declaration(&mut self, node: &Declaration, depth: usize) {}
    fn end_declaration(&mut self, node: &Declaration, depth: usize) {}

    fn start_parameter_list(&mut self, node: &ParameterList, depth: usize) {}
    fn end_parameter_list(&mut self, node: &ParameterList, depth: usize) {}

    fn start_parameter_declaration(&mut self, node: &ParameterDeclaration, depth: usize) {}
    fn end_parameter_declaration(&mut self, node: &ParameterDeclaration, depth: usize) {}

    fn start_statement(&mut self, node: &Statement, depth: usize) {}
    fn end_statement(&mut self, node: &Statement, depth: usize) {}

    fn start_compound_statement(&mut self, node: &CompoundStatement, depth: usize) {}
    fn end_compound_statement(&mut self, node: &CompoundStatement, depth: usize) {}

    fn start_selection_statement(&mut self, node: &SelectionStatement, depth: usize) {}
    fn end_selection_statement(&mut self, node: &SelectionStatement, depth: usize) {}

    fn start_expression_statement(&mut self, node: &ExpressionStatement, depth: usize) {}
    fn end_expression_statement(&mut self, node: &ExpressionStatement, depth: usize) {}

    fn start_expression(&mut self, node: &Expression, depth: usize) {}
    fn end_expression(&mut self, node: &Expression, depth: usize) {}

    fn start_binary_expression(&mut self, node: &BinaryExpr, depth: usize) {}
    fn end_binary_expression(&mut self, node: &BinaryExpr, depth: usize) {}

    fn start_prefix_expression(&mut self, node: &PrefixExpr, depth: usize) {}
    fn end_prefix_expression(&mut self, node: &PrefixExpr, depth: usize) {}

    fn start_postfix_expression(&mut self, node: &PostfixExpr, depth: usize) {}
    fn end_postfix_expression(&mut self, node: &PostfixExpr, depth: usize) {}

    fn start_primary_expression(&mut self, node: &PrimaryExpr, depth: usize) {}
    fn end_primary_expression(&mut self, node: &PrimaryExpr, depth: usize) {}

    fn start_expression_list(&mut self, node: &ExpressionList, depth: usize) {}
    fn end_expression_list(&mut self, node: &ExpressionList, depth: usize) {}

    fn start_id_expression(&mut self, node: &IdExpression, depth: usize) {}
    fn end_id_expression(&mut self, node: &IdExpression, depth: usize) {}

    fn start_qualified_id(&mut self, node: &QualifiedId, depth: usize) {}
    fn end_qualified_id(&mut self, node: &QualifiedId, depth: usize) {}

    fn start_unqualified_id(&mut self, node: &UnqualifiedId, depth: usize) {}
    fn end_unqualified_id(&mut self, node: &UnqualifiedId, depth: usize) {}
}

impl TranslationUnit {
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        v.start_translation_unit(self, depth);
        for declaration in &self.declarations {
            declaration.visit(v, depth + 1);
        }
        v.end_translation_unit(self, depth);
    }
}

impl Declaration {
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        v.start_declaration(self, depth);
        self.name.visit(v, depth + 1);
        match &self.ty {
            DeclarationType::Function(list) => list.visit(v, depth + 1),
            DeclarationType::Object(id) => id.visit(v, depth + 1),
        }
        if let Some(initializer) = &self.initializer {
            initializer.visit(v, depth + 1);
        }
        v.end_declaration(self, depth);
    }
}

impl ParameterList {
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        v.start_parameter_list(self, depth);
        for parameter in &self.parameters {
            parameter.visit(v, depth + 1);
        }
        v.end_parameter_list(self, depth);
    }
}

impl ParameterDeclaration {
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        v.start_parameter_declaration(self, depth);
        self.declaration.visit(v, depth + 1);
        v.end_parameter_declaration(self, depth);
    }
}

impl Statement {
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        v.start_statement(self, depth);
        match &self.kind {
            StatementKind::Expression(s) => s.visit(v, depth + 1),
            StatementKind::Compound(s) => s.visit(v, depth + 1),
            StatementKind::Selection(s) => s.visit(v, depth + 1),
            StatementKind::Declaration(s) => s.visit(v, depth + 1),
        }
        v.end_statement(self, depth);
    }
}

impl CompoundStatement {
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        v.start_compound_statement(self, depth);
        for statement in &self.statements {
            statement.visit(v, depth + 1);
        }
        v.end_compound_statement(self, depth);
    }
}

impl SelectionStatement {
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        v.start_selection_statement(self, depth);
        v.start_token(&self.keyword, depth + 1);
        self.condition.visit(v, depth + 1);
        self.true_branch.visit(v, depth + 1);
        self.false_branch.visit(v, depth + 1);
        v.end_selection_statement(self, depth);
    }
}

impl ExpressionStatement {
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        v.start_expression_statement(self, depth);
        self.expr.visit(v, depth + 1);
        v.end_expression_statement(self, depth);
    }
}

impl Expression {
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        v.start_expression(self, depth);
        self.expr.visit(v, depth + 1);
        v.end_expression(self, depth);
    }
}

impl BinaryExpr {
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        v.start_binary_expression(self, depth);
        self.head.visit(v, depth + 1);
        for term in &self.tail {
            v.start_token(&term.op, depth + 1);
            term.expr.visit(v, depth + 1);
        }
        v.end_binary_expression(self, depth);
    }
}

impl BinaryOperand {
    /// Dispatch to the operand's own node; operands are not nodes
    /// themselves and get no start/end of their own.
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        match self {
            BinaryOperand::Binary(e) => e.visit(v, depth),
            BinaryOperand::Prefix(e) => e.visit(v, depth),
        }
    }
}

impl PrefixExpr {
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        v.start_prefix_expression(self, depth);
        for op in &self.ops {
            v.start_token(op, depth + 1);
        }
        self.expr.visit(v, depth + 1);
        v.end_prefix_expression(self, depth);
    }
}

impl PostfixExpr {
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        v.start_postfix_expression(self, depth);
        self.expr.visit(v, depth + 1);
        for term in &self.ops {
            v.start_token(&term.op, depth + 1);
            if let Some(args) = &term.args {
                args.visit(v, depth + 1);
            }
        }
        v.end_postfix_expression(self, depth);
    }
}

impl PrimaryExpr {
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        v.start_primary_expression(self, depth);
        match self {
            PrimaryExpr::Empty => {}
            PrimaryExpr::Ident(token) => v.start_token(token, depth + 1),
            PrimaryExpr::List(list) => list.visit(v, depth + 1),
        }
        v.end_primary_expression(self, depth);
    }
}

impl ExpressionList {
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        v.start_expression_list(self, depth);
        for term in &self.terms {
            term.expr.visit(v, depth + 1);
        }
        v.end_expression_list(self, depth);
    }
}

impl IdExpression {
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        v.start_id_expression(self, depth);
        match self {
            IdExpression::Empty => {}
            IdExpression::Qualified(id) => id.visit(v, depth + 1),
            IdExpression::Unqualified(id) => id.visit(v, depth + 1),
        }
        v.end_id_expression(self, depth);
    }
}

impl QualifiedId {
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        v.start_qualified_id(self, depth);
        for id in &self.ids {
            id.visit(v, depth + 1);
        }
        v.end_qualified_id(self, depth);
    }
}

impl UnqualifiedId {
    pub fn visit<V: Visitor>(&self, v: &mut V, depth: usize) {
        v.start_unqualified_id(self, depth);
        v.start_token(&self.token, depth + 1);
        v.end_unqualified_id(self, depth);
    }
}
