//! The reference printing visitor.

use crate::{
    BinaryExpr, CompoundStatement, Declaration, Expression, ExpressionList, ExpressionStatement,
    IdExpression, ParameterDeclaration, ParameterList, PassingStyle, PostfixExpr, PrefixExpr,
    PrimaryExpr, QualifiedId, SelectionStatement, Statement, TranslationUnit, UnqualifiedId,
    Visitor,
};
use recast_lexer::Token;

const INDENT_SPACES: usize = 2;

/// Tracks how far a printed expression-list has advanced, so each
/// element's passing style can be shown next to it.
struct ListFrame {
    passes: Vec<PassingStyle>,
    next: usize,
}

/// A visitor that renders the parse tree as an indented outline, one
/// line per node, for debugging and golden tests.
///
/// Active expression lists are kept as a stack so that nested argument
/// lists each track their own elements.
pub struct TreePrinter {
    out: String,
    lists: Vec<ListFrame>,
}

impl TreePrinter {
    pub fn new() -> Self {
        TreePrinter {
            out: String::new(),
            lists: Vec::new(),
        }
    }

    /// The rendered outline.
    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth * INDENT_SPACES {
            self.out.push(' ');
        }
        self.out.push_str(text);
        self.out.push('\n');
    }
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for TreePrinter {
    fn start_token(&mut self, token: &Token, depth: usize) {
        self.line(depth, &token.text);
    }

    fn start_translation_unit(&mut self, _node: &TranslationUnit, depth: usize) {
        self.line(depth, "translation-unit");
    }

    fn start_declaration(&mut self, _node: &Declaration, depth: usize) {
        self.line(depth, "declaration");
    }

    fn start_parameter_list(&mut self, _node: &ParameterList, depth: usize) {
        self.line(depth, "parameter-declaration-list");
    }

    fn start_parameter_declaration(&mut self, node: &ParameterDeclaration, depth: usize) {
        self.line(depth, "parameter-declaration");
        let mut detail = node.pass.as_str().to_string();
        if let Some(specifier) = node.specifier.as_str() {
            detail.push(' ');
            detail.push_str(specifier);
        }
        self.line(depth + 1, &detail);
    }

    fn start_statement(&mut self, _node: &Statement, depth: usize) {
        self.line(depth, "statement");
    }

    fn start_compound_statement(&mut self, _node: &CompoundStatement, depth: usize) {
        self.line(depth, "compound-statement");
    }

    fn start_selection_statement(&mut self, node: &SelectionStatement, depth: usize) {
        self.line(depth, "selection-statement");
        let constexpr = format!("is_constexpr: {}", node.is_constexpr);
        self.line(depth + 1, &constexpr);
    }

    fn start_expression_statement(&mut self, _node: &ExpressionStatement, depth: usize) {
        self.line(depth, "expression-statement");
    }

    fn start_expression(&mut self, _node: &Expression, depth: usize) {
        // Advance the enclosing expression-list, if any, to this element.
        let mark_out = match self.lists.last_mut() {
            Some(frame) => {
                let out = frame.passes.get(frame.next) == Some(&PassingStyle::Out);
                frame.next += 1;
                out
            }
            None => false,
        };
        self.line(depth, "expression");
        if mark_out {
            self.line(depth + 1, "out");
        }
    }

    fn start_binary_expression(&mut self, node: &BinaryExpr, depth: usize) {
        let name = format!("{}-expression", node.level.name());
        self.line(depth, &name);
    }

    fn start_prefix_expression(&mut self, _node: &PrefixExpr, depth: usize) {
        self.line(depth, "prefix-expression");
    }

    fn start_postfix_expression(&mut self, _node: &PostfixExpr, depth: usize) {
        self.line(depth, "postfix-expression");
    }

    fn start_primary_expression(&mut self, _node: &PrimaryExpr, depth: usize) {
        self.line(depth, "primary-expression");
    }

    fn start_expression_list(&mut self, node: &ExpressionList, depth: usize) {
        self.lists.push(ListFrame {
            passes: node.terms.iter().map(|t| t.pass).collect(),
            next: 0,
        });
        self.line(depth, "expression-list");
    }

    fn end_expression_list(&mut self, _node: &ExpressionList, _depth: usize) {
        self.lists.pop();
    }

    fn start_id_expression(&mut self, _node: &IdExpression, depth: usize) {
        self.line(depth, "id-expression");
    }

    fn start_qualified_id(&mut self, _node: &QualifiedId, depth: usize) {
        self.line(depth, "qualified-id");
    }

    fn start_unqualified_id(&mut self, _node: &UnqualifiedId, depth: usize) {
        self.line(depth, "unqualified-id");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recast_common::{SourcePos, Span};
    use recast_lexer::Lexeme;

    fn ident(text: &str) -> Token {
        Token::new(Lexeme::Ident, text, SourcePos::new(1, 1), Span::new(0, 1))
    }

    #[test]
    fn test_unqualified_id_outline() {
        let id = UnqualifiedId { token: ident("x") };
        let mut printer = TreePrinter::new();
        id.visit(&mut printer, 0);
        assert_eq!(printer.finish(), "unqualified-id\n  x\n");
    }

    #[test]
    fn test_qualified_id_outline_indents_per_depth() {
        let id = QualifiedId {
            ids: vec![
                UnqualifiedId { token: ident("std") },
                UnqualifiedId {
                    token: ident("vector"),
                },
            ],
        };
        let mut printer = TreePrinter::new();
        id.visit(&mut printer, 0);
        let rendered = printer.finish();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "qualified-id",
                "  unqualified-id",
                "    std",
                "  unqualified-id",
                "    vector",
            ]
        );
    }
}
