//! The Recast parser.

use recast_common::{SourcePos, Span};
use recast_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, ErrorSink, Label};
use recast_lexer::{contextual, Lexeme, Token};
use recast_syntax::*;

use crate::cursor::TokenCursor;

/// The Recast parser.
///
/// A parser is constructed over a caller-owned error sink and appends to
/// it; it never reads the sink back. It owns one translation unit that
/// accumulates across `parse()` calls: each call parses its batch of
/// tokens as if it were a standalone unit and splices the resulting
/// declarations into the stored tree. The tree is never mutated after a
/// call returns.
pub struct Parser<'e> {
    errors: &'e mut ErrorSink,
    tree: TranslationUnit,
}

impl<'e> Parser<'e> {
    /// Create a parser that reports into `errors`.
    pub fn new(errors: &'e mut ErrorSink) -> Self {
        Self {
            errors,
            tree: TranslationUnit::default(),
        }
    }

    /// Parse one batch of tokens into the stored tree.
    ///
    /// Returns false when the batch was not consumed to the end; a
    /// partial tree may still have been added and can be walked.
    pub fn parse(&mut self, tokens: &[Token]) -> bool {
        let mut productions = Productions {
            cursor: TokenCursor::new(tokens),
            errors: &mut *self.errors,
        };

        let unit = productions.translation_unit();
        self.tree.declarations.extend(unit.declarations);

        if !productions.cursor.at_end() {
            productions.error(ErrorCode::TrailingInput, "unexpected text at end of source");
            return false;
        }
        true
    }

    /// The accumulated translation unit.
    pub fn tree(&self) -> &TranslationUnit {
        &self.tree
    }

    /// Drive a full traversal of the accumulated tree from depth 0.
    pub fn walk<V: Visitor>(&self, visitor: &mut V) {
        self.tree.visit(visitor, 0);
    }

    /// Give up the tree, releasing the borrow of the error sink.
    pub fn into_tree(self) -> TranslationUnit {
        self.tree
    }
}

/// The grammar driver for one `parse()` call: a cursor over that call's
/// token batch plus the parser's error sink.
///
/// Every production either consumes tokens and returns a node, returns
/// `None` having consumed nothing (the rewinding productions restore the
/// cursor explicitly), or reports a diagnostic and returns a best-effort
/// partial node or `None`. Errors never unwind.
struct Productions<'t, 'e> {
    cursor: TokenCursor<'t>,
    errors: &'e mut ErrorSink,
}

impl Productions<'_, '_> {
    //  ========== Token navigation and error reporting ==========

    fn at(&self, lexeme: Lexeme) -> bool {
        self.cursor.current().is_some_and(|t| t.lexeme == lexeme)
    }

    fn at_keyword(&self, word: &str) -> bool {
        self.cursor
            .current()
            .is_some_and(|t| t.lexeme == Lexeme::Keyword && t.is(word))
    }

    fn at_ident(&self, word: &str) -> bool {
        self.cursor
            .current()
            .is_some_and(|t| t.lexeme == Lexeme::Ident && t.is(word))
    }

    fn advance(&mut self) {
        self.cursor.advance(1);
    }

    /// The text of the most recently consumed token, for diagnostics
    /// about what followed it.
    fn look_back_text(&self) -> String {
        match self.cursor.peek(-1) {
            Some(token) => token.text.clone(),
            None => String::from("start of input"),
        }
    }

    /// Append `(position, message + " at " + current token)` to the
    /// error sink. At end of input the last consumed token supplies the
    /// position.
    fn error(&mut self, code: ErrorCode, message: &str) {
        let (pos, span, text) = match self.cursor.current().or_else(|| self.cursor.peek(-1)) {
            Some(token) => {
                let text = if self.cursor.at_end() {
                    String::from("end of input")
                } else {
                    token.text.clone()
                };
                (token.pos, token.span, text)
            }
            None => (
                SourcePos::SYNTHETIC,
                Span::default(),
                String::from("end of input"),
            ),
        };
        self.errors.push(
            Diagnostic::error(
                DiagnosticKind::Parser,
                pos,
                span,
                format!("{} at {}", message, text),
            )
            .with_code(code)
            .with_label(Label::new(span, "here")),
        );
    }

    //  ========== Unary expression layers ==========

    /// primary-expression:
    ///     literal-or-identifier-or-keyword
    ///     ( expression-list )
    fn primary_expression(&mut self) -> Option<PrimaryExpr> {
        let token = self.cursor.current()?;

        if token.lexeme.is_literal()
            || token.lexeme == Lexeme::Ident
            || token.lexeme == Lexeme::Keyword
        {
            let token = token.clone();
            self.advance();
            return Some(PrimaryExpr::Ident(token));
        }

        if token.lexeme == Lexeme::LParen {
            self.advance();
            let Some(list) = self.expression_list() else {
                self.error(
                    ErrorCode::EmptyExpressionList,
                    "unexpected text - ( is not followed by an expression-list",
                );
                self.advance();
                return None;
            };
            if !self.at(Lexeme::RParen) {
                self.error(
                    ErrorCode::UnclosedDelimiter,
                    "unexpected text - expression-list is not terminated by )",
                );
                self.advance();
                return None;
            }
            self.advance();
            return Some(PrimaryExpr::List(list));
        }

        None
    }

    /// postfix-expression:
    ///     primary-expression
    ///     postfix-expression postfix-operator
    ///     postfix-expression [ expression-list ]
    ///     postfix-expression ( expression-list? )
    ///
    /// `.` member access is accepted into the chain but carries no
    /// operand yet.
    fn postfix_expression(&mut self) -> Option<PostfixExpr> {
        let expr = self.primary_expression()?;
        let mut node = PostfixExpr {
            expr,
            ops: Vec::new(),
        };

        loop {
            let Some(token) = self.cursor.current() else {
                break;
            };
            if !(token.lexeme.is_postfix_operator()
                || token.lexeme == Lexeme::LBracket
                || token.lexeme == Lexeme::LParen
                || token.lexeme == Lexeme::Dot)
            {
                break;
            }

            let op = token.clone();
            self.advance();
            let mut args = None;

            match op.lexeme {
                Lexeme::LBracket => {
                    args = self.expression_list();
                    if args.is_none() {
                        self.error(
                            ErrorCode::EmptyExpressionList,
                            "subscript expression [ ] must not be empty",
                        );
                    }
                    if !self.at(Lexeme::RBracket) {
                        self.error(
                            ErrorCode::UnclosedDelimiter,
                            "unexpected text - [ is not properly matched by ]",
                        );
                    }
                    self.advance();
                }
                Lexeme::LParen => {
                    args = self.expression_list();
                    if !self.at(Lexeme::RParen) {
                        self.error(
                            ErrorCode::UnclosedDelimiter,
                            "unexpected text - ( is not properly matched by )",
                        );
                    }
                    self.advance();
                }
                _ => {}
            }

            node.ops.push(PostfixTerm { op, args });
        }

        Some(node)
    }

    /// prefix-expression:
    ///     postfix-expression
    ///     prefix-operator prefix-expression
    fn prefix_expression(&mut self) -> Option<PrefixExpr> {
        let mut ops = Vec::new();
        while let Some(token) = self.cursor.current() {
            if !token.lexeme.is_prefix_operator() {
                break;
            }
            ops.push(token.clone());
            self.advance();
        }
        let expr = self.postfix_expression()?;
        Some(PrefixExpr {
            ops,
            expr: Box::new(expr),
        })
    }

    //  ========== Binary expression layers ==========

    /// Does the current token carry an operator of this level?
    fn level_matches(&self, level: BinaryLevel) -> bool {
        let Some(token) = self.cursor.current() else {
            return false;
        };
        match level {
            BinaryLevel::Assignment => token.lexeme.is_assignment_operator(),
            BinaryLevel::LogicalOr => token.lexeme == Lexeme::OrOr,
            BinaryLevel::LogicalAnd => token.lexeme == Lexeme::AndAnd,
            BinaryLevel::Equality => matches!(token.lexeme, Lexeme::EqEq | Lexeme::BangEq),
            BinaryLevel::Relational => matches!(
                token.lexeme,
                Lexeme::Lt | Lexeme::LtEq | Lexeme::Gt | Lexeme::GtEq
            ),
            BinaryLevel::Compare => token.lexeme == Lexeme::Spaceship,
            BinaryLevel::Shift => matches!(token.lexeme, Lexeme::Shl | Lexeme::Shr),
            BinaryLevel::Additive => matches!(token.lexeme, Lexeme::Plus | Lexeme::Minus),
            BinaryLevel::Multiplicative => {
                matches!(token.lexeme, Lexeme::Star | Lexeme::Slash | Lexeme::Percent)
            }
            BinaryLevel::IsAs => {
                token.lexeme == Lexeme::Keyword
                    && (token.is(contextual::IS) || token.is(contextual::AS))
            }
        }
    }

    /// One operand at this level: the node of the next-tighter level, or
    /// a prefix-expression at the bottom of the ladder.
    fn binary_operand(&mut self, level: BinaryLevel) -> Option<BinaryOperand> {
        match level.next() {
            Some(next) => self
                .binary_expression(next)
                .map(|e| BinaryOperand::Binary(Box::new(e))),
            None => self
                .prefix_expression()
                .map(|e| BinaryOperand::Prefix(Box::new(e))),
        }
    }

    /// The general binary layer: one term of the next-lower level, then
    /// greedily `(operator, term)` pairs while the operator matches this
    /// level. A term failing after its operator was consumed is reported
    /// and the partial node returned.
    fn binary_expression(&mut self, level: BinaryLevel) -> Option<BinaryExpr> {
        let head = self.binary_operand(level)?;
        let mut node = BinaryExpr {
            level,
            head,
            tail: Vec::new(),
        };

        while self.level_matches(level) {
            let op = self.cursor.current()?.clone();
            self.advance();

            match self.binary_operand(level) {
                Some(expr) => node.tail.push(BinaryTerm { op, expr }),
                None => {
                    let message = format!("invalid expression after {}", self.look_back_text());
                    self.error(ErrorCode::ExpectedExpression, &message);
                    return Some(node);
                }
            }
        }

        Some(node)
    }

    /// assignment-expression: the top of the ladder.
    fn assignment_expression(&mut self) -> Option<BinaryExpr> {
        self.binary_expression(BinaryLevel::Assignment)
    }

    /// expression:
    ///     assignment-expression
    fn expression(&mut self) -> Option<Expression> {
        let expr = self.assignment_expression()?;
        Some(Expression { expr })
    }

    /// expression-list:
    ///     expression
    ///     expression-list , expression
    ///
    /// Each element may be marked `out`. When the first element cannot be
    /// parsed the cursor rewinds to the entry position, giving back a
    /// speculatively consumed `out` marker as well.
    fn expression_list(&mut self) -> Option<ExpressionList> {
        let start = self.cursor.save();
        let mut pass = PassingStyle::In;

        if self.at_ident(contextual::OUT) {
            pass = PassingStyle::Out;
            self.advance();
        }
        let Some(expr) = self.expression() else {
            self.cursor.rewind(start);
            return None;
        };

        let mut list = ExpressionList {
            terms: vec![ExprListTerm { pass, expr }],
        };

        while self.at(Lexeme::Comma) {
            self.advance();
            let mut pass = PassingStyle::In;
            if self.at_ident(contextual::OUT) {
                pass = PassingStyle::Out;
                self.advance();
            }
            match self.expression() {
                Some(expr) => list.terms.push(ExprListTerm { pass, expr }),
                None => {
                    let message = format!("invalid expression after {}", self.look_back_text());
                    self.error(ErrorCode::ExpectedExpression, &message);
                    return Some(list);
                }
            }
        }

        Some(list)
    }

    //  ========== Names ==========

    /// unqualified-id:
    ///     identifier-or-keyword
    ///
    /// Keywords are accepted because the fundamental type names lex as
    /// keywords.
    fn unqualified_id(&mut self) -> Option<UnqualifiedId> {
        let token = self.cursor.current()?;
        if token.lexeme != Lexeme::Ident && token.lexeme != Lexeme::Keyword {
            return None;
        }
        let token = token.clone();
        self.advance();
        Some(UnqualifiedId { token })
    }

    /// qualified-id:
    ///     unqualified-id ( :: unqualified-id )+
    ///
    /// Rewinds to the entry position when no `::` follows the first name,
    /// giving back the name token.
    fn qualified_id(&mut self) -> Option<QualifiedId> {
        let start = self.cursor.save();

        let id = self.unqualified_id();
        let Some(id) = id.filter(|_| self.at(Lexeme::Scope)) else {
            self.cursor.rewind(start);
            return None;
        };

        let mut node = QualifiedId { ids: vec![id] };

        while self.at(Lexeme::Scope) {
            self.advance();
            match self.unqualified_id() {
                Some(id) => node.ids.push(id),
                None => {
                    self.error(
                        ErrorCode::ExpectedNestedName,
                        "invalid text, :: should be followed by a nested name",
                    );
                    return None;
                }
            }
        }

        Some(node)
    }

    /// id-expression:
    ///     qualified-id
    ///     unqualified-id
    ///
    /// Returns `None` when neither matches; the caller decides whether an
    /// elided (empty) id is acceptable there.
    fn id_expression(&mut self) -> Option<IdExpression> {
        if let Some(id) = self.qualified_id() {
            return Some(IdExpression::Qualified(id));
        }
        if let Some(id) = self.unqualified_id() {
            return Some(IdExpression::Unqualified(id));
        }
        None
    }

    //  ========== Statements ==========

    /// expression-statement:
    ///     expression ;
    ///     expression
    ///
    /// A required semicolon is only diagnosable while input remains; at
    /// end of input the batch simply ends with the statement.
    fn expression_statement(&mut self, semicolon_required: bool) -> Option<ExpressionStatement> {
        let expr = self.expression()?;

        if semicolon_required && !self.cursor.at_end() && !self.at(Lexeme::Semicolon) {
            self.error(
                ErrorCode::MissingSemicolon,
                "expression-statement does not end with semicolon",
            );
            return None;
        }
        if self.at(Lexeme::Semicolon) {
            self.advance();
        }
        Some(ExpressionStatement { expr })
    }

    /// selection-statement:
    ///     if constexpr? expression compound-statement
    ///     if constexpr? expression compound-statement else compound-statement
    fn selection_statement(&mut self) -> Option<SelectionStatement> {
        if !self.at_keyword(contextual::IF) {
            return None;
        }
        let keyword = self.cursor.current()?.clone();
        self.advance();

        let mut is_constexpr = false;
        if self.at_keyword(contextual::CONSTEXPR) {
            is_constexpr = true;
            self.advance();
        }

        let Some(condition) = self.expression() else {
            self.error(ErrorCode::ExpectedExpression, "invalid if condition");
            return None;
        };

        let Some(true_branch) = self.compound_statement() else {
            self.error(ErrorCode::InvalidStatement, "invalid if branch body");
            return None;
        };

        let false_branch = if self.at_keyword(contextual::ELSE) {
            self.advance();
            match self.compound_statement() {
                Some(branch) => branch,
                None => {
                    self.error(ErrorCode::InvalidStatement, "invalid else branch body");
                    return None;
                }
            }
        } else {
            // No source else: a synthetic empty branch at (0,0) so that
            // later stages never special-case a missing one.
            CompoundStatement::synthetic()
        };

        Some(SelectionStatement {
            keyword,
            is_constexpr,
            condition,
            true_branch,
            false_branch,
        })
    }

    /// statement:
    ///     selection-statement
    ///     compound-statement
    ///     declaration
    ///     expression-statement
    ///
    /// Dispatch is in that fixed order; the first match wins.
    fn statement(&mut self, semicolon_required: bool) -> Option<Statement> {
        if let Some(s) = self.selection_statement() {
            return Some(Statement {
                kind: StatementKind::Selection(s),
            });
        }
        if let Some(s) = self.compound_statement() {
            return Some(Statement {
                kind: StatementKind::Compound(s),
            });
        }
        if let Some(s) = self.declaration(true) {
            return Some(Statement {
                kind: StatementKind::Declaration(s),
            });
        }
        if let Some(s) = self.expression_statement(semicolon_required) {
            return Some(Statement {
                kind: StatementKind::Expression(s),
            });
        }
        None
    }

    /// compound-statement:
    ///     { statement* }
    ///
    /// An inner statement that fails aborts the whole compound.
    fn compound_statement(&mut self) -> Option<CompoundStatement> {
        if !self.at(Lexeme::LBrace) {
            return None;
        }
        let pos = self.cursor.current()?.pos;
        self.advance();

        let mut node = CompoundStatement {
            pos,
            statements: Vec::new(),
        };

        loop {
            if self.cursor.at_end() {
                self.error(
                    ErrorCode::UnclosedDelimiter,
                    "unexpected end of input - { is not matched by }",
                );
                return None;
            }
            if self.at(Lexeme::RBrace) {
                break;
            }
            match self.statement(true) {
                Some(statement) => node.statements.push(statement),
                None => {
                    self.error(
                        ErrorCode::InvalidStatement,
                        "invalid statement in compound-statement",
                    );
                    return None;
                }
            }
        }

        self.advance();
        Some(node)
    }

    //  ========== Declarations ==========

    /// parameter-declaration:
    ///     passing-style? this-specifier? declaration
    ///
    /// The passing-style and this-specifier words are identifiers,
    /// recognized here by text alone.
    fn parameter_declaration(&mut self) -> Option<ParameterDeclaration> {
        let pos = self.cursor.current()?.pos;

        let mut pass = PassingStyle::In;
        if let Some(token) = self.cursor.current() {
            if token.lexeme == Lexeme::Ident {
                if let Some(style) = PassingStyle::from_ident(&token.text) {
                    pass = style;
                    self.advance();
                }
            }
        }

        let mut specifier = ThisSpecifier::None;
        if let Some(token) = self.cursor.current() {
            if token.lexeme == Lexeme::Ident {
                if let Some(spec) = ThisSpecifier::from_ident(&token.text) {
                    specifier = spec;
                    self.advance();
                }
            }
        }

        let declaration = self.declaration(false)?;

        Some(ParameterDeclaration {
            pos,
            pass,
            specifier,
            declaration,
        })
    }

    /// parameter-declaration-list:
    ///     ( parameter-declaration ( , parameter-declaration )* )
    ///     ( )
    ///
    /// A missing comma or an unparsable parameter is a hard error that
    /// aborts the list.
    fn parameter_declaration_list(&mut self) -> Option<ParameterList> {
        if !self.at(Lexeme::LParen) {
            return None;
        }
        let open_paren = self.cursor.current()?.pos;
        self.advance();

        let mut list = ParameterList {
            open_paren,
            close_paren: SourcePos::SYNTHETIC,
            parameters: Vec::new(),
        };

        while let Some(parameter) = self.parameter_declaration() {
            list.parameters.push(parameter);

            if self.at(Lexeme::RParen) {
                break;
            }
            if !self.at(Lexeme::Comma) {
                self.error(ErrorCode::InvalidParameterList, "expected , in parameter list");
                return None;
            }
            self.advance();
        }

        if !self.at(Lexeme::RParen) {
            self.error(ErrorCode::InvalidParameterList, "invalid parameter list");
            self.advance();
            return None;
        }
        if let Some(token) = self.cursor.current() {
            list.close_paren = token.pos;
        }
        self.advance();
        Some(list)
    }

    /// declaration:
    ///     identifier : parameter-declaration-list = statement
    ///     identifier : id-expression? = statement
    ///     identifier : id-expression ;?
    ///
    /// The `:` after the name decides whether this is a declaration at
    /// all; on any other token the cursor rewinds to the entry position,
    /// giving back the speculatively consumed name. This is how the
    /// statement/declaration ambiguity is resolved.
    fn declaration(&mut self, semicolon_required: bool) -> Option<Declaration> {
        if self.cursor.at_end() {
            return None;
        }

        let start = self.cursor.save();
        let name = self.unqualified_id()?;

        if !self.at(Lexeme::Colon) {
            self.cursor.rewind(start);
            return None;
        }
        self.advance();

        // Optional type: a parameter list makes it a function, an
        // id-expression (possibly elided) an object.
        let ty = if let Some(list) = self.parameter_declaration_list() {
            DeclarationType::Function(list)
        } else if let Some(id) = self.id_expression() {
            DeclarationType::Object(id)
        } else {
            DeclarationType::Object(IdExpression::Empty)
        };

        let mut node = Declaration {
            name,
            ty,
            initializer: None,
        };

        if !self.at(Lexeme::Eq) {
            if self.at(Lexeme::Semicolon) {
                self.advance();
                return Some(node);
            }
            if self.cursor.at_end() {
                return Some(node);
            }
            if semicolon_required {
                self.error(
                    ErrorCode::MissingSemicolon,
                    "missing semicolon at end of declaration",
                );
                return None;
            }
            return Some(node);
        }
        self.advance();

        match self.statement(semicolon_required) {
            Some(statement) => node.initializer = Some(Box::new(statement)),
            None => {
                self.error(ErrorCode::IllFormedInitializer, "ill-formed initializer");
                self.advance();
                return None;
            }
        }

        Some(node)
    }

    /// translation-unit:
    ///     declaration*
    fn translation_unit(&mut self) -> TranslationUnit {
        let mut unit = TranslationUnit::default();
        while let Some(declaration) = self.declaration(true) {
            unit.declarations.push(declaration);
        }
        unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recast_lexer::Lexer;

    fn tokens(source: &str) -> Vec<Token> {
        let (tokens, diagnostics) = Lexer::new(source).tokenize();
        assert!(diagnostics.is_empty(), "lex errors: {:?}", diagnostics);
        tokens
    }

    fn parse_one(source: &str) -> (TranslationUnit, Vec<Diagnostic>, bool) {
        let mut errors = ErrorSink::new();
        let mut parser = Parser::new(&mut errors);
        let ok = parser.parse(&tokens(source));
        let tree = parser.into_tree();
        (tree, errors.into_vec(), ok)
    }

    /// Walk head operands down to the requested level; every level above
    /// it must have collected no terms for this to be meaningful.
    fn descend(expr: &BinaryExpr, level: BinaryLevel) -> &BinaryExpr {
        let mut expr = expr;
        loop {
            if expr.level == level {
                return expr;
            }
            match &expr.head {
                BinaryOperand::Binary(inner) => expr = inner,
                BinaryOperand::Prefix(_) => panic!("level {:?} not reached", level),
            }
        }
    }

    fn initializer_expr(tree: &TranslationUnit) -> &BinaryExpr {
        let declaration = &tree.declarations[0];
        let initializer = declaration.initializer.as_ref().unwrap();
        match &initializer.kind {
            StatementKind::Expression(s) => &s.expr.expr,
            other => panic!("expected expression statement, got {:?}", other),
        }
    }

    #[test]
    fn test_higher_precedence_groups_deeper() {
        let (tree, errors, ok) = parse_one("x : int = a + b * c ;");
        assert!(ok);
        assert!(errors.is_empty());

        let additive = descend(initializer_expr(&tree), BinaryLevel::Additive);
        assert_eq!(additive.tail.len(), 1);
        assert_eq!(additive.tail[0].op.text, "+");

        let BinaryOperand::Binary(multiplicative) = &additive.tail[0].expr else {
            panic!("additive term should hold the multiplicative layer");
        };
        assert_eq!(multiplicative.level, BinaryLevel::Multiplicative);
        assert_eq!(multiplicative.tail.len(), 1);
        assert_eq!(multiplicative.tail[0].op.text, "*");
    }

    #[test]
    fn test_same_level_collects_flat_terms() {
        let (tree, _, ok) = parse_one("x : int = a - b - c ;");
        assert!(ok);

        let additive = descend(initializer_expr(&tree), BinaryLevel::Additive);
        assert_eq!(additive.tail.len(), 2);
        assert_eq!(additive.tail[0].op.text, "-");
        assert_eq!(additive.tail[1].op.text, "-");
    }

    #[test]
    fn test_dangling_operator_keeps_partial_node() {
        let (tree, errors, ok) = parse_one("x : int = a + ;");
        assert!(ok);

        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("invalid expression after +"));

        let additive = descend(initializer_expr(&tree), BinaryLevel::Additive);
        assert!(additive.tail.is_empty());
    }

    #[test]
    fn test_trailing_input_reports_and_fails() {
        let (_, errors, ok) = parse_one(") ; ;");
        assert!(!ok);

        assert!(errors[0].message.contains("unexpected text"));
        assert_eq!(errors[0].pos, SourcePos::new(1, 1));
    }

    #[test]
    fn test_tree_accumulates_across_calls() {
        let mut errors = ErrorSink::new();
        let mut parser = Parser::new(&mut errors);
        assert!(parser.parse(&tokens("a : int ;")));
        assert!(parser.parse(&tokens("b : int ;")));
        let tree = parser.into_tree();
        assert!(errors.is_empty());
        assert_eq!(tree.declarations.len(), 2);
        assert_eq!(tree.declarations[1].name.text(), "b");
    }
}
