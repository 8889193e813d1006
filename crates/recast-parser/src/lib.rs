//! Parser for Recast.
//!
//! This crate provides a recursive descent parser over a lexed token
//! sequence, layered as a chain of binary-expression productions with
//! prefix and postfix layers below them.
//!
//! ## Error policy
//!
//! Errors are reported, not raised: a failing production records a
//! diagnostic in the error sink and returns either a best-effort partial
//! node or nothing, and parsing bails to the nearest statement boundary.
//! Exactly three productions resolve ambiguity by rewinding the cursor
//! (expression-list, declaration, qualified-id); everything else consumes
//! monotonically.

mod cursor;
mod parser;

pub use cursor::TokenCursor;
pub use parser::Parser;

use recast_diagnostic::{Diagnostic, ErrorSink};
use recast_lexer::Lexer;
use recast_syntax::TranslationUnit;

/// Parse source code into a tree.
///
/// Lexes `source` and parses the tokens through one shared error sink,
/// so lexer and parser diagnostics come back as a single ordered list.
pub fn parse(source: &str) -> (TranslationUnit, Vec<Diagnostic>) {
    let mut errors = ErrorSink::new();

    let (tokens, lex_diagnostics) = Lexer::new(source).tokenize();
    errors.extend(lex_diagnostics);

    let mut parser = Parser::new(&mut errors);
    parser.parse(&tokens);

    let tree = parser.into_tree();
    (tree, errors.into_vec())
}
