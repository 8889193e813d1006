//! Recast - the parser core of a source-to-source translator for an
//! experimental alternative syntax of a systems programming language.
//!
//! This facade re-exports the member crates' public API. The pipeline
//! is: [`Lexer`] turns source text into tokens, [`Parser`] turns token
//! batches into an accumulated [`syntax::TranslationUnit`], and any
//! [`syntax::Visitor`] walks the result.

pub use recast_common::{SourcePos, Span};
pub use recast_diagnostic::{emit, Diagnostic, DiagnosticKind, ErrorCode, ErrorSink};
pub use recast_lexer::{Lexeme, Lexer, Token};
pub use recast_parser::{parse, Parser, TokenCursor};
pub use recast_syntax as syntax;
