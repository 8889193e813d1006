//! Lexical analysis for Recast.
//!
//! This crate provides the lexer that converts alternative-syntax source
//! code into a flat token sequence for the parser, plus the token model
//! the rest of the translator shares.

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{contextual, Lexeme, Token};
