//! Common utilities and data structures for Recast.
//!
//! This crate provides the foundational types used across the translator:
//! - `SourcePos`: line/column source positions
//! - `Span`: byte ranges for diagnostic rendering

mod pos;
mod span;

pub use pos::SourcePos;
pub use span::Span;
