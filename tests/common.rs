//! Integration tests for recast-common crate.

use recast_common::{SourcePos, Span};

#[test]
fn test_source_pos_ordering() {
    let a = SourcePos::new(1, 10);
    let b = SourcePos::new(2, 1);
    let c = SourcePos::new(2, 5);
    assert!(a < b);
    assert!(b < c);
}

#[test]
fn test_source_pos_synthetic() {
    assert!(SourcePos::SYNTHETIC.is_synthetic());
    assert!(!SourcePos::new(1, 1).is_synthetic());
    assert!(SourcePos::SYNTHETIC < SourcePos::new(1, 1));
}

#[test]
fn test_source_pos_display() {
    assert_eq!(SourcePos::new(3, 14).to_string(), "3,14");
}

#[test]
fn test_span_merge() {
    let a = Span::from_usize(10, 20);
    let b = Span::from_usize(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged.start, 10);
    assert_eq!(merged.end, 30);
}

#[test]
fn test_span_len() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.len(), 10);
}

#[test]
fn test_span_is_empty() {
    let empty = Span::from_usize(5, 5);
    let non_empty = Span::from_usize(5, 10);
    assert!(empty.is_empty());
    assert!(!non_empty.is_empty());
}

#[test]
fn test_span_range() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.range(), 5..15);
}
