//! The token cursor.

use recast_lexer::Token;

/// A read-only window over one `parse()` call's token batch.
///
/// `pos` ranges over `0..=tokens.len()`; the one-past-the-end position is
/// the end-of-input state. All token access in the parser goes through
/// this type. Rewinding is a plain restore of a previously saved index;
/// no token is ever buffered or duplicated.
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    /// The current token, or `None` at end of input.
    pub fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// The token `offset` positions away from the current one. Negative
    /// offsets look back at recently consumed tokens, which diagnostics
    /// use to name the operator that led somewhere invalid.
    pub fn peek(&self, offset: isize) -> Option<&'t Token> {
        let index = self.pos as isize + offset;
        if index < 0 {
            return None;
        }
        self.tokens.get(index as usize)
    }

    /// Advance by `n` tokens, saturating at end of input.
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.tokens.len());
    }

    pub fn at_end(&self) -> bool {
        self.pos == self.tokens.len()
    }

    /// Save the current position for a later `rewind`.
    pub fn save(&self) -> usize {
        self.pos
    }

    /// Restore a position previously returned by `save`, giving back any
    /// tokens speculatively consumed since.
    pub fn rewind(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos);
        self.pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recast_common::{SourcePos, Span};
    use recast_lexer::Lexeme;

    fn tokens() -> Vec<Token> {
        ["a", "b", "c"]
            .iter()
            .enumerate()
            .map(|(i, text)| {
                Token::new(
                    Lexeme::Ident,
                    *text,
                    SourcePos::new(1, i as u32 + 1),
                    Span::from_usize(i, i + 1),
                )
            })
            .collect()
    }

    #[test]
    fn test_advance_saturates() {
        let tokens = tokens();
        let mut cursor = TokenCursor::new(&tokens);
        cursor.advance(10);
        assert!(cursor.at_end());
        assert!(cursor.current().is_none());
    }

    #[test]
    fn test_peek_both_directions() {
        let tokens = tokens();
        let mut cursor = TokenCursor::new(&tokens);
        cursor.advance(1);
        assert_eq!(cursor.peek(-1).map(|t| t.text.as_str()), Some("a"));
        assert_eq!(cursor.peek(0).map(|t| t.text.as_str()), Some("b"));
        assert_eq!(cursor.peek(1).map(|t| t.text.as_str()), Some("c"));
        assert!(cursor.peek(2).is_none());
        assert!(cursor.peek(-2).is_none());
    }

    #[test]
    fn test_save_and_rewind_consume_nothing_net() {
        let tokens = tokens();
        let mut cursor = TokenCursor::new(&tokens);
        let saved = cursor.save();
        cursor.advance(2);
        cursor.rewind(saved);
        assert_eq!(cursor.current().map(|t| t.text.as_str()), Some("a"));
    }
}
