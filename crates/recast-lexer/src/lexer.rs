//! The Recast lexer.

use crate::token::{is_keyword, Lexeme, Token};
use recast_common::{SourcePos, Span};
use recast_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};

/// The Recast lexer.
///
/// Converts source code into a flat token sequence. Lexical problems are
/// collected as diagnostics; scanning always continues to the end of the
/// input so the parser sees as much of the program as possible.
pub struct Lexer<'src> {
    source: &'src str,
    chars: std::iter::Peekable<std::str::CharIndices<'src>>,
    /// Byte position one past the last consumed character.
    pos: usize,
    line: u32,
    col: u32,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            pos: 0,
            line: 1,
            col: 1,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire source and return tokens and diagnostics.
    ///
    /// No end-of-input token is emitted; the parser's cursor knows where
    /// the sequence ends.
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        (tokens, self.diagnostics)
    }

    fn next_token(&mut self) -> Option<Token> {
        self.skip_trivia();

        let start = self.pos;
        let pos = SourcePos::new(self.line, self.col);
        let (_, ch) = self.advance()?;

        let lexeme = match ch {
            '(' => Lexeme::LParen,
            ')' => Lexeme::RParen,
            '[' => Lexeme::LBracket,
            ']' => Lexeme::RBracket,
            '{' => Lexeme::LBrace,
            '}' => Lexeme::RBrace,
            ';' => Lexeme::Semicolon,
            ',' => Lexeme::Comma,
            '.' => Lexeme::Dot,
            '^' => Lexeme::Caret,
            '~' => Lexeme::Tilde,
            '$' => Lexeme::Dollar,

            ':' => {
                if self.peek_char() == Some(':') {
                    self.advance();
                    Lexeme::Scope
                } else {
                    Lexeme::Colon
                }
            }

            '+' => {
                if self.peek_char() == Some('+') {
                    self.advance();
                    Lexeme::PlusPlus
                } else if self.peek_char() == Some('=') {
                    self.advance();
                    Lexeme::PlusEq
                } else {
                    Lexeme::Plus
                }
            }

            '-' => {
                if self.peek_char() == Some('-') {
                    self.advance();
                    Lexeme::MinusMinus
                } else if self.peek_char() == Some('=') {
                    self.advance();
                    Lexeme::MinusEq
                } else {
                    Lexeme::Minus
                }
            }

            '*' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    Lexeme::StarEq
                } else {
                    Lexeme::Star
                }
            }

            // `//` and `/*` never reach here; skip_trivia consumed them.
            '/' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    Lexeme::SlashEq
                } else {
                    Lexeme::Slash
                }
            }

            '%' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    Lexeme::PercentEq
                } else {
                    Lexeme::Percent
                }
            }

            '=' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    Lexeme::EqEq
                } else {
                    Lexeme::Eq
                }
            }

            '!' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    Lexeme::BangEq
                } else {
                    Lexeme::Bang
                }
            }

            // Longest match first: <<= then << then <=> then <= then <
            '<' => {
                if self.peek_char() == Some('<') {
                    self.advance();
                    if self.peek_char() == Some('=') {
                        self.advance();
                        Lexeme::ShlEq
                    } else {
                        Lexeme::Shl
                    }
                } else if self.peek_char() == Some('=') {
                    self.advance();
                    if self.peek_char() == Some('>') {
                        self.advance();
                        Lexeme::Spaceship
                    } else {
                        Lexeme::LtEq
                    }
                } else {
                    Lexeme::Lt
                }
            }

            '>' => {
                if self.peek_char() == Some('>') {
                    self.advance();
                    if self.peek_char() == Some('=') {
                        self.advance();
                        Lexeme::ShrEq
                    } else {
                        Lexeme::Shr
                    }
                } else if self.peek_char() == Some('=') {
                    self.advance();
                    Lexeme::GtEq
                } else {
                    Lexeme::Gt
                }
            }

            '&' => {
                if self.peek_char() == Some('&') {
                    self.advance();
                    Lexeme::AndAnd
                } else {
                    Lexeme::Ampersand
                }
            }

            '|' => {
                if self.peek_char() == Some('|') {
                    self.advance();
                    Lexeme::OrOr
                } else {
                    self.error_unexpected_char(ch, start, pos);
                    Lexeme::Error
                }
            }

            '"' => self.string_literal(start, pos),
            '\'' => self.char_literal(start, pos),

            '0'..='9' => self.number(ch, start, pos),

            'a'..='z' | 'A'..='Z' | '_' => self.identifier(),

            _ => {
                self.error_unexpected_char(ch, start, pos);
                Lexeme::Error
            }
        };

        let text = self.source[start..self.pos].to_string();
        Some(Token::new(
            lexeme,
            text,
            pos,
            Span::from_usize(start, self.pos),
        ))
    }

    /// Advance to the next character, maintaining line/column counters.
    fn advance(&mut self) -> Option<(usize, char)> {
        let result = self.chars.next();
        if let Some((pos, ch)) = result {
            self.pos = pos + ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        result
    }

    /// Peek at the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    /// Peek at the nth character ahead.
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n).map(|(_, ch)| ch)
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek_char() {
                Some(ch) if ch.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_nth(1) == Some('/') => {
                    self.skip_line_comment();
                }
                Some('/') if self.peek_nth(1) == Some('*') => {
                    self.advance(); // /
                    self.advance(); // *
                    self.skip_block_comment();
                }
                _ => break,
            }
        }
    }

    /// Skip a line comment (`//` to end of line).
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Skip a block comment (`/*` ... `*/`).
    fn skip_block_comment(&mut self) {
        loop {
            match self.advance() {
                Some((_, '*')) => {
                    if self.peek_char() == Some('/') {
                        self.advance();
                        break;
                    }
                }
                None => {
                    let pos = SourcePos::new(self.line, self.col);
                    let span = Span::from_usize(self.pos, self.pos);
                    self.diagnostics.push(
                        Diagnostic::error(
                            DiagnosticKind::Lexer,
                            pos,
                            span,
                            "unterminated block comment",
                        )
                        .with_code(ErrorCode::UnterminatedComment),
                    );
                    break;
                }
                _ => {}
            }
        }
    }

    /// Scan a string literal (double-quoted). The opening quote is already
    /// consumed; the token text keeps the raw source spelling.
    fn string_literal(&mut self, start: usize, pos: SourcePos) -> Lexeme {
        loop {
            match self.advance() {
                Some((_, '"')) => break,
                Some((_, '\\')) => {
                    self.escape_char();
                }
                Some(_) => {}
                None => {
                    let span = Span::from_usize(start, self.pos);
                    self.diagnostics.push(
                        Diagnostic::error(DiagnosticKind::Lexer, pos, span, "unterminated string")
                            .with_code(ErrorCode::UnterminatedString)
                            .with_label(Label::new(span, "string starts here")),
                    );
                    return Lexeme::Error;
                }
            }
        }
        Lexeme::Str
    }

    /// Scan a character literal (single-quoted).
    fn char_literal(&mut self, start: usize, pos: SourcePos) -> Lexeme {
        match self.advance() {
            Some((_, '\\')) => {
                self.escape_char();
            }
            Some((_, '\'')) | None => {
                let span = Span::from_usize(start, self.pos);
                self.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::Lexer,
                        pos,
                        span,
                        "empty or unterminated character literal",
                    )
                    .with_code(ErrorCode::UnterminatedString),
                );
                return Lexeme::Error;
            }
            Some(_) => {}
        }

        match self.advance() {
            Some((_, '\'')) => Lexeme::Char,
            _ => {
                let span = Span::from_usize(start, self.pos);
                self.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::Lexer,
                        pos,
                        span,
                        "unterminated character literal",
                    )
                    .with_code(ErrorCode::UnterminatedString),
                );
                Lexeme::Error
            }
        }
    }

    /// Validate an escape sequence; the backslash is already consumed.
    fn escape_char(&mut self) {
        match self.advance() {
            Some((_, 'n' | 'r' | 't' | '0' | '\\' | '"' | '\'')) => {}
            Some((escape_pos, ch)) => {
                let pos = SourcePos::new(self.line, self.col);
                let span = Span::from_usize(escape_pos, self.pos);
                self.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::Lexer,
                        pos,
                        span,
                        format!("invalid escape sequence: \\{}", ch),
                    )
                    .with_code(ErrorCode::InvalidEscape),
                );
            }
            None => {}
        }
    }

    /// Scan a number: decimal, float, `0x...`, or `0b...`.
    fn number(&mut self, first: char, start: usize, pos: SourcePos) -> Lexeme {
        if first == '0' {
            if let Some('x' | 'X') = self.peek_char() {
                self.advance();
                return self.radix_digits(16, Lexeme::Hexadecimal, start, pos);
            }
            if let Some('b' | 'B') = self.peek_char() {
                self.advance();
                return self.radix_digits(2, Lexeme::Binary, start, pos);
            }
        }

        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }

        // A fraction only when the dot is followed by a digit, so that
        // a postfix `.` after a literal stays its own token.
        if self.peek_char() == Some('.') && self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // .
            while let Some(ch) = self.peek_char() {
                if ch.is_ascii_digit() {
                    self.advance();
                } else {
                    break;
                }
            }
            return Lexeme::Float;
        }

        Lexeme::Integer
    }

    /// Scan the digits of a hexadecimal or binary literal.
    fn radix_digits(&mut self, radix: u32, lexeme: Lexeme, start: usize, pos: SourcePos) -> Lexeme {
        let mut seen = false;
        while let Some(ch) = self.peek_char() {
            if ch.is_digit(radix) {
                self.advance();
                seen = true;
            } else {
                break;
            }
        }
        if !seen {
            let span = Span::from_usize(start, self.pos);
            self.diagnostics.push(
                Diagnostic::error(
                    DiagnosticKind::Lexer,
                    pos,
                    span,
                    format!("number literal '{}' has no digits", &self.source[start..self.pos]),
                )
                .with_code(ErrorCode::InvalidNumber),
            );
            return Lexeme::Error;
        }
        lexeme
    }

    /// Scan an identifier or keyword.
    fn identifier(&mut self) -> Lexeme {
        let start = self.pos - 1;
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }
        if is_keyword(&self.source[start..self.pos]) {
            Lexeme::Keyword
        } else {
            Lexeme::Ident
        }
    }

    fn error_unexpected_char(&mut self, ch: char, start: usize, pos: SourcePos) {
        let span = Span::from_usize(start, self.pos);
        self.diagnostics.push(
            Diagnostic::error(
                DiagnosticKind::Lexer,
                pos,
                span,
                format!("unexpected character '{}'", ch),
            )
            .with_code(ErrorCode::UnexpectedCharacter),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        let (tokens, diagnostics) = Lexer::new(source).tokenize();
        assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
        tokens
    }

    #[test]
    fn test_scope_vs_colon() {
        let tokens = lex("a :: b : c");
        let kinds: Vec<_> = tokens.iter().map(|t| t.lexeme).collect();
        assert_eq!(
            kinds,
            vec![
                Lexeme::Ident,
                Lexeme::Scope,
                Lexeme::Ident,
                Lexeme::Colon,
                Lexeme::Ident
            ]
        );
    }

    #[test]
    fn test_maximal_munch_angle_operators() {
        let tokens = lex("<<= << <=> <= < >>= >> >= >");
        let kinds: Vec<_> = tokens.iter().map(|t| t.lexeme).collect();
        assert_eq!(
            kinds,
            vec![
                Lexeme::ShlEq,
                Lexeme::Shl,
                Lexeme::Spaceship,
                Lexeme::LtEq,
                Lexeme::Lt,
                Lexeme::ShrEq,
                Lexeme::Shr,
                Lexeme::GtEq,
                Lexeme::Gt
            ]
        );
    }

    #[test]
    fn test_contextual_words_are_identifiers() {
        for word in ["in", "inout", "out", "move", "forward", "virtual", "final"] {
            let tokens = lex(word);
            assert_eq!(tokens[0].lexeme, Lexeme::Ident, "{}", word);
        }
        for word in ["is", "as", "if", "else", "constexpr", "int"] {
            let tokens = lex(word);
            assert_eq!(tokens[0].lexeme, Lexeme::Keyword, "{}", word);
        }
    }

    #[test]
    fn test_positions_are_one_based() {
        let tokens = lex("a\n  b");
        assert_eq!(tokens[0].pos, SourcePos::new(1, 1));
        assert_eq!(tokens[1].pos, SourcePos::new(2, 3));
    }

    #[test]
    fn test_comments_are_trivia() {
        let tokens = lex("a // line\n/* block\n still */ b");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "b");
        assert_eq!(tokens[1].pos.line, 3);
    }

    #[test]
    fn test_unterminated_string_reported() {
        let (tokens, diagnostics) = Lexer::new("\"abc").tokenize();
        assert_eq!(tokens[0].lexeme, Lexeme::Error);
        assert_eq!(diagnostics.len(), 1);
    }
}
