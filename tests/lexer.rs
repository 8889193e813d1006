//! Integration tests for recast-lexer crate.

use recast_common::SourcePos;
use recast_lexer::{Lexeme, Lexer, Token};

fn lex(source: &str) -> Vec<Token> {
    let (tokens, diagnostics) = Lexer::new(source).tokenize();
    assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
    tokens
}

fn kinds(source: &str) -> Vec<Lexeme> {
    lex(source).iter().map(|t| t.lexeme).collect()
}

// ============================================================================
// Basic Token Kinds
// ============================================================================

#[test]
fn test_delimiters() {
    assert_eq!(
        kinds("( ) [ ] { }"),
        vec![
            Lexeme::LParen,
            Lexeme::RParen,
            Lexeme::LBracket,
            Lexeme::RBracket,
            Lexeme::LBrace,
            Lexeme::RBrace
        ]
    );
}

#[test]
fn test_punctuation() {
    assert_eq!(
        kinds(":: : ; , ."),
        vec![
            Lexeme::Scope,
            Lexeme::Colon,
            Lexeme::Semicolon,
            Lexeme::Comma,
            Lexeme::Dot
        ]
    );
}

#[test]
fn test_arithmetic_operators() {
    assert_eq!(
        kinds("+ - * / %"),
        vec![
            Lexeme::Plus,
            Lexeme::Minus,
            Lexeme::Star,
            Lexeme::Slash,
            Lexeme::Percent
        ]
    );
}

#[test]
fn test_postfix_operators() {
    assert_eq!(
        kinds("++ -- ^ & ~ $"),
        vec![
            Lexeme::PlusPlus,
            Lexeme::MinusMinus,
            Lexeme::Caret,
            Lexeme::Ampersand,
            Lexeme::Tilde,
            Lexeme::Dollar
        ]
    );
}

#[test]
fn test_assignment_operators() {
    assert_eq!(
        kinds("= *= /= %= += -= >>= <<="),
        vec![
            Lexeme::Eq,
            Lexeme::StarEq,
            Lexeme::SlashEq,
            Lexeme::PercentEq,
            Lexeme::PlusEq,
            Lexeme::MinusEq,
            Lexeme::ShrEq,
            Lexeme::ShlEq
        ]
    );
}

#[test]
fn test_comparison_operators() {
    assert_eq!(
        kinds("== != < <= > >= <=>"),
        vec![
            Lexeme::EqEq,
            Lexeme::BangEq,
            Lexeme::Lt,
            Lexeme::LtEq,
            Lexeme::Gt,
            Lexeme::GtEq,
            Lexeme::Spaceship
        ]
    );
}

#[test]
fn test_logical_and_shift_operators() {
    assert_eq!(
        kinds("&& || ! << >>"),
        vec![
            Lexeme::AndAnd,
            Lexeme::OrOr,
            Lexeme::Bang,
            Lexeme::Shl,
            Lexeme::Shr
        ]
    );
}

// ============================================================================
// Maximal Munch
// ============================================================================

#[test]
fn test_shift_assign_not_split() {
    assert_eq!(
        kinds("a <<= b"),
        vec![Lexeme::Ident, Lexeme::ShlEq, Lexeme::Ident]
    );
}

#[test]
fn test_spaceship_not_split() {
    assert_eq!(
        kinds("a <=> b"),
        vec![Lexeme::Ident, Lexeme::Spaceship, Lexeme::Ident]
    );
}

#[test]
fn test_adjacent_angle_runs() {
    assert_eq!(kinds("a<b"), vec![Lexeme::Ident, Lexeme::Lt, Lexeme::Ident]);
    assert_eq!(kinds("a<<b"), vec![Lexeme::Ident, Lexeme::Shl, Lexeme::Ident]);
}

#[test]
fn test_scope_vs_two_colons() {
    assert_eq!(
        kinds("a::b"),
        vec![Lexeme::Ident, Lexeme::Scope, Lexeme::Ident]
    );
    assert_eq!(
        kinds("a : : b"),
        vec![Lexeme::Ident, Lexeme::Colon, Lexeme::Colon, Lexeme::Ident]
    );
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_integer_literal() {
    let tokens = lex("42");
    assert_eq!(tokens[0].lexeme, Lexeme::Integer);
    assert_eq!(tokens[0].text, "42");
}

#[test]
fn test_float_literal() {
    let tokens = lex("3.14");
    assert_eq!(tokens[0].lexeme, Lexeme::Float);
    assert_eq!(tokens[0].text, "3.14");
}

#[test]
fn test_integer_then_postfix_dot() {
    // The dot only joins the literal when a digit follows.
    assert_eq!(kinds("1."), vec![Lexeme::Integer, Lexeme::Dot]);
}

#[test]
fn test_hexadecimal_literal() {
    let tokens = lex("0xFF2a");
    assert_eq!(tokens[0].lexeme, Lexeme::Hexadecimal);
    assert_eq!(tokens[0].text, "0xFF2a");
}

#[test]
fn test_binary_literal() {
    let tokens = lex("0b1010");
    assert_eq!(tokens[0].lexeme, Lexeme::Binary);
}

#[test]
fn test_string_literal_keeps_raw_text() {
    let tokens = lex(r#""hello\nworld""#);
    assert_eq!(tokens[0].lexeme, Lexeme::Str);
    assert_eq!(tokens[0].text, r#""hello\nworld""#);
}

#[test]
fn test_char_literal() {
    let tokens = lex(r"'\n'");
    assert_eq!(tokens[0].lexeme, Lexeme::Char);
}

// ============================================================================
// Keywords and Contextual Words
// ============================================================================

#[test]
fn test_fundamental_types_are_keywords() {
    for word in ["int", "bool", "char", "float", "double", "void", "auto"] {
        let tokens = lex(word);
        assert_eq!(tokens[0].lexeme, Lexeme::Keyword, "{}", word);
    }
}

#[test]
fn test_grammar_words_are_keywords() {
    for word in ["if", "else", "constexpr", "is", "as", "true", "false"] {
        let tokens = lex(word);
        assert_eq!(tokens[0].lexeme, Lexeme::Keyword, "{}", word);
    }
}

#[test]
fn test_passing_styles_are_plain_identifiers() {
    for word in ["in", "inout", "out", "move", "forward"] {
        let tokens = lex(word);
        assert_eq!(tokens[0].lexeme, Lexeme::Ident, "{}", word);
    }
}

#[test]
fn test_this_specifiers_are_plain_identifiers() {
    for word in ["implicit", "virtual", "override", "final"] {
        let tokens = lex(word);
        assert_eq!(tokens[0].lexeme, Lexeme::Ident, "{}", word);
    }
}

#[test]
fn test_token_compares_to_text() {
    let tokens = lex("out");
    assert!(tokens[0].is("out"));
    assert!(tokens[0] == "out");
    assert!(!tokens[0].is("in"));
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = lex("iffy intx");
    assert_eq!(tokens[0].lexeme, Lexeme::Ident);
    assert_eq!(tokens[1].lexeme, Lexeme::Ident);
}

// ============================================================================
// Positions
// ============================================================================

#[test]
fn test_positions_track_lines_and_columns() {
    let tokens = lex("ab cd\n  ef");
    assert_eq!(tokens[0].pos, SourcePos::new(1, 1));
    assert_eq!(tokens[1].pos, SourcePos::new(1, 4));
    assert_eq!(tokens[2].pos, SourcePos::new(2, 3));
}

#[test]
fn test_spans_cover_token_text() {
    let source = "abc def";
    let tokens = lex(source);
    assert_eq!(&source[tokens[1].span.range()], "def");
}

// ============================================================================
// Trivia
// ============================================================================

#[test]
fn test_line_comment() {
    let tokens = lex("a // comment ;;;\nb");
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_block_comment_spans_lines() {
    let tokens = lex("a /* one\ntwo */ b");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].pos.line, 2);
}

#[test]
fn test_slash_operator_not_comment() {
    assert_eq!(
        kinds("a / b"),
        vec![Lexeme::Ident, Lexeme::Slash, Lexeme::Ident]
    );
}

#[test]
fn test_empty_input() {
    let tokens = lex("");
    assert!(tokens.is_empty());
}

#[test]
fn test_only_trivia() {
    let tokens = lex("  // nothing\n/* here */  ");
    assert!(tokens.is_empty());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unterminated_string() {
    let (tokens, diagnostics) = Lexer::new("\"abc").tokenize();
    assert_eq!(tokens[0].lexeme, Lexeme::Error);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("unterminated"));
}

#[test]
fn test_unterminated_block_comment() {
    let (tokens, diagnostics) = Lexer::new("a /* b").tokenize();
    assert_eq!(tokens.len(), 1);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_unexpected_character() {
    let (tokens, diagnostics) = Lexer::new("a @ b").tokenize();
    assert_eq!(tokens[1].lexeme, Lexeme::Error);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("unexpected character"));
}

#[test]
fn test_single_pipe_is_error() {
    let (tokens, diagnostics) = Lexer::new("a | b").tokenize();
    assert_eq!(tokens[1].lexeme, Lexeme::Error);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_hex_without_digits() {
    let (tokens, diagnostics) = Lexer::new("0x").tokenize();
    assert_eq!(tokens[0].lexeme, Lexeme::Error);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_invalid_escape_reported() {
    let (_, diagnostics) = Lexer::new(r#""a\qb""#).tokenize();
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("invalid escape"));
}

#[test]
fn test_lexing_continues_after_error() {
    let (tokens, diagnostics) = Lexer::new("a @ b @ c").tokenize();
    assert_eq!(tokens.len(), 5);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(tokens[4].text, "c");
}
