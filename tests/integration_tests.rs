//! Integration tests for the public lexing API.
//!
//! These tests drive the crate the way a parser would: hand in source text,
//! get back a token stream or a positioned error.

use std::path::Path;

use minicc::{
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind, TokenValue},
    },
    line_col, render_error,
};

const PROGRAM: &str = "int main ( ) {\n    return -~!42 + 3 * 2 / 1;\n}\n";

#[test]
fn test_lex_full_program() {
    let tokens = tokenize(PROGRAM.to_string(), Some("main.c".to_string())).unwrap();

    let kinds: Vec<&TokenKind> = tokens.iter().map(|token| &token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            &TokenKind::Int,
            &TokenKind::Identifier("main".to_string()),
            &TokenKind::OpenParen,
            &TokenKind::CloseParen,
            &TokenKind::OpenBrace,
            &TokenKind::Return,
            &TokenKind::Negation,
            &TokenKind::BitwiseComplement,
            &TokenKind::LogicalNegation,
            &TokenKind::IntegerLiteral(42),
            &TokenKind::Addition,
            &TokenKind::IntegerLiteral(3),
            &TokenKind::Multiplication,
            &TokenKind::IntegerLiteral(2),
            &TokenKind::Division,
            &TokenKind::IntegerLiteral(1),
            &TokenKind::Semicolon,
            &TokenKind::CloseBrace,
        ]
    );

    for token in &tokens {
        assert_eq!(&*token.span.start.1, "main.c");
    }
}

#[test]
fn test_lexemes_match_source() {
    let tokens = tokenize(PROGRAM.to_string(), None).unwrap();
    let lexemes: Vec<&str> = tokens.iter().map(|token| token.lexeme(PROGRAM)).collect();

    assert_eq!(lexemes[0], "int ");
    assert_eq!(lexemes[1], "main");
    assert_eq!(lexemes[5], "return ");
    assert_eq!(lexemes[9], "42");
    assert_eq!(lexemes.concat().len() + whitespace_len(PROGRAM, &tokens), PROGRAM.len());
}

fn whitespace_len(source: &str, tokens: &[Token]) -> usize {
    let mut cursor = 0;
    let mut skipped = 0;

    for token in tokens {
        skipped += token.span.start.0 as usize - cursor;
        cursor = token.span.end.0 as usize;
    }

    skipped + source.len() - cursor
}

#[test]
fn test_identifier_values() {
    let tokens = tokenize("integer returning x1".to_string(), None).unwrap();
    let values: Vec<Option<TokenValue>> = tokens.iter().map(Token::value).collect();

    assert_eq!(
        values,
        vec![
            Some(TokenValue::Identifier("integer")),
            Some(TokenValue::Identifier("returning")),
            Some(TokenValue::Identifier("x1")),
        ]
    );
}

#[test]
fn test_error_line_and_column() {
    let source = "int main ( ) {\n    return 2 # 3;\n}\n";
    let error = tokenize(source.to_string(), Some("main.c".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "InvalidCharacter");
    assert_eq!(line_col(source, error.get_position().0), Some((2, 14)));

    let rendered = render_error(&error, source, Path::new("main.c"));
    assert!(rendered.starts_with("Error: InvalidCharacter"));
    assert!(rendered.contains("-> main.c:2:14"));
    assert!(rendered.contains("2 | return 2 # 3;"));
}

#[test]
fn test_overflow_stops_lexing() {
    let source = "return 3000000000;";
    let error = tokenize(source.to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "IntegerLiteralOverflow");
    assert_eq!(error.get_position().0, 7);
    assert!(error.to_string().contains("3000000000"));
}
