use std::fmt::Display;

use crate::Span;

/// Every lexical category the language knows about.
///
/// Only the literal and identifier variants carry a payload, so a token
/// has a value exactly when its kind is one of those two.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum TokenKind {
    IntegerLiteral(i32),
    Identifier(String),

    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    Semicolon,

    Addition,       // +
    Multiplication, // *
    Division,       // /

    Negation,          // -
    BitwiseComplement, // ~
    LogicalNegation,   // !

    // Reserved
    Int,
    Return,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::IntegerLiteral(_) => "IntegerLiteral",
            TokenKind::Identifier(_) => "Identifier",
            TokenKind::OpenParen => "OpenParen",
            TokenKind::CloseParen => "CloseParen",
            TokenKind::OpenBrace => "OpenBrace",
            TokenKind::CloseBrace => "CloseBrace",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Addition => "Addition",
            TokenKind::Multiplication => "Multiplication",
            TokenKind::Division => "Division",
            TokenKind::Negation => "Negation",
            TokenKind::BitwiseComplement => "BitwiseComplement",
            TokenKind::LogicalNegation => "LogicalNegation",
            TokenKind::Int => "Int",
            TokenKind::Return => "Return",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Borrowed view of a token's payload.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenValue<'a> {
    Integer(i32),
    Identifier(&'a str),
}

impl Display for TokenValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Integer(value) => write!(f, "{}", value),
            TokenValue::Identifier(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

pub type TokenStream = Vec<Token>;

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{} ({})", self.kind, value),
            None => write!(f, "{} ()", self.kind),
        }
    }
}

impl Token {
    pub fn value(&self) -> Option<TokenValue<'_>> {
        match &self.kind {
            TokenKind::IntegerLiteral(value) => Some(TokenValue::Integer(*value)),
            TokenKind::Identifier(name) => Some(TokenValue::Identifier(name)),
            _ => None,
        }
    }

    /// Number of source bytes this token consumed, including the delimiter
    /// that terminates a keyword.
    pub fn len(&self) -> usize {
        (self.span.end.0 - self.span.start.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn lexeme<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start.0 as usize..self.span.end.0 as usize]
    }

    pub fn debug(&self) {
        println!("{}", self);
    }
}
