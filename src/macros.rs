//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a pattern handler for tokens without a value
//!
//! These macros keep the pattern table readable.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind, including its payload if it has one
/// * `$span` - The source span the token consumed
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerLiteral(42), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $span:expr) => {
        Token {
            kind: $kind,
            span: $span,
        }
    };
}

/// Creates a handler for patterns whose token carries no value.
///
/// The handler ignores the matched text and always yields `$kind`.
///
/// # Example
///
/// ```ignore
/// PatternRule {
///     pattern: "^\\+",
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Addition),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |_matched: &str| -> Result<TokenKind, ErrorImpl> { Ok($kind) }
    };
}
