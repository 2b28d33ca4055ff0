use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{ErrorImpl, PatternError},
    MK_DEFAULT_HANDLER,
};

use super::tokens::TokenKind;

/// Turns the text matched by a rule into the kind of token it denotes.
pub type RegexHandler = fn(&str) -> Result<TokenKind, ErrorImpl>;

/// An uncompiled rule, as written in a table definition.
#[derive(Clone, Copy)]
pub struct PatternRule {
    pub pattern: &'static str,
    pub handler: RegexHandler,
}

#[derive(Clone)]
pub struct RegexPattern {
    pattern: &'static str,
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    /// The rule as written, before it was wrapped in an anchor group.
    pub fn as_str(&self) -> &str {
        self.pattern
    }
}

/// Ordered list of lexing rules. The first rule that matches wins, so the
/// order of the list is the priority of the rules and is never changed
/// after construction.
#[derive(Clone)]
pub struct PatternTable {
    patterns: Vec<RegexPattern>,
}

lazy_static! {
    static ref DEFAULT_TABLE: PatternTable =
        PatternTable::new(default_rules()).expect("built-in lexer patterns are valid");
}

/// The language's rules in priority order.
///
/// Keywords consume the whitespace that follows them and sit before the
/// identifier rule, which is how `integer` stays one identifier instead of
/// `int` followed by `eger`. The identifier rule is the catch-all and must
/// stay last.
pub fn default_rules() -> Vec<PatternRule> {
    vec![
        PatternRule { pattern: "^\\(", handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        PatternRule { pattern: "^\\+", handler: MK_DEFAULT_HANDLER!(TokenKind::Addition) },
        PatternRule { pattern: "^\\*", handler: MK_DEFAULT_HANDLER!(TokenKind::Multiplication) },
        PatternRule { pattern: "^/", handler: MK_DEFAULT_HANDLER!(TokenKind::Division) },
        PatternRule { pattern: "^\\)", handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        PatternRule { pattern: "^int\\s", handler: MK_DEFAULT_HANDLER!(TokenKind::Int) },
        PatternRule { pattern: "^\\}", handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBrace) },
        PatternRule { pattern: "^\\{", handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBrace) },
        PatternRule { pattern: "^return\\s", handler: MK_DEFAULT_HANDLER!(TokenKind::Return) },
        PatternRule { pattern: "^[0-9]+", handler: integer_handler },
        PatternRule { pattern: "^-", handler: MK_DEFAULT_HANDLER!(TokenKind::Negation) },
        PatternRule { pattern: "^~", handler: MK_DEFAULT_HANDLER!(TokenKind::BitwiseComplement) },
        PatternRule { pattern: "^!", handler: MK_DEFAULT_HANDLER!(TokenKind::LogicalNegation) },
        PatternRule { pattern: "^;", handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        PatternRule { pattern: "^[a-zA-Z]\\w*", handler: identifier_handler },
    ]
}

fn integer_handler(matched: &str) -> Result<TokenKind, ErrorImpl> {
    matched
        .parse::<i32>()
        .map(TokenKind::IntegerLiteral)
        .map_err(|_| ErrorImpl::IntegerLiteralOverflow {
            literal: matched.to_string(),
        })
}

fn identifier_handler(matched: &str) -> Result<TokenKind, ErrorImpl> {
    Ok(TokenKind::Identifier(matched.to_string()))
}

impl PatternTable {
    /// Compiles `rules` in the given order.
    ///
    /// A rule is refused if it does not compile, is not written with a
    /// leading `^`, or can match without consuming anything: a zero-length
    /// token would stop the lexer from making progress. Each rule is compiled
    /// inside `^(?:...)`, so alternations like `^a|b` match at the start too.
    pub fn new(rules: Vec<PatternRule>) -> Result<PatternTable, PatternError> {
        let mut patterns = Vec::with_capacity(rules.len());

        for rule in rules {
            if !rule.pattern.starts_with('^') {
                return Err(PatternError::Unanchored {
                    pattern: rule.pattern.to_string(),
                });
            }

            let invalid = |err: regex::Error| PatternError::InvalidRegex {
                pattern: rule.pattern.to_string(),
                message: err.to_string(),
            };

            // The rule must stand alone, or it could close the anchor group.
            Regex::new(rule.pattern).map_err(invalid)?;
            let regex = Regex::new(&format!("^(?:{})", rule.pattern)).map_err(invalid)?;

            if regex.is_match("") {
                return Err(PatternError::EmptyMatch {
                    pattern: rule.pattern.to_string(),
                });
            }

            patterns.push(RegexPattern {
                pattern: rule.pattern,
                regex,
                handler: rule.handler,
            });
        }

        Ok(PatternTable { patterns })
    }

    pub fn default_table() -> &'static PatternTable {
        &DEFAULT_TABLE
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &RegexPattern> {
        self.patterns.iter()
    }

    /// Finds the highest priority rule matching at the start of `remainder`
    /// and returns the token kind it produces with the number of bytes it
    /// consumed. `Ok(None)` means no rule applies.
    pub fn classify(&self, remainder: &str) -> Result<Option<(TokenKind, usize)>, ErrorImpl> {
        for pattern in self.patterns.iter() {
            let Some(found) = pattern.regex.find(remainder) else {
                continue;
            };

            // Empty matches would never advance the cursor.
            if found.start() != 0 || found.is_empty() {
                continue;
            }

            let kind = (pattern.handler)(found.as_str())?;
            return Ok(Some((kind, found.end())));
        }

        Ok(None)
    }
}
