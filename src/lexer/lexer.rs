use std::sync::Arc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::{
    patterns::PatternTable,
    tokens::{Token, TokenStream},
};

pub struct Lexer<'t> {
    table: &'t PatternTable,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Arc<str>,
}

impl<'t> Lexer<'t> {
    pub fn new(table: &'t PatternTable, source: String, file: Option<String>) -> Lexer<'t> {
        let file_name: Arc<str> = if let Some(file) = file {
            Arc::from(file)
        } else {
            Arc::from("shell")
        };

        Lexer {
            table,
            tokens: vec![],
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// `run` refuses sources longer than `u32::MAX` bytes, so the cursor
    /// always fits in a `Position`.
    pub fn position(&self) -> Position {
        Position(self.pos as u32, Arc::clone(&self.file))
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn skip_whitespace(&mut self) {
        let skipped = self.remainder().len() - self.remainder().trim_start().len();
        self.advance_n(skipped);
    }

    /// Lexes one token at the cursor and moves past it.
    fn step(&mut self) -> Result<(), Error> {
        let classified = self
            .table
            .classify(self.remainder())
            .map_err(|err| Error::new(err, self.position()))?;

        let Some((kind, length)) = classified else {
            // Only reached with input left, so there is a character here.
            let character = self.at().unwrap_or('\0');
            return Err(Error::new(
                ErrorImpl::InvalidCharacter { character },
                self.position(),
            ));
        };

        let start = self.position();
        self.advance_n(length);
        let end = self.position();

        self.push(MK_TOKEN!(kind, Span { start, end }));
        Ok(())
    }

    pub fn run(mut self) -> Result<TokenStream, Error> {
        check_source_len(self.source.len()).map_err(|err| Error::new(err, self.position()))?;

        loop {
            self.skip_whitespace();

            if self.at_eof() {
                return Ok(self.tokens);
            }

            self.step()?;
        }
    }
}

/// Positions are stored as `u32` byte offsets.
pub fn check_source_len(length: usize) -> Result<u32, ErrorImpl> {
    u32::try_from(length).map_err(|_| ErrorImpl::SourceTooLarge { length })
}

/// Lexes `source` with the built-in pattern table.
pub fn tokenize(source: String, file: Option<String>) -> Result<TokenStream, Error> {
    tokenize_with(PatternTable::default_table(), source, file)
}

/// Lexes `source` with a caller supplied pattern table.
///
/// Fails on the first character no rule accepts, or the first literal that
/// cannot be represented. Tokens lexed before the failure are dropped.
pub fn tokenize_with(
    table: &PatternTable,
    source: String,
    file: Option<String>,
) -> Result<TokenStream, Error> {
    Lexer::new(table, source, file).run()
}
