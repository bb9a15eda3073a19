pub mod ast;
pub mod error;

use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use error::{kind, Error};
use std::ops::Range;

/// A high-level parser for the polynomial grammar. This is the type to use to
/// parse an arbitrary piece of input into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the
    /// source if the cursor is at the end of the stream.
    pub fn error(&self, kind: impl polydiff_error::ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source if the
    /// cursor is at the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns true if only whitespace remains in the stream.
    pub fn at_eof(&self) -> bool {
        self.tokens[self.cursor..].iter().all(Token::is_whitespace)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    /// Whitespace tokens are skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Consumes the next meaningful token if it has the given kind, returning
    /// whether it did. The stream is left unchanged otherwise.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        self.try_parse_with_fn(|input| {
            let token = input.next_token()?;
            if token.kind == kind {
                Ok(())
            } else {
                Err(input.error(kind::NonFatal))
            }
        })
        .is_ok()
    }

    /// Speculatively parses a value from the given stream of tokens. This
    /// function can be used in the [`Parse::parse`] implementation of a type
    /// with the given [`Parser`], as it will automatically backtrack the
    /// cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed
    /// tokens and the parsed value is returned. Otherwise, the stream is left
    /// unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a
    /// custom parsing function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed
    /// tokens and the parsed value is returned. Otherwise, the stream is left
    /// unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All of the
    /// meaningful tokens must be consumed by the parser; if not, an error is
    /// returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        if self.at_eof() {
            Ok(value)
        } else {
            Err(self.error(kind::ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream
    /// past the consumed tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}
