pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the
/// tokenizer. This allows the parser to backtrack in case of an error.
///
/// Characters the lexer cannot classify become [`TokenKind::Unknown`] tokens
/// rather than truncating the stream, so errors can point at them.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: result.unwrap_or(TokenKind::Unknown),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}
