use super::term::Term;
use crate::{
    parser::{
        error::{kind, Error},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A full expression: signed terms joined by `+` and `-`.
///
/// An expression with no terms is valid and stands for zero; it is what empty
/// input parses to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expr {
    /// The terms of the expression, in source order.
    pub terms: Vec<Term>,

    /// The region of the source expression that this expression was parsed
    /// from.
    pub span: Range<usize>,
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let mut terms = Vec::new();
        let mut negated = leading_sign(input);

        // empty input (or a bare `+`) is an empty sum, i.e. zero
        if input.at_eof() && !negated {
            return Ok(Self { terms, span: input.eof_span() });
        }

        loop {
            let mut term = Term::parse(input)?;
            term.negated = negated;
            terms.push(term);

            if input.at_eof() {
                break;
            }
            let token = input.next_token()?;
            match token.kind {
                TokenKind::Add => {
                    while input.eat(TokenKind::Add) {}
                    negated = input.eat(TokenKind::Sub);
                },
                TokenKind::Sub => negated = true,
                _ => {
                    return Err(Error::new_fatal(
                        vec![token.span],
                        kind::ExpectedOperator { found: token.lexeme.to_owned() },
                    ));
                },
            }
        }

        let span = match (terms.first(), terms.last()) {
            (Some(first), Some(last)) => first.span.start..last.span.end,
            _ => 0..0,
        };
        Ok(Self { terms, span })
    }
}

/// Consumes a leading sign: any run of `+` followed by at most one `-`.
/// Returns whether the first term is negated.
fn leading_sign(input: &mut Parser) -> bool {
    while input.eat(TokenKind::Add) {}
    input.eat(TokenKind::Sub)
}
