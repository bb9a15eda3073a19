use super::factor::Factor;
use crate::{
    parser::{error::Error, Parse, Parser},
    tokenizer::TokenKind,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A `*`-joined run of factors, together with whether the term as a whole was
/// negated by the sign that preceded it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    /// Whether the term was preceded by a minus sign. Parsing a bare term
    /// leaves this `false`; the surrounding expression fills it in.
    pub negated: bool,

    /// The factors of the term, in source order. Always non-empty.
    pub factors: Vec<Factor>,

    /// The region of the source expression that this term was parsed from,
    /// not including the sign.
    pub span: Range<usize>,
}

impl Parse for Term {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let first = Factor::parse(input)?;
        let mut span = first.span();
        let mut factors = vec![first];

        while input.eat(TokenKind::Mul) {
            // once a `*` has been consumed, a factor must follow
            let factor = Factor::parse(input).map_err(Error::into_fatal)?;
            span.end = factor.span().end;
            factors.push(factor);
        }

        Ok(Self { negated: false, factors, span })
    }
}
