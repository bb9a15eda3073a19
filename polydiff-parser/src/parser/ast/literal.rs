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

/// A numeric literal.
///
/// Integer and decimal forms are both stored as an [`f64`]; whether the value
/// is mathematically integral decides how it is rendered later, not how it is
/// stored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the literal.
    pub value: f64,

    /// The region of the source expression that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Int | TokenKind::Float => {
                let value = token.lexeme.parse::<f64>().unwrap_or(f64::INFINITY);
                if !value.is_finite() {
                    return Err(Error::new_fatal(
                        vec![token.span],
                        kind::NonFiniteConstant { literal: token.lexeme.to_owned() },
                    ));
                }
                Ok(Self { value, span: token.span })
            },
            _ => Err(Error::new(vec![token.span], kind::NonFatal)),
        }
    }
}

/// A variable name: any run of alphabetic characters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the variable.
    pub name: String,

    /// The region of the source expression that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        if token.kind == TokenKind::Name {
            Ok(Self {
                name: token.lexeme.to_owned(),
                span: token.span,
            })
        } else {
            Err(Error::new(vec![token.span], kind::NonFatal))
        }
    }
}
