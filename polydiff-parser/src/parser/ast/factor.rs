use super::literal::{LitNum, LitSym};
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

/// A variable raised to a numeric exponent, such as `x^2` or `y^-0.5`.
///
/// The base is always a bare variable; a power whose base is itself numeric
/// never reaches the tree, because it is evaluated during parsing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pow {
    /// The base variable.
    pub base: LitSym,

    /// The exponent. May be negative or fractional.
    pub exponent: LitNum,

    /// The region of the source expression that this power was parsed from.
    pub span: Range<usize>,
}

/// A single multiplicative factor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Factor {
    /// A numeric constant.
    Number(LitNum),

    /// A bare variable.
    Symbol(LitSym),

    /// A variable raised to a numeric exponent.
    Pow(Pow),
}

impl Factor {
    /// Returns the region of the source expression this factor was parsed
    /// from.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Number(num) => num.span.clone(),
            Self::Symbol(sym) => sym.span.clone(),
            Self::Pow(pow) => pow.span.clone(),
        }
    }
}

impl Parse for Factor {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        match input.try_parse_with_fn(parse_power) {
            Ok(factor) => return Ok(factor),
            Err(err) if err.fatal => return Err(err),
            Err(_) => (),
        }

        if let Ok(sym) = input.try_parse::<LitSym>() {
            return Ok(Self::Symbol(sym));
        }

        match input.try_parse::<LitNum>() {
            Ok(num) => return Ok(Self::Number(num)),
            Err(err) if err.fatal => return Err(err),
            Err(_) => (),
        }

        // nothing matched: report the offending token, or the end of input
        Err(match input.next_token() {
            Ok(token) => Error::new(
                vec![token.span],
                kind::InvalidFactor { factor: token.lexeme.to_owned() },
            ),
            Err(err) => err,
        })
    }
}

/// Parses `IDENT ^ NUMBER` or `NUMBER ^ NUMBER`. The latter collapses to a
/// single numeric literal during parsing.
fn parse_power(input: &mut Parser) -> Result<Factor, Error> {
    enum Base {
        Sym(LitSym),
        Num(LitNum),
    }

    let base = if let Ok(sym) = input.try_parse::<LitSym>() {
        Base::Sym(sym)
    } else {
        match input.try_parse::<LitNum>() {
            Ok(num) => Base::Num(num),
            Err(err) => return Err(err),
        }
    };

    // a `^` must follow for this to be a power at all
    let caret = input.next_token()?;
    if caret.kind != TokenKind::Exp {
        return Err(Error::new(vec![caret.span], kind::NonFatal));
    }

    // the exponent is a number with at most one leading `-`; once the caret
    // has been seen, anything else is a hard error
    let negated = input.eat(TokenKind::Sub);
    let exponent = match input.try_parse::<LitNum>() {
        Ok(num) => num,
        Err(err) if err.fatal => return Err(err),
        Err(_) => {
            return Err(match input.next_token() {
                Ok(token) => Error::new_fatal(
                    vec![token.span],
                    kind::InvalidExponent { found: token.lexeme.to_owned() },
                ),
                Err(err) => err.into_fatal(),
            });
        },
    };
    let exponent = if negated {
        LitNum { value: -exponent.value, span: exponent.span }
    } else {
        exponent
    };

    match base {
        Base::Sym(base) => {
            let span = base.span.start..exponent.span.end;
            Ok(Factor::Pow(Pow { base, exponent, span }))
        },
        Base::Num(num) => {
            let value = num.value.powf(exponent.value);
            let span = num.span.start..exponent.span.end;
            if !value.is_finite() {
                return Err(Error::new_fatal(
                    vec![span],
                    kind::NonFiniteConstant {
                        literal: format!("{}^{}", num.value, exponent.value),
                    },
                ));
            }
            Ok(Factor::Number(LitNum { value, span }))
        },
    }
}
