//! The expression tree manipulated by differentiation and simplification.
//!
//! [`Expr`] is a separate type from the [`ast::Expr`] produced by the parser.
//! The AST mirrors the grammar and carries source spans; this type carries
//! only the mathematical structure, which makes it cheap to build derived
//! trees from. Conversion from the AST is done with the [`From`] trait and
//! also performs the structural normalizations the grammar promises: a term
//! with a single factor converts to that factor directly (no singleton
//! product), an expression with a single term converts to that term directly
//! (no singleton sum), and an expression with no terms converts to zero.
//!
//! Trees are immutable values. Differentiation and simplification build new
//! trees and never touch their input, so subtrees can be cloned and shared
//! freely, including across threads.
//!
//! # Rendering
//!
//! The [`Display`](fmt::Display) implementation produces the canonical text
//! form. Most variants render locally, but products do the bulk of the work:
//! the factor list is flattened for display, each nesting level printing its
//! folded numeric coefficient before its remaining factors, and numeric
//! items that end up adjacent across nesting boundaries are merged into a
//! single coefficient. A coefficient of `1` disappears entirely and a
//! coefficient of `-1` fuses into a leading minus sign, so
//! `Product([Constant(3), Product([Constant(2), Variable(x)])])` renders as
//! `6*x` and `Product([Constant(-1), Power(x, -2)])` renders as `-x^-2`.

use polydiff_parser::parser::ast;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A symbolic expression over any number of variables.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal number. Always finite; integral values render without a
    /// decimal point.
    Constant(f64),

    /// A bare variable, such as `x`.
    Variable(String),

    /// A variable raised to a numeric power. The exponent may be negative or
    /// fractional; the base is always a bare variable, never a compound
    /// expression.
    Power {
        /// The name of the base variable.
        base: String,

        /// The exponent.
        exponent: f64,
    },

    /// The negation of an expression.
    Neg(Box<Expr>),

    /// Zero or more terms added together. An empty sum stands for zero.
    Sum(Vec<Expr>),

    /// Zero or more factors multiplied together. An empty product simplifies
    /// to zero in this domain, not to the usual multiplicative identity; see
    /// [`Expr::simplify`].
    Product(Vec<Expr>),

    /// An expression paired with a fixed rendering. Displaying uses the
    /// stored text verbatim, while differentiation sees through the wrapper
    /// to the inner expression.
    Custom(Box<Expr>, String),
}

impl Expr {
    /// Returns true if the expression is the constant zero.
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Constant(value) if *value == 0.0)
    }

    /// Returns true if the expression is the constant one.
    pub fn is_one(&self) -> bool {
        matches!(self, Self::Constant(value) if *value == 1.0)
    }

    /// If the expression is a constant, returns the contained value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<ast::Expr> for Expr {
    fn from(expr: ast::Expr) -> Self {
        let mut terms: Vec<Expr> = expr.terms.into_iter().map(Self::from).collect();
        match terms.len() {
            0 => Self::Constant(0.0),
            1 => terms.remove(0),
            _ => Self::Sum(terms),
        }
    }
}

impl From<ast::Term> for Expr {
    fn from(term: ast::Term) -> Self {
        let mut factors: Vec<Expr> = term.factors.into_iter().map(Self::from).collect();
        let body = if factors.len() == 1 {
            factors.remove(0)
        } else {
            Self::Product(factors)
        };

        if term.negated {
            Self::Neg(Box::new(body))
        } else {
            body
        }
    }
}

impl From<ast::Factor> for Expr {
    fn from(factor: ast::Factor) -> Self {
        match factor {
            ast::Factor::Number(num) => Self::Constant(num.value),
            ast::Factor::Symbol(sym) => Self::Variable(sym.name),
            ast::Factor::Pow(pow) => Self::Power {
                base: pow.base.name,
                exponent: pow.exponent.value,
            },
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{}", number_string(*value)),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Power { base, exponent } => {
                if *exponent == 0.0 {
                    write!(f, "1")
                } else if *exponent == 1.0 {
                    write!(f, "{base}")
                } else {
                    write!(f, "{base}^{}", number_string(*exponent))
                }
            },
            Self::Neg(inner) => {
                // parenthesize sums to preserve precedence
                if matches!(**inner, Self::Sum(_)) {
                    write!(f, "-({inner})")
                } else {
                    write!(f, "-{inner}")
                }
            },
            Self::Sum(terms) => {
                let mut iter = terms.iter();
                if let Some(term) = iter.next() {
                    write!(f, "{term}")?;
                    for term in iter {
                        write!(f, " + {term}")?;
                    }
                }
                Ok(())
            },
            Self::Product(factors) => write_product(f, factors),
            Self::Custom(_, rendered) => write!(f, "{rendered}"),
        }
    }
}

/// Renders a number, without a decimal point when the value is integral.
/// Negative zero prints as `0`.
fn number_string(value: f64) -> String {
    if value == 0.0 {
        "0".to_owned()
    } else {
        value.to_string()
    }
}

/// A flattened element of a product rendering: a numeric coefficient, or a
/// non-constant factor printed as-is.
enum Item<'a> {
    Num(f64),
    Factor(&'a Expr),
}

fn write_product(f: &mut fmt::Formatter<'_>, factors: &[Expr]) -> fmt::Result {
    if factors.iter().any(Expr::is_zero) {
        return write!(f, "0");
    }

    let non_one: Vec<&Expr> = factors.iter().filter(|factor| !factor.is_one()).collect();
    match non_one.as_slice() {
        [] => write!(f, "1"),
        [only] => write!(f, "{only}"),
        _ => {
            let mut items = Vec::new();
            collect_items(&non_one, &mut items);

            // merge numeric neighbours, including across nesting boundaries
            let mut merged: Vec<Item> = Vec::new();
            for item in items {
                if let (Item::Num(value), Some(Item::Num(acc))) = (&item, merged.last_mut()) {
                    *acc *= *value;
                    continue;
                }
                merged.push(item);
            }

            let mut parts: Vec<String> = Vec::new();
            let mut negate_next = false;
            for (i, item) in merged.iter().enumerate() {
                match item {
                    // a coefficient of one disappears
                    Item::Num(value) if *value == 1.0 => (),
                    // a coefficient of minus one fuses into the next factor
                    Item::Num(value) if *value == -1.0 && i + 1 < merged.len() => {
                        negate_next = true;
                    },
                    Item::Num(value) => parts.push(number_string(*value)),
                    Item::Factor(factor) => {
                        if negate_next {
                            parts.push(format!("-{factor}"));
                            negate_next = false;
                        } else {
                            parts.push(factor.to_string());
                        }
                    },
                }
            }

            if parts.is_empty() {
                write!(f, "1")
            } else {
                write!(f, "{}", parts.join("*"))
            }
        },
    }
}

/// Flattens factors into displayable items. Each level folds its own direct
/// constants into a single leading coefficient, then expands its remaining
/// factors in order, with nested products expanding inline. A level whose
/// coefficient is zero collapses to a lone zero.
fn collect_items<'a>(factors: &[&'a Expr], out: &mut Vec<Item<'a>>) {
    let mut coefficient: Option<f64> = None;
    for factor in factors.iter().copied() {
        if let Some(value) = factor.as_constant() {
            *coefficient.get_or_insert(1.0) *= value;
        }
    }
    if let Some(value) = coefficient {
        if value == 0.0 {
            out.push(Item::Num(0.0));
            return;
        }
        out.push(Item::Num(value));
    }

    for factor in factors.iter().copied() {
        if factor.as_constant().is_some() {
            continue;
        }
        match factor {
            Expr::Product(inner) => {
                if inner.iter().any(Expr::is_zero) {
                    out.push(Item::Num(0.0));
                } else {
                    let non_one: Vec<&Expr> =
                        inner.iter().filter(|factor| !factor.is_one()).collect();
                    collect_items(&non_one, out);
                }
            },
            factor => out.push(Item::Factor(factor)),
        }
    }
}

#[cfg(test)]
mod tests {
    use polydiff_parser::parser::Parser;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parse the given input and return the [`Expr`] representation.
    fn parse_expr(input: &str) -> Expr {
        let ast = Parser::new(input).try_parse_full::<ast::Expr>().unwrap();
        Expr::from(ast)
    }

    #[test]
    fn constant() {
        assert_eq!(parse_expr("5"), Expr::Constant(5.0));
        assert_eq!(parse_expr("5").to_string(), "5");
    }

    #[test]
    fn variable() {
        assert_eq!(parse_expr("x"), Expr::Variable("x".to_string()));
        assert_eq!(parse_expr("x").to_string(), "x");
    }

    #[test]
    fn power() {
        assert_eq!(parse_expr("x^2"), Expr::Power {
            base: "x".to_string(),
            exponent: 2.0,
        });
        assert_eq!(parse_expr("x^2").to_string(), "x^2");
        assert_eq!(parse_expr("x^-1").to_string(), "x^-1");
    }

    #[test]
    fn single_term_has_no_singleton_product() {
        assert_eq!(parse_expr("2*x"), Expr::Product(vec![
            Expr::Constant(2.0),
            Expr::Variable("x".to_string()),
        ]));
        assert_eq!(parse_expr("2*x").to_string(), "2*x");
    }

    #[test]
    fn single_term_has_no_singleton_sum() {
        // a one-term expression converts to the term itself
        assert!(matches!(parse_expr("x^2"), Expr::Power { .. }));
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(parse_expr(""), Expr::Constant(0.0));
    }

    #[test]
    fn negated_term() {
        assert_eq!(parse_expr("-x"), Expr::Neg(Box::new(Expr::Variable("x".to_string()))));
        assert_eq!(parse_expr("-x").to_string(), "-x");
    }

    #[test]
    fn subtraction_displays_as_signed_addition() {
        let expr = parse_expr("x - 1");
        assert_eq!(expr, Expr::Sum(vec![
            Expr::Variable("x".to_string()),
            Expr::Neg(Box::new(Expr::Constant(1.0))),
        ]));
        assert_eq!(expr.to_string(), "x + -1");
    }

    #[test]
    fn polynomial_round_trips() {
        for input in ["x^2 + 2*x + 1", "x^-2 + 3*x^-1", "2*x^3 + x", "x + 1"] {
            assert_eq!(parse_expr(input).to_string(), input);
        }
    }

    #[test]
    fn negation_of_sum_is_parenthesized() {
        let expr = Expr::Neg(Box::new(Expr::Sum(vec![
            Expr::Variable("x".to_string()),
            Expr::Constant(1.0),
        ])));
        assert_eq!(expr.to_string(), "-(x + 1)");
    }

    #[test]
    fn product_with_zero_factor_displays_as_zero() {
        let expr = Expr::Product(vec![
            Expr::Constant(0.0),
            Expr::Variable("x".to_string()),
        ]);
        assert_eq!(expr.to_string(), "0");
    }

    #[test]
    fn product_drops_unit_factors() {
        let expr = Expr::Product(vec![
            Expr::Constant(1.0),
            Expr::Variable("x".to_string()),
            Expr::Constant(1.0),
        ]);
        assert_eq!(expr.to_string(), "x");
    }

    #[test]
    fn product_folds_direct_constants_first() {
        let expr = Expr::Product(vec![
            Expr::Variable("x".to_string()),
            Expr::Constant(2.0),
            Expr::Constant(3.0),
        ]);
        assert_eq!(expr.to_string(), "6*x");
    }

    #[test]
    fn nested_coefficients_merge() {
        let expr = Expr::Product(vec![
            Expr::Constant(3.0),
            Expr::Product(vec![
                Expr::Constant(2.0),
                Expr::Variable("x".to_string()),
            ]),
        ]);
        assert_eq!(expr.to_string(), "6*x");
    }

    #[test]
    fn nested_order_is_preserved() {
        // the nested coefficient stays in place: it is not adjacent to the
        // outer level's (absent) coefficient
        let expr = Expr::Product(vec![
            Expr::Variable("x".to_string()),
            Expr::Product(vec![
                Expr::Constant(2.0),
                Expr::Variable("y".to_string()),
            ]),
        ]);
        assert_eq!(expr.to_string(), "x*2*y");
    }

    #[test]
    fn minus_one_coefficient_fuses() {
        let expr = Expr::Product(vec![
            Expr::Constant(-1.0),
            Expr::Power { base: "x".to_string(), exponent: -2.0 },
        ]);
        assert_eq!(expr.to_string(), "-x^-2");
    }

    #[test]
    fn unit_coefficient_disappears() {
        let expr = Expr::Product(vec![
            Expr::Constant(0.5),
            Expr::Product(vec![
                Expr::Constant(2.0),
                Expr::Variable("x".to_string()),
            ]),
        ]);
        assert_eq!(expr.to_string(), "x");
    }

    #[test]
    fn integral_values_print_without_decimal_point() {
        assert_eq!(Expr::Constant(3.0).to_string(), "3");
        assert_eq!(Expr::Constant(-0.0).to_string(), "0");
        assert_eq!(Expr::Constant(1.5).to_string(), "1.5");
        assert_eq!(
            Expr::Power { base: "x".to_string(), exponent: -1.5 }.to_string(),
            "x^-1.5",
        );
    }

    #[test]
    fn custom_displays_verbatim() {
        let expr = Expr::Custom(
            Box::new(Expr::Variable("x".to_string())),
            "anything at all".to_string(),
        );
        assert_eq!(expr.to_string(), "anything at all");
    }
}
