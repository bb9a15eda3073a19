//! Differentiation rules, one per expression variant.

use crate::expr::Expr;

impl Expr {
    /// Computes the derivative of this expression with respect to `variable`.
    ///
    /// Differentiation is purely functional: it builds a new tree and leaves
    /// `self` untouched. It is also total, because every variant the parser
    /// can produce has a differentiation rule.
    ///
    /// The result has been partially simplified along the way (the sum and
    /// product rules simplify as they go); callers that want the canonical
    /// form should still call [`Expr::simplify`] on the result.
    pub fn differentiate(&self, variable: &str) -> Expr {
        match self {
            Expr::Constant(_) => Expr::Constant(0.0),
            Expr::Variable(name) => {
                if name == variable {
                    Expr::Constant(1.0)
                } else {
                    Expr::Constant(0.0)
                }
            },
            Expr::Power { base, exponent } => power_rule(base, *exponent, variable),
            Expr::Neg(inner) => Expr::Neg(Box::new(inner.differentiate(variable))),
            Expr::Sum(terms) => sum_rule(terms, variable),
            Expr::Product(factors) => product_rule(factors, variable),
            Expr::Custom(inner, _) => inner.differentiate(variable),
        }
    }
}

/// `(v^n)' = n * v^(n-1)` when `v` is the differentiation variable, else 0.
/// The new exponent may be negative or fractional.
fn power_rule(base: &str, exponent: f64, variable: &str) -> Expr {
    if base != variable || exponent == 0.0 {
        return Expr::Constant(0.0);
    }
    if exponent == 1.0 {
        return Expr::Constant(1.0);
    }

    Expr::Product(vec![
        Expr::Constant(exponent),
        Expr::Power { base: base.to_owned(), exponent: exponent - 1.0 },
    ])
    .simplify()
}

/// `(f + g)' = f' + g'`
fn sum_rule(terms: &[Expr], variable: &str) -> Expr {
    Expr::Sum(
        terms
            .iter()
            .map(|term| term.differentiate(variable).simplify())
            .collect(),
    )
    .simplify()
}

/// `(f * g * h)' = f'*g*h + f*g'*h + f*g*h'`
fn product_rule(factors: &[Expr], variable: &str) -> Expr {
    match factors {
        [] => Expr::Constant(0.0),
        [only] => only.differentiate(variable).simplify(),
        [a, b] => Expr::Sum(vec![
            Expr::Product(vec![a.differentiate(variable), b.clone()]),
            Expr::Product(vec![a.clone(), b.differentiate(variable)]),
        ])
        .simplify(),
        _ => {
            let terms = (0..factors.len())
                .map(|i| {
                    Expr::Product(
                        factors
                            .iter()
                            .enumerate()
                            .map(|(j, factor)| {
                                if i == j {
                                    factor.differentiate(variable)
                                } else {
                                    factor.clone()
                                }
                            })
                            .collect(),
                    )
                    .simplify()
                })
                .collect();

            Expr::Sum(terms).simplify()
        },
    }
}
