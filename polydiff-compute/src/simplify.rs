//! Algebraic reduction of expression trees.

use crate::expr::Expr;

impl Expr {
    /// Reduces the expression to a simpler, equivalent form.
    ///
    /// The reduction removes structure rather than rewriting algebra:
    /// zero-valued terms and one-valued factors disappear, numeric factors of
    /// a product fold into a single leading constant, singleton sums and
    /// products unwrap to their only element, double negations cancel, and
    /// degenerate powers (`v^0`, `v^1`) collapse. Simplification is
    /// idempotent: simplifying an already-simplified tree returns it
    /// unchanged.
    pub fn simplify(self) -> Expr {
        match self {
            Expr::Power { base, exponent } => {
                if exponent == 0.0 {
                    Expr::Constant(1.0)
                } else if exponent == 1.0 {
                    Expr::Variable(base)
                } else {
                    Expr::Power { base, exponent }
                }
            },
            Expr::Neg(inner) => match inner.simplify() {
                // the negation of a constant is just another constant
                Expr::Constant(value) => Expr::Constant(-value),
                // double negation cancels
                Expr::Neg(inner) => *inner,
                inner => Expr::Neg(Box::new(inner)),
            },
            Expr::Sum(terms) => {
                let mut terms: Vec<Expr> = terms
                    .into_iter()
                    .map(Expr::simplify)
                    .filter(|term| !term.is_zero())
                    .collect();

                match terms.len() {
                    0 => Expr::Constant(0.0),
                    1 => terms.remove(0),
                    _ => Expr::Sum(terms),
                }
            },
            Expr::Product(factors) => simplify_product(factors),
            expr => expr,
        }
    }
}

fn simplify_product(factors: Vec<Expr>) -> Expr {
    // an empty product is zero in this domain, not the usual identity
    if factors.is_empty() {
        return Expr::Constant(0.0);
    }

    let simplified: Vec<Expr> = factors.into_iter().map(Expr::simplify).collect();
    if simplified.iter().any(Expr::is_zero) {
        return Expr::Constant(0.0);
    }

    let mut constants = Vec::new();
    let mut rest = Vec::new();
    for factor in simplified {
        if factor.is_one() {
            continue;
        }
        match factor.as_constant() {
            Some(value) => constants.push(value),
            None => rest.push(factor),
        }
    }

    if constants.is_empty() {
        return match rest.len() {
            0 => Expr::Constant(1.0),
            1 => rest.remove(0),
            _ => Expr::Product(rest),
        };
    }

    let product: f64 = constants.iter().product();
    if product == 0.0 {
        return Expr::Constant(0.0);
    }
    if product == 1.0 && !rest.is_empty() {
        return if rest.len() == 1 {
            rest.remove(0)
        } else {
            Expr::Product(rest)
        };
    }
    if rest.is_empty() {
        return Expr::Constant(product);
    }

    let mut factors = Vec::with_capacity(rest.len() + 1);
    factors.push(Expr::Constant(product));
    factors.extend(rest);
    Expr::Product(factors)
}
