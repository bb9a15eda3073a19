//! A pipeline-level pass that folds repeated numeric factors left in the
//! terms of a sum, or under a top-level negation, after differentiation.

use crate::expr::Expr;

/// Folds multiple constant factors inside each term of a top-level sum, or
/// inside a negated top-level product, into a single leading coefficient.
/// Any other expression passes through untouched.
///
/// Product simplification already folds the direct constants of every
/// product, so on trees that have been through [`Expr::simplify`] this pass
/// finds nothing to do; it exists as a safety net for trees that reach
/// rendering by some other route. The `stays_dormant_on_simplified_trees`
/// test below pins that down.
pub fn combine_constants(expr: Expr) -> Expr {
    match expr {
        Expr::Sum(terms) => {
            let mut changed = false;
            let terms: Vec<Expr> = terms
                .into_iter()
                .map(|term| match term {
                    Expr::Product(factors) if factors.len() >= 2 => {
                        match fold_factors(&factors) {
                            Some(folded) => {
                                changed = true;
                                Expr::Product(folded)
                            },
                            None => Expr::Product(factors),
                        }
                    },
                    term => term,
                })
                .collect();

            let sum = Expr::Sum(terms);
            if changed {
                sum.simplify()
            } else {
                sum
            }
        },
        Expr::Neg(inner) => match *inner {
            Expr::Product(factors) if factors.len() >= 2 => {
                let folded = match fold_factors(&factors) {
                    Some(folded) => folded,
                    None => factors,
                };
                Expr::Neg(Box::new(Expr::Product(folded)))
            },
            inner => Expr::Neg(Box::new(inner)),
        },
        expr => expr,
    }
}

/// Folds the constant factors into one leading constant, if there are at
/// least two of them. Returns `None` when there is nothing to fold.
fn fold_factors(factors: &[Expr]) -> Option<Vec<Expr>> {
    let constants: Vec<f64> = factors.iter().filter_map(Expr::as_constant).collect();
    if constants.len() < 2 {
        return None;
    }

    let product: f64 = constants.iter().product();
    let mut folded = vec![Expr::Constant(product)];
    folded.extend(
        factors
            .iter()
            .filter(|factor| factor.as_constant().is_none())
            .cloned(),
    );
    Some(folded)
}

#[cfg(test)]
mod tests {
    use crate::expr::Expr;
    use polydiff_parser::parser::{ast, Parser};
    use pretty_assertions::assert_eq;
    use super::combine_constants;

    fn var(name: &str) -> Expr {
        Expr::Variable(name.to_string())
    }

    #[test]
    fn folds_constants_in_sum_terms() {
        // a hand-built, unsimplified tree: 2*3*x + x
        let sum = Expr::Sum(vec![
            Expr::Product(vec![Expr::Constant(2.0), Expr::Constant(3.0), var("x")]),
            var("x"),
        ]);

        assert_eq!(combine_constants(sum), Expr::Sum(vec![
            Expr::Product(vec![Expr::Constant(6.0), var("x")]),
            var("x"),
        ]));
    }

    #[test]
    fn folds_constants_under_negation() {
        // -(2*3*x)
        let neg = Expr::Neg(Box::new(Expr::Product(vec![
            Expr::Constant(2.0),
            Expr::Constant(3.0),
            var("x"),
        ])));

        assert_eq!(combine_constants(neg), Expr::Neg(Box::new(Expr::Product(vec![
            Expr::Constant(6.0),
            var("x"),
        ]))));
    }

    #[test]
    fn leaves_single_constants_alone() {
        let sum = Expr::Sum(vec![
            Expr::Product(vec![Expr::Constant(2.0), var("x")]),
            Expr::Constant(5.0),
        ]);
        assert_eq!(combine_constants(sum.clone()), sum);
    }

    #[test]
    fn stays_dormant_on_simplified_trees() {
        // every tree the pipeline hands to this pass has been through
        // `simplify`, whose product rule has already folded direct constants;
        // confirm the pass never fires on pipeline output
        let inputs = [
            "x^2 + 2*x + 1",
            "x^2 - 2*x + 1",
            "2*x^4 + 3*x^3 + 4*x^2",
            "0.5*x^3 + 1.5*x^2 - 0.1*x^9",
            "-3*x^2",
            "-x",
            "x*y^2",
            "x*y + y*z",
            "2*x^-1",
            "5",
            "",
        ];

        for input in inputs {
            for variable in ["x", "y"] {
                let ast = Parser::new(input).try_parse_full::<ast::Expr>().unwrap();
                let derivative = Expr::from(ast).differentiate(variable).simplify();
                assert_eq!(
                    combine_constants(derivative.clone()),
                    derivative,
                    "constant folding fired for d/d{variable}({input})",
                );
            }
        }
    }
}
