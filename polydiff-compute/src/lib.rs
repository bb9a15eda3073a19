//! Symbolic differentiation of restricted polynomial expressions.
//!
//! The pipeline runs in four stages: the input text is parsed into an
//! expression tree ([`polydiff_parser`]), the tree is differentiated with
//! respect to the chosen variable, the derivative is simplified (and a
//! constant-folding pass double-checks the result), and the final tree is
//! rendered back to canonical text.
//!
//! All of it is exposed through a single function:
//!
//! ```
//! use polydiff_compute::differentiate;
//!
//! assert_eq!(differentiate("x^2 + 2*x + 1", "x").unwrap(), "2*x + 2");
//! assert_eq!(differentiate("x^3", "y").unwrap(), "0");
//! assert!(differentiate("2x", "x").is_err());
//! ```
//!
//! Every call is independent: trees are immutable values and no state is
//! shared, so calls may run concurrently without coordination.

pub mod expr;
pub mod fmt;
pub mod fold;

mod derivative;
mod simplify;

pub use expr::Expr;
pub use fmt::format_result;
pub use fold::combine_constants;
pub use polydiff_parser::parser::error::Error;

use polydiff_parser::parser::{ast, Parser};

/// Differentiates `expression` with respect to `variable`, returning the
/// canonical rendering of the simplified derivative.
///
/// Fails only when the input cannot be parsed; differentiation itself is
/// total. The returned [`Error`] can render a diagnostic report pointing at
/// the offending part of the input.
pub fn differentiate(expression: &str, variable: &str) -> Result<String, Error> {
    let ast = Parser::new(expression).try_parse_full::<ast::Expr>()?;
    let derivative = Expr::from(ast).differentiate(variable).simplify();
    Ok(format_result(combine_constants(derivative)).to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::differentiate;

    /// Differentiates with respect to `x` and unwraps, for brevity.
    fn ddx(expression: &str) -> String {
        differentiate(expression, "x").unwrap()
    }

    /// Differentiates with respect to `y` and unwraps, for brevity.
    fn ddy(expression: &str) -> String {
        differentiate(expression, "y").unwrap()
    }

    #[test]
    fn constants() {
        assert_eq!(ddx("5"), "0");
        assert_eq!(ddx("3.14"), "0");
        assert_eq!(ddx("-1"), "0");
        assert_eq!(ddx(""), "0");
    }

    #[test]
    fn variables() {
        assert_eq!(ddx("x"), "1");
        assert_eq!(ddy("y"), "1");
        assert_eq!(ddx("y"), "0");
    }

    #[test]
    fn powers() {
        assert_eq!(ddx("x^0"), "0");
        assert_eq!(ddx("x^1"), "1");
        assert_eq!(ddx("x^2"), "2*x");
        assert_eq!(ddx("x^3"), "3*x^2");
        assert_eq!(ddx("x^10"), "10*x^9");
    }

    #[test]
    fn products() {
        assert_eq!(ddx("2*x"), "2");
        assert_eq!(ddx("3*x^2"), "6*x");
        assert_eq!(ddx("5*x^3"), "15*x^2");
    }

    #[test]
    fn sums() {
        assert_eq!(ddx("x + 1"), "1");
        assert_eq!(ddx("x^2 + x"), "2*x + 1");
        assert_eq!(ddx("x^2 + 2*x + 1"), "2*x + 2");
    }

    #[test]
    fn longer_polynomials() {
        assert_eq!(ddx("x^3 + 3*x^2 + 3*x + 1"), "3*x^2 + 6*x + 3");
        assert_eq!(ddx("2*x^4 + 3*x^3 + 4*x^2"), "8*x^3 + 9*x^2 + 8*x");
        assert_eq!(ddx("5*x^3 + 9*x^2 + 18*x^7"), "15*x^2 + 18*x + 126*x^6");
        assert_eq!(ddx("5*x^30 + 9*x^2 + 18*x^7"), "150*x^29 + 18*x + 126*x^6");
        assert_eq!(ddx("x^0 + x^1"), "1");
        assert_eq!(ddx("0.5*x^3 + 1.5*x^2 - 0.1*x^9"), "1.5*x^2 + 3*x - 0.9*x^8");
    }

    #[test]
    fn negation() {
        assert_eq!(ddx("-x"), "-1");
        assert_eq!(ddx("-x^2"), "-2*x");
        assert_eq!(ddx("-3*x^2"), "-6*x");
    }

    #[test]
    fn subtraction() {
        assert_eq!(ddx("x - 1"), "1");
        assert_eq!(ddx("x^2 - x"), "2*x - 1");
        assert_eq!(ddx("x^2 - 2*x + 1"), "2*x - 2");
        assert_eq!(ddx("x^3 - 3*x^2 + 3*x - 1"), "3*x^2 - 6*x + 3");
    }

    #[test]
    fn other_variables() {
        assert_eq!(ddy("x"), "0");
        assert_eq!(ddy("y^2"), "2*y");
        assert_eq!(ddy("x^3"), "0");
        assert_eq!(ddy("z^5"), "0");
        assert_eq!(ddy("x^2 + y^2"), "2*y");
        assert_eq!(ddy("x*y"), "x");
        assert_eq!(ddy("x*y^2"), "x*2*y");
        assert_eq!(ddy("x^3 - 5*x + 1"), "0");
        assert_eq!(ddy("x^2 + 2*x*y + y^2"), "2*x + 2*y");
        assert_eq!(ddy("x*y + y*z"), "x + z");
        assert_eq!(ddy("y^3 + y^2 + y"), "3*y^2 + 2*y + 1");
        assert_eq!(ddy("x*y^2 + y*z^2"), "x*2*y + z^2");
    }

    #[test]
    fn negative_exponents() {
        assert_eq!(ddx("x^-1"), "-x^-2");
        assert_eq!(ddx("x^-2"), "-2*x^-3");
        assert_eq!(ddx("2*x^-1"), "-2*x^-2");
        assert_eq!(ddx("x^-3 + x^2"), "-3*x^-4 + 2*x");
        // the `1` of the surviving x^-1 factor is an exponent, not a
        // coefficient, and must not be elided
        assert_eq!(ddy("x^-1*y^2"), "x^-1*2*y");
    }

    #[test]
    fn fractional_exponents() {
        assert_eq!(ddx("x^-0.5"), "-0.5*x^-1.5");
        assert_eq!(ddx("x^0.5"), "0.5*x^-0.5");
    }

    #[test]
    fn whitespace_is_insignificant() {
        assert_eq!(ddx("x ^ 2 + 2 * x + 1"), "2*x + 2");
        assert_eq!(ddx("  x^2  "), "2*x");
    }

    #[test]
    fn numeric_powers_collapse_during_parsing() {
        assert_eq!(ddx("2^3"), "0");
        assert_eq!(ddx("2^3 + x"), "1");
    }

    #[test]
    fn parse_errors_are_reported() {
        assert!(differentiate("2x", "x").is_err());
        assert!(differentiate("x^^2", "x").is_err());
        assert!(differentiate("x^y", "x").is_err());
        assert!(differentiate("x +", "x").is_err());
        assert!(differentiate("$", "x").is_err());
    }
}
