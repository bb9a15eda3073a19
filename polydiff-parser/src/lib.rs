//! Parser for restricted polynomial expressions.
//!
//! The accepted grammar is deliberately small: an expression is a signed sum
//! of terms, a term is a `*`-joined run of factors, and a factor is a number,
//! a variable, or a variable raised to a numeric exponent.
//!
//! ```text
//! expression := sign? term (('+' | '-') term)*
//! term       := factor ('*' factor)*
//! factor     := IDENT '^' NUMBER | IDENT | NUMBER
//! sign       := '+'* '-'?
//! ```
//!
//! There are no parentheses and no implicit multiplication; exponents may be
//! negative or fractional (`x^-0.5`). A power whose base is itself numeric is
//! evaluated during parsing, so `2^10` parses as the constant `1024`.
//!
//! ```
//! use polydiff_parser::parser::{ast::Expr, Parser};
//!
//! let expr = Parser::new("x^2 - 2*x + 1").try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.terms.len(), 3);
//! assert!(expr.terms[1].negated);
//! ```

pub mod parser;
pub mod tokenizer;
