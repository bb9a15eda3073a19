//! The abstract syntax tree produced by the parser.
//!
//! The tree mirrors the grammar directly: an [`Expr`] is a list of signed
//! [`Term`]s, and a term is a list of [`Factor`]s. Every node records the
//! region of the source expression it was parsed from, so later stages can
//! point back at the input when reporting problems.

pub mod expr;
pub mod factor;
pub mod literal;
pub mod term;

pub use expr::Expr;
pub use factor::{Factor, Pow};
pub use literal::{LitNum, LitSym};
pub use term::Term;
