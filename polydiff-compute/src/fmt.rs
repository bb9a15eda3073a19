//! Final formatting of a derivative.
//!
//! The structural renderer in [`crate::expr`] already produces canonical
//! text for each variant; what remains here is polish that only makes sense
//! at the string level, because it concerns operator spacing rather than
//! algebra: a term rendered with a leading minus turns `a + -b` into
//! `a - b`, and a leftover unit coefficient is dropped.

use crate::expr::Expr;

/// Renders the expression and applies the string-level polish.
///
/// When the polish changes the text, the expression is wrapped in
/// [`Expr::Custom`] carrying the cleaned string, so the result still
/// differentiates like the original tree but displays the polished form.
/// Otherwise the tree is returned unchanged.
pub fn format_result(expr: Expr) -> Expr {
    let rendered = expr.to_string();
    let cleaned = cleanup(&rendered);
    if cleaned == rendered {
        expr
    } else {
        Expr::Custom(Box::new(expr), cleaned)
    }
}

/// Rewrites the addition of a negated term as a subtraction and strips unit
/// coefficients.
fn cleanup(rendered: &str) -> String {
    let mut out = rendered.replace("+ -", " - ");
    while out.contains("  ") {
        out = out.replace("  ", " ");
    }
    strip_unit_coefficients(&out)
}

/// Removes a `1*` or `1.0*` coefficient at the start of the string or after
/// a space. The boundary check keeps the `1` intact in factors like `21*x`
/// and `3.1*x`, and in negative exponents like `x^-1*y`.
fn strip_unit_coefficients(rendered: &str) -> String {
    let mut out = String::with_capacity(rendered.len());
    let mut rest = rendered;

    while !rest.is_empty() {
        let at_boundary = matches!(out.chars().last(), None | Some(' '));
        if at_boundary {
            if let Some(stripped) = rest.strip_prefix("1.0*") {
                rest = stripped;
                continue;
            }
            if let Some(stripped) = rest.strip_prefix("1*") {
                rest = stripped;
                continue;
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
            rest = chars.as_str();
        }
    }

    out
}
