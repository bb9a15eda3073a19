//! The concrete kinds of parse errors, each of which knows how to render its
//! own diagnostic report.

use ariadne::{Fmt, Label, Report, ReportBuilder, ReportKind};
use polydiff_error::{ErrorKind, EXPR};
use std::any::Any;
use std::ops::Range;

/// Starts a report with the given message and one highlighted label per span.
fn report<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: impl ToString,
    label: impl ToString,
) -> ReportBuilder<'a, (&'a str, Range<usize>)> {
    let label = label.to_string();
    Report::build(ReportKind::Error, src_id, spans.first().map_or(0, |span| span.start))
        .with_message(message)
        .with_labels(spans.iter().map(|span| {
            Label::new((src_id, span.clone()))
                .with_message(&label)
                .with_color(EXPR)
        }))
}

/// An intentionally useless error. This should only be used to reject a
/// speculative parse; it contains no useful information.
#[derive(Debug, Clone, PartialEq)]
pub struct NonFatal;

impl ErrorKind for NonFatal {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        let mut builder = report(
            src_id,
            spans,
            "an internal non-fatal error occurred while parsing",
            "here",
        );
        builder.set_help("you should never see this error; please report this as a bug");
        builder.finish()
    }
}

/// The end of the expression was reached where a factor was expected.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedEof;

impl ErrorKind for UnexpectedEof {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "unexpected end of expression",
            format!("you might need to add another {} here", "factor".fg(EXPR)),
        )
        .finish()
    }
}

/// The end of the expression was expected, but something else was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedEof;

impl ErrorKind for ExpectedEof {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "expected end of expression",
            format!("I could not understand the remaining {} here", "input".fg(EXPR)),
        )
        .finish()
    }
}

/// A complete term was parsed, but the next token is not an operator.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedOperator {
    /// The offending lexeme.
    pub found: String,
}

impl ErrorKind for ExpectedOperator {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        let mut builder = report(
            src_id,
            spans,
            format!("expected `*`, `+`, `-`, or the end of the expression, found `{}`", self.found),
            "here",
        );
        builder.set_help(format!("adjacent factors must be joined with an explicit {}", "*".fg(EXPR)));
        builder.finish()
    }
}

/// A factor is not a number, a variable, or a power of a variable.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidFactor {
    /// The offending lexeme.
    pub factor: String,
}

impl ErrorKind for InvalidFactor {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("invalid factor: `{}`", self.factor),
            format!(
                "expected a {}, a {}, or a {}",
                "number".fg(EXPR),
                "variable".fg(EXPR),
                "variable^exponent".fg(EXPR),
            ),
        )
        .finish()
    }
}

/// The exponent of a power is not a number.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidExponent {
    /// The offending lexeme.
    pub found: String,
}

impl ErrorKind for InvalidExponent {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        let mut builder = report(
            src_id,
            spans,
            format!("invalid exponent: `{}`", self.found),
            "expected a number here",
        );
        builder.set_help(format!(
            "exponents must be numeric, as in {} or {}",
            "x^2".fg(EXPR),
            "x^-0.5".fg(EXPR),
        ));
        builder.finish()
    }
}

/// A numeric constant does not fit in a finite floating-point value.
#[derive(Debug, Clone, PartialEq)]
pub struct NonFiniteConstant {
    /// The text of the offending constant.
    pub literal: String,
}

impl ErrorKind for NonFiniteConstant {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("numeric constant `{}` is out of range", self.literal),
            "this value does not fit in a finite number",
        )
        .finish()
    }
}
