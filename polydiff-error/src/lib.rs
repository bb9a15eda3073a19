//! The [`ErrorKind`] trait implemented by every user-facing error, along with
//! shared styling for rendered diagnostics.
//!
//! Each error kind knows how to build an [`ariadne`] report for itself given
//! the source spans it originated from. The crates that produce errors store
//! kinds as `Box<dyn ErrorKind>` and defer all presentation to
//! [`ErrorKind::build_report`].

use ariadne::{Color, Report};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color used to highlight the offending part of the source expression.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Any kind of error that can be reported to the user with labeled source
/// spans.
pub trait ErrorKind: Debug + Send {
    /// Returns `self` as a [`dyn Any`](Any), allowing callers (mainly tests)
    /// to recover the concrete error kind with [`Any::downcast_ref`].
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error. `spans` are the regions of the
    /// source expression the error points at, in the order the kind expects
    /// its labels.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}
