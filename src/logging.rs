//! Structured log entry for failed lookups.
//!
//! The crate does not choose a logging backend. A failed resolve hands the
//! caller an [`InternalLog`] that borrows from the [`ResolveError`] and
//! cannot outlive it; the caller's logger consumes it immediately, either
//! through the field accessors or through [`InternalLog::write_to`].
//!
//! [`ResolveError`]: crate::ResolveError

use crate::{Errno, ScanLimit};
use std::fmt;

/// Borrowed view of a [`ResolveError`](crate::ResolveError).
///
/// # Example
///
/// ```rust
/// # use errstr_guard::{Errno, ResolveError, ScanLimit};
/// let err = ResolveError::Unterminated { code: Errno::new(2), limit: ScanLimit::new(64) };
/// err.with_internal_log(|log| {
///     assert_eq!(log.kind(), "Unterminated");
///     assert_eq!(log.code().raw(), 2);
/// });
/// ```
#[derive(Debug)]
pub struct InternalLog<'a> {
    pub(crate) code: &'a Errno,
    pub(crate) kind: &'static str,
    pub(crate) limit: Option<&'a ScanLimit>,
}

impl<'a> InternalLog<'a> {
    /// Write a single `key=value` line without allocating.
    ///
    /// Format: `[errstr] kind='<kind>' code=<n>[ limit=<n>]`
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "[errstr] kind='{}' code={}", self.kind, self.code)?;
        if let Some(limit) = self.limit {
            write!(f, " limit={}", limit)?;
        }
        Ok(())
    }

    #[inline]
    pub const fn code(&self) -> &Errno {
        self.code
    }

    #[inline]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Scan window, present for `Unterminated` failures.
    #[inline]
    pub const fn limit(&self) -> Option<&ScanLimit> {
        self.limit
    }
}
