//! Typed lookup failures.
//!
//! `strerror` has no failure signal of its own. Both variants here are
//! defensive outcomes for a facility that misbehaves, surfaced to the caller
//! instead of dereferencing a null pointer or returning unbounded garbage.

use crate::{Errno, InternalLog, ScanLimit};
use std::fmt;

/// Why a message could not be resolved.
#[must_use = "errors should be handled or logged"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The facility returned a null pointer.
    UnavailableMessage {
        /// Code that was looked up.
        code: Errno,
    },
    /// No NUL byte inside the scan window and the policy does not truncate.
    Unterminated {
        /// Code that was looked up.
        code: Errno,
        /// Window that was scanned.
        limit: ScanLimit,
    },
}

impl ResolveError {
    /// The error number whose lookup failed.
    #[inline]
    pub const fn code(&self) -> Errno {
        match self {
            Self::UnavailableMessage { code } | Self::Unterminated { code, .. } => *code,
        }
    }

    /// Static label for structured logging.
    #[inline]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnavailableMessage { .. } => "UnavailableMessage",
            Self::Unterminated { .. } => "Unterminated",
        }
    }

    /// Structured log entry borrowing from this error.
    ///
    /// ```rust
    /// # use errstr_guard::{Errno, ResolveError};
    /// let err = ResolveError::UnavailableMessage { code: Errno::new(5) };
    /// let mut line = String::new();
    /// err.internal_log().write_to(&mut line).unwrap();
    /// assert_eq!(line, "[errstr] kind='UnavailableMessage' code=5");
    /// ```
    #[inline]
    pub fn internal_log(&self) -> InternalLog<'_> {
        match self {
            Self::UnavailableMessage { code } => InternalLog {
                code,
                kind: self.kind(),
                limit: None,
            },
            Self::Unterminated { code, limit } => InternalLog {
                code,
                kind: self.kind(),
                limit: Some(limit),
            },
        }
    }

    /// Callback-style logging; the log entry dies when `f` returns.
    #[inline]
    pub fn with_internal_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InternalLog<'_>) -> R,
    {
        let log = self.internal_log();
        f(&log)
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnavailableMessage { code } => {
                write!(f, "no message available for error {}", code)
            }
            Self::Unterminated { code, limit } => write!(
                f,
                "message for error {} not terminated within {} bytes",
                code, limit
            ),
        }
    }
}

impl std::error::Error for ResolveError {}
