//! Bounded-scan configuration.
//!
//! `strerror(3)` hands back a bare pointer with no length. The resolver finds
//! the end of the message by scanning for a NUL byte, and that scan is always
//! bounded by a [`ScanLimit`]. What happens when the bound is hit without a
//! terminator is a policy decision, captured by [`Unterminated`].
//!
//! # Example
//!
//! ```rust
//! use errstr_guard::{ScanLimit, ScanPolicy, Unterminated};
//!
//! // Compile-time validated
//! const SHORT: ScanPolicy = ScanPolicy::DEFAULT.with_limit(ScanLimit::new(256)).truncating();
//!
//! assert_eq!(SHORT.limit().get(), 256);
//! assert_eq!(SHORT.on_unterminated(), Unterminated::Truncate);
//! ```

use std::fmt;

/// Largest scan window accepted by [`ScanLimit`].
pub const MAX_SCAN_LIMIT: usize = 64 * 1024;

/// Validated upper bound on the number of bytes scanned for a terminator.
///
/// Always in `1..=MAX_SCAN_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanLimit(usize);

impl ScanLimit {
    /// Default window: 1000 bytes, far longer than any libc message.
    pub const DEFAULT: Self = Self(1000);

    /// Create a scan limit with compile-time validation.
    ///
    /// # Panics
    ///
    /// Panics at compile time (in const contexts) or at runtime if `bytes`
    /// is zero or exceeds [`MAX_SCAN_LIMIT`].
    #[inline]
    pub const fn new(bytes: usize) -> Self {
        assert!(
            bytes > 0 && bytes <= MAX_SCAN_LIMIT,
            "Scan limit must be 1-65536 bytes"
        );
        Self(bytes)
    }

    /// Create a scan limit with runtime validation.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `bytes` is zero or exceeds [`MAX_SCAN_LIMIT`].
    #[inline]
    pub fn checked_new(bytes: usize) -> Result<Self, ScanLimitError> {
        if bytes == 0 || bytes > MAX_SCAN_LIMIT {
            Err(ScanLimitError::OutOfRange { value: bytes })
        } else {
            Ok(Self(bytes))
        }
    }

    /// The raw byte count.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for ScanLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ScanLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for scan limit validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanLimitError {
    /// Limit is zero or exceeds [`MAX_SCAN_LIMIT`].
    OutOfRange {
        /// The rejected value.
        value: usize,
    },
}

impl fmt::Display for ScanLimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { value } => {
                write!(f, "Scan limit {} outside 1..={}", value, MAX_SCAN_LIMIT)
            }
        }
    }
}

impl std::error::Error for ScanLimitError {}

/// What to do when no NUL byte is found inside the scan window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unterminated {
    /// Report [`ResolveError::Unterminated`](crate::ResolveError::Unterminated).
    #[default]
    Fail,
    /// Keep the first `limit` bytes and flag the message as truncated.
    Truncate,
}

/// Scan configuration applied to every lookup made by a resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScanPolicy {
    limit: ScanLimit,
    on_unterminated: Unterminated,
}

impl ScanPolicy {
    /// 1000-byte window, fail on a missing terminator.
    pub const DEFAULT: Self = Self {
        limit: ScanLimit::DEFAULT,
        on_unterminated: Unterminated::Fail,
    };

    /// Replace the scan window.
    #[inline]
    pub const fn with_limit(mut self, limit: ScanLimit) -> Self {
        self.limit = limit;
        self
    }

    /// Return a truncated message instead of failing.
    #[inline]
    pub const fn truncating(mut self) -> Self {
        self.on_unterminated = Unterminated::Truncate;
        self
    }

    /// Fail with `ResolveError::Unterminated` on a missing terminator.
    #[inline]
    pub const fn failing(mut self) -> Self {
        self.on_unterminated = Unterminated::Fail;
        self
    }

    #[inline]
    pub const fn limit(&self) -> ScanLimit {
        self.limit
    }

    #[inline]
    pub const fn on_unterminated(&self) -> Unterminated {
        self.on_unterminated
    }
}
