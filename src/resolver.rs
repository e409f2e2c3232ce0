//! Serialized access to a non-reentrant message facility.
//!
//! # Critical Section
//!
//! Each resolve holds the lock across three steps:
//!
//! 1. the native lookup,
//! 2. the bounded scan for the NUL terminator,
//! 3. the copy of the message bytes into a staging buffer.
//!
//! The guard is dropped before UTF-8 decoding and before the final
//! allocation. Nothing derived from the native pointer survives the guard.
//!
//! Lock acquisition may block under contention; there is no timeout and no
//! fairness guarantee. A poisoned lock is recovered, since the critical
//! section leaves nothing behind that a panic could corrupt.

use crate::facility::{LibcStrerror, MessageFacility};
use crate::{Errno, ErrorMessage, ResolveError, Result, ScanPolicy, Unterminated};
use smallvec::SmallVec;
use std::sync::{Mutex, MutexGuard};

/// Messages up to this length are staged without heap allocation while the
/// lock is held.
const STAGING_INLINE: usize = 128;

type Staging = SmallVec<[u8; STAGING_INLINE]>;

/// Resolver over the platform `strerror`, shared by the whole process.
static SYSTEM: ErrorMessageResolver<LibcStrerror> =
    ErrorMessageResolver::new(LibcStrerror::new());

/// Thread-safe wrapper turning error numbers into owned messages.
///
/// # Example
///
/// ```rust
/// use errstr_guard::system;
///
/// let msg = system().resolve(libc::EPERM).unwrap();
/// assert!(!msg.is_empty());
/// ```
#[derive(Debug)]
pub struct ErrorMessageResolver<F> {
    facility: Mutex<F>,
    policy: ScanPolicy,
}

impl<F: MessageFacility> ErrorMessageResolver<F> {
    /// Wrap `facility` with the default [`ScanPolicy`].
    #[inline]
    pub const fn new(facility: F) -> Self {
        Self::with_policy(facility, ScanPolicy::DEFAULT)
    }

    /// Wrap `facility` with an explicit scan policy.
    #[inline]
    pub const fn with_policy(facility: F, policy: ScanPolicy) -> Self {
        Self {
            facility: Mutex::new(facility),
            policy,
        }
    }

    /// Policy applied by [`resolve`](Self::resolve).
    #[inline]
    pub const fn policy(&self) -> ScanPolicy {
        self.policy
    }

    /// Resolve `code` to an owned message using this resolver's policy.
    ///
    /// Unknown codes are not an error: whatever the facility produces for
    /// them is returned unchanged.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::UnavailableMessage`] if the facility returns null.
    /// - [`ResolveError::Unterminated`] if no terminator is found inside the
    ///   scan window and the policy is [`Unterminated::Fail`].
    #[inline]
    pub fn resolve(&self, code: impl Into<Errno>) -> Result<ErrorMessage> {
        self.resolve_with(code, self.policy)
    }

    /// Resolve `code` with a one-off scan policy.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    pub fn resolve_with(&self, code: impl Into<Errno>, policy: ScanPolicy) -> Result<ErrorMessage> {
        let code = code.into();
        let limit = policy.limit();

        let (staged, terminated) = {
            let mut facility = self.lock();
            let ptr = facility.message_ptr(code);
            if ptr.is_null() {
                return Err(ResolveError::UnavailableMessage { code });
            }

            // SAFETY: non-null and readable per the MessageFacility contract;
            // the guard is held, so the buffer has not been reused.
            let (len, terminated) = unsafe { scan_for_terminator(ptr.cast(), limit.get()) };
            if !terminated && policy.on_unterminated() == Unterminated::Fail {
                return Err(ResolveError::Unterminated { code, limit });
            }

            // SAFETY: the scan just read these `len` bytes.
            let bytes = unsafe { std::slice::from_raw_parts(ptr.cast::<u8>(), len) };
            (Staging::from_slice(bytes), terminated)
        };

        Ok(ErrorMessage::from_native(code, &staged, !terminated))
    }

    /// Run `f` against the facility with the lock held.
    #[cfg(test)]
    pub(crate) fn with_facility<R>(&self, f: impl FnOnce(&mut F) -> R) -> R {
        let mut facility = self.lock();
        f(&mut facility)
    }

    /// Consume the resolver and return the facility.
    #[inline]
    pub fn into_inner(self) -> F {
        match self.facility.into_inner() {
            Ok(facility) => facility,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[inline]
    fn lock(&self) -> MutexGuard<'_, F> {
        match self.facility.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Find the first NUL within `limit` bytes of `base`.
///
/// Returns the message length and whether a terminator was found. When it
/// was not, the length is `limit`.
///
/// # Safety
///
/// `base` must be readable up to and including its first NUL byte, or for
/// `limit` bytes, whichever comes first.
unsafe fn scan_for_terminator(base: *const u8, limit: usize) -> (usize, bool) {
    for i in 0..limit {
        // SAFETY: i < limit and no NUL seen yet, covered by the caller's contract
        if unsafe { base.add(i).read() } == 0 {
            return (i, true);
        }
    }
    (limit, false)
}

/// The process-wide resolver over the platform `strerror`.
#[inline]
pub fn system() -> &'static ErrorMessageResolver<LibcStrerror> {
    &SYSTEM
}

/// Resolve `code` through the process-wide resolver.
///
/// ```rust
/// let msg = errstr_guard::errstr(libc::ENOENT).unwrap();
/// # #[cfg(all(target_os = "linux", target_env = "gnu"))]
/// assert_eq!(msg, "No such file or directory");
/// ```
///
/// # Errors
///
/// See [`ErrorMessageResolver::resolve`].
#[inline]
pub fn errstr(code: impl Into<Errno>) -> Result<ErrorMessage> {
    SYSTEM.resolve(code)
}

/// Resolve `code` through the process-wide resolver with a one-off policy.
///
/// # Errors
///
/// See [`ErrorMessageResolver::resolve`].
#[inline]
pub fn errstr_with(code: impl Into<Errno>, policy: ScanPolicy) -> Result<ErrorMessage> {
    SYSTEM.resolve_with(code, policy)
}
