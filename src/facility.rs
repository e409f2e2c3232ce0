//! The native lookup seam.
//!
//! A [`MessageFacility`] is anything that maps an error number to a pointer
//! into a NUL-terminated byte buffer it owns, with that buffer allowed to be
//! reused or invalidated on the next call. `strerror(3)` is the canonical
//! example and the only one shipped here ([`LibcStrerror`]).
//!
//! The lookup takes `&mut self`. Resolvers keep their facility behind a
//! mutex, so holding the `&mut` is proof the caller is inside the critical
//! section.

use crate::Errno;
use libc::c_char;

/// A non-reentrant "message for error number" routine.
///
/// # Safety
///
/// Implementors must guarantee that a non-null pointer returned by
/// [`message_ptr`](MessageFacility::message_ptr):
///
/// - is valid for reads of every byte up to and including the first NUL
///   byte, or, when the buffer carries no NUL, for at least
///   [`MAX_SCAN_LIMIT`](crate::MAX_SCAN_LIMIT) bytes;
/// - stays valid and unmodified until the next call to `message_ptr` on the
///   same value, or until the value is dropped.
///
/// A null pointer means no message is available.
pub unsafe trait MessageFacility {
    /// Look up the message for `code`.
    fn message_ptr(&mut self, code: Errno) -> *const c_char;
}

/// `strerror(3)` from the platform libc.
///
/// Cannot be constructed outside this crate: the only resolver wrapping it is
/// [`system()`](crate::system), so all lookups made through this crate share
/// one lock. Code that calls `strerror` directly bypasses that lock.
#[derive(Debug)]
pub struct LibcStrerror {
    _private: (),
}

impl LibcStrerror {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self { _private: () }
    }
}

// SAFETY: strerror returns a pointer to a NUL-terminated string that stays
// valid until the next strerror call. The only instance lives behind the
// process-wide resolver lock.
unsafe impl MessageFacility for LibcStrerror {
    #[inline]
    fn message_ptr(&mut self, code: Errno) -> *const c_char {
        // SAFETY: strerror accepts any int; unknown codes get a generic message.
        unsafe { libc::strerror(code.raw()) }.cast_const()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    fn raw_lookup(code: i32) -> Option<Vec<u8>> {
        crate::system().with_facility(|facility| {
            let ptr = facility.message_ptr(Errno::new(code));
            if ptr.is_null() {
                return None;
            }
            // SAFETY: non-null strerror output, read under the resolver lock
            Some(unsafe { CStr::from_ptr(ptr) }.to_bytes().to_vec())
        })
    }

    #[test]
    fn strerror_pointer_is_non_null_for_known_code() {
        assert!(raw_lookup(libc::EPERM).is_some());
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn strerror_matches_glibc_text() {
        assert_eq!(
            raw_lookup(libc::ENOENT).as_deref(),
            Some(&b"No such file or directory"[..])
        );
    }
}
