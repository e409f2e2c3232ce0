//! Error number newtype.
//!
//! An `Errno` is whatever integer the system-call layer hands us. No range
//! validation happens here: unknown values are forwarded to the native
//! facility unchanged, which decides what message (if any) they produce.

use std::fmt;
use std::io;

/// Platform-defined error number, as passed to `strerror(3)`.
///
/// # Example
///
/// ```rust
/// use errstr_guard::Errno;
///
/// let code = Errno::from(libc::ENOENT);
/// assert_eq!(code.raw(), libc::ENOENT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Errno(i32);

impl Errno {
    /// Wrap a raw error number.
    #[inline]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Extract the OS error number carried by an `io::Error`, if any.
    ///
    /// Errors built from an `io::ErrorKind` or a custom payload carry no
    /// errno and return `None`.
    #[inline]
    pub fn from_io_error(err: &io::Error) -> Option<Self> {
        err.raw_os_error().map(Self)
    }

    /// The calling thread's current errno.
    #[inline]
    pub fn last() -> Self {
        // last_os_error always carries a raw code
        Self(io::Error::last_os_error().raw_os_error().unwrap_or(0))
    }
}

impl From<i32> for Errno {
    #[inline]
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl From<Errno> for i32 {
    #[inline]
    fn from(code: Errno) -> Self {
        code.0
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_with_os_code_converts() {
        let err = io::Error::from_raw_os_error(libc::EACCES);
        assert_eq!(Errno::from_io_error(&err), Some(Errno::new(libc::EACCES)));
    }

    #[test]
    fn io_error_from_kind_has_no_code() {
        let err = io::Error::from(io::ErrorKind::Other);
        assert_eq!(Errno::from_io_error(&err), None);
    }

    #[test]
    fn display_is_the_number() {
        assert_eq!(Errno::new(-7).to_string(), "-7");
        assert_eq!(Errno::from(22).to_string(), "22");
    }

    #[test]
    fn roundtrips_through_i32() {
        let raw: i32 = Errno::new(libc::EINVAL).into();
        assert_eq!(raw, libc::EINVAL);
    }
}
