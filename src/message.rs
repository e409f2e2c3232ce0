//! Owned error message snapshot.
//!
//! An [`ErrorMessage`] is built from bytes copied out of the native buffer
//! while the resolver lock was held. It shares no memory with the facility
//! and no identity with messages from other calls, even for the same code.

use crate::Errno;
use std::fmt;
use std::ops::Deref;

/// Maximum length for the message field written by [`ErrorMessage::write_sanitized`].
pub const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to sanitized output that hit the length cap.
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Immutable, caller-owned message text for an error number.
///
/// # Example
///
/// ```rust
/// let msg = errstr_guard::errstr(libc::EACCES).unwrap();
/// assert!(!msg.is_empty());
/// assert_eq!(msg.code().raw(), libc::EACCES);
/// let owned: String = msg.into();
/// # let _ = owned;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorMessage {
    code: Errno,
    text: Box<str>,
    truncated: bool,
}

impl ErrorMessage {
    /// Build from raw native bytes (terminator excluded).
    ///
    /// `strerror` output follows the current locale's encoding, so invalid
    /// UTF-8 is replaced rather than rejected.
    pub(crate) fn from_native(code: Errno, bytes: &[u8], truncated: bool) -> Self {
        Self {
            code,
            text: String::from_utf8_lossy(bytes).into_owned().into_boxed_str(),
            truncated,
        }
    }

    /// The error number this message was resolved for.
    #[inline]
    pub const fn code(&self) -> Errno {
        self.code
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the scan window ended before a terminator was found.
    ///
    /// Only possible under [`Unterminated::Truncate`](crate::Unterminated::Truncate).
    #[inline]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.text.into_string()
    }

    /// Write the message for inclusion in a log line.
    ///
    /// Control characters become `?` and output is capped at
    /// [`MAX_FIELD_OUTPUT_LEN`] bytes including the truncation indicator.
    /// Writes directly to `f` with no intermediate allocation.
    pub fn write_sanitized(&self, f: &mut impl fmt::Write) -> fmt::Result {
        let text: &str = &self.text;
        let cut = if text.len() <= MAX_FIELD_OUTPUT_LEN {
            text.len()
        } else {
            let mut idx = MAX_FIELD_OUTPUT_LEN - TRUNCATION_INDICATOR.len();
            while idx > 0 && !text.is_char_boundary(idx) {
                idx -= 1;
            }
            idx
        };

        for ch in text[..cut].chars() {
            f.write_char(if ch.is_control() { '?' } else { ch })?;
        }
        if cut < text.len() {
            f.write_str(TRUNCATION_INDICATOR)?;
        }
        Ok(())
    }
}

impl Deref for ErrorMessage {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for ErrorMessage {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq<str> for ErrorMessage {
    fn eq(&self, other: &str) -> bool {
        &*self.text == other
    }
}

impl PartialEq<&str> for ErrorMessage {
    fn eq(&self, other: &&str) -> bool {
        &*self.text == *other
    }
}

impl From<ErrorMessage> for String {
    #[inline]
    fn from(msg: ErrorMessage) -> Self {
        msg.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(bytes: &[u8]) -> ErrorMessage {
        ErrorMessage::from_native(Errno::new(1), bytes, false)
    }

    #[test]
    fn empty_bytes_give_empty_message() {
        let m = msg(b"");
        assert!(m.is_empty());
        assert_eq!(m, "");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let m = msg(b"bad \xff byte");
        assert_eq!(m, "bad \u{FFFD} byte");
    }

    #[test]
    fn latin1_locale_bytes_do_not_fail() {
        // "Opération" in ISO-8859-1
        let m = msg(b"Op\xe9ration");
        assert!(m.starts_with("Op"));
        assert!(m.ends_with("ration"));
    }

    #[test]
    fn sanitized_replaces_control_characters() {
        let m = msg(b"line\nbreak\x1b[31m");
        let mut out = String::new();
        m.write_sanitized(&mut out).unwrap();
        assert_eq!(out, "line?break?[31m");
    }

    #[test]
    fn sanitized_short_message_is_unchanged() {
        let m = msg(b"Permission denied");
        let mut out = String::new();
        m.write_sanitized(&mut out).unwrap();
        assert_eq!(out, "Permission denied");
    }

    #[test]
    fn sanitized_output_is_bounded() {
        let long = "a".repeat(MAX_FIELD_OUTPUT_LEN + 1);
        let m = msg(long.as_bytes());
        let mut out = String::new();
        m.write_sanitized(&mut out).unwrap();
        assert_eq!(out.len(), MAX_FIELD_OUTPUT_LEN);
        assert!(out.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn sanitized_exactly_at_limit_is_not_truncated() {
        let exact = "a".repeat(MAX_FIELD_OUTPUT_LEN);
        let m = msg(exact.as_bytes());
        let mut out = String::new();
        m.write_sanitized(&mut out).unwrap();
        assert_eq!(out, exact);
    }

    #[test]
    fn sanitized_truncation_respects_utf8() {
        let wide = "й".repeat(MAX_FIELD_OUTPUT_LEN);
        let m = msg(wide.as_bytes());
        let mut out = String::new();
        m.write_sanitized(&mut out).unwrap();
        assert!(out.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(out.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn converts_into_owned_string() {
        let s: String = msg(b"Success").into();
        assert_eq!(s, "Success");
    }
}
