//! # errstr_guard
//!
//! Thread-safe error message lookup over the non-reentrant libc `strerror`.
//!
//! ## Design Philosophy
//!
//! 1. **One lock guards the native call** and everything that reads its result
//! 2. **Messages are copied out before the lock is released**; the native
//!    buffer pointer never escapes the critical section
//! 3. **The terminator scan is always bounded**, with the overflow behaviour
//!    chosen by a [`ScanPolicy`]
//! 4. **Codes pass through unvalidated**: unknown codes get whatever the
//!    platform says about them
//! 5. **No caching**: every call produces a fresh, independently owned
//!    [`ErrorMessage`]
//!
//! ## Why
//!
//! `strerror(3)` may return a pointer into one process-wide buffer that the
//! next call, on any thread, overwrites. Reading it without serialization
//! can yield a message stitched together from two different codes. Platforms
//! without `strerror_r` leave no reentrant alternative, so every lookup goes
//! through the single lock owned by [`system()`].
//!
//! ## Quick Start
//!
//! ```rust
//! use errstr_guard::{errstr, Errno, Result};
//! use std::fs::File;
//!
//! fn describe(err: &std::io::Error) -> Result<String> {
//!     let code = Errno::from_io_error(err).unwrap_or(Errno::new(0));
//!     Ok(errstr(code)?.into_string())
//! }
//!
//! if let Err(e) = File::open("/definitely/not/here") {
//!     let text = describe(&e).unwrap();
//!     assert!(!text.is_empty());
//! }
//! ```
//!
//! ## Bounded Scan
//!
//! ```rust
//! use errstr_guard::{errstr_with, ScanLimit, ScanPolicy};
//!
//! // Keep at most 8 bytes, flagging the result instead of failing
//! let policy = ScanPolicy::DEFAULT.with_limit(ScanLimit::new(8)).truncating();
//! let msg = errstr_with(libc::ENOENT, policy).unwrap();
//! assert!(msg.len() <= 8);
//! ```
//!
//! ## Custom Facilities
//!
//! Any non-reentrant lookup can be wrapped by implementing the unsafe
//! [`MessageFacility`] trait and handing it to [`ErrorMessageResolver::new`].

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::result;

pub mod errno;
pub mod error;
pub mod facility;
pub mod logging;
pub mod message;
pub mod policy;
pub mod resolver;

pub use errno::*;
pub use error::*;
pub use facility::*;
pub use logging::*;
pub use message::*;
pub use policy::*;
pub use resolver::*;

/// Type alias for Results using our error type.
pub type Result<T> = result::Result<T, ResolveError>;
