#![no_main]

use errstr_guard::{
    Errno, ErrorMessageResolver, MAX_SCAN_LIMIT, MessageFacility, ResolveError, ScanLimit,
    ScanPolicy,
};
use libc::c_char;
use libfuzzer_sys::fuzz_target;

struct FuzzBytes(Box<[u8]>);

unsafe impl MessageFacility for FuzzBytes {
    fn message_ptr(&mut self, _: Errno) -> *const c_char {
        self.0.as_ptr().cast()
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let limit = ScanLimit::new(usize::from(first) + 1);

    let mut buf = vec![0xA5u8; MAX_SCAN_LIMIT.max(rest.len())];
    buf[..rest.len()].copy_from_slice(rest);

    let resolver = ErrorMessageResolver::with_policy(
        FuzzBytes(buf.into_boxed_slice()),
        ScanPolicy::DEFAULT.with_limit(limit),
    );

    match resolver.resolve(0) {
        Ok(msg) => {
            assert!(!msg.is_truncated());
            let mut out = String::new();
            let _ = msg.write_sanitized(&mut out);
        }
        Err(ResolveError::Unterminated { .. }) => {}
        Err(other) => panic!("unexpected failure: {other}"),
    }

    let truncating = resolver.resolve_with(0, ScanPolicy::DEFAULT.with_limit(limit).truncating());
    if let Ok(msg) = truncating {
        assert!(msg.len() <= limit.get() * 3);
    }
});
