// benches/resolve_performance.rs
//! Benchmarks for errstr_guard lookup cost
//!
//! Covers the uncontended path through libc, the staging threshold, policy
//! overrides, and lock contention across threads.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use errstr_guard::{
    Errno, ErrorMessageResolver, MAX_SCAN_LIMIT, MessageFacility, ScanLimit, ScanPolicy, errstr,
    errstr_with, system,
};
use libc::c_char;
use std::thread;

/// Fixed-length synthetic messages for measuring the copy-out.
struct FixedLength(Box<[u8]>);

impl FixedLength {
    fn new(len: usize) -> Self {
        let mut buf = vec![b'm'; MAX_SCAN_LIMIT];
        buf[len] = 0;
        Self(buf.into_boxed_slice())
    }
}

unsafe impl MessageFacility for FixedLength {
    fn message_ptr(&mut self, _: Errno) -> *const c_char {
        self.0.as_ptr().cast()
    }
}

// ============================================================================
// LIBC BENCHMARKS
// ============================================================================

fn bench_known_code(c: &mut Criterion) {
    c.bench_function("resolve_known_code", |b| {
        b.iter(|| black_box(errstr(black_box(libc::ENOENT))))
    });
}

fn bench_unknown_code(c: &mut Criterion) {
    c.bench_function("resolve_unknown_code", |b| {
        b.iter(|| black_box(errstr(black_box(123_456))))
    });
}

fn bench_policy_override(c: &mut Criterion) {
    let policy = ScanPolicy::DEFAULT.with_limit(ScanLimit::new(16)).truncating();
    c.bench_function("resolve_with_truncating_policy", |b| {
        b.iter(|| black_box(errstr_with(black_box(libc::EACCES), policy)))
    });
}

// ============================================================================
// COPY-OUT BENCHMARKS
// ============================================================================

fn bench_message_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_length");

    // Straddles the inline staging capacity
    for len in [16, 127, 128, 129, 512, 999] {
        let resolver = ErrorMessageResolver::new(FixedLength::new(len));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| black_box(resolver.resolve(0)))
        });
    }

    group.finish();
}

// ============================================================================
// CONTENTION BENCHMARKS
// ============================================================================

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended");

    for threads in [1usize, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(threads),
            &threads,
            |b, &threads| {
                b.iter(|| {
                    let handles: Vec<_> = (0..threads)
                        .map(|t| {
                            thread::spawn(move || {
                                for i in 0..100 {
                                    black_box(system().resolve(t as i32 + i).ok());
                                }
                            })
                        })
                        .collect();
                    for handle in handles {
                        let _ = handle.join();
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    libc_benches,
    bench_known_code,
    bench_unknown_code,
    bench_policy_override,
);

criterion_group!(copy_benches, bench_message_length);

criterion_group!(contention_benches, bench_contended);

criterion_main!(libc_benches, copy_benches, contention_benches);
