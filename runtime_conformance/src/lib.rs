// Copyright 2026 the Runtime Support Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Internal conformance/regression tests for `runtime_value` and
//! `runtime_bigint`.
//!
//! The crate body only holds shared fixtures; the actual suites live under
//! `tests/`.

/// Signed 64-bit edge values every bridge property is checked against.
#[must_use]
pub fn i64_edges() -> [i64; 9] {
    [
        0,
        1,
        -1,
        i64::MIN,
        i64::MIN + 1,
        i64::MAX,
        -4_294_967_296,
        4_294_967_296,
        -2,
    ]
}

/// Unsigned 64-bit edge values every bridge property is checked against.
#[must_use]
pub fn u64_edges() -> [u64; 8] {
    [
        0,
        1,
        0xFFFF_FFFF,
        0x1_0000_0000,
        0x1_0000_0001,
        0x8000_0000_0000_0000,
        u64::MAX,
        u64::MAX - 1,
    ]
}
