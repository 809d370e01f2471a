// Copyright 2026 the Runtime Support Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping of the host's last-operation-failed indicator onto error
//! constructor values.
//!
//! The host reports failures as a small integer code set. Known codes map to
//! distinct zero-arity variants of the runtime's error ADT; anything else
//! falls through to the generic variant carrying the raw code as its single
//! field. The fallback arm is an enum variant, so it can never be missed.

use alloc::vec;
use alloc::vec::Vec;

use crate::heap::ConHeap;
use crate::value::{ConHandle, ConTag, ValueRef};

/// Tag of the generic error variant (carries the raw code as one field).
pub const TAG_GENERIC_ERROR: ConTag = ConTag::new(0);
/// Tag of the no-such-entity variant.
pub const TAG_NOT_FOUND: ConTag = ConTag::new(3);
/// Tag of the operation-would-block variant.
pub const TAG_WOULD_BLOCK: ConTag = ConTag::new(4);

/// Raw host code for a missing entity (POSIX `ENOENT`).
const RAW_NO_SUCH_ENTITY: i32 = 2;
/// Raw host code for an operation that would block (POSIX `EAGAIN`).
const RAW_WOULD_BLOCK: i32 = 11;

/// A classified host error indicator.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HostErrCode {
    /// The named entity does not exist.
    NoSuchEntity,
    /// The operation would have blocked.
    WouldBlock,
    /// Any other host code, carried raw.
    Other(i32),
}

impl HostErrCode {
    /// Classifies a raw host error code.
    ///
    /// Codes outside the known set are preserved verbatim in
    /// [`HostErrCode::Other`].
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            RAW_NO_SUCH_ENTITY => Self::NoSuchEntity,
            RAW_WOULD_BLOCK => Self::WouldBlock,
            _ => Self::Other(raw),
        }
    }

    /// Returns the raw host code this classification came from.
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        match self {
            Self::NoSuchEntity => RAW_NO_SUCH_ENTITY,
            Self::WouldBlock => RAW_WOULD_BLOCK,
            Self::Other(raw) => raw,
        }
    }
}

/// Builds the error ADT value for `code` in `heap`.
///
/// Known codes become zero-arity variants; unrecognized codes become the
/// generic variant with the raw code sign-extended into a [`ValueRef::Word`]
/// field.
pub fn error_con(heap: &mut ConHeap, code: HostErrCode) -> ConHandle {
    match code {
        HostErrCode::NoSuchEntity => heap.con_new(TAG_NOT_FOUND, Vec::new()),
        HostErrCode::WouldBlock => heap.con_new(TAG_WOULD_BLOCK, Vec::new()),
        HostErrCode::Other(raw) => {
            let payload = ValueRef::Word(i64::from(raw) as u64);
            heap.con_new(TAG_GENERIC_ERROR, vec![payload])
        }
    }
}
