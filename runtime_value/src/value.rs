// Copyright 2026 the Runtime Support Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core value model: constructor tags, handles, and opaque field references.

/// A 32-bit signed constructor discriminant.
///
/// Any value is accepted; which tag means what (success, not-found, and so on)
/// is a convention between the code that produces a value and the code that
/// matches on it. Nothing here validates tags against a known set.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ConTag(i32);

impl ConTag {
    /// Creates a new constructor tag.
    #[inline]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer backing this tag.
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

/// A compact handle to a constructor node stored in a [`ConHeap`](crate::ConHeap).
///
/// Handles are only meaningful for the heap that issued them; presenting a
/// handle to a different heap yields either an arbitrary node or
/// [`ConError::BadHandle`](crate::ConError::BadHandle).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ConHandle(pub(crate) u32);

impl ConHandle {
    /// Returns the raw index backing this handle.
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// An opaque reference held in a constructor field.
///
/// Fields are pointer-sized slots whose interpretation belongs to the
/// generated code: a reference to another constructor node, a raw machine
/// word smuggled through a slot (e.g. a host error code), or null.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueRef {
    /// The null reference.
    Null,
    /// A reference to another constructor node in the same heap.
    Con(ConHandle),
    /// A raw machine word carried in a field slot.
    Word(u64),
}

impl ValueRef {
    /// Returns `true` if this is the null reference.
    #[inline]
    pub const fn is_null(self) -> bool {
        matches!(self, Self::Null)
    }
}
