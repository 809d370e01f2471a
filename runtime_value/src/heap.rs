// Copyright 2026 the Runtime Support Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constructor heap and the exactly-once field population builder.
//!
//! The reference runtime computed field addresses by raw pointer offset with
//! no bounds check. Here every field access is index-checked, and construction
//! goes through [`ConBuilder`], which tracks which slots have been populated so
//! a node never becomes reachable with a hole in it.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::value::{ConHandle, ConTag, ValueRef};

/// A constructor heap error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConError {
    /// Handle was out of bounds.
    BadHandle,
    /// Field index outside the node's arity.
    OutOfBounds,
    /// Field was populated twice.
    FieldAlreadySet,
    /// Construction finished with an unpopulated field.
    FieldUnset,
}

impl fmt::Display for ConError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadHandle => write!(f, "constructor handle out of bounds"),
            Self::OutOfBounds => write!(f, "field index out of bounds"),
            Self::FieldAlreadySet => write!(f, "field populated twice"),
            Self::FieldUnset => write!(f, "field left unpopulated"),
        }
    }
}

impl core::error::Error for ConError {}

/// A node holding a constructor tag plus its field references.
///
/// Fields are contiguous so a collector can scan them as one flat slice.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ConNode {
    tag: ConTag,
    fields: Vec<ValueRef>,
}

/// In-progress construction of a node with a fixed arity.
///
/// The arity is fixed at creation; each field index must be populated exactly
/// once before the builder can be [finished](ConHeap::finish). Zero-arity
/// builders are complete immediately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConBuilder {
    tag: ConTag,
    fields: Vec<Option<ValueRef>>,
}

impl ConBuilder {
    /// Begins construction of a node with `arity` field slots.
    #[must_use]
    pub fn new(tag: ConTag, arity: usize) -> Self {
        Self {
            tag,
            fields: vec![None; arity],
        }
    }

    /// Returns the tag this builder was created with.
    #[inline]
    pub const fn tag(&self) -> ConTag {
        self.tag
    }

    /// Returns the arity fixed at creation.
    #[inline]
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Populates field `index` with `value`.
    ///
    /// Errors with [`ConError::OutOfBounds`] if `index >= arity`, and with
    /// [`ConError::FieldAlreadySet`] if the slot was already populated.
    pub fn set_field(&mut self, index: usize, value: ValueRef) -> Result<(), ConError> {
        let slot = self.fields.get_mut(index).ok_or(ConError::OutOfBounds)?;
        if slot.is_some() {
            return Err(ConError::FieldAlreadySet);
        }
        *slot = Some(value);
        Ok(())
    }

    /// Returns `true` once every field slot has been populated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(Option::is_some)
    }
}

/// An arena of constructor nodes.
///
/// Nodes are owned by the heap and referenced through stable [`ConHandle`]
/// values. Reclamation is the embedder's concern; the heap itself only grows
/// (or is cleared wholesale).
#[derive(Clone, Debug, Default)]
pub struct ConHeap {
    nodes: Vec<ConNode>,
}

impl ConHeap {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Completes `builder` and allocates its node.
    ///
    /// Errors with [`ConError::FieldUnset`] if any slot was never populated.
    pub fn finish(&mut self, builder: ConBuilder) -> Result<ConHandle, ConError> {
        let fields = builder
            .fields
            .into_iter()
            .map(|slot| slot.ok_or(ConError::FieldUnset))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.push(ConNode {
            tag: builder.tag,
            fields,
        }))
    }

    /// Allocates a node with every field supplied up front.
    ///
    /// Equivalent to a [`ConBuilder`] whose slots are populated in order. The
    /// node's arity is `fields.len()`.
    pub fn con_new(&mut self, tag: ConTag, fields: Vec<ValueRef>) -> ConHandle {
        self.push(ConNode { tag, fields })
    }

    /// Returns the tag of the node behind `handle`.
    pub fn tag(&self, handle: ConHandle) -> Result<ConTag, ConError> {
        Ok(self.node(handle)?.tag)
    }

    /// Returns the arity of the node behind `handle`.
    pub fn arity(&self, handle: ConHandle) -> Result<usize, ConError> {
        Ok(self.node(handle)?.fields.len())
    }

    /// Returns field `index` of the node behind `handle`.
    pub fn field(&self, handle: ConHandle, index: usize) -> Result<ValueRef, ConError> {
        self.node(handle)?
            .fields
            .get(index)
            .copied()
            .ok_or(ConError::OutOfBounds)
    }

    /// Returns all fields of the node behind `handle` as a flat slice.
    ///
    /// This is the scan view for a collector walking a node's references.
    pub fn fields(&self, handle: ConHandle) -> Result<&[ValueRef], ConError> {
        Ok(self.node(handle)?.fields.as_slice())
    }

    /// Returns the number of nodes in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the heap contains no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every node, invalidating all outstanding handles.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    fn push(&mut self, node: ConNode) -> ConHandle {
        let idx = u32::try_from(self.nodes.len()).unwrap_or(u32::MAX);
        self.nodes.push(node);
        ConHandle(idx)
    }

    fn node(&self, handle: ConHandle) -> Result<&ConNode, ConError> {
        self.nodes.get(handle.0 as usize).ok_or(ConError::BadHandle)
    }
}
