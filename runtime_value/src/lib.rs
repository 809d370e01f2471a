// Copyright 2026 the Runtime Support Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tagged constructor values for a compiled-language runtime.
//!
//! Generated code represents algebraic data type values as a 32-bit constructor
//! tag plus a fixed number of opaque field references. This crate provides that
//! representation: a [`ConHeap`] arena owning the constructor nodes, compact
//! [`ConHandle`] values for generated code to pass around, and a [`ConBuilder`]
//! that enforces the populate-each-field-exactly-once discipline with checked
//! indexing.
//!
//! Memory management strategy is the embedder's concern: the heap only defines
//! how a node is laid out and exposes [`ConHeap::fields`] as a flat slice so a
//! collector can scan a node's references in one pass.
//!
//! This crate is `no_std + alloc` friendly.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod heap;
mod value;

pub mod host_err;

pub use heap::{ConBuilder, ConError, ConHeap};
pub use value::{ConHandle, ConTag, ValueRef};
