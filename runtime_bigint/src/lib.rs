// Copyright 2026 the Runtime Support Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bridging between 64-bit machine integers and arbitrary-precision integers.
//!
//! Generated code materializes unbounded integer literals, and extracts
//! machine-word results, through four total conversions built from 32-bit limb
//! primitives: construct/assign from a word, shift, add an unsigned word,
//! reduce modulo a power of two, and read back the low word. The conversions
//! are exact over the full signed and unsigned 64-bit ranges; [`to_u64`] is
//! deliberately truncating (reduction modulo 2^64) for wider values.
//!
//! This crate is `no_std + alloc` friendly.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bridge;

pub use bridge::{assign_i64, from_i64, from_u64, to_u64};
