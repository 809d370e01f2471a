// Copyright 2026 the Runtime Support Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The four machine-word conversions.
//!
//! Values are built and torn down 32 bits at a time: the high word fixes the
//! sign (signed for [`from_i64`]/[`assign_i64`], unsigned for [`from_u64`]),
//! then the low word is shifted in as an unsigned quantity so it can never
//! re-introduce sign. Extraction reduces modulo 2^64 first, so it is total
//! over values of any width.

use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};

/// Converts an unsigned 64-bit integer to an arbitrary-precision integer.
///
/// Exact over the full `u64` range; the result is always non-negative.
#[must_use]
pub fn from_u64(value: u64) -> BigInt {
    let mut n = BigInt::from((value >> 32) as u32);
    n <<= 32;
    n += (value & 0xFFFF_FFFF) as u32;
    n
}

/// Converts a signed 64-bit integer to an arbitrary-precision integer.
///
/// Exact over the full `i64` range, including `i64::MIN`. Agrees bit-for-bit
/// with [`assign_i64`].
#[must_use]
pub fn from_i64(value: i64) -> BigInt {
    let mut n = BigInt::zero();
    assign_i64(&mut n, value);
    n
}

/// Assigns a signed 64-bit integer into an existing arbitrary-precision
/// integer, replacing its value.
///
/// The high word is taken with an arithmetic (sign-propagating) shift and
/// interpreted as a signed 32-bit quantity, which establishes the sign of the
/// result. The low 32 bits are then added back as an unsigned word.
pub fn assign_i64(n: &mut BigInt, value: i64) {
    // `>>` on i64 is an arithmetic shift, so the high word keeps the sign.
    *n = BigInt::from((value >> 32) as i32);
    *n <<= 32;
    *n += (value & 0xFFFF_FFFF) as u32;
}

/// Extracts the low 64 bits of an arbitrary-precision integer.
///
/// The input is reduced modulo 2^64 into a call-local scratch value, never
/// mutated, and never rejected: values outside the unsigned 64-bit range are
/// truncated by that reduction, and negative values yield their two's
/// complement low bits. `to_u64(from_u64(v)) == v` for every `v`.
#[must_use]
pub fn to_u64(value: &BigInt) -> u64 {
    let modulus = BigInt::one() << 64;
    let mut scratch: BigInt = value % &modulus;
    // `%` truncates toward zero; fold negative remainders up into 0..2^64.
    if scratch.sign() == Sign::Minus {
        scratch += &modulus;
    }
    let lo = low_u32(&scratch);
    scratch >>= 32;
    let hi = low_u32(&scratch);
    (u64::from(hi) << 32) | u64::from(lo)
}

/// Returns the low 32-bit word of `n`'s magnitude.
fn low_u32(n: &BigInt) -> u32 {
    n.magnitude().iter_u32_digits().next().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u64_roundtrip_edges() {
        let values = [0, 1, 0xFFFF_FFFF, 0x1_0000_0000, 0x1_0000_0001, u64::MAX];
        for &v in &values {
            assert_eq!(to_u64(&from_u64(v)), v);
        }
    }

    #[test]
    fn i64_roundtrip_edges() {
        let values = [0, 1, -1, i64::MIN, i64::MAX, -4_294_967_296];
        for &v in &values {
            assert_eq!(to_u64(&from_i64(v)) as i64, v);
        }
    }

    #[test]
    fn from_i64_agrees_with_assign_i64() {
        let values = [0, -1, 42, i64::MIN, i64::MAX];
        for &v in &values {
            let mut n = BigInt::from(999);
            assign_i64(&mut n, v);
            assert_eq!(n, from_i64(v));
        }
    }

    #[test]
    fn negative_one_is_minus_one_not_unsigned_magnitude() {
        assert_eq!(from_i64(-1), BigInt::from(-1));
        assert_ne!(from_i64(-1), from_u64(u64::MAX));
    }

    #[test]
    fn min_i64_is_exact() {
        assert_eq!(from_i64(i64::MIN), -(BigInt::one() << 63_i32));
    }

    #[test]
    fn from_u64_has_no_sign_artifacts() {
        assert_eq!(from_u64(u64::MAX), (BigInt::one() << 64) - 1);
        assert_eq!(from_u64(0x8000_0000_0000_0000), BigInt::one() << 63);
    }

    #[test]
    fn concrete_vectors() {
        assert_eq!(to_u64(&from_u64(0x1_0000_0001)), 0x1_0000_0001);
        assert_eq!(to_u64(&from_i64(-4_294_967_296)), 0xFFFF_FFFF_0000_0000);
    }

    #[test]
    fn to_u64_truncates_wide_values() {
        let wide = (BigInt::one() << 100) + 7;
        assert_eq!(to_u64(&wide), 7);
        let wide_neg = -(BigInt::one() << 100_i32) - 1;
        assert_eq!(to_u64(&wide_neg), u64::MAX);
    }

    #[test]
    fn to_u64_does_not_mutate_input() {
        let n = from_i64(-5);
        let before = n.clone();
        let _ = to_u64(&n);
        assert_eq!(n, before);
    }
}
