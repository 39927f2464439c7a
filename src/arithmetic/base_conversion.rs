//! Change of radix
//!
//! Reinterpreting digits of one base as digits of another cannot be done
//! digit-by-digit, so the value is folded into a `BigUint` and then
//! unfolded again by repeated division.
//!

use crate::*;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;


/// Fold digits, most significant first, into a scalar:
/// `value = value * base + digit`
pub(crate) fn fold_digits(ring: &DigitRing) -> BigUint {
    let base = BigUint::from(ring.base());
    ring.iter().fold(BigUint::zero(), |value, digit| value * &base + digit)
}

/// Build ring of digits in `base` representing `value`
///
/// Remainders of repeated division come out least significant first and
/// are appended in reverse. Zero is the single digit `[0]`.
///
pub(crate) fn unfold_biguint(value: &BigUint, base: u32) -> DigitRing {
    let mut ring = DigitRing::with_base(base);

    if value.is_zero() {
        ring.push_back_unchecked(0);
        return ring;
    }

    let big_base = BigUint::from(base);
    let mut remainders = Vec::new();
    let mut quotient = value.clone();
    while !quotient.is_zero() {
        let (q, r) = quotient.div_rem(&big_base);
        // r < base, so it has at most one u32 limb
        remainders.push(r.iter_u32_digits().next().unwrap_or(0));
        quotient = q;
    }

    for digit in remainders.into_iter().rev() {
        ring.push_back_unchecked(digit);
    }
    ring
}


impl DigitRing {
    /// Produce an independent ring holding the same value in `new_base`
    ///
    /// An empty ring is treated as zero and converts to `[0]`.
    ///
    pub fn convert_base(&self, new_base: u32) -> Result<DigitRing, DigitRingError> {
        let new_base = check_base(new_base)?;
        Ok(unfold_biguint(&fold_digits(self), new_base))
    }

    /// Convert to [`DEFAULT_TARGET_BASE`]
    pub fn change_scale(&self) -> DigitRing {
        unfold_biguint(&fold_digits(self), DEFAULT_TARGET_BASE)
    }
}
