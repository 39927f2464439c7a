//! arithmetic routines

use crate::*;

pub(crate) mod addition;
pub(crate) mod base_conversion;


/// Double-wide accumulator, able to hold the sum of two digits and a carry
pub(crate) type WideDigit = u64;


/// Split wide value into (carry, digit) for the given base
///
/// ```math
/// n = carry * base + digit
/// ```
///
#[inline]
pub(crate) fn split_wide_digit(n: WideDigit, base: u32) -> (WideDigit, Digit) {
    let (hi, lo) = num_integer::div_rem(n, WideDigit::from(base));
    // lo < base, which fits in a digit
    (hi, lo as Digit)
}

/// Add a, b and incoming carry, returning the resulting digit and
/// replacing carry with the outgoing carry
#[inline]
pub(crate) fn add_with_carry(a: Digit, b: Digit, carry: &mut WideDigit, base: u32) -> Digit {
    let sum = WideDigit::from(a) + WideDigit::from(b) + *carry;
    let (hi, lo) = split_wide_digit(sum, base);
    *carry = hi;
    lo
}
