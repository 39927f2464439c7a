//!
//! Digit-wise addition of rings
//!

use crate::*;
use super::{add_with_carry, WideDigit};


/// Add two rings of the same base, producing a fresh ring
///
/// Both operands are walked backwards from their tails (least significant
/// digits) in lock-step. An exhausted operand contributes zero digits.
/// Each resulting digit is prepended, so the result ends up most
/// significant first; a carry left over after both operands are consumed
/// becomes one extra leading digit.
///
pub(crate) fn add_digit_rings(a: &DigitRing, b: &DigitRing) -> DigitRing {
    debug_assert_eq!(a.base(), b.base());

    let base = a.base();
    let mut result = DigitRing::with_base(base);

    let mut a_digits = a.iter().rev();
    let mut b_digits = b.iter().rev();
    let mut carry: WideDigit = 0;

    loop {
        let (a_digit, b_digit) = match (a_digits.next(), b_digits.next()) {
            (None, None) if carry == 0 => break,
            (a_digit, b_digit) => (a_digit.unwrap_or(0), b_digit.unwrap_or(0)),
        };
        let digit = add_with_carry(a_digit, b_digit, &mut carry, base);
        result.push_front_unchecked(digit);
    }

    result
}


impl DigitRing {
    /// Add rings digit by digit, returning a new ring
    ///
    /// Fails with [`DigitRingError::BaseMismatch`] if the operands use
    /// different bases. Neither operand is modified.
    ///
    pub fn checked_add(&self, other: &DigitRing) -> Result<DigitRing, DigitRingError> {
        if self.base() != other.base() {
            return Err(DigitRingError::BaseMismatch { lhs: self.base(), rhs: other.base() });
        }
        Ok(add_digit_rings(self, other))
    }
}
