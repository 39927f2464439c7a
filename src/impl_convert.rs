//! Code for converting between DigitRings and integers

use crate::*;
use stdlib::string::{String, ToString};

use num_bigint::BigUint;

use arithmetic::base_conversion::{fold_digits, unfold_biguint};


impl DigitRing {
    /// Build ring holding `n` in the given base
    pub fn from_biguint(n: &BigUint, base: u32) -> Result<DigitRing, DigitRingError> {
        let base = check_base(base)?;
        Ok(unfold_biguint(n, base))
    }

    /// Build ring holding `n` in the given base
    pub fn from_u64(n: u64, base: u32) -> Result<DigitRing, DigitRingError> {
        DigitRing::from_biguint(&BigUint::from(n), base)
    }

    /// Numeric value of the digits; an empty ring is zero
    pub fn to_biguint(&self) -> BigUint {
        fold_digits(self)
    }

    /// Value of the ring written in decimal; an empty ring is `"0"`
    pub fn to_decimal_string(&self) -> String {
        self.to_biguint().to_string()
    }
}

impl From<&DigitRing> for BigUint {
    fn from(ring: &DigitRing) -> Self {
        ring.to_biguint()
    }
}

impl From<DigitRing> for BigUint {
    fn from(ring: DigitRing) -> Self {
        ring.to_biguint()
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $n:literal in $base:literal => [$($d:literal),*]) => {
            paste! {
                #[test]
                fn [< from_u64_ $name >]() {
                    let n: u64 = $n;
                    let ring = DigitRing::from_u64(n, $base).unwrap();
                    let expected: Vec<Digit> = vec![$($d),*];
                    assert_eq!(ring.to_vec(), expected);
                    assert_eq!(ring.to_biguint(), BigUint::from(n));
                    assert_eq!(ring.to_decimal_string(), stringify!($n));
                }
            }
        };
    }

    impl_case!(zero: 0 in 3 => [0]);
    impl_case!(nine_ternary: 9 in 3 => [1, 0, 0]);
    impl_case!(eight_ternary: 8 in 3 => [2, 2]);
    impl_case!(octal: 511 in 8 => [7, 7, 7]);
    impl_case!(decimal: 3416 in 10 => [3, 4, 1, 6]);
    impl_case!(u64_max_hex: 18446744073709551615 in 16 => [15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15]);

    #[test]
    fn empty_ring_is_zero() {
        let ring = DigitRing::new(5).unwrap();
        assert_eq!(ring.to_biguint(), BigUint::from(0u8));
        assert_eq!(ring.to_decimal_string(), "0");
    }

    #[test]
    fn leading_zeros_do_not_change_value() {
        let ring = DigitRing::from_digits(10, [0, 0, 7]).unwrap();
        assert_eq!(ring.to_decimal_string(), "7");
    }

    #[test]
    fn into_biguint() {
        let ring = DigitRing::from_digits(2, [1, 1, 0]).unwrap();
        let by_ref: BigUint = (&ring).into();
        let by_val: BigUint = ring.into();
        assert_eq!(by_ref, BigUint::from(6u8));
        assert_eq!(by_val, by_ref);
    }

    #[test]
    fn from_biguint_invalid_base() {
        let n = BigUint::from(10u8);
        assert_eq!(DigitRing::from_biguint(&n, 1), Err(DigitRingError::InvalidBase(1)));
    }
}
