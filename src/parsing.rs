//! Routines for parsing text into DigitRings
//!
//! Decimal text is read into a `BigUint` and unfolded into the target
//! base; text already written in the ring's base is read character by
//! character.
//!

use crate::*;

use num_bigint::BigUint;
use num_traits::{Num, Zero};

use arithmetic::base_conversion::unfold_biguint;
use impl_fmt::MAX_CHAR_BASE;


/// Split optional sign from decimal text and check every remaining
/// character is an ASCII digit
///
/// Returns (is_negative, digits).
///
fn split_decimal_text(s: &str) -> Result<(bool, &str), ParseDigitRingError> {
    let s = s.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    if digits.is_empty() {
        return Err(ParseDigitRingError::Empty);
    }
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ParseDigitRingError::InvalidCharacter(c));
    }
    Ok((negative, digits))
}

/// Parse decimal text into a non-negative integer
///
/// A minus sign is only accepted in front of zero.
///
pub(crate) fn parse_decimal(s: &str) -> Result<BigUint, ParseDigitRingError> {
    let (negative, digits) = split_decimal_text(s)?;
    let value = BigUint::from_str_radix(digits, 10)?;
    if negative && !value.is_zero() {
        return Err(ParseDigitRingError::Negative);
    }
    Ok(value)
}


impl DigitRing {
    /// Read a decimal number and store it as digits of `base`
    ///
    /// Surrounding whitespace is ignored. Zero becomes the single digit
    /// `[0]`.
    ///
    pub fn from_decimal_str(s: &str, base: u32) -> Result<DigitRing, ParseDigitRingError> {
        let base = check_base(base)?;
        let value = parse_decimal(s)?;
        Ok(unfold_biguint(&value, base))
    }

    /// Read digits already written in `base` (using `0-9a-z`, case
    /// insensitive), most significant first
    ///
    /// Digits are stored exactly as written, leading zeros included.
    /// Only bases up to 36 have character digits.
    ///
    pub fn from_str_radix(s: &str, base: u32) -> Result<DigitRing, ParseDigitRingError> {
        let base = check_base(base)?;
        if base > MAX_CHAR_BASE {
            return Err(DigitRingError::InvalidBase(base).into());
        }

        let s = s.trim();
        if s.is_empty() {
            return Err(ParseDigitRingError::Empty);
        }

        let mut digits = Vec::with_capacity(s.len());
        for c in s.chars() {
            let digit = c.to_digit(base).ok_or(ParseDigitRingError::InvalidCharacter(c))?;
            digits.push(digit);
        }

        let mut ring = DigitRing::with_base(base);
        for digit in digits {
            ring.push_back_unchecked(digit);
        }
        Ok(ring)
    }
}




#[cfg(test)]
mod test_from_str_radix {
    use super::*;

    #[test]
    fn ternary_digits_stored_verbatim() {
        let ring = DigitRing::from_str_radix("0201", 3).unwrap();
        assert_eq!(ring.to_vec(), vec![0, 2, 0, 1]);
    }

    #[test]
    fn hex_mixed_case() {
        let ring = DigitRing::from_str_radix("fF0a", 16).unwrap();
        assert_eq!(ring.to_vec(), vec![15, 15, 0, 10]);
    }

    #[test]
    fn digit_outside_base() {
        assert_eq!(
            DigitRing::from_str_radix("123", 3),
            Err(ParseDigitRingError::InvalidCharacter('3'))
        );
    }

    #[test]
    fn base_too_large_for_characters() {
        assert_eq!(
            DigitRing::from_str_radix("1", 37),
            Err(ParseDigitRingError::Ring(DigitRingError::InvalidBase(37)))
        );
    }
}


#[cfg(test)]
mod test_invalid {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $exp:literal) => {
            paste! {
                #[test]
                #[should_panic(expected = $exp)]
                fn [< case_ $name >]() {
                    DigitRing::from_decimal_str($input, 3).unwrap();
                }
            }
        };
    }

    impl_case!(empty: "" => "Empty");
    impl_case!(whitespace_only: "   " => "Empty");
    impl_case!(sign_only: "-" => "Empty");
    impl_case!(negative: "-12" => "Negative");
    impl_case!(hello: "hello" => "InvalidCharacter");
    impl_case!(decimal_point: "12.5" => "InvalidCharacter");
    impl_case!(inner_space: "1 2" => "InvalidCharacter");
    impl_case!(hex: "0xCafeBeef" => "InvalidCharacter");
    impl_case!(double_sign: "--1" => "InvalidCharacter");
}
