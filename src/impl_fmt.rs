//! Implementation of std::fmt traits & other stringification functions
//!

use crate::*;
use stdlib::fmt::Write;


/// Largest base whose digits all have a single-character representation
pub(crate) const MAX_CHAR_BASE: u32 = 36;


impl fmt::Display for DigitRing {
    /// Write digits most significant first
    ///
    /// Bases up to 36 use `0-9a-z`; larger bases write each digit in
    /// decimal, separated by `:`. An empty ring writes nothing.
    ///
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.base() <= MAX_CHAR_BASE {
            for digit in self.iter() {
                let c = char::from_digit(digit, self.base()).ok_or(fmt::Error)?;
                f.write_char(c)?;
            }
        } else {
            for (i, digit) in self.iter().enumerate() {
                if i != 0 {
                    f.write_char(':')?;
                }
                write!(f, "{}", digit)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for DigitRing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DigitRing")
         .field("base", &self.base())
         .field("digits", &DigitsDebug(self))
         .finish()
    }
}

struct DigitsDebug<'a>(&'a DigitRing);

impl fmt::Debug for DigitsDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;
    use stdlib::string::ToString;

    macro_rules! impl_case {
        ($name:ident: $base:literal ~ [$($d:literal),*] => $expected:literal) => {
            paste! {
                #[test]
                fn [< display_ $name >]() {
                    let ring = DigitRing::from_digits($base, [$($d),*]).unwrap();
                    assert_eq!(ring.to_string(), $expected);
                }
            }
        };
    }

    impl_case!(empty: 3 ~ [] => "");
    impl_case!(ternary: 3 ~ [2, 0, 1] => "201");
    impl_case!(decimal_leading_zero: 10 ~ [0, 4, 2] => "042");
    impl_case!(hex: 16 ~ [15, 10, 0] => "fa0");
    impl_case!(base36: 36 ~ [35, 0] => "z0");
    impl_case!(base60: 60 ~ [1, 59, 0] => "1:59:0");

    #[test]
    fn debug_shows_base_and_digits() {
        let ring = DigitRing::from_digits(3, [2, 0, 1]).unwrap();
        assert_eq!(format!("{:?}", ring), "DigitRing { base: 3, digits: [2, 0, 1] }");
    }

    #[test]
    fn debug_empty() {
        let ring = DigitRing::new(8).unwrap();
        assert_eq!(format!("{:?}", ring), "DigitRing { base: 8, digits: [] }");
    }
}
