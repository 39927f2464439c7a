use crate::*;
use stdlib::str::FromStr;

impl FromStr for DigitRing {
    type Err = ParseDigitRingError;

    /// Parse decimal text into a ring of [`DEFAULT_BASE`] digits
    #[inline]
    fn from_str(s: &str) -> Result<DigitRing, ParseDigitRingError> {
        DigitRing::from_decimal_str(s, DEFAULT_BASE)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_uses_default_base() {
        let ring: DigitRing = "9".parse().unwrap();
        assert_eq!(ring.base(), DEFAULT_BASE);
        assert_eq!(ring.to_decimal_string(), "9");
    }

    #[test]
    fn parse_error() {
        assert_eq!("".parse::<DigitRing>(), Err(ParseDigitRingError::Empty));
    }
}
