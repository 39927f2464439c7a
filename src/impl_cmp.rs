//! Implementation of comparison operations
//!
//! Rings compare equal when they hold the same digit sequence, read from
//! their current heads. The base is not part of the comparison, so a
//! ternary `[1, 0]` equals an octal `[1, 0]` even though the values differ;
//! compare [`DigitRing::to_biguint`] for numeric equality.
//!

use crate::*;

use stdlib::hash::{Hash, Hasher};


impl PartialEq for DigitRing {
    fn eq(&self, rhs: &DigitRing) -> bool {
        self.len() == rhs.len() && self.iter().eq(rhs.iter())
    }
}

impl Eq for DigitRing {}

impl PartialEq<[Digit]> for DigitRing {
    fn eq(&self, rhs: &[Digit]) -> bool {
        self.len() == rhs.len() && self.iter().eq(rhs.iter().copied())
    }
}

impl PartialEq<Vec<Digit>> for DigitRing {
    fn eq(&self, rhs: &Vec<Digit>) -> bool {
        *self == rhs[..]
    }
}

impl<const N: usize> PartialEq<[Digit; N]> for DigitRing {
    fn eq(&self, rhs: &[Digit; N]) -> bool {
        *self == rhs[..]
    }
}

impl Hash for DigitRing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for digit in self.iter() {
            digit.hash(state);
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $a:expr, $b:expr => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let a: DigitRing = $a;
                    let b: DigitRing = $b;
                    assert_eq!(a == b, $expected);
                    assert_eq!(b == a, $expected);
                }
            }
        };
    }

    fn ring(base: u32, digits: &[Digit]) -> DigitRing {
        DigitRing::from_digits(base, digits.iter().copied()).unwrap()
    }

    impl_case!(same: ring(3, &[2, 0, 1]), ring(3, &[2, 0, 1]) => true);
    impl_case!(different_digit: ring(3, &[2, 0, 1]), ring(3, &[2, 1, 1]) => false);
    impl_case!(different_len: ring(3, &[2, 0]), ring(3, &[2, 0, 0]) => false);
    impl_case!(both_empty: ring(3, &[]), ring(3, &[]) => true);
    impl_case!(base_ignored: ring(3, &[1, 0]), ring(8, &[1, 0]) => true);
    impl_case!(leading_zero_matters: ring(10, &[0, 4]), ring(10, &[4]) => false);

    #[test]
    fn rotated_ring_compares_by_head() {
        let mut a = ring(10, &[1, 2, 3]);
        let b = ring(10, &[2, 3, 1]);
        assert_ne!(a, b);
        a.shift_left();
        assert_eq!(a, b);
    }

    #[test]
    fn compare_with_slices() {
        let a = ring(10, &[4, 2]);
        assert_eq!(a, [4, 2]);
        assert_eq!(a, vec![4, 2]);
        assert!(a != [4, 2, 0]);
        assert!(a == [4, 2][..]);
    }

    #[cfg(feature = "std")]
    mod hash {
        use super::*;
        use stdlib::DefaultHasher;

        fn hash_value(ring: &DigitRing) -> u64 {
            let mut hasher = DefaultHasher::new();
            ring.hash(&mut hasher);
            hasher.finish()
        }

        #[test]
        fn equal_rings_hash_equal() {
            let mut a = ring(10, &[3, 1, 2]);
            let b = ring(10, &[1, 2, 3]);
            a.shift_left();
            assert_eq!(hash_value(&a), hash_value(&b));
        }
    }
}
