//! Addition operator trait implementation
//!
//! All operators panic if the operands have different bases;
//! use [`DigitRing::checked_add`] to handle that case.
//!

use crate::*;
use stdlib::ops::{Add, AddAssign};

use arithmetic::addition::add_digit_rings;


#[inline]
fn add_same_base(lhs: &DigitRing, rhs: &DigitRing) -> DigitRing {
    if lhs.base() != rhs.base() {
        panic!("{}", DigitRingError::BaseMismatch { lhs: lhs.base(), rhs: rhs.base() });
    }
    add_digit_rings(lhs, rhs)
}


impl Add<&DigitRing> for &DigitRing {
    type Output = DigitRing;

    #[inline]
    fn add(self, rhs: &DigitRing) -> DigitRing {
        add_same_base(self, rhs)
    }
}

impl Add<DigitRing> for &DigitRing {
    type Output = DigitRing;

    #[inline]
    fn add(self, rhs: DigitRing) -> DigitRing {
        add_same_base(self, &rhs)
    }
}

impl Add<&DigitRing> for DigitRing {
    type Output = DigitRing;

    #[inline]
    fn add(self, rhs: &DigitRing) -> DigitRing {
        add_same_base(&self, rhs)
    }
}

impl Add<DigitRing> for DigitRing {
    type Output = DigitRing;

    #[inline]
    fn add(self, rhs: DigitRing) -> DigitRing {
        add_same_base(&self, &rhs)
    }
}

impl AddAssign<&DigitRing> for DigitRing {
    #[inline]
    fn add_assign(&mut self, rhs: &DigitRing) {
        *self = add_same_base(self, rhs);
    }
}

impl AddAssign<DigitRing> for DigitRing {
    #[inline]
    fn add_assign(&mut self, rhs: DigitRing) {
        *self = add_same_base(self, &rhs);
    }
}
