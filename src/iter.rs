//! Iteration over the digits of a ring
//!

use crate::*;
use stdlib::iter::FusedIterator;


/// Iterator over the digits of a [`DigitRing`], most significant first
///
/// Iterating in reverse follows `prev` links from the tail, yielding the
/// least significant digit first.
///
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    nodes: &'a NodeArena,
    front: Option<NodeIdx>,
    back: Option<NodeIdx>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(ring: &'a DigitRing) -> Self {
        Iter {
            nodes: ring.nodes(),
            front: ring.head(),
            back: ring.tail(),
            remaining: ring.len(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        self.remaining -= 1;
        self.front = Some(self.nodes.next(idx));
        Some(self.nodes.value(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Digit> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        self.remaining -= 1;
        self.back = Some(self.nodes.prev(idx));
        Some(self.nodes.value(idx))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a DigitRing {
    type Item = Digit;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_ring_yields_nothing() {
        let ring = DigitRing::new(3).unwrap();
        assert_eq!(ring.iter().next(), None);
        assert_eq!(ring.iter().next_back(), None);
        assert_eq!(ring.iter().len(), 0);
    }

    #[test]
    fn forward_and_reverse() {
        let ring = DigitRing::from_digits(10, [4, 0, 9, 6]).unwrap();
        assert_eq!(ring.iter().collect::<Vec<_>>(), vec![4, 0, 9, 6]);
        assert_eq!(ring.iter().rev().collect::<Vec<_>>(), vec![6, 9, 0, 4]);
    }

    #[test]
    fn both_ends_meet_in_the_middle() {
        let ring = DigitRing::from_digits(10, [1, 2, 3]).unwrap();
        let mut it = ring.iter();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn for_loop_over_reference() {
        let ring = DigitRing::from_digits(2, [1, 0, 1]).unwrap();
        let mut total = 0;
        for d in &ring {
            total = total * 2 + d;
        }
        assert_eq!(total, 5);
    }
}
