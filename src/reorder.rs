//! Operations that reorder digits in place
//!
//! Swapping and sorting exchange node *values*; links are left untouched.
//! Shifting instead moves the head, rotating which node is read first.
//!

use crate::*;
use stdlib::cmp::Ordering;


impl DigitRing {
    /// Exchange the digits at positions `i` and `j`
    ///
    /// Both indices are checked before anything changes; equal indices
    /// are a successful no-op.
    ///
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), DigitRingError> {
        let a = self.node_at(i)?;
        let b = self.node_at(j)?;
        self.nodes.swap_values(a, b);
        Ok(())
    }

    /// Sort digits so the smallest is most significant
    pub fn sort_ascending(&mut self) {
        self.bubble_sort_by(|a, b| a.cmp(&b));
    }

    /// Sort digits so the largest is most significant
    pub fn sort_descending(&mut self) {
        self.bubble_sort_by(|a, b| b.cmp(&a));
    }

    /// Adjacent-swap bubble sort following `next` links from head
    ///
    /// Pass `i` compares `len - 1 - i` neighbouring pairs, swapping
    /// values when `compare` reports them out of order.
    ///
    fn bubble_sort_by<F>(&mut self, compare: F)
    where
        F: Fn(Digit, Digit) -> Ordering,
    {
        let len = self.len();
        let head = match self.head {
            Some(head) if len > 1 => head,
            _ => return,
        };

        for pass in 0..len {
            let mut cursor = head;
            for _ in 0..len - 1 - pass {
                let next = self.nodes.next(cursor);
                if compare(self.nodes.value(cursor), self.nodes.value(next)) == Ordering::Greater {
                    self.nodes.swap_values(cursor, next);
                }
                cursor = next;
            }
        }
    }

    /// Rotate digits one place towards the most significant end
    ///
    /// The old most significant digit becomes the least significant.
    /// Empty and single-digit rings are unchanged.
    ///
    pub fn shift_left(&mut self) {
        if self.len() > 1 {
            self.head = self.head.map(|head| self.nodes.next(head));
        }
    }

    /// Rotate digits one place towards the least significant end
    ///
    /// The old least significant digit becomes the most significant.
    ///
    pub fn shift_right(&mut self) {
        if self.len() > 1 {
            self.head = self.tail();
        }
    }
}




#[cfg(test)]
mod test_sort {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $base:literal ~ $digits:expr => asc $asc:expr, desc $desc:expr) => {
            paste! {
                #[test]
                fn [< ascending_ $name >]() {
                    let mut ring = DigitRing::from_digits($base, $digits).unwrap();
                    ring.sort_ascending();
                    assert_eq!(ring.to_vec(), $asc);
                }

                #[test]
                fn [< descending_ $name >]() {
                    let mut ring = DigitRing::from_digits($base, $digits).unwrap();
                    ring.sort_descending();
                    assert_eq!(ring.to_vec(), $desc);
                }
            }
        };
    }

    impl_case!(empty: 3 ~ [] => asc vec![], desc vec![]);
    impl_case!(single: 3 ~ [2] => asc vec![2], desc vec![2]);
    impl_case!(ternary: 3 ~ [2, 0, 1] => asc vec![0, 1, 2], desc vec![2, 1, 0]);
    impl_case!(repeats: 10 ~ [3, 1, 3, 0, 1] => asc vec![0, 1, 1, 3, 3], desc vec![3, 3, 1, 1, 0]);
    impl_case!(sorted: 10 ~ [1, 2, 3, 4] => asc vec![1, 2, 3, 4], desc vec![4, 3, 2, 1]);

    #[test]
    fn descending_then_ascending() {
        let mut ring = DigitRing::from_digits(3, [2, 0, 1]).unwrap();
        ring.sort_descending();
        assert_eq!(ring.to_vec(), vec![2, 1, 0]);
        ring.sort_ascending();
        assert_eq!(ring.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn sort_after_shift_uses_new_head() {
        let mut ring = DigitRing::from_digits(10, [1, 5, 3]).unwrap();
        ring.shift_left();
        assert_eq!(ring.to_vec(), vec![5, 3, 1]);
        ring.sort_ascending();
        assert_eq!(ring.to_vec(), vec![1, 3, 5]);
        assert_eq!(ring.last(), Some(5));
    }
}
