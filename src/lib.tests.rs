fn ring(base: u32, digits: &[Digit]) -> DigitRing {
    DigitRing::from_digits(base, digits.iter().copied()).unwrap()
}

mod construction {
    use super::*;

    #[test]
    fn new_is_empty() {
        let ring = DigitRing::new(3).unwrap();
        assert!(ring.is_empty());
        assert_eq!(ring.len(), 0);
        assert_eq!(ring.base(), 3);
        assert_eq!(ring.first(), None);
        assert_eq!(ring.last(), None);
    }

    #[test]
    fn default_uses_default_base() {
        let ring = DigitRing::default();
        assert_eq!(ring.base(), DEFAULT_BASE);
        assert!(ring.is_empty());
    }

    #[test]
    fn invalid_bases() {
        assert_eq!(DigitRing::new(0).unwrap_err(), DigitRingError::InvalidBase(0));
        assert_eq!(DigitRing::new(1).unwrap_err(), DigitRingError::InvalidBase(1));
        assert!(DigitRing::new(2).is_ok());
        assert!(DigitRing::new(u32::MAX).is_ok());
    }

    #[test]
    fn from_digits_validates_all() {
        assert_eq!(
            DigitRing::from_digits(3, [2, 0, 3, 1]),
            Err(DigitRingError::InvalidDigit { digit: 3, base: 3 })
        );
    }
}

mod append {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $base:literal ~ $digit:literal) => {
            paste! {
                #[test]
                fn [< valid_ $name >]() {
                    let mut ring = ring($base, &[1, 0]);
                    ring.append($digit).unwrap();
                    assert_eq!(ring.len(), 3);
                    assert_eq!(ring.get(ring.len() - 1), Ok($digit));
                    assert_eq!(ring.last(), Some($digit));
                }
            }
        };
        (invalid $name:ident: $base:literal ~ $digit:literal) => {
            paste! {
                #[test]
                fn [< invalid_ $name >]() {
                    let mut ring = ring($base, &[1, 0]);
                    assert_eq!(
                        ring.append($digit),
                        Err(DigitRingError::InvalidDigit { digit: $digit, base: $base })
                    );
                    assert_eq!(ring.len(), 2);
                    assert_eq!(ring.to_vec(), vec![1, 0]);
                }
            }
        };
    }

    impl_case!(binary_zero: 2 ~ 0);
    impl_case!(binary_one: 2 ~ 1);
    impl_case!(ternary_two: 3 ~ 2);
    impl_case!(hex_f: 16 ~ 15);
    impl_case!(huge_base: 4294967295 ~ 4294967294);

    impl_case!(invalid binary_two: 2 ~ 2);
    impl_case!(invalid ternary_three: 3 ~ 3);
    impl_case!(invalid decimal_ten: 10 ~ 10);
    impl_case!(invalid huge_base: 4294967295 ~ 4294967295);

    #[test]
    fn first_append_creates_single_node_cycle() {
        let mut ring = DigitRing::new(10).unwrap();
        ring.append(5).unwrap();
        assert_eq!(ring.first(), Some(5));
        assert_eq!(ring.last(), Some(5));
        assert_eq!(ring.iter().rev().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn append_keeps_order() {
        let mut ring = DigitRing::new(10).unwrap();
        for d in [3, 4, 1, 6] {
            ring.append(d).unwrap();
        }
        assert_eq!(ring.to_vec(), vec![3, 4, 1, 6]);
        assert_eq!(ring.first(), Some(3));
        assert_eq!(ring.last(), Some(6));
    }
}

mod insert {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $digits:expr; insert($index:literal, $digit:literal) => $expected:expr) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let mut ring = ring(10, &$digits);
                    ring.insert_at($index, $digit).unwrap();
                    assert_eq!(ring.to_vec(), $expected);
                    assert_eq!(ring.get($index), Ok($digit));
                }
            }
        };
    }

    impl_case!(into_empty: []; insert(0, 7) => vec![7]);
    impl_case!(front: [1, 2, 3]; insert(0, 9) => vec![9, 1, 2, 3]);
    impl_case!(back: [1, 2, 3]; insert(3, 9) => vec![1, 2, 3, 9]);
    impl_case!(first_half: [1, 2, 3, 4, 5, 6]; insert(1, 9) => vec![1, 9, 2, 3, 4, 5, 6]);
    impl_case!(second_half: [1, 2, 3, 4, 5, 6]; insert(5, 9) => vec![1, 2, 3, 4, 5, 9, 6]);
    impl_case!(middle: [1, 2, 3, 4]; insert(2, 0) => vec![1, 2, 0, 3, 4]);

    #[test]
    fn index_past_end() {
        let mut ring = ring(10, &[1, 2]);
        assert_eq!(
            ring.insert_at(3, 5),
            Err(DigitRingError::IndexOutOfRange { index: 3, len: 2 })
        );
        assert_eq!(ring.to_vec(), vec![1, 2]);
    }

    #[test]
    fn invalid_digit_not_inserted() {
        let mut ring = ring(3, &[1, 2]);
        assert_eq!(
            ring.insert_at(1, 3),
            Err(DigitRingError::InvalidDigit { digit: 3, base: 3 })
        );
        assert_eq!(ring.to_vec(), vec![1, 2]);
    }

    #[test]
    fn push_front() {
        let mut ring = ring(10, &[2]);
        ring.push_front(1).unwrap();
        ring.push_front(0).unwrap();
        assert_eq!(ring.to_vec(), vec![0, 1, 2]);
        assert!(ring.push_front(10).is_err());
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn insert_all_middle() {
        let mut ring = ring(10, &[1, 5]);
        ring.insert_all(1, [2, 3, 4]).unwrap();
        assert_eq!(ring.to_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn insert_all_front_moves_head() {
        let mut ring = ring(10, &[3, 4]);
        ring.insert_all(0, [1, 2]).unwrap();
        assert_eq!(ring.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(ring.first(), Some(1));
    }

    #[test]
    fn insert_all_end_and_empty() {
        let mut ring = DigitRing::new(10).unwrap();
        ring.insert_all(0, [7, 8]).unwrap();
        ring.insert_all(2, [9]).unwrap();
        ring.insert_all(1, []).unwrap();
        assert_eq!(ring.to_vec(), vec![7, 8, 9]);
    }

    #[test]
    fn insert_all_is_all_or_nothing() {
        let mut ring = ring(3, &[1, 1]);
        assert_eq!(
            ring.insert_all(1, [0, 2, 5]),
            Err(DigitRingError::InvalidDigit { digit: 5, base: 3 })
        );
        assert_eq!(
            ring.insert_all(4, [0]),
            Err(DigitRingError::IndexOutOfRange { index: 4, len: 2 })
        );
        assert_eq!(ring.to_vec(), vec![1, 1]);
    }

    #[test]
    fn extend_digits_is_all_or_nothing() {
        let mut ring = ring(2, &[1]);
        assert!(ring.extend_digits([0, 1, 2]).is_err());
        assert_eq!(ring.to_vec(), vec![1]);
        ring.extend_digits([0, 1]).unwrap();
        assert_eq!(ring.to_vec(), vec![1, 0, 1]);
    }
}

mod remove {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $digits:expr; remove_at($index:literal) => $removed:literal, $expected:expr) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let mut ring = ring(10, &$digits);
                    assert_eq!(ring.remove_at($index), Ok($removed));
                    assert_eq!(ring.to_vec(), $expected);
                }
            }
        };
    }

    impl_case!(head: [1, 2, 3]; remove_at(0) => 1, vec![2, 3]);
    impl_case!(tail: [1, 2, 3]; remove_at(2) => 3, vec![1, 2]);
    impl_case!(middle: [1, 2, 3]; remove_at(1) => 2, vec![1, 3]);
    impl_case!(only: [4]; remove_at(0) => 4, vec![]);

    #[test]
    fn out_of_range() {
        let mut ring = ring(10, &[1, 2, 3]);
        assert_eq!(
            ring.remove_at(3),
            Err(DigitRingError::IndexOutOfRange { index: 3, len: 3 })
        );
        let mut empty = DigitRing::new(10).unwrap();
        assert_eq!(
            empty.remove_at(0),
            Err(DigitRingError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn removing_only_digit_then_append() {
        let mut ring = ring(3, &[2]);
        assert_eq!(ring.remove_at(0), Ok(2));
        assert!(ring.is_empty());
        assert_eq!(ring.len(), 0);

        ring.append(1).unwrap();
        assert_eq!(ring.len(), 1);
        assert_eq!(ring.first(), Some(1));
        assert_eq!(ring.last(), Some(1));
        ring.append(0).unwrap();
        assert_eq!(ring.to_vec(), vec![1, 0]);
        assert_eq!(ring.iter().rev().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn remove_value_first_match() {
        let mut ring = ring(10, &[1, 2, 1, 3]);
        assert!(ring.remove_value(1));
        assert_eq!(ring.to_vec(), vec![2, 1, 3]);
        assert!(!ring.remove_value(7));
        assert_eq!(ring.to_vec(), vec![2, 1, 3]);
    }

    #[test]
    fn remove_value_only_digit() {
        let mut ring = ring(10, &[5]);
        assert!(ring.remove_value(5));
        assert!(ring.is_empty());
        assert!(!ring.remove_value(5));
    }

    #[test]
    fn pop_both_ends() {
        let mut ring = ring(10, &[1, 2, 3]);
        assert_eq!(ring.pop_front(), Ok(1));
        assert_eq!(ring.pop_back(), Ok(3));
        assert_eq!(ring.pop_back(), Ok(2));
        assert_eq!(ring.pop_front(), Err(DigitRingError::EmptyOperation));
        assert_eq!(ring.pop_back(), Err(DigitRingError::EmptyOperation));
    }

    #[test]
    fn remove_all_occurrences() {
        let mut ring = ring(10, &[1, 2, 1, 3, 2, 4]);
        assert!(ring.remove_all([1, 2]));
        assert_eq!(ring.to_vec(), vec![3, 4]);
        assert!(!ring.remove_all([9]));
    }

    #[test]
    fn remove_all_empties_ring() {
        let mut ring = ring(3, &[0, 0, 0]);
        assert!(ring.remove_all([0]));
        assert!(ring.is_empty());
        ring.append(2).unwrap();
        assert_eq!(ring.to_vec(), vec![2]);
    }

    #[test]
    fn retain_even() {
        let mut ring = ring(10, &[2, 3, 4, 5, 6]);
        assert!(ring.retain(|d| d % 2 == 0));
        assert_eq!(ring.to_vec(), vec![2, 4, 6]);
        assert!(!ring.retain(|d| d % 2 == 0));
    }

    #[test]
    fn retain_removes_head_run() {
        let mut ring = ring(10, &[1, 1, 2, 1]);
        assert!(ring.retain(|d| d != 1));
        assert_eq!(ring.to_vec(), vec![2]);
        assert_eq!(ring.first(), Some(2));
        assert_eq!(ring.last(), Some(2));
    }

    #[test]
    fn clear_then_reuse() {
        let mut ring = ring(10, &[1, 2, 3]);
        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.get(0), Err(DigitRingError::IndexOutOfRange { index: 0, len: 0 }));
        ring.append(4).unwrap();
        assert_eq!(ring.to_vec(), vec![4]);
    }
}

mod access {
    use super::*;

    #[test]
    fn get_every_index_both_halves() {
        let digits: Vec<Digit> = (0..11).collect();
        let ring = ring(16, &digits);
        for (i, &d) in digits.iter().enumerate() {
            assert_eq!(ring.get(i), Ok(d));
        }
        assert_eq!(ring.get(11), Err(DigitRingError::IndexOutOfRange { index: 11, len: 11 }));
    }

    #[test]
    fn set_returns_previous() {
        let mut ring = ring(3, &[2, 0, 1]);
        assert_eq!(ring.set(1, 2), Ok(0));
        assert_eq!(ring.to_vec(), vec![2, 2, 1]);
    }

    #[test]
    fn set_validates() {
        let mut ring = ring(3, &[2, 0, 1]);
        assert_eq!(ring.set(1, 3), Err(DigitRingError::InvalidDigit { digit: 3, base: 3 }));
        assert_eq!(ring.set(3, 0), Err(DigitRingError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(ring.to_vec(), vec![2, 0, 1]);
    }

    #[test]
    fn index_of_and_last_index_of() {
        let ring = ring(10, &[4, 1, 4, 2, 1]);
        assert_eq!(ring.index_of(4), Some(0));
        assert_eq!(ring.last_index_of(4), Some(2));
        assert_eq!(ring.index_of(1), Some(1));
        assert_eq!(ring.last_index_of(1), Some(4));
        assert_eq!(ring.index_of(9), None);
        assert_eq!(ring.last_index_of(9), None);

        let idx = ring.index_of(2).unwrap();
        assert_eq!(ring.get(idx), Ok(2));
    }

    #[test]
    fn search_empty_ring() {
        let ring = DigitRing::new(10).unwrap();
        assert_eq!(ring.index_of(0), None);
        assert_eq!(ring.last_index_of(0), None);
        assert!(!ring.contains(0));
        assert!(ring.contains_all([]));
    }

    #[test]
    fn contains_all() {
        let ring = ring(10, &[3, 1, 4, 1, 5]);
        assert!(ring.contains(4));
        assert!(ring.contains_all([1, 5, 3]));
        assert!(!ring.contains_all([1, 9]));
    }

    #[test]
    fn clone_is_independent() {
        let original = ring(10, &[1, 2, 3]);
        let mut copy = original.clone();
        copy.set(0, 9).unwrap();
        copy.shift_left();
        assert_eq!(original.to_vec(), vec![1, 2, 3]);
        assert_eq!(copy.to_vec(), vec![2, 3, 9]);
    }
}
