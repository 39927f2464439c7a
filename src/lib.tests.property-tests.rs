// Property tests to be included by lib.rs (if enabled)

/// Strategy producing (base, digits) with every digit valid for base
fn base_and_digits(max_len: usize) -> impl Strategy<Value = (u32, Vec<Digit>)> {
    (2u32..=40).prop_flat_map(move |base| {
        (Just(base), prop::collection::vec(0..base, 0..max_len))
    })
}

/// Strategy producing a base and two digit sequences for it
fn base_and_two_operands(max_len: usize) -> impl Strategy<Value = (u32, Vec<Digit>, Vec<Digit>)> {
    (2u32..=40).prop_flat_map(move |base| {
        (
            Just(base),
            prop::collection::vec(0..base, 0..max_len),
            prop::collection::vec(0..base, 0..max_len),
        )
    })
}

fn value_of(base: u32, digits: &[Digit]) -> num_bigint::BigUint {
    let base = num_bigint::BigUint::from(base);
    digits.iter().fold(num_bigint::BigUint::from(0u8), |acc, &d| acc * &base + d)
}

proptest! {
    #[test]
    fn append_then_get_last((base, digits) in base_and_digits(20), seed in any::<u32>()) {
        let mut ring = DigitRing::from_digits(base, digits).unwrap();
        let digit = seed % base;
        ring.append(digit).unwrap();
        prop_assert_eq!(ring.get(ring.len() - 1), Ok(digit));
    }

    #[test]
    fn append_out_of_range_fails((base, digits) in base_and_digits(20), excess in 0u32..1000) {
        let mut ring = DigitRing::from_digits(base, digits).unwrap();
        let len = ring.len();
        let digit = base + excess;
        prop_assert_eq!(ring.append(digit), Err(DigitRingError::InvalidDigit { digit, base }));
        prop_assert_eq!(ring.len(), len);
    }

    #[test]
    fn shifts_are_inverse((base, digits) in base_and_digits(30)) {
        let mut ring = DigitRing::from_digits(base, digits.clone()).unwrap();
        ring.shift_left();
        ring.shift_right();
        prop_assert_eq!(ring.to_vec(), digits.clone());
        ring.shift_right();
        ring.shift_left();
        prop_assert_eq!(ring.to_vec(), digits);
    }

    #[test]
    fn index_of_finds_digit((base, digits) in base_and_digits(30)) {
        let ring = DigitRing::from_digits(base, digits.clone()).unwrap();
        for &d in digits.iter() {
            let i = ring.index_of(d).unwrap();
            prop_assert_eq!(ring.get(i), Ok(d));
            let j = ring.last_index_of(d).unwrap();
            prop_assert_eq!(ring.get(j), Ok(d));
            prop_assert!(i <= j);
        }
    }

    #[test]
    fn get_matches_vector((base, digits) in base_and_digits(50)) {
        let ring = DigitRing::from_digits(base, digits.clone()).unwrap();
        for (i, &d) in digits.iter().enumerate() {
            prop_assert_eq!(ring.get(i), Ok(d));
        }
    }

    #[test]
    fn addition_matches_value((base, a, b) in base_and_two_operands(30)) {
        let lhs = DigitRing::from_digits(base, a.clone()).unwrap();
        let rhs = DigitRing::from_digits(base, b.clone()).unwrap();
        let sum = &lhs + &rhs;
        prop_assert_eq!(sum.base(), base);
        prop_assert_eq!(sum.to_biguint(), value_of(base, &a) + value_of(base, &b));
        prop_assert!(sum.len() <= a.len().max(b.len()) + 1);
        prop_assert!(sum.len() >= a.len().max(b.len()));
    }

    #[test]
    fn addition_commutes((base, a, b) in base_and_two_operands(30)) {
        let lhs = DigitRing::from_digits(base, a).unwrap();
        let rhs = DigitRing::from_digits(base, b).unwrap();
        prop_assert_eq!(&lhs + &rhs, &rhs + &lhs);
    }

    #[test]
    fn base_conversion_round_trip((base, digits) in base_and_digits(30), target in 2u32..100) {
        let ring = DigitRing::from_digits(base, digits).unwrap();
        let canonical = ring.convert_base(base).unwrap();
        let back = ring.convert_base(target).unwrap().convert_base(base).unwrap();
        prop_assert_eq!(&back, &canonical);
        prop_assert_eq!(back.to_biguint(), ring.to_biguint());
        // canonical form has no leading zero unless the value is zero
        prop_assert!(back.first() != Some(0) || back.len() == 1);
    }

    #[test]
    fn sort_orders_digits((base, digits) in base_and_digits(30)) {
        let mut ring = DigitRing::from_digits(base, digits.clone()).unwrap();
        let mut sorted = digits;
        sorted.sort();

        ring.sort_ascending();
        prop_assert_eq!(ring.to_vec(), sorted.clone());

        sorted.reverse();
        ring.sort_descending();
        prop_assert_eq!(ring.to_vec(), sorted);
    }
}
