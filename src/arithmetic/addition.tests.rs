macro_rules! impl_case {
    ($name:ident: $base:literal ~ [$($a:literal),*] + [$($b:literal),*] = [$($c:literal),*]) => {
        paste! {
            #[test]
            fn [< case_ $name >]() {
                let a = DigitRing::from_digits($base, [$($a),*]).unwrap();
                let b = DigitRing::from_digits($base, [$($b),*]).unwrap();
                let expected: Vec<Digit> = vec![$($c),*];

                let a_plus_b = add_digit_rings(&a, &b);
                assert_eq!(a_plus_b.to_vec(), expected);
                assert_eq!(a_plus_b.base(), $base);

                let b_plus_a = add_digit_rings(&b, &a);
                assert_eq!(b_plus_a.to_vec(), expected);
            }
        }
    };
}

impl_case!(ternary_4_4: 3 ~ [1, 1] + [1, 1] = [2, 2]);
impl_case!(ternary_8_1: 3 ~ [2, 2] + [1] = [1, 0, 0]);
impl_case!(ternary_0_0: 3 ~ [0] + [0] = [0]);
impl_case!(empty_empty: 3 ~ [] + [] = []);
impl_case!(empty_ternary_5: 3 ~ [] + [1, 2] = [1, 2]);
impl_case!(decimal_999_1: 10 ~ [9, 9, 9] + [1] = [1, 0, 0, 0]);
impl_case!(decimal_1234_5678: 10 ~ [1, 2, 3, 4] + [5, 6, 7, 8] = [6, 9, 1, 2]);
impl_case!(decimal_leading_zero_kept: 10 ~ [0, 5] + [4] = [0, 9]);
impl_case!(binary_1111_1: 2 ~ [1, 1, 1, 1] + [1] = [1, 0, 0, 0, 0]);
impl_case!(binary_101_11: 2 ~ [1, 0, 1] + [1, 1] = [1, 0, 0, 0]);
impl_case!(octal_777_777: 8 ~ [7, 7, 7] + [7, 7, 7] = [1, 7, 7, 6]);
impl_case!(hex_ff_1: 16 ~ [15, 15] + [1] = [1, 0, 0]);
impl_case!(base_1000: 1000 ~ [999, 999] + [1] = [1, 0, 0]);

#[test]
fn operands_are_not_modified() {
    let a = DigitRing::from_digits(3, [2, 2]).unwrap();
    let b = DigitRing::from_digits(3, [1]).unwrap();
    let _ = add_digit_rings(&a, &b);
    assert_eq!(a.to_vec(), vec![2, 2]);
    assert_eq!(b.to_vec(), vec![1]);
}

#[test]
fn result_ring_is_independent() {
    let a = DigitRing::from_digits(10, [4, 2]).unwrap();
    let b = DigitRing::from_digits(10, [1]).unwrap();
    let mut sum = add_digit_rings(&a, &b);
    sum.set(0, 0).unwrap();
    sum.append(7).unwrap();
    assert_eq!(sum.to_vec(), vec![0, 3, 7]);
    assert_eq!(a.to_vec(), vec![4, 2]);
}

#[test]
fn add_shifted_operand() {
    // shifting changes which digit is least significant
    let mut a = DigitRing::from_digits(10, [1, 0, 9]).unwrap();
    a.shift_left();
    let b = DigitRing::from_digits(10, [1]).unwrap();
    assert_eq!(add_digit_rings(&a, &b).to_vec(), vec![0, 9, 2]);
}

#[test]
fn checked_add_same_base() {
    let a = DigitRing::from_digits(3, [2, 2]).unwrap();
    let b = DigitRing::from_digits(3, [1]).unwrap();
    let sum = a.checked_add(&b).unwrap();
    assert_eq!(sum.to_vec(), vec![1, 0, 0]);
}

#[test]
fn checked_add_base_mismatch() {
    let a = DigitRing::from_digits(3, [2, 2]).unwrap();
    let b = DigitRing::from_digits(8, [1]).unwrap();
    assert_eq!(
        a.checked_add(&b),
        Err(DigitRingError::BaseMismatch { lhs: 3, rhs: 8 })
    );
}
