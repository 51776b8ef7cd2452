mod add_bignums {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: $a:literal + $b:literal = $c:literal ) => {

            #[test]
            fn $name() {
                let lhs = bignum!($a);
                let rhs = bignum!($b);

                let l_plus_r = add(&lhs, &rhs).unwrap();
                let r_plus_l = add(&rhs, &lhs).unwrap();

                let expected = bignum!($c);
                assert_eq!(expected.digits(), l_plus_r.digits());
                assert_eq!(expected.digits(), r_plus_l.digits());
            }

            paste! {
                #[test]
                fn [< $name _operators >]() {
                    let lhs = bignum!($a);
                    let rhs = bignum!($b);
                    let expected = bignum!($c);

                    assert_eq!(&lhs + &rhs, expected);
                    assert_eq!(lhs.clone() + &rhs, expected);
                    assert_eq!(&lhs + rhs.clone(), expected);

                    let mut sum = lhs;
                    sum += rhs;
                    assert_eq!(sum, expected);
                }
            }
        };
    }

    impl_case!(case_0_0: "0" + "0" = "0");
    impl_case!(case_0_7: "0" + "7" = "7");
    impl_case!(case_99_1: "99" + "1" = "100");
    impl_case!(case_5_5: "5" + "5" = "10");
    impl_case!(case_123_456: "123" + "456" = "579");
    impl_case!(case_999999999_1: "999999999" + "1" = "1000000000");
    impl_case!(case_1000000000_1: "1000000000" + "1" = "1000000001");
    impl_case!(
        case_25010755222_639426798457883776:
        "25010755222" + "639426798457883776" = "639426823468638998"
    );
    impl_case!(
        case_18446744073709551615_18446744073709551615:
        "18446744073709551615" + "18446744073709551615" = "36893488147419103230"
    );
}

#[test]
fn add_99_1_carries_through_every_position() {
    let sum = add(&digits!(9, 9), &digits!(1)).unwrap();
    assert_digits_eq!(sum, [1, 0, 0]);
}

#[test]
fn add_leaves_operands_untouched() {
    let a = digits!(4, 5);
    let b = digits!(6, 7, 8);
    let _ = add(&a, &b).unwrap();
    assert_digits_eq!(a, [4, 5]);
    assert_digits_eq!(b, [6, 7, 8]);
}

#[test]
fn sum_length_is_bounded() {
    let a = digits!(9, 9, 9, 9);
    let b = digits!(9, 9);
    let sum = add(&a, &b).unwrap();
    assert!(sum.len() <= a.len().max(b.len()) + 1);
    assert_digits_eq!(sum, [1, 0, 0, 9, 8]);
}

#[test]
fn extend_digit_slice_sum_is_little_endian() {
    let mut dest = Vec::new();
    extend_digit_slice_sum_into(&[5, 5], &[5, 5], &mut dest);
    assert_eq!(dest, &[0, 1, 1]);
}
