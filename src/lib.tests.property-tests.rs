// Property tests to be included by lib.rs

/// Arbitrary canonical BigNum of up to 60 digits
fn bignum() -> impl Strategy<Value = BigNum> {
    prop::collection::vec(0u8..10, 1..60)
        .prop_map(|digits| BigNum::from_digits_trimmed(digits).unwrap())
}

fn is_canonical(n: &BigNum) -> bool {
    validate_digits(n.digits()).is_ok()
}

mod arithmetic_properties {
    use super::*;

    proptest! {
        #[test]
        fn add_commutes(a in bignum(), b in bignum()) {
            let ab = add(&a, &b).unwrap();
            let ba = add(&b, &a).unwrap();
            prop_assert_eq!(compare(&ab, &ba), Ordering::Equal);
            prop_assert!(is_canonical(&ab));
        }

        #[test]
        fn add_associates(a in bignum(), b in bignum(), c in bignum()) {
            let lhs = add(&add(&a, &b).unwrap(), &c).unwrap();
            let rhs = add(&a, &add(&b, &c).unwrap()).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn add_zero_is_identity(a in bignum()) {
            prop_assert_eq!(add(&a, &BigNum::zero()).unwrap(), a);
        }

        #[test]
        fn mul_identities(a in bignum()) {
            prop_assert_eq!(mul(&a, &BigNum::one()).unwrap(), a.clone());
            prop_assert_eq!(mul(&a, &BigNum::zero()).unwrap(), BigNum::zero());
            prop_assert_eq!(mul(&BigNum::zero(), &a).unwrap(), BigNum::zero());
        }

        #[test]
        fn sub_inverts_add(a in bignum(), b in bignum()) {
            let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
            let difference = sub(&hi, &lo).unwrap();
            prop_assert!(is_canonical(&difference));
            prop_assert_eq!(add(&difference, &lo).unwrap(), hi);
        }

        #[test]
        fn sub_rejects_larger_subtrahend(a in bignum(), b in bignum()) {
            prop_assume!(a < b);
            prop_assert_eq!(sub(&a, &b), Err(ArithmeticError::NegativeResult));
        }

        #[test]
        fn mul_distributes_over_add(a in bignum(), b in bignum(), c in bignum()) {
            let lhs = mul(&a, &add(&b, &c).unwrap()).unwrap();
            let rhs = add(&mul(&a, &b).unwrap(), &mul(&a, &c).unwrap()).unwrap();
            prop_assert!(is_canonical(&lhs));
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn mul_single_matches_mul(a in bignum(), d in 0u8..10, shift in 0usize..12) {
            let digit = Digit::new(d).unwrap();
            let scaled = mul_single(&a, digit, shift).unwrap();
            let expected = mul(&a, &BigNum::from(d)).unwrap().shift_left(shift);
            prop_assert!(is_canonical(&scaled));
            prop_assert_eq!(scaled, expected);
        }
    }
}

mod ordering {
    use super::*;

    proptest! {
        #[test]
        fn compare_is_reflexive(a in bignum()) {
            prop_assert_eq!(compare(&a, &a), Ordering::Equal);
        }

        #[test]
        fn compare_is_antisymmetric(a in bignum(), b in bignum()) {
            prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
        }

        #[test]
        fn compare_is_transitive(a in bignum(), b in bignum(), c in bignum()) {
            let mut values = [a, b, c];
            values.sort();
            prop_assert!(compare(&values[0], &values[1]) != Ordering::Greater);
            prop_assert!(compare(&values[1], &values[2]) != Ordering::Greater);
            prop_assert!(compare(&values[0], &values[2]) != Ordering::Greater);
        }
    }
}

mod against_biguint {
    use super::*;

    proptest! {
        #[test]
        fn operations_agree(a in bignum(), b in bignum()) {
            let big_a = a.to_biguint();
            let big_b = b.to_biguint();

            prop_assert_eq!(compare(&a, &b), big_a.cmp(&big_b));
            prop_assert_eq!(add(&a, &b).unwrap().to_biguint(), &big_a + &big_b);
            prop_assert_eq!(mul(&a, &b).unwrap().to_biguint(), &big_a * &big_b);
            if big_a >= big_b {
                prop_assert_eq!(sub(&a, &b).unwrap().to_biguint(), &big_a - &big_b);
            }
        }

        #[test]
        fn display_round_trips(a in bignum()) {
            let text = a.to_string();
            prop_assert_eq!(text.clone(), a.to_biguint().to_str_radix(10));
            prop_assert_eq!(text.parse::<BigNum>().unwrap(), a);
        }

        #[test]
        fn from_u128_agrees(n: u128) {
            let value = BigNum::from(n);
            prop_assert!(is_canonical(&value));
            prop_assert_eq!(value.to_u128(), Some(n));
        }
    }
}
