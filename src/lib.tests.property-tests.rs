// Property tests to be included by lib.rs (if enabled)

use crate::arithmetic::multiplication;
use std::str::FromStr;


mod addition_subtraction {
    use super::*;

    proptest! {
        #[test]
        fn add_matches_u128_and_commutes(a: u64, b: u64) {
            let expected = BigNat::from(u128::from(a) + u128::from(b));
            let a = BigNat::from(a);
            let b = BigNat::from(b);

            prop_assert_eq!(&a + &b, expected);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn sub_matches_u64_or_clamps(a: u64, b: u64) {
            let expected = BigNat::from(a.saturating_sub(b));
            prop_assert_eq!(BigNat::from(a) - BigNat::from(b), expected);
        }

        #[test]
        fn add_then_sub_round_trips(a: u128, b: u64) {
            let a = BigNat::from(a);
            let b = BigNat::from(b);
            let sum = &a + &b;

            prop_assert_eq!(&sum - &b, a);
        }

        #[test]
        fn underflow_clamps_to_zero(a: u64, b: u64) {
            prop_assume!(a < b);
            prop_assert_eq!(BigNat::from(a) - BigNat::from(b), BigNat::from(0u8));
        }
    }
}

mod shifting_and_rendering {
    use super::*;

    proptest! {
        #[test]
        fn shift_left_appends_zeros(a: u64, k in 0usize..24) {
            let shifted = BigNat::from(a).shift_left(k);
            prop_assert_eq!(shifted.to_string(), format!("{}{}", a, "0".repeat(k)));
        }

        #[test]
        fn shift_left_by_zero_is_identity(a: u128) {
            let a = BigNat::from(a);
            prop_assert_eq!(a.shift_left(0), a);
        }

        #[test]
        fn parse_display_round_trip(s in "[0-9]{1,60}") {
            let value = BigNat::from_str(&s).unwrap();
            prop_assert_eq!(value.to_string(), s);
        }

        #[test]
        fn normalized_preserves_value(s in "0{0,10}[0-9]{1,30}") {
            let mut expected = s.trim_start_matches('0').to_string();
            if expected.is_empty() {
                expected.push('0');
            }
            let value = BigNat::from_str(&s).unwrap();
            prop_assert_eq!(value.normalized().to_string(), expected);
        }
    }
}

mod multiply_strategies {
    use super::*;

    macro_rules! impl_test {
        ($t:ty) => {
            paste! { proptest! {
                #[test]
                fn [< divide_and_conquer_agree_with_standard_ $t >](a: $t, b: $t) {
                    let a = BigNat::from(a);
                    let b = BigNat::from(b);
                    let expected = multiplication::standard(&a, &b);

                    prop_assert_eq!(multiplication::recursive(&a, &b), expected.clone());
                    prop_assert_eq!(multiplication::recursive_fast(&a, &b), expected.clone());
                    prop_assert_eq!(multiplication::recursive_fast(&b, &a), expected);
                }
            }}
        };
    }

    impl_test!(u16);
    impl_test!(u32);
    impl_test!(u64);
    impl_test!(u128);

    proptest! {
        // bounded operand so the repeated addition finishes quickly
        #[test]
        fn iterative_addition_agrees_with_standard(a: u8, b: u64) {
            let a = BigNat::from(a);
            let b = BigNat::from(b);
            prop_assert_eq!(
                multiplication::iterative_addition(&a, &b),
                multiplication::standard(&a, &b)
            );
        }

        #[test]
        fn strategies_agree_on_unequal_lengths(
            a in "[1-9][0-9]{0,8}",
            b in "[1-9][0-9]{9,25}",
        ) {
            let a = BigNat::from_str(&a).unwrap();
            let b = BigNat::from_str(&b).unwrap();
            let expected = multiplication::standard(&a, &b);

            prop_assert_eq!(multiplication::recursive(&a, &b), expected.clone());
            prop_assert_eq!(multiplication::recursive_fast(&a, &b), expected);
        }
    }
}
