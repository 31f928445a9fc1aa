//! Subtraction of digit sequences
//!
//! Subtraction is built on top of [`add`] through the nines'
//! complement, the decimal analogue of two's-complement subtraction.
//! For operands of width `d` with `a >= b`:
//!
//! ```text
//! a - b  =  a + (10^d - 1 - b) + 1 - 10^d
//! ```
//!
//! `10^d - 1 - b` is a row of nines with `b`'s digits subtracted in
//! place (no borrows can occur), and subtracting `10^d` is dropping
//! the top digit of the sum. Carry propagation stays in one routine
//! instead of a parallel borrow implementation.

use crate::arithmetic::addition::add;
use crate::BigNat;

use num_traits::One;


/// Compute `a - b`, clamped at zero.
///
/// When `b >= a` the result is the canonical zero value: underflow is
/// silently clamped, never an error. There is no negative result and
/// no signal that clamping occurred.
///
/// Both operands must be normalized; the underflow check compares the
/// operands and inherits the comparison's normalization precondition.
pub fn subtract(a: &BigNat, b: &BigNat) -> BigNat {
    if a <= b {
        return BigNat::from(0u8);
    }

    let width = a.digit_count();

    // complement = 10^width - 1 - b: a row of nines with b's digits
    // subtracted from the low end
    let mut complement = vec![9u8; width];
    for (nine, digit) in complement.iter_mut().rev().zip(b.digits().iter().rev()) {
        *nine -= digit;
    }
    let complement = BigNat::from_digits(complement);

    let sum = add(&add(a, &complement), &BigNat::one());

    // a > b guarantees the sum reached width + 1 digits with a leading
    // one; dropping it subtracts the 10^width the complement added
    sum.digit_range(1..sum.digit_count()).normalized()
}


#[cfg(test)]
mod test_subtract {
    use super::*;
    use std::str::FromStr;

    macro_rules! impl_case {
        ($name:ident: $a:literal - $b:literal == $expected:literal) => {
            #[test]
            fn $name() {
                let a = BigNat::from_str($a).unwrap();
                let b = BigNat::from_str($b).unwrap();
                assert_eq!(subtract(&a, &b).to_string(), $expected);
            }
        };
    }

    impl_case!(case_0_0: "0" - "0" == "0");
    impl_case!(case_7_7: "7" - "7" == "0");
    impl_case!(case_9_5: "9" - "5" == "4");
    impl_case!(case_1000_1: "1000" - "1" == "999");
    impl_case!(case_1000000_999999: "1000000" - "999999" == "1");
    impl_case!(case_56088_123: "56088" - "123" == "55965");
    impl_case!(case_borrow_chain: "100000000" - "1" == "99999999");
    impl_case!(case_unequal_lengths: "1000000000999" - "999" == "1000000000000");
    impl_case!(
        case_large: "888888888887111111111112" - "888888888887111111111111" == "1"
    );

    // underflow is clamped to zero, not signaled
    impl_case!(case_underflow_5_9: "5" - "9" == "0");
    impl_case!(case_underflow_123_1000: "123" - "1000" == "0");
    impl_case!(case_underflow_0_1: "0" - "1" == "0");

    #[test]
    fn add_then_subtract_round_trips() {
        let a = BigNat::from_str("987654321098765432109876543210").unwrap();
        let b = BigNat::from_str("123456789").unwrap();
        let sum = add(&a, &b);
        assert_eq!(subtract(&sum, &b), a);
        assert_eq!(subtract(&sum, &a), b);
    }
}
