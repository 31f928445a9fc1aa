//! Addition of digit sequences
//!

use crate::BigNat;

use num_integer::div_rem;


/// Add two values digit by digit with carry propagation.
///
/// The working buffer has `max(len(a), len(b)) + 1` digits; the extra
/// leading digit absorbs a final carry of 0 or 1 and is stripped by
/// normalization when it stays zero. The result is always normalized.
pub fn add(a: &BigNat, b: &BigNat) -> BigNat {
    let size = a.digit_count().max(b.digit_count());

    let mut a_digits = a.digits().iter().rev();
    let mut b_digits = b.digits().iter().rev();

    // built least-significant first, reversed at the end
    let mut sum = Vec::with_capacity(size + 1);
    let mut carry = 0u8;

    for _ in 0..size + 1 {
        let column = carry
            + a_digits.next().copied().unwrap_or(0)
            + b_digits.next().copied().unwrap_or(0);
        let (next_carry, digit) = div_rem(column, 10);
        sum.push(digit);
        carry = next_carry;
    }
    debug_assert_eq!(carry, 0);

    sum.reverse();
    BigNat::from_digits(sum).normalized()
}
