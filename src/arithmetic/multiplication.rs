//! Multiplication strategies
//!
//! Four interchangeable algorithms computing the product of two
//! non-negative values. All satisfy the same contract: given
//! normalized operands, return the normalized product, and differ
//! only in asymptotic cost:
//!
//! * [`iterative_addition`]: O(value of the smaller operand)
//! * [`standard`]: O(len(a) * len(b)) digit operations
//! * [`recursive`]: divide-and-conquer with 4 sub-products per level
//! * [`recursive_fast`]: Karatsuba: 3 sub-products per level
//!
//! [`Algorithm`] selects a strategy at runtime, which is how the
//! timing harness drives all four over the same inputs.

use crate::arithmetic::addition::add;
use crate::arithmetic::subtraction::subtract;
use crate::BigNat;

use num_integer::div_rem;
use num_traits::{One, Zero};


/// Multiply by repeated addition.
///
/// A counter is incremented by one per round until it equals the
/// operand with the fewer digits, adding the other operand into the
/// running product each round. The cost is proportional to the
/// *numeric value* of the smaller operand, not its digit count;
/// included for asymptotic comparison, not for use.
pub fn iterative_addition(a: &BigNat, b: &BigNat) -> BigNat {
    // counting up to the smaller value takes fewer rounds, and each
    // add over the shorter counter is cheaper too
    let (bound, addend) = if a.digit_count() <= b.digit_count() {
        (a, b)
    } else {
        (b, a)
    };

    // the counter starts at the bound's width so the first comparison
    // is well-formed; the increment normalizes it from then on
    let mut counter = BigNat::with_digit_count(bound.digit_count());
    let one = BigNat::one();

    let mut product = BigNat::zero();
    while &counter != bound {
        product = add(&product, addend);
        counter = add(&counter, &one);
    }
    product
}


/// Grade-school multiplication.
///
/// For each digit of `a`, least-significant first, build the partial
/// product of `b` by that digit with carry propagation, shift it left
/// by the digit's position, and accumulate into the total.
pub fn standard(a: &BigNat, b: &BigNat) -> BigNat {
    let mut total = BigNat::zero();

    // a full partial row: len(b) + 1 digits for the single-digit
    // product, plus len(a) - 1 for the largest shift applied later
    let width = a.digit_count() + b.digit_count();

    for (position, &a_digit) in a.digits().iter().rev().enumerate() {
        let mut row = vec![0u8; width];
        let mut carry = 0u8;

        for (column, &b_digit) in b.digits().iter().rev().enumerate() {
            // a digit product is at most 81, so with the carry the
            // column total is at most 89 and fits in a byte
            let column_total = carry + a_digit * b_digit;
            let (next_carry, digit) = div_rem(column_total, 10);
            row[width - column - 1] = digit;
            carry = next_carry;
        }
        row[width - b.digit_count() - 1] = carry;

        let row = BigNat::from_digits(row).shift_left(position);
        total = add(&total, &row);
    }
    total
}


/// Naive divide-and-conquer multiplication.
///
/// Each operand splits at the midpoint of its own length into a high
/// half of `len - len/2` digits and a low half of `len/2` digits; the
/// four cross products are computed recursively, shifted by the
/// corresponding low-half lengths, and summed. The textbook
/// decomposition without the Karatsuba identity, kept for comparison:
/// four recursive calls per level gain nothing asymptotically over
/// [`standard`].
pub fn recursive(a: &BigNat, b: &BigNat) -> BigNat {
    let k = a.digit_count();
    let n = b.digit_count();

    if k == 1 && n == 1 {
        let product = u16::from(a.digits()[0]) * u16::from(b.digits()[0]);
        return BigNat::from(product);
    }

    let a_high = a.digit_range(0..k - k / 2);
    let b_high = b.digit_range(0..n - n / 2);
    // a single-digit operand has no low half and contributes no cross
    // or low-low terms
    let a_low = if k > 1 {
        Some(a.digit_range(k - k / 2..k))
    } else {
        None
    };
    let b_low = if n > 1 {
        Some(b.digit_range(n - n / 2..n))
    } else {
        None
    };

    let mut total = recursive(&a_high, &b_high).shift_left(k / 2 + n / 2);
    if let Some(a_low) = &a_low {
        total = add(&total, &recursive(a_low, &b_high).shift_left(n / 2));
    }
    if let Some(b_low) = &b_low {
        total = add(&total, &recursive(&a_high, b_low).shift_left(k / 2));
    }
    if let (Some(a_low), Some(b_low)) = (&a_low, &b_low) {
        total = add(&total, &recursive(a_low, b_low));
    }
    total
}


/// Karatsuba-style divide-and-conquer multiplication.
///
/// Reduces the four sub-products of [`recursive`] to three by
/// deriving the two cross terms from a single product of digit sums.
/// Operands of different lengths are supported without padding: the
/// shorter operand (`k` digits, swapped into the first position if
/// needed) and the longer (`n` digits) each split at their own
/// midpoint, and the longer operand's high product is re-aligned by
/// 10^(n/2 - k/2) before it is subtracted out of the middle term.
pub fn recursive_fast(a: &BigNat, b: &BigNat) -> BigNat {
    let k = a.digit_count();
    let n = b.digit_count();

    if k == 1 {
        return standard(a, b);
    }
    // keep the shorter operand on the left
    if n < k {
        return recursive_fast(b, a);
    }

    let a_high = a.digit_range(0..k - k / 2);
    let a_low = a.digit_range(k - k / 2..k);
    let b_high = b.digit_range(0..n - n / 2);
    let b_low = b.digit_range(n - n / 2..n);

    let low_product = recursive_fast(&a_low, &b_low);
    let high_product = recursive_fast(&a_high, &b_high);

    // subtract requires normalized operands; a zero high product keeps
    // its shift padding as leading zeros, so strip them here
    let aligned_high = high_product.shift_left(n / 2 - k / 2).normalized();

    // with a = A*10^(k/2) + B and b = C*10^(n/2) + D:
    //   (A + B)(C*10^(n/2 - k/2) + D)
    //     = AC*10^(n/2 - k/2) + BD + AD + BC*10^(n/2 - k/2)
    // so subtracting the re-aligned high product and the low product
    // leaves the middle term AD + BC*10^(n/2 - k/2)
    let digit_sums = recursive_fast(
        &add(&a_high, &a_low),
        &add(&b_high.shift_left(n / 2 - k / 2), &b_low),
    );
    let middle = subtract(&subtract(&digit_sums, &aligned_high), &low_product);

    add(
        &add(
            &high_product.shift_left(k / 2 + n / 2),
            &middle.shift_left(k / 2),
        ),
        &low_product,
    )
}


/// A multiplication strategy, selectable at runtime.
///
/// Every variant computes the same product; they differ only in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    IterativeAddition,
    Standard,
    Recursive,
    RecursiveFast,
}

impl Algorithm {
    /// All strategies, in the order the timing table reports them.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::IterativeAddition,
        Algorithm::Standard,
        Algorithm::Recursive,
        Algorithm::RecursiveFast,
    ];

    /// Stable name used for reporting.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::IterativeAddition => "iterative-addition",
            Algorithm::Standard => "standard",
            Algorithm::Recursive => "recursive",
            Algorithm::RecursiveFast => "recursive-fast",
        }
    }

    /// Multiply `a` and `b` with this strategy.
    pub fn multiply(self, a: &BigNat, b: &BigNat) -> BigNat {
        match self {
            Algorithm::IterativeAddition => iterative_addition(a, b),
            Algorithm::Standard => standard(a, b),
            Algorithm::Recursive => recursive(a, b),
            Algorithm::RecursiveFast => recursive_fast(a, b),
        }
    }
}


#[cfg(test)]
mod test_multiply {
    use super::*;
    use std::str::FromStr;

    // every case runs under all four strategies, in both operand
    // orders, and expects the identical product
    macro_rules! impl_case {
        ($name:ident: $a:literal * $b:literal == $expected:literal) => {
            #[test]
            fn $name() {
                let a = BigNat::from_str($a).unwrap();
                let b = BigNat::from_str($b).unwrap();

                for algorithm in Algorithm::ALL {
                    let product = algorithm.multiply(&a, &b);
                    assert_eq!(product.to_string(), $expected, "{:?}", algorithm);

                    let commutes = algorithm.multiply(&b, &a);
                    assert_eq!(commutes.to_string(), $expected, "{:?}", algorithm);
                }
            }
        };
    }

    impl_case!(case_0_0: "0" * "0" == "0");
    impl_case!(case_0_473: "0" * "473" == "0");
    impl_case!(case_1_473: "1" * "473" == "473");
    impl_case!(case_9_9: "9" * "9" == "81");
    impl_case!(case_5_20: "5" * "20" == "100");
    impl_case!(case_123_456: "123" * "456" == "56088");
    impl_case!(case_99_99: "99" * "99" == "9801");
    impl_case!(case_1000_1000: "1000" * "1000" == "1000000");
    impl_case!(case_digit_by_long: "7" * "123456789" == "864197523");

    // repeated addition is value-proportional and cannot touch
    // operands this large; it is covered by the small cases above
    #[test]
    fn twelve_digit_operands_agree_across_strategies() {
        let a = BigNat::from_str("999999999999").unwrap();
        let b = BigNat::from_str("888888888888").unwrap();
        let expected = "888888888887111111111112";

        for algorithm in [Algorithm::Standard, Algorithm::Recursive, Algorithm::RecursiveFast] {
            assert_eq!(
                algorithm.multiply(&a, &b).to_string(),
                expected,
                "{:?}",
                algorithm
            );
        }
    }

    // unequal digit counts exercise the asymmetric split paths
    #[test]
    fn unequal_length_operands_7_by_13() {
        let a = BigNat::from_str("1234567").unwrap();
        let b = BigNat::from_str("9876543210987").unwrap();
        let expected = "12193254322358587629";

        assert_eq!(recursive(&a, &b).to_string(), expected);
        assert_eq!(recursive(&b, &a).to_string(), expected);
        assert_eq!(recursive_fast(&a, &b).to_string(), expected);
        assert_eq!(recursive_fast(&b, &a).to_string(), expected);
        assert_eq!(standard(&a, &b).to_string(), expected);
    }

    #[test]
    fn random_operands_agree_across_strategies() {
        let mut rng = oorandom::Rand32::new(7391);

        for _ in 0..20 {
            let a_len = rng.rand_range(1..25) as usize;
            let b_len = rng.rand_range(1..25) as usize;
            let a = BigNat::random(a_len, &mut rng);
            let b = BigNat::random(b_len, &mut rng);

            let reference = standard(&a, &b);
            assert_eq!(recursive(&a, &b), reference, "{} * {}", a, b);
            assert_eq!(recursive_fast(&a, &b), reference, "{} * {}", a, b);
        }
    }

    #[test]
    fn iterative_addition_matches_standard_for_small_values() {
        let mut rng = oorandom::Rand32::new(404);

        for _ in 0..10 {
            let a = BigNat::random(2, &mut rng);
            let b = BigNat::random(6, &mut rng);
            assert_eq!(iterative_addition(&a, &b), standard(&a, &b), "{} * {}", a, b);
        }
    }

    #[test]
    fn products_match_native_multiplication() {
        let mut rng = oorandom::Rand32::new(1618);

        for _ in 0..50 {
            let a = u64::from(rng.rand_u32());
            let b = u64::from(rng.rand_u32());
            let expected = BigNat::from(a * b);

            let a = BigNat::from(a);
            let b = BigNat::from(b);
            assert_eq!(standard(&a, &b), expected);
            assert_eq!(recursive(&a, &b), expected);
            assert_eq!(recursive_fast(&a, &b), expected);
        }
    }
}
