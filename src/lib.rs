//! A big natural number
//!
//! `BigNat` stores an arbitrary-precision non-negative integer as a
//! sequence of decimal digits, most-significant first. It exists to
//! make the cost of classic multiplication algorithms visible: the
//! same pair of operands can be multiplied by repeated addition,
//! grade-school multiplication, naive divide-and-conquer, or a
//! Karatsuba-style divide-and-conquer, and the results compared.
//!
//! Every operation returns a new value; a `BigNat` is never mutated
//! after construction.
//!
//! # Example
//!
//! ```
//! use bignat::BigNat;
//! use std::str::FromStr;
//!
//! let a = BigNat::from_str("999999999999").unwrap();
//! let b = BigNat::from_str("888888888888").unwrap();
//!
//! assert_eq!((&a * &b).to_string(), "888888888887111111111112");
//! ```

use std::fmt;
use std::ops::Range;

// From<T> impls
mod impl_convert;
// Add, Sub, Mul operators
mod impl_ops;

// PartialOrd & Ord
mod impl_cmp;

// Implementations of num_traits
mod impl_num;

// Display & Debug
mod impl_fmt;

mod impl_trait_from_str;

#[cfg(feature = "serde")]
mod impl_serde;

pub mod arithmetic;
pub use arithmetic::multiplication::Algorithm;


/// A non-negative integer of unbounded size.
///
/// Digits are stored most-significant first, one decimal digit per
/// element. The sequence is never empty; the value zero is the single
/// digit `0`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigNat {
    digits: Vec<u8>,
}

impl BigNat {
    /// Creates a `BigNat` of `n` digits, all zero.
    ///
    /// The result is not normalized (its value is zero but it keeps
    /// the requested width). `n = 0` yields the canonical zero.
    pub fn with_digit_count(n: usize) -> BigNat {
        BigNat {
            digits: vec![0; n.max(1)],
        }
    }

    /// Creates a `BigNat` from a deep copy of a contiguous range of
    /// this value's digits.
    ///
    /// The new value owns independent storage and never aliases the
    /// source. Like the source digits, the copied range is *not*
    /// normalized.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or empty.
    pub fn digit_range(&self, range: Range<usize>) -> BigNat {
        assert!(!range.is_empty(), "empty digit range");
        BigNat {
            digits: self.digits[range].to_vec(),
        }
    }

    /// Returns this value with leading zero digits removed.
    ///
    /// Turns `000123` into `123`; an all-zero sequence becomes the
    /// canonical single-digit zero.
    #[must_use]
    pub fn normalized(&self) -> BigNat {
        match self.digits.iter().position(|&d| d != 0) {
            Some(0) => self.clone(),
            Some(first_nonzero) => self.digit_range(first_nonzero..self.digits.len()),
            None => BigNat { digits: vec![0] },
        }
    }

    /// Multiplies this value by 10^`count` by appending `count` zero
    /// digits at the low end.
    ///
    /// `count = 0` returns an equal value. No normalization is applied.
    pub fn shift_left(&self, count: usize) -> BigNat {
        let mut digits = Vec::with_capacity(self.digits.len() + count);
        digits.extend_from_slice(&self.digits);
        digits.resize(self.digits.len() + count, 0);
        BigNat { digits }
    }

    /// Number of digits in the sequence (including leading zeros, if
    /// the value is not normalized).
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// The digit sequence, most-significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Generates a uniform random value of exactly `n` digits with a
    /// non-zero leading digit.
    ///
    /// The leading digit is re-drawn while it comes up zero, so the
    /// result is always normalized. Used to build benchmark and test
    /// inputs; not part of the arithmetic itself.
    pub fn random(n: usize, rng: &mut oorandom::Rand32) -> BigNat {
        debug_assert!(n > 0);
        let mut digits = Vec::with_capacity(n);
        for position in 0..n {
            let digit = loop {
                let draw = rng.rand_range(0..10) as u8;
                if position != 0 || draw != 0 {
                    break draw;
                }
            };
            digits.push(digit);
        }
        BigNat { digits }
    }

    pub(crate) fn from_digits(digits: Vec<u8>) -> BigNat {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.iter().all(|&d| d <= 9));
        BigNat { digits }
    }

    pub(crate) fn parse_decimal_str(s: &str) -> Result<BigNat, ParseBigNatError> {
        if s.is_empty() {
            return Err(ParseBigNatError::Empty);
        }
        let mut digits = Vec::with_capacity(s.len());
        for c in s.chars() {
            match c.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return Err(ParseBigNatError::InvalidDigit(c)),
            }
        }
        Ok(BigNat { digits })
    }
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBigNatError {
    Empty,
    InvalidDigit(char),
}

impl fmt::Display for ParseBigNatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseBigNatError::*;

        match *self {
            Empty => "failed to parse empty string".fmt(f),
            InvalidDigit(c) => write!(f, "invalid digit found in string: {:?}", c),
        }
    }
}

impl std::error::Error for ParseBigNatError {}



#[cfg(test)]
mod test_shift_left {
    use super::*;
    use std::str::FromStr;

    macro_rules! impl_case {
        ($name:ident: $input:literal << $count:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let value = BigNat::from_str($input).unwrap();
                assert_eq!(value.shift_left($count).to_string(), $expected);
            }
        };
    }

    impl_case!(case_12_by_3: "12" << 3 => "12000");
    impl_case!(case_12_by_0: "12" << 0 => "12");
    impl_case!(case_0_by_2: "0" << 2 => "000");
}





#[cfg(all(test, property_tests))]
extern crate proptest;
