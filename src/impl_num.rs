//! Implementations of num_traits
//!

use crate::*;

use num_traits::{One, Zero};

impl Zero for BigNat {
    #[inline]
    fn zero() -> BigNat {
        BigNat { digits: vec![0] }
    }

    /// True for any all-zero digit sequence, normalized or not.
    #[inline]
    fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }
}

impl One for BigNat {
    #[inline]
    fn one() -> BigNat {
        BigNat { digits: vec![1] }
    }
}

impl Default for BigNat {
    #[inline]
    fn default() -> BigNat {
        BigNat::zero()
    }
}


#[cfg(test)]
mod test_zero_one {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn zero_is_canonical() {
        assert_eq!(BigNat::zero().digits(), &[0]);
        assert!(BigNat::zero().is_zero());
    }

    #[test]
    fn unnormalized_zero_is_zero() {
        assert!(BigNat::from_str("0000").unwrap().is_zero());
        assert!(!BigNat::from_str("0100").unwrap().is_zero());
    }

    #[test]
    fn one_times_x_is_x() {
        let x = BigNat::from_str("987654321").unwrap();
        assert_eq!(BigNat::one() * &x, x);
    }
}
