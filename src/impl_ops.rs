//! Operator trait implementations
//!
//! Thin forwarding into the `arithmetic` functions. `Sub` clamps at
//! zero and `Mul` uses the Karatsuba strategy; call into
//! [`crate::arithmetic::multiplication`] directly to pick another
//! algorithm.

use crate::arithmetic::{addition, multiplication, subtraction};
use crate::BigNat;

use std::ops::{Add, Mul, Sub};

macro_rules! forward_binop_to_ref_ref {
    (impl $imp:ident for BigNat, $method:ident) => {
        impl $imp<BigNat> for BigNat {
            type Output = BigNat;

            #[inline]
            fn $method(self, rhs: BigNat) -> BigNat {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&BigNat> for BigNat {
            type Output = BigNat;

            #[inline]
            fn $method(self, rhs: &BigNat) -> BigNat {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<BigNat> for &BigNat {
            type Output = BigNat;

            #[inline]
            fn $method(self, rhs: BigNat) -> BigNat {
                $imp::$method(self, &rhs)
            }
        }
    };
}

forward_binop_to_ref_ref!(impl Add for BigNat, add);
forward_binop_to_ref_ref!(impl Sub for BigNat, sub);
forward_binop_to_ref_ref!(impl Mul for BigNat, mul);

impl Add<&BigNat> for &BigNat {
    type Output = BigNat;

    #[inline]
    fn add(self, rhs: &BigNat) -> BigNat {
        addition::add(self, rhs)
    }
}

impl Sub<&BigNat> for &BigNat {
    type Output = BigNat;

    #[inline]
    fn sub(self, rhs: &BigNat) -> BigNat {
        subtraction::subtract(self, rhs)
    }
}

impl Mul<&BigNat> for &BigNat {
    type Output = BigNat;

    #[inline]
    fn mul(self, rhs: &BigNat) -> BigNat {
        multiplication::recursive_fast(self, rhs)
    }
}


#[cfg(test)]
mod test_ops {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn operators_forward_to_arithmetic() {
        let a = BigNat::from_str("1000").unwrap();
        let b = BigNat::from_str("1").unwrap();

        assert_eq!((&a + &b).to_string(), "1001");
        assert_eq!((&a - &b).to_string(), "999");
        assert_eq!((&a * &b).to_string(), "1000");
    }

    #[test]
    fn owned_and_borrowed_mix() {
        let a = BigNat::from_str("21").unwrap();
        let b = BigNat::from_str("2").unwrap();

        assert_eq!((a.clone() + b.clone()).to_string(), "23");
        assert_eq!((a.clone() - &b).to_string(), "19");
        assert_eq!((&a * b).to_string(), "42");
    }

    #[test]
    fn sub_clamps_at_zero() {
        let a = BigNat::from_str("5").unwrap();
        let b = BigNat::from_str("9").unwrap();
        assert_eq!((a - b).to_string(), "0");
    }
}
