//! Conversions from primitive integers
//!

use crate::*;

macro_rules! impl_from_uint {
    ($($t:ty),*) => {$(
        impl From<$t> for BigNat {
            fn from(mut n: $t) -> BigNat {
                let mut digits = Vec::new();
                loop {
                    digits.push((n % 10) as u8);
                    n /= 10;
                    if n == 0 {
                        break;
                    }
                }
                digits.reverse();
                BigNat { digits }
            }
        }
    )*};
}

impl_from_uint!(u8, u16, u32, u64, u128, usize);
