//! Implementation of std::fmt traits
//!

use crate::*;

impl fmt::Display for BigNat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.digits.iter().map(|&d| char::from(b'0' + d)).collect();
        f.pad_integral(true, "", &s)
    }
}

impl fmt::Debug for BigNat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigNat(\"{}\")", self)
    }
}
