//! Implementation of comparison operations
//!
//! Equality is derived on the digit sequence: two values are equal
//! iff they have the same length and the same digits. Ordering
//! compares lengths first, then digits most-significant first.
//!
//! Both orderings assume *normalized* operands. A value carrying
//! leading zeros has an inflated length and will misorder against a
//! normalized value; callers must normalize before comparing.
//!

use crate::*;

use std::cmp::Ordering;

impl Ord for BigNat {
    fn cmp(&self, other: &BigNat) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for BigNat {
    #[inline]
    fn partial_cmp(&self, other: &BigNat) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
