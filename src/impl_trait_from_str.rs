use crate::*;
use std::str::FromStr;

impl FromStr for BigNat {
    type Err = ParseBigNatError;

    /// Parse a string of decimal digits, one digit per character.
    ///
    /// The result is not normalized: `"00123"` parses to a five-digit
    /// sequence. Use [`BigNat::normalized`] to strip leading zeros.
    #[inline]
    fn from_str(s: &str) -> Result<BigNat, ParseBigNatError> {
        BigNat::parse_decimal_str(s)
    }
}
