//! Conversion between register text and unbounded integers.
//!
//! Register text is what the user typed: an optional leading `-`
//! followed by digits.  The parser is forgiving; anything it cannot
//! make sense of is treated as zero, since the calculator has no way
//! to show an error for a half-typed number.  The formatter produces
//! the canonical form (no leading zeros, upper-case hex letters).
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use tracing::{event, Level};

use super::radix::Radix;

#[cfg(test)]
mod tests;

/// Describes why some text could not be read as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// `ch` is not a digit of `radix`.  `offset` is the byte offset
    /// of the character within the input after surrounding
    /// whitespace has been trimmed.
    InvalidDigit {
        ch: char,
        offset: usize,
        radix: Radix,
    },
}

impl Display for ParseFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ParseFailure::InvalidDigit { ch, offset, radix } => write!(
                f,
                "character {ch:?} at offset {offset} is not a valid base-{} digit",
                radix.value()
            ),
        }
    }
}

impl Error for ParseFailure {}

/// Reads `raw` as a signed number in base `radix`.
///
/// Surrounding whitespace is ignored, and empty input is zero.  A
/// leading `-` makes the value negative.  Leading zeros are ignored
/// (so a lone `-` is also zero).  Any other character which is not a
/// digit of `radix`, including a second `-`, is an error.
pub fn parse_strict(raw: &str, radix: Radix) -> Result<BigInt, ParseFailure> {
    let trimmed = raw.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest),
        None => (Sign::Plus, trimmed),
    };
    let digits = rest.trim_start_matches('0');
    let skipped = trimmed.len() - digits.len();

    let base = radix.value();
    let mut magnitude = BigUint::zero();
    for (pos, ch) in digits.char_indices() {
        match radix.digit_value(ch) {
            Some(d) => {
                magnitude *= base;
                magnitude += d;
            }
            None => {
                return Err(ParseFailure::InvalidDigit {
                    ch,
                    offset: skipped + pos,
                    radix,
                });
            }
        }
    }
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Reads `raw` as a signed number in base `radix`, treating anything
/// unreadable as zero.  This never fails; see [`parse_strict`] for
/// the accepted syntax.
#[must_use]
pub fn parse(raw: &str, radix: Radix) -> BigInt {
    match parse_strict(raw, radix) {
        Ok(n) => n,
        Err(e) => {
            event!(Level::DEBUG, "treating {raw:?} as zero: {e}");
            BigInt::zero()
        }
    }
}

/// Renders `value` in base `radix`, with a leading `-` for negative
/// values and upper-case letters for hex digits.
#[must_use]
pub fn format(value: &BigInt, radix: Radix) -> String {
    let mut s = value.to_str_radix(radix.value());
    s.make_ascii_uppercase();
    s
}
