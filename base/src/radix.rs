//! Numeral bases supported by the calculator, and the rules for
//! which keystrokes are acceptable digits in each of them.
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

#[cfg(test)]
use test_strategy::Arbitrary;

/// One of the four numeral systems the calculator can display and
/// accept input in.
#[cfg_attr(test, derive(Arbitrary))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Radix {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hexadecimal,
}

impl Radix {
    /// All supported bases, in increasing order.
    pub const ALL: [Radix; 4] = [
        Radix::Binary,
        Radix::Octal,
        Radix::Decimal,
        Radix::Hexadecimal,
    ];

    /// The numeric value of the base (2, 8, 10 or 16).
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Short label used in display headings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Radix::Binary => "BIN",
            Radix::Octal => "OCT",
            Radix::Decimal => "DEC",
            Radix::Hexadecimal => "HEX",
        }
    }

    /// Returns the value of `ch` as a digit in this base, or `None`
    /// if `ch` is not a digit of this base.  Lower-case hex letters
    /// are accepted here; the stricter keystroke rule lives in
    /// [`allowed`].
    #[must_use]
    pub fn digit_value(self, ch: char) -> Option<u32> {
        match ch.to_digit(16) {
            Some(d) if d < self.value() => Some(d),
            _ => None,
        }
    }
}

impl Display for Radix {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(self.label())
    }
}

/// Signals that a number does not name one of the supported bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedRadix(pub u32);

impl Display for UnsupportedRadix {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "base {} is not supported (only 2, 8, 10 and 16 are)",
            self.0
        )
    }
}

impl Error for UnsupportedRadix {}

impl TryFrom<u32> for Radix {
    type Error = UnsupportedRadix;

    fn try_from(n: u32) -> Result<Radix, UnsupportedRadix> {
        match n {
            2 => Ok(Radix::Binary),
            8 => Ok(Radix::Octal),
            10 => Ok(Radix::Decimal),
            16 => Ok(Radix::Hexadecimal),
            other => Err(UnsupportedRadix(other)),
        }
    }
}

impl From<Radix> for u32 {
    fn from(r: Radix) -> u32 {
        r.value()
    }
}

/// Decides whether the keystroke `ch` may be appended to a register
/// while `radix` is active.
///
/// The sign character `-` is always accepted, wherever the cursor
/// is.  Decimal digits are accepted when they are smaller than the
/// base.  The letters `A`-`F` are accepted only in hexadecimal.
#[must_use]
pub fn allowed(ch: char, radix: Radix) -> bool {
    match ch {
        '-' => true,
        '0'..='9' | 'A'..='F' => radix.digit_value(ch).is_some(),
        _ => false,
    }
}
