//! Per-bit editing of the low 16 bits of a value (the "chip row").
//!
//! The window is a view onto the low bits of the two's-complement
//! representation.  It does not limit the width of the value:
//! toggling a bit leaves every other bit, inside or outside the
//! window, as it was.
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use num_bigint::BigInt;
use num_traits::One;

/// Number of bits in the chip row.
pub const BIT_WINDOW: u32 = 16;

/// Signals an attempt to address a bit outside the chip row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitIndexOutOfRange(pub u32);

impl Display for BitIndexOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "bit {} is outside the {BIT_WINDOW}-bit window",
            self.0
        )
    }
}

impl Error for BitIndexOutOfRange {}

fn check_index(index: u32) -> Result<(), BitIndexOutOfRange> {
    if index < BIT_WINDOW {
        Ok(())
    } else {
        Err(BitIndexOutOfRange(index))
    }
}

/// Returns `value` with bit `index` (0 being least significant)
/// inverted.
pub fn toggle_bit(value: &BigInt, index: u32) -> Result<BigInt, BitIndexOutOfRange> {
    check_index(index)?;
    let mask: BigInt = BigInt::one() << index;
    Ok(value ^ mask)
}

/// The low [`BIT_WINDOW`] bits of `value`; element 0 is the least
/// significant bit.
#[must_use]
pub fn chip_row(value: &BigInt) -> [bool; BIT_WINDOW as usize] {
    let mut row = [false; BIT_WINDOW as usize];
    let mut rest = value.clone();
    for chip in &mut row {
        *chip = (&rest & BigInt::one()).is_one();
        rest >>= 1_u32;
    }
    row
}
