//! The `base` crate defines the numeric layer of the calculator: the
//! supported numeral bases, conversion between register text and
//! unbounded integers, keystroke validation, the binary operators and
//! per-bit editing.  None of it holds any state; the `engine` crate
//! builds the calculator itself on top of it.
#![deny(unsafe_code)]

mod bits;
mod ops;
mod radix;
mod text;

pub mod prelude;

pub use crate::bits::{chip_row, toggle_bit, BitIndexOutOfRange, BIT_WINDOW};
pub use crate::ops::{apply, Operator, UnknownOperator, MAX_SHIFT};
pub use crate::radix::{allowed, Radix, UnsupportedRadix};
pub use crate::text::{format, parse, parse_strict, ParseFailure};

/// The unbounded signed integer type the calculator computes with.
pub use num_bigint::BigInt;
