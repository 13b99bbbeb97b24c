//! The prelude exports the types and functions most users of the
//! base crate need.
pub use super::bits::*;
pub use super::ops::{apply, Operator};
pub use super::radix::{allowed, Radix};
pub use super::text::{format, parse, parse_strict, ParseFailure};
pub use num_bigint::BigInt;
