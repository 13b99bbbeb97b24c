//! The binary operators of the calculator and their evaluation over
//! unbounded integers.
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use serde::Serialize;
use tracing::{event, Level};

#[cfg(test)]
use test_strategy::Arbitrary;


/// The largest number of bit positions a value may be shifted left
/// by (2^30, a value of about 128 MiB).  Larger left shifts are
/// refused (see [`apply`]).
pub const MAX_SHIFT: usize = 1 << 30;

/// The operators the calculator supports.  All of them take two
/// operands.
#[cfg_attr(test, derive(Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    And,
    Or,
    Xor,
    ShiftLeft,
    ShiftRight,
}

impl Operator {
    pub const ALL: [Operator; 9] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::ShiftLeft,
        Operator::ShiftRight,
    ];

    /// The text shown on the operator's button.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Xor => "XOR",
            Operator::ShiftLeft => "SHL",
            Operator::ShiftRight => "SHR",
        }
    }

    /// Looks up an operator by its button text (in any letter case)
    /// or by its C-like spelling (`&`, `<<` and so on).
    #[must_use]
    pub fn from_symbol(s: &str) -> Option<Operator> {
        let found = match s.to_ascii_uppercase().as_str() {
            "+" => Operator::Add,
            "-" => Operator::Subtract,
            "*" => Operator::Multiply,
            "/" => Operator::Divide,
            "AND" | "&" => Operator::And,
            "OR" | "|" => Operator::Or,
            "XOR" | "^" => Operator::Xor,
            "SHL" | "<<" => Operator::ShiftLeft,
            "SHR" | ">>" => Operator::ShiftRight,
            _ => {
                return None;
            }
        };
        Some(found)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(self.symbol())
    }
}

/// Signals that some text does not name an [`Operator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator(pub String);

impl Display for UnknownOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "'{}' is not a known operator", self.0)
    }
}

impl Error for UnknownOperator {}

impl std::str::FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Operator, UnknownOperator> {
        Operator::from_symbol(s).ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

impl Direction {
    fn reversed(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

fn shift(value: &BigInt, count: &BigInt, towards: Direction) -> BigInt {
    // A negative count shifts the other way.
    let direction = if count.is_negative() {
        towards.reversed()
    } else {
        towards
    };
    let distance: Option<usize> = count.magnitude().to_usize();
    match direction {
        Direction::Left => match distance {
            Some(n) if n <= MAX_SHIFT => value << n,
            _ => {
                event!(
                    Level::WARN,
                    "refusing to shift left by {count} places (the limit is {MAX_SHIFT}); value is unchanged"
                );
                value.clone()
            }
        },
        Direction::Right => match distance {
            Some(n) => value >> n,
            // Every bit has been shifted out; only the sign is left.
            None if value.is_negative() => BigInt::from(-1),
            None => BigInt::zero(),
        },
    }
}

/// Computes `left op right`.
///
/// Division truncates towards zero, and dividing by zero leaves
/// `left` unchanged.  The bitwise operators work on the
/// two's-complement representation of the operands, extended with
/// copies of the sign bit as far as needed.  Shifts by a negative
/// count shift by the absolute value of the count in the other
/// direction; right shifts of negative values round towards negative
/// infinity.  Left shifts by more than [`MAX_SHIFT`] places leave
/// `left` unchanged.
#[must_use]
pub fn apply(op: Operator, left: &BigInt, right: &BigInt) -> BigInt {
    match op {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => {
            if right.is_zero() {
                event!(Level::DEBUG, "division of {left} by zero leaves it unchanged");
                left.clone()
            } else {
                left / right
            }
        }
        Operator::And => left & right,
        Operator::Or => left | right,
        Operator::Xor => left ^ right,
        Operator::ShiftLeft => shift(left, right, Direction::Left),
        Operator::ShiftRight => shift(left, right, Direction::Right),
    }
}
