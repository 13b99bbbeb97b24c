//! Operand registers.
//!
//! A register holds exactly what was typed, not a number.  The text
//! is only interpreted (in whatever base is active at the time) when
//! a value is needed.
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use base::prelude::*;

/// Identifies one of the two operand registers.  `A` is the left
/// operand (and the accumulator for results); `B` is the right
/// operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RegisterId {
    A,
    B,
}

impl Display for RegisterId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            RegisterId::A => "A",
            RegisterId::B => "B",
        })
    }
}

/// The text of one operand register.
///
/// Register `A` is never empty; clearing it leaves `"0"`.  Register
/// `B` is empty when no right operand has been entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Register {
    id: RegisterId,
    text: String,
}

impl Register {
    pub fn new(id: RegisterId) -> Register {
        let mut r = Register {
            id,
            text: String::new(),
        };
        r.clear();
        r
    }

    pub fn id(&self) -> RegisterId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The register's value when read in base `radix`.  Text which
    /// is not a number in that base reads as zero.
    pub fn value(&self, radix: Radix) -> BigInt {
        parse(&self.text, radix)
    }

    /// Adds `ch` at the end of the text.  In register `A` a lone
    /// `"0"` is replaced rather than extended, unless `ch` is the
    /// sign character.
    pub(crate) fn push(&mut self, ch: char) {
        if self.id == RegisterId::A && self.text == "0" && ch != '-' {
            self.text.clear();
        }
        self.text.push(ch);
    }

    /// Removes the last character.  If that leaves nothing, or only a
    /// sign, the register becomes `"0"`.
    pub(crate) fn pop(&mut self) {
        self.text.pop();
        if self.text.is_empty() || self.text == "-" {
            self.text = "0".to_string();
        }
    }

    pub(crate) fn clear(&mut self) {
        match self.id {
            RegisterId::A => self.set_text("0".to_string()),
            RegisterId::B => self.text.clear(),
        }
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
        if self.id == RegisterId::A && self.text.is_empty() {
            self.text = "0".to_string();
        }
    }
}
