//! The display snapshot rendered by the host after each event.
use serde::Serialize;

use base::prelude::*;

use super::register::RegisterId;

/// Everything a host needs to draw the calculator: the shown value
/// in all four bases, its low 16 bits, and the raw state of the
/// registers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Views {
    /// The base new input is interpreted in.
    pub radix: Radix,
    /// The register whose value is shown.
    pub shown: RegisterId,
    pub binary: String,
    pub octal: String,
    pub decimal: String,
    pub hexadecimal: String,
    /// Bit-chip row; element 0 is the least significant bit.
    pub chips: [bool; BIT_WINDOW as usize],
    pub pending: Option<Operator>,
    pub a: String,
    pub b: String,
}

impl Views {
    /// The shown value as written in `radix`.
    #[must_use]
    pub fn in_radix(&self, radix: Radix) -> &str {
        match radix {
            Radix::Binary => &self.binary,
            Radix::Octal => &self.octal,
            Radix::Decimal => &self.decimal,
            Radix::Hexadecimal => &self.hexadecimal,
        }
    }

    /// The shown value in the active base.
    #[must_use]
    pub fn current(&self) -> &str {
        self.in_radix(self.radix)
    }
}
