//! The calculator state: two operand registers, the active base, and
//! the operator-chaining state machine.
//!
//! Evaluation is immediate, in the style of a four-function
//! calculator: pressing a second operator when a right operand has
//! been typed evaluates the pending operation first, so `5 + 3 * 2 =`
//! gives 16, not 11.
use std::fmt::{self, Display, Formatter};

use tracing::{event, Level};

use base::prelude::*;

use super::register::{Register, RegisterId};
use super::views::Views;

#[cfg(test)]
mod tests;

/// The state of the operator-chaining machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainState {
    /// No operator is pending; typing edits register A.
    Idle,
    /// An operator is staged and typing edits register B.
    PendingOp(Operator),
}

impl Display for ChainState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ChainState::Idle => f.write_str("idle"),
            ChainState::PendingOp(op) => write!(f, "pending {op}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Calculator {
    a: Register,
    b: Register,
    radix: Radix,
    pending: Option<Operator>,
    editing: RegisterId,
}

impl Default for Calculator {
    fn default() -> Calculator {
        Calculator::new(Radix::default())
    }
}

impl Calculator {
    #[must_use]
    pub fn new(radix: Radix) -> Calculator {
        Calculator {
            a: Register::new(RegisterId::A),
            b: Register::new(RegisterId::B),
            radix,
            pending: None,
            editing: RegisterId::A,
        }
    }

    #[must_use]
    pub fn register(&self, id: RegisterId) -> &Register {
        match id {
            RegisterId::A => &self.a,
            RegisterId::B => &self.b,
        }
    }

    fn register_mut(&mut self, id: RegisterId) -> &mut Register {
        match id {
            RegisterId::A => &mut self.a,
            RegisterId::B => &mut self.b,
        }
    }

    #[must_use]
    pub fn radix(&self) -> Radix {
        self.radix
    }

    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    #[must_use]
    pub fn editing_target(&self) -> RegisterId {
        self.editing
    }

    #[must_use]
    pub fn state(&self) -> ChainState {
        match self.pending {
            None => ChainState::Idle,
            Some(op) => ChainState::PendingOp(op),
        }
    }

    /// The value of a register, read in the active base.
    #[must_use]
    pub fn value(&self, id: RegisterId) -> BigInt {
        self.register(id).value(self.radix)
    }

    /// Appends `ch` to register `target`, if `ch` is an acceptable
    /// keystroke in the active base.  Returns whether the keystroke
    /// was accepted.
    pub fn append(&mut self, target: RegisterId, ch: char) -> bool {
        if !allowed(ch, self.radix) {
            event!(
                Level::DEBUG,
                "ignoring keystroke {ch:?}, which is not valid in base {}",
                self.radix.value()
            );
            return false;
        }
        let register = self.register_mut(target);
        register.push(ch);
        event!(
            Level::TRACE,
            "register {target} is now {:?}",
            register.text()
        );
        true
    }

    /// Appends `ch` to the register being edited.
    pub fn type_char(&mut self, ch: char) -> bool {
        self.append(self.editing, ch)
    }

    /// Deletes the last character of register `target`.
    pub fn backspace(&mut self, target: RegisterId) {
        let register = self.register_mut(target);
        register.pop();
        event!(
            Level::TRACE,
            "register {target} is now {:?}",
            register.text()
        );
    }

    /// Deletes the last character of the register being edited.
    pub fn erase(&mut self) {
        self.backspace(self.editing);
    }

    /// Returns to the initial state (keeping the active base).
    pub fn clear_all(&mut self) {
        self.a.clear();
        self.b.clear();
        self.pending = None;
        self.editing = RegisterId::A;
        event!(Level::DEBUG, "cleared");
    }

    /// Applies the pending operator to A and B, leaving the result in
    /// A and clearing B.
    fn evaluate_pending(&mut self, op: Operator) {
        let left = self.value(RegisterId::A);
        let right = self.value(RegisterId::B);
        let result = apply(op, &left, &right);
        event!(Level::DEBUG, "evaluated {left} {op} {right} = {result}");
        self.a.set_text(format(&result, self.radix));
        self.b.clear();
    }

    /// Handles an operator key.
    ///
    /// With no operator pending, `op` becomes pending and input moves
    /// to register B.  With an operator already pending, `op`
    /// replaces it if B is still empty; otherwise the pending
    /// operation is evaluated first and `op` is staged to act on its
    /// result.
    pub fn press_operator(&mut self, op: Operator) {
        match self.pending {
            Some(previous) if !self.b.is_empty() => {
                self.evaluate_pending(previous);
            }
            Some(previous) => {
                event!(Level::DEBUG, "replacing pending operator {previous} with {op}");
            }
            None => {
                self.b.clear();
            }
        }
        self.pending = Some(op);
        self.editing = RegisterId::B;
    }

    /// Handles the equals key.  This does nothing unless an operator
    /// is pending and a right operand has been typed.
    pub fn press_equals(&mut self) {
        match self.pending {
            Some(op) if !self.b.is_empty() => {
                self.evaluate_pending(op);
                self.pending = None;
                self.editing = RegisterId::A;
            }
            Some(op) => {
                event!(Level::DEBUG, "ignoring '=': {op} has no right operand yet");
            }
            None => {
                event!(Level::DEBUG, "ignoring '=': no operator is pending");
            }
        }
    }

    /// Inverts bit `index` (counting from 0, the least significant
    /// bit) of register A.  Bits outside the 16-bit chip row cannot
    /// be addressed, but are preserved.
    pub fn toggle_bit(&mut self, index: u32) -> Result<(), BitIndexOutOfRange> {
        let toggled = base::toggle_bit(&self.value(RegisterId::A), index)?;
        self.a.set_text(format(&toggled, self.radix));
        event!(Level::TRACE, "toggled bit {index}, A is now {:?}", self.a.text());
        Ok(())
    }

    /// Changes the base used to read and write register text.  The
    /// text already in the registers is kept as it is, so a register
    /// holding `"10"` reads as sixteen after switching from decimal
    /// to hexadecimal.
    pub fn set_radix(&mut self, radix: Radix) {
        if radix != self.radix {
            event!(Level::DEBUG, "switching from {} to {}", self.radix, radix);
        }
        self.radix = radix;
    }

    /// The register the display shows: B while it is being edited
    /// and has some text in it, otherwise A.
    #[must_use]
    pub fn displayed_register(&self) -> RegisterId {
        match self.editing {
            RegisterId::B if !self.b.is_empty() => RegisterId::B,
            _ => RegisterId::A,
        }
    }

    /// The value of the register the display shows.
    #[must_use]
    pub fn displayed_value(&self) -> BigInt {
        self.value(self.displayed_register())
    }

    /// The displayed value formatted in the active base, as given to
    /// the clipboard.
    #[must_use]
    pub fn displayed_text(&self) -> String {
        format(&self.displayed_value(), self.radix)
    }

    #[must_use]
    pub fn views(&self) -> Views {
        let shown = self.displayed_register();
        let value = self.value(shown);
        Views {
            radix: self.radix,
            shown,
            binary: format(&value, Radix::Binary),
            octal: format(&value, Radix::Octal),
            decimal: format(&value, Radix::Decimal),
            hexadecimal: format(&value, Radix::Hexadecimal),
            chips: chip_row(&value),
            pending: self.pending,
            a: self.a.text().to_string(),
            b: self.b.text().to_string(),
        }
    }
}
