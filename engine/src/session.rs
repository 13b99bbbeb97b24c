//! A calculator as mounted by a host: the calculator state, the
//! host's clipboard, and the keyboard subscription held for as long
//! as the calculator is open.
use tracing::{event, Level};

use base::prelude::*;

use super::calculator::Calculator;
use super::clipboard::{copy_best_effort, Clipboard};
use super::event::{map_key, Control, InputEvent, Key};
use super::keyboard::{KeyboardSource, KeyboardSubscription};
use super::views::Views;

#[derive(Debug)]
pub struct Session<'k, C: Clipboard> {
    calculator: Calculator,
    clipboard: C,
    keyboard: KeyboardSubscription<'k>,
}

impl<'k, C: Clipboard> Session<'k, C> {
    /// Opens the calculator: subscribes to `keyboard`, and starts
    /// from a cleared state in base `radix`.
    pub fn open(keyboard: &'k dyn KeyboardSource, clipboard: C, radix: Radix) -> Session<'k, C> {
        let keyboard = KeyboardSubscription::acquire(keyboard);
        event!(Level::DEBUG, "calculator opened in base {}", radix.value());
        Session {
            calculator: Calculator::new(radix),
            clipboard,
            keyboard,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn views(&self) -> Views {
        self.calculator.views()
    }

    /// Handles a key from the keyboard subscription.  Keys which mean
    /// nothing to the calculator are ignored.
    pub fn handle_key(&mut self, key: &Key) -> Control {
        match map_key(key) {
            Some(ev) => self.handle_event(ev),
            None => {
                event!(Level::TRACE, "ignoring unmapped key {key:?}");
                Control::Continue
            }
        }
    }

    /// Handles one input event.  Returns [`Control::Close`] when the
    /// user has asked for the calculator to be dismissed; the session
    /// is still usable until the host drops or closes it.
    pub fn handle_event(&mut self, ev: InputEvent) -> Control {
        event!(Level::TRACE, "handling {ev} in state {}", self.calculator.state());
        match ev {
            InputEvent::Char(ch) => {
                self.calculator.type_char(ch);
            }
            InputEvent::Operator(op) => self.calculator.press_operator(op),
            InputEvent::Backspace => self.calculator.erase(),
            InputEvent::Clear => self.calculator.clear_all(),
            InputEvent::Equals => self.calculator.press_equals(),
            InputEvent::ToggleBit(index) => {
                if let Err(e) = self.calculator.toggle_bit(index) {
                    event!(Level::DEBUG, "ignoring bit chip click: {e}");
                }
            }
            InputEvent::SetRadix(radix) => self.calculator.set_radix(radix),
            InputEvent::Copy => {
                let text = self.calculator.displayed_text();
                copy_best_effort(&mut self.clipboard, &text);
            }
            InputEvent::Close => {
                event!(Level::DEBUG, "close requested");
                return Control::Close;
            }
        }
        Control::Continue
    }

    /// Dismisses the calculator, giving back the keyboard
    /// subscription.  The calculator state is discarded; the
    /// clipboard is handed back to the host.
    pub fn close(self) -> C {
        let Session {
            calculator: _,
            clipboard,
            keyboard,
        } = self;
        keyboard.release();
        event!(Level::DEBUG, "calculator closed");
        clipboard
    }
}
