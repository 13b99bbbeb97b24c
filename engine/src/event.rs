//! Input events, and the mapping from keys to them.
use std::fmt::{self, Display, Formatter};

use base::prelude::*;

/// Something the user did to the calculator, whether by pressing a
/// key or clicking a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A digit or the sign character.
    Char(char),
    Operator(Operator),
    Backspace,
    Clear,
    Equals,
    /// Click on one of the 16 bit chips (0 is the least significant).
    ToggleBit(u32),
    SetRadix(Radix),
    /// Copy the displayed value to the clipboard.
    Copy,
    /// The user asked for the calculator to be dismissed.
    Close,
}

impl Display for InputEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            InputEvent::Char(ch) => write!(f, "key {ch:?}"),
            InputEvent::Operator(op) => write!(f, "operator {op}"),
            InputEvent::Backspace => f.write_str("backspace"),
            InputEvent::Clear => f.write_str("clear"),
            InputEvent::Equals => f.write_str("equals"),
            InputEvent::ToggleBit(i) => write!(f, "toggle bit {i}"),
            InputEvent::SetRadix(r) => write!(f, "switch to base {}", r.value()),
            InputEvent::Copy => f.write_str("copy"),
            InputEvent::Close => f.write_str("close"),
        }
    }
}

/// The identity of a key, as reported by the platform's keyboard
/// event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Escape,
    /// Function key F1, F2, ...
    Function(u8),
    /// The platform's copy shortcut (e.g. Ctrl+C).
    Copy,
}

/// Translates a key press into an input event.  Keys with no meaning
/// to the calculator give `None`.
///
/// Since `-` is the subtraction key, the sign character is typed
/// with `~`.  Hex letters may be typed in either case.  F5 to F8
/// select hexadecimal, decimal, octal and binary respectively.
#[must_use]
pub fn map_key(key: &Key) -> Option<InputEvent> {
    let event = match key {
        Key::Char(ch @ ('0'..='9' | 'A'..='F')) => InputEvent::Char(*ch),
        Key::Char(ch @ 'a'..='f') => InputEvent::Char(ch.to_ascii_uppercase()),
        Key::Char('~') => InputEvent::Char('-'),
        Key::Char('+') => InputEvent::Operator(Operator::Add),
        Key::Char('-') => InputEvent::Operator(Operator::Subtract),
        Key::Char('*') => InputEvent::Operator(Operator::Multiply),
        Key::Char('/') => InputEvent::Operator(Operator::Divide),
        Key::Char('&') => InputEvent::Operator(Operator::And),
        Key::Char('|') => InputEvent::Operator(Operator::Or),
        Key::Char('^') => InputEvent::Operator(Operator::Xor),
        Key::Char('<') => InputEvent::Operator(Operator::ShiftLeft),
        Key::Char('>') => InputEvent::Operator(Operator::ShiftRight),
        Key::Char('=') | Key::Enter => InputEvent::Equals,
        Key::Backspace => InputEvent::Backspace,
        Key::Delete => InputEvent::Clear,
        Key::Escape => InputEvent::Close,
        Key::Copy => InputEvent::Copy,
        Key::Function(5) => InputEvent::SetRadix(Radix::Hexadecimal),
        Key::Function(6) => InputEvent::SetRadix(Radix::Decimal),
        Key::Function(7) => InputEvent::SetRadix(Radix::Octal),
        Key::Function(8) => InputEvent::SetRadix(Radix::Binary),
        Key::Char(_) | Key::Function(_) => {
            return None;
        }
    };
    Some(event)
}

/// What the host should do after an event has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// The user asked to dismiss the calculator.  The host decides
    /// how to do that.
    Close,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(map_key(&Key::Char('7')), Some(InputEvent::Char('7')));
        assert_eq!(map_key(&Key::Char('C')), Some(InputEvent::Char('C')));
        assert_eq!(map_key(&Key::Char('c')), Some(InputEvent::Char('C')));
        assert_eq!(map_key(&Key::Char('g')), None);
        assert_eq!(map_key(&Key::Char('~')), Some(InputEvent::Char('-')));
    }

    #[test]
    fn test_operators() {
        for (ch, op) in [
            ('+', Operator::Add),
            ('-', Operator::Subtract),
            ('*', Operator::Multiply),
            ('/', Operator::Divide),
            ('&', Operator::And),
            ('|', Operator::Or),
            ('^', Operator::Xor),
            ('<', Operator::ShiftLeft),
            ('>', Operator::ShiftRight),
        ] {
            assert_eq!(map_key(&Key::Char(ch)), Some(InputEvent::Operator(op)));
        }
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(&Key::Enter), Some(InputEvent::Equals));
        assert_eq!(map_key(&Key::Char('=')), Some(InputEvent::Equals));
        assert_eq!(map_key(&Key::Backspace), Some(InputEvent::Backspace));
        assert_eq!(map_key(&Key::Delete), Some(InputEvent::Clear));
        assert_eq!(map_key(&Key::Escape), Some(InputEvent::Close));
        assert_eq!(map_key(&Key::Copy), Some(InputEvent::Copy));
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(
            map_key(&Key::Function(5)),
            Some(InputEvent::SetRadix(Radix::Hexadecimal))
        );
        assert_eq!(
            map_key(&Key::Function(8)),
            Some(InputEvent::SetRadix(Radix::Binary))
        );
        assert_eq!(map_key(&Key::Function(1)), None);
    }
}
