//! Reading calculator keystrokes from lines of text.
//!
//! Each whitespace-separated word is either a named key, written
//! with a leading `:` (for example `:enter` or `:bit3`), or a run of
//! ordinary characters, each of which is one key press.  The colon
//! keeps names like `:dec` apart from the hex digits `D`, `E`, `C`.
//! Operator buttons are named by their text, as in `:xor` or `:shl`.
use std::cell::Cell;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use tracing::{event, Level};

use base::prelude::*;
use engine::{InputEvent, Key, KeyboardSource, ListenerId};

/// One thing typed on the input stream.  Bit-chip clicks have no key,
/// so they are carried as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Key(Key),
    Click(InputEvent),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKeyName(pub String);

impl Display for UnknownKeyName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "unknown key name ':{}'", self.0)
    }
}

impl Error for UnknownKeyName {}

fn named_stroke(name: &str) -> Result<Stroke, UnknownKeyName> {
    let lower = name.to_ascii_lowercase();
    let key = match lower.as_str() {
        "esc" | "escape" => Key::Escape,
        "bs" | "backspace" => Key::Backspace,
        "del" | "delete" => Key::Delete,
        "enter" | "ret" => Key::Enter,
        "copy" => Key::Copy,
        "hex" => Key::Function(5),
        "dec" => Key::Function(6),
        "oct" => Key::Function(7),
        "bin" => Key::Function(8),
        other => {
            if let Some(n) = other.strip_prefix("bit") {
                return n
                    .parse::<u32>()
                    .map(|index| Stroke::Click(InputEvent::ToggleBit(index)))
                    .map_err(|_| UnknownKeyName(name.to_string()));
            }
            if let Ok(op) = other.parse::<Operator>() {
                return Ok(Stroke::Click(InputEvent::Operator(op)));
            }
            match other.strip_prefix('f').map(str::parse::<u8>) {
                Some(Ok(n)) => Key::Function(n),
                _ => {
                    return Err(UnknownKeyName(name.to_string()));
                }
            }
        }
    };
    Ok(Stroke::Key(key))
}

/// Splits one line of input into strokes.  Unknown key names are
/// logged and skipped; the rest of the line is still used.
pub fn tokenize(line: &str) -> Vec<Stroke> {
    let mut strokes = Vec::new();
    for word in line.split_whitespace() {
        match word.strip_prefix(':') {
            Some(name) if !name.is_empty() => match named_stroke(name) {
                Ok(stroke) => strokes.push(stroke),
                Err(e) => {
                    event!(Level::WARN, "{e}");
                }
            },
            _ => strokes.extend(word.chars().map(|ch| Stroke::Key(Key::Char(ch)))),
        }
    }
    strokes
}

/// The keyboard of a line-oriented terminal.  It only keeps track of
/// who is listening; the main loop does the reading.
#[derive(Debug, Default)]
pub struct StdinKeyboard {
    issued: Cell<u64>,
    listening: Cell<u32>,
}

impl StdinKeyboard {
    pub fn listeners(&self) -> u32 {
        self.listening.get()
    }
}

impl KeyboardSource for StdinKeyboard {
    fn subscribe(&self) -> ListenerId {
        let id = self.issued.get() + 1;
        self.issued.set(id);
        self.listening.set(self.listening.get() + 1);
        ListenerId(id)
    }

    fn unsubscribe(&self, id: ListenerId) {
        match self.listening.get().checked_sub(1) {
            Some(n) => self.listening.set(n),
            None => {
                event!(Level::ERROR, "{id} released but nobody was listening");
            }
        }
    }
}
