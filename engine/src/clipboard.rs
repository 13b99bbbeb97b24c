//! The clipboard capability supplied by the host.
//!
//! Copying is best-effort.  A failed write is logged and otherwise
//! ignored; it never changes calculator state and is never reported
//! to the user.
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use tracing::{event, Level};

#[derive(Debug)]
pub enum ClipboardError {
    /// The host has no clipboard to offer.
    Unavailable,
    Io(std::io::Error),
}

impl Display for ClipboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ClipboardError::Unavailable => f.write_str("no clipboard is available"),
            ClipboardError::Io(e) => write!(f, "clipboard write failed: {e}"),
        }
    }
}

impl Error for ClipboardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClipboardError::Unavailable => None,
            ClipboardError::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ClipboardError {
    fn from(e: std::io::Error) -> ClipboardError {
        ClipboardError::Io(e)
    }
}

pub trait Clipboard {
    /// Places `text` on the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A clipboard for hosts which don't have one.  Every write fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

/// Writes `text` to `clipboard`, logging (and otherwise ignoring) any
/// failure.  Returns whether the write succeeded.
pub fn copy_best_effort<C: Clipboard + ?Sized>(clipboard: &mut C, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => {
            event!(Level::DEBUG, "copied {text:?} to the clipboard");
            true
        }
        Err(e) => {
            event!(Level::WARN, "could not copy {text:?}: {e}");
            false
        }
    }
}
