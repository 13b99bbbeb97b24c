//! This crate implements the calculator itself: the operand
//! registers, the operator-chaining state machine, and the
//! interfaces through which a host feeds it keys, gives it a
//! clipboard and learns when to dismiss it.
#![crate_name = "engine"]
#![deny(unreachable_pub)]
#![deny(unsafe_code)]

mod calculator;
mod clipboard;
mod event;
mod keyboard;
mod register;
mod session;
mod views;

pub use calculator::{Calculator, ChainState};
pub use clipboard::{copy_best_effort, Clipboard, ClipboardError, NoClipboard};
pub use event::{map_key, Control, InputEvent, Key};
pub use keyboard::{KeyboardSource, KeyboardSubscription, ListenerId};
pub use register::{Register, RegisterId};
pub use session::Session;
pub use views::Views;
