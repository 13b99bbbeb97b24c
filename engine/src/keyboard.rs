//! Subscription to the host's process-wide keyboard event source.
//!
//! The calculator listens to the keyboard only while it is visible.
//! [`KeyboardSubscription`] ties the subscription to a scope: it is
//! taken out when the guard is created and given back exactly once,
//! either by [`KeyboardSubscription::release`] or when the guard is
//! dropped (including during unwinding).
use std::fmt::{self, Display, Formatter};

use tracing::{event, Level};

/// Identifies one subscription with a [`KeyboardSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

impl Display for ListenerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "listener#{}", self.0)
    }
}

/// A source of key-down events.  Implementations are supplied by the
/// host.  Everything happens on one thread, so the methods take
/// `&self`; implementations needing to record state use interior
/// mutability.
pub trait KeyboardSource {
    fn subscribe(&self) -> ListenerId;
    fn unsubscribe(&self, id: ListenerId);
}

/// A live keyboard subscription.
#[must_use]
pub struct KeyboardSubscription<'k> {
    source: &'k dyn KeyboardSource,
    id: ListenerId,
    active: bool,
}

impl<'k> KeyboardSubscription<'k> {
    pub fn acquire(source: &'k dyn KeyboardSource) -> KeyboardSubscription<'k> {
        let id = source.subscribe();
        event!(Level::INFO, "keyboard {id} subscribed");
        KeyboardSubscription {
            source,
            id,
            active: true,
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Gives the subscription back now rather than at end of scope.
    pub fn release(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if self.active {
            self.active = false;
            self.source.unsubscribe(self.id);
            event!(Level::INFO, "keyboard {} released", self.id);
        }
    }
}

impl Drop for KeyboardSubscription<'_> {
    fn drop(&mut self) {
        self.release_once();
    }
}

impl fmt::Debug for KeyboardSubscription<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardSubscription")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}
