//! Change notifications for the host UI.
//!
//! Handlers run synchronously, in subscription order, right after the
//! operation that caused the event has finished. A handler receives the
//! event only; it reads fresh state from the store on its next render.

use std::fmt;
use uuid::Uuid;

/// What changed in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// A new document replaced the previous one
    PresentationLoaded,
    /// Slides or their elements changed and a snapshot was recorded
    SlidesChanged,
    /// The selected slide or the element selection changed
    SelectionChanged,
    /// Clipboard contents were replaced
    ClipboardChanged,
    /// Undo or redo restored the snapshot at `index`
    HistoryRestored { index: usize },
}

impl fmt::Display for StoreEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreEvent::PresentationLoaded => write!(f, "Presentation loaded"),
            StoreEvent::SlidesChanged => write!(f, "Slides changed"),
            StoreEvent::SelectionChanged => write!(f, "Selection changed"),
            StoreEvent::ClipboardChanged => write!(f, "Clipboard changed"),
            StoreEvent::HistoryRestored { index } => write!(f, "History restored to {}", index),
        }
    }
}

/// Subscription handle for unsubscribing from store events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Type alias for store event handlers
pub type StoreListener = Box<dyn Fn(&StoreEvent)>;

/// Registered handlers, in subscription order
#[derive(Default)]
pub(crate) struct Subscribers {
    handlers: Vec<(SubscriptionId, StoreListener)>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self, handler: StoreListener) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.handlers.push((id, handler));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub, _)| *sub != id);
        self.handlers.len() != before
    }

    pub(crate) fn emit(&self, event: StoreEvent) {
        for (_, handler) in &self.handlers {
            handler(&event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.handlers.len()
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.handlers.len())
            .finish()
    }
}
