//! Typed publish/subscribe signals and the tab view's signal set.
//!
//! A [`Signal<T>`] keeps any number of listeners; every [`emit`](Signal::emit)
//! reaches all of them. Listeners receive the payload only, so they cannot
//! re-enter the scene that emitted it.

use std::fmt;

use slotmap::{new_key_type, SlotMap};

use crate::dom::NodeId;

new_key_type! {
    /// Handle returned by [`Signal::connect`], used to disconnect.
    pub struct ConnectionId;
}

type Listener<T> = Box<dyn FnMut(&T)>;

// ---------------------------------------------------------------------------
// Signal
// ---------------------------------------------------------------------------

/// A multi-listener signal carrying payloads of type `T`.
pub struct Signal<T> {
    listeners: SlotMap<ConnectionId, Listener<T>>,
}

impl<T> Signal<T> {
    /// A signal with no listeners.
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
        }
    }

    /// Add a listener.
    pub fn connect<F>(&mut self, listener: F) -> ConnectionId
    where
        F: FnMut(&T) + 'static,
    {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn disconnect(&mut self, id: ConnectionId) -> bool {
        self.listeners.remove(id).is_some()
    }

    /// Remove every listener.
    pub fn disconnect_all(&mut self) {
        self.listeners.clear();
    }

    /// Deliver `value` to every listener. Returns how many were called.
    pub fn emit(&mut self, value: &T) -> usize {
        let mut delivered = 0;
        for listener in self.listeners.values_mut() {
            listener(value);
            delivered += 1;
        }
        delivered
    }

    /// Number of connected listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is connected.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// TabViewSignal
// ---------------------------------------------------------------------------

/// Signals a tab view emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabViewSignal {
    /// A tab was selected through the action entry point.
    TabSelected,
    /// A tab was created through the action entry point.
    TabAdded,
    /// A tab was closed through its close control.
    TabDeleted,
}

impl TabViewSignal {
    /// Every signal, in declaration order.
    pub const ALL: [TabViewSignal; 3] = [
        TabViewSignal::TabSelected,
        TabViewSignal::TabAdded,
        TabViewSignal::TabDeleted,
    ];

    /// The signal name.
    pub fn name(self) -> &'static str {
        match self {
            TabViewSignal::TabSelected => "TabSelected",
            TabViewSignal::TabAdded => "TabAdded",
            TabViewSignal::TabDeleted => "TabDeleted",
        }
    }
}

impl fmt::Display for TabViewSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload of a tab view signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabViewEvent {
    /// The tab view that emitted.
    pub sender: NodeId,
    pub signal: TabViewSignal,
    /// Selected, added, or former index of the tab.
    pub index: usize,
}
