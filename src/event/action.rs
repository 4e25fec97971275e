//! Per-node action handlers.
//!
//! An interactive node (a tab button, its close control, the "+" button) has
//! at most one handler. Connecting replaces whatever was there. Handlers get
//! `&mut Scene`, so the scene takes a handler out of its slot while it runs
//! and puts it back afterwards only if the slot is still wanted.

use slotmap::SecondaryMap;

use crate::dom::NodeId;
use crate::scene::Scene;

/// Handler run when a node's action fires. Receives the scene and the sender.
pub type ActionHandler = Box<dyn FnMut(&mut Scene, NodeId)>;

/// The action handler slot of every interactive node.
#[derive(Default)]
pub struct ActionSlots {
    /// `None` while the handler is out running.
    slots: SecondaryMap<NodeId, Option<ActionHandler>>,
}

impl ActionSlots {
    /// No handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the handler for `node`, replacing any previous one.
    pub fn connect(&mut self, node: NodeId, handler: ActionHandler) {
        self.slots.insert(node, Some(handler));
    }

    /// Drop the handler for `node`. Returns whether one was connected.
    pub fn disconnect(&mut self, node: NodeId) -> bool {
        self.slots.remove(node).is_some()
    }

    /// Whether `node` has a handler (including one that is currently running).
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.slots.contains_key(node)
    }

    /// Take the handler out to run it. The slot stays reserved.
    pub(crate) fn take(&mut self, node: NodeId) -> Option<ActionHandler> {
        self.slots.get_mut(node).and_then(Option::take)
    }

    /// Put a handler back after it ran.
    ///
    /// Dropped if the slot was disconnected or refilled in the meantime.
    pub(crate) fn restore(&mut self, node: NodeId, handler: ActionHandler) {
        if let Some(slot) = self.slots.get_mut(node) {
            if slot.is_none() {
                *slot = Some(handler);
            }
        }
    }
}
