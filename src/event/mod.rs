//! Event system: input events, per-node action handlers, typed signals.

pub mod action;
pub mod input;
pub mod signal;

pub use action::{ActionHandler, ActionSlots};
pub use input::{InputEvent, MouseAction, MouseBtn, MouseEvent};
pub use signal::{ConnectionId, Signal, TabViewEvent, TabViewSignal};
