//! Headless testing helpers: Pilot, snapshot rendering.
//!
//! Use the [`Pilot`] to drive a [`Screen`](crate::screen::Screen) without a
//! terminal. Use [`render_to_string`] and friends to capture output as plain
//! text for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::{compositor_to_string, render_to_string, strips_to_string};
