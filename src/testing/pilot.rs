//! Pilot: programmatic interaction with a headless screen.
//!
//! The `Pilot` owns a [`Screen`] and simulates what a terminal host would
//! do: deliver mouse clicks and resizes, then run an update so the frame
//! reflects the result.

use crate::dom::NodeId;
use crate::event::input::{InputEvent, MouseEvent};
use crate::geometry::Region;
use crate::scene::Scene;
use crate::screen::Screen;

use super::snapshot::compositor_to_string;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless screen driver for testing.
///
/// # Examples
///
/// ```ignore
/// use gilt_tabs::testing::Pilot;
///
/// let mut pilot = Pilot::new(40, 10);
/// let root = pilot.scene_mut().create_root(Frame::vertical(), "root");
/// pilot.update();
/// pilot.click(1, 0);
/// ```
pub struct Pilot {
    screen: Screen,
}

impl Pilot {
    /// Create a headless screen with the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            screen: Screen::new(width, height),
        }
    }

    /// Wrap an existing screen.
    pub fn with_screen(screen: Screen) -> Self {
        Self { screen }
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Left-click at (x, y), then update. Returns whether an action ran.
    pub fn click(&mut self, x: u16, y: u16) -> bool {
        let handled = self
            .screen
            .handle_input(InputEvent::Mouse(MouseEvent::left_click(x, y)));
        self.update();
        handled
    }

    /// Click the center cell of `node`'s current region.
    pub fn click_node(&mut self, node: NodeId) -> bool {
        match self.screen.scene.region(node) {
            Some(Region { x, y, width, height }) if width > 0 && height > 0 => {
                self.click((x + width / 2) as u16, (y + height / 2) as u16)
            }
            _ => false,
        }
    }

    /// Resize the terminal, then update.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.screen.handle_input(InputEvent::Resize { width, height });
        self.update();
    }

    // ── Processing ───────────────────────────────────────────────────

    /// Run one screen update (layout if needed, then paint).
    pub fn update(&mut self) {
        self.screen.update();
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn scene(&self) -> &Scene {
        &self.screen.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.screen.scene
    }

    /// The current frame as text.
    pub fn text(&self) -> String {
        compositor_to_string(&self.screen.compositor)
    }

    /// Row `y` of the current frame.
    pub fn row(&self, y: u16) -> String {
        self.screen.compositor.row_text(y)
    }

    /// Position of the first occurrence of `needle` in the frame.
    pub fn find_text(&self, needle: &str) -> Option<(u16, u16)> {
        (0..self.screen.compositor.height).find_map(|y| {
            let row: Vec<char> = self.row(y).chars().collect();
            let needle: Vec<char> = needle.chars().collect();
            if needle.is_empty() || needle.len() > row.len() {
                return None;
            }
            row.windows(needle.len())
                .position(|w| w == needle.as_slice())
                .map(|x| (x as u16, y))
        })
    }
}

// ===========================================================================
// Tests
// ===========================================================================
