//! Screen: scene, layout, compositor, and input routing for one viewport.
//!
//! [`Screen`] is the loop body a host drives: feed it input with
//! [`Screen::handle_input`], then call [`Screen::update`] to turn the render
//! requests queued by scene mutations into a fresh frame.

use crate::event::input::InputEvent;
use crate::geometry::Offset;
use crate::layout::{LayoutEngine, SpatialMap};
use crate::render::compositor::Compositor;
use crate::render::pass::{render_scene, RenderStats};
use crate::scene::Scene;

/// A single screen: scene graph, layout, frame buffer, hit testing.
pub struct Screen {
    /// The scene graph.
    pub scene: Scene,
    /// Taffy-based layout engine.
    pub layout: LayoutEngine,
    /// Frame buffer.
    pub compositor: Compositor,
    spatial: SpatialMap,
    needs_layout: bool,
}

impl Screen {
    /// Create an empty screen with the given viewport dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_scene(Scene::new(), width, height)
    }

    /// Create a screen around an existing scene.
    pub fn with_scene(scene: Scene, width: u16, height: u16) -> Self {
        Self {
            scene,
            layout: LayoutEngine::new(),
            compositor: Compositor::new(width, height),
            spatial: SpatialMap::new(),
            needs_layout: true,
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.compositor.width, self.compositor.height)
    }

    /// Resize the viewport. The next update re-runs layout.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.compositor.resize(width, height);
        self.needs_layout = true;
        log::debug!("screen resized to {width}x{height}");
    }

    /// Drain pending render requests and produce a new frame.
    ///
    /// A full re-render request (or a resize) re-runs layout first. Returns
    /// `None` when nothing was pending.
    pub fn update(&mut self) -> Option<RenderStats> {
        let requests = self.scene.updates.take_pending();
        if requests.is_empty() && !self.needs_layout {
            return None;
        }
        if self.needs_layout || requests.iter().any(|r| r.needs_layout()) {
            self.relayout();
        }
        let stats = render_scene(&mut self.scene, &mut self.compositor);
        log::trace!(
            "frame: {} request(s), {} painted, {} skipped",
            requests.len(),
            stats.painted,
            stats.skipped
        );
        Some(stats)
    }

    /// Re-run layout now and rebuild the hit-test map.
    pub fn relayout(&mut self) {
        let viewport = self.size();
        self.layout.layout_scene(&mut self.scene, viewport);
        self.spatial.rebuild(&self.scene);
        self.needs_layout = false;
    }

    /// Deliver a click at (x, y) to the frontmost node that has an action
    /// and is receiving events. Returns whether an action ran.
    pub fn click(&mut self, x: u16, y: u16) -> bool {
        let point = Offset::new(x as i32, y as i32);
        let target = self.spatial.hit_test(point).into_iter().find(|&id| {
            self.scene.actions.is_connected(id) && self.scene.events_connected(id)
        });
        match target {
            Some(id) => {
                log::trace!("click at ({x}, {y}) -> {id:?}");
                self.scene.trigger_action(id)
            }
            None => false,
        }
    }

    /// Handle one input event. Returns whether it changed anything.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Mouse(me) if me.is_left_click() => self.click(me.x, me.y),
            InputEvent::Mouse(_) => false,
            InputEvent::Resize { width, height } => {
                self.resize(width, height);
                true
            }
        }
    }
}
