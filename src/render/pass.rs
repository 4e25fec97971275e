//! Render pass: walk the scene and paint widgets into the compositor.
//!
//! Each node pushes its region onto a clip stack, intersected with its
//! parent's clip. A node whose clip is empty (or that has no region) stops
//! receiving input events and is skipped with its subtree; every other node
//! is painted, then its children, then its overlay, and receives events.

use crate::dom::NodeId;
use crate::geometry::Region;
use crate::render::compositor::Compositor;
use crate::scene::Scene;

/// Counts from one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub painted: usize,
    pub skipped: usize,
}

/// A single paint of a subtree.
pub struct RenderPass<'a> {
    scene: &'a mut Scene,
    compositor: &'a mut Compositor,
    clip: Vec<Region>,
    stats: RenderStats,
}

impl<'a> RenderPass<'a> {
    pub fn new(scene: &'a mut Scene, compositor: &'a mut Compositor) -> Self {
        let bounds = compositor.bounds();
        Self {
            scene,
            compositor,
            clip: vec![bounds],
            stats: RenderStats::default(),
        }
    }

    /// Paint `start` and its subtree.
    pub fn run(mut self, start: NodeId) -> RenderStats {
        self.render_node(start);
        self.stats
    }

    fn current_clip(&self) -> Region {
        self.clip.last().copied().unwrap_or(Region::EMPTY)
    }

    /// Push the clip for `region`. Returns `false` when nothing would show.
    fn push_bounds(&mut self, region: Region) -> bool {
        let clip = self.current_clip().intersection(region);
        if clip.is_empty() {
            return false;
        }
        self.clip.push(clip);
        true
    }

    fn pop_bounds(&mut self) {
        self.clip.pop();
    }

    fn render_node(&mut self, id: NodeId) {
        if !self.scene.is_visible(id) {
            self.scene.disconnect_tree_events(id);
            self.stats.skipped += 1;
            return;
        }
        let bounded = match self.scene.region(id) {
            Some(region) => self.push_bounds(region).then_some(region),
            None => None,
        };
        let Some(region) = bounded else {
            self.scene.disconnect_tree_events(id);
            self.stats.skipped += 1;
            return;
        };

        self.scene.connect_events(id);
        let clip = self.current_clip();
        if let Some(widget) = self.scene.widget(id) {
            let strips = widget.render(region, &self.scene.theme);
            self.compositor.place_strips(&strips, clip);
        }
        self.stats.painted += 1;

        let children = self.scene.dom.children(id).to_vec();
        for child in children {
            self.render_node(child);
        }

        if let Some(widget) = self.scene.widget(id) {
            let strips = widget.render_overlay(self.scene, id);
            self.compositor.place_strips(&strips, clip);
        }
        self.pop_bounds();
    }
}

/// Clear the compositor and paint the whole scene.
pub fn render_scene(scene: &mut Scene, compositor: &mut Compositor) -> RenderStats {
    compositor.fill(scene.theme.content.clone());
    match scene.dom.root() {
        Some(root) => RenderPass::new(scene, compositor).run(root),
        None => RenderStats::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutEngine;
    use crate::widgets::{Frame, Label};

    fn laid_out(width: u16, height: u16) -> (Scene, NodeId, NodeId) {
        let mut scene = Scene::new();
        let root = scene.create_root(Frame::vertical(), "root");
        let label = scene.add_child(root, Label::new("hello"), "hello");
        LayoutEngine::new().layout_scene(&mut scene, (width, height));
        (scene, root, label)
    }

    #[test]
    fn paints_and_connects() {
        let (mut scene, root, label) = laid_out(10, 2);
        let mut compositor = Compositor::new(10, 2);
        let stats = render_scene(&mut scene, &mut compositor);
        assert_eq!(stats, RenderStats { painted: 2, skipped: 0 });
        assert_eq!(compositor.row_text(0), "hello");
        assert!(scene.events_connected(root));
        assert!(scene.events_connected(label));
    }

    #[test]
    fn offscreen_node_is_disconnected() {
        let (mut scene, _root, label) = laid_out(10, 2);
        scene.connect_events(label);
        scene.set_region(label, Region::new(50, 50, 3, 1));
        let mut compositor = Compositor::new(10, 2);
        let stats = render_scene(&mut scene, &mut compositor);
        assert_eq!(stats.skipped, 1);
        assert!(!scene.events_connected(label));
        assert_eq!(compositor.row_text(0), "");
    }

    #[test]
    fn hidden_subtree_is_disconnected() {
        let (mut scene, _root, label) = laid_out(10, 2);
        scene.connect_events(label);
        scene.set_invisible_tree(label);
        let mut compositor = Compositor::new(10, 2);
        render_scene(&mut scene, &mut compositor);
        assert!(!scene.events_connected(label));
    }

    #[test]
    fn child_clipped_to_parent() {
        let (mut scene, root, label) = laid_out(10, 2);
        scene.set_region(root, Region::new(0, 0, 3, 2));
        let mut compositor = Compositor::new(10, 2);
        render_scene(&mut scene, &mut compositor);
        assert_eq!(compositor.row_text(0), "hel");
        assert!(scene.events_connected(label));
    }
}
