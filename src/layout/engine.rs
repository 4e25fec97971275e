//! TaffyTree wrapper for layout computation.
//!
//! [`LayoutEngine`] mirrors the visible part of the scene into a taffy tree,
//! runs flexbox layout against the viewport, and writes absolute regions back
//! to the scene.

use std::collections::{HashMap, HashSet};

use taffy::geometry::Size;
use taffy::prelude::FromLength;
use taffy::style::{AvailableSpace, Dimension};
use taffy::TaffyTree;

use crate::dom::NodeId;
use crate::geometry::{Offset, Region};
use crate::scene::Scene;
use crate::widget::traits::ChildVisibility;

/// Wraps a [`TaffyTree`] keyed by scene node.
pub struct LayoutEngine {
    /// Taffy nodes carry the scene node as context.
    tree: TaffyTree<NodeId>,
    node_map: HashMap<NodeId, taffy::NodeId>,
    root: Option<taffy::NodeId>,
}

impl LayoutEngine {
    /// Create a new, empty layout engine.
    pub fn new() -> Self {
        Self {
            tree: TaffyTree::new(),
            node_map: HashMap::new(),
            root: None,
        }
    }

    /// Full pass: stacked visibility, sync, compute, write regions.
    ///
    /// Returns the number of nodes that received a region.
    pub fn layout_scene(&mut self, scene: &mut Scene, viewport: (u16, u16)) -> usize {
        apply_child_visibility(scene);
        self.sync_tree(scene, viewport);
        self.compute(viewport.0 as f32, viewport.1 as f32);
        let placed = self.apply(scene);
        log::debug!(
            "layout pass over {}x{}: {} node(s) placed",
            viewport.0,
            viewport.1,
            placed
        );
        placed
    }

    /// Mirror the visible scene nodes into the taffy tree.
    ///
    /// Invisible nodes and their subtrees are left out. The root is sized to
    /// the viewport.
    pub fn sync_tree(&mut self, scene: &Scene, viewport: (u16, u16)) {
        let Some(scene_root) = scene.dom.root() else {
            self.clear();
            return;
        };

        let live_nodes = visible_nodes(scene, scene_root);
        let live_set: HashSet<NodeId> = live_nodes.iter().copied().collect();

        let stale: Vec<NodeId> = self
            .node_map
            .keys()
            .filter(|k| !live_set.contains(k))
            .copied()
            .collect();
        for key in stale {
            if let Some(taffy_id) = self.node_map.remove(&key) {
                let _ = self.tree.remove(taffy_id);
            }
        }

        for &id in &live_nodes {
            let Some(widget) = scene.widget(id) else {
                continue;
            };
            let mut style = widget.layout_style();
            if id == scene_root {
                style.size = Size {
                    width: Dimension::from_length(viewport.0 as f32),
                    height: Dimension::from_length(viewport.1 as f32),
                };
            }

            if let Some(&taffy_id) = self.node_map.get(&id) {
                let _ = self.tree.set_style(taffy_id, style);
            } else if let Ok(taffy_id) = self.tree.new_leaf_with_context(style, id) {
                self.node_map.insert(id, taffy_id);
            }
        }

        for &id in &live_nodes {
            let children: Vec<taffy::NodeId> = scene
                .dom
                .children(id)
                .iter()
                .filter_map(|child| self.node_map.get(child).copied())
                .collect();
            if let Some(&taffy_id) = self.node_map.get(&id) {
                let _ = self.tree.set_children(taffy_id, &children);
            }
        }

        self.root = self.node_map.get(&scene_root).copied();
    }

    /// Run taffy layout on the root node.
    pub fn compute(&mut self, available_width: f32, available_height: f32) {
        if let Some(root) = self.root {
            let _ = self.tree.compute_layout(
                root,
                Size {
                    width: AvailableSpace::Definite(available_width),
                    height: AvailableSpace::Definite(available_height),
                },
            );
        }
    }

    /// The layout of `node` relative to its parent.
    pub fn get_layout(&self, node: NodeId) -> Option<Region> {
        let taffy_id = self.node_map.get(&node)?;
        let layout = self.tree.layout(*taffy_id).ok()?;
        Some(Region {
            x: layout.location.x.round() as i32,
            y: layout.location.y.round() as i32,
            width: layout.size.width.round() as i32,
            height: layout.size.height.round() as i32,
        })
    }

    /// Replace every region in the scene with the absolute regions of the
    /// last computation. Returns how many were written.
    pub fn apply(&self, scene: &mut Scene) -> usize {
        scene.clear_regions();
        let Some(root) = scene.dom.root() else {
            return 0;
        };
        let mut placed = 0;
        let mut stack = vec![(root, Offset::ZERO)];
        while let Some((id, origin)) = stack.pop() {
            let Some(relative) = self.get_layout(id) else {
                continue;
            };
            let region = relative.translate(origin);
            scene.set_region(id, region);
            placed += 1;
            for &child in scene.dom.children(id).iter().rev() {
                stack.push((child, region.offset()));
            }
        }
        placed
    }

    /// Number of nodes in the taffy tree.
    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }

    fn clear(&mut self) {
        let keys: Vec<_> = self.node_map.drain().map(|(_, v)| v).collect();
        for taffy_id in keys {
            let _ = self.tree.remove(taffy_id);
        }
        self.root = None;
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Show only the stack top of every stacked container, top-down.
pub fn apply_child_visibility(scene: &mut Scene) {
    let Some(root) = scene.dom.root() else {
        return;
    };
    for id in scene.dom.walk_depth_first(root) {
        let Some(ChildVisibility::Stacked(top)) = scene.widget(id).map(|w| w.child_visibility())
        else {
            continue;
        };
        let children = scene.dom.children(id).to_vec();
        for (i, child) in children.into_iter().enumerate() {
            scene.set_visible_tree(child, top == Some(i));
        }
    }
}

/// Pre-order walk from `start` that skips invisible subtrees.
fn visible_nodes(scene: &Scene, start: NodeId) -> Vec<NodeId> {
    let mut result = Vec::new();
    let mut stack = vec![start];
    while let Some(id) = stack.pop() {
        if !scene.is_visible(id) {
            continue;
        }
        result.push(id);
        stack.extend(scene.dom.children(id).iter().rev().copied());
    }
    result
}
