//! Spatial map for hit testing.
//!
//! [`SpatialMap`] keeps `(NodeId, Region)` pairs in painter's order: later
//! entries are drawn over earlier ones, so a point query walks from the back.

use crate::dom::NodeId;
use crate::geometry::{Offset, Region};
use crate::scene::Scene;

/// Node regions in z-order (last = frontmost).
#[derive(Debug, Clone, Default)]
pub struct SpatialMap {
    entries: Vec<(NodeId, Region)>,
}

impl SpatialMap {
    /// Create an empty spatial map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from the visible nodes of `scene` that have a region, in
    /// pre-order from the root. Children come after (in front of) parents.
    pub fn rebuild(&mut self, scene: &Scene) {
        self.entries.clear();
        let Some(root) = scene.dom.root() else {
            return;
        };
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if !scene.is_visible(id) {
                continue;
            }
            if let Some(region) = scene.region(id) {
                self.entries.push((id, region));
            }
            stack.extend(scene.dom.children(id).iter().rev().copied());
        }
    }

    /// Replace the entries with an ordered list.
    pub fn update_ordered(&mut self, entries: &[(NodeId, Region)]) {
        self.entries.clear();
        self.entries.extend_from_slice(entries);
    }

    /// All nodes containing `point`, frontmost first.
    pub fn hit_test(&self, point: Offset) -> Vec<NodeId> {
        self.entries
            .iter()
            .rev()
            .filter(|(_, region)| region.contains(point))
            .map(|(id, _)| *id)
            .collect()
    }

    /// The frontmost node containing `point`.
    pub fn node_at(&self, point: Offset) -> Option<NodeId> {
        self.entries
            .iter()
            .rev()
            .find(|(_, region)| region.contains(point))
            .map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
