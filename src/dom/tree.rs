//! Tree operations: create, insert at index, detach, remove, lookup, walk.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// The scene tree, backed by a slotmap arena.
///
/// All nodes live in a single `SlotMap`. Children are kept in order and parent
/// links are stored in a secondary map, so a child can find its ancestors
/// without owning them. A node may exist detached (no parent, not the root);
/// detached subtrees stay alive until [`Dom::remove`] is called on them.
pub struct Dom {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
}

impl Dom {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Create a detached node with no parent.
    pub fn create(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        id
    }

    /// Create a node and make it the root if no root is set yet.
    #[cfg(test)]
    fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.create(data);
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Create a node as the last child of `parent`.
    #[cfg(test)]
    fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let at = self.children(parent).len();
        self.insert_child_at(parent, at, data)
    }

    /// Create a node as a child of `parent` at position `index`.
    ///
    /// `index` is clamped to `[0, child count]`.
    #[cfg(test)]
    fn insert_child_at(&mut self, parent: NodeId, index: usize, data: NodeData) -> NodeId {
        let id = self.create(data);
        self.attach(parent, id, index);
        id
    }

    /// Attach an existing detached node under `parent` at position `index`.
    ///
    /// If `node` already has a parent it is detached from it first. `index` is
    /// clamped to `[0, child count]`. Does nothing if either node is missing or
    /// if `node` is `parent` or one of its ancestors.
    pub fn attach(&mut self, parent: NodeId, node: NodeId, index: usize) {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(node) {
            return;
        }
        if self.is_ancestor_or_self(node, parent) {
            return;
        }
        self.detach(node);
        if let Some(siblings) = self.children.get_mut(parent) {
            let at = index.min(siblings.len());
            siblings.insert(at, node);
            self.parent.insert(node, parent);
        }
    }

    /// Detach `node` from its parent, keeping its subtree alive.
    ///
    /// Returns the former parent.
    pub fn detach(&mut self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent.remove(node)?;
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.retain(|&child| child != node);
        }
        Some(parent)
    }

    /// Detach the child at `index` of `parent`, keeping its subtree alive.
    pub fn detach_child_at(&mut self, parent: NodeId, index: usize) -> Option<NodeId> {
        let child = self.child_at(parent, index)?;
        self.detach(child);
        Some(child)
    }

    /// Remove a node and all its descendants.
    ///
    /// Returns the ids of every removed node (the node itself first), or an
    /// empty vec if it didn't exist.
    pub fn remove(&mut self, id: NodeId) -> Vec<NodeId> {
        if !self.nodes.contains_key(id) {
            return Vec::new();
        }
        self.detach(id);
        if self.root == Some(id) {
            self.root = None;
        }

        let mut removed = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(id);
        while let Some(current) = queue.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                queue.extend(kids);
            }
            self.parent.remove(current);
            if self.nodes.remove(current).is_some() {
                removed.push(current);
            }
        }
        removed
    }

    /// The parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// The ordered children of a node. Empty if the node has none or is missing.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// The child at `index`, if any.
    pub fn child_at(&self, parent: NodeId, index: usize) -> Option<NodeId> {
        self.children(parent).get(index).copied()
    }

    /// Position of `node` among its siblings.
    pub fn index_in_parent(&self, node: NodeId) -> Option<usize> {
        let parent = self.parent(node)?;
        self.children(parent).iter().position(|&c| c == node)
    }

    /// Index of the first child of `parent` named `name`, searching at most
    /// `limit` children from the front.
    pub fn index_by_name(&self, parent: NodeId, name: &str, limit: usize) -> Option<usize> {
        self.children(parent)
            .iter()
            .take(limit)
            .position(|&c| self.nodes.get(c).is_some_and(|d| d.name == name))
    }

    /// Walk from `id` up to the root, collecting ancestor ids (nearest first).
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Whether `ancestor` is `id` itself or lies on its parent chain.
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent.get(node).copied();
        }
        false
    }

    /// The nearest ancestor whose widget type is `widget_type`.
    pub fn ancestor_of_type(&self, id: NodeId, widget_type: &str) -> Option<NodeId> {
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            if self.nodes.get(p).is_some_and(|d| d.is_type(widget_type)) {
                return Some(p);
            }
            current = p;
        }
        None
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's data.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// The current root node, if set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Explicitly set the root node.
    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// Number of live nodes, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the tree contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Reverse so the first child is visited first.
            stack.extend(self.children(current).iter().rev().copied());
        }
        result
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}
