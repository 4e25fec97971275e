//! Scene: the node tree plus everything attached to its nodes.
//!
//! The [`Dom`] holds structure (parents, ordered children, names, tags,
//! visibility). The scene pairs each node with its boxed [`Widget`], its
//! action slot, its laid-out region, and whether it currently receives input
//! events. It also owns the update tracker that batches mutations into render
//! requests, and the widget registry used to create widgets by type name.

use std::collections::HashSet;

use slotmap::SecondaryMap;

use crate::config::Theme;
use crate::dom::{Dom, NodeData, NodeId};
use crate::error::Result;
use crate::event::action::{ActionHandler, ActionSlots};
use crate::geometry::Region;
use crate::update::{UpdateToken, UpdateTracker};
use crate::widget::registry::WidgetRegistry;
use crate::widget::traits::Widget;
use crate::widgets::tab_view::TabViewMut;

/// The retained scene graph.
pub struct Scene {
    pub dom: Dom,
    widgets: SecondaryMap<NodeId, Box<dyn Widget>>,
    pub actions: ActionSlots,
    pub registry: WidgetRegistry,
    pub updates: UpdateTracker,
    pub theme: Theme,
    regions: SecondaryMap<NodeId, Region>,
    events: HashSet<NodeId>,
}

impl Scene {
    /// An empty scene with the built-in widget registry and default theme.
    pub fn new() -> Self {
        Self::with_registry(WidgetRegistry::new())
    }

    /// An empty scene using `registry` for type-name construction.
    pub fn with_registry(registry: WidgetRegistry) -> Self {
        Self {
            dom: Dom::new(),
            widgets: SecondaryMap::new(),
            actions: ActionSlots::new(),
            registry,
            updates: UpdateTracker::new(),
            theme: Theme::default(),
            regions: SecondaryMap::new(),
            events: HashSet::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Building
    // -----------------------------------------------------------------------

    /// Create a detached node owning `widget`.
    pub fn create(&mut self, widget: impl Widget + 'static, name: impl Into<String>) -> NodeId {
        self.create_boxed(Box::new(widget), name)
    }

    /// Create a detached node owning an already boxed widget.
    pub fn create_boxed(&mut self, widget: Box<dyn Widget>, name: impl Into<String>) -> NodeId {
        let id = self.dom.create(NodeData::new(widget.widget_type(), name));
        self.widgets.insert(id, widget);
        id
    }

    /// Create the root node. Replaces the root pointer if one was set.
    pub fn create_root(&mut self, widget: impl Widget + 'static, name: impl Into<String>) -> NodeId {
        let id = self.create(widget, name);
        self.dom.set_root(id);
        id
    }

    /// Create a node as the last child of `parent`.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        widget: impl Widget + 'static,
        name: impl Into<String>,
    ) -> NodeId {
        let index = self.dom.children(parent).len();
        self.insert_child_at(parent, index, widget, name)
    }

    /// Create a node as child `index` of `parent` (clamped to the child count).
    pub fn insert_child_at(
        &mut self,
        parent: NodeId,
        index: usize,
        widget: impl Widget + 'static,
        name: impl Into<String>,
    ) -> NodeId {
        let id = self.create(widget, name);
        self.dom.attach(parent, id, index);
        id
    }

    /// Create a node from a registered widget type name as child `index` of
    /// `parent`. Nothing is created when the name is unknown.
    pub fn insert_new_child(
        &mut self,
        parent: NodeId,
        widget_type: &str,
        index: usize,
        name: impl Into<String>,
    ) -> Result<NodeId> {
        let widget = self.registry.create(widget_type)?;
        let id = self.create_boxed(widget, name);
        self.dom.attach(parent, id, index);
        Ok(id)
    }

    /// Move `node` (with its subtree) to child `index` of `parent`.
    pub fn attach(&mut self, parent: NodeId, node: NodeId, index: usize) {
        self.dom.attach(parent, node, index);
    }

    // -----------------------------------------------------------------------
    // Removing
    // -----------------------------------------------------------------------

    /// Detach the child at `index` of `parent`, keeping it alive.
    pub fn detach_child_at(&mut self, parent: NodeId, index: usize) -> Option<NodeId> {
        self.dom.detach_child_at(parent, index)
    }

    /// Remove the child at `index` of `parent`, destroying it when `destroy`
    /// is set. Returns the removed child's id either way.
    pub fn delete_child_at(&mut self, parent: NodeId, index: usize, destroy: bool) -> Option<NodeId> {
        let child = self.dom.detach_child_at(parent, index)?;
        if destroy {
            self.destroy(child);
        }
        Some(child)
    }

    /// Destroy `node` and its subtree: widgets, actions, regions, and event
    /// connections all go. Returns the number of nodes removed.
    pub fn destroy(&mut self, node: NodeId) -> usize {
        let removed = self.dom.remove(node);
        for &id in &removed {
            self.widgets.remove(id);
            self.actions.disconnect(id);
            self.regions.remove(id);
            self.events.remove(&id);
        }
        if !removed.is_empty() {
            let live: HashSet<NodeId> = self.dom.nodes.keys().collect();
            self.updates.retain_nodes(&live);
            log::debug!("destroyed {} node(s) under {:?}", removed.len(), node);
        }
        removed.len()
    }

    // -----------------------------------------------------------------------
    // Widgets and node data
    // -----------------------------------------------------------------------

    /// The widget owned by `id`.
    pub fn widget(&self, id: NodeId) -> Option<&dyn Widget> {
        self.widgets.get(id).map(|w| w.as_ref())
    }

    /// The widget owned by `id`, downcast to `T`.
    pub fn widget_as<T: 'static>(&self, id: NodeId) -> Option<&T> {
        self.widgets.get(id)?.as_any().downcast_ref::<T>()
    }

    /// The widget owned by `id`, mutably downcast to `T`.
    pub fn widget_as_mut<T: 'static>(&mut self, id: NodeId) -> Option<&mut T> {
        self.widgets.get_mut(id)?.as_any_mut().downcast_mut::<T>()
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.dom.get(id).map(|d| d.name.as_str())
    }

    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) {
        if let Some(data) = self.dom.get_mut(id) {
            data.name = name.into();
        }
    }

    /// The integer tag attached to `id` (a tab button's index).
    pub fn tag(&self, id: NodeId) -> Option<usize> {
        self.dom.get(id).and_then(|d| d.tag)
    }

    pub fn set_tag(&mut self, id: NodeId, tag: Option<usize>) {
        if let Some(data) = self.dom.get_mut(id) {
            data.tag = tag;
        }
    }

    /// The nearest proper ancestor of `id` whose widget type is `widget_type`.
    pub fn parent_by_type(&self, id: NodeId, widget_type: &str) -> Option<NodeId> {
        self.dom.ancestor_of_type(id, widget_type)
    }

    /// Borrow the tab view at `id` for tab operations.
    pub fn tab_view(&mut self, id: NodeId) -> Result<TabViewMut<'_>> {
        TabViewMut::new(self, id)
    }

    // -----------------------------------------------------------------------
    // Visibility
    // -----------------------------------------------------------------------

    /// Whether `id` itself is flagged visible.
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.dom.get(id).is_some_and(|d| d.visible)
    }

    /// Set the visibility flag on `id` and every descendant.
    pub fn set_visible_tree(&mut self, id: NodeId, visible: bool) {
        for node in self.dom.walk_depth_first(id) {
            if let Some(data) = self.dom.get_mut(node) {
                data.visible = visible;
            }
        }
    }

    /// Hide `id` and every descendant.
    pub fn set_invisible_tree(&mut self, id: NodeId) {
        self.set_visible_tree(id, false);
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Set the click handler for `id`, replacing any previous one.
    pub fn connect_action<F>(&mut self, id: NodeId, handler: F)
    where
        F: FnMut(&mut Scene, NodeId) + 'static,
    {
        let handler: ActionHandler = Box::new(handler);
        self.actions.connect(id, handler);
    }

    /// Run the handler for `id` with the node as sender.
    ///
    /// Returns `false` when no handler is connected. The handler may mutate
    /// the scene freely, including destroying its own node.
    pub fn trigger_action(&mut self, id: NodeId) -> bool {
        let Some(mut handler) = self.actions.take(id) else {
            return false;
        };
        log::trace!("action on {:?} ({:?})", id, self.name(id));
        handler(self, id);
        if self.dom.contains(id) {
            self.actions.restore(id, handler);
        }
        true
    }

    // -----------------------------------------------------------------------
    // Update batching
    // -----------------------------------------------------------------------

    /// Open an update bracket on `id`.
    pub fn update_start(&mut self, id: NodeId) -> UpdateToken {
        self.updates.start(id)
    }

    /// Close an update bracket.
    pub fn update_end(&mut self, token: UpdateToken) {
        self.updates.end(token);
    }

    /// Mark `id` for a layout pass when the current batch closes.
    pub fn set_full_rerender(&mut self, id: NodeId) {
        self.updates.set_full_rerender(id);
    }

    /// Run `f` inside an update bracket on `id`.
    pub fn batch<R>(&mut self, id: NodeId, f: impl FnOnce(&mut Scene) -> R) -> R {
        let token = self.updates.start(id);
        let result = f(self);
        self.updates.end(token);
        result
    }

    // -----------------------------------------------------------------------
    // Geometry and event delivery
    // -----------------------------------------------------------------------

    /// The absolute region assigned to `id` by the last layout pass.
    pub fn region(&self, id: NodeId) -> Option<Region> {
        self.regions.get(id).copied()
    }

    pub(crate) fn set_region(&mut self, id: NodeId, region: Region) {
        self.regions.insert(id, region);
    }

    pub(crate) fn clear_regions(&mut self) {
        self.regions.clear();
    }

    /// Let `id` receive input events.
    pub fn connect_events(&mut self, id: NodeId) {
        self.events.insert(id);
    }

    /// Stop `id` from receiving input events.
    pub fn disconnect_all_events(&mut self, id: NodeId) {
        self.events.remove(&id);
    }

    /// Stop `id` and its whole subtree from receiving input events.
    pub fn disconnect_tree_events(&mut self, id: NodeId) {
        for node in self.dom.walk_depth_first(id) {
            self.events.remove(&node);
        }
    }

    /// Whether `id` currently receives input events.
    pub fn events_connected(&self, id: NodeId) -> bool {
        self.events.contains(&id)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
