//! TabView: a strip of tab buttons over a stack of content nodes.
//!
//! A tab view node owns two children:
//!
//! - `"tabs"`: a one-row horizontal frame holding one [`TabButton`] per tab,
//!   optionally followed by a "+" [`Action`].
//! - `"frame"`: a stacked frame holding the content nodes. Its stack top is
//!   the visible tab.
//!
//! Button `i` always belongs to content `i`, and its node tag is `i`. The
//! children are created lazily the first time the view is borrowed through
//! [`Scene::tab_view`], which returns a [`TabViewMut`] carrying every tab
//! operation. Each multi-step mutation runs inside one update bracket.

use std::any::Any;

use taffy::geometry::Point;
use taffy::prelude::FromLength;
use taffy::style::{Dimension, FlexDirection, LengthPercentage, Overflow, Style};

use super::action::Action;
use super::frame::Frame;
use super::tab_button::TabButton;
use crate::config::{TabViewConfig, Theme};
use crate::dom::NodeId;
use crate::error::{Result, TabError};
use crate::event::signal::{ConnectionId, Signal, TabViewEvent, TabViewSignal};
use crate::geometry::Region;
use crate::render::strip::Strip;
use crate::scene::Scene;
use crate::widget::traits::Widget;

/// Name of the tab strip child.
pub const TABS_PART: &str = "tabs";
/// Name of the stacked content child.
pub const FRAME_PART: &str = "frame";
/// Name of the "+" action in the strip.
pub const NEW_TAB_PART: &str = "new-tab";
/// Label given to tabs created by the "+" action.
pub const NEW_TAB_LABEL: &str = "New Tab";

// ---------------------------------------------------------------------------
// TabView widget
// ---------------------------------------------------------------------------

/// The tab view widget. Holds settings and listeners; the tabs themselves
/// live in the scene as child nodes.
#[derive(Debug, Default)]
pub struct TabView {
    config: TabViewConfig,
    signal: Signal<TabViewEvent>,
    parts: Option<(NodeId, NodeId)>,
}

impl TabView {
    pub fn new(config: TabViewConfig) -> Self {
        Self {
            config,
            signal: Signal::new(),
            parts: None,
        }
    }

    /// Create a tab view as the last child of `parent` and build its parts.
    pub fn create(
        scene: &mut Scene,
        parent: NodeId,
        name: impl Into<String>,
        config: TabViewConfig,
    ) -> NodeId {
        let id = scene.add_child(parent, TabView::new(config), name);
        init_tab_view(scene, id);
        id
    }

    pub fn config(&self) -> &TabViewConfig {
        &self.config
    }

    /// Listeners for [`TabViewEvent`]s.
    pub fn signal_mut(&mut self) -> &mut Signal<TabViewEvent> {
        &mut self.signal
    }

    /// The strip and frame nodes, once built.
    pub fn parts(&self) -> Option<(NodeId, NodeId)> {
        self.parts
    }
}

impl Widget for TabView {
    fn widget_type(&self) -> &str {
        "TabView"
    }

    fn layout_style(&self) -> Style {
        Style {
            flex_direction: FlexDirection::Column,
            flex_grow: 1.0,
            ..Default::default()
        }
    }

    fn render(&self, _region: Region, _theme: &Theme) -> Vec<Strip> {
        Vec::new()
    }

    /// Separator column left of every strip entry but the first.
    fn render_overlay(&self, scene: &Scene, _id: NodeId) -> Vec<Strip> {
        let Some((tabs, _)) = self.parts else {
            return Vec::new();
        };
        let theme = &scene.theme;
        let mut strips = Vec::new();
        for &child in scene.dom.children(tabs).iter().skip(1) {
            let Some(region) = scene.region(child) else {
                continue;
            };
            for dy in 0..region.height {
                let mut strip = Strip::new(region.y + dy, region.x - 1);
                strip.push(theme.separator_glyph, theme.separator.clone());
                strips.push(strip);
            }
        }
        strips
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn strip_style(style: &mut Style) {
    style.flex_grow = 0.0;
    style.flex_shrink = 0.0;
    style.size.height = Dimension::from_length(1.0);
    style.gap.width = LengthPercentage::from_length(1.0);
    style.overflow = Point {
        x: Overflow::Hidden,
        y: Overflow::Hidden,
    };
}

/// Build the strip and frame children of tab view `id` if missing.
///
/// Returns `(tabs, frame)`, or `None` when `id` is not a tab view.
pub(crate) fn init_tab_view(scene: &mut Scene, id: NodeId) -> Option<(NodeId, NodeId)> {
    let view = scene.widget_as::<TabView>(id)?;
    if let Some(parts) = view.parts {
        return Some(parts);
    }

    let token = scene.update_start(id);
    let tabs = scene.add_child(id, Frame::horizontal().with_style(strip_style), TABS_PART);
    let frame = scene.add_child(id, Frame::stacked(), FRAME_PART);
    if let Some(view) = scene.widget_as_mut::<TabView>(id) {
        view.parts = Some((tabs, frame));
    }
    scene.set_full_rerender(id);
    TabViewMut {
        scene: &mut *scene,
        id,
        tabs,
        frame,
    }
    .config_new_tab_button();
    scene.update_end(token);
    log::debug!("tab view {id:?} initialized");
    Some((tabs, frame))
}

// ---------------------------------------------------------------------------
// TabViewMut
// ---------------------------------------------------------------------------

/// Mutable access to one tab view inside a scene.
pub struct TabViewMut<'a> {
    scene: &'a mut Scene,
    id: NodeId,
    tabs: NodeId,
    frame: NodeId,
}

impl<'a> TabViewMut<'a> {
    pub(crate) fn new(scene: &'a mut Scene, id: NodeId) -> Result<Self> {
        let (tabs, frame) = init_tab_view(scene, id).ok_or(TabError::NotATabView(id))?;
        Ok(Self {
            scene,
            id,
            tabs,
            frame,
        })
    }

    /// The tab view node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The tab strip node.
    pub fn tabs(&self) -> NodeId {
        self.tabs
    }

    /// The stacked content node.
    pub fn frame(&self) -> NodeId {
        self.frame
    }

    pub fn scene(&mut self) -> &mut Scene {
        self.scene
    }

    pub fn config(&self) -> TabViewConfig {
        self.view().map(|v| v.config.clone()).unwrap_or_default()
    }

    fn view(&self) -> Option<&TabView> {
        self.scene.widget_as::<TabView>(self.id)
    }

    fn view_mut(&mut self) -> Option<&mut TabView> {
        self.scene.widget_as_mut::<TabView>(self.id)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Number of tabs.
    pub fn n_tabs(&self) -> usize {
        self.scene.dom.children(self.frame).len()
    }

    /// Content nodes in tab order.
    pub fn contents(&self) -> &[NodeId] {
        self.scene.dom.children(self.frame)
    }

    /// Tab buttons in tab order, without the "+" action.
    pub fn buttons(&self) -> Vec<NodeId> {
        self.scene
            .dom
            .children(self.tabs)
            .iter()
            .take(self.n_tabs())
            .copied()
            .collect()
    }

    /// The visible content node and its index.
    pub fn cur_tab(&self) -> Option<(NodeId, usize)> {
        let index = self.stack_top()?;
        let content = self.scene.dom.child_at(self.frame, index)?;
        Some((content, index))
    }

    /// Content and button of tab `index`.
    pub fn tab_at_index(&self, index: usize) -> Result<(NodeId, NodeId)> {
        let len = self.n_tabs();
        let out_of_range = TabError::IndexOutOfRange { index, len };
        if index >= len {
            log::warn!("{out_of_range}");
            return Err(out_of_range);
        }
        let content = self.scene.dom.child_at(self.frame, index);
        let button = self.scene.dom.child_at(self.tabs, index);
        content.zip(button).ok_or(out_of_range)
    }

    /// Content node and index of the first tab labelled `label`.
    pub fn tab_by_name(&self, label: &str) -> Result<(NodeId, usize)> {
        let not_found = || TabError::NameNotFound(label.to_owned());
        let index = self
            .scene
            .dom
            .index_by_name(self.tabs, label, self.n_tabs())
            .ok_or_else(not_found)?;
        let content = self.scene.dom.child_at(self.frame, index).ok_or_else(not_found)?;
        Ok((content, index))
    }

    /// Whether tab button `index` is drawn selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.scene
            .dom
            .child_at(self.tabs, index)
            .and_then(|b| self.scene.widget_as::<TabButton>(b))
            .is_some_and(TabButton::is_selected)
    }

    // -----------------------------------------------------------------------
    // Insertion
    // -----------------------------------------------------------------------

    /// Insert `content` as tab `index`, labelled `label`.
    ///
    /// The first tab of an empty view becomes selected. Any later tab is
    /// hidden until selected; the visible tab stays the same. An `index` past
    /// the end appends. Returns the index used.
    ///
    /// `content` must be live, detached, and must not enclose this view;
    /// otherwise nothing changes and [`TabError::InvalidContent`] is returned.
    pub fn insert_tab(&mut self, content: NodeId, label: &str, index: usize) -> Result<usize> {
        self.check_content(content)?;
        let n = self.n_tabs();
        let index = if index > n {
            log::warn!("insert index {index} past {n} tabs, appending");
            n
        } else {
            index
        };

        let token = self.scene.update_start(self.id);
        self.scene.set_full_rerender(self.id);
        let top = self.stack_top();
        self.scene.attach(self.frame, content, index);
        let button = self.insert_tab_only_at(label, index);
        if n == 0 {
            self.set_button_selected(button, true);
            self.set_stack_top(Some(index));
        } else if let Some(top) = top.filter(|&top| index <= top) {
            self.set_stack_top(Some(top + 1));
        }
        self.renumber_tabs();
        self.apply_stack_visibility();
        self.scene.update_end(token);

        log::debug!("tab {label:?} inserted at {index} of {}", n + 1);
        Ok(index)
    }

    /// Append `content` as the last tab. Returns its index.
    pub fn add_tab(&mut self, content: NodeId, label: &str) -> Result<usize> {
        let index = self.n_tabs();
        self.insert_tab(content, label, index)
    }

    /// Create a node for `widget` and append it as the last tab.
    pub fn add_tab_widget(
        &mut self,
        widget: impl Widget + 'static,
        label: &str,
    ) -> Result<(NodeId, usize)> {
        let content = self.scene.create(widget, label);
        let index = self.add_tab(content, label)?;
        Ok((content, index))
    }

    fn check_content(&self, content: NodeId) -> Result<()> {
        let dom = &self.scene.dom;
        if dom.contains(content)
            && dom.parent(content).is_none()
            && !dom.is_ancestor_or_self(content, self.frame)
        {
            return Ok(());
        }
        log::warn!("refusing {content:?} as content of tab view {:?}", self.id);
        Err(TabError::InvalidContent(content))
    }

    /// Create content from a registered widget type and insert it as tab
    /// `index`. Unknown types change nothing.
    pub fn insert_new_tab(&mut self, widget_type: &str, label: &str, index: usize) -> Result<NodeId> {
        let widget = self.scene.registry.create(widget_type)?;
        let content = self.scene.create_boxed(widget, label);
        self.insert_tab(content, label, index)?;
        Ok(content)
    }

    /// Create content from a registered widget type and append it.
    pub fn add_new_tab(&mut self, widget_type: &str, label: &str) -> Result<(NodeId, usize)> {
        let index = self.n_tabs();
        let content = self.insert_new_tab(widget_type, label, index)?;
        Ok((content, index))
    }

    /// [`add_new_tab`](Self::add_new_tab), then emit `TabAdded`.
    pub fn add_new_tab_action(&mut self, widget_type: &str, label: &str) -> Result<(NodeId, usize)> {
        let (content, index) = self.add_new_tab(widget_type, label)?;
        self.emit(TabViewSignal::TabAdded, index);
        Ok((content, index))
    }

    fn insert_tab_only_at(&mut self, label: &str, index: usize) -> NodeId {
        let max_chars = self.config().max_chars;
        let button = TabButton::new(label).with_max_chars(max_chars);
        let button = self.scene.insert_child_at(self.tabs, index, button, label);
        self.scene.set_tag(button, Some(index));
        TabButton::config_parts(self.scene, button);

        let view = self.id;
        self.scene.connect_action(button, move |scene, sender| {
            let Some(index) = scene.tag(sender) else {
                return;
            };
            match scene.tab_view(view) {
                Ok(mut tabs) => {
                    if let Err(err) = tabs.select_tab_index_action(index) {
                        log::debug!("tab click ignored: {err}");
                    }
                }
                Err(err) => log::warn!("tab click: {err}"),
            }
        });
        button
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Show tab `index` and mark its button selected. Selecting the visible
    /// tab does nothing. Returns the content node.
    pub fn select_tab_index(&mut self, index: usize) -> Result<NodeId> {
        let (content, button) = self.tab_at_index(index)?;
        if self.stack_top() == Some(index) {
            return Ok(content);
        }

        let token = self.scene.update_start(self.id);
        self.unselect_other_tabs(index);
        self.set_button_selected(button, true);
        self.set_stack_top(Some(index));
        self.apply_stack_visibility();
        self.scene.set_full_rerender(self.frame);
        self.scene.update_end(token);

        log::debug!("tab {index} selected");
        Ok(content)
    }

    /// [`select_tab_index`](Self::select_tab_index), then emit `TabSelected`.
    pub fn select_tab_index_action(&mut self, index: usize) -> Result<NodeId> {
        let content = self.select_tab_index(index)?;
        self.emit(TabViewSignal::TabSelected, index);
        Ok(content)
    }

    /// Select the first tab labelled `label`.
    pub fn select_tab_by_name(&mut self, label: &str) -> Result<(NodeId, usize)> {
        let (content, index) = self.tab_by_name(label)?;
        self.select_tab_index(index)?;
        Ok((content, index))
    }

    // -----------------------------------------------------------------------
    // Deletion
    // -----------------------------------------------------------------------

    /// Remove tab `index`. Its button is destroyed; its content is destroyed
    /// when `destroy` is set, otherwise detached and returned.
    ///
    /// Deleting the visible tab selects the previous tab, or else the one
    /// that moves into `index`, or else nothing.
    pub fn delete_tab_index(&mut self, index: usize, destroy: bool) -> Result<Option<NodeId>> {
        let (content, _) = self.tab_at_index(index)?;
        let n = self.n_tabs();
        let top = self.stack_top();

        let token = self.scene.update_start(self.id);
        self.scene.set_full_rerender(self.id);
        self.scene.delete_child_at(self.frame, index, destroy);
        self.scene.delete_child_at(self.tabs, index, true);
        self.renumber_tabs();
        match top {
            Some(top) if top == index => {
                self.set_stack_top(None);
                let next = if index > 0 {
                    Some(index - 1)
                } else if index + 1 < n {
                    Some(index)
                } else {
                    None
                };
                if let Some(next) = next {
                    if let Err(err) = self.select_tab_index(next) {
                        log::warn!("reselect after delete: {err}");
                    }
                }
            }
            Some(top) if top > index => self.set_stack_top(Some(top - 1)),
            _ => {}
        }
        self.apply_stack_visibility();
        self.scene.update_end(token);

        log::debug!("tab {index} deleted, {} left", n - 1);
        Ok((!destroy).then_some(content))
    }

    /// Destroy tab `index`, then emit `TabDeleted`.
    pub fn delete_tab_index_action(&mut self, index: usize) -> Result<()> {
        self.delete_tab_index(index, true)?;
        self.emit(TabViewSignal::TabDeleted, index);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    /// Change the label of tab `index`.
    pub fn rename_tab(&mut self, index: usize, label: &str) -> Result<()> {
        let (_, button) = self.tab_at_index(index)?;
        let token = self.scene.update_start(self.id);
        self.scene.set_name(button, label);
        if let Some(b) = self.scene.widget_as_mut::<TabButton>(button) {
            b.set_text(label);
        }
        self.scene.set_full_rerender(self.tabs);
        self.scene.update_end(token);
        Ok(())
    }

    /// Add or remove the trailing "+" action to match the configured flag.
    /// Returns whether anything changed.
    pub fn config_new_tab_button(&mut self) -> bool {
        let show = self.config().new_tab_button;
        let n = self.n_tabs();
        let strip = self.scene.dom.children(self.tabs).len();
        if show == (strip > n) {
            return false;
        }

        let token = self.scene.update_start(self.id);
        self.scene.set_full_rerender(self.tabs);
        if show {
            let plus = self.scene.add_child(self.tabs, Action::icon("plus"), NEW_TAB_PART);
            let view = self.id;
            self.scene.connect_action(plus, move |scene, _| {
                scene.set_full_rerender(view);
                let added = scene.tab_view(view).and_then(|mut tabs| {
                    let widget_type = tabs.config().new_tab_type;
                    tabs.add_new_tab_action(&widget_type, NEW_TAB_LABEL)
                });
                if let Err(err) = added {
                    log::warn!("new tab: {err}");
                }
            });
        } else {
            self.scene.delete_child_at(self.tabs, strip - 1, true);
        }
        self.scene.update_end(token);
        true
    }

    /// Show or hide the "+" action. Returns whether anything changed.
    pub fn set_new_tab_button(&mut self, show: bool) -> bool {
        if let Some(view) = self.view_mut() {
            view.config.new_tab_button = show;
        }
        self.config_new_tab_button()
    }

    /// Widget type the "+" action creates.
    pub fn set_new_tab_type(&mut self, widget_type: impl Into<String>) {
        if let Some(view) = self.view_mut() {
            view.config.new_tab_type = widget_type.into();
        }
    }

    /// Change the label elision threshold of every tab.
    pub fn set_max_chars(&mut self, max_chars: usize) {
        let max_chars = max_chars.max(1);
        if let Some(view) = self.view_mut() {
            view.config.max_chars = max_chars;
        }
        let token = self.scene.update_start(self.id);
        for button in self.buttons() {
            if let Some(b) = self.scene.widget_as_mut::<TabButton>(button) {
                b.set_max_chars(max_chars);
            }
        }
        self.scene.set_full_rerender(self.tabs);
        self.scene.update_end(token);
    }

    // -----------------------------------------------------------------------
    // Signals
    // -----------------------------------------------------------------------

    /// Listen for [`TabViewEvent`]s from this view.
    pub fn connect<F>(&mut self, listener: F) -> Result<ConnectionId>
    where
        F: FnMut(&TabViewEvent) + 'static,
    {
        let id = self.id;
        self.view_mut()
            .map(|view| view.signal.connect(listener))
            .ok_or(TabError::NotATabView(id))
    }

    /// Stop a listener. Returns `false` if it was not connected.
    pub fn disconnect(&mut self, connection: ConnectionId) -> bool {
        self.view_mut()
            .is_some_and(|view| view.signal.disconnect(connection))
    }

    fn emit(&mut self, signal: TabViewSignal, index: usize) {
        let event = TabViewEvent {
            sender: self.id,
            signal,
            index,
        };
        if let Some(view) = self.view_mut() {
            let reached = view.signal.emit(&event);
            log::debug!("{signal}({index}) reached {reached} listener(s)");
        }
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn stack_top(&self) -> Option<usize> {
        self.scene
            .widget_as::<Frame>(self.frame)
            .and_then(Frame::stack_top)
    }

    fn set_stack_top(&mut self, top: Option<usize>) {
        if let Some(frame) = self.scene.widget_as_mut::<Frame>(self.frame) {
            frame.set_stack_top(top);
        }
    }

    fn set_button_selected(&mut self, button: NodeId, selected: bool) {
        if let Some(b) = self.scene.widget_as_mut::<TabButton>(button) {
            b.set_selected_state(selected);
        }
    }

    fn unselect_other_tabs(&mut self, index: usize) {
        for (i, button) in self.buttons().into_iter().enumerate() {
            if i != index {
                self.set_button_selected(button, false);
            }
        }
    }

    fn renumber_tabs(&mut self) {
        for (i, button) in self.buttons().into_iter().enumerate() {
            self.scene.set_tag(button, Some(i));
        }
    }

    fn apply_stack_visibility(&mut self) {
        let top = self.stack_top();
        let contents = self.contents().to_vec();
        for (i, content) in contents.into_iter().enumerate() {
            self.scene.set_visible_tree(content, top == Some(i));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::RenderRequest;
    use crate::widgets::Label;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup(config: TabViewConfig) -> (Scene, NodeId) {
        let mut scene = Scene::new();
        let root = scene.create_root(Frame::vertical(), "root");
        let view = TabView::create(&mut scene, root, "tabs-view", config);
        scene.updates.take_pending();
        (scene, view)
    }

    fn add_labels(scene: &mut Scene, view: NodeId, labels: &[&str]) -> Vec<NodeId> {
        let mut tabs = scene.tab_view(view).unwrap();
        labels
            .iter()
            .map(|&l| tabs.add_tab_widget(Label::new(l), l).unwrap().0)
            .collect()
    }

    fn selected(scene: &mut Scene, view: NodeId) -> Vec<usize> {
        let tabs = scene.tab_view(view).unwrap();
        (0..tabs.n_tabs()).filter(|&i| tabs.is_selected(i)).collect()
    }

    fn tags(scene: &mut Scene, view: NodeId) -> Vec<Option<usize>> {
        let buttons = scene.tab_view(view).unwrap().buttons();
        buttons.iter().map(|&b| scene.tag(b)).collect()
    }

    #[test]
    fn create_builds_parts() {
        let (scene, view) = setup(TabViewConfig::default());
        let kids = scene.dom.children(view);
        assert_eq!(kids.len(), 2);
        assert_eq!(scene.name(kids[0]), Some(TABS_PART));
        assert_eq!(scene.name(kids[1]), Some(FRAME_PART));
    }

    #[test]
    fn lazy_init_on_borrow() {
        let mut scene = Scene::new();
        let view = scene.create_root(TabView::new(TabViewConfig::default()), "v");
        assert!(scene.dom.children(view).is_empty());
        assert_eq!(scene.tab_view(view).unwrap().n_tabs(), 0);
        assert_eq!(scene.dom.children(view).len(), 2);
        // Borrowing again does not rebuild.
        scene.tab_view(view).unwrap();
        assert_eq!(scene.dom.children(view).len(), 2);
    }

    #[test]
    fn first_insert_selects() {
        let (mut scene, view) = setup(TabViewConfig::default());
        let ids = add_labels(&mut scene, view, &["A"]);
        let tabs = scene.tab_view(view).unwrap();
        assert_eq!(tabs.cur_tab(), Some((ids[0], 0)));
        assert!(tabs.is_selected(0));
        assert!(scene.is_visible(ids[0]));
    }

    #[test]
    fn later_insert_is_hidden() {
        let (mut scene, view) = setup(TabViewConfig::default());
        let ids = add_labels(&mut scene, view, &["A", "B", "C"]);
        assert_eq!(scene.tab_view(view).unwrap().cur_tab(), Some((ids[0], 0)));
        assert_eq!(selected(&mut scene, view), vec![0]);
        assert!(!scene.is_visible(ids[1]));
        assert!(!scene.is_visible(ids[2]));
    }

    #[test]
    fn insert_before_visible_keeps_it_visible() {
        let (mut scene, view) = setup(TabViewConfig::default());
        let ids = add_labels(&mut scene, view, &["A", "B"]);
        let mut tabs = scene.tab_view(view).unwrap();
        tabs.select_tab_index(1).unwrap();
        let z = tabs.scene().create(Label::new("Z"), "Z");
        let index = tabs.insert_tab(z, "Z", 0).unwrap();
        assert_eq!(index, 0);
        assert_eq!(tabs.cur_tab(), Some((ids[1], 2)));
        assert_eq!(selected(&mut scene, view), vec![2]);
        assert_eq!(tags(&mut scene, view), vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn insert_past_end_appends() {
        let (mut scene, view) = setup(TabViewConfig::default());
        add_labels(&mut scene, view, &["A"]);
        let mut tabs = scene.tab_view(view).unwrap();
        let content = tabs.scene().create(Label::new("B"), "B");
        assert_eq!(tabs.insert_tab(content, "B", 9).unwrap(), 1);
        assert_eq!(tabs.contents()[1], content);
    }

    fn strip_len(scene: &mut Scene, view: NodeId) -> usize {
        let tabs = scene.tab_view(view).unwrap().tabs();
        scene.dom.children(tabs).len()
    }

    #[test]
    fn insert_destroyed_content_is_refused() {
        let (mut scene, view) = setup(TabViewConfig::default());
        let ids = add_labels(&mut scene, view, &["A"]);
        let mut tabs = scene.tab_view(view).unwrap();
        tabs.delete_tab_index(0, true).unwrap();
        assert_eq!(
            tabs.insert_tab(ids[0], "A", 0).unwrap_err(),
            TabError::InvalidContent(ids[0])
        );
        assert_eq!(tabs.n_tabs(), 0);
        assert_eq!(tabs.cur_tab(), None);
        assert_eq!(strip_len(&mut scene, view), 0);
    }

    #[test]
    fn insert_attached_content_is_refused() {
        let (mut scene, view) = setup(TabViewConfig::default());
        let ids = add_labels(&mut scene, view, &["A", "Z"]);
        let mut tabs = scene.tab_view(view).unwrap();
        assert!(tabs.insert_tab(ids[1], "Z", 0).is_err());
        assert_eq!(tabs.contents(), &ids[..]);
        assert_eq!(strip_len(&mut scene, view), 2);
        assert_eq!(tags(&mut scene, view), vec![Some(0), Some(1)]);
        assert!(scene.tab_view(view).unwrap().set_new_tab_button(true));
        assert_eq!(strip_len(&mut scene, view), 3);
    }

    #[test]
    fn insert_enclosing_node_is_refused() {
        let (mut scene, view) = setup(TabViewConfig::default());
        let root = scene.dom.root().unwrap();
        let mut tabs = scene.tab_view(view).unwrap();
        assert_eq!(tabs.insert_tab(view, "self", 0).unwrap_err(), TabError::InvalidContent(view));
        assert_eq!(tabs.insert_tab(root, "root", 0).unwrap_err(), TabError::InvalidContent(root));
        assert_eq!(tabs.n_tabs(), 0);
        assert_eq!(scene.dom.walk_depth_first(root).len(), 4);
        assert!(scene.updates.take_pending().is_empty());
    }

    #[test]
    fn inserted_button_tooltip_is_label() {
        let (mut scene, view) = setup(TabViewConfig::default().with_max_chars(3));
        add_labels(&mut scene, view, &["Overview"]);
        let button = scene.tab_view(view).unwrap().buttons()[0];
        let button = scene.widget_as::<TabButton>(button).unwrap();
        assert_eq!(button.tooltip(), "Overview");
        assert_eq!(button.display_label(), "Ov…");
    }

    #[test]
    fn insert_is_one_full_rerender() {
        let (mut scene, view) = setup(TabViewConfig::default());
        add_labels(&mut scene, view, &["A"]);
        assert_eq!(scene.updates.take_pending(), vec![RenderRequest::FullReRender(view)]);
    }

    #[test]
    fn insert_new_tab_unknown_type() {
        let (mut scene, view) = setup(TabViewConfig::default());
        let nodes = scene.dom.len();
        let mut tabs = scene.tab_view(view).unwrap();
        let err = tabs.add_new_tab("Nope", "x").unwrap_err();
        assert_eq!(err, TabError::UnknownWidgetType("Nope".into()));
        assert_eq!(tabs.n_tabs(), 0);
        assert_eq!(scene.dom.len(), nodes);
    }

    #[test]
    fn select_switches_visible() {
        let (mut scene, view) = setup(TabViewConfig::default());
        let ids = add_labels(&mut scene, view, &["A", "B", "C"]);
        let content = scene.tab_view(view).unwrap().select_tab_index(2).unwrap();
        assert_eq!(content, ids[2]);
        assert_eq!(selected(&mut scene, view), vec![2]);
        assert!(scene.is_visible(ids[2]));
        assert!(!scene.is_visible(ids[0]));
    }

    #[test]
    fn select_out_of_range() {
        let (mut scene, view) = setup(TabViewConfig::default());
        add_labels(&mut scene, view, &["A"]);
        let err = scene.tab_view(view).unwrap().select_tab_index(3).unwrap_err();
        assert_eq!(err, TabError::IndexOutOfRange { index: 3, len: 1 });
        assert_eq!(selected(&mut scene, view), vec![0]);
    }

    #[test]
    fn select_current_is_noop() {
        let (mut scene, view) = setup(TabViewConfig::default());
        add_labels(&mut scene, view, &["A", "B"]);
        scene.updates.take_pending();
        scene.tab_view(view).unwrap().select_tab_index(0).unwrap();
        assert!(!scene.updates.has_pending());
    }

    #[test]
    fn select_action_emits_once() {
        let (mut scene, view) = setup(TabViewConfig::default());
        add_labels(&mut scene, view, &["A", "B"]);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let mut tabs = scene.tab_view(view).unwrap();
        tabs.connect(move |e: &TabViewEvent| sink.borrow_mut().push((e.signal, e.index)))
            .unwrap();
        tabs.select_tab_index_action(1).unwrap();
        assert!(tabs.select_tab_index_action(5).is_err());
        assert_eq!(*events.borrow(), vec![(TabViewSignal::TabSelected, 1)]);
    }

    #[test]
    fn by_name_lookup() {
        let (mut scene, view) = setup(TabViewConfig::default().with_new_tab_button(true));
        let ids = add_labels(&mut scene, view, &["A", "B", "B"]);
        let mut tabs = scene.tab_view(view).unwrap();
        assert_eq!(tabs.tab_by_name("B").unwrap(), (ids[1], 1));
        assert_eq!(
            tabs.tab_by_name(NEW_TAB_PART).unwrap_err(),
            TabError::NameNotFound(NEW_TAB_PART.into())
        );
        assert_eq!(tabs.select_tab_by_name("B").unwrap(), (ids[1], 1));
        assert_eq!(tabs.cur_tab(), Some((ids[1], 1)));
        assert!(tabs.select_tab_by_name("Q").is_err());
        assert_eq!(tabs.cur_tab(), Some((ids[1], 1)));
    }

    #[test]
    fn delete_selected_middle_selects_previous() {
        let (mut scene, view) = setup(TabViewConfig::default());
        let ids = add_labels(&mut scene, view, &["A", "B", "C"]);
        let mut tabs = scene.tab_view(view).unwrap();
        tabs.select_tab_index(1).unwrap();
        assert_eq!(tabs.delete_tab_index(1, true).unwrap(), None);
        assert_eq!(tabs.cur_tab(), Some((ids[0], 0)));
        assert_eq!(selected(&mut scene, view), vec![0]);
        assert!(!scene.dom.contains(ids[1]));
    }

    #[test]
    fn delete_selected_last_selects_previous() {
        let (mut scene, view) = setup(TabViewConfig::default());
        let ids = add_labels(&mut scene, view, &["A", "B", "C"]);
        let mut tabs = scene.tab_view(view).unwrap();
        tabs.select_tab_index(2).unwrap();
        tabs.delete_tab_index(2, true).unwrap();
        assert_eq!(tabs.cur_tab(), Some((ids[1], 1)));
        assert_eq!(selected(&mut scene, view), vec![1]);
    }

    #[test]
    fn delete_selected_first_selects_successor() {
        let (mut scene, view) = setup(TabViewConfig::default());
        let ids = add_labels(&mut scene, view, &["A", "B"]);
        let mut tabs = scene.tab_view(view).unwrap();
        tabs.delete_tab_index(0, true).unwrap();
        assert_eq!(tabs.cur_tab(), Some((ids[1], 0)));
        assert_eq!(selected(&mut scene, view), vec![0]);
        assert!(scene.is_visible(ids[1]));
    }

    #[test]
    fn delete_only_tab_empties() {
        let (mut scene, view) = setup(TabViewConfig::default());
        add_labels(&mut scene, view, &["A"]);
        let mut tabs = scene.tab_view(view).unwrap();
        tabs.delete_tab_index(0, true).unwrap();
        assert_eq!(tabs.n_tabs(), 0);
        assert_eq!(tabs.cur_tab(), None);
        assert!(tabs.buttons().is_empty());
    }

    #[test]
    fn delete_before_visible_keeps_it() {
        let (mut scene, view) = setup(TabViewConfig::default());
        let ids = add_labels(&mut scene, view, &["A", "B", "C"]);
        let mut tabs = scene.tab_view(view).unwrap();
        tabs.select_tab_index(2).unwrap();
        tabs.delete_tab_index(0, true).unwrap();
        assert_eq!(tabs.cur_tab(), Some((ids[2], 1)));
        assert_eq!(selected(&mut scene, view), vec![1]);
        assert_eq!(tags(&mut scene, view), vec![Some(0), Some(1)]);
    }

    #[test]
    fn delete_without_destroy_returns_content() {
        let (mut scene, view) = setup(TabViewConfig::default());
        let ids = add_labels(&mut scene, view, &["A", "B"]);
        let detached = scene.tab_view(view).unwrap().delete_tab_index(1, false).unwrap();
        assert_eq!(detached, Some(ids[1]));
        assert!(scene.dom.contains(ids[1]));
        assert_eq!(scene.dom.parent(ids[1]), None);
        // Reusable in a new tab.
        let mut tabs = scene.tab_view(view).unwrap();
        assert_eq!(tabs.add_tab(ids[1], "B again").unwrap(), 1);
    }

    #[test]
    fn delete_action_emits_only_on_success() {
        let (mut scene, view) = setup(TabViewConfig::default());
        add_labels(&mut scene, view, &["A", "B"]);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let mut tabs = scene.tab_view(view).unwrap();
        tabs.connect(move |e: &TabViewEvent| sink.borrow_mut().push((e.signal, e.index)))
            .unwrap();
        tabs.delete_tab_index_action(1).unwrap();
        assert!(tabs.delete_tab_index_action(4).is_err());
        assert_eq!(*events.borrow(), vec![(TabViewSignal::TabDeleted, 1)]);
    }

    #[test]
    fn new_tab_button_idempotent() {
        let (mut scene, view) = setup(TabViewConfig::default());
        add_labels(&mut scene, view, &["A", "B"]);
        let mut tabs = scene.tab_view(view).unwrap();
        assert!(!tabs.config_new_tab_button());
        assert!(tabs.set_new_tab_button(true));
        assert!(!tabs.config_new_tab_button());
        assert!(!tabs.set_new_tab_button(true));
        let strip = tabs.tabs();
        assert_eq!(tabs.scene().dom.children(strip).len(), 3);
        assert!(tabs.set_new_tab_button(false));
        assert!(!tabs.config_new_tab_button());
        assert_eq!(tabs.scene().dom.children(strip).len(), 2);
    }

    #[test]
    fn new_tab_button_stays_last() {
        let (mut scene, view) = setup(TabViewConfig::default().with_new_tab_button(true));
        add_labels(&mut scene, view, &["A", "B"]);
        let tabs = scene.tab_view(view).unwrap();
        let strip = tabs.tabs();
        let last = *scene.dom.children(strip).last().unwrap();
        assert_eq!(scene.name(last), Some(NEW_TAB_PART));
        assert_eq!(scene.tag(last), None);
    }

    #[test]
    fn plus_action_adds_tab() {
        let (mut scene, view) = setup(TabViewConfig::default().with_new_tab_button(true));
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let mut tabs = scene.tab_view(view).unwrap();
        tabs.connect(move |e: &TabViewEvent| sink.borrow_mut().push((e.signal, e.index)))
            .unwrap();
        let plus = scene.dom.children(scene.dom.children(view)[0])[0];
        assert!(scene.trigger_action(plus));
        let tabs = scene.tab_view(view).unwrap();
        assert_eq!(tabs.n_tabs(), 1);
        let (content, index) = tabs.tab_by_name(NEW_TAB_LABEL).unwrap();
        assert_eq!(index, 0);
        assert!(scene.widget_as::<Frame>(content).is_some());
        assert_eq!(*events.borrow(), vec![(TabViewSignal::TabAdded, 0)]);
    }

    #[test]
    fn button_click_selects() {
        let (mut scene, view) = setup(TabViewConfig::default());
        let ids = add_labels(&mut scene, view, &["A", "B"]);
        let button = scene.tab_view(view).unwrap().buttons()[1];
        assert!(scene.trigger_action(button));
        assert_eq!(scene.tab_view(view).unwrap().cur_tab(), Some((ids[1], 1)));
    }

    #[test]
    fn close_click_deletes() {
        let (mut scene, view) = setup(TabViewConfig::default());
        let ids = add_labels(&mut scene, view, &["A", "B", "C"]);
        let button = scene.tab_view(view).unwrap().buttons()[1];
        let close = scene.dom.children(button)[0];
        assert!(scene.trigger_action(close));
        let tabs = scene.tab_view(view).unwrap();
        assert_eq!(tabs.contents(), &[ids[0], ids[2]]);
        assert_eq!(tags(&mut scene, view), vec![Some(0), Some(1)]);
    }

    #[test]
    fn rename_updates_label() {
        let (mut scene, view) = setup(TabViewConfig::default());
        add_labels(&mut scene, view, &["A"]);
        let mut tabs = scene.tab_view(view).unwrap();
        tabs.rename_tab(0, "Alpha").unwrap();
        assert_eq!(tabs.tab_by_name("Alpha").unwrap().1, 0);
        assert!(tabs.rename_tab(1, "x").is_err());
        let button = tabs.buttons()[0];
        assert_eq!(scene.widget_as::<TabButton>(button).unwrap().label(), "Alpha");
    }

    #[test]
    fn max_chars_reaches_buttons() {
        let (mut scene, view) = setup(TabViewConfig::default().with_max_chars(4));
        add_labels(&mut scene, view, &["Document"]);
        let mut tabs = scene.tab_view(view).unwrap();
        let button = tabs.buttons()[0];
        assert_eq!(tabs.scene().widget_as::<TabButton>(button).unwrap().display_label(), "Doc…");
        tabs.set_max_chars(20);
        assert_eq!(tabs.config().max_chars, 20);
        assert_eq!(scene.widget_as::<TabButton>(button).unwrap().display_label(), "Document");
    }

    #[test]
    fn disconnect_stops_events() {
        let (mut scene, view) = setup(TabViewConfig::default());
        add_labels(&mut scene, view, &["A", "B"]);
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let mut tabs = scene.tab_view(view).unwrap();
        let conn = tabs.connect(move |_: &TabViewEvent| *sink.borrow_mut() += 1).unwrap();
        assert!(tabs.disconnect(conn));
        assert!(!tabs.disconnect(conn));
        tabs.select_tab_index_action(1).unwrap();
        assert_eq!(*count.borrow(), 0);
    }
}
