//! TabButton widget: one entry in a tab view's strip.
//!
//! Shows the (possibly elided) tab label followed by a close control. The
//! close control is a child [`Action`] node created by
//! [`TabButton::config_parts`]; clicking it deletes the tab through the
//! nearest enclosing tab view. The button's position among its siblings is
//! mirrored in its node tag, which is what both click handlers read.

use std::any::Any;

use taffy::geometry::{Rect, Size};
use taffy::prelude::{FromLength, TaffyZero};
use taffy::style::{Dimension, JustifyContent, LengthPercentage, Style};

use super::action::Action;
use crate::config::Theme;
use crate::dom::NodeId;
use crate::geometry::Region;
use crate::render::strip::Strip;
use crate::scene::Scene;
use crate::widget::traits::Widget;

/// Appended to labels cut short by `max_chars`.
pub const ELLIPSIS: char = '…';

/// Name of the close control child.
pub const CLOSE_PART: &str = "close";

/// Cut `label` to at most `max_chars` characters, marking the cut with
/// [`ELLIPSIS`].
pub fn elide(label: &str, max_chars: usize) -> String {
    let max_chars = max_chars.max(1);
    if label.chars().count() <= max_chars {
        return label.to_owned();
    }
    let mut out: String = label.chars().take(max_chars - 1).collect();
    out.push(ELLIPSIS);
    out
}

// ---------------------------------------------------------------------------
// TabButton
// ---------------------------------------------------------------------------

/// A selectable tab header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    label: String,
    tooltip: String,
    icon: Option<String>,
    indicator: String,
    selected: bool,
    max_chars: usize,
}

impl TabButton {
    /// A button labelled `label`, unselected, with the default close indicator.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            tooltip: label.clone(),
            label,
            icon: None,
            indicator: CLOSE_PART.to_owned(),
            selected: false,
            max_chars: crate::config::TabViewConfig::default().max_chars,
        }
    }

    /// Set the elision threshold (builder pattern).
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars.max(1);
        self
    }

    /// Set a leading icon (builder pattern).
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The full, unelided label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Hover text: the full label, even when the drawn one is elided.
    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Icon name of the close control.
    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// The label as drawn.
    pub fn display_label(&self) -> String {
        let label = elide(&self.label, self.max_chars);
        match self.icon.as_deref().and_then(super::action::icon_glyph) {
            Some(glyph) => format!("{glyph} {label}"),
            None => label,
        }
    }

    /// Total width: padded label, close control, trailing pad.
    pub fn width(&self) -> usize {
        self.display_label().chars().count() + 4
    }

    pub(crate) fn set_text(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.tooltip = self.label.clone();
    }

    pub(crate) fn set_max_chars(&mut self, max_chars: usize) {
        self.max_chars = max_chars.max(1);
    }

    pub(crate) fn set_selected_state(&mut self, selected: bool) {
        self.selected = selected;
    }

    // -----------------------------------------------------------------------
    // Scene-level operations
    // -----------------------------------------------------------------------

    /// Create the close control under button `id` unless it already exists.
    pub fn config_parts(scene: &mut Scene, id: NodeId) {
        if scene.dom.index_by_name(id, CLOSE_PART, usize::MAX).is_some() {
            return;
        }
        let Some(indicator) = scene
            .widget_as::<TabButton>(id)
            .map(|b| b.indicator.clone())
        else {
            return;
        };
        let close = scene.add_child(id, Action::icon(indicator), CLOSE_PART);
        scene.connect_action(close, close_clicked);
    }

    /// The nearest tab view enclosing button `id`.
    pub fn tab_view(scene: &Scene, id: NodeId) -> Option<NodeId> {
        scene.parent_by_type(id, "TabView")
    }
}

fn close_clicked(scene: &mut Scene, close: NodeId) {
    let Some(button) = scene.dom.parent(close) else {
        return;
    };
    let Some(index) = scene.tag(button) else {
        return;
    };
    let Some(view) = TabButton::tab_view(scene, button) else {
        return;
    };
    if let Ok(mut tabs) = scene.tab_view(view) {
        if let Err(err) = tabs.delete_tab_index_action(index) {
            log::warn!("close on tab {index} failed: {err}");
        }
    }
}

impl Widget for TabButton {
    fn widget_type(&self) -> &str {
        "TabButton"
    }

    fn layout_style(&self) -> Style {
        Style {
            size: Size {
                width: Dimension::from_length(self.width() as f32),
                height: Dimension::from_length(1.0),
            },
            flex_shrink: 0.0,
            justify_content: Some(JustifyContent::FlexEnd),
            padding: Rect {
                left: LengthPercentage::ZERO,
                right: LengthPercentage::from_length(1.0),
                top: LengthPercentage::ZERO,
                bottom: LengthPercentage::ZERO,
            },
            ..Default::default()
        }
    }

    fn render(&self, region: Region, theme: &Theme) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }
        let style = if self.selected {
            theme.tab_selected.clone()
        } else {
            theme.tab.clone()
        };
        let mut strip = Strip::new(region.y, region.x);
        strip.push(' ', style.clone());
        strip.push_str(&self.display_label(), style.clone());
        strip.fill(region.width, style);
        vec![strip]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Frame;

    #[test]
    fn elide_short_label_untouched() {
        assert_eq!(elide("Home", 20), "Home");
        assert_eq!(elide("Home", 4), "Home");
    }

    #[test]
    fn elide_long_label() {
        assert_eq!(elide("Preferences", 5), "Pref…");
        assert_eq!(elide("ab", 1), "…");
    }

    #[test]
    fn width_counts_pad_and_close() {
        let button = TabButton::new("abc");
        assert_eq!(button.width(), 7);
        let style = button.layout_style();
        assert_eq!(style.size.width, Dimension::from_length(7.0));
        assert_eq!(style.flex_shrink, 0.0);
    }

    #[test]
    fn icon_prefixes_label() {
        let button = TabButton::new("Add").with_icon("plus");
        assert_eq!(button.display_label(), "+ Add");
        assert_eq!(button.icon(), Some("plus"));
    }

    #[test]
    fn render_selected_uses_selected_style() {
        let theme = Theme::default();
        let mut button = TabButton::new("Hi");
        button.set_selected_state(true);
        let strips = button.render(Region::new(0, 0, 6, 1), &theme);
        assert_eq!(strips[0].text(), " Hi   ");
        assert_eq!(strips[0].cells[1].style, theme.tab_selected);
    }

    #[test]
    fn max_chars_setter_elides() {
        let mut button = TabButton::new("Document");
        button.set_max_chars(4);
        assert_eq!(button.display_label(), "Doc…");
        assert_eq!(button.label(), "Document");
    }

    #[test]
    fn tooltip_keeps_full_label() {
        let mut button = TabButton::new("Preferences").with_max_chars(5);
        assert_eq!(button.display_label(), "Pref…");
        assert_eq!(button.tooltip(), "Preferences");
        button.set_text("Settings");
        assert_eq!(button.tooltip(), "Settings");
    }

    #[test]
    fn config_parts_is_idempotent() {
        let mut scene = Scene::new();
        let root = scene.create_root(Frame::horizontal(), "strip");
        let button = scene.add_child(root, TabButton::new("a"), "a");
        TabButton::config_parts(&mut scene, button);
        TabButton::config_parts(&mut scene, button);
        let kids = scene.dom.children(button).to_vec();
        assert_eq!(kids.len(), 1);
        assert_eq!(scene.name(kids[0]), Some(CLOSE_PART));
        assert!(scene.actions.is_connected(kids[0]));
        assert_eq!(scene.widget_as::<Action>(kids[0]).unwrap().icon_name(), Some("close"));
    }

    #[test]
    fn close_without_tab_view_is_noop() {
        let mut scene = Scene::new();
        let root = scene.create_root(Frame::horizontal(), "strip");
        let button = scene.add_child(root, TabButton::new("a"), "a");
        scene.set_tag(button, Some(0));
        TabButton::config_parts(&mut scene, button);
        let close = scene.dom.children(button)[0];
        assert_eq!(TabButton::tab_view(&scene, button), None);
        assert!(scene.trigger_action(close));
        assert!(scene.dom.contains(button));
    }
}
