//! Action widget: a small clickable control drawn as an icon or a label.
//!
//! Used for a tab button's close control and the tab strip's "+" button. The
//! click behaviour lives in the scene's action slot for the node, not here.

use std::any::Any;

use taffy::geometry::Size;
use taffy::prelude::FromLength;
use taffy::style::{Dimension, Style};

use crate::config::Theme;
use crate::geometry::Region;
use crate::render::strip::Strip;
use crate::widget::traits::Widget;

/// Glyph drawn for a named icon.
pub fn icon_glyph(icon: &str) -> Option<char> {
    match icon {
        "close" => Some('×'),
        "plus" => Some('+'),
        _ => None,
    }
}

/// A one-row clickable control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    label: String,
    icon: Option<String>,
}

impl Action {
    /// An action showing a text label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
        }
    }

    /// An action showing a named icon (`"close"`, `"plus"`).
    pub fn icon(icon: impl Into<String>) -> Self {
        Self {
            label: String::new(),
            icon: Some(icon.into()),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon_name(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// What the action draws. A known icon wins over the label.
    pub fn display(&self) -> String {
        match self.icon.as_deref().and_then(icon_glyph) {
            Some(glyph) => glyph.to_string(),
            None => self.label.clone(),
        }
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.display().chars().count().max(1)
    }
}

impl Widget for Action {
    fn widget_type(&self) -> &str {
        "Action"
    }

    fn layout_style(&self) -> Style {
        Style {
            size: Size {
                width: Dimension::from_length(self.width() as f32),
                height: Dimension::from_length(1.0),
            },
            flex_shrink: 0.0,
            ..Default::default()
        }
    }

    fn render(&self, region: Region, theme: &Theme) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }
        let mut strip = Strip::new(region.y, region.x);
        strip.push_str(&self.display(), theme.action.clone());
        strip.fill(region.width, theme.action.clone());
        vec![strip]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
