//! Frame widget: a plain container that arranges its children.
//!
//! A frame paints only its background. Its children are laid out in a row,
//! a column, or as a stack where exactly one child (the stack top) is shown.

use std::any::Any;

use taffy::style::{FlexDirection, Style};

use crate::config::Theme;
use crate::geometry::Region;
use crate::render::strip::Strip;
use crate::widget::traits::{ChildVisibility, Widget};

// ---------------------------------------------------------------------------
// FrameLayout
// ---------------------------------------------------------------------------

/// How a frame arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameLayout {
    /// Children side by side, left to right.
    Horizontal,
    /// Children top to bottom.
    Vertical,
    /// Children on top of each other; only the stack top is visible.
    Stacked,
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// A layout container.
///
/// # Examples
///
/// ```ignore
/// let strip = Frame::horizontal().with_style(|s| s.flex_grow = 0.0);
/// let stack = Frame::stacked();
/// ```
#[derive(Debug, Clone)]
pub struct Frame {
    layout: FrameLayout,
    stack_top: Option<usize>,
    style: Style,
}

impl Frame {
    fn with_layout(layout: FrameLayout) -> Self {
        let flex_direction = match layout {
            FrameLayout::Horizontal => FlexDirection::Row,
            FrameLayout::Vertical | FrameLayout::Stacked => FlexDirection::Column,
        };
        Self {
            layout,
            stack_top: None,
            style: Style {
                flex_direction,
                flex_grow: 1.0,
                ..Default::default()
            },
        }
    }

    /// A frame laying its children out in a row.
    pub fn horizontal() -> Self {
        Self::with_layout(FrameLayout::Horizontal)
    }

    /// A frame laying its children out in a column.
    pub fn vertical() -> Self {
        Self::with_layout(FrameLayout::Vertical)
    }

    /// A stacked frame. Nothing is shown until a stack top is set.
    pub fn stacked() -> Self {
        Self::with_layout(FrameLayout::Stacked)
    }

    /// Adjust the flexbox style (builder pattern).
    pub fn with_style(mut self, f: impl FnOnce(&mut Style)) -> Self {
        f(&mut self.style);
        self
    }

    pub fn layout(&self) -> FrameLayout {
        self.layout
    }

    /// Index of the visible child of a stacked frame.
    pub fn stack_top(&self) -> Option<usize> {
        self.stack_top
    }

    /// Change the visible child. Ignored unless the frame is stacked.
    pub fn set_stack_top(&mut self, top: Option<usize>) {
        if self.layout == FrameLayout::Stacked {
            self.stack_top = top;
        }
    }
}

impl Widget for Frame {
    fn widget_type(&self) -> &str {
        "Frame"
    }

    fn layout_style(&self) -> Style {
        self.style.clone()
    }

    fn child_visibility(&self) -> ChildVisibility {
        match self.layout {
            FrameLayout::Stacked => ChildVisibility::Stacked(self.stack_top),
            _ => ChildVisibility::All,
        }
    }

    fn render(&self, region: Region, theme: &Theme) -> Vec<Strip> {
        (0..region.height)
            .map(|dy| {
                let mut strip = Strip::new(region.y + dy, region.x);
                strip.fill(region.width, theme.content.clone());
                strip
            })
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
