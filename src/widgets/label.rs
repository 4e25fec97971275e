//! Label widget: displays text content.
//!
//! The usual content of a tab. Renders one strip per line, truncated to the
//! region width and limited to the region height.

use std::any::Any;

use crate::config::Theme;
use crate::geometry::Region;
use crate::render::strip::Strip;
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// A widget that displays non-interactive text.
///
/// Lines are split on `'\n'`.
///
/// # Examples
///
/// ```ignore
/// let label = Label::new("Hello, world!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
}

impl Label {
    /// Create a new label with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Return the text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for Label {
    fn widget_type(&self) -> &str {
        "Label"
    }

    fn render(&self, region: Region, theme: &Theme) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }

        let style = theme.content.clone();
        let max_width = region.width as usize;
        let mut lines = self.text.split('\n');

        (0..region.height)
            .map(|row| {
                let mut strip = Strip::new(region.y + row, region.x);
                if let Some(line) = lines.next() {
                    let truncated: String = line.chars().take(max_width).collect();
                    strip.push_str(&truncated, style.clone());
                }
                strip.fill(region.width, style.clone());
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

// ===========================================================================
// Tests
// ===========================================================================
