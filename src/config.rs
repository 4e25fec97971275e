//! Configuration: per-tab-view settings and the scene theme.

use crate::render::strip::CellStyle;

// ---------------------------------------------------------------------------
// TabViewConfig
// ---------------------------------------------------------------------------

/// Widget type created by the "+" button when none is configured.
pub const DEFAULT_NEW_TAB_TYPE: &str = "Frame";

/// Settings for a single tab view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabViewConfig {
    /// Longest label shown on a tab button; longer labels are elided.
    pub max_chars: usize,
    /// Whether a trailing "+" button is shown after the tabs.
    pub new_tab_button: bool,
    /// Registry name of the widget the "+" button creates.
    pub new_tab_type: String,
}

impl Default for TabViewConfig {
    fn default() -> Self {
        Self {
            max_chars: 20,
            new_tab_button: false,
            new_tab_type: DEFAULT_NEW_TAB_TYPE.to_owned(),
        }
    }
}

impl TabViewConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label elision threshold (builder). Values below 1 are raised to 1.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars.max(1);
        self
    }

    /// Show or hide the "+" button (builder).
    pub fn with_new_tab_button(mut self, show: bool) -> Self {
        self.new_tab_button = show;
        self
    }

    /// Set the widget type the "+" button creates (builder).
    pub fn with_new_tab_type(mut self, widget_type: impl Into<String>) -> Self {
        self.new_tab_type = widget_type.into();
        self
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Cell styles and glyphs used by the built-in widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Unselected tab buttons.
    pub tab: CellStyle,
    /// The selected tab button.
    pub tab_selected: CellStyle,
    /// The tab strip background.
    pub tab_strip: CellStyle,
    /// Separator lines between tabs.
    pub separator: CellStyle,
    /// Small action controls (close, new tab).
    pub action: CellStyle,
    /// Content panes and plain frames.
    pub content: CellStyle,
    /// Glyph drawn for separators.
    pub separator_glyph: char,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            tab: CellStyle::new(),
            tab_selected: CellStyle::new().bold().reverse(),
            tab_strip: CellStyle::new().dim(),
            separator: CellStyle::new().dim(),
            action: CellStyle::new(),
            content: CellStyle::new(),
            separator_glyph: '│',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = TabViewConfig::new();
        assert_eq!(config.max_chars, 20);
        assert!(!config.new_tab_button);
        assert_eq!(config.new_tab_type, "Frame");
    }

    #[test]
    fn config_builder() {
        let config = TabViewConfig::new()
            .with_max_chars(8)
            .with_new_tab_button(true)
            .with_new_tab_type("Label");
        assert_eq!(config.max_chars, 8);
        assert!(config.new_tab_button);
        assert_eq!(config.new_tab_type, "Label");
    }

    #[test]
    fn max_chars_floor() {
        assert_eq!(TabViewConfig::new().with_max_chars(0).max_chars, 1);
    }

    #[test]
    fn theme_selected_differs() {
        let theme = Theme::default();
        assert_ne!(theme.tab, theme.tab_selected);
        assert_eq!(theme.separator_glyph, '│');
    }
}
