//! Strip: a horizontal run of styled terminal cells.
//!
//! Widgets paint by returning `Vec<Strip>`; the compositor places them into
//! its cell buffer, clipped to the bounds the render pass has pushed.

// ---------------------------------------------------------------------------
// CellStyle
// ---------------------------------------------------------------------------

/// Visual style for a single terminal cell.
///
/// Colors are stored as optional strings (named colors or `#rrggbb`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: bool,
    pub dim: bool,
    pub reverse: bool,
}

impl CellStyle {
    /// A style with every attribute unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color (builder).
    pub fn fg(mut self, color: impl Into<String>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Set the background color (builder).
    pub fn bg(mut self, color: impl Into<String>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Set bold (builder).
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set dim (builder).
    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Set reverse video (builder).
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

// ---------------------------------------------------------------------------
// StyledCell
// ---------------------------------------------------------------------------

/// One character plus its style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledCell {
    pub ch: char,
    pub style: CellStyle,
}

impl StyledCell {
    /// Create a new styled cell.
    pub fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }

    /// A space with the default style.
    pub fn blank() -> Self {
        Self::new(' ', CellStyle::default())
    }
}

impl Default for StyledCell {
    fn default() -> Self {
        Self::blank()
    }
}

// ---------------------------------------------------------------------------
// Strip
// ---------------------------------------------------------------------------

/// A row of cells at absolute row `y`, starting at column `x_offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    pub y: i32,
    pub x_offset: i32,
    pub cells: Vec<StyledCell>,
}

impl Strip {
    /// Create an empty strip.
    pub fn new(y: i32, x_offset: i32) -> Self {
        Self {
            y,
            x_offset,
            cells: Vec::new(),
        }
    }

    /// Append one character.
    pub fn push(&mut self, ch: char, style: CellStyle) {
        self.cells.push(StyledCell::new(ch, style));
    }

    /// Append every character of `text` with the same style.
    pub fn push_str(&mut self, text: &str, style: CellStyle) {
        self.cells
            .extend(text.chars().map(|ch| StyledCell::new(ch, style.clone())));
    }

    /// Pad with styled spaces, or truncate, to exactly `width` cells.
    pub fn fill(&mut self, width: i32, style: CellStyle) {
        let w = width.max(0) as usize;
        if self.cells.len() < w {
            self.cells.resize(w, StyledCell::new(' ', style));
        } else {
            self.cells.truncate(w);
        }
    }

    /// Width in cells.
    pub fn width(&self) -> i32 {
        self.cells.len() as i32
    }

    /// The characters of this strip as a string.
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_style_builders() {
        let s = CellStyle::new().fg("red").bg("blue").bold().reverse();
        assert_eq!(s.fg.as_deref(), Some("red"));
        assert_eq!(s.bg.as_deref(), Some("blue"));
        assert!(s.bold);
        assert!(s.reverse);
        assert!(!s.dim);
    }

    #[test]
    fn blank_cell_is_space() {
        let c = StyledCell::default();
        assert_eq!(c.ch, ' ');
        assert_eq!(c.style, CellStyle::default());
    }

    #[test]
    fn push_str_and_text() {
        let mut strip = Strip::new(2, 4);
        strip.push_str("tab", CellStyle::default());
        strip.push('|', CellStyle::default());
        assert_eq!(strip.text(), "tab|");
        assert_eq!(strip.width(), 4);
    }

    #[test]
    fn fill_pads_with_style() {
        let bg = CellStyle::new().bg("gray");
        let mut strip = Strip::new(0, 0);
        strip.push_str("ab", CellStyle::default());
        strip.fill(5, bg.clone());
        assert_eq!(strip.width(), 5);
        assert_eq!(strip.cells[4].style, bg);
        assert_eq!(strip.cells[0].style, CellStyle::default());
    }

    #[test]
    fn fill_truncates() {
        let mut strip = Strip::new(0, 0);
        strip.push_str("abcdef", CellStyle::default());
        strip.fill(3, CellStyle::default());
        assert_eq!(strip.text(), "abc");
    }

    #[test]
    fn fill_negative_width_empties() {
        let mut strip = Strip::new(0, 0);
        strip.push_str("ab", CellStyle::default());
        strip.fill(-1, CellStyle::default());
        assert_eq!(strip.width(), 0);
    }
}
