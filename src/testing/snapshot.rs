//! Snapshot rendering helpers.
//!
//! Convert rendered output (widget strips, compositor frames) into plain
//! text for assertions.

use crate::config::Theme;
use crate::geometry::Region;
use crate::render::compositor::Compositor;
use crate::render::strip::Strip;
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a widget alone with the default theme.
///
/// The widget paints into a `width` x `height` region at the origin. Rows are
/// right-trimmed and joined with `'\n'`, with no trailing newline.
///
/// # Examples
///
/// ```ignore
/// use gilt_tabs::testing::render_to_string;
/// use gilt_tabs::widgets::Label;
///
/// assert_eq!(render_to_string(&Label::new("Hello"), 20, 1), "Hello");
/// ```
pub fn render_to_string(widget: &dyn Widget, width: i32, height: i32) -> String {
    let strips = widget.render(Region::new(0, 0, width, height), &Theme::default());
    strips_to_string(&strips, width, height)
}

/// Overlay strips onto a blank `width` x `height` grid and dump it.
pub fn strips_to_string(strips: &[Strip], width: i32, height: i32) -> String {
    if width <= 0 || height <= 0 {
        return String::new();
    }

    let mut grid: Vec<Vec<char>> = vec![vec![' '; width as usize]; height as usize];
    for strip in strips {
        if strip.y < 0 || strip.y >= height {
            continue;
        }
        let row = &mut grid[strip.y as usize];
        for (i, cell) in strip.cells.iter().enumerate() {
            let x = strip.x_offset + i as i32;
            if (0..width).contains(&x) {
                row[x as usize] = cell.ch;
            }
        }
    }

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Dump a whole compositor frame, one right-trimmed line per row.
pub fn compositor_to_string(compositor: &Compositor) -> String {
    (0..compositor.height)
        .map(|y| compositor.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::strip::CellStyle;
    use crate::widgets::{Label, TabButton};

    #[test]
    fn label_to_string() {
        assert_eq!(render_to_string(&Label::new("a\nb"), 5, 3), "a\nb\n");
    }

    #[test]
    fn tab_button_to_string() {
        assert_eq!(render_to_string(&TabButton::new("Home"), 8, 1), " Home");
    }

    #[test]
    fn strips_clip_to_grid() {
        let mut strip = Strip::new(0, -1);
        strip.push_str("xyz", CellStyle::default());
        let far = Strip::new(9, 0);
        assert_eq!(strips_to_string(&[strip, far], 2, 1), "yz");
    }

    #[test]
    fn empty_grid() {
        assert_eq!(strips_to_string(&[], 0, 4), "");
    }

    #[test]
    fn compositor_dump() {
        let mut compositor = Compositor::new(4, 2);
        let mut strip = Strip::new(1, 1);
        strip.push_str("ok", CellStyle::default());
        compositor.place_strips(&[strip], compositor.bounds());
        assert_eq!(compositor_to_string(&compositor), "\n ok");
    }
}
