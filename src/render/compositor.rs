//! Cell buffer that rendered strips are composited into.
//!
//! The `Compositor` holds one frame: a `height` x `width` grid of
//! [`StyledCell`]s. The render pass clears it, places every widget's strips
//! clipped to that widget's bounds, and the result can be read back cell by
//! cell or dumped as plain text.

use super::strip::{CellStyle, Strip, StyledCell};
use crate::geometry::Region;

/// A frame buffer of styled cells.
#[derive(Debug, Clone)]
pub struct Compositor {
    /// `screen[y][x]` is the cell at column x, row y.
    screen: Vec<Vec<StyledCell>>,
    pub width: u16,
    pub height: u16,
}

impl Compositor {
    /// Create a blank buffer of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            screen: Self::blank_screen(width, height),
            width,
            height,
        }
    }

    /// Resize the buffer. All cells are reset to blank.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.screen = Self::blank_screen(width, height);
    }

    /// The whole buffer as a region.
    pub fn bounds(&self) -> Region {
        Region::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Reset every cell to a space in `style`.
    pub fn fill(&mut self, style: CellStyle) {
        for row in &mut self.screen {
            for cell in row.iter_mut() {
                *cell = StyledCell::new(' ', style.clone());
            }
        }
    }

    /// Place strips into the buffer, writing only cells inside `clip`.
    pub fn place_strips(&mut self, strips: &[Strip], clip: Region) {
        let clip = clip.intersection(self.bounds());
        if clip.is_empty() {
            return;
        }
        for strip in strips {
            if strip.y < clip.y || strip.y >= clip.bottom() {
                continue;
            }
            let row = &mut self.screen[strip.y as usize];
            for (i, cell) in strip.cells.iter().enumerate() {
                let x = strip.x_offset + i as i32;
                if x >= clip.x && x < clip.right() {
                    row[x as usize] = cell.clone();
                }
            }
        }
    }

    /// The cell at (x, y), or `None` when out of bounds.
    pub fn get_cell(&self, x: u16, y: u16) -> Option<&StyledCell> {
        self.screen
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
    }

    /// Row `y` as text, trailing spaces trimmed.
    pub fn row_text(&self, y: u16) -> String {
        self.screen
            .get(y as usize)
            .map(|row| row.iter().map(|c| c.ch).collect::<String>().trim_end().to_owned())
            .unwrap_or_default()
    }

    fn blank_screen(width: u16, height: u16) -> Vec<Vec<StyledCell>> {
        vec![vec![StyledCell::blank(); width as usize]; height as usize]
    }
}
