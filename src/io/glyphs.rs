//! Text rendering of fields for terminal output

use crate::io::configuration::{SET_GLYPH, UNSET_GLYPH};
use crate::spatial::grid::BinaryGrid;

/// Render a grid as lines of glyphs, one line per row
pub fn render_with(grid: &BinaryGrid, set: char, unset: char) -> String {
    let mut text = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            text.push(if grid.get(x, y).unwrap_or(false) {
                set
            } else {
                unset
            });
        }
        text.push('\n');
    }
    text
}

/// Render a grid with the default glyphs
pub fn render(grid: &BinaryGrid) -> String {
    render_with(grid, SET_GLYPH, UNSET_GLYPH)
}
