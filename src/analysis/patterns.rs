//! Pattern indexing and the symmetry group of the square
//!
//! A pattern is an `n×n` window read from a grid with toroidal wraparound.
//! Patterns are never materialized: the index is accumulated directly from
//! grid reads, cell `(col, row)` contributing bit `row * n + col`. Rotations
//! and reflections are coordinate permutations applied while reading, so
//! enumerating a symmetry orbit allocates nothing.

use crate::spatial::grid::BinaryGrid;

/// Element of the dihedral group of the square
///
/// Rotations are counter-clockwise. Each reflected variant mirrors the matching
/// rotation left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// Unchanged pattern
    Identity,
    /// Rotated 90°
    Rotate90,
    /// Rotated 180°
    Rotate180,
    /// Rotated 270°
    Rotate270,
    /// Mirrored
    Reflect,
    /// Rotated 90°, then mirrored
    Rotate90Reflect,
    /// Rotated 180°, then mirrored
    Rotate180Reflect,
    /// Rotated 270°, then mirrored
    Rotate270Reflect,
}

impl Symmetry {
    /// All eight group elements: identity, three rotations, then the
    /// reflection of each of those four
    pub const ALL: [Self; 8] = [
        Self::Identity,
        Self::Rotate90,
        Self::Rotate180,
        Self::Rotate270,
        Self::Reflect,
        Self::Rotate90Reflect,
        Self::Rotate180Reflect,
        Self::Rotate270Reflect,
    ];

    /// Cell of the untransformed pattern that appears at `(x, y)` of the
    /// transformed one, for an `n×n` pattern
    pub const fn source_cell(self, x: usize, y: usize, n: usize) -> (usize, usize) {
        let last = n.saturating_sub(1);
        match self {
            Self::Identity => (x, y),
            Self::Rotate90 => (last - y, x),
            Self::Rotate180 => (last - x, last - y),
            Self::Rotate270 => (y, last - x),
            Self::Reflect => (last - x, y),
            Self::Rotate90Reflect => (last - y, last - x),
            Self::Rotate180Reflect => (x, last - y),
            Self::Rotate270Reflect => (y, x),
        }
    }
}

/// Number of distinct patterns of size `n`, i.e. `2^(n*n)`
pub const fn pattern_count(n: usize) -> usize {
    1 << (n * n)
}

/// Bit contributed by cell `(x, y)` of an `n×n` pattern
pub const fn cell_bit(x: usize, y: usize, n: usize) -> usize {
    1 << (y * n + x)
}

/// Index of the `n×n` window anchored at `(anchor_x, anchor_y)`
pub fn pattern_index(grid: &BinaryGrid, anchor_x: isize, anchor_y: isize, n: usize) -> usize {
    symmetric_pattern_index(grid, anchor_x, anchor_y, n, Symmetry::Identity)
}

/// Index of the window anchored at `(anchor_x, anchor_y)` after applying
/// `symmetry` to it
pub fn symmetric_pattern_index(
    grid: &BinaryGrid,
    anchor_x: isize,
    anchor_y: isize,
    n: usize,
    symmetry: Symmetry,
) -> usize {
    let mut index = 0;
    for y in 0..n {
        for x in 0..n {
            let (sx, sy) = symmetry.source_cell(x, y, n);
            if grid.get_wrapped(anchor_x + sx as isize, anchor_y + sy as isize) {
                index |= cell_bit(x, y, n);
            }
        }
    }
    index
}

/// Indices of all eight symmetric variants of one window, duplicates kept
pub fn orbit_indices(grid: &BinaryGrid, anchor_x: isize, anchor_y: isize, n: usize) -> [usize; 8] {
    Symmetry::ALL.map(|symmetry| symmetric_pattern_index(grid, anchor_x, anchor_y, n, symmetry))
}

/// Apply `symmetry` to an already packed pattern index
pub fn transform_index(index: usize, n: usize, symmetry: Symmetry) -> usize {
    let mut transformed = 0;
    for y in 0..n {
        for x in 0..n {
            let (sx, sy) = symmetry.source_cell(x, y, n);
            if index & cell_bit(sx, sy, n) != 0 {
                transformed |= cell_bit(x, y, n);
            }
        }
    }
    transformed
}

/// Unpack an index into its `n*n` row-major cells
pub fn decode_index(index: usize, n: usize) -> Vec<bool> {
    (0..n * n).map(|bit| index & (1 << bit) != 0).collect()
}

/// Pack row-major cells into a pattern index
///
/// Only the first `n*n` cells are read; missing cells count as unset.
pub fn encode_pattern(cells: &[bool], n: usize) -> usize {
    cells
        .iter()
        .take(n * n)
        .enumerate()
        .filter(|&(_, &set)| set)
        .fold(0, |index, (bit, _)| index | (1 << bit))
}
