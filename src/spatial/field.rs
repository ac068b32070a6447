//! Mutable output field evolved by the sampler

use ndarray::Array2;

use crate::io::error::Result;
use crate::math::random::UniformSource;
use crate::spatial::grid::BinaryGrid;

/// Toroidal binary field being synthesized
///
/// The size is fixed at construction; the sampler only ever flips single
/// cells in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    grid: BinaryGrid,
}

impl Field {
    /// Allocate a field with every cell set independently by a coin flip
    ///
    /// Cells are drawn in row-major order, each set when `rng` yields a
    /// value below 0.5.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn random<R>(width: usize, height: usize, rng: &mut R) -> Result<Self>
    where
        R: UniformSource + ?Sized,
    {
        BinaryGrid::from_fn(width, height, |_, _| rng.next_unit() < 0.5).map(Self::new)
    }

    /// Build a field from caller-supplied row-major cells
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or `cells.len()` does not
    /// equal `width * height`
    pub fn from_cells(cells: &[bool], width: usize, height: usize) -> Result<Self> {
        BinaryGrid::from_cells(width, height, cells.iter().copied()).map(Self::new)
    }

    /// Wrap an existing grid as a field
    pub const fn new(grid: BinaryGrid) -> Self {
        Self { grid }
    }

    /// Underlying cell grid
    pub const fn grid(&self) -> &BinaryGrid {
        &self.grid
    }

    /// Field width in cells
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// Field height in cells
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// Total number of cells
    pub const fn area(&self) -> usize {
        self.grid.area()
    }

    /// Read a cell, returning `None` outside the field
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.grid.get(x, y)
    }

    /// Invert a single cell in place
    pub fn flip(&mut self, x: usize, y: usize) {
        self.grid.toggle(x, y);
    }

    /// Cells as a flat row-major boolean buffer
    pub fn to_vec(&self) -> Vec<bool> {
        self.grid.to_vec()
    }

    /// Cells as a `(height, width)` array
    pub fn to_array(&self) -> Array2<bool> {
        self.grid.to_array()
    }

    /// Consume the field, returning its grid
    pub fn into_grid(self) -> BinaryGrid {
        self.grid
    }
}
