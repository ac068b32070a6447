//! Sample pattern construction from the supported input layouts
//!
//! The chain only ever sees a [`Sample`]: an immutable [`BinaryGrid`].
//! The constructors here normalize the accepted input forms (flat buffers
//! with explicit or inferred size, nested rows, `ndarray` grids) into it.

use ndarray::Array2;
use num_traits::Zero;

use crate::io::error::{Result, invalid_source};
use crate::spatial::grid::BinaryGrid;

/// Immutable exemplar pattern whose local statistics the chain reproduces
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    grid: BinaryGrid,
}

impl Sample {
    /// Wrap an existing grid as a sample
    pub const fn new(grid: BinaryGrid) -> Self {
        Self { grid }
    }

    /// Build a sample from row-major booleans with explicit dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if the sample has zero area or `cells.len()` does not
    /// equal `width * height`
    pub fn from_cells(cells: &[bool], width: usize, height: usize) -> Result<Self> {
        BinaryGrid::from_cells(width, height, cells.iter().copied()).map(Self::new)
    }

    /// Build a sample from row-major numeric values, non-zero meaning set
    ///
    /// # Errors
    ///
    /// Returns an error if the sample has zero area or `values.len()` does
    /// not equal `width * height`
    pub fn from_values<T>(values: &[T], width: usize, height: usize) -> Result<Self>
    where
        T: Zero,
    {
        BinaryGrid::from_cells(width, height, values.iter().map(|v| !v.is_zero())).map(Self::new)
    }

    /// Build a square sample whose side is inferred from the buffer length
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is empty or its length is not a
    /// perfect square
    pub fn from_square_values<T>(values: &[T]) -> Result<Self>
    where
        T: Zero,
    {
        let side = integer_sqrt(values.len());
        if side * side != values.len() {
            return Err(invalid_source(&format!(
                "cannot infer a square size from {} values",
                values.len()
            )));
        }
        Self::from_values(values, side, side)
    }

    /// Build a sample from nested rows, outer index being the row
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the rows are empty, or the rows
    /// differ in length
    pub fn from_rows<T>(rows: &[Vec<T>]) -> Result<Self>
    where
        T: Zero,
    {
        let width = rows.first().map_or(0, Vec::len);
        if let Some(ragged) = rows.iter().position(|row| row.len() != width) {
            return Err(invalid_source(&format!(
                "row {ragged} has {} cells, expected {width}",
                rows.get(ragged).map_or(0, Vec::len)
            )));
        }

        let cells = rows
            .iter()
            .flat_map(|row| row.iter().map(|v| !v.is_zero()));
        BinaryGrid::from_cells(width, rows.len(), cells).map(Self::new)
    }

    /// Build a sample from a `(height, width)` array, non-zero meaning set
    ///
    /// # Errors
    ///
    /// Returns an error if the array has zero area
    pub fn from_array<T>(array: &Array2<T>) -> Result<Self>
    where
        T: Zero,
    {
        let (height, width) = array.dim();
        BinaryGrid::from_cells(width, height, array.iter().map(|v| !v.is_zero())).map(Self::new)
    }

    /// Underlying cell grid
    pub const fn grid(&self) -> &BinaryGrid {
        &self.grid
    }

    /// Sample width in cells
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// Sample height in cells
    pub const fn height(&self) -> usize {
        self.grid.height()
    }
}

impl From<BinaryGrid> for Sample {
    fn from(grid: BinaryGrid) -> Self {
        Self::new(grid)
    }
}

fn integer_sqrt(value: usize) -> usize {
    let mut root = (value as f64).sqrt() as usize;
    while root * root > value {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= value {
        root += 1;
    }
    root
}
