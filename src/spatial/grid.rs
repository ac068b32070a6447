//! Bit-packed binary grid with toroidal addressing
//!
//! Cells are stored row-major in a single `BitVec`, so every cell is
//! exactly one bit and can never hold anything but `true` or `false`.
//! All neighborhood reads wrap around both edges as on a torus.

use bitvec::prelude::*;
use ndarray::Array2;

use crate::io::error::{Result, invalid_source};

/// Rectangular grid of boolean cells with wrap-around reads
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryGrid {
    width: usize,
    height: usize,
    cells: BitVec,
}

impl BinaryGrid {
    /// Create a grid with every cell unset
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: bitvec![0; width * height],
        })
    }

    /// Build a grid from row-major cell values
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the number of values
    /// does not equal `width * height`
    pub fn from_cells<I>(width: usize, height: usize, cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = bool>,
    {
        Self::validate_dimensions(width, height)?;
        let cells: BitVec = cells.into_iter().collect();
        if cells.len() != width * height {
            return Err(invalid_source(&format!(
                "expected {} cells for a {width}x{height} grid, got {}",
                width * height,
                cells.len()
            )));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid by evaluating `f(x, y)` for every cell in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> bool,
    {
        Self::validate_dimensions(width, height)?;
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    fn validate_dimensions(width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(invalid_source(&format!(
                "grid must have a positive area, got {width}x{height}"
            )));
        }
        Ok(())
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Read a cell, returning `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).map(|bit| *bit)
    }

    /// Read a cell with toroidal wraparound on both axes
    pub fn get_wrapped(&self, x: isize, y: isize) -> bool {
        let (wx, wy) = self.wrap(x, y);
        self.cells
            .get(wy * self.width + wx)
            .is_some_and(|bit| *bit)
    }

    /// Map any coordinate onto the grid by wrapping both axes
    pub const fn wrap(&self, x: isize, y: isize) -> (usize, usize) {
        (
            x.rem_euclid(self.width as isize) as usize,
            y.rem_euclid(self.height as isize) as usize,
        )
    }

    /// Write a cell, ignoring coordinates outside the grid
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x < self.width && y < self.height {
            self.cells.set(y * self.width + x, value);
        }
    }

    /// Invert a cell in place, ignoring coordinates outside the grid
    pub fn toggle(&mut self, x: usize, y: usize) {
        if let Some(current) = self.get(x, y) {
            self.set(x, y, !current);
        }
    }

    /// Number of set cells
    pub fn count_set(&self) -> usize {
        self.cells.count_ones()
    }

    /// Packed row-major view of the cells
    pub fn as_bits(&self) -> &BitSlice {
        &self.cells
    }

    /// Cells as a flat row-major boolean buffer
    pub fn to_vec(&self) -> Vec<bool> {
        self.cells.iter().by_vals().collect()
    }

    /// Cells as a `(height, width)` array
    pub fn to_array(&self) -> Array2<bool> {
        Array2::from_shape_fn((self.height, self.width), |(row, col)| {
            self.get(col, row).unwrap_or(false)
        })
    }

    /// Copy with the whole grid rotated 90° clockwise
    #[must_use]
    pub fn rotated(&self) -> Self {
        let (width, height) = (self.height, self.width);
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| self.get(y, self.height - 1 - x).unwrap_or(false))
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    /// Copy with the whole grid mirrored left to right
    #[must_use]
    pub fn reflected(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| self.get(self.width - 1 - x, y).unwrap_or(false))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }
}
