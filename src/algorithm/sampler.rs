//! Single-site Metropolis sampling over a toroidal field
//!
//! A proposal picks one cell uniformly and flips it with probability
//! `min(1, q^(1/T))`, where `q` is the ratio of the unnormalized model
//! probability after versus before the flip. Only the windows containing
//! the cell change under the flip, so `q` is a product over those windows
//! alone and each proposal costs O(n²) window reads regardless of field size.

use std::ops::Range;

use crate::analysis::patterns::cell_bit;
use crate::analysis::weights::WeightTable;
use crate::io::error::{AlgorithmError, Result};
use crate::math::probability::metropolis_accepts;
use crate::math::random::UniformSource;
use crate::spatial::field::Field;
use crate::spatial::grid::BinaryGrid;

/// Outcome of a single proposal
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Proposal {
    /// Column of the proposed cell
    pub x: usize,
    /// Row of the proposed cell
    pub y: usize,
    /// Untempered acceptance ratio of flipping the cell
    pub ratio: f64,
    /// Whether the flip was applied
    pub accepted: bool,
}

/// Metropolis sampler bound to one weight table and temperature
///
/// Holds no field state of its own; every call mutates the field it is
/// given. Proposals on one field must run sequentially.
#[derive(Clone, Copy, Debug)]
pub struct FieldSampler<'a> {
    weights: &'a WeightTable,
    temperature: f64,
}

impl<'a> FieldSampler<'a> {
    /// Create a sampler for neighborhood size `n`
    ///
    /// # Errors
    ///
    /// Returns an error if `weights` was built for a neighborhood size other
    /// than `n`
    pub fn new(weights: &'a WeightTable, n: usize, temperature: f64) -> Result<Self> {
        if weights.neighborhood() != n {
            return Err(AlgorithmError::NeighborhoodMismatch {
                expected: weights.neighborhood(),
                actual: n,
            });
        }

        Ok(Self {
            weights,
            temperature,
        })
    }

    /// Neighborhood size the sampler reads windows with
    pub const fn neighborhood(&self) -> usize {
        self.weights.neighborhood()
    }

    /// Sampling temperature
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Ratio of model weight after versus before flipping `(x, y)`
    ///
    /// Multiplies `weight[flipped] / weight[current]` over every window that
    /// contains the cell. The flipped index is derived from the current one
    /// by adding or removing the cell's bits rather than by copying the field.
    /// On fields narrower than the window the cell can appear in a window
    /// more than once; all of its bits flip together.
    pub fn acceptance_ratio(&self, field: &Field, x: usize, y: usize) -> f64 {
        let grid = field.grid();
        let n = self.neighborhood();
        let current = grid.get(x, y).unwrap_or(false);

        let mut ratio = 1.0;
        for anchor_y in anchor_range(y, n, grid.height()) {
            for anchor_x in anchor_range(x, n, grid.width()) {
                let (index, mask) = window_with_mask(grid, anchor_x, anchor_y, n, (x, y));
                let flipped = if current { index - mask } else { index + mask };
                ratio *= self.weights.weight(flipped) / self.weights.weight(index);
            }
        }
        ratio
    }

    /// Propose flipping one uniformly chosen cell
    pub fn step<R>(&self, field: &mut Field, rng: &mut R) -> Proposal
    where
        R: UniformSource + ?Sized,
    {
        let cell = rng.next_index(field.area());
        let x = cell % field.width();
        let y = cell / field.width();

        let ratio = self.acceptance_ratio(field, x, y);
        let accepted = metropolis_accepts(ratio, self.temperature, rng);
        if accepted {
            field.flip(x, y);
        }

        Proposal {
            x,
            y,
            ratio,
            accepted,
        }
    }

    /// Run exactly `proposals` steps, returning how many flips were accepted
    pub fn run_proposals<R>(&self, field: &mut Field, proposals: usize, rng: &mut R) -> usize
    where
        R: UniformSource + ?Sized,
    {
        (0..proposals)
            .filter(|_| self.step(field, rng).accepted)
            .count()
    }

    /// Run `iterations` sweeps of `width * height` proposals each
    ///
    /// Cells are drawn with replacement, so a sweep visits each cell once
    /// only on average. Returns the number of accepted flips.
    pub fn run<R>(&self, field: &mut Field, iterations: usize, rng: &mut R) -> usize
    where
        R: UniformSource + ?Sized,
    {
        let proposals = iterations.saturating_mul(field.area());
        self.run_proposals(field, proposals, rng)
    }
}

// Anchors of the distinct windows covering `coordinate` along one axis
fn anchor_range(coordinate: usize, n: usize, size: usize) -> Range<isize> {
    if n >= size {
        0..size as isize
    } else {
        let end = coordinate as isize + 1;
        end - n as isize..end
    }
}

// Window index plus the bits at which the window reads `target`
fn window_with_mask(
    grid: &BinaryGrid,
    anchor_x: isize,
    anchor_y: isize,
    n: usize,
    target: (usize, usize),
) -> (usize, usize) {
    let mut index = 0;
    let mut mask = 0;

    for dy in 0..n {
        for dx in 0..n {
            let cell = grid.wrap(anchor_x + dx as isize, anchor_y + dy as isize);
            let bit = cell_bit(dx, dy, n);
            if grid.get(cell.0, cell.1).unwrap_or(false) {
                index |= bit;
            }
            if cell == target {
                mask |= bit;
            }
        }
    }

    (index, mask)
}
