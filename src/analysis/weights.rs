//! Pattern weight tables derived from a sample
//!
//! Every toroidal `n×n` window of the sample is counted together with its
//! full symmetry orbit. Patterns never seen get a small positive floor so
//! that every ratio the sampler forms stays finite and non-zero.

use crate::analysis::patterns::{orbit_indices, pattern_count};
use crate::io::configuration::{MAX_NEIGHBORHOOD, WEIGHT_FLOOR};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::sample::Sample;

/// Dense table of weights indexed by pattern index
///
/// Always holds exactly `2^(n*n)` strictly positive entries. Read-only once
/// built, so it can be shared freely between samplers.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightTable {
    neighborhood: usize,
    weights: Vec<f64>,
}

impl WeightTable {
    /// Build the table for neighborhood size `n` from a sample
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero or exceeds [`MAX_NEIGHBORHOOD`]
    pub fn build(sample: &Sample, n: usize) -> Result<Self> {
        let mut weights = count_patterns(sample, n)?;

        for weight in &mut weights {
            if *weight <= 0.0 {
                *weight = WEIGHT_FLOOR;
            }
        }

        Ok(Self {
            neighborhood: n,
            weights,
        })
    }

    /// Neighborhood size the table was built for
    pub const fn neighborhood(&self) -> usize {
        self.neighborhood
    }

    /// Number of entries, always `2^(n*n)`
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the table has no entries (never true for a built table)
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weight of a pattern index
    ///
    /// Indices outside the table read as the floor weight.
    pub fn weight(&self, index: usize) -> f64 {
        self.weights.get(index).copied().unwrap_or(WEIGHT_FLOOR)
    }

    /// Whether the pattern was observed at least once in the sample
    pub fn is_observed(&self, index: usize) -> bool {
        self.weight(index) > WEIGHT_FLOOR
    }

    /// All weights in index order
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }
}

/// Check that `n` is a usable neighborhood size
///
/// # Errors
///
/// Returns an error if `n` is zero or exceeds [`MAX_NEIGHBORHOOD`]
pub fn validate_neighborhood(n: usize) -> Result<()> {
    if n == 0 {
        return Err(invalid_parameter(
            "neighborhood",
            &n,
            &"neighborhood size must be a positive integer",
        ));
    }
    if n > MAX_NEIGHBORHOOD {
        return Err(invalid_parameter(
            "neighborhood",
            &n,
            &format!("a table of 2^(n*n) weights is only supported up to n = {MAX_NEIGHBORHOOD}"),
        ));
    }
    Ok(())
}

/// Raw symmetry-augmented pattern counts before the floor is applied
///
/// Each sample cell anchors one window and contributes eight counts, one per
/// symmetric variant, so the counts always sum to `8 * width * height`.
///
/// # Errors
///
/// Returns an error if `n` is zero or exceeds [`MAX_NEIGHBORHOOD`]
pub fn count_patterns(sample: &Sample, n: usize) -> Result<Vec<f64>> {
    validate_neighborhood(n)?;

    let grid = sample.grid();
    let mut counts = vec![0.0; pattern_count(n)];

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            for index in orbit_indices(grid, x as isize, y as isize, n) {
                if let Some(count) = counts.get_mut(index) {
                    *count += 1.0;
                }
            }
        }
    }

    Ok(counts)
}
