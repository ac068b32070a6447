//! Starting fields loaded from prefill images
//!
//! A prefill image next to a sample replaces the random initial noise, so a
//! run can continue from a hand-drawn or previously generated layout.

use crate::algorithm::executor::Dimensions;
use crate::io::configuration::PREFILL_SUFFIX;
use crate::io::error::{Result, invalid_source};
use crate::io::image::load_sample_grid;
use crate::spatial::field::Field;
use std::path::{Path, PathBuf};

/// Caller-supplied starting field
#[derive(Debug, Clone)]
pub struct PrefillData {
    /// Field decoded from the prefill image
    pub field: Field,
    /// Image the field was read from
    pub source: PathBuf,
}

impl PrefillData {
    /// Decode a prefill PNG into a starting field
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The PNG file cannot be loaded
    /// - The image size differs from `expected` when one is given
    pub fn from_png(path: &Path, expected: Option<Dimensions>) -> Result<Self> {
        let grid = load_sample_grid(path)?;

        if let Some(dimensions) = expected {
            if grid.width() != dimensions.width || grid.height() != dimensions.height {
                return Err(invalid_source(&format!(
                    "prefill '{}' is {}x{}, expected {}x{}",
                    path.display(),
                    grid.width(),
                    grid.height(),
                    dimensions.width,
                    dimensions.height
                )));
            }
        }

        Ok(Self {
            field: Field::new(grid),
            source: path.to_path_buf(),
        })
    }

    /// Size of the starting field
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.field.width(), self.field.height())
    }

    /// Consume the prefill, returning the starting field
    pub fn into_field(self) -> Field {
        self.field
    }
}

/// Path of the prefill image belonging to a sample (`<stem>_pre.png`)
pub fn prefill_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let prefill_name = format!("{}{PREFILL_SUFFIX}.png", stem.to_string_lossy());

    input_path
        .parent()
        .map_or_else(|| PathBuf::from(&prefill_name), |parent| parent.join(&prefill_name))
}
