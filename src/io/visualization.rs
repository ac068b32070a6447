//! Frame capture and GIF generation for sweep-by-sweep visualization

use crate::io::configuration::{GIF_FINAL_FRAME_HOLD, SET_COLOR, UNSET_COLOR};
use crate::io::error::{AlgorithmError, Result};
use crate::io::image::grid_to_image;
use crate::spatial::grid::BinaryGrid;
use image::{Delay, Frame};
use std::path::Path;

/// Records field snapshots between sweeps
///
/// Snapshots are stored bit-packed and only rendered to images on export.
pub struct VisualizationCapture {
    pub(crate) frames: Vec<BinaryGrid>,
    set_color: [u8; 4],
    unset_color: [u8; 4],
}

impl Default for VisualizationCapture {
    fn default() -> Self {
        Self::new(0)
    }
}

impl VisualizationCapture {
    /// Create a capture expecting roughly `expected_frames` snapshots
    pub fn new(expected_frames: usize) -> Self {
        Self {
            frames: Vec::with_capacity(expected_frames),
            set_color: SET_COLOR,
            unset_color: UNSET_COLOR,
        }
    }

    /// Override the colors used for set and unset cells
    #[must_use]
    pub fn with_colors(mut self, set_color: [u8; 4], unset_color: [u8; 4]) -> Self {
        self.set_color = set_color;
        self.unset_color = unset_color;
        self
    }

    /// Record the current state of a field
    pub fn record(&mut self, grid: &BinaryGrid) {
        self.frames.push(grid.clone());
    }

    /// Returns all recorded snapshots
    pub fn frames(&self) -> &[BinaryGrid] {
        &self.frames
    }

    /// Returns the number of recorded snapshots
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the recorded snapshots as an animated GIF
    ///
    /// The last frame is held longer so the final texture stays visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No snapshots were recorded
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(AlgorithmError::InvalidSourceData {
                reason: "No field snapshots captured for visualization".to_string(),
            });
        }

        let frames = self.render_frames(frame_delay_ms);

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| AlgorithmError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| AlgorithmError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn render_frames(&self, delay_ms: u32) -> Vec<Frame> {
        let last = self.frames.len().saturating_sub(1);
        self.frames
            .iter()
            .enumerate()
            .map(|(i, grid)| {
                let delay = if i == last {
                    delay_ms.saturating_mul(GIF_FINAL_FRAME_HOLD)
                } else {
                    delay_ms
                };
                Frame::from_parts(
                    grid_to_image(grid, self.set_color, self.unset_color),
                    0,
                    0,
                    Delay::from_numer_denom_ms(delay, 1),
                )
            })
            .collect()
    }
}
