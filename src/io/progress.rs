//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Progress of one file: display name, completed sweeps, total sweeps
type FileState = (String, usize, usize);

/// Coordinates progress display for batch operations
///
/// Automatically switches between individual progress bars (for small batches)
/// and an extra batch progress bar (for large batches) based on file count.
/// Individual bars always show the most recently started files.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_states: Vec<FileState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static SWEEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Samples: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(SWEEP_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Configure progress display for a new file
    pub fn start_file(&mut self, index: usize, path: &Path, sweeps: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = (display_name, 0, sweeps);
        }
        self.update_bars();
    }

    /// Report the number of completed sweeps for a file
    pub fn update_sweep(&mut self, index: usize, sweep: usize) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.1 = sweep;
        }
        self.update_bars();
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = state.2;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All samples processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Number of files that have been started
    pub fn started_files(&self) -> usize {
        self.file_states
            .iter()
            .filter(|(name, _, _)| !name.is_empty())
            .count()
    }

    /// Show the most recently started files on the available bars
    fn update_bars(&self) {
        let active: Vec<&FileState> = self
            .file_states
            .iter()
            .filter(|(name, _, _)| !name.is_empty())
            .collect();

        let start = active.len().saturating_sub(self.file_bars.len());
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar_index, bar) in self.file_bars.iter().enumerate() {
            if let Some((name, current, total)) = visible.get(bar_index).copied() {
                bar.set_length(*total as u64);
                bar.set_position(*current as u64);
                let width = total.to_string().len();
                bar.set_message(format!("{current:>width$}/{total}"));
                bar.set_prefix(name.clone());
            } else {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
