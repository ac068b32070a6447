//! Command-line interface for batch texture synthesis from PNG samples

use crate::algorithm::executor::{ConvChain, Dimensions, GenerationConfig};
use crate::io::configuration::{
    DEFAULT_ITERATIONS, DEFAULT_NEIGHBORHOOD, DEFAULT_RESULT_SIZE, DEFAULT_SEED,
    DEFAULT_TEMPERATURE, GIF_FRAME_DELAY_MS, OUTPUT_SUFFIX, PREFILL_SUFFIX,
};
use crate::io::error::{Result, invalid_path};
use crate::io::glyphs;
use crate::io::image::{export_grid_as_png, load_sample_grid};
use crate::io::prefill::{PrefillData, prefill_path};
use crate::io::progress::ProgressManager;
use crate::io::visualization::VisualizationCapture;
use crate::math::random::RandomSource;
use crate::spatial::{Field, Sample};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "convchain")]
#[command(
    author,
    version,
    about = "Synthesize binary textures resembling a PNG sample"
)]
/// Command-line arguments for the texture synthesis tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG sample or directory of samples to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of sweeps, each proposing width × height flips
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Neighborhood (receptor) size
    #[arg(short = 'n', long, default_value_t = DEFAULT_NEIGHBORHOOD)]
    pub neighborhood: usize,

    /// Sampling temperature; below 1 sharpens, above 1 adds noise
    #[arg(short, long, default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f64,

    /// Result width in pixels (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Result height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Record one GIF frame per sweep
    #[arg(short, long)]
    pub visualize: bool,

    /// Print the result to stdout as text
    #[arg(long)]
    pub print: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(long)]
    pub no_skip: bool,

    /// Start from a prefill image if available (looks for <input>_pre.png)
    #[arg(short, long)]
    pub prefill: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Result size from the width and height flags
    pub fn dimensions(&self) -> Dimensions {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Dimensions::new(w, h),
            (Some(w), None) => Dimensions::square(w),
            (None, Some(h)) => Dimensions::square(h),
            (None, None) => Dimensions::square(DEFAULT_RESULT_SIZE),
        }
    }

    /// Generation parameters assembled from the flags
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            neighborhood: self.neighborhood,
            temperature: self.temperature,
            iterations: self.iterations,
            dimensions: self.dimensions(),
        }
    }
}

/// Orchestrates batch processing of PNG samples with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_png(target) {
                return Err(invalid_path(target, "Target file must be a PNG image"));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if is_png(&path) && !is_derived_image(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_path(target, "Target must be a PNG file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for user feedback for missing prefill and text output
    #[allow(clippy::print_stderr, clippy::print_stdout)]
    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let config = self.cli.generation_config();
        let dimensions = config.dimensions;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, config.iterations);
        }

        let sample = Sample::new(load_sample_grid(input_path)?);
        let mut chain = ConvChain::new(sample);
        let mut rng = RandomSource::new(self.cli.seed);

        let mut field = self.starting_field(input_path, dimensions)?;
        if field.is_none() && self.cli.prefill && !self.cli.quiet {
            eprintln!(
                "No prefill found at: {} (continuing from noise)",
                prefill_path(input_path).display()
            );
        }

        let mut capture = self
            .cli
            .visualize
            .then(|| VisualizationCapture::new(config.iterations + 1));

        if let Some(ref mut capture) = capture {
            let initial = match field {
                Some(ref field) => field.clone(),
                None => Field::random(dimensions.width, dimensions.height, &mut rng)?,
            };
            capture.record(initial.grid());
            field = Some(initial);
        }

        // Sweep by sweep so progress and frames can observe the field
        for sweep in 1..=config.iterations {
            let evolved = chain.iterate(
                field.take(),
                dimensions,
                config.neighborhood,
                config.temperature,
                None,
                &mut rng,
            )?;

            if let Some(ref mut capture) = capture {
                capture.record(evolved.grid());
            }
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_sweep(index, sweep);
            }
            field = Some(evolved);
        }

        let field = match field {
            Some(field) => field,
            None => chain.iterate(
                None,
                dimensions,
                config.neighborhood,
                config.temperature,
                Some(0),
                &mut rng,
            )?,
        };

        export_grid_as_png(field.grid(), &Self::get_output_path(input_path))?;

        if let Some(ref capture) = capture {
            capture.export_gif(
                &Self::get_visualization_path(input_path),
                GIF_FRAME_DELAY_MS,
            )?;
        }

        if self.cli.print {
            print!("{}", glyphs::render(field.grid()));
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn starting_field(&self, input_path: &Path, dimensions: Dimensions) -> Result<Option<Field>> {
        if !self.cli.prefill {
            return Ok(None);
        }

        let path = prefill_path(input_path);
        if !path.exists() {
            return Ok(None);
        }

        PrefillData::from_png(&path, Some(dimensions)).map(|prefill| Some(prefill.into_field()))
    }

    /// Path of the generated PNG for a sample (`<stem>_result.png`)
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, &format!("{OUTPUT_SUFFIX}.png"))
    }

    /// Path of the sweep animation for a sample (`<stem>_visualization.gif`)
    pub fn get_visualization_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, "_visualization.gif")
    }

    fn sibling_path(input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("png")
}

// Outputs and prefills living next to samples are not samples themselves
fn is_derived_image(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX) || stem.ends_with(PREFILL_SUFFIX))
}
