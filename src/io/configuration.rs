//! Algorithm constants and runtime configuration defaults

/// Weight substituted for every pattern never observed in the sample
pub const WEIGHT_FLOOR: f64 = 0.1;

// A table holds 2^(n*n) weights, so n = 5 already means 2^25 entries
/// Largest supported neighborhood size
pub const MAX_NEIGHBORHOOD: usize = 5;

// Default values for configurable parameters
/// Default neighborhood (receptor) size
pub const DEFAULT_NEIGHBORHOOD: usize = 3;
/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 1.0;
/// Default number of full sweeps over the field
pub const DEFAULT_ITERATIONS: usize = 10;
/// Default side length of a square result
pub const DEFAULT_RESULT_SIZE: usize = 64;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Image conversion settings
/// Luma value at or above which a sample pixel counts as set
pub const LUMA_THRESHOLD: u8 = 128;
/// Color used for set cells in exported images
pub const SET_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Color used for unset cells in exported images
pub const UNSET_COLOR: [u8; 4] = [255, 255, 255, 255];

// Text rendering settings
/// Glyph printed for set cells
pub const SET_GLYPH: char = '#';
/// Glyph printed for unset cells
pub const UNSET_GLYPH: char = '.';

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Suffix identifying prefill images next to a sample
pub const PREFILL_SUFFIX: &str = "_pre";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 80;
/// Multiplier applied to the last frame's delay so the result lingers
pub const GIF_FINAL_FRAME_HOLD: u32 = 25;
