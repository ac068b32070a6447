//! Binary texture synthesis from a small sample using a Markov chain over local neighborhoods
//!
//! The sample's toroidal `n×n` patterns, augmented by their eight rotations and
//! reflections, form a weight table. A field of random noise is then evolved by
//! single-cell Metropolis flips until its local statistics resemble the sample.

#![forbid(unsafe_code)]

/// Weight caching, the Metropolis sampler and the synthesizer entry points
pub mod algorithm;
/// Pattern indexing, symmetry enumeration and weight tables
pub mod analysis;
/// Input/output adapters, configuration and error handling
pub mod io;
/// Random sources and acceptance probabilities
pub mod math;
/// Bit-packed toroidal grids, samples and fields
pub mod spatial;

pub use algorithm::executor::{ConvChain, Dimensions, GenerationConfig};
pub use io::error::{AlgorithmError, Result};
