//! Mathematical utilities for the sampler

/// Metropolis acceptance and temperature annealing
pub mod probability;
/// Uniform random sources
pub mod random;
