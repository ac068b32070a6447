/// Weight table memoization keyed by neighborhood size
pub mod cache;
/// Sample-owning synthesizer and its entry points
pub mod executor;
/// Single-site Metropolis sampler
pub mod sampler;
