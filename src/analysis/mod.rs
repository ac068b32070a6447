//! Pattern analysis of the sample

/// Pattern indexing and symmetry enumeration
pub mod patterns;
/// Weight table construction
pub mod weights;
