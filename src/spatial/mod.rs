//! Spatial data structures
//!
//! This module contains the grid types the chain operates on:
//! - Bit-packed toroidal grid storage
//! - The immutable sample and its input adapters
//! - The mutable field being synthesized

/// Mutable output field
pub mod field;
/// Bit-packed grid with toroidal addressing
pub mod grid;
/// Sample construction from flat, nested and array inputs
pub mod sample;

pub use field::Field;
pub use grid::BinaryGrid;
pub use sample::Sample;
