//! Mathematical utilities for the generator

/// Seeded random stream and per-pass seed derivation
pub mod random;
