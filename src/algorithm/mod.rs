/// Drawing primitives emitted by synthesis
pub mod commands;
/// Per-pass parameters, modes and validation
pub mod config;
/// Validated pass running synthesis then rasterization
pub mod executor;
/// Claimed-cell tracking for merge-enabled fill
pub mod occupancy;
/// Mirrored split-line collection and separation filtering
pub mod symmetry;
/// Mode dispatch producing draw commands from a container
pub mod synthesizer;
