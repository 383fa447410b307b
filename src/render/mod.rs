//! Sheet rendering.
//!
//! Fans the 256 variants out over a rayon pool, each task writing only its own composite tile and
//! handing its individual canvas to an optional [`VariantSink`](sink::VariantSink).

/// Parallel sheet pipeline.
pub mod pipeline;
/// Consumers of individual variant canvases.
pub mod sink;
