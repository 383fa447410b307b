//! Canvas composition.
//!
//! Maps output coordinates back into the template through the optional mirrored folds, expands
//! each source pixel into an `upscale x upscale` block and writes it into the variant's own tile of
//! the composite (and its individual canvas, when one is requested).

/// Rasterization of one variant into its tile.
pub mod canvas;
/// Fold geometry, sheet layout and segment tracking.
pub mod fold;
