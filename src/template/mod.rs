//! Template intake.
//!
//! Decoded template pixels are classified into [`PixelRole`](crate::PixelRole)s once per run, and
//! every delimiter segment receives its own permutation of the 256 variant values.

/// Exact-color role classification of template pixels.
pub mod classify;
/// Per-segment variant permutations.
pub mod segments;
