//! Per-variant role rewriting.
//!
//! Both passes are pure functions of their inputs and own their output buffer, so they run
//! concurrently across variants without coordination.

/// Neighbor-based outline promotion.
pub mod outline;
/// Bit-pattern encoding of a variant into a working image.
pub mod variant;
