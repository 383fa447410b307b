//! Role colors.
//!
//! [`ColorSpec`](spec::ColorSpec) is what users write, [`ColorPolicy`](resolve::ColorPolicy) is the
//! run-wide decision derived from it, and a [`ColorTable`](resolve::ColorTable) is the concrete
//! role-to-pixel mapping for one segment of one variant.

/// Resolution of role colors per variant and segment.
pub mod resolve;
/// User-facing color specifications (`#RRGGBB` or `#RRGGBB:#RRGGBB`).
pub mod spec;
