//! BitSprite turns one annotated template image into 256 bit-encoded sprite variants and tiles
//! them into a single sprite sheet.
//!
//! The pipeline is:
//!
//! - Classify a template into pixel roles ([`load_template`], [`classify_template`])
//! - Resolve a [`SheetConfig`] into immutable [`RenderSettings`]
//! - Render the sheet with [`render_sheet`], optionally streaming every variant into a
//!   [`VariantSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Role colors and their per-variant resolution.
pub mod color;
/// Canvas folding, upscaling and tile placement.
pub mod compose;
/// JSON configuration and its sanitized render settings.
pub mod config;
/// Per-variant bit encoding and outline inference.
pub mod encode;
/// Parallel sheet rendering and variant sinks.
pub mod render;
/// Template classification and color segments.
pub mod template;

pub use crate::foundation::core::{PixelRole, RoleTable, Rgba8, VARIANT_COUNT, Variant};
pub use crate::foundation::error::{BitSpriteError, BitSpriteResult};

pub use crate::color::resolve::{ColorPolicy, ColorTable, RoleColor};
pub use crate::color::spec::ColorSpec;
pub use crate::compose::fold::{CanvasGeometry, Fold, SheetLayout};
pub use crate::config::{RenderSettings, SheetConfig};
pub use crate::render::pipeline::{SpriteSheet, render_sheet, render_sheet_with_permutations};
pub use crate::render::sink::{InMemorySink, PngDirSink, VariantSink};
pub use crate::template::classify::{Template, classify_template, decode_template, load_template};
pub use crate::template::segments::{SeedMode, SegmentPermutations};
