use std::path::Path;

use crate::color::resolve::ColorPolicy;
use crate::color::spec::ColorSpec;
use crate::compose::fold::Fold;
use crate::foundation::core::{PixelRole, RoleTable, VARIANT_COUNT};
use crate::foundation::error::{BitSpriteError, BitSpriteResult};
use crate::template::segments::SeedMode;

/// User-facing sheet configuration, as read from JSON or assembled from CLI flags.
///
/// Values are taken as given; [`SheetConfig::resolve`] replaces invalid ones with defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    /// Horizontal fold.
    pub fold: Fold,
    /// Vertical fold.
    pub vert_fold: Fold,
    /// Pixel block size; values below 1 fall back to 1.
    pub upscale: i64,
    /// Tiles per sheet row; must divide 256, otherwise 16 is used.
    pub sheet_width: i64,
    /// Grow outlines around colored pixels.
    pub outline: bool,
    /// Color of set bits.
    pub bit_color: ColorSpec,
    /// Color of accent pixels.
    pub accent_color: ColorSpec,
    /// Color of fill pixels.
    pub fill_color: ColorSpec,
    /// Color of background pixels.
    pub background_color: ColorSpec,
    /// Color of outline pixels (including cleared bits).
    pub outline_color: ColorSpec,
    /// Use the YCbCr gradient and ignore every per-role color.
    pub legacy: bool,
    /// Also emit one image per variant.
    pub individuals: bool,
    /// Seed segment permutations from entropy; `false` uses a fixed seed.
    pub random_seed: bool,
    /// Explicit permutation seed; overrides `random_seed`.
    pub seed: Option<u64>,
    /// Worker threads; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            fold: Fold::None,
            vert_fold: Fold::None,
            upscale: 1,
            sheet_width: SheetConfig::DEFAULT_SHEET_WIDTH as i64,
            outline: true,
            bit_color: ColorSpec::Default,
            accent_color: ColorSpec::Default,
            fill_color: ColorSpec::Default,
            background_color: ColorSpec::Default,
            outline_color: ColorSpec::Default,
            legacy: false,
            individuals: false,
            random_seed: true,
            seed: None,
            threads: None,
        }
    }
}

impl SheetConfig {
    /// Sheet width used when the configured one does not divide 256.
    pub const DEFAULT_SHEET_WIDTH: usize = 16;

    /// Parse a JSON configuration document.
    pub fn from_json_str(s: &str) -> BitSpriteResult<Self> {
        serde_json::from_str(s).map_err(|e| BitSpriteError::serde(format!("parse config: {e}")))
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: &Path) -> BitSpriteResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| BitSpriteError::io(format!("read config '{}': {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    /// Pretty-printed JSON form.
    pub fn to_json_string_pretty(&self) -> BitSpriteResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BitSpriteError::serde(format!("serialize config: {e}")))
    }

    /// Per-role color specs; the delimiter slot is unused.
    pub fn color_specs(&self) -> RoleTable<ColorSpec> {
        RoleTable::from_fn(|role| match role {
            PixelRole::Bit => self.bit_color,
            PixelRole::Accent => self.accent_color,
            PixelRole::Fill => self.fill_color,
            PixelRole::Background => self.background_color,
            PixelRole::Outline => self.outline_color,
            PixelRole::Delimiter => ColorSpec::Default,
        })
    }

    /// Sanitize into the immutable settings consumed by the renderer.
    pub fn resolve(&self) -> RenderSettings {
        let sheet_width = match usize::try_from(self.sheet_width) {
            Ok(w) if (1..=VARIANT_COUNT).contains(&w) && VARIANT_COUNT % w == 0 => w,
            _ => {
                tracing::warn!(
                    sheet_width = self.sheet_width,
                    fallback = Self::DEFAULT_SHEET_WIDTH,
                    "sheet width must divide 256, using default"
                );
                Self::DEFAULT_SHEET_WIDTH
            }
        };

        let upscale = match usize::try_from(self.upscale) {
            Ok(u) if u >= 1 => u,
            _ => {
                tracing::warn!(upscale = self.upscale, "upscale must be >= 1, using 1");
                1
            }
        };

        let policy = if self.legacy {
            ColorPolicy::LegacyGradient
        } else {
            ColorPolicy::palette(&self.color_specs())
        };

        let seed = match (self.seed, self.random_seed) {
            (Some(s), _) => SeedMode::Fixed(s),
            (None, true) => SeedMode::Entropy,
            (None, false) => SeedMode::deterministic(),
        };

        RenderSettings {
            fold: self.fold,
            vert_fold: self.vert_fold,
            upscale,
            sheet_width,
            outline: self.outline,
            policy,
            seed,
            threads: self.threads,
        }
    }
}

/// Validated, immutable render settings shared by every variant task.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    /// Horizontal fold.
    pub fold: Fold,
    /// Vertical fold.
    pub vert_fold: Fold,
    /// Pixel block size (>= 1).
    pub upscale: usize,
    /// Tiles per sheet row (divides 256).
    pub sheet_width: usize,
    /// Grow outlines around colored pixels.
    pub outline: bool,
    /// Run-wide color policy.
    pub policy: ColorPolicy,
    /// Segment permutation seeding.
    pub seed: SeedMode,
    /// Worker threads; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        SheetConfig::default().resolve()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
