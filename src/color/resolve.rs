use std::sync::Arc;

use palette::{FromColor, Lch, Mix, Srgb};

use crate::color::spec::ColorSpec;
use crate::foundation::core::{PixelRole, RoleTable, Rgba8, VARIANT_COUNT};

/// Concrete color of every role for one segment of one variant.
pub type ColorTable = RoleTable<Rgba8>;

const TRANSPARENT: Rgba8 = image::Rgba([0, 0, 0, 0]);
const BLACK: Rgba8 = image::Rgba([0, 0, 0, 255]);

/// Built-in color of a role when its spec is [`ColorSpec::Default`].
pub fn default_color(role: PixelRole) -> Rgba8 {
    match role {
        PixelRole::Bit => image::Rgba([255, 255, 255, 255]),
        PixelRole::Accent => image::Rgba([85, 85, 85, 255]),
        PixelRole::Fill => image::Rgba([170, 170, 170, 255]),
        PixelRole::Outline => BLACK,
        PixelRole::Background | PixelRole::Delimiter => TRANSPARENT,
    }
}

/// Color source of a single role.
#[derive(Clone, Debug, PartialEq)]
pub enum RoleColor {
    /// Same color for every variant.
    Solid(Rgba8),
    /// 256 precomputed colors indexed by resolution number.
    Blend(Arc<[Rgba8]>),
}

impl RoleColor {
    /// Resolve a spec, falling back to `default` for [`ColorSpec::Default`].
    pub fn from_spec(spec: ColorSpec, default: Rgba8) -> Self {
        match spec {
            ColorSpec::Default => Self::Solid(default),
            ColorSpec::Solid(c) => Self::Solid(c),
            ColorSpec::Blend(from, to) => Self::Blend(blend_colors(from, to).into()),
        }
    }

    /// Color for `resolution`.
    pub fn at(&self, resolution: u8) -> Rgba8 {
        match self {
            Self::Solid(c) => *c,
            Self::Blend(list) => list[usize::from(resolution)],
        }
    }
}

/// Run-wide coloring policy, decided once from the configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorPolicy {
    /// Per-role solid colors or blends.
    Palette(RoleTable<RoleColor>),
    /// Hue derived from the resolution number through YCbCr; per-role specs are ignored.
    LegacyGradient,
}

impl Default for ColorPolicy {
    fn default() -> Self {
        Self::palette(&RoleTable::from_fn(|_| ColorSpec::Default))
    }
}

impl ColorPolicy {
    /// Palette policy from per-role specs. The `Delimiter` slot mirrors `Background`.
    pub fn palette(specs: &RoleTable<ColorSpec>) -> Self {
        Self::Palette(RoleTable::from_fn(|role| {
            let role = match role {
                PixelRole::Delimiter => PixelRole::Background,
                other => other,
            };
            RoleColor::from_spec(specs[role], default_color(role))
        }))
    }

    /// Color table for one segment whose resolution number is `resolution`.
    pub fn table(&self, resolution: u8) -> ColorTable {
        match self {
            Self::Palette(colors) => colors.map(|_, c| c.at(resolution)),
            Self::LegacyGradient => {
                let cb = resolution.wrapping_add(128);
                let cr = resolution;
                RoleTable::from_fn(|role| match role {
                    PixelRole::Bit => ycbcr_to_rgba(128, cb, cr),
                    PixelRole::Accent => ycbcr_to_rgba(64, cb, cr),
                    PixelRole::Fill => ycbcr_to_rgba(192, cb, cr),
                    PixelRole::Outline => BLACK,
                    PixelRole::Background | PixelRole::Delimiter => TRANSPARENT,
                })
            }
        }
    }

    /// One table per color segment, in segment order.
    pub fn tables(&self, resolutions: &[u8]) -> Vec<ColorTable> {
        resolutions.iter().map(|&r| self.table(r)).collect()
    }
}

/// 256 colors from `from` to `to`, interpolated in CIE LCh along the shorter hue arc.
pub fn blend_colors(from: Rgba8, to: Rgba8) -> Vec<Rgba8> {
    fn to_lch(c: Rgba8) -> Lch {
        Lch::from_color(Srgb::new(c[0], c[1], c[2]).into_format::<f32>())
    }

    let a = to_lch(from);
    let b = to_lch(to);
    let last = (VARIANT_COUNT - 1) as f32;

    (0..VARIANT_COUNT)
        .map(|k| {
            let t = k as f32 / last;
            let rgb: Srgb = Srgb::from_color(a.mix(b, t));
            let rgb: Srgb<u8> = rgb.into_format();
            let alpha = f32::from(from[3]) + (f32::from(to[3]) - f32::from(from[3])) * t;
            image::Rgba([rgb.red, rgb.green, rgb.blue, alpha.round() as u8])
        })
        .collect()
}

/// JFIF YCbCr to opaque RGB using 16.16 fixed point, clamped per channel.
fn ycbcr_to_rgba(y: u8, cb: u8, cr: u8) -> Rgba8 {
    let yy = i32::from(y) * 0x10101;
    let cb = i32::from(cb) - 128;
    let cr = i32::from(cr) - 128;

    let clamp = |v: i32| (v >> 16).clamp(0, 255) as u8;
    let r = clamp(yy + 91881 * cr);
    let g = clamp(yy - 22554 * cb - 46802 * cr);
    let b = clamp(yy + 116130 * cb);
    image::Rgba([r, g, b, 255])
}

#[cfg(test)]
#[path = "../../tests/unit/color/resolve.rs"]
mod tests;
