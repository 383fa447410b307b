use std::path::Path;

use image::RgbaImage;

use crate::foundation::core::{PixelRole, Rgba8};
use crate::foundation::error::{BitSpriteError, BitSpriteResult};

const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];
const MAGENTA: [u8; 4] = [255, 0, 255, 255];

/// A classified template: one role per pixel (row-major) plus the delimiter positions.
///
/// Delimiter pixels are stored as [`PixelRole::Background`]; their row-major indices are kept
/// separately, in increasing order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    width: usize,
    height: usize,
    roles: Vec<PixelRole>,
    delimiters: Vec<usize>,
}

impl Template {
    /// Build a template from a row-major role buffer.
    ///
    /// Any [`PixelRole::Delimiter`] entry is recorded as a delimiter position and replaced by
    /// `Background`.
    pub fn from_roles(
        width: usize,
        height: usize,
        mut roles: Vec<PixelRole>,
    ) -> BitSpriteResult<Self> {
        if width == 0 || height == 0 {
            return Err(BitSpriteError::validation(format!(
                "template must be non-empty, got {width}x{height}"
            )));
        }
        if roles.len() != width * height {
            return Err(BitSpriteError::validation(format!(
                "template role buffer has {} entries, expected {}x{} = {}",
                roles.len(),
                width,
                height,
                width * height
            )));
        }

        let mut delimiters = Vec::new();
        for (idx, role) in roles.iter_mut().enumerate() {
            if *role == PixelRole::Delimiter {
                delimiters.push(idx);
                *role = PixelRole::Background;
            }
        }

        Ok(Self {
            width,
            height,
            roles,
            delimiters,
        })
    }

    /// Template width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Template height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major roles, delimiter-free.
    pub fn roles(&self) -> &[PixelRole] {
        &self.roles
    }

    /// Row-major indices of the delimiter pixels, ascending.
    pub fn delimiters(&self) -> &[usize] {
        &self.delimiters
    }

    /// Ordinal of the delimiter sitting at `index`, if there is one.
    pub fn delimiter_at(&self, index: usize) -> Option<usize> {
        self.delimiters.binary_search(&index).ok()
    }

    /// Number of color segments: one per delimiter, or a single implicit segment.
    pub fn segment_count(&self) -> usize {
        self.delimiters.len().max(1)
    }

    /// Number of `Bit` pixels in the template.
    pub fn bit_count(&self) -> usize {
        self.roles.iter().filter(|&&r| r == PixelRole::Bit).count()
    }
}

/// Map one straight-alpha pixel to its role. Only exact matches count.
pub fn role_for_pixel(px: Rgba8) -> PixelRole {
    match px.0 {
        RED => PixelRole::Outline,
        GREEN => PixelRole::Accent,
        BLUE => PixelRole::Fill,
        BLACK => PixelRole::Bit,
        MAGENTA => PixelRole::Delimiter,
        _ => PixelRole::Background,
    }
}

/// Classify every pixel of a decoded template.
pub fn classify_template(img: &RgbaImage) -> BitSpriteResult<Template> {
    let (w, h) = img.dimensions();
    let roles = img.pixels().map(|&px| role_for_pixel(px)).collect();
    let template = Template::from_roles(w as usize, h as usize, roles)?;

    tracing::debug!(
        width = template.width,
        height = template.height,
        bits = template.bit_count(),
        delimiters = template.delimiters.len(),
        "classified template"
    );
    Ok(template)
}

/// Decode an encoded template image (any format `image` understands) and classify it.
///
/// Pixels are normalized to straight-alpha RGBA8 before matching.
pub fn decode_template(bytes: &[u8]) -> BitSpriteResult<Template> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| BitSpriteError::decode(format!("decode template image: {e}")))?;
    classify_template(&img.to_rgba8())
}

/// Read, decode and classify the template at `path`.
pub fn load_template(path: &Path) -> BitSpriteResult<Template> {
    let bytes = std::fs::read(path)
        .map_err(|e| BitSpriteError::io(format!("read template '{}': {e}", path.display())))?;
    decode_template(&bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/template/classify.rs"]
mod tests;
