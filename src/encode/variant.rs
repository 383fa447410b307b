use crate::foundation::core::{PixelRole, Variant};
use crate::foundation::error::{BitSpriteError, BitSpriteResult};
use crate::template::classify::Template;
use crate::template::segments::SegmentPermutations;

/// Role buffer for one variant: same shape as the template, with `Bit` slots resolved to
/// `Bit`/`Outline` and no delimiters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkingImage {
    width: usize,
    height: usize,
    roles: Vec<PixelRole>,
}

impl WorkingImage {
    /// Template width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Template height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major roles.
    pub fn roles(&self) -> &[PixelRole] {
        &self.roles
    }

    pub(crate) fn roles_mut(&mut self) -> &mut [PixelRole] {
        &mut self.roles
    }

    /// Role at row-major `index`.
    pub fn role(&self, index: usize) -> PixelRole {
        self.roles[index]
    }
}

/// Encode `variant` into the template's bit pixels.
///
/// Bits are consumed in row-major order, least significant first, wrapping every 8 bits. Crossing
/// a delimiter restarts the bit counter and switches the resolution number to that segment's
/// permutation entry; before the first delimiter the variant value itself is used.
pub fn encode_variant(
    template: &Template,
    perms: &SegmentPermutations,
    variant: Variant,
) -> BitSpriteResult<WorkingImage> {
    if perms.len() != template.delimiters().len() {
        return Err(BitSpriteError::validation(format!(
            "{} segment permutations for {} delimiters",
            perms.len(),
            template.delimiters().len()
        )));
    }

    let mut bits_read = 0usize;
    let mut resolution = variant.0;
    let mut roles = Vec::with_capacity(template.roles().len());

    for (idx, &role) in template.roles().iter().enumerate() {
        if let Some(segment) = template.delimiter_at(idx) {
            bits_read = 0;
            resolution = perms.resolution(segment, variant);
        }

        roles.push(match role {
            PixelRole::Bit => {
                let set = (resolution >> (bits_read % 8)) & 1 == 1;
                bits_read += 1;
                if set {
                    PixelRole::Bit
                } else {
                    PixelRole::Outline
                }
            }
            PixelRole::Delimiter => PixelRole::Background,
            other => other,
        });
    }

    Ok(WorkingImage {
        width: template.width(),
        height: template.height(),
        roles,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/variant.rs"]
mod tests;
