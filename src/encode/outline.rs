use crate::encode::variant::WorkingImage;
use crate::foundation::core::PixelRole;

/// Promote every `Background` pixel that touches a colored pixel (`Bit`, `Accent`, `Fill`) through
/// one of its four edges to `Outline`.
///
/// Promoted pixels never act as sources, so the result does not depend on scan order and a second
/// pass is a no-op.
pub fn infer_outlines(image: &mut WorkingImage) {
    let width = image.width();
    let height = image.height();
    let roles = image.roles_mut();

    for idx in 0..roles.len() {
        if !roles[idx].is_colored() {
            continue;
        }
        let x = idx % width;
        let y = idx / width;

        let mut promote = |n: usize| {
            if roles[n] == PixelRole::Background {
                roles[n] = PixelRole::Outline;
            }
        };
        if x > 0 {
            promote(idx - 1);
        }
        if x + 1 < width {
            promote(idx + 1);
        }
        if y > 0 {
            promote(idx - width);
        }
        if y + 1 < height {
            promote(idx + width);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/outline.rs"]
mod tests;
