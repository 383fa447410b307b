use image::RgbaImage;

use crate::color::resolve::ColorTable;
use crate::compose::fold::{SegmentCursor, SheetLayout};
use crate::encode::variant::WorkingImage;
use crate::foundation::core::VARIANT_COUNT;
use crate::foundation::error::{BitSpriteError, BitSpriteResult};
use crate::template::classify::Template;

/// Split a composite RGBA8 buffer into per-variant tile rows.
///
/// Entry `i` of the result holds the `tile_height` row slices of variant `i`'s tile, top to
/// bottom. The slices are disjoint, so every variant can be written independently.
pub fn split_tile_rows<'a>(
    composite: &'a mut [u8],
    layout: &SheetLayout,
) -> Vec<Vec<&'a mut [u8]>> {
    let tile_height = layout.tile_height();
    let mut tiles: Vec<Vec<&mut [u8]>> = (0..VARIANT_COUNT)
        .map(|_| Vec::with_capacity(tile_height))
        .collect();

    for (k, row) in composite
        .chunks_exact_mut(layout.tile_width() * 4)
        .enumerate()
    {
        let sheet_row = k / layout.sheet_width;
        let sheet_col = k % layout.sheet_width;
        tiles[(sheet_row / tile_height) * layout.sheet_width + sheet_col].push(row);
    }
    tiles
}

/// Rasterize one variant into its tile rows and, optionally, its individual canvas.
///
/// `tables` holds one color table per template segment. Each canvas row is resolved once and then
/// copied into the `upscale` output rows it covers.
pub fn compose_variant(
    template: &Template,
    image: &WorkingImage,
    tables: &[ColorTable],
    layout: &SheetLayout,
    tile_rows: &mut [&mut [u8]],
    mut canvas: Option<&mut RgbaImage>,
) -> BitSpriteResult<()> {
    let geometry = &layout.geometry;
    let upscale = layout.upscale;
    let stride = layout.tile_width() * 4;

    if tables.len() != template.segment_count() {
        return Err(BitSpriteError::validation(format!(
            "{} color tables for {} segments",
            tables.len(),
            template.segment_count()
        )));
    }
    if tile_rows.len() != layout.tile_height() || tile_rows.iter().any(|r| r.len() != stride) {
        return Err(BitSpriteError::validation(
            "tile rows do not match the sheet layout",
        ));
    }
    if let Some(c) = canvas.as_deref()
        && (c.width() as usize, c.height() as usize) != (layout.tile_width(), layout.tile_height())
    {
        return Err(BitSpriteError::validation(format!(
            "individual canvas is {}x{}, expected {}x{}",
            c.width(),
            c.height(),
            layout.tile_width(),
            layout.tile_height()
        )));
    }

    let mut cursor = SegmentCursor::start(template);
    let mut line = vec![0u8; stride];

    for y in 0..geometry.canvas_height {
        for x in 0..geometry.canvas_width {
            let src = geometry.source_index(x, y);
            let segment = cursor.advance(template, geometry, x, y, src);
            let color = tables[segment][image.role(src)];
            for px in line[x * upscale * 4..(x + 1) * upscale * 4].chunks_exact_mut(4) {
                px.copy_from_slice(&color.0);
            }
        }

        let rows = y * upscale..(y + 1) * upscale;
        for row in &mut tile_rows[rows.clone()] {
            row.copy_from_slice(&line);
        }
        if let Some(c) = canvas.as_deref_mut() {
            let buf: &mut [u8] = &mut **c;
            for r in rows {
                buf[r * stride..(r + 1) * stride].copy_from_slice(&line);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/canvas.rs"]
mod tests;
