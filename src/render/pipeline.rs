use std::path::Path;

use image::RgbaImage;
use rayon::prelude::*;

use crate::compose::canvas::{compose_variant, split_tile_rows};
use crate::compose::fold::{CanvasGeometry, SheetLayout};
use crate::config::RenderSettings;
use crate::encode::outline::infer_outlines;
use crate::encode::variant::encode_variant;
use crate::foundation::core::Variant;
use crate::foundation::error::{BitSpriteError, BitSpriteResult};
use crate::render::sink::{VariantSink, write_png};
use crate::template::classify::Template;
use crate::template::segments::SegmentPermutations;

/// A finished composite sheet.
#[derive(Clone, Debug)]
pub struct SpriteSheet {
    /// All 256 variants, tiled row-major `layout.sheet_width` per row.
    pub composite: RgbaImage,
    /// Geometry the sheet was rendered with.
    pub layout: SheetLayout,
}

impl SpriteSheet {
    /// Copy of one variant's tile.
    pub fn tile(&self, variant: Variant) -> RgbaImage {
        let (x, y) = self.layout.tile_origin(variant);
        image::imageops::crop_imm(
            &self.composite,
            x as u32,
            y as u32,
            self.layout.tile_width() as u32,
            self.layout.tile_height() as u32,
        )
        .to_image()
    }

    /// Encode the composite as PNG at `path`.
    pub fn save_png(&self, path: &Path) -> BitSpriteResult<()> {
        write_png(path, &self.composite)
    }
}

/// Render the full sheet, drawing fresh segment permutations according to `settings.seed`.
///
/// When `sink` is given, every variant's individual canvas is also rendered and handed to it.
pub fn render_sheet(
    template: &Template,
    settings: &RenderSettings,
    sink: Option<&dyn VariantSink>,
) -> BitSpriteResult<SpriteSheet> {
    let perms = SegmentPermutations::generate(template.delimiters().len(), settings.seed);
    render_sheet_with_permutations(template, &perms, settings, sink)
}

/// Render the full sheet with caller-provided segment permutations.
///
/// Each of the 256 variants runs as an independent rayon task that owns its working image and
/// writes only its own rows of the composite. The first failing task aborts the render.
#[tracing::instrument(
    skip(template, perms, settings, sink),
    fields(
        width = template.width(),
        height = template.height(),
        segments = template.segment_count(),
    )
)]
pub fn render_sheet_with_permutations(
    template: &Template,
    perms: &SegmentPermutations,
    settings: &RenderSettings,
    sink: Option<&dyn VariantSink>,
) -> BitSpriteResult<SpriteSheet> {
    if perms.len() != template.delimiters().len() {
        return Err(BitSpriteError::validation(format!(
            "{} segment permutations for {} delimiters",
            perms.len(),
            template.delimiters().len()
        )));
    }

    let geometry = CanvasGeometry::new(
        template.width(),
        template.height(),
        settings.fold,
        settings.vert_fold,
    );
    let layout = SheetLayout::new(geometry, settings.upscale, settings.sheet_width)?;
    let width = u32::try_from(layout.composite_width())
        .map_err(|_| BitSpriteError::validation("composite width exceeds u32"))?;
    let height = u32::try_from(layout.composite_height())
        .map_err(|_| BitSpriteError::validation("composite height exceeds u32"))?;

    let pool = build_thread_pool(settings.threads)?;
    let mut composite = RgbaImage::new(width, height);
    let tiles = split_tile_rows(&mut composite, &layout);

    pool.install(|| {
        tiles
            .into_par_iter()
            .enumerate()
            .try_for_each(|(i, mut rows)| {
                render_variant(
                    template,
                    perms,
                    settings,
                    &layout,
                    Variant(i as u8),
                    &mut rows,
                    sink,
                )
            })
    })?;

    tracing::debug!(width, height, "rendered sheet");
    Ok(SpriteSheet { composite, layout })
}

fn render_variant(
    template: &Template,
    perms: &SegmentPermutations,
    settings: &RenderSettings,
    layout: &SheetLayout,
    variant: Variant,
    rows: &mut [&mut [u8]],
    sink: Option<&dyn VariantSink>,
) -> BitSpriteResult<()> {
    let mut working = encode_variant(template, perms, variant)?;
    if settings.outline {
        infer_outlines(&mut working);
    }

    let tables = settings
        .policy
        .tables(&perms.segment_resolutions(variant));

    let mut canvas = sink.map(|_| {
        RgbaImage::new(layout.tile_width() as u32, layout.tile_height() as u32)
    });
    compose_variant(template, &working, &tables, layout, rows, canvas.as_mut())?;

    if let (Some(sink), Some(canvas)) = (sink, canvas.as_ref()) {
        sink.write_variant(variant, canvas)?;
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> BitSpriteResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(BitSpriteError::validation(
            "render threads must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        BitSpriteError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
