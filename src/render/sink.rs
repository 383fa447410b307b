use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use image::RgbaImage;

use crate::foundation::core::Variant;
use crate::foundation::error::{BitSpriteError, BitSpriteResult};

/// Consumer of individual variant canvases.
///
/// Called from the worker that rendered the variant, concurrently with other variants and in no
/// particular order. An error aborts the whole sheet.
pub trait VariantSink: Sync {
    /// Receive the finished canvas of `variant`.
    fn write_variant(&self, variant: Variant, canvas: &RgbaImage) -> BitSpriteResult<()>;
}

/// Writes each canvas as `<dir>/<variant>.png`.
#[derive(Clone, Debug)]
pub struct PngDirSink {
    dir: PathBuf,
}

impl PngDirSink {
    /// Sink writing into `dir`, which must already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that `variant` is written to.
    pub fn path_for(&self, variant: Variant) -> PathBuf {
        self.dir.join(format!("{}.png", variant.0))
    }
}

impl VariantSink for PngDirSink {
    fn write_variant(&self, variant: Variant, canvas: &RgbaImage) -> BitSpriteResult<()> {
        let path = self.path_for(variant);
        write_png(&path, canvas)?;
        tracing::debug!(variant = variant.0, path = %path.display(), "wrote individual");
        Ok(())
    }
}

/// Collects canvases in memory, for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    canvases: Mutex<BTreeMap<Variant, RgbaImage>>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the collected canvases, ordered by variant.
    pub fn into_canvases(self) -> BTreeMap<Variant, RgbaImage> {
        self.canvases
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl VariantSink for InMemorySink {
    fn write_variant(&self, variant: Variant, canvas: &RgbaImage) -> BitSpriteResult<()> {
        let mut canvases = self
            .canvases
            .lock()
            .map_err(|_| BitSpriteError::io("in-memory sink lock poisoned"))?;
        canvases.insert(variant, canvas.clone());
        Ok(())
    }
}

/// Encode `img` as PNG at `path`.
pub fn write_png(path: &Path, img: &RgbaImage) -> BitSpriteResult<()> {
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| BitSpriteError::io(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
