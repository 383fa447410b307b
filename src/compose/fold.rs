use std::fmt;

use crate::foundation::core::{VARIANT_COUNT, Variant};
use crate::foundation::error::{BitSpriteError, BitSpriteResult};
use crate::template::classify::Template;

/// Mirrored duplication of the template along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Fold {
    /// Canvas equals the template along this axis.
    #[default]
    None,
    /// Template followed by its full mirror image.
    Even,
    /// Template followed by its mirror image, sharing the center line.
    Odd,
}

impl Fold {
    /// Parse `even`/`e` and `odd`/`o` (any case). Everything else means no fold.
    pub fn parse_lenient(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("even") || s.eq_ignore_ascii_case("e") {
            Self::Even
        } else if s.eq_ignore_ascii_case("odd") || s.eq_ignore_ascii_case("o") {
            Self::Odd
        } else {
            Self::None
        }
    }

    /// Canvas length and first mirrored coordinate for a template axis of length `len`.
    pub fn span(self, len: usize) -> (usize, usize) {
        match self {
            Self::None => (len, len),
            Self::Even => (len * 2, len),
            Self::Odd => {
                let canvas = len * 2 - 1;
                (canvas, canvas / 2 + 1)
            }
        }
    }
}

impl fmt::Display for Fold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Even => "even",
            Self::Odd => "odd",
        })
    }
}

impl serde::Serialize for Fold {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Fold {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&s))
    }
}

/// Template-to-canvas coordinate mapping for one pair of folds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasGeometry {
    /// Template width.
    pub template_width: usize,
    /// Template height.
    pub template_height: usize,
    /// Canvas width before upscaling.
    pub canvas_width: usize,
    /// Canvas height before upscaling.
    pub canvas_height: usize,
    /// First canvas column read right-to-left.
    pub fold_col: usize,
    /// First canvas row read bottom-to-top.
    pub fold_row: usize,
}

impl CanvasGeometry {
    /// Geometry for a `template_width x template_height` template.
    pub fn new(template_width: usize, template_height: usize, fold: Fold, vert_fold: Fold) -> Self {
        let (canvas_width, fold_col) = fold.span(template_width);
        let (canvas_height, fold_row) = vert_fold.span(template_height);
        Self {
            template_width,
            template_height,
            canvas_width,
            canvas_height,
            fold_col,
            fold_row,
        }
    }

    /// Row-major template index that canvas pixel `(x, y)` reads from.
    pub fn source_index(&self, x: usize, y: usize) -> usize {
        let col = if x < self.fold_col {
            x
        } else {
            self.canvas_width - x - 1
        };
        let row = if y < self.fold_row {
            y
        } else {
            self.canvas_height - y - 1
        };
        col + row * self.template_width
    }
}

/// Placement of the 256 upscaled canvases on the composite sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SheetLayout {
    /// Per-variant coordinate mapping.
    pub geometry: CanvasGeometry,
    /// Edge length of the block each canvas pixel expands to.
    pub upscale: usize,
    /// Tiles per sheet row; divides 256.
    pub sheet_width: usize,
}

impl SheetLayout {
    /// Validate and build a layout.
    pub fn new(
        geometry: CanvasGeometry,
        upscale: usize,
        sheet_width: usize,
    ) -> BitSpriteResult<Self> {
        if upscale == 0 {
            return Err(BitSpriteError::validation("upscale must be >= 1"));
        }
        if sheet_width == 0 || sheet_width > VARIANT_COUNT || VARIANT_COUNT % sheet_width != 0 {
            return Err(BitSpriteError::validation(format!(
                "sheet width {sheet_width} does not divide {VARIANT_COUNT}"
            )));
        }
        Ok(Self {
            geometry,
            upscale,
            sheet_width,
        })
    }

    /// Width of one variant tile in pixels.
    pub fn tile_width(&self) -> usize {
        self.geometry.canvas_width * self.upscale
    }

    /// Height of one variant tile in pixels.
    pub fn tile_height(&self) -> usize {
        self.geometry.canvas_height * self.upscale
    }

    /// Tile rows on the sheet.
    pub fn sheet_height(&self) -> usize {
        VARIANT_COUNT / self.sheet_width
    }

    /// Composite width in pixels.
    pub fn composite_width(&self) -> usize {
        self.tile_width() * self.sheet_width
    }

    /// Composite height in pixels.
    pub fn composite_height(&self) -> usize {
        self.tile_height() * self.sheet_height()
    }

    /// Top-left pixel of `variant`'s tile on the composite.
    pub fn tile_origin(&self, variant: Variant) -> (usize, usize) {
        let i = variant.index();
        (
            self.tile_width() * (i % self.sheet_width),
            self.tile_height() * (i / self.sheet_width),
        )
    }
}

/// Color segment tracker for one canvas scan.
///
/// The scan starts in the last segment. In the direct rows a delimiter at the source index makes
/// its own segment active. In the vertically mirrored rows the probe is taken one template row
/// further down at the unmirrored column, and a hit activates the segment before it (clamped at 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentCursor {
    active: usize,
}

impl SegmentCursor {
    /// Cursor positioned where the encoding pass left off.
    pub fn start(template: &Template) -> Self {
        Self {
            active: template.delimiters().len().saturating_sub(1),
        }
    }

    /// Segment whose colors apply to canvas pixel `(x, y)`, which reads `source_index`.
    pub fn advance(
        &mut self,
        template: &Template,
        geometry: &CanvasGeometry,
        x: usize,
        y: usize,
        source_index: usize,
    ) -> usize {
        if y < geometry.fold_row {
            if let Some(d) = template.delimiter_at(source_index) {
                self.active = d;
            }
        } else {
            let probe = x + (geometry.canvas_height - y) * geometry.template_width;
            if let Some(d) = template.delimiter_at(probe) {
                self.active = d.saturating_sub(1);
            }
        }
        self.active
    }

    /// Currently active segment.
    pub fn active(&self) -> usize {
        self.active
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/fold.rs"]
mod tests;
