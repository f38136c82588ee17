//! Frame rasterization: image pixels to a grid of matched glyphs.

use serde::Deserialize;

use super::cache::MatchCache;
use super::dimensions::{CellAspect, GridLayout, Margins, SurfaceSize};
use super::gallery::GlyphGallery;
use super::luminance::classify;
use super::pattern::{Pattern, SAMPLE_RESOLUTION};
use crate::error::GeometryError;
use crate::frame::Frame;
use crate::source::PixelSource;

/// Symbol drawn for an inked cell in binary mode.
pub const BINARY_INK_SYMBOL: &str = "X";

/// Symbol drawn for a blank cell in binary mode.
pub const BINARY_BLANK_SYMBOL: &str = " ";

/// How each cell is turned into a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Sample an N x N pattern and pick the best gallery glyph.
    #[default]
    Glyph,
    /// Classify the cell's origin pixel and draw ink or blank.
    Binary,
}

impl RenderMode {
    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::Glyph => "glyph",
            RenderMode::Binary => "binary",
        }
    }
}

/// Sample the pattern for grid cell `(x, y)` with pixel strides `delta_x`, `delta_y`.
///
/// Sub-sample `(sx, sy)` reads the pixel at
/// `(x * delta_x + (delta_x - 1) / N * sx, y * delta_y + (delta_y - 1) / N * sy)`.
/// The step is truncated before multiplying, so large cells are sampled
/// only over their leading part. Coordinates past the image edge are
/// clamped to the last row or column.
pub fn sample_cell<S: PixelSource + ?Sized>(
    image: &S,
    x: u32,
    y: u32,
    delta_x: u32,
    delta_y: u32,
) -> Pattern {
    let max_x = image.width().saturating_sub(1);
    let max_y = image.height().saturating_sub(1);
    let step_x = delta_x.saturating_sub(1) / SAMPLE_RESOLUTION;
    let step_y = delta_y.saturating_sub(1) / SAMPLE_RESOLUTION;
    let origin_x = x.saturating_mul(delta_x);
    let origin_y = y.saturating_mul(delta_y);

    Pattern::from_fn(|sx, sy| {
        let px = origin_x.saturating_add(step_x * sx).min(max_x);
        let py = origin_y.saturating_add(step_y * sy).min(max_y);
        classify(image.pixel(px, py))
    })
}

/// Turns images into frames using one glyph gallery.
///
/// Holds no per-session state; the [`MatchCache`] is passed in so the
/// caller decides how long memoized matches live.
#[derive(Debug, Clone, Copy)]
pub struct Rasterizer<'g> {
    gallery: &'g GlyphGallery,
    aspect: CellAspect,
    mode: RenderMode,
}

impl<'g> Rasterizer<'g> {
    pub fn new(gallery: &'g GlyphGallery) -> Self {
        Self {
            gallery,
            aspect: CellAspect::default(),
            mode: RenderMode::default(),
        }
    }

    pub fn with_aspect(mut self, aspect: CellAspect) -> Self {
        self.aspect = aspect;
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Rasterize `image` for a surface of `surface` characters with `margins`.
    pub fn rasterize<S: PixelSource + ?Sized>(
        &self,
        image: &S,
        surface: SurfaceSize,
        margins: Margins,
        cache: &mut MatchCache,
    ) -> Result<Frame, GeometryError> {
        let layout =
            GridLayout::for_image(image.width(), image.height(), surface, margins, self.aspect)?;
        Ok(self.rasterize_into_layout(image, layout, cache))
    }

    /// Rasterize `image` onto an already computed layout.
    pub fn rasterize_into_layout<S: PixelSource + ?Sized>(
        &self,
        image: &S,
        layout: GridLayout,
        cache: &mut MatchCache,
    ) -> Frame {
        let columns = layout.columns as u32;
        let rows = layout.rows as u32;
        let delta_x = (image.width() / columns).max(1);
        let delta_y = (image.height() / rows).max(1);

        log::debug!(
            "Rasterizing {}x{} image to {}x{} grid (stride {}x{}, mode {})",
            image.width(),
            image.height(),
            columns,
            rows,
            delta_x,
            delta_y,
            self.mode.name()
        );

        let mut cells = Vec::with_capacity(columns as usize * rows as usize);
        for y in 0..rows {
            for x in 0..columns {
                let symbol = match self.mode {
                    RenderMode::Glyph => {
                        let pattern = sample_cell(image, x, y, delta_x, delta_y);
                        cache.resolve(pattern, self.gallery).to_owned()
                    }
                    RenderMode::Binary => binary_symbol(image, x, y, delta_x, delta_y).to_owned(),
                };
                cells.push(symbol);
            }
        }

        Frame::new(cells, layout)
    }
}

fn binary_symbol<S: PixelSource + ?Sized>(
    image: &S,
    x: u32,
    y: u32,
    delta_x: u32,
    delta_y: u32,
) -> &'static str {
    let px = x.saturating_mul(delta_x).min(image.width().saturating_sub(1));
    let py = y.saturating_mul(delta_y).min(image.height().saturating_sub(1));
    if classify(image.pixel(px, py)) {
        BINARY_INK_SYMBOL
    } else {
        BINARY_BLANK_SYMBOL
    }
}
