//! Glyph-matching renderer for turning images into text.
//!
//! The pipeline for one image:
//!
//! 1. **Grid sizing** - pick output columns/rows from the surface, margins
//!    and a character-cell aspect correction
//! 2. **Sampling** - read an N x N grid of pixels inside each cell
//! 3. **Classification** - turn each sample into an ink bit using a
//!    perceptual luma threshold
//! 4. **Matching** - pick the gallery glyph whose own pattern agrees on the
//!    most bits, memoized per pattern in a [`MatchCache`]
//!
//! # Render Modes
//!
//! - `Glyph` - full pattern matching against the gallery
//! - `Binary` - one sample per cell drawn as `X` or blank

mod cache;
mod dimensions;
mod gallery;
mod luminance;
mod matcher;
mod pattern;
mod raster;

pub use cache::{CacheStats, MatchCache};
pub use dimensions::{
    calculate_grid, usable_area, CellAspect, GridLayout, Margins, SurfaceSize,
    DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_MARGIN_HORIZONTAL, DEFAULT_MARGIN_VERTICAL,
};
pub use gallery::{sample, Glyph, GlyphGallery, DEFAULT_GLYPH_EXTENSION};
pub use luminance::{classify, luma, PixelSample, INK_THRESHOLD};
pub use matcher::{best_match, FALLBACK_SYMBOL};
pub use pattern::{Pattern, PATTERN_BITS, SAMPLE_RESOLUTION};
pub use raster::{
    sample_cell, Rasterizer, RenderMode, BINARY_BLANK_SYMBOL, BINARY_INK_SYMBOL,
};
