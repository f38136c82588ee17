//! Ink/no-ink classification of single pixels.

/// Luma values strictly below this are ink (midpoint of the 8-bit range).
pub const INK_THRESHOLD: u8 = 128;

/// One pixel's color channels. Alpha is carried but never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PixelSample {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Perceptual luma of a pixel in 0..=255.
///
/// Channels are widened to 16 bits (`c * 257`) and weighted with the
/// integer BT.601 coefficients, which sum to 65536, so the `>> 24`
/// lands back in the 8-bit range.
#[inline]
pub fn luma(pixel: PixelSample) -> u8 {
    let r = pixel.r as u32 * 257;
    let g = pixel.g as u32 * 257;
    let b = pixel.b as u32 * 257;
    ((19595 * r + 38470 * g + 7471 * b + 16384) >> 24) as u8
}

/// True when the pixel is dark enough to be drawn as ink.
#[inline]
pub fn classify(pixel: PixelSample) -> bool {
    luma(pixel) < INK_THRESHOLD
}
