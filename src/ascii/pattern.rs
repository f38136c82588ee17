//! Fixed-size binary ink patterns.

use std::fmt;

/// Sub-samples per axis for every pattern, shared by glyphs and image cells.
pub const SAMPLE_RESOLUTION: u32 = 9;

/// Number of bits in a pattern.
pub const PATTERN_BITS: u32 = SAMPLE_RESOLUTION * SAMPLE_RESOLUTION;

const PATTERN_MASK: u128 = (1u128 << PATTERN_BITS) - 1;

/// An N x N grid of ink bits packed into an integer.
///
/// Bit `sx * N + sy` holds the sample at sub-column `sx`, sub-row `sy`.
/// Two patterns compare equal exactly when every sample agrees, which
/// makes the pattern itself usable as the cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pattern {
    bits: u128,
}

impl Pattern {
    /// Pattern with no ink at all.
    pub const BLANK: Pattern = Pattern { bits: 0 };

    /// Pattern with ink everywhere.
    pub const SOLID: Pattern = Pattern { bits: PATTERN_MASK };

    /// Build a pattern by asking `sample(sx, sy)` for every sub-cell.
    pub fn from_fn<F>(mut sample: F) -> Self
    where
        F: FnMut(u32, u32) -> bool,
    {
        let mut bits = 0u128;
        for sx in 0..SAMPLE_RESOLUTION {
            for sy in 0..SAMPLE_RESOLUTION {
                if sample(sx, sy) {
                    bits |= 1u128 << (sx * SAMPLE_RESOLUTION + sy);
                }
            }
        }
        Self { bits }
    }

    /// Ink bit at sub-column `sx`, sub-row `sy`.
    pub fn get(&self, sx: u32, sy: u32) -> bool {
        debug_assert!(sx < SAMPLE_RESOLUTION && sy < SAMPLE_RESOLUTION);
        self.bits & (1u128 << (sx * SAMPLE_RESOLUTION + sy)) != 0
    }

    /// Number of ink samples.
    pub fn ink_count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Count of positions where both patterns agree (both ink or both blank).
    #[inline]
    pub fn similarity(&self, other: &Pattern) -> u32 {
        PATTERN_BITS - ((self.bits ^ other.bits) & PATTERN_MASK).count_ones()
    }
}

/// Renders as one `t`/`f` marker per bit, in bit order.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..PATTERN_BITS {
            let c = if self.bits & (1u128 << i) != 0 { 't' } else { 'f' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
