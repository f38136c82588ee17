//! Best-glyph selection by pattern similarity.

use super::gallery::GlyphGallery;
use super::pattern::Pattern;

/// Returned when no glyph agrees with the query on even one sample,
/// which in practice means the gallery is empty.
pub const FALLBACK_SYMBOL: &str = "X";

/// Find the glyph whose pattern agrees with `pattern` on the most samples.
///
/// Scans in gallery order and only replaces the current best on a strictly
/// higher score, so the first glyph reaching the maximum wins.
pub fn best_match<'g>(pattern: &Pattern, gallery: &'g GlyphGallery) -> &'g str {
    let mut best_score = 0;
    let mut best_symbol = FALLBACK_SYMBOL;

    for glyph in gallery {
        let score = glyph.pattern().similarity(pattern);
        if score > best_score {
            best_score = score;
            best_symbol = glyph.symbol();
        }
    }

    best_symbol
}
