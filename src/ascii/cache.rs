//! Session-scoped memo of pattern to symbol lookups.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::gallery::GlyphGallery;
use super::matcher::best_match;
use super::pattern::Pattern;

/// Hit/miss counters for a [`MatchCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups served from the cache, 0.0 when nothing was looked up.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Maps every pattern seen so far to the symbol chosen for it.
///
/// Entries are only ever added. One cache should live for a whole
/// rendering session so that frames of an animation share results.
/// Not synchronized: lookup and insert must happen under one `&mut`.
#[derive(Debug, Default)]
pub struct MatchCache {
    entries: HashMap<Pattern, String>,
    stats: CacheStats,
}

impl MatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached symbol for `pattern`, running `compute` only on a miss.
    pub fn lookup_or_compute<F>(&mut self, pattern: Pattern, compute: F) -> &str
    where
        F: FnOnce(&Pattern) -> String,
    {
        match self.entries.entry(pattern) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut().as_str()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                let symbol = compute(&pattern);
                entry.insert(symbol).as_str()
            }
        }
    }

    /// Resolve `pattern` against `gallery`, memoized.
    pub fn resolve(&mut self, pattern: Pattern, gallery: &GlyphGallery) -> &str {
        self.lookup_or_compute(pattern, |p| best_match(p, gallery).to_owned())
    }

    /// Cached symbol for `pattern`, without computing or counting.
    pub fn get(&self, pattern: &Pattern) -> Option<&str> {
        self.entries.get(pattern).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drop all entries and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }
}
