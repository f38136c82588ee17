//! Reference glyphs and the ordered gallery they live in.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use super::luminance::classify;
use super::pattern::{Pattern, SAMPLE_RESOLUTION};
use crate::error::AssetError;
use crate::source::PixelSource;

/// Default file extension of pre-rendered glyph bitmaps.
pub const DEFAULT_GLYPH_EXTENSION: &str = "png";

/// Sample a glyph bitmap on the shared N x N grid.
///
/// Each sub-cell is represented by the single pixel at
/// `(sx * width / N, sy * height / N)`; nothing is averaged.
pub fn sample<S: PixelSource + ?Sized>(bitmap: &S) -> Pattern {
    let width = bitmap.width();
    let height = bitmap.height();
    if width == 0 || height == 0 {
        return Pattern::BLANK;
    }

    Pattern::from_fn(|sx, sy| {
        let x = sx * width / SAMPLE_RESOLUTION;
        let y = sy * height / SAMPLE_RESOLUTION;
        classify(bitmap.pixel(x, y))
    })
}

/// A display symbol paired with its reference bitmap.
#[derive(Debug, Clone)]
pub struct Glyph {
    symbol: String,
    bitmap: RgbaImage,
    pattern: Pattern,
}

impl Glyph {
    /// Create a glyph, sampling its pattern once up front.
    pub fn new(symbol: impl Into<String>, bitmap: RgbaImage) -> Self {
        let pattern = sample(&bitmap);
        Self {
            symbol: symbol.into(),
            bitmap,
            pattern,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bitmap(&self) -> &RgbaImage {
        &self.bitmap
    }

    /// The sampled ink pattern used for matching.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

/// Ordered, immutable set of glyphs.
///
/// Order is fixed when the gallery is built and decides ties during
/// matching: the earlier glyph wins.
#[derive(Debug, Clone, Default)]
pub struct GlyphGallery {
    glyphs: Vec<Glyph>,
}

impl GlyphGallery {
    pub fn new(glyphs: Vec<Glyph>) -> Self {
        Self { glyphs }
    }

    /// Load every `*.{extension}` bitmap in `dir`, sorted by file name.
    ///
    /// The symbol is the file name with the extension suffix removed.
    /// Any unreadable or undecodable asset fails the whole load.
    pub fn load_dir(dir: &Path, extension: &str) -> Result<Self, AssetError> {
        if !dir.is_dir() {
            return Err(AssetError::MissingDirectory(dir.to_path_buf()));
        }

        let read_err = |source| AssetError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut assets: Vec<(String, String, PathBuf)> = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                log::warn!("Skipping glyph asset with non-UTF-8 name: {:?}", path);
                continue;
            };
            match symbol_from_file_name(&name, extension) {
                Some(symbol) => assets.push((name.clone(), symbol.to_owned(), path)),
                None => log::debug!("Ignoring non-glyph file {:?}", path),
            }
        }
        assets.sort_by(|a, b| a.0.cmp(&b.0));

        let mut glyphs = Vec::with_capacity(assets.len());
        for (_, symbol, path) in assets {
            let bitmap = image::open(&path)
                .map_err(|source| AssetError::Decode {
                    path: path.clone(),
                    source,
                })?
                .to_rgba8();
            glyphs.push(Glyph::new(symbol, bitmap));
        }

        let gallery = Self::new(glyphs);
        if gallery.is_empty() {
            log::warn!("No glyph assets found in {}", dir.display());
        } else {
            log::info!("Loaded {} glyphs from {}", gallery.len(), dir.display());
            if gallery.bitmap_size().is_none() {
                log::warn!(
                    "Glyph bitmaps in {} differ in size; matching assumes one cell shape",
                    dir.display()
                );
            }
        }

        Ok(gallery)
    }

    /// The bitmap size shared by every glyph, or `None` if the gallery is
    /// empty or the sizes differ.
    pub fn bitmap_size(&self) -> Option<(u32, u32)> {
        let (first, rest) = self.glyphs.split_first()?;
        let size = first.bitmap().dimensions();
        rest.iter()
            .all(|g| g.bitmap().dimensions() == size)
            .then_some(size)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Glyph> {
        self.glyphs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Glyph> {
        self.glyphs.iter()
    }

    /// Symbols in gallery order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.glyphs.iter().map(Glyph::symbol)
    }
}

impl<'a> IntoIterator for &'a GlyphGallery {
    type Item = &'a Glyph;
    type IntoIter = std::slice::Iter<'a, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.iter()
    }
}

/// Symbol for an asset file name, or `None` if it lacks `.{extension}`.
fn symbol_from_file_name<'a>(name: &'a str, extension: &str) -> Option<&'a str> {
    let stem = name.strip_suffix(extension)?.strip_suffix('.')?;
    if stem.is_empty() {
        None
    } else {
        Some(stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn test_symbol_from_file_name() {
        assert_eq!(symbol_from_file_name("A.png", "png"), Some("A"));
        assert_eq!(symbol_from_file_name("..png", "png"), Some("."));
        assert_eq!(symbol_from_file_name(" .png", "png"), Some(" "));
        assert_eq!(symbol_from_file_name("A.jpg", "png"), None);
        assert_eq!(symbol_from_file_name(".png", "png"), None);
        assert_eq!(symbol_from_file_name("png", "png"), None);
    }

    #[test]
    fn test_sample_solid_bitmaps() {
        assert_eq!(sample(&RgbaImage::from_pixel(48, 72, BLACK)), Pattern::SOLID);
        assert_eq!(sample(&RgbaImage::from_pixel(48, 72, WHITE)), Pattern::BLANK);
    }

    #[test]
    fn test_sample_uses_proportional_points() {
        // Left third black: columns 0..16 of 48. Sample x = sx * 48 / 9,
        // so sx 0..=2 land at x 0, 5, 10 and sx 3 lands at x 16.
        let bitmap = RgbaImage::from_fn(48, 72, |x, _| if x < 16 { BLACK } else { WHITE });
        let pattern = sample(&bitmap);
        for sy in 0..SAMPLE_RESOLUTION {
            assert!(pattern.get(0, sy));
            assert!(pattern.get(2, sy));
            assert!(!pattern.get(3, sy));
        }
    }

    #[test]
    fn test_sample_empty_bitmap_is_blank() {
        assert_eq!(sample(&RgbaImage::new(0, 0)), Pattern::BLANK);
    }

    #[test]
    fn test_load_dir_sorted_and_stripped() {
        let dir = TempDir::new().unwrap();
        RgbaImage::from_pixel(8, 8, WHITE)
            .save(dir.path().join("b.png"))
            .unwrap();
        RgbaImage::from_pixel(8, 8, BLACK)
            .save(dir.path().join("@.png"))
            .unwrap();
        RgbaImage::from_pixel(8, 8, WHITE)
            .save(dir.path().join(" .png"))
            .unwrap();
        std::fs::write(dir.path().join("README.txt"), "not a glyph").unwrap();

        let gallery = GlyphGallery::load_dir(dir.path(), "png").unwrap();
        let symbols: Vec<&str> = gallery.symbols().collect();
        assert_eq!(symbols, vec![" ", "@", "b"]);
        assert_eq!(gallery.get(1).unwrap().pattern(), &Pattern::SOLID);
    }

    #[test]
    fn test_bitmap_size() {
        let same = GlyphGallery::new(vec![
            Glyph::new("a", RgbaImage::from_pixel(48, 72, WHITE)),
            Glyph::new("b", RgbaImage::from_pixel(48, 72, BLACK)),
        ]);
        assert_eq!(same.bitmap_size(), Some((48, 72)));

        let mixed = GlyphGallery::new(vec![
            Glyph::new("a", RgbaImage::from_pixel(48, 72, WHITE)),
            Glyph::new("b", RgbaImage::from_pixel(40, 72, BLACK)),
        ]);
        assert_eq!(mixed.bitmap_size(), None);
        assert_eq!(GlyphGallery::default().bitmap_size(), None);
    }

    #[test]
    fn test_load_dir_corrupt_asset_fails_whole_gallery() {
        let dir = TempDir::new().unwrap();
        RgbaImage::from_pixel(8, 8, WHITE)
            .save(dir.path().join("a.png"))
            .unwrap();
        std::fs::write(dir.path().join("b.png"), b"garbage").unwrap();

        let result = GlyphGallery::load_dir(dir.path(), "png");
        assert!(matches!(result, Err(AssetError::Decode { .. })));
    }

    #[test]
    fn test_load_dir_missing() {
        let result = GlyphGallery::load_dir(Path::new("/nonexistent/glyphs"), "png");
        assert!(matches!(result, Err(AssetError::MissingDirectory(_))));
    }

    #[test]
    fn test_load_dir_empty_is_empty_gallery() {
        let dir = TempDir::new().unwrap();
        let gallery = GlyphGallery::load_dir(dir.path(), "png").unwrap();
        assert!(gallery.is_empty());
    }
}
