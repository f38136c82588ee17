//! CLI enum types.

use clap::ValueEnum;

use crate::ascii::RenderMode;

/// How cells are turned into symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Best-matching glyph from the gallery
    #[default]
    Glyph,
    /// Plain ink/blank marks, no gallery needed
    Binary,
}

impl From<Mode> for RenderMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Glyph => RenderMode::Glyph,
            Mode::Binary => RenderMode::Binary,
        }
    }
}
