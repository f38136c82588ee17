//! Configuration file handling for asciimation.
//!
//! Loads configuration from `~/.config/asciimation/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ascii::{
    CellAspect, Margins, RenderMode, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH,
    DEFAULT_GLYPH_EXTENSION, DEFAULT_MARGIN_HORIZONTAL, DEFAULT_MARGIN_VERTICAL,
};
pub use crate::error::ConfigError;

/// Default glyph asset directory, relative to the working directory.
pub const DEFAULT_FONT_DIR: &str = "font/assets";

/// Configuration file structure for asciimation.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub font: FontConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub margin_horizontal: u16,
    pub margin_vertical: u16,
    pub cell_height: u32,
    pub cell_width: u32,
    pub mode: RenderMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            margin_horizontal: DEFAULT_MARGIN_HORIZONTAL,
            margin_vertical: DEFAULT_MARGIN_VERTICAL,
            cell_height: DEFAULT_CELL_HEIGHT,
            cell_width: DEFAULT_CELL_WIDTH,
            mode: RenderMode::default(),
        }
    }
}

impl RenderConfig {
    pub fn margins(&self) -> Margins {
        Margins::new(self.margin_horizontal, self.margin_vertical)
    }

    pub fn aspect(&self) -> CellAspect {
        CellAspect::new(self.cell_height, self.cell_width)
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    pub dir: PathBuf,
    pub extension: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_FONT_DIR),
            extension: DEFAULT_GLYPH_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Milliseconds per GIF delay unit.
    pub delay_unit_ms: u64,
    /// Keep a still image on screen until Enter is pressed.
    pub wait_for_enter: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            delay_unit_ms: 10,
            wait_for_enter: true,
        }
    }
}

impl PlaybackConfig {
    pub fn delay_unit(&self) -> Duration {
        Duration::from_millis(self.delay_unit_ms)
    }
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            Self::load_from_explicit(&path)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load configuration from a path that must exist.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("asciimation").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/asciimation/config.toml")
        })
}

/// Contents written by `config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# asciimation configuration

[render]
# Blank columns left and right of the image
margin_horizontal = 15
# Blank rows above and below the image
margin_vertical = 2
# Character cell proportions (height:width) used for aspect correction
cell_height = 72
cell_width = 38
# Render mode: glyph, binary
mode = "glyph"

[font]
# Directory of pre-rendered glyph bitmaps, one file per symbol
dir = "font/assets"
extension = "png"

[playback]
# Milliseconds per GIF delay unit
delay_unit_ms = 10
# Keep still images on screen until Enter is pressed
wait_for_enter = true
"#;
