//! Error types for asset loading, decoding, geometry and rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Glyph gallery could not be loaded. No partial gallery is ever returned.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("glyph asset directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("failed to read glyph asset directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode glyph bitmap '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Input image or sequence could not be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read image '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to decode GIF: {0}")]
    Gif(#[from] gif::DecodingError),

    #[error("GIF frame of {width}x{height} does not match its pixel data")]
    FrameSize { width: u32, height: u32 },

    #[error("animated image contains no frames")]
    EmptySequence,
}

/// The output grid cannot be computed for this image and surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("source image has zero width or height")]
    EmptyImage,

    #[error(
        "surface {width}x{height} leaves no room inside margins of {margin_horizontal}x{margin_vertical}"
    )]
    SurfaceTooSmall {
        width: u16,
        height: u16,
        margin_horizontal: u16,
        margin_vertical: u16,
    },
}

/// A render invocation failed. Nothing partial is drawn.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("failed to write to output surface: {0}")]
    Surface(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
