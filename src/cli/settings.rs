//! Merge of CLI arguments over config file values.

use std::path::PathBuf;
use std::time::Duration;

use super::args::Args;
use crate::ascii::{CellAspect, Margins, RenderMode, SurfaceSize};
use crate::config::Config;

/// Surface used when the terminal size cannot be queried.
pub const FALLBACK_SURFACE: SurfaceSize = SurfaceSize {
    width: 80,
    height: 24,
};

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub font_dir: PathBuf,
    pub font_extension: String,
    pub margins: Margins,
    pub aspect: CellAspect,
    pub mode: RenderMode,
    pub delay_unit: Duration,
    pub wait_for_enter: bool,
    pub width: Option<u16>,
    pub height: Option<u16>,
}

impl Settings {
    /// CLI args > config file > built-in defaults.
    pub fn resolve(args: &Args, config: &Config) -> Self {
        let base = config.render.margins();
        let margins = Margins::new(
            args.margin_h.unwrap_or(base.horizontal),
            args.margin_v.unwrap_or(base.vertical),
        );
        Self {
            font_dir: args
                .font_dir
                .clone()
                .unwrap_or_else(|| config.font.dir.clone()),
            font_extension: config.font.extension.clone(),
            margins,
            aspect: config.render.aspect(),
            mode: args.mode.map(RenderMode::from).unwrap_or(config.render.mode),
            delay_unit: config.playback.delay_unit(),
            wait_for_enter: config.playback.wait_for_enter && !args.no_wait,
            width: args.width,
            height: args.height,
        }
    }

    /// Surface size from explicit overrides, else `detected`, else 80x24.
    pub fn surface_size(&self, detected: Option<SurfaceSize>) -> SurfaceSize {
        let base = detected.unwrap_or_else(|| {
            log::warn!(
                "Terminal size unavailable, assuming {}x{}",
                FALLBACK_SURFACE.width,
                FALLBACK_SURFACE.height
            );
            FALLBACK_SURFACE
        });
        SurfaceSize::new(
            self.width.unwrap_or(base.width),
            self.height.unwrap_or(base.height),
        )
    }
}
