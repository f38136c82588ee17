//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::Mode;

/// Render images and animated GIFs as glyph-matched text art
#[derive(Parser, Debug)]
#[command(name = "asciimation")]
#[command(version, about = "Render images and GIFs as glyph-matched text art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image to render (PNG, JPEG or GIF)
    pub image: Option<PathBuf>,

    /// Directory of glyph bitmaps, one file per symbol
    #[arg(long, short)]
    pub font_dir: Option<PathBuf>,

    /// Blank columns left and right of the image
    #[arg(long)]
    pub margin_h: Option<u16>,

    /// Blank rows above and below the image
    #[arg(long)]
    pub margin_v: Option<u16>,

    /// Render mode
    #[arg(long, short, value_enum)]
    pub mode: Option<Mode>,

    /// Surface width in characters (default: terminal width)
    #[arg(long)]
    pub width: Option<u16>,

    /// Surface height in characters (default: terminal height)
    #[arg(long)]
    pub height: Option<u16>,

    /// Don't wait for Enter after drawing a still image
    #[arg(long)]
    pub no_wait: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill the usable area with X to check margins
    Calibrate,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
