//! asciimation library crate.
//!
//! Renders still images and animated GIFs as text art by matching each
//! character cell against a gallery of pre-rendered glyph bitmaps.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod frame;
pub mod playback;
pub mod source;
pub mod surface;
