//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing, setting resolution, and subcommand handlers.

mod args;
mod commands;
mod enums;
mod settings;

pub use args::{Args, Command, ConfigAction};
pub use commands::{describe_config, handle_config_action, write_default_config};
pub use enums::Mode;
pub use settings::{Settings, FALLBACK_SURFACE};
