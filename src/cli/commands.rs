//! Subcommand handlers for config actions.

use std::io;
use std::path::Path;

use super::args::ConfigAction;
use crate::config::{Config, DEFAULT_CONFIG_TOML};

/// Handle config subcommand actions against the file at `config_path`.
pub fn handle_config_action(action: ConfigAction, config: &Config, config_path: &Path) {
    match action {
        ConfigAction::Show => {
            print!("{}", describe_config(config, config_path));
        }
        ConfigAction::Init => {
            if config_path.exists() {
                eprintln!("Config file already exists: {}", config_path.display());
                eprintln!("Use 'asciimation config show' to view current settings.");
                std::process::exit(1);
            }

            if let Err(e) = write_default_config(config_path) {
                eprintln!("Error writing config file: {}", e);
                std::process::exit(1);
            }

            println!("Created config file: {}", config_path.display());
        }
    }
}

/// Human-readable summary of `config`, loaded from `config_path`.
pub fn describe_config(config: &Config, config_path: &Path) -> String {
    let status = if config_path.exists() {
        "exists"
    } else {
        "not found"
    };
    format!(
        "Current configuration:\n\
         \x20 Margins: {} columns, {} rows\n\
         \x20 Cell aspect: {}:{}\n\
         \x20 Mode: {}\n\
         \x20 Glyphs: {}/*.{}\n\
         \x20 Delay unit: {}ms\n\
         \x20 Wait for Enter: {}\n\
         \n\
         Config file: {} ({})\n",
        config.render.margin_horizontal,
        config.render.margin_vertical,
        config.render.cell_height,
        config.render.cell_width,
        config.render.mode.name(),
        config.font.dir.display(),
        config.font.extension,
        config.playback.delay_unit_ms,
        if config.playback.wait_for_enter { "yes" } else { "no" },
        config_path.display(),
        status
    )
}

/// Write the default config to `config_path`, creating parent directories.
///
/// Refuses to overwrite an existing file.
pub fn write_default_config(config_path: &Path) -> io::Result<()> {
    if config_path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", config_path.display()),
        ));
    }
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(config_path, DEFAULT_CONFIG_TOML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_describe_reports_given_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[render]\nmargin_horizontal = 4\n").unwrap();
        let config = Config::load_from_explicit(&path).unwrap();

        let text = describe_config(&config, &path);
        assert!(text.contains(&format!("Config file: {} (exists)", path.display())));
        assert!(text.contains("Margins: 4 columns, 2 rows"));
        assert!(text.contains("Mode: glyph"));
    }

    #[test]
    fn test_describe_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let text = describe_config(&Config::default(), &path);
        assert!(text.contains("(not found)"));
    }

    #[test]
    fn test_write_default_config_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        write_default_config(&path).unwrap();

        let written = Config::load_from_explicit(&path).unwrap();
        assert_eq!(written, Config::default());
    }

    #[test]
    fn test_write_default_config_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[render]\nmargin_vertical = 9\n").unwrap();

        let err = write_default_config(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[render]\nmargin_vertical = 9\n"
        );
    }
}
