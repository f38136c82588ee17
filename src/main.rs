use std::io::BufRead;

use asciimation::ascii::{GlyphGallery, Rasterizer, RenderMode};
use asciimation::cli::{handle_config_action, Args, Command, Settings};
use asciimation::config::{default_path, Config};
use asciimation::playback::{ctrlc_received, setup_ctrlc_handler, Session};
use asciimation::source::{decode_file, DecodedInput};
use asciimation::surface::{terminal_size, AnsiSurface, Surface};
use clap::Parser;

type AppResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(default_path);

    // If --config is specified, require the file to exist, except for the
    // config subcommands, which may be about to create it
    let config = match (&args.command, args.config.as_deref()) {
        (Some(Command::Config { .. }), _) | (_, None) => Config::load(Some(&config_path)),
        (_, Some(path)) => Config::load_from_explicit(path),
    };
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match &args.command {
        Some(Command::Config { action }) => {
            handle_config_action(action.clone(), &config, &config_path);
            Ok(())
        }
        Some(Command::Calibrate) => run_calibrate(&Settings::resolve(&args, &config)),
        None => run_render(&args, &Settings::resolve(&args, &config)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_calibrate(settings: &Settings) -> AppResult {
    let gallery = GlyphGallery::default();
    let session = Session::new(Rasterizer::new(&gallery), settings.margins);
    let mut surface = AnsiSurface::stdout(settings.surface_size(terminal_size()));

    session.show_calibration(&mut surface)?;
    wait_for_enter()?;
    surface.clear()?;
    Ok(())
}

fn run_render(args: &Args, settings: &Settings) -> AppResult {
    let Some(image_path) = args.image.as_deref() else {
        return Err("no image given (see --help)".into());
    };

    let gallery = match settings.mode {
        RenderMode::Glyph => {
            GlyphGallery::load_dir(&settings.font_dir, &settings.font_extension)?
        }
        RenderMode::Binary => GlyphGallery::default(),
    };

    let input = decode_file(image_path)?;

    let rasterizer = Rasterizer::new(&gallery)
        .with_aspect(settings.aspect)
        .with_mode(settings.mode);
    let mut session = Session::new(rasterizer, settings.margins).with_delay_unit(settings.delay_unit);
    let mut surface = AnsiSurface::stdout(settings.surface_size(terminal_size()));

    match input {
        DecodedInput::Still(image) => {
            session.show(&image, &mut surface)?;
            if settings.wait_for_enter {
                wait_for_enter()?;
                surface.clear()?;
            }
        }
        DecodedInput::Sequence(frames) => {
            if let Err(e) = setup_ctrlc_handler() {
                log::warn!("Could not set up Ctrl+C handler: {}", e);
            }
            session.play(&frames, &mut surface, ctrlc_received)?;
        }
    }

    Ok(())
}

fn wait_for_enter() -> std::io::Result<()> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
