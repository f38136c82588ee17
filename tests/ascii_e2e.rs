//! End-to-end tests: glyph assets and input images on disk, rendered to an
//! in-memory surface.

use std::io::Cursor;
use std::time::Duration;

use asciimation::ascii::{GlyphGallery, Margins, Rasterizer, RenderMode, SurfaceSize};
use asciimation::playback::Session;
use asciimation::source::{decode_file, DecodedInput, SequenceFrame};
use asciimation::surface::{AnsiSurface, MemorySurface, Surface, SurfaceEvent};
use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, ImageFormat, Rgba, RgbaImage};
use tempfile::TempDir;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Write a small font: blank, solid, and a left-half bar.
fn write_font(dir: &TempDir) {
    RgbaImage::from_pixel(48, 72, WHITE)
        .save(dir.path().join(" .png"))
        .unwrap();
    RgbaImage::from_pixel(48, 72, BLACK)
        .save(dir.path().join("@.png"))
        .unwrap();
    RgbaImage::from_fn(48, 72, |x, _| if x < 24 { BLACK } else { WHITE })
        .save(dir.path().join("[.png"))
        .unwrap();
}

fn write_gif(dir: &TempDir, name: &str, frames: Vec<(RgbaImage, u32)>) -> std::path::PathBuf {
    let mut out = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut out);
        for (img, delay_ms) in frames {
            encoder
                .encode_frame(Frame::from_parts(
                    img,
                    0,
                    0,
                    Delay::from_numer_denom_ms(delay_ms, 1),
                ))
                .unwrap();
        }
    }
    let path = dir.path().join(name);
    std::fs::write(&path, out).unwrap();
    path
}

#[test]
fn test_still_image_renders_from_disk() {
    let fonts = TempDir::new().unwrap();
    write_font(&fonts);
    let gallery = GlyphGallery::load_dir(fonts.path(), "png").unwrap();
    assert_eq!(gallery.symbols().collect::<Vec<_>>(), vec![" ", "@", "["]);

    let inputs = TempDir::new().unwrap();
    let path = inputs.path().join("input.png");
    RgbaImage::from_fn(200, 100, |x, _| if x < 100 { BLACK } else { WHITE })
        .save(&path)
        .unwrap();

    let DecodedInput::Still(image) = decode_file(&path).unwrap() else {
        panic!("png decoded as sequence");
    };

    let mut session = Session::new(Rasterizer::new(&gallery), Margins::new(2, 1));
    let mut surface = MemorySurface::new(SurfaceSize::new(44, 20));
    session.show(&image, &mut surface).unwrap();

    let frames = surface.frames();
    assert_eq!(frames.len(), 1);
    let frame = frames[0];
    assert_eq!(frame.columns(), 40);
    assert_eq!(frame.symbol(0, 0), Some("@"));
    assert_eq!(frame.symbol(39, 0), Some(" "));
}

#[test]
fn test_gif_plays_every_frame_with_shared_cache() {
    let fonts = TempDir::new().unwrap();
    write_font(&fonts);
    let gallery = GlyphGallery::load_dir(fonts.path(), "png").unwrap();

    let inputs = TempDir::new().unwrap();
    let path = write_gif(
        &inputs,
        "anim.gif",
        vec![
            (RgbaImage::from_pixel(32, 16, BLACK), 10),
            (RgbaImage::from_pixel(32, 16, WHITE), 10),
            (RgbaImage::from_pixel(32, 16, BLACK), 10),
        ],
    );

    let DecodedInput::Sequence(frames) = decode_file(&path).unwrap() else {
        panic!("gif decoded as still");
    };
    assert_eq!(frames.len(), 3);
    assert!(frames.iter().all(|f| f.delay == 1));

    let mut session = Session::new(Rasterizer::new(&gallery), Margins::NONE)
        .with_delay_unit(Duration::ZERO);
    let mut surface = MemorySurface::new(SurfaceSize::new(20, 10));
    let report = session.play(&frames, &mut surface, || false).unwrap();

    assert_eq!(report.rendered, 3);
    assert_eq!(report.skipped, 0);
    // Two distinct flat frames produce exactly two cached patterns.
    assert_eq!(session.cache().len(), 2);
    assert_eq!(surface.events().last(), Some(&SurfaceEvent::Clear));
}

#[test]
fn test_sequence_skips_frame_of_different_width() {
    let gallery = GlyphGallery::new(Vec::new());
    let frames = vec![
        SequenceFrame::new(RgbaImage::from_pixel(40, 20, BLACK), 0),
        SequenceFrame::new(RgbaImage::from_pixel(20, 20, BLACK), 0),
        SequenceFrame::new(RgbaImage::from_pixel(40, 20, WHITE), 0),
    ];

    let mut session = Session::new(
        Rasterizer::new(&gallery).with_mode(RenderMode::Binary),
        Margins::NONE,
    );
    let mut surface = MemorySurface::new(SurfaceSize::new(20, 10));
    let report = session.play(&frames, &mut surface, || false).unwrap();

    assert_eq!(report.rendered, 2);
    assert_eq!(report.skipped, 1);
    let drawn = surface.frames();
    assert!(drawn[0].cells().iter().all(|c| c == "X"));
    assert!(drawn[1].cells().iter().all(|c| c == " "));
}

#[test]
fn test_gif_frame_of_different_width_is_skipped() {
    let inputs = TempDir::new().unwrap();
    let path = write_gif(
        &inputs,
        "partial.gif",
        vec![
            (RgbaImage::from_pixel(40, 20, BLACK), 0),
            (RgbaImage::from_pixel(20, 20, BLACK), 0),
            (RgbaImage::from_pixel(40, 20, WHITE), 0),
        ],
    );

    let DecodedInput::Sequence(frames) = decode_file(&path).unwrap() else {
        panic!("gif decoded as still");
    };
    assert_eq!(frames.len(), 3);

    let gallery = GlyphGallery::new(Vec::new());
    let mut session = Session::new(
        Rasterizer::new(&gallery).with_mode(RenderMode::Binary),
        Margins::NONE,
    );
    let mut surface = MemorySurface::new(SurfaceSize::new(20, 10));
    let report = session.play(&frames, &mut surface, || false).unwrap();

    assert_eq!(report.rendered, 2);
    assert_eq!(report.skipped, 1);
    let drawn = surface.frames();
    assert!(drawn[0].cells().iter().all(|c| c == "X"));
    assert!(drawn[1].cells().iter().all(|c| c == " "));
}

#[test]
fn test_ansi_surface_output() {
    let gallery = GlyphGallery::new(Vec::new());
    let mut session = Session::new(
        Rasterizer::new(&gallery).with_mode(RenderMode::Binary),
        Margins::new(1, 1),
    );
    let mut surface = AnsiSurface::new(Vec::new(), SurfaceSize::new(6, 4));
    let image = RgbaImage::from_pixel(8, 4, BLACK);
    session.show(&image, &mut surface).unwrap();
    assert_eq!(surface.size(), SurfaceSize::new(6, 4));

    let output = String::from_utf8(surface.into_inner()).unwrap();
    assert!(output.starts_with("\x1b[2J\x1b[H"));
    assert!(output.contains(" XXXX"));
}

#[test]
fn test_content_sniffing_overrides_extension() {
    let inputs = TempDir::new().unwrap();
    let path = inputs.path().join("really_a_png.gif");
    let mut bytes = Vec::new();
    RgbaImage::from_pixel(4, 4, WHITE)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    std::fs::write(&path, bytes).unwrap();

    assert!(matches!(decode_file(&path).unwrap(), DecodedInput::Still(_)));
}
