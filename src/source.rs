//! Decoded pixel sources: still images and animated sequences.
//!
//! Still images are decoded by the `image` crate. GIF sequences go through
//! the `gif` crate directly so every frame keeps its own rectangle instead
//! of being composited onto the logical screen.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage, RgbaImage};

use crate::ascii::PixelSample;
use crate::error::DecodeError;

/// Anything that can be read pixel by pixel.
///
/// Callers keep `x < width()` and `y < height()`.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixel(&self, x: u32, y: u32) -> PixelSample;
}

impl PixelSource for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> PixelSample {
        let [r, g, b, a] = self.get_pixel(x, y).0;
        PixelSample::rgba(r, g, b, a)
    }
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> PixelSample {
        let [r, g, b] = self.get_pixel(x, y).0;
        PixelSample::rgb(r, g, b)
    }
}

/// One frame of an animated sequence.
#[derive(Debug, Clone)]
pub struct SequenceFrame {
    pub image: RgbaImage,
    /// Display time in hundredths of a second, as GIF stores it.
    pub delay: u32,
}

impl SequenceFrame {
    pub fn new(image: RgbaImage, delay: u32) -> Self {
        Self { image, delay }
    }
}

/// Result of decoding an input file.
#[derive(Debug, Clone)]
pub enum DecodedInput {
    Still(RgbaImage),
    Sequence(Vec<SequenceFrame>),
}

/// Read and decode an image file.
///
/// GIF content plays as a sequence; every other format decodes to a still.
pub fn decode_file(path: &Path) -> Result<DecodedInput, DecodeError> {
    let bytes = std::fs::read(path).map_err(|source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let by_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("gif"))
        .unwrap_or(false);

    decode_bytes(&bytes, by_extension)
}

/// Decode in-memory image data. `assume_gif` is used only when the
/// content itself cannot be identified.
pub fn decode_bytes(bytes: &[u8], assume_gif: bool) -> Result<DecodedInput, DecodeError> {
    let is_gif = match image::guess_format(bytes) {
        Ok(format) => format == ImageFormat::Gif,
        Err(_) => assume_gif,
    };

    if is_gif {
        decode_sequence(bytes).map(DecodedInput::Sequence)
    } else {
        decode_still(bytes).map(DecodedInput::Still)
    }
}

/// Decode a single still image to RGBA.
pub fn decode_still(bytes: &[u8]) -> Result<RgbaImage, DecodeError> {
    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgba8())
}

/// Decode every frame of a GIF along with its delay.
///
/// Frames are returned as stored: a frame covering only part of the
/// logical screen keeps its own width and height.
pub fn decode_sequence(bytes: &[u8]) -> Result<Vec<SequenceFrame>, DecodeError> {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::RGBA);
    let mut decoder = options.read_info(Cursor::new(bytes))?;

    let mut frames = Vec::new();
    while let Some(frame) = decoder.read_next_frame()? {
        let (width, height) = (u32::from(frame.width), u32::from(frame.height));
        let image = RgbaImage::from_raw(width, height, frame.buffer.to_vec())
            .ok_or(DecodeError::FrameSize { width, height })?;
        frames.push(SequenceFrame::new(image, u32::from(frame.delay)));
    }

    if frames.is_empty() {
        return Err(DecodeError::EmptySequence);
    }

    log::debug!("Decoded GIF sequence with {} frames", frames.len());
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::GifEncoder;
    use image::{Delay, Frame, Rgba};

    fn encode_gif(frames: Vec<(RgbaImage, u32)>) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut out);
            for (img, delay_ms) in frames {
                let frame = Frame::from_parts(img, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1));
                encoder.encode_frame(frame).unwrap();
            }
        }
        out
    }

    fn encode_png(img: &RgbaImage) -> Vec<u8> {
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
            .unwrap();
        out
    }

    #[test]
    fn test_rgba_pixel_source() {
        let mut img = RgbaImage::from_pixel(3, 2, Rgba([255, 255, 255, 255]));
        img.put_pixel(2, 1, Rgba([10, 20, 30, 40]));
        assert_eq!(PixelSource::width(&img), 3);
        assert_eq!(PixelSource::height(&img), 2);
        assert_eq!(img.pixel(2, 1), PixelSample::rgba(10, 20, 30, 40));
    }

    #[test]
    fn test_decode_png_is_still() {
        let img = RgbaImage::from_pixel(4, 3, Rgba([0, 0, 0, 255]));
        let decoded = decode_bytes(&encode_png(&img), false).unwrap();
        match decoded {
            DecodedInput::Still(still) => assert_eq!(still.dimensions(), (4, 3)),
            DecodedInput::Sequence(_) => panic!("png decoded as sequence"),
        }
    }

    #[test]
    fn test_decode_gif_is_sequence_with_delays() {
        let black = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let white = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        let bytes = encode_gif(vec![(black, 100), (white, 50)]);

        let decoded = decode_bytes(&bytes, false).unwrap();
        let DecodedInput::Sequence(frames) = decoded else {
            panic!("gif decoded as still");
        };
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].delay, 10);
        assert_eq!(frames[1].delay, 5);
        assert_eq!(frames[0].image.dimensions(), (4, 4));
    }

    #[test]
    fn test_decode_gif_keeps_frame_rectangles() {
        let bytes = encode_gif(vec![
            (RgbaImage::from_pixel(40, 20, Rgba([0, 0, 0, 255])), 10),
            (RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 255])), 10),
            (RgbaImage::from_pixel(40, 20, Rgba([255, 255, 255, 255])), 10),
        ]);

        let frames = decode_sequence(&bytes).unwrap();
        let widths: Vec<u32> = frames.iter().map(|f| f.image.width()).collect();
        assert_eq!(widths, vec![40, 20, 40]);
        assert_eq!(frames[2].image.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_decode_truncated_gif_fails() {
        let bytes = encode_gif(vec![(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255])), 10)]);
        let result = decode_sequence(&bytes[..bytes.len() / 2]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode_bytes(b"definitely not an image", false);
        assert!(matches!(result, Err(DecodeError::Image(_))));
    }

    #[test]
    fn test_decode_missing_file() {
        let result = decode_file(Path::new("/nonexistent/input.png"));
        assert!(matches!(result, Err(DecodeError::Io { .. })));
    }
}
