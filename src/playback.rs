//! Rendering sessions: still images and paced playback of sequences.
//!
//! A [`Session`] owns the match cache, so every frame rendered through it
//! reuses the matches of the frames before.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::ascii::{Margins, MatchCache, Rasterizer, SurfaceSize};
use crate::error::{GeometryError, RenderError};
use crate::frame::Frame;
use crate::source::{PixelSource, SequenceFrame};
use crate::surface::Surface;

/// Wall-clock length of one GIF delay unit (a hundredth of a second).
pub const DEFAULT_DELAY_UNIT: Duration = Duration::from_millis(10);

/// Outcome of playing a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackReport {
    /// Frames rasterized and drawn.
    pub rendered: usize,
    /// Frames dropped because their width differs from the first frame.
    pub skipped: usize,
    /// Playback stopped early on request.
    pub cancelled: bool,
}

/// One rendering session over a fixed gallery.
pub struct Session<'g> {
    rasterizer: Rasterizer<'g>,
    cache: MatchCache,
    margins: Margins,
    delay_unit: Duration,
}

impl<'g> Session<'g> {
    pub fn new(rasterizer: Rasterizer<'g>, margins: Margins) -> Self {
        Self {
            rasterizer,
            cache: MatchCache::new(),
            margins,
            delay_unit: DEFAULT_DELAY_UNIT,
        }
    }

    /// Set how long one unit of a frame's delay lasts.
    pub fn with_delay_unit(mut self, delay_unit: Duration) -> Self {
        self.delay_unit = delay_unit;
        self
    }

    pub fn cache(&self) -> &MatchCache {
        &self.cache
    }

    /// Rasterize one image for a surface of the given size.
    pub fn render_frame<S: PixelSource + ?Sized>(
        &mut self,
        image: &S,
        size: SurfaceSize,
    ) -> Result<Frame, GeometryError> {
        self.rasterizer
            .rasterize(image, size, self.margins, &mut self.cache)
    }

    /// Rasterize `image`, then clear `surface` and draw it.
    ///
    /// Nothing is drawn if rasterization fails.
    pub fn show<S: PixelSource + ?Sized>(
        &mut self,
        image: &S,
        surface: &mut dyn Surface,
    ) -> Result<(), RenderError> {
        let frame = self.render_frame(image, surface.size())?;
        surface.clear()?;
        surface.draw(&frame)?;
        Ok(())
    }

    /// Draw the calibration frame for the current margins.
    pub fn show_calibration(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        let frame = Frame::calibration(surface.size(), self.margins)?;
        surface.clear()?;
        surface.draw(&frame)?;
        Ok(())
    }

    /// Play `frames` in order, pacing each by its delay.
    ///
    /// Frames whose width differs from the first frame's are skipped, not
    /// resized, but their delay is still honoured. `should_stop` is checked
    /// before every frame. The surface is cleared when playback ends.
    pub fn play<F>(
        &mut self,
        frames: &[SequenceFrame],
        surface: &mut dyn Surface,
        should_stop: F,
    ) -> Result<PlaybackReport, RenderError>
    where
        F: Fn() -> bool,
    {
        let mut report = PlaybackReport::default();
        let Some(first) = frames.first() else {
            return Ok(report);
        };
        let width = first.image.width();

        for (i, frame) in frames.iter().enumerate() {
            if should_stop() {
                log::info!("Playback cancelled before frame {}", i);
                report.cancelled = true;
                break;
            }

            if frame.image.width() == width {
                self.show(&frame.image, surface)?;
                report.rendered += 1;
            } else {
                log::debug!(
                    "Skipping frame {}: width {} differs from first frame width {}",
                    i,
                    frame.image.width(),
                    width
                );
                report.skipped += 1;
            }

            let pause = self.delay_unit.saturating_mul(frame.delay);
            if !pause.is_zero() {
                thread::sleep(pause);
            }
        }

        surface.clear()?;

        let stats = self.cache.stats();
        log::info!(
            "Played {} frames ({} skipped), {} cached patterns, {:.1}% cache hits",
            report.rendered,
            report.skipped,
            self.cache.len(),
            stats.hit_rate() * 100.0
        );
        Ok(report)
    }
}

/// Global flag for handling Ctrl+C during playback
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

/// Check if Ctrl+C has been received.
pub fn ctrlc_received() -> bool {
    CTRLC_RECEIVED.load(Ordering::SeqCst)
}

/// Set up the Ctrl+C handler.
///
/// This should be called once at program startup. Playback stops before
/// the next frame once the flag is set.
pub fn setup_ctrlc_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        CTRLC_RECEIVED.store(true, Ordering::SeqCst);
    })
}
