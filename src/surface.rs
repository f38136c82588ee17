//! Output surfaces that frames are drawn onto.

use std::io::{self, Write};

use crate::ascii::SurfaceSize;
use crate::frame::Frame;

/// Clear the screen and home the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// A fixed-size character grid that frames are drawn onto.
///
/// Callers clear the surface once before drawing each frame.
pub trait Surface {
    fn size(&self) -> SurfaceSize;
    fn clear(&mut self) -> io::Result<()>;
    fn draw(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Query the controlling terminal's size in characters.
pub fn terminal_size() -> Option<SurfaceSize> {
    match crossterm::terminal::size() {
        Ok((width, height)) if width > 0 && height > 0 => Some(SurfaceSize::new(width, height)),
        Ok(_) => None,
        Err(e) => {
            log::debug!("Could not query terminal size: {}", e);
            None
        }
    }
}

/// Draws frames as plain text with ANSI clear sequences.
pub struct AnsiSurface<W: Write> {
    out: W,
    size: SurfaceSize,
}

impl AnsiSurface<io::Stdout> {
    pub fn stdout(size: SurfaceSize) -> Self {
        Self::new(io::stdout(), size)
    }
}

impl<W: Write> AnsiSurface<W> {
    pub fn new(out: W, size: SurfaceSize) -> Self {
        Self { out, size }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for AnsiSurface<W> {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self) -> io::Result<()> {
        self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        self.out.flush()
    }

    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        // One write per frame. No newline after the last row, or a terminal
        // exactly `size.height` rows tall scrolls its top row away.
        let output = frame.to_string_display();
        self.out.write_all(output.as_bytes())?;
        self.out.flush()
    }
}

/// What happened on a [`MemorySurface`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Clear,
    Draw(Frame),
}

/// Records clears and frames instead of displaying them.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    size: SurfaceSize,
    events: Vec<SurfaceEvent>,
}

impl MemorySurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> Vec<&Frame> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Draw(frame) => Some(frame),
                SurfaceEvent::Clear => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::Clear))
            .count()
    }
}

impl Surface for MemorySurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self) -> io::Result<()> {
        self.events.push(SurfaceEvent::Clear);
        Ok(())
    }

    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        self.events.push(SurfaceEvent::Draw(frame.clone()));
        Ok(())
    }
}
