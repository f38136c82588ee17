//! Rasterized frames: a grid of display symbols placed on a surface.

use crate::ascii::{GridLayout, Margins, SurfaceSize};
use crate::error::GeometryError;

/// Symbol used to fill the usable area of a calibration frame.
pub const CALIBRATION_SYMBOL: &str = "X";

/// A rasterized frame.
///
/// Holds one symbol per grid cell in row-major order, plus the layout
/// that places the grid on the output surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    cells: Vec<String>,
    layout: GridLayout,
}

impl Frame {
    /// Create a frame from row-major cells. `cells` must hold
    /// `layout.columns * layout.rows` symbols.
    pub fn new(cells: Vec<String>, layout: GridLayout) -> Self {
        debug_assert_eq!(
            cells.len(),
            layout.columns as usize * layout.rows as usize
        );
        Self { cells, layout }
    }

    /// A frame that fills the whole usable area with `X`, for checking
    /// margins against a real terminal.
    pub fn calibration(surface: SurfaceSize, margins: Margins) -> Result<Self, GeometryError> {
        let layout = GridLayout::new(surface, margins, u16::MAX, u16::MAX)?;
        let count = layout.columns as usize * layout.rows as usize;
        Ok(Self::new(vec![CALIBRATION_SYMBOL.to_string(); count], layout))
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Grid width in characters.
    pub fn columns(&self) -> u16 {
        self.layout.columns
    }

    /// Grid height in characters.
    pub fn rows(&self) -> u16 {
        self.layout.rows
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Symbol at grid column `x`, row `y`.
    pub fn symbol(&self, x: u16, y: u16) -> Option<&str> {
        if x >= self.layout.columns || y >= self.layout.rows {
            return None;
        }
        let idx = y as usize * self.layout.columns as usize + x as usize;
        self.cells.get(idx).map(String::as_str)
    }

    /// The grid rows without any margins.
    pub fn grid_lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.layout.columns.max(1) as usize)
            .map(|row| row.concat())
            .collect()
    }

    /// Every surface row: blank rows above and below, and each grid row
    /// preceded by the left padding.
    pub fn lines(&self) -> Vec<String> {
        let padding = " ".repeat(self.layout.left_padding() as usize);
        let top = self.layout.top_padding() as usize;
        let bottom = self.layout.bottom_padding() as usize;

        let mut lines = Vec::with_capacity(top + self.layout.rows as usize + bottom);
        lines.extend(std::iter::repeat(String::new()).take(top));
        for row in self.grid_lines() {
            lines.push(format!("{}{}", padding, row));
        }
        lines.extend(std::iter::repeat(String::new()).take(bottom));
        lines
    }

    /// Convert the frame to a string (for rendering).
    ///
    /// Surface rows are joined by newlines.
    pub fn to_string_display(&self) -> String {
        self.lines().join("\n")
    }
}
