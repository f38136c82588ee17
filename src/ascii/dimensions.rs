//! Grid sizing for aspect-ratio-correct rendering.

use crate::error::GeometryError;

/// Reference glyph cell height used for aspect correction.
pub const DEFAULT_CELL_HEIGHT: u32 = 72;

/// Reference glyph cell width used for aspect correction.
pub const DEFAULT_CELL_WIDTH: u32 = 38;

/// Default blank columns kept on each side of the image.
pub const DEFAULT_MARGIN_HORIZONTAL: u16 = 15;

/// Default blank rows kept above and below the image.
pub const DEFAULT_MARGIN_VERTICAL: u16 = 2;

/// Height:width proportion of one terminal character cell.
///
/// Terminal cells are taller than wide, so mapping pixels to cells one to
/// one would stretch the image vertically. The ratio is applied with
/// integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellAspect {
    pub height: u32,
    pub width: u32,
}

impl CellAspect {
    /// Zero components are bumped to 1.
    pub fn new(height: u32, width: u32) -> Self {
        Self {
            height: height.max(1),
            width: width.max(1),
        }
    }
}

impl Default for CellAspect {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH)
    }
}

/// Blank space kept around the image on each side of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub horizontal: u16,
    pub vertical: u16,
}

impl Margins {
    pub const NONE: Margins = Margins {
        horizontal: 0,
        vertical: 0,
    };

    pub fn new(horizontal: u16, vertical: u16) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(DEFAULT_MARGIN_HORIZONTAL, DEFAULT_MARGIN_VERTICAL)
    }
}

/// Character dimensions of the output surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u16,
    pub height: u16,
}

impl SurfaceSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the image grid sits on the surface.
///
/// The grid is centered inside the usable area on both axes; whatever is
/// left over goes to the right and bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub surface: SurfaceSize,
    pub margins: Margins,
    pub usable_width: u16,
    pub usable_height: u16,
    /// Output grid width in characters.
    pub columns: u16,
    /// Output grid height in characters.
    pub rows: u16,
}

impl GridLayout {
    /// Lay out a `columns` x `rows` grid on `surface`.
    ///
    /// Fails when the margins leave no usable area. The grid is clamped
    /// to the usable area and to at least one cell per axis.
    pub fn new(
        surface: SurfaceSize,
        margins: Margins,
        columns: u16,
        rows: u16,
    ) -> Result<Self, GeometryError> {
        let (usable_width, usable_height) = usable_area(surface, margins)?;
        Ok(Self {
            surface,
            margins,
            usable_width,
            usable_height,
            columns: columns.clamp(1, usable_width),
            rows: rows.clamp(1, usable_height),
        })
    }

    /// Lay out an image of `img_width` x `img_height` pixels.
    pub fn for_image(
        img_width: u32,
        img_height: u32,
        surface: SurfaceSize,
        margins: Margins,
        aspect: CellAspect,
    ) -> Result<Self, GeometryError> {
        if img_width == 0 || img_height == 0 {
            return Err(GeometryError::EmptyImage);
        }
        let (usable_width, usable_height) = usable_area(surface, margins)?;
        let (columns, rows) =
            calculate_grid(img_width, img_height, usable_width, usable_height, aspect);
        Self::new(surface, margins, columns, rows)
    }

    /// Blank columns before each grid row.
    pub fn left_padding(&self) -> u16 {
        self.margins.horizontal + (self.usable_width - self.columns) / 2
    }

    /// Blank rows above the grid.
    pub fn top_padding(&self) -> u16 {
        self.margins.vertical + (self.usable_height - self.rows) / 2
    }

    /// Blank rows below the grid, so the frame fills the surface height.
    pub fn bottom_padding(&self) -> u16 {
        self.surface.height - self.top_padding() - self.rows
    }
}

/// Surface dimensions minus twice the margins on each axis.
pub fn usable_area(surface: SurfaceSize, margins: Margins) -> Result<(u16, u16), GeometryError> {
    let width = surface.width.saturating_sub(margins.horizontal.saturating_mul(2));
    let height = surface.height.saturating_sub(margins.vertical.saturating_mul(2));
    if width == 0 || height == 0 {
        return Err(GeometryError::SurfaceTooSmall {
            width: surface.width,
            height: surface.height,
            margin_horizontal: margins.horizontal,
            margin_vertical: margins.vertical,
        });
    }
    Ok((width, height))
}

/// Choose the output grid for an image, preserving its aspect ratio.
///
/// A wider-than-tall image takes the full usable width and derives its
/// height; otherwise the full usable height is taken and the width is
/// derived. The derived axis is scaled by the cell aspect and clamped to
/// `1..=usable` on that axis.
///
/// # Example
/// ```ignore
/// // 200x100 image, 100x50 usable area, 72:38 cells
/// let (w, h) = calculate_grid(200, 100, 100, 50, CellAspect::default());
/// assert_eq!((w, h), (100, 26));
/// ```
pub fn calculate_grid(
    img_width: u32,
    img_height: u32,
    usable_width: u16,
    usable_height: u16,
    aspect: CellAspect,
) -> (u16, u16) {
    if img_width == 0 || img_height == 0 || usable_width == 0 || usable_height == 0 {
        return (usable_width.max(1), usable_height.max(1));
    }

    // u16 * u32 * u32 always fits in u128
    let aspect = CellAspect::new(aspect.height, aspect.width);
    let img_w = u128::from(img_width);
    let img_h = u128::from(img_height);
    let cell_h = u128::from(aspect.height);
    let cell_w = u128::from(aspect.width);

    if img_width > img_height {
        let rows = u128::from(usable_width) * img_h * cell_w / (img_w * cell_h);
        (usable_width, clamp_axis(rows, usable_height))
    } else {
        let columns = u128::from(usable_height) * img_w * cell_h / (img_h * cell_w);
        (clamp_axis(columns, usable_width), usable_height)
    }
}

fn clamp_axis(value: u128, max: u16) -> u16 {
    value.clamp(1, u128::from(max)) as u16
}
