//! Drawing the playing field with half-block pixels
use super::direction::Direction;
use super::grid::Grid;
use super::motion::Point;
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect, Size},
    style::{Color, Style},
    widgets::Widget,
};

/// Where the playing field sits within a terminal area and how large it is
/// drawn.
///
/// Each terminal cell holds two square pixels, one above the other, and each
/// grid cell is `scale` × `scale` pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FieldView {
    /// The terminal cells that the field is drawn in
    pub(crate) area: Rect,

    /// Pixels per grid cell along each axis
    pub(crate) scale: u16,

    grid: Grid,
}

impl FieldView {
    /// Fit `grid` into `available` at the largest whole-number scale that
    /// fits, or at scale 1 (clipped) if nothing fits
    pub(crate) fn new(available: Rect, grid: Grid) -> FieldView {
        let by_width = available.width.checked_div(grid.width).unwrap_or(0);
        let by_height = available
            .height
            .saturating_mul(2)
            .checked_div(grid.height)
            .unwrap_or(0);
        let scale = by_width.min(by_height).max(1);
        let size = Size {
            width: grid.width.saturating_mul(scale),
            height: grid.height.saturating_mul(scale).div_ceil(2),
        };
        FieldView {
            area: center_rect(available, size),
            scale,
            grid,
        }
    }

    pub(crate) fn pixel_width(&self) -> u16 {
        self.grid.width.saturating_mul(self.scale)
    }

    pub(crate) fn pixel_height(&self) -> u16 {
        self.grid.height.saturating_mul(self.scale)
    }

    /// Convert a terminal cell to the grid location at the center of that
    /// cell.  The result may lie outside the grid.
    pub(crate) fn to_grid(&self, pos: Position) -> Point {
        let col = f64::from(pos.x) - f64::from(self.area.x) + 0.5;
        let row = f64::from(pos.y) - f64::from(self.area.y);
        let scale = f64::from(self.scale);
        Point::new(col / scale, row.mul_add(2.0, 1.0) / scale)
    }
}

/// An off-screen image of the playing field, one color per pixel
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Raster {
    view: FieldView,
    pixels: Vec<Color>,
}

impl Raster {
    pub(crate) fn new(view: FieldView, background: Color) -> Raster {
        let len = usize::from(view.pixel_width()) * usize::from(view.pixel_height());
        Raster {
            view,
            pixels: vec![background; len],
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        let width = usize::from(self.view.pixel_width());
        (x < width && y < usize::from(self.view.pixel_height())).then_some(y * width + x)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Return the pixel coordinates of the top-left corner of a grid cell at
    /// `at`, rounded to the nearest pixel
    fn corner(&self, at: Point) -> (i32, i32) {
        let scale = f64::from(self.view.scale);
        (to_pixel(at.x * scale), to_pixel(at.y * scale))
    }

    /// Fill a cell-sized square with its top-left corner at grid location
    /// `at`
    pub(crate) fn fill_cell(&mut self, at: Point, color: Color) {
        let (x0, y0) = self.corner(at);
        let s = i32::from(self.view.scale);
        for y in y0..(y0 + s) {
            for x in x0..(x0 + s) {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Draw a pair of eyes on the leading edge of the head cell at `at`.  The
    /// eyes are only drawn when a cell is at least three pixels across.
    pub(crate) fn draw_eyes(&mut self, at: Point, facing: Direction, color: Color) {
        let s = i32::from(self.view.scale);
        if s < 3 {
            return;
        }
        let (x0, y0) = self.corner(at);
        let inset = s / 4;
        let near = inset;
        let far = s - 1 - inset;
        let eyes = match facing {
            Direction::North => [(near, near), (far, near)],
            Direction::South => [(near, far), (far, far)],
            Direction::East => [(far, near), (far, far)],
            Direction::West => [(near, near), (near, far)],
        };
        for (dx, dy) in eyes {
            self.set_pixel(x0 + dx, y0 + dy, color);
        }
    }
}

impl Widget for &Raster {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let area = self.view.area;
        for (row, y) in (area.top()..area.bottom()).enumerate() {
            let top_y = i32::try_from(row * 2).unwrap_or(i32::MAX);
            for (col, x) in (area.left()..area.right()).enumerate() {
                let px = i32::try_from(col).unwrap_or(i32::MAX);
                let top = self.get_pixel(px, top_y).unwrap_or(Color::Reset);
                let bottom = self.get_pixel(px, top_y + 1).unwrap_or(Color::Reset);
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(consts::HALF_BLOCK_SYMBOL);
                    cell.set_style(Style::new().fg(top).bg(bottom));
                }
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_pixel(v: f64) -> i32 {
    // `as` saturates, and the field is never anywhere near `i32::MAX` pixels
    v.round() as i32
}
