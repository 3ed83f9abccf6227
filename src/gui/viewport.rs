use super::Config;
use crate::Cell;
use eframe::egui::{Pos2, Rect, Vec2};

/// Maps canvas pixels to cells and back.
///
/// `top_left` is the cell drawn at the canvas origin; a cell is
/// `scale * PIXELS_PER_CELL` pixels wide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub top_left: Cell,
    pub scale: f32,
    drag_remainder: Vec2, // Part of the drag (in cells) not yet applied to `top_left`.
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            top_left: Cell::new(0, 0),
            scale: 1.,
            drag_remainder: Vec2::ZERO,
        }
    }
}

impl Viewport {
    pub fn cell_size(&self) -> f32 {
        self.scale * Config::PIXELS_PER_CELL
    }

    /// Pixel bounds of `cell` on a canvas whose top left corner is `canvas_origin`.
    pub fn cell_rect(&self, cell: Cell, canvas_origin: Pos2) -> Rect {
        let size = self.cell_size();
        let offset = Vec2::new(
            (cell.x - self.top_left.x) as f32,
            (cell.y - self.top_left.y) as f32,
        );
        Rect::from_min_size(canvas_origin + offset * size, Vec2::splat(size))
    }

    /// Cell under the pixel `pos`.
    pub fn which_cell(&self, pos: Pos2, canvas_origin: Pos2) -> Cell {
        let p = (pos - canvas_origin) / self.cell_size();
        self.top_left.offset(p.x.floor() as i64, p.y.floor() as i64)
    }

    /// Inclusive range of cells at least partially visible on a canvas of `size` pixels.
    pub fn visible_cells(&self, size: Vec2) -> (Cell, Cell) {
        let cells = size / self.cell_size();
        let bottom_right = self
            .top_left
            .offset(cells.x.ceil() as i64 - 1, cells.y.ceil() as i64 - 1);
        (self.top_left, bottom_right)
    }

    pub fn pan_cells(&mut self, dx: i64, dy: i64) {
        self.top_left = self.top_left.offset(dx, dy);
    }

    /// Moves the field along with a pointer drag of `delta` pixels.
    pub fn pan_pixels(&mut self, delta: Vec2) {
        let total = self.drag_remainder + delta / self.cell_size();
        let whole = Vec2::new(total.x.trunc(), total.y.trunc());
        self.drag_remainder = total - whole;
        self.pan_cells(-(whole.x as i64), -(whole.y as i64));
    }

    pub fn zoom(&mut self, factor: f32) {
        self.scale = (self.scale * factor).clamp(Config::MIN_SCALE, Config::MAX_SCALE);
    }

    /// Centers the inclusive box `bounds` on a canvas of `size` pixels and zooms to show it.
    pub fn fit(&mut self, (min, max): (Cell, Cell), size: Vec2) {
        let margin = 2 * Config::FIT_MARGIN;
        let width = (max.x - min.x + 1 + margin) as f32;
        let height = (max.y - min.y + 1 + margin) as f32;
        self.scale = ((size.x / width).min(size.y / height) / Config::PIXELS_PER_CELL)
            .clamp(Config::MIN_SCALE, Config::MAX_SCALE);

        let cells = size / self.cell_size();
        let center = Cell::new((min.x + max.x).div_euclid(2), (min.y + max.y).div_euclid(2));
        self.top_left = center.offset(-(cells.x as i64) / 2, -(cells.y as i64) / 2);
        self.drag_remainder = Vec2::ZERO;
    }
}
