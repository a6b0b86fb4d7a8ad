use crate::domain::Coord;

pub const MIN_ZOOM: f32 = 0.2;
pub const MAX_ZOOM: f32 = 10.0;

/// Camera maps the unbounded cell plane onto the window.
/// Column maps to screen x, row maps to screen y.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32,
    /// Last cursor position of an in-progress pan drag
    drag_anchor: Option<(f32, f32)>,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
            drag_anchor: None,
        }
    }

    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Follow a drag: pans by the cursor movement since the previous call
    pub fn drag_to(&mut self, pos: (f32, f32)) {
        if let Some((last_x, last_y)) = self.drag_anchor {
            self.pan(pos.0 - last_x, pos.1 - last_y);
        }
        self.drag_anchor = Some(pos);
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Cell under a screen position; floors so negative cells map correctly
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32, cell_size: f32) -> Coord {
        let size = cell_size * self.zoom;
        let col = ((screen_x - self.offset_x) / size).floor() as i64;
        let row = ((screen_y - self.offset_y) / size).floor() as i64;
        Coord::new(row, col)
    }

    /// Top-left screen corner of a cell
    pub fn grid_to_screen(&self, cell: Coord, cell_size: f32) -> (f32, f32) {
        let size = cell_size * self.zoom;
        (
            cell.col as f32 * size + self.offset_x,
            cell.row as f32 * size + self.offset_y,
        )
    }

    /// Inclusive range of cells visible in the viewport as (top-left, bottom-right)
    pub fn visible_bounds(&self, viewport_width: f32, viewport_height: f32, cell_size: f32) -> (Coord, Coord) {
        (
            self.screen_to_grid(0.0, 0.0, cell_size),
            self.screen_to_grid(viewport_width, viewport_height, cell_size),
        )
    }

    /// Pan so that `cell` sits in the middle of the viewport, keeping the zoom
    pub fn center_on(&mut self, cell: Coord, viewport_width: f32, viewport_height: f32, cell_size: f32) {
        let size = cell_size * self.zoom;
        self.offset_x = viewport_width / 2.0 - (cell.col as f32 + 0.5) * size;
        self.offset_y = viewport_height / 2.0 - (cell.row as f32 + 0.5) * size;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
